use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error};

use crate::utils::error::{BananaError, BananaResult};

/// Sending half of the capacity-one rebuild channel
#[derive(Debug, Clone)]
pub struct RebuildSignal {
    sender: SyncSender<()>,
}

impl RebuildSignal {
    /// Ask for a rebuild; returns `false` when one is already pending
    pub fn request(&self) -> bool {
        match self.sender.try_send(()) {
            Ok(()) => true,
            Err(TrySendError::Full(())) => {
                debug!("Rebuild already pending");
                false
            }
            Err(TrySendError::Disconnected(())) => false,
        }
    }
}

/// Create the coalescing channel between the event handler and the worker
pub fn rebuild_channel() -> (RebuildSignal, Receiver<()>) {
    let (sender, receiver) = sync_channel(1);
    (RebuildSignal { sender }, receiver)
}

/// Thread that runs one rebuild per pending request
///
/// The worker blocks on the request channel. Shutdown sets the closed flag
/// and pushes one wake-up through the same channel; a full channel already
/// guarantees a wake-up.
pub struct RebuildWorker {
    closed: Arc<AtomicBool>,
    waker: RebuildSignal,
    handle: Option<JoinHandle<()>>,
}

impl RebuildWorker {
    pub fn spawn<F>(signal: &RebuildSignal, requests: Receiver<()>, mut rebuild: F) -> BananaResult<Self>
    where
        F: FnMut() -> BananaResult<()> + Send + 'static,
    {
        let closed = Arc::new(AtomicBool::new(false));
        let worker_closed = Arc::clone(&closed);

        let handle = thread::Builder::new()
            .name("banana-rebuild".into())
            .spawn(move || {
                while requests.recv().is_ok() {
                    if worker_closed.load(Ordering::SeqCst) {
                        break;
                    }
                    if let Err(e) = rebuild() {
                        error!("Rebuild failed: {}", e);
                    }
                }
                debug!("Rebuild worker stopped");
            })
            .map_err(|e| BananaError::watch(format!("cannot start rebuild worker: {}", e)))?;

        Ok(RebuildWorker {
            closed,
            waker: signal.clone(),
            handle: Some(handle),
        })
    }

    /// Stop the worker; a rebuild already running is allowed to finish
    pub fn shutdown(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
        let _ = self.waker.sender.try_send(());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Rebuild worker panicked");
            }
        }
    }
}

impl Drop for RebuildWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
