use std::path::{Path, PathBuf};

use log::{debug, error, info};
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Result as NotifyResult, Watcher};

use crate::builder::watcher::signal::{rebuild_channel, RebuildSignal, RebuildWorker};
use crate::utils::error::BananaResult;
use crate::utils::path::is_within;

/// A running watch; rebuilds stop once it is closed or dropped
pub struct Subscription {
    watcher: Option<RecommendedWatcher>,
    worker: RebuildWorker,
}

impl Subscription {
    /// Release the OS watches and stop the rebuild worker
    ///
    /// A rebuild already in flight may finish; none starts afterwards.
    pub fn close(&mut self) {
        if self.watcher.take().is_some() {
            debug!("Watcher released");
        }
        self.worker.shutdown();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.close();
    }
}

/// Watch every directory in `directories` non-recursively and call
/// `on_change` for coalesced change requests
///
/// Events whose paths all lie inside `ignore_root` are dropped.
pub fn watch<F>(directories: &[PathBuf], ignore_root: Option<PathBuf>, on_change: F) -> BananaResult<Subscription>
where
    F: FnMut() -> BananaResult<()> + Send + 'static,
{
    let (signal, requests) = rebuild_channel();
    let worker = RebuildWorker::spawn(&signal, requests, on_change)?;

    let mut watcher = notify::recommended_watcher(move |res: NotifyResult<Event>| {
        handle_event(res, ignore_root.as_deref(), &signal);
    })?;

    for directory in directories {
        watcher.watch(directory, RecursiveMode::NonRecursive)?;
    }
    info!("Watching {} director(ies) for changes", directories.len());

    Ok(Subscription {
        watcher: Some(watcher),
        worker,
    })
}

/// Turn one watcher callback into at most one rebuild request
///
/// Errors are logged and never stop the watch. Returns whether a request
/// was queued.
fn handle_event(res: NotifyResult<Event>, ignore_root: Option<&Path>, signal: &RebuildSignal) -> bool {
    match res {
        Ok(event) if is_rebuild_event(&event, ignore_root) => {
            debug!("File event: {:?} {:?}", event.kind, event.paths);
            signal.request()
        }
        Ok(_) => false,
        Err(e) => {
            error!("Watch error: {}", e);
            false
        }
    }
}

/// Whether an event should request a rebuild
pub fn is_rebuild_event(event: &Event, ignore_root: Option<&Path>) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Create(_)
            | EventKind::Remove(_)
            | EventKind::Modify(ModifyKind::Data(_))
            | EventKind::Modify(ModifyKind::Name(_))
            | EventKind::Modify(ModifyKind::Any)
    );
    if !relevant {
        return false;
    }

    match ignore_root {
        Some(root) if !event.paths.is_empty() => !event.paths.iter().all(|p| is_within(p, root)),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, MetadataKind, RemoveKind};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc::channel;
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_relevant_event_kinds() {
        assert!(is_rebuild_event(&event(EventKind::Create(CreateKind::File), "/site/posts/a.md"), None));
        assert!(is_rebuild_event(&event(EventKind::Remove(RemoveKind::Any), "/site/posts/a.md"), None));
        assert!(is_rebuild_event(
            &event(EventKind::Modify(ModifyKind::Data(DataChange::Content)), "/site/index.tmpl"),
            None
        ));
        assert!(!is_rebuild_event(
            &event(EventKind::Modify(ModifyKind::Metadata(MetadataKind::Permissions)), "/site/index.tmpl"),
            None
        ));
        assert!(!is_rebuild_event(&event(EventKind::Access(AccessKind::Any), "/site/index.tmpl"), None));
    }

    #[test]
    fn test_output_root_events_ignored() {
        let root = Path::new("/site/_build");
        let inside = event(EventKind::Create(CreateKind::File), "/site/_build/index.html");
        let outside = event(EventKind::Create(CreateKind::File), "/site/index.tmpl");
        assert!(!is_rebuild_event(&inside, Some(root)));
        assert!(is_rebuild_event(&outside, Some(root)));

        let mixed = inside.add_path(PathBuf::from("/site/posts/a.md"));
        assert!(is_rebuild_event(&mixed, Some(root)));
    }

    #[test]
    fn test_watch_errors_are_logged_not_fatal() {
        let (signal, requests) = rebuild_channel();

        let failed = handle_event(Err(notify::Error::generic("inotify queue overflow")), None, &signal);
        assert!(!failed);
        assert!(requests.try_recv().is_err());

        let created = event(EventKind::Create(CreateKind::File), "/site/posts/a.md");
        assert!(handle_event(Ok(created), None, &signal));
        assert!(requests.try_recv().is_ok());
    }

    #[test]
    fn test_burst_of_changes_coalesces() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let mut subscription = watch(&[root.clone()], None, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(300));
            Ok(())
        })
        .unwrap();

        for i in 0..10 {
            fs::write(root.join(format!("post-{i}.md")), "hello").unwrap();
        }

        let deadline = Instant::now() + Duration::from_secs(10);
        while count.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(20));
        }
        thread::sleep(Duration::from_millis(1000));
        subscription.close();

        let runs = count.load(Ordering::SeqCst);
        assert!((1..=2).contains(&runs), "callback ran {runs} times");
    }

    #[test]
    fn test_file_change_triggers_callback() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let (tx, rx) = channel();

        let mut subscription = watch(&[root.clone()], None, move || {
            let _ = tx.send(());
            Ok(())
        })
        .unwrap();

        fs::write(root.join("index.tmpl"), "hello").unwrap();
        assert!(rx.recv_timeout(Duration::from_secs(10)).is_ok());
        subscription.close();
    }
}
