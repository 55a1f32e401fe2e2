mod fs_watcher;
mod signal;
mod targets;

pub use fs_watcher::{is_rebuild_event, watch, Subscription};
pub use signal::{rebuild_channel, RebuildSignal, RebuildWorker};
pub use targets::watch_targets;
