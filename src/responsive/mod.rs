//! Breakpoint re-evaluation driven by resize notifications.
//!
//! [`TierTracker`] is the synchronous part: it remembers the active tier and
//! reports a [`TierChange`] only when a new width crosses a breakpoint.
//! [`spawn_watcher`] runs a tracker on a tokio task behind a debounce window,
//! so a burst of resize events costs one re-evaluation.

pub mod tracker;
pub mod watcher;

use std::time::Duration;

pub use tracker::{TierChange, TierTracker};
pub use watcher::{spawn_watcher, ResizeNotifier};

/// Default debounce window for resize notifications.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(32);
