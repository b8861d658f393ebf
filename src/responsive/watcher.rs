//! Debounced resize watcher: a tokio task that re-evaluates the active tier.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{timeout_at, Instant};

use crate::responsive::tracker::{TierChange, TierTracker};
use crate::theme::{Breakpoints, Viewport};

/// What a running watcher can be told.
#[derive(Debug, Clone)]
pub(crate) enum WatchMessage {
    Resize(Viewport),
    /// The active theme changed; evaluate against this table from now on.
    Breakpoints(Breakpoints),
}

/// Sending half handed to whatever observes window or container resizes.
///
/// Dropping every notifier stops the watcher task once it has flushed the
/// pending window.
#[derive(Debug, Clone)]
pub struct ResizeNotifier {
    tx: mpsc::UnboundedSender<WatchMessage>,
}

impl ResizeNotifier {
    /// Report a new size. Returns `false` if the watcher has stopped.
    pub fn notify(&self, viewport: Viewport) -> bool {
        self.tx.send(WatchMessage::Resize(viewport)).is_ok()
    }

    pub fn notify_width(&self, width: f32) -> bool {
        self.notify(Viewport::new(width))
    }

    /// Hand the watcher a new breakpoint table. The last observed width is
    /// re-evaluated against it when the current window closes.
    pub fn set_breakpoints(&self, breakpoints: Breakpoints) -> bool {
        self.tx.send(WatchMessage::Breakpoints(breakpoints)).is_ok()
    }

    /// A handle that does not keep the watcher alive.
    pub(crate) fn downgrade(&self) -> mpsc::WeakUnboundedSender<WatchMessage> {
        self.tx.downgrade()
    }
}

/// Spawn a debounced watcher on the current tokio runtime.
///
/// The first notification after a quiet period opens a window of length
/// `window`; every notification inside it is coalesced and only the last
/// width is evaluated when the window closes. The window does not slide, so
/// continuous resizing still yields one evaluation per window. A
/// [`TierChange`] is sent only when the tier actually moves.
///
/// Breakpoint updates count as notifications: they are applied in arrival
/// order and the window closes with one evaluation against the newest table.
pub fn spawn_watcher(
    tracker: TierTracker,
    window: Duration,
) -> (ResizeNotifier, mpsc::UnboundedReceiver<TierChange>) {
    let (notify_tx, notify_rx) = mpsc::unbounded_channel();
    let (change_tx, change_rx) = mpsc::unbounded_channel();
    tokio::spawn(run(tracker, window, notify_rx, change_tx));
    (ResizeNotifier { tx: notify_tx }, change_rx)
}

async fn run(
    mut tracker: TierTracker,
    window: Duration,
    mut notifications: mpsc::UnboundedReceiver<WatchMessage>,
    changes: mpsc::UnboundedSender<TierChange>,
) {
    while let Some(first) = notifications.recv().await {
        let deadline = Instant::now() + window;
        let mut latest = tracker.width();
        apply(&mut tracker, first, &mut latest);
        let mut closed = false;
        loop {
            match timeout_at(deadline, notifications.recv()).await {
                Ok(Some(message)) => apply(&mut tracker, message, &mut latest),
                Ok(None) => {
                    closed = true;
                    break;
                }
                Err(_elapsed) => break,
            }
        }

        if let Some(change) = tracker.observe(latest) {
            if changes.send(change).is_err() {
                return;
            }
        }
        if closed {
            return;
        }
    }
}

fn apply(tracker: &mut TierTracker, message: WatchMessage, latest: &mut f32) {
    match message {
        WatchMessage::Resize(viewport) => *latest = viewport.width,
        WatchMessage::Breakpoints(breakpoints) => tracker.replace_breakpoints(breakpoints),
    }
}
