//! Notifications from the editor core to whoever is watching it.
//!
//! Events go out over a `tokio::sync::broadcast` channel. `send` never
//! blocks and needs no runtime. A receiver that falls behind sees
//! `Lagged` and has to resync from the document.

use crate::theme::ThemeMode;
use std::path::PathBuf;
use tokio::sync::broadcast;

/// How many events a slow receiver may fall behind.
const CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A file was loaded into the document
    DocumentOpened(PathBuf),
    /// The document was written to this path
    DocumentSaved(PathBuf),
    /// The document was replaced by an empty Untitled one
    DocumentCleared,
    DocumentChanged,
    CursorMoved,
    ThemeChanged(ThemeMode),
    Quit,
}

/// Sending half of the editor's event channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EditorEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            sender: broadcast::channel(CAPACITY).0,
        }
    }

    pub fn emit(&self, event: EditorEvent) {
        // Err only means nobody is subscribed
        if self.sender.send(event).is_err() {
            tracing::trace!("Editor event dropped, no subscribers");
        }
    }

    /// Receives every event emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[tokio::test]
    async fn test_subscriber_receives_in_order() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(EditorEvent::DocumentCleared);
        bus.emit(EditorEvent::ThemeChanged(ThemeMode::Dark));

        assert_eq!(rx.recv().await.unwrap(), EditorEvent::DocumentCleared);
        assert_eq!(
            rx.recv().await.unwrap(),
            EditorEvent::ThemeChanged(ThemeMode::Dark)
        );
    }

    #[test]
    fn test_clones_share_one_channel() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.clone().emit(EditorEvent::Quit);
        assert_eq!(rx.try_recv(), Ok(EditorEvent::Quit));
    }

    #[test]
    fn test_late_subscriber_misses_earlier_events() {
        let bus = EventBus::new();
        bus.emit(EditorEvent::DocumentChanged);

        let mut rx = bus.subscribe();
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_slow_receiver_is_told_it_lagged() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        for _ in 0..CAPACITY + 3 {
            bus.emit(EditorEvent::CursorMoved);
        }
        assert_eq!(rx.try_recv(), Err(TryRecvError::Lagged(3)));
    }
}
