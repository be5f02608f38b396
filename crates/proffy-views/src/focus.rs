//! Screen focus events.
//!
//! The navigation layer emits a [`Screen`] every time a screen gains focus,
//! including when the user navigates back to a screen that was already
//! mounted. View-models subscribe instead of hooking into a lifecycle.

use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 16;

/// Screens of the teacher section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Favorites,
    TeacherList,
}

/// Broadcast hub for focus events.
///
/// Dropping the last clone of the hub closes every subscription.
#[derive(Debug, Clone)]
pub struct FocusEvents {
    sender: broadcast::Sender<Screen>,
}

impl FocusEvents {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Notify subscribers that `screen` gained focus.
    ///
    /// Returns the number of subscribers reached.
    pub fn emit(&self, screen: Screen) -> usize {
        tracing::debug!(?screen, "Screen focused");
        self.sender.send(screen).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Screen> {
        self.sender.subscribe()
    }
}

impl Default for FocusEvents {
    fn default() -> Self {
        Self::new()
    }
}
