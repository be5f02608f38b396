//! View-models for the teacher screens.
//!
//! Rendering and navigation live outside this crate. Screens read state from
//! the view-models, forward user events to them and subscribe them to focus
//! events.

pub mod favorites;
pub mod focus;
pub mod notify;
pub mod row;
pub mod teacher_list;

pub use favorites::FavoritesViewModel;
pub use focus::{FocusEvents, Screen};
pub use notify::{Alert, Notifier, SEARCH_FAILED_ALERT, TracingNotifier};
pub use row::TeacherRow;
pub use teacher_list::{SubmitOutcome, TeacherSearchViewModel};
