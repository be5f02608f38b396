pub mod classes;
pub mod config;
pub mod error;
pub mod tracing;

pub use classes::{ClassesClient, TeacherSearch};
pub use config::{ClientConfig, Environment};
pub use error::SearchError;
