//! Core domain for the Proffy teacher screens
//!
//! This crate holds the records exchanged with the classes API and the local
//! favorites storage, plus the pure logic that reconciles persisted favorites
//! against a fetched teacher list.

pub mod favorites;
pub mod model;

pub use favorites::{FavoriteIdSet, compute_favorite_ids, decode_favorites, is_favorite};
pub use model::{FilterCriteria, Teacher, TeacherId, decode_teachers};
