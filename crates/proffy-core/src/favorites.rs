//! Favorites reconciliation.
//!
//! Favorites are persisted locally as full teacher records. Screens only need
//! to know whether a given teacher is a favorite, so the persisted records are
//! projected down to a set of identifiers that is rebuilt from scratch every
//! time the owning screen regains focus.

use std::collections::HashSet;

use crate::model::{Teacher, TeacherId};

/// Set of teacher identifiers currently marked as favorite.
///
/// Derived from persisted records, never written back. Only membership
/// queries are exposed: the set carries no render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteIdSet {
    ids: HashSet<TeacherId>,
}

impl FavoriteIdSet {
    /// Empty set (no favorites)
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is a favorite
    pub fn contains(&self, id: TeacherId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of distinct favorite identifiers
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when there are no favorites
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<TeacherId> for FavoriteIdSet {
    fn from_iter<I: IntoIterator<Item = TeacherId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Decode the persisted favorites document.
///
/// The document is a JSON array of teacher records. `null` entries are
/// skipped. Returns `None` when the document is absent or cannot be decoded,
/// the caller treats both as "no favorites".
pub fn decode_favorites(raw: Option<&str>) -> Option<Vec<Teacher>> {
    let raw = raw?;
    let records: Vec<Option<Teacher>> = serde_json::from_str(raw).ok()?;
    Some(records.into_iter().flatten().collect())
}

/// Project persisted favorite records to their identifiers.
///
/// Absent input yields an empty set. Duplicated records collapse to one id.
pub fn compute_favorite_ids(persisted: Option<&[Teacher]>) -> FavoriteIdSet {
    persisted
        .unwrap_or_default()
        .iter()
        .map(|teacher| teacher.id)
        .collect()
}

/// Membership predicate evaluated for every rendered teacher row.
pub fn is_favorite(id: TeacherId, ids: &FavoriteIdSet) -> bool {
    ids.contains(id)
}
