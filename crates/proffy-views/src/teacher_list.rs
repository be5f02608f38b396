//! Teacher list screen: filter form, remote search and favorite markers.

use std::sync::{Mutex, MutexGuard, PoisonError};

use proffy_api::TeacherSearch;
use proffy_core::{FavoriteIdSet, FilterCriteria, Teacher, compute_favorite_ids, is_favorite};
use proffy_store::{FAVORITES_KEY, FavoritesReader};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::{
    focus::Screen,
    notify::{Notifier, SEARCH_FAILED_ALERT},
    row::TeacherRow,
};

/// Header title of the screen
pub const TITLE: &str = "Proffys Disponíveis";

/// How a call to [`TeacherSearchViewModel::submit_filters`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Results replaced and filter form closed
    Applied { count: usize },
    /// Search failed, the user was alerted and state is untouched
    Failed,
    /// A newer submission was issued meanwhile, the response was dropped
    Superseded,
}

#[derive(Debug, Default)]
struct SearchState {
    filters_visible: bool,
    criteria: FilterCriteria,
    favorite_ids: FavoriteIdSet,
    results: Vec<Teacher>,
    /// Ticket of the most recently issued search
    latest_search: u64,
}

/// View-model of the teacher list screen.
///
/// Every method takes `&self`: event callbacks may interleave at the two
/// suspension points (favorites read and search request), so state lives
/// behind a lock that is never held across an `.await`.
#[derive(Debug)]
pub struct TeacherSearchViewModel<R, S, N> {
    favorites: R,
    search: S,
    notifier: N,
    state: Mutex<SearchState>,
}

impl<R, S, N> TeacherSearchViewModel<R, S, N>
where
    R: FavoritesReader,
    S: TeacherSearch,
    N: Notifier,
{
    pub fn new(favorites: R, search: S, notifier: N) -> Self {
        Self {
            favorites,
            search,
            notifier,
            state: Mutex::new(SearchState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn filters_visible(&self) -> bool {
        self.state().filters_visible
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.state().criteria.clone()
    }

    pub fn favorite_ids(&self) -> FavoriteIdSet {
        self.state().favorite_ids.clone()
    }

    /// Teachers returned by the last applied search, empty before the first
    pub fn results(&self) -> Vec<Teacher> {
        self.state().results.clone()
    }

    /// Rows to render, favorite markers evaluated against the current
    /// favorites on every call.
    pub fn rows(&self) -> Vec<TeacherRow> {
        let state = self.state();
        state
            .results
            .iter()
            .map(|teacher| TeacherRow {
                teacher: teacher.clone(),
                is_favorite: is_favorite(teacher.id, &state.favorite_ids),
            })
            .collect()
    }

    pub fn set_subject(&self, subject: impl Into<String>) {
        self.state().criteria.subject = subject.into();
    }

    pub fn set_week_day(&self, week_day: impl Into<String>) {
        self.state().criteria.week_day = week_day.into();
    }

    pub fn set_time(&self, time: impl Into<String>) {
        self.state().criteria.time = time.into();
    }

    pub fn set_criteria(&self, criteria: FilterCriteria) {
        self.state().criteria = criteria;
    }

    /// Show or hide the filter form. Returns the new visibility.
    pub fn toggle_filter_visibility(&self) -> bool {
        let mut state = self.state();
        state.filters_visible = !state.filters_visible;
        state.filters_visible
    }

    /// Reload favorites from storage.
    ///
    /// Runs on every focus, not only the first. Results and criteria are
    /// left alone.
    pub async fn on_screen_focus(&self) {
        let persisted = self.favorites.read(FAVORITES_KEY).await;
        let favorite_ids = compute_favorite_ids(persisted.as_deref());

        tracing::debug!(count = favorite_ids.len(), "Favorites reloaded");
        self.state().favorite_ids = favorite_ids;
    }

    /// Reload favorites each time the teacher list gains focus, until the
    /// focus hub is dropped.
    pub async fn follow_focus(&self, mut events: broadcast::Receiver<Screen>) {
        loop {
            match events.recv().await {
                Ok(Screen::TeacherList) => self.on_screen_focus().await,
                Ok(_) => {}
                Err(RecvError::Lagged(missed)) => {
                    // Reloads are idempotent, one catches up for all missed
                    tracing::debug!(missed, "Focus events lagged");
                    self.on_screen_focus().await;
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    /// Search with the current criteria.
    ///
    /// Favorites are reloaded before the request goes out. Only the most
    /// recently issued search may change state: responses to older ones are
    /// dropped, failures included.
    pub async fn submit_filters(&self) -> SubmitOutcome {
        self.on_screen_focus().await;

        let (criteria, ticket) = {
            let mut state = self.state();
            state.latest_search += 1;
            (state.criteria.clone(), state.latest_search)
        };

        let result = self.search.search(&criteria).await;

        let mut state = self.state();
        if state.latest_search != ticket {
            tracing::debug!(ticket, latest = state.latest_search, "Dropping stale search response");
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(teachers) => {
                let count = teachers.len();
                state.filters_visible = false;
                state.results = teachers;
                tracing::debug!(count, "Search results applied");
                SubmitOutcome::Applied { count }
            }
            Err(e) => {
                drop(state);
                tracing::warn!(error = %e, "Search failed");
                self.notifier.alert(&SEARCH_FAILED_ALERT);
                SubmitOutcome::Failed
            }
        }
    }
}
