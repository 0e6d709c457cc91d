//! The authoritative state container
//!
//! One `Store` owns the live [`AppState`]. Every transition runs through
//! [`Store::dispatch`], which applies the pure transition function and then
//! notifies an injected observer with the new state. The observer is how
//! persistence mirrors the store: it must swallow its own failures
//! (fire-and-forget), because a failed save never rolls back the in-memory
//! transition.

use crate::state::{apply, Action, AppState};

/// Callback invoked with the new state after every transition.
pub type ChangeObserver = Box<dyn FnMut(&AppState)>;

/// Explicit state container with an injected persistence observer.
pub struct Store {
    state: AppState,
    observer: Option<ChangeObserver>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store seeded with a previously loaded state.
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            observer: None,
        }
    }

    /// Install the observer invoked after every transition.
    pub fn set_observer(&mut self, observer: impl FnMut(&AppState) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// The current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one action and notify the observer.
    pub fn dispatch(&mut self, action: Action) {
        self.state = apply(std::mem::take(&mut self.state), action);
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.state);
        }
    }

    /// Replace every collection and every selection pointer from a snapshot.
    ///
    /// Used by import; all-or-nothing by construction since the snapshot is
    /// fully decoded before the first dispatch.
    pub fn replace(&mut self, snapshot: AppState) {
        self.dispatch(Action::SetManuscripts(snapshot.manuscripts));
        self.dispatch(Action::SetReviewers(snapshot.reviewers));
        self.dispatch(Action::SetComments(snapshot.comments));
        self.dispatch(Action::SetResponses(snapshot.responses));
        self.dispatch(Action::SetReferences(snapshot.references));
        self.dispatch(Action::SelectManuscript(snapshot.selected_manuscript_id));
        self.dispatch(Action::SelectReviewer(snapshot.selected_reviewer_id));
        self.dispatch(Action::SelectComment(snapshot.selected_comment_id));
    }

    /// Empty every collection and null every selection pointer.
    pub fn clear(&mut self) {
        self.replace(AppState::default());
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
