//! Mutation API: entity CRUD, response/reference upsert, selection
//!
//! These methods are the only producer of identifiers and timestamps; they
//! construct well-formed entities, dispatch actions into the store, and
//! return the affected entity. Updates on a missing id are silent no-ops.
//! Input validation (e.g. rejecting blank titles) is the calling UI's job.

use chrono::Utc;
use revhub_domain::{Comment, Manuscript, Reference, Response, Reviewer};

use crate::state::Action;
use crate::store::Store;

impl Store {
    /// Create a manuscript and append it to the store.
    pub fn add_manuscript(&mut self, title: String) -> Manuscript {
        let manuscript = Manuscript::new(title);
        self.dispatch(Action::AddManuscript(manuscript.clone()));
        manuscript
    }

    /// Replace a manuscript's title, bumping `updated_at`.
    pub fn update_manuscript(&mut self, id: &str, title: String) {
        if let Some(existing) = self.state().manuscripts.iter().find(|m| m.id == id) {
            let mut updated = existing.clone();
            updated.title = title;
            updated.updated_at = Utc::now();
            self.dispatch(Action::UpdateManuscript(updated));
        }
    }

    /// Delete a manuscript and every descendant entity.
    pub fn delete_manuscript(&mut self, id: &str) {
        self.dispatch(Action::DeleteManuscript(id.to_string()));
    }

    /// Create a reviewer under the given manuscript.
    pub fn add_reviewer(&mut self, name: String, manuscript_id: String) -> Reviewer {
        let reviewer = Reviewer::new(name, manuscript_id);
        self.dispatch(Action::AddReviewer(reviewer.clone()));
        reviewer
    }

    /// Replace a reviewer's name, bumping `updated_at`.
    pub fn update_reviewer(&mut self, id: &str, name: String) {
        if let Some(existing) = self.state().reviewers.iter().find(|r| r.id == id) {
            let mut updated = existing.clone();
            updated.name = name;
            updated.updated_at = Utc::now();
            self.dispatch(Action::UpdateReviewer(updated));
        }
    }

    /// Delete a reviewer and its comments, responses, and references.
    pub fn delete_reviewer(&mut self, id: &str) {
        self.dispatch(Action::DeleteReviewer(id.to_string()));
    }

    /// Create a comment under the given reviewer and manuscript.
    pub fn add_comment(
        &mut self,
        text: String,
        reviewer_id: String,
        manuscript_id: String,
    ) -> Comment {
        let comment = Comment::new(text, reviewer_id, manuscript_id);
        self.dispatch(Action::AddComment(comment.clone()));
        comment
    }

    /// Replace a comment's text, bumping `updated_at`.
    pub fn update_comment(&mut self, id: &str, text: String) {
        if let Some(existing) = self.state().comments.iter().find(|c| c.id == id) {
            let mut updated = existing.clone();
            updated.text = text;
            updated.updated_at = Utc::now();
            self.dispatch(Action::UpdateComment(updated));
        }
    }

    /// Delete a comment and its response and reference.
    pub fn delete_comment(&mut self, id: &str) {
        self.dispatch(Action::DeleteComment(id.to_string()));
    }

    /// Upsert the single response for a comment.
    ///
    /// If a response keyed by `comment_id` exists its text is replaced and
    /// `updated_at` bumped, keeping id, `created_at`, and parent references;
    /// otherwise a fresh response is created. This is the sole enforcement
    /// point of the at-most-one-response-per-comment invariant.
    pub fn save_response(
        &mut self,
        text: String,
        comment_id: String,
        reviewer_id: String,
        manuscript_id: String,
    ) -> Response {
        let existing = self
            .state()
            .responses
            .iter()
            .find(|r| r.comment_id == comment_id);
        match existing {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.text = text;
                updated.updated_at = Utc::now();
                self.dispatch(Action::UpdateResponse(updated.clone()));
                updated
            }
            None => {
                let response = Response::new(text, comment_id, reviewer_id, manuscript_id);
                self.dispatch(Action::AddResponse(response.clone()));
                response
            }
        }
    }

    /// Upsert the single reference for a comment; mirrors [`Store::save_response`].
    pub fn save_reference(
        &mut self,
        text: String,
        comment_id: String,
        reviewer_id: String,
        manuscript_id: String,
    ) -> Reference {
        let existing = self
            .state()
            .references
            .iter()
            .find(|r| r.comment_id == comment_id);
        match existing {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.text = text;
                updated.updated_at = Utc::now();
                self.dispatch(Action::UpdateReference(updated.clone()));
                updated
            }
            None => {
                let reference = Reference::new(text, comment_id, reviewer_id, manuscript_id);
                self.dispatch(Action::AddReference(reference.clone()));
                reference
            }
        }
    }

    /// Select a manuscript (or clear the selection with `None`).
    pub fn select_manuscript(&mut self, id: Option<String>) {
        self.dispatch(Action::SelectManuscript(id));
    }

    /// Select a reviewer (or clear the selection with `None`).
    pub fn select_reviewer(&mut self, id: Option<String>) {
        self.dispatch(Action::SelectReviewer(id));
    }

    /// Select a comment (or clear the selection with `None`).
    pub fn select_comment(&mut self, id: Option<String>) {
        self.dispatch(Action::SelectComment(id));
    }
}
