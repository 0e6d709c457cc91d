//! Application state and the pure transition function

use revhub_domain::{Comment, Manuscript, Reference, Response, Reviewer};
use serde::{Deserialize, Serialize};

/// The complete in-memory state: five ordered entity collections plus the
/// drill-down selection pointers.
///
/// Collections preserve insertion order; updates replace elements in place
/// without reordering. Serializes with camelCase field names so the JSON
/// matches the persisted snapshot layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub manuscripts: Vec<Manuscript>,
    pub reviewers: Vec<Reviewer>,
    pub comments: Vec<Comment>,
    pub responses: Vec<Response>,
    pub references: Vec<Reference>,
    pub selected_manuscript_id: Option<String>,
    pub selected_reviewer_id: Option<String>,
    pub selected_comment_id: Option<String>,
}

/// A state transition over [`AppState`].
///
/// One variant per action kind; [`apply`] handles every variant with an
/// exhaustive match, so every action has a defined result state.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetManuscripts(Vec<Manuscript>),
    AddManuscript(Manuscript),
    UpdateManuscript(Manuscript),
    DeleteManuscript(String),

    SetReviewers(Vec<Reviewer>),
    AddReviewer(Reviewer),
    UpdateReviewer(Reviewer),
    DeleteReviewer(String),

    SetComments(Vec<Comment>),
    AddComment(Comment),
    UpdateComment(Comment),
    DeleteComment(String),

    SetResponses(Vec<Response>),
    AddResponse(Response),
    UpdateResponse(Response),
    DeleteResponse(String),

    SetReferences(Vec<Reference>),
    AddReference(Reference),
    UpdateReference(Reference),
    DeleteReference(String),

    SelectManuscript(Option<String>),
    SelectReviewer(Option<String>),
    SelectComment(Option<String>),
}

/// Apply one action to the state, producing the next state.
///
/// Pure, total, and synchronous: the input is consumed, never observed again,
/// and every action yields a defined result. Update actions on a missing id
/// are silent no-ops. No action validates parent references; the mutation
/// layer is the sole producer of well-formed actions.
pub fn apply(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetManuscripts(manuscripts) => {
            state.manuscripts = manuscripts;
        }
        Action::AddManuscript(manuscript) => {
            state.manuscripts.push(manuscript);
        }
        Action::UpdateManuscript(manuscript) => {
            if let Some(slot) = state.manuscripts.iter_mut().find(|m| m.id == manuscript.id) {
                *slot = manuscript;
            }
        }
        Action::DeleteManuscript(id) => {
            // Cascade across every descendant collection.
            state.manuscripts.retain(|m| m.id != id);
            state.reviewers.retain(|r| r.manuscript_id != id);
            state.comments.retain(|c| c.manuscript_id != id);
            state.responses.retain(|r| r.manuscript_id != id);
            state.references.retain(|r| r.manuscript_id != id);
            if state.selected_manuscript_id.as_deref() == Some(id.as_str()) {
                state.selected_manuscript_id = None;
            }
        }

        Action::SetReviewers(reviewers) => {
            state.reviewers = reviewers;
        }
        Action::AddReviewer(reviewer) => {
            state.reviewers.push(reviewer);
        }
        Action::UpdateReviewer(reviewer) => {
            if let Some(slot) = state.reviewers.iter_mut().find(|r| r.id == reviewer.id) {
                *slot = reviewer;
            }
        }
        Action::DeleteReviewer(id) => {
            state.reviewers.retain(|r| r.id != id);
            state.comments.retain(|c| c.reviewer_id != id);
            state.responses.retain(|r| r.reviewer_id != id);
            state.references.retain(|r| r.reviewer_id != id);
            if state.selected_reviewer_id.as_deref() == Some(id.as_str()) {
                state.selected_reviewer_id = None;
            }
        }

        Action::SetComments(comments) => {
            state.comments = comments;
        }
        Action::AddComment(comment) => {
            state.comments.push(comment);
        }
        Action::UpdateComment(comment) => {
            if let Some(slot) = state.comments.iter_mut().find(|c| c.id == comment.id) {
                *slot = comment;
            }
        }
        Action::DeleteComment(id) => {
            state.comments.retain(|c| c.id != id);
            state.responses.retain(|r| r.comment_id != id);
            state.references.retain(|r| r.comment_id != id);
            if state.selected_comment_id.as_deref() == Some(id.as_str()) {
                state.selected_comment_id = None;
            }
        }

        Action::SetResponses(responses) => {
            state.responses = responses;
        }
        Action::AddResponse(response) => {
            state.responses.push(response);
        }
        Action::UpdateResponse(response) => {
            if let Some(slot) = state.responses.iter_mut().find(|r| r.id == response.id) {
                *slot = response;
            }
        }
        Action::DeleteResponse(id) => {
            state.responses.retain(|r| r.id != id);
        }

        Action::SetReferences(references) => {
            state.references = references;
        }
        Action::AddReference(reference) => {
            state.references.push(reference);
        }
        Action::UpdateReference(reference) => {
            if let Some(slot) = state.references.iter_mut().find(|r| r.id == reference.id) {
                *slot = reference;
            }
        }
        Action::DeleteReference(id) => {
            state.references.retain(|r| r.id != id);
        }

        // Selecting a manuscript resets the deeper pointers; selecting a
        // reviewer resets the comment pointer. Drill-down hierarchy.
        Action::SelectManuscript(id) => {
            state.selected_manuscript_id = id;
            state.selected_reviewer_id = None;
            state.selected_comment_id = None;
        }
        Action::SelectReviewer(id) => {
            state.selected_reviewer_id = id;
            state.selected_comment_id = None;
        }
        Action::SelectComment(id) => {
            state.selected_comment_id = id;
        }
    }
    state
}
