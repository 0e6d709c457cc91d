//! Read-side queries over the entity graph
//!
//! Denormalized views the UI renders from: per-parent lookups, progress
//! stats, and the full manuscript -> reviewer -> comment outline with each
//! comment's response and reference inlined.

use revhub_domain::{Comment, Manuscript, Reference, Response, Reviewer};

use crate::state::AppState;

pub fn reviewers_for_manuscript<'a>(
    state: &'a AppState,
    manuscript_id: &str,
) -> Vec<&'a Reviewer> {
    state
        .reviewers
        .iter()
        .filter(|r| r.manuscript_id == manuscript_id)
        .collect()
}

pub fn comments_for_reviewer<'a>(state: &'a AppState, reviewer_id: &str) -> Vec<&'a Comment> {
    state
        .comments
        .iter()
        .filter(|c| c.reviewer_id == reviewer_id)
        .collect()
}

pub fn comments_for_manuscript<'a>(state: &'a AppState, manuscript_id: &str) -> Vec<&'a Comment> {
    state
        .comments
        .iter()
        .filter(|c| c.manuscript_id == manuscript_id)
        .collect()
}

pub fn response_for_comment<'a>(state: &'a AppState, comment_id: &str) -> Option<&'a Response> {
    state.responses.iter().find(|r| r.comment_id == comment_id)
}

pub fn reference_for_comment<'a>(state: &'a AppState, comment_id: &str) -> Option<&'a Reference> {
    state.references.iter().find(|r| r.comment_id == comment_id)
}

/// Per-manuscript counters shown next to each manuscript.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManuscriptStats {
    pub total_reviewers: usize,
    pub total_comments: usize,
}

pub fn manuscript_stats(state: &AppState, manuscript_id: &str) -> ManuscriptStats {
    ManuscriptStats {
        total_reviewers: reviewers_for_manuscript(state, manuscript_id).len(),
        total_comments: comments_for_manuscript(state, manuscript_id).len(),
    }
}

/// Per-reviewer counters. A comment counts as pending until it has both a
/// non-blank response and a non-blank reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReviewerStats {
    pub total_comments: usize,
    pub pending_count: usize,
}

pub fn reviewer_stats(state: &AppState, reviewer_id: &str) -> ReviewerStats {
    let comments = comments_for_reviewer(state, reviewer_id);
    let pending_count = comments
        .iter()
        .filter(|comment| {
            let has_response = response_for_comment(state, &comment.id)
                .map(|r| !r.text.trim().is_empty())
                .unwrap_or(false);
            let has_reference = reference_for_comment(state, &comment.id)
                .map(|r| !r.text.trim().is_empty())
                .unwrap_or(false);
            !has_response || !has_reference
        })
        .count();
    ReviewerStats {
        total_comments: comments.len(),
        pending_count,
    }
}

/// One comment in the outline, with its response and reference text inlined.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentOutline {
    pub comment: Comment,
    pub response: Option<String>,
    pub reference: Option<String>,
}

/// One reviewer in the outline with their comments in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewerOutline {
    pub reviewer: Reviewer,
    pub comments: Vec<CommentOutline>,
}

/// One manuscript with its full reviewer/comment subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct ManuscriptOutline {
    pub manuscript: Manuscript,
    pub reviewers: Vec<ReviewerOutline>,
}

/// Denormalize the whole graph into the manuscript -> reviewer -> comment
/// tree the preview document renders.
pub fn outline(state: &AppState) -> Vec<ManuscriptOutline> {
    state
        .manuscripts
        .iter()
        .map(|manuscript| ManuscriptOutline {
            manuscript: manuscript.clone(),
            reviewers: reviewers_for_manuscript(state, &manuscript.id)
                .into_iter()
                .map(|reviewer| ReviewerOutline {
                    reviewer: reviewer.clone(),
                    comments: comments_for_reviewer(state, &reviewer.id)
                        .into_iter()
                        .map(|comment| CommentOutline {
                            comment: comment.clone(),
                            response: response_for_comment(state, &comment.id)
                                .map(|r| r.text.clone()),
                            reference: reference_for_comment(state, &comment.id)
                                .map(|r| r.text.clone()),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
