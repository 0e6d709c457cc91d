//! Shared strategies for property-based tests

use proptest::prelude::*;
use revhub_core::{AppState, Store};

pub fn entity_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,]{0,40}"
}

type CommentSpec = (String, Option<String>, Option<String>);
type ReviewerSpec = (String, Vec<CommentSpec>);
type ManuscriptSpec = (String, Vec<ReviewerSpec>);

/// Generate a state reachable through the mutation API: a random
/// manuscript/reviewer/comment tree with optional responses and references,
/// plus an optional selection of the first manuscript.
pub fn reachable_state() -> impl Strategy<Value = AppState> {
    let comments = prop::collection::vec(
        (
            entity_text(),
            prop::option::of(entity_text()),
            prop::option::of(entity_text()),
        ),
        0..3,
    );
    let reviewers = prop::collection::vec((entity_text(), comments), 0..3);
    let manuscripts = prop::collection::vec((entity_text(), reviewers), 0..3);

    (manuscripts, any::<bool>()).prop_map(|(manuscripts, select_first)| {
        build_state(manuscripts, select_first)
    })
}

fn build_state(manuscripts: Vec<ManuscriptSpec>, select_first: bool) -> AppState {
    let mut store = Store::new();
    for (title, reviewers) in manuscripts {
        let manuscript = store.add_manuscript(title);
        for (name, comments) in reviewers {
            let reviewer = store.add_reviewer(name, manuscript.id.clone());
            for (text, response, reference) in comments {
                let comment =
                    store.add_comment(text, reviewer.id.clone(), manuscript.id.clone());
                if let Some(response) = response {
                    store.save_response(
                        response,
                        comment.id.clone(),
                        reviewer.id.clone(),
                        manuscript.id.clone(),
                    );
                }
                if let Some(reference) = reference {
                    store.save_reference(
                        reference,
                        comment.id.clone(),
                        reviewer.id.clone(),
                        manuscript.id.clone(),
                    );
                }
            }
        }
    }
    if select_first {
        if let Some(first) = store.state().manuscripts.first().map(|m| m.id.clone()) {
            store.select_manuscript(Some(first));
        }
    }
    store.state().clone()
}
