//! Domain types for the revhub manuscript review tracker
//!
//! This crate provides the canonical entity model:
//! - Manuscript: top-level reviewable document
//! - Reviewer: a person assigned to a manuscript
//! - Comment: a reviewer's remark about a manuscript
//! - Response: the author's reply to a comment (at most one per comment)
//! - Reference: supporting material attached to a comment (at most one per comment)
//!
//! All entities carry a UUID v4 string identifier plus creation and
//! last-modified timestamps. JSON field names are camelCase and timestamps
//! use the tagged wire encoding from [`timestamp`], so serialized entities
//! match the persisted snapshot layout byte for byte.

pub mod comment;
pub mod manuscript;
pub mod reference;
pub mod response;
pub mod reviewer;
pub mod timestamp;

pub use comment::*;
pub use manuscript::*;
pub use reference::*;
pub use response::*;
pub use reviewer::*;
