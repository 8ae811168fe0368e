//! Comment entities: fixture comments and mock comment submissions.

use chrono::{DateTime, Local, NaiveDate};
use serde_json::Value;

/// A user comment shown on a movie detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author: String,
    pub created_at: NaiveDate,
}

/// Input for posting a comment.
///
/// Fields are echoed back verbatim, so they keep whatever JSON type the
/// client sent. `None` means the key was absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewComment {
    pub text: Option<Value>,
    pub author: Option<Value>,
    pub author_user_id: Option<Value>,
    pub movie_id: Option<Value>,
}

/// A comment accepted by the mock. Nothing is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedComment {
    pub id: String,
    pub text: Value,
    pub author: Value,
    pub author_user_id: Value,
    pub movie_id: Value,
    pub created_at: DateTime<Local>,
}
