//! Comment posting and deletion.

use crate::domain::clock::Clock;
use crate::domain::entities::{NewComment, PostedComment};
use serde_json::Value;
use std::sync::Arc;

/// Author shown for comments posted without a name ("anonymous guest").
pub const ANONYMOUS_AUTHOR: &str = "Khách ẩn danh";

pub struct CommentService {
    clock: Arc<dyn Clock>,
}

impl CommentService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Acknowledges a new comment with a `COMMENT<seconds>` identifier.
    ///
    /// Absent text and IDs default to empty strings; an absent author
    /// defaults to [`ANONYMOUS_AUTHOR`]. Present values, `null` included,
    /// are echoed unchanged.
    pub fn post(&self, comment: NewComment) -> PostedComment {
        let now = self.clock.now();
        let empty = || Value::String(String::new());

        PostedComment {
            id: format!("COMMENT{}", now.timestamp()),
            text: comment.text.unwrap_or_else(empty),
            author: comment
                .author
                .unwrap_or_else(|| Value::from(ANONYMOUS_AUTHOR)),
            author_user_id: comment.author_user_id.unwrap_or_else(empty),
            movie_id: comment.movie_id.unwrap_or_else(empty),
            created_at: now,
        }
    }

    /// Acknowledges a deletion and returns the ID that was "deleted".
    pub fn delete(&self, comment_id: Option<Value>) -> Value {
        let id = comment_id.unwrap_or_else(|| Value::String(String::new()));
        tracing::debug!(comment_id = %id, "Comment deletion acknowledged");
        id
    }
}
