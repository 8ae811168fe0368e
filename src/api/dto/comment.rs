//! DTOs for comment endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wall_clock;
use crate::domain::entities::{Comment, NewComment, PostedComment};

/// Confirmation message for a deletion ("comment deleted successfully").
pub const COMMENT_DELETED_MESSAGE: &str = "Xóa bình luận thành công!";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentItem {
    pub id: i64,
    pub content: String,
    pub user: CommentAuthor,
    pub created_at: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct CommentAuthor {
    pub name: String,
}

impl From<Comment> for CommentItem {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            content: c.content,
            user: CommentAuthor { name: c.author },
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentCountResponse {
    pub count: u64,
}

/// Body of `POST /api/movie/comments/add`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    #[serde(default, deserialize_with = "super::present")]
    pub comment_text: Option<Value>,
    #[serde(default, deserialize_with = "super::present")]
    pub comment_by: Option<Value>,
    #[serde(default, deserialize_with = "super::present")]
    pub comment_by_user_id: Option<Value>,
    #[serde(default, deserialize_with = "super::present")]
    pub movie_id: Option<Value>,
}

impl From<AddCommentRequest> for NewComment {
    fn from(r: AddCommentRequest) -> Self {
        Self {
            text: r.comment_text,
            author: r.comment_by,
            author_user_id: r.comment_by_user_id,
            movie_id: r.movie_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub comment_id: String,
    pub comment_text: Value,
    pub comment_by: Value,
    pub comment_by_user_id: Value,
    pub movie_id: Value,
    pub created_at: String,
}

impl From<PostedComment> for CommentResponse {
    fn from(c: PostedComment) -> Self {
        Self {
            comment_id: c.id,
            comment_text: c.text,
            comment_by: c.author,
            comment_by_user_id: c.author_user_id,
            movie_id: c.movie_id,
            created_at: wall_clock(&c.created_at),
        }
    }
}

/// Body of `POST /api/movie/comments/delete`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentRequest {
    #[serde(default, deserialize_with = "super::present")]
    pub comment_id: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentResponse {
    pub success: bool,
    pub message: &'static str,
    pub deleted_comment_id: Value,
}

impl DeleteCommentResponse {
    pub fn new(deleted_comment_id: Value) -> Self {
        Self {
            success: true,
            message: COMMENT_DELETED_MESSAGE,
            deleted_comment_id,
        }
    }
}
