//! Handlers for movie comments.

use axum::{Json, extract::State};

use crate::api::dto::comment::{
    AddCommentRequest, CommentCountResponse, CommentItem, CommentResponse, DeleteCommentRequest,
    DeleteCommentResponse,
};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Comment count for a movie. The movie ID is not consulted.
///
/// # Endpoint
///
/// `GET /api/movie/comments/getCountOfComments/{...}`
pub async fn comment_count_handler(
    State(state): State<AppState>,
) -> Result<Json<CommentCountResponse>, AppError> {
    let count = state.catalog_service.comment_count().await?;
    tracing::info!(count, "Serving comment count");

    Ok(Json(CommentCountResponse { count }))
}

/// Comments for a movie. The movie ID is not consulted.
///
/// # Endpoint
///
/// `GET /api/movie/comments/getCommentsByMovieId/{...}`
pub async fn comments_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CommentItem>>, AppError> {
    let comments = state.catalog_service.comments().await?;
    tracing::info!(count = comments.len(), "Serving comments");

    Ok(Json(comments.into_iter().map(CommentItem::from).collect()))
}

/// Acknowledges a new comment without storing it.
///
/// # Endpoint
///
/// `POST /api/movie/comments/add`
///
/// # Request Body
///
/// ```json
/// {
///   "commentText": "Phim hay!",
///   "commentBy": "Minh Anh",
///   "commentByUserId": 7,
///   "movieId": 1
/// }
/// ```
///
/// All fields are optional. A missing author becomes the anonymous guest name.
pub async fn add_comment_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddCommentRequest>,
) -> Json<CommentResponse> {
    tracing::debug!(?payload, "Comment received");

    let posted = state.comment_service.post(payload.into());
    tracing::info!(comment_id = %posted.id, "Comment accepted");

    Json(posted.into())
}

/// Acknowledges a comment deletion.
///
/// # Endpoint
///
/// `POST /api/movie/comments/delete`
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DeleteCommentRequest>,
) -> Json<DeleteCommentResponse> {
    let deleted = state.comment_service.delete(payload.comment_id);
    tracing::info!(comment_id = %deleted, "Comment deleted");

    Json(DeleteCommentResponse::new(deleted))
}
