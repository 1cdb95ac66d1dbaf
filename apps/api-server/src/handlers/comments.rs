//! Comment handlers.

use actix_web::{HttpResponse, web};

use feed_core::domain::{CommentDraft, CommentPatch};
use feed_shared::DeleteAck;
use feed_shared::dto::{CreateCommentRequest, UpdateCommentRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/comments
pub async fn list_comments(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let comments = state.services.comments.get_all().await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// GET /api/comments/{id}
pub async fn get_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let comment = state.services.comments.get_by_id(&path).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// POST /api/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = CommentDraft {
        post_id: req.post_id,
        content: req.content,
        author_id: req.author_id,
        author_name: req.author_name,
        author_avatar: req.author_avatar,
        parent_id: req.parent_id,
    };

    let comment = state.services.comments.create(draft).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// PATCH /api/comments/{id}
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = CommentPatch {
        content: req.content,
        author_name: req.author_name,
        author_avatar: req.author_avatar,
    };

    let comment = state.services.comments.update(&path, patch).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// DELETE /api/comments/{id}
///
/// Direct replies go with the comment; `removed` reports how many records left.
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let removed = state.services.comments.delete(&path).await?;
    Ok(HttpResponse::Ok().json(DeleteAck::removed(removed)))
}
