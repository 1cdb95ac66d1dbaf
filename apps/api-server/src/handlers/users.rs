//! User handlers.

use actix_web::{HttpResponse, web};

use feed_core::domain::{UserDraft, UserPatch};
use feed_shared::DeleteAck;
use feed_shared::dto::{CreateUserRequest, UpdateUserRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.services.users.get_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user = state.services.users.get_by_id(&path).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = state
        .services
        .users
        .create(UserDraft {
            name: req.name,
            avatar: req.avatar,
            bio: req.bio,
        })
        .await?;
    Ok(HttpResponse::Created().json(user))
}

pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = UserPatch {
        name: req.name,
        avatar: req.avatar,
        bio: req.bio,
        post_count: req.post_count,
    };

    let user = state.services.users.update(&path, patch).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.services.users.delete(&path).await?;
    Ok(HttpResponse::Ok().json(DeleteAck::ok()))
}

/// GET /api/users/{id}/posts
///
/// Newest first. An unknown user yields an empty list, not 404.
pub async fn user_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let posts = state.services.posts.get_by_author(&path).await?;
    Ok(HttpResponse::Ok().json(posts))
}
