//! Post handlers.

use std::collections::BTreeMap;

use actix_web::{HttpResponse, web};

use feed_core::domain::{PostDraft, PostPatch, ReactionKind};
use feed_shared::DeleteAck;
use feed_shared::dto::{
    CreatePostRequest, PostQuery, ReactionRequest, ToggleLikeRequest, TrendingQuery,
    UpdatePostRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

const DEFAULT_TRENDING_LIMIT: usize = 5;

/// GET /api/posts[?q=...|?authorId=...]
///
/// `q` takes precedence over `authorId`.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> AppResult<HttpResponse> {
    let PostQuery { author_id, q } = query.into_inner();
    let posts = &state.services.posts;

    let result = match (q, author_id) {
        (Some(q), _) => posts.search(&q).await?,
        (None, Some(author_id)) => posts.get_by_author(&author_id).await?,
        (None, None) => posts.get_all().await?,
    };

    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/posts/trending[?limit=N]
pub async fn trending(
    state: web::Data<AppState>,
    query: web::Query<TrendingQuery>,
) -> AppResult<HttpResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_TRENDING_LIMIT);
    let topics = state.services.posts.trending_hashtags(limit).await?;
    Ok(HttpResponse::Ok().json(topics))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = PostDraft {
        content: req.content,
        images: req.images,
        author_id: req.author_id,
        author_name: req.author_name,
        author_avatar: req.author_avatar,
    };

    let post = state.services.posts.create(draft).await?;
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.services.posts.get_by_id(&path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PATCH /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        content: req.content,
        images: req.images,
        author_name: req.author_name,
        author_avatar: req.author_avatar,
        likes: req.likes,
        is_liked: req.is_liked,
        comments: req.comments,
        reactions: req.reactions.map(parse_reactions).transpose()?,
    };

    let post = state.services.posts.update(&path, patch).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.services.posts.delete(&path).await?;
    Ok(HttpResponse::Ok().json(DeleteAck::ok()))
}

/// PATCH /api/posts/{id}/like
pub async fn toggle_like(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ToggleLikeRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .services
        .posts
        .toggle_like(&path, body.is_liked)
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/{id}/reactions
pub async fn add_reaction(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ReactionRequest>,
) -> AppResult<HttpResponse> {
    let kind: ReactionKind = body.kind.parse()?;
    let post = state.services.posts.react(&path, kind).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}/reactions/{kind}
pub async fn remove_reaction(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (id, kind) = path.into_inner();
    let kind: ReactionKind = kind.parse()?;
    let post = state.services.posts.unreact(&id, kind).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts/{id}/comments
///
/// Oldest first. The post itself is not required to exist.
pub async fn post_comments(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let comments = state.services.comments.get_by_post_id(&path).await?;
    Ok(HttpResponse::Ok().json(comments))
}

fn parse_reactions(
    raw: BTreeMap<String, u64>,
) -> Result<BTreeMap<ReactionKind, u64>, feed_core::domain::UnknownReaction> {
    raw.into_iter()
        .map(|(kind, count)| Ok((kind.parse()?, count)))
        .collect()
}
