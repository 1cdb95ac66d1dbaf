//! Entity services - async CRUD over the record stores.
//!
//! Every call pauses for its simulated latency first and then performs a single
//! store operation, so no call is ever suspended in the middle of a mutation.

mod comment;
mod ids;
mod post;
mod user;

use std::sync::Arc;

pub use comment::CommentService;
pub use ids::IdGenerator;
pub use post::{PostService, TrendingTopic};
pub use user::UserService;

use crate::domain::Record;
use crate::error::{DomainError, DomainResult};
use crate::latency::Latency;
use crate::ports::{CommentRepository, PostRepository, UserRepository};

/// The three entity services sharing one latency profile.
#[derive(Clone)]
pub struct FeedServices {
    pub posts: PostService,
    pub comments: CommentService,
    pub users: UserService,
}

impl FeedServices {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        users: Arc<dyn UserRepository>,
        latency: Latency,
    ) -> Self {
        Self {
            posts: PostService::new(posts, latency),
            comments: CommentService::new(comments, latency),
            users: UserService::new(users, latency),
        }
    }
}

/// Most recent first. Stable, so equal timestamps keep store order.
fn newest_first<T: Record>(records: &mut [T]) {
    records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

/// Oldest first. Stable, so equal timestamps keep store order.
fn oldest_first<T: Record>(records: &mut [T]) {
    records.sort_by_key(|r| r.created_at());
}

fn found<T: Record>(record: Option<T>, id: &str) -> DomainResult<T> {
    record.ok_or_else(|| DomainError::not_found(T::ENTITY, id))
}
