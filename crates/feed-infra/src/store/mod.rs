//! Record stores - in-memory ordered collections, one per entity type.

mod memory;

use std::sync::Arc;

use feed_core::domain::{Comment, Post, User};
use feed_core::{FeedServices, Latency};

pub use memory::InMemoryRepository;

/// In-memory post store.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

/// In-memory comment store.
pub type InMemoryCommentRepository = InMemoryRepository<Comment>;

/// In-memory user store.
pub type InMemoryUserRepository = InMemoryRepository<User>;

/// The three record stores backing one process (or one test).
#[derive(Clone, Default)]
pub struct InMemoryStores {
    pub posts: Arc<InMemoryPostRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

impl InMemoryStores {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(posts: Vec<Post>, comments: Vec<Comment>, users: Vec<User>) -> Self {
        Self {
            posts: Arc::new(InMemoryRepository::with_records(posts)),
            comments: Arc::new(InMemoryRepository::with_records(comments)),
            users: Arc::new(InMemoryRepository::with_records(users)),
        }
    }

    /// Services sharing these stores.
    pub fn services(&self, latency: Latency) -> FeedServices {
        FeedServices::new(
            self.posts.clone(),
            self.comments.clone(),
            self.users.clone(),
            latency,
        )
    }
}
