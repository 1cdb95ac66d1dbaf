use async_trait::async_trait;

use crate::domain::{Comment, Post, User};
use crate::error::RepoError;

/// In-place change applied to a stored record while the store is locked.
pub type Mutation<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Where a new record lands in the store's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    Front,
    Back,
}

/// Ordered record store with standard CRUD operations.
///
/// Implementations must apply each call as one atomic step: a mutation never
/// observes or interleaves with another mutation on the same store.
#[async_trait]
pub trait BaseRepository<T: Send + 'static>: Send + Sync {
    /// All records in store order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find a record by its ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepoError>;

    /// Insert a record and return a copy of it.
    async fn insert(&self, entity: T, at: InsertAt) -> Result<T, RepoError>;

    /// Apply `mutation` to the record with `id`, returning the updated copy.
    async fn update_with(&self, id: &str, mutation: Mutation<T>) -> Result<Option<T>, RepoError>;

    /// Remove a record. Returns `false` if it was absent.
    async fn delete(&self, id: &str) -> Result<bool, RepoError>;
}

/// Post store.
#[async_trait]
pub trait PostRepository: BaseRepository<Post> {
    async fn find_by_author(&self, author_id: &str) -> Result<Vec<Post>, RepoError>;
}

/// Comment store.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment> {
    async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, RepoError>;

    /// Remove a comment together with its direct replies.
    ///
    /// Returns the number of records removed, or `None` if `id` is absent.
    async fn delete_thread(&self, id: &str) -> Result<Option<usize>, RepoError>;
}

/// User store.
#[async_trait]
pub trait UserRepository: BaseRepository<User> {}
