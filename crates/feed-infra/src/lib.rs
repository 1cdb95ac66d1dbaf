//! # Feed Infrastructure
//!
//! Concrete implementations of the record store ports defined in `feed-core`.
//!
//! ## Feature Flags
//!
//! - `seed` (default) - Bundle the static posts/comments/users dataset

pub mod store;

#[cfg(feature = "seed")]
pub mod seed;

// Re-exports - In-Memory
pub use store::{
    InMemoryCommentRepository, InMemoryPostRepository, InMemoryRepository, InMemoryStores,
    InMemoryUserRepository,
};
