//! # Feed Core
//!
//! The domain layer of the feed service.
//! Entities, the record store contract, and the entity services that enforce
//! sorting, existence checks, and cascading deletes. No storage code lives here.

pub mod domain;
pub mod error;
pub mod latency;
pub mod ports;
pub mod services;

pub use error::{DomainError, DomainResult, RepoError};
pub use latency::Latency;
pub use services::{CommentService, FeedServices, PostService, UserService};
