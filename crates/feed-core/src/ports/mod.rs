//! Ports - trait definitions for the record stores.
//! These are the "interfaces" that infrastructure must implement.

mod repository;

pub use repository::{
    BaseRepository, CommentRepository, InsertAt, Mutation, PostRepository, UserRepository,
};
