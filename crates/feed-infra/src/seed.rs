//! Static dataset loaded into the stores at startup.

use serde::de::DeserializeOwned;

use feed_core::domain::{Comment, Post, User};
use feed_core::error::RepoError;

use crate::store::InMemoryStores;

const POSTS: &str = include_str!("../seed/posts.json");
const COMMENTS: &str = include_str!("../seed/comments.json");
const USERS: &str = include_str!("../seed/users.json");

pub fn posts() -> Result<Vec<Post>, RepoError> {
    parse("posts", POSTS)
}

pub fn comments() -> Result<Vec<Comment>, RepoError> {
    parse("comments", COMMENTS)
}

pub fn users() -> Result<Vec<User>, RepoError> {
    parse("users", USERS)
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>, RepoError> {
    serde_json::from_str(raw).map_err(|e| RepoError::Seed(format!("{name}: {e}")))
}

impl InMemoryStores {
    /// Fresh stores holding the bundled dataset.
    pub fn seeded() -> Result<Self, RepoError> {
        let stores = Self::from_records(posts()?, comments()?, users()?);
        tracing::debug!("Record stores seeded");
        Ok(stores)
    }
}
