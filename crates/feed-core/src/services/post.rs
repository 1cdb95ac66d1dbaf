use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::{IdGenerator, found, newest_first};
use crate::domain::{Post, PostDraft, PostPatch, ReactionKind, Record};
use crate::error::{DomainError, DomainResult};
use crate::latency::Latency;
use crate::ports::{InsertAt, PostRepository};

// Shared by every service handle in the process.
static POST_IDS: IdGenerator = IdGenerator::new("post");

// Base delays in milliseconds.
const GET_ALL_MS: u64 = 300;
const GET_ONE_MS: u64 = 200;
const BY_AUTHOR_MS: u64 = 250;
const SEARCH_MS: u64 = 400;
const CREATE_MS: u64 = 500;
const MUTATE_MS: u64 = 200;

/// A hashtag and how many times it appears across the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendingTopic {
    pub name: String,
    pub posts: u64,
}

/// Post service over a post record store.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    latency: Latency,
    ids: &'static IdGenerator,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, latency: Latency) -> Self {
        Self {
            repo,
            latency,
            ids: &POST_IDS,
        }
    }

    /// All posts, most recent first.
    pub async fn get_all(&self) -> DomainResult<Vec<Post>> {
        self.latency.pause(GET_ALL_MS).await;
        let mut posts = self.repo.find_all().await?;
        newest_first(&mut posts);
        Ok(posts)
    }

    pub async fn get_by_id(&self, id: &str) -> DomainResult<Post> {
        self.latency.pause(GET_ONE_MS).await;
        found(self.repo.find_by_id(id).await?, id)
    }

    /// Posts written by `author_id`, most recent first.
    pub async fn get_by_author(&self, author_id: &str) -> DomainResult<Vec<Post>> {
        self.latency.pause(BY_AUTHOR_MS).await;
        let mut posts = self.repo.find_by_author(author_id).await?;
        newest_first(&mut posts);
        Ok(posts)
    }

    /// Posts whose content or author name contains `query`, ignoring case.
    ///
    /// A blank query matches nothing.
    pub async fn search(&self, query: &str) -> DomainResult<Vec<Post>> {
        self.latency.pause(SEARCH_MS).await;
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let mut posts: Vec<Post> = self
            .repo
            .find_all()
            .await?
            .into_iter()
            .filter(|post| post.matches(&needle))
            .collect();
        newest_first(&mut posts);

        tracing::debug!(query = %needle, hits = posts.len(), "Searched posts");
        Ok(posts)
    }

    pub async fn create(&self, draft: PostDraft) -> DomainResult<Post> {
        self.latency.pause(CREATE_MS).await;
        let now = Utc::now();
        let post = Post::new(self.ids.next_id(now), draft, now);
        let post = self.repo.insert(post, InsertAt::Front).await?;

        tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");
        Ok(post)
    }

    /// Set the viewer's like state to `is_liked`.
    ///
    /// Repeating a call with the same value does not move the counter.
    pub async fn toggle_like(&self, id: &str, is_liked: bool) -> DomainResult<Post> {
        self.latency.pause(MUTATE_MS).await;
        let updated = self
            .repo
            .update_with(
                id,
                Box::new(move |post: &mut Post| {
                    post.set_liked(is_liked);
                }),
            )
            .await?;

        let post = found(updated, id)?;
        tracing::debug!(post_id = %id, is_liked, likes = post.likes, "Like state set");
        Ok(post)
    }

    pub async fn react(&self, id: &str, kind: ReactionKind) -> DomainResult<Post> {
        self.latency.pause(MUTATE_MS).await;
        let updated = self
            .repo
            .update_with(id, Box::new(move |post: &mut Post| post.add_reaction(kind)))
            .await?;
        found(updated, id)
    }

    pub async fn unreact(&self, id: &str, kind: ReactionKind) -> DomainResult<Post> {
        self.latency.pause(MUTATE_MS).await;
        let updated = self
            .repo
            .update_with(id, Box::new(move |post: &mut Post| post.remove_reaction(kind)))
            .await?;
        found(updated, id)
    }

    pub async fn update(&self, id: &str, patch: PostPatch) -> DomainResult<Post> {
        self.latency.pause(MUTATE_MS).await;
        let updated = self
            .repo
            .update_with(id, Box::new(move |post: &mut Post| post.apply(patch)))
            .await?;
        found(updated, id)
    }

    /// Remove a post. Comments referencing it are left in place.
    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.latency.pause(MUTATE_MS).await;
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found(Post::ENTITY, id));
        }
        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    /// The `limit` most used hashtags, ties broken alphabetically.
    pub async fn trending_hashtags(&self, limit: usize) -> DomainResult<Vec<TrendingTopic>> {
        self.latency.pause(GET_ALL_MS).await;
        let mut counts: HashMap<String, u64> = HashMap::new();
        for post in self.repo.find_all().await? {
            for tag in post.hashtags() {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }

        let mut topics: Vec<TrendingTopic> = counts
            .into_iter()
            .map(|(name, posts)| TrendingTopic { name, posts })
            .collect();
        topics.sort_by(|a, b| b.posts.cmp(&a.posts).then_with(|| a.name.cmp(&b.name)));
        topics.truncate(limit);
        Ok(topics)
    }
}
