use std::sync::Arc;

use chrono::Utc;

use super::{IdGenerator, found, newest_first, oldest_first};
use crate::domain::{Comment, CommentDraft, CommentPatch, Record};
use crate::error::{DomainError, DomainResult};
use crate::latency::Latency;
use crate::ports::{CommentRepository, InsertAt};

// Shared by every service handle in the process.
static COMMENT_IDS: IdGenerator = IdGenerator::new("comment");

// Base delays in milliseconds.
const GET_ALL_MS: u64 = 250;
const GET_ONE_MS: u64 = 200;
const BY_POST_MS: u64 = 300;
const CREATE_MS: u64 = 400;
const UPDATE_MS: u64 = 250;
const DELETE_MS: u64 = 200;

/// Comment service over a comment record store.
#[derive(Clone)]
pub struct CommentService {
    repo: Arc<dyn CommentRepository>,
    latency: Latency,
    ids: &'static IdGenerator,
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepository>, latency: Latency) -> Self {
        Self {
            repo,
            latency,
            ids: &COMMENT_IDS,
        }
    }

    /// All comments, most recent first.
    pub async fn get_all(&self) -> DomainResult<Vec<Comment>> {
        self.latency.pause(GET_ALL_MS).await;
        let mut comments = self.repo.find_all().await?;
        newest_first(&mut comments);
        Ok(comments)
    }

    pub async fn get_by_id(&self, id: &str) -> DomainResult<Comment> {
        self.latency.pause(GET_ONE_MS).await;
        found(self.repo.find_by_id(id).await?, id)
    }

    /// Comments on a post in thread order, oldest first.
    pub async fn get_by_post_id(&self, post_id: &str) -> DomainResult<Vec<Comment>> {
        self.latency.pause(BY_POST_MS).await;
        let mut comments = self.repo.find_by_post_id(post_id).await?;
        oldest_first(&mut comments);
        Ok(comments)
    }

    /// Add a comment, or a reply when the draft names a parent.
    ///
    /// Neither the post nor the parent is checked for existence.
    pub async fn create(&self, draft: CommentDraft) -> DomainResult<Comment> {
        self.latency.pause(CREATE_MS).await;
        let now = Utc::now();
        let comment = Comment::new(self.ids.next_id(now), draft, now);
        let comment = self.repo.insert(comment, InsertAt::Back).await?;

        tracing::info!(
            comment_id = %comment.id,
            post_id = %comment.post_id,
            parent_id = ?comment.parent_id,
            "Comment created"
        );
        Ok(comment)
    }

    pub async fn update(&self, id: &str, patch: CommentPatch) -> DomainResult<Comment> {
        self.latency.pause(UPDATE_MS).await;
        let updated = self
            .repo
            .update_with(id, Box::new(move |comment: &mut Comment| comment.apply(patch)))
            .await?;
        found(updated, id)
    }

    /// Remove a comment and its direct replies.
    ///
    /// Returns how many records were removed.
    pub async fn delete(&self, id: &str) -> DomainResult<usize> {
        self.latency.pause(DELETE_MS).await;
        let removed = self
            .repo
            .delete_thread(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Comment::ENTITY, id))?;

        tracing::info!(comment_id = %id, removed, "Comment deleted");
        Ok(removed)
    }
}
