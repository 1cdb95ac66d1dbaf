use std::sync::Arc;

use chrono::Utc;

use super::{IdGenerator, found};
use crate::domain::{Record, User, UserDraft, UserPatch};
use crate::error::{DomainError, DomainResult};
use crate::latency::Latency;
use crate::ports::{InsertAt, UserRepository};

// Shared by every service handle in the process.
static USER_IDS: IdGenerator = IdGenerator::new("user");

// Base delays in milliseconds.
const GET_ALL_MS: u64 = 250;
const GET_ONE_MS: u64 = 200;
const CREATE_MS: u64 = 400;
const UPDATE_MS: u64 = 300;
const DELETE_MS: u64 = 200;

/// User service over a user record store.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    latency: Latency,
    ids: &'static IdGenerator,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, latency: Latency) -> Self {
        Self {
            repo,
            latency,
            ids: &USER_IDS,
        }
    }

    /// All users in store order.
    pub async fn get_all(&self) -> DomainResult<Vec<User>> {
        self.latency.pause(GET_ALL_MS).await;
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> DomainResult<User> {
        self.latency.pause(GET_ONE_MS).await;
        found(self.repo.find_by_id(id).await?, id)
    }

    pub async fn create(&self, draft: UserDraft) -> DomainResult<User> {
        self.latency.pause(CREATE_MS).await;
        let now = Utc::now();
        let user = User::new(self.ids.next_id(now), draft, now);
        let user = self.repo.insert(user, InsertAt::Back).await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    pub async fn update(&self, id: &str, patch: UserPatch) -> DomainResult<User> {
        self.latency.pause(UPDATE_MS).await;
        let updated = self
            .repo
            .update_with(id, Box::new(move |user: &mut User| user.apply(patch)))
            .await?;
        found(updated, id)
    }

    /// Shift a user's post counter by `delta`, floored at zero.
    ///
    /// The counter is never derived from the post store; callers invoke this
    /// after creating or deleting a post.
    pub async fn adjust_post_count(&self, id: &str, delta: i64) -> DomainResult<User> {
        self.latency.pause(UPDATE_MS).await;
        let updated = self
            .repo
            .update_with(
                id,
                Box::new(move |user: &mut User| user.adjust_post_count(delta)),
            )
            .await?;
        found(updated, id)
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.latency.pause(DELETE_MS).await;
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found(User::ENTITY, id));
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}
