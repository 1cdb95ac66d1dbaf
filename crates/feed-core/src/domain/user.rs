use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// User entity - a profile shown next to posts and comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub join_date: DateTime<Utc>,
    /// Not reconciled with the post store; callers adjust it.
    #[serde(default)]
    pub post_count: u64,
}

/// Fields supplied by the caller when creating a user.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub name: String,
    pub avatar: String,
    pub bio: Option<String>,
}

/// Shallow update over the mutable fields of a user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub post_count: Option<u64>,
}

impl User {
    /// Create a new user with generated ID and join date.
    pub fn new(id: String, draft: UserDraft, join_date: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            avatar: draft.avatar,
            bio: draft.bio,
            join_date,
            post_count: 0,
        }
    }

    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(bio) = patch.bio {
            self.bio = Some(bio);
        }
        if let Some(count) = patch.post_count {
            self.post_count = count;
        }
    }

    /// Shift the post counter by `delta`, floored at zero.
    pub fn adjust_post_count(&mut self, delta: i64) {
        self.post_count = self.post_count.saturating_add_signed(delta);
    }
}

impl Record for User {
    const ENTITY: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.join_date
    }
}
