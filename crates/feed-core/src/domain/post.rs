use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ReactionKind, Record};

/// Post entity - a feed entry with a denormalized author snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub author_id: String,
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub is_liked: bool,
    /// Comment count, maintained by callers rather than derived from the comment store.
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub reactions: BTreeMap<ReactionKind, u64>,
}

/// Fields supplied by the caller when creating a post.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub content: String,
    pub images: Vec<String>,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
}

/// Shallow update over the mutable fields of a post.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub content: Option<String>,
    pub images: Option<Vec<String>>,
    pub author_name: Option<String>,
    pub author_avatar: Option<String>,
    pub likes: Option<u64>,
    pub is_liked: Option<bool>,
    pub comments: Option<u64>,
    pub reactions: Option<BTreeMap<ReactionKind, u64>>,
}

impl PostPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn comments(count: u64) -> Self {
        Self {
            comments: Some(count),
            ..Self::default()
        }
    }
}

impl Post {
    /// Create a new post with zeroed counters.
    pub fn new(id: String, draft: PostDraft, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            content: draft.content,
            images: draft.images,
            author_id: draft.author_id,
            author_name: draft.author_name,
            author_avatar: draft.author_avatar,
            timestamp,
            likes: 0,
            is_liked: false,
            comments: 0,
            reactions: BTreeMap::new(),
        }
    }

    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(name) = patch.author_name {
            self.author_name = name;
        }
        if let Some(avatar) = patch.author_avatar {
            self.author_avatar = Some(avatar);
        }
        if let Some(likes) = patch.likes {
            self.likes = likes;
        }
        if let Some(is_liked) = patch.is_liked {
            self.is_liked = is_liked;
        }
        if let Some(comments) = patch.comments {
            self.comments = comments;
        }
        if let Some(reactions) = patch.reactions {
            self.reactions = reactions;
        }
    }

    /// Move the viewer's like state to `liked`.
    ///
    /// Re-asserting the current state leaves the counter alone. Returns
    /// whether anything changed.
    pub fn set_liked(&mut self, liked: bool) -> bool {
        if self.is_liked == liked {
            return false;
        }
        self.likes = if liked {
            self.likes.saturating_add(1)
        } else {
            self.likes.saturating_sub(1)
        };
        self.is_liked = liked;
        true
    }

    pub fn add_reaction(&mut self, kind: ReactionKind) {
        let count = self.reactions.entry(kind).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn remove_reaction(&mut self, kind: ReactionKind) {
        if let Some(count) = self.reactions.get_mut(&kind) {
            *count = count.saturating_sub(1);
        }
    }

    pub fn reaction_count(&self, kind: ReactionKind) -> u64 {
        self.reactions.get(&kind).copied().unwrap_or(0)
    }

    /// Case-insensitive substring match on content or author name.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.content.to_lowercase().contains(needle)
            || self.author_name.to_lowercase().contains(needle)
    }

    /// Lowercased `#tags` appearing in the content.
    pub fn hashtags(&self) -> impl Iterator<Item = String> + '_ {
        self.content.split_whitespace().filter_map(|word| {
            let tag = word.strip_prefix('#')?;
            let tag: String = tag
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            (!tag.is_empty()).then(|| format!("#{}", tag.to_lowercase()))
        })
    }
}

impl Record for Post {
    const ENTITY: &'static str = "Post";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
