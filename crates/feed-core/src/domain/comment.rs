use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Avatar used when a comment is created without one.
pub const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

/// Comment entity - a top-level comment or a one-level-deep reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: String,
    pub timestamp: DateTime<Utc>,
    /// `None` for top-level comments.
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Fields supplied by the caller when creating a comment.
#[derive(Debug, Clone, Default)]
pub struct CommentDraft {
    pub post_id: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub parent_id: Option<String>,
}

/// Shallow update over the mutable fields of a comment.
#[derive(Debug, Clone, Default)]
pub struct CommentPatch {
    pub content: Option<String>,
    pub author_name: Option<String>,
    pub author_avatar: Option<String>,
}

impl Comment {
    pub fn new(id: String, draft: CommentDraft, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            post_id: draft.post_id,
            content: draft.content,
            author_id: draft.author_id,
            author_name: draft.author_name,
            author_avatar: draft
                .author_avatar
                .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            timestamp,
            parent_id: draft.parent_id,
        }
    }

    pub fn apply(&mut self, patch: CommentPatch) {
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(name) = patch.author_name {
            self.author_name = name;
        }
        if let Some(avatar) = patch.author_avatar {
            self.author_avatar = avatar;
        }
    }

    pub fn is_reply_to(&self, parent_id: &str) -> bool {
        self.parent_id.as_deref() == Some(parent_id)
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Record for Comment {
    const ENTITY: &'static str = "Comment";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_avatar_falls_back_to_default() {
        let comment = Comment::new(
            "comment_1".to_string(),
            CommentDraft {
                post_id: "post_1".to_string(),
                content: "Nice".to_string(),
                author_id: "user1".to_string(),
                author_name: "You".to_string(),
                ..CommentDraft::default()
            },
            Utc::now(),
        );
        assert_eq!(comment.author_avatar, DEFAULT_AVATAR);
        assert!(comment.is_top_level());
    }

    #[test]
    fn test_parent_id_serializes_as_null() {
        let json = serde_json::json!({
            "id": "comment_1",
            "postId": "post_1",
            "content": "hi",
            "authorId": "user1",
            "authorName": "You",
            "authorAvatar": DEFAULT_AVATAR,
            "timestamp": "2024-01-15T10:30:00Z",
            "parentId": null
        });
        let comment: Comment = serde_json::from_value(json).unwrap();
        assert_eq!(comment.parent_id, None);
        assert_eq!(serde_json::to_value(&comment).unwrap()["parentId"], serde_json::Value::Null);
    }
}
