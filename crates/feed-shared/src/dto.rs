//! Data Transfer Objects - request types for the API.
//!
//! Field names are camelCase on the wire. Unknown fields are ignored, so a
//! client may send back a whole record as an update body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub author_id: String,
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
}

/// Shallow update of a post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePostRequest {
    pub content: Option<String>,
    pub images: Option<Vec<String>>,
    pub author_name: Option<String>,
    pub author_avatar: Option<String>,
    pub likes: Option<u64>,
    pub is_liked: Option<bool>,
    pub comments: Option<u64>,
    pub reactions: Option<BTreeMap<String, u64>>,
}

/// Request to set the viewer's like state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLikeRequest {
    pub is_liked: bool,
}

/// Request to add a reaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionRequest {
    pub kind: String,
}

/// Query string for listing posts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    pub author_id: Option<String>,
    pub q: Option<String>,
}

/// Query string for trending topics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendingQuery {
    pub limit: Option<usize>,
}

/// Request to create a comment or reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_id: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Shallow update of a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCommentRequest {
    pub content: Option<String>,
    pub author_name: Option<String>,
    pub author_avatar: Option<String>,
}

/// Request to create a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Shallow update of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub post_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_accepts_full_record() {
        let body = serde_json::json!({
            "id": "post1",
            "content": "edited",
            "authorId": "user2",
            "timestamp": "2024-01-15T10:30:00Z",
            "likes": 3,
            "isLiked": true
        });
        let req: UpdatePostRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.content.as_deref(), Some("edited"));
        assert_eq!(req.is_liked, Some(true));
        assert!(req.images.is_none());
    }

    #[test]
    fn test_create_comment_parent_defaults_to_none() {
        let body = serde_json::json!({
            "postId": "post1",
            "content": "hi",
            "authorId": "user1",
            "authorName": "You"
        });
        let req: CreateCommentRequest = serde_json::from_value(body).unwrap();
        assert!(req.parent_id.is_none());
        assert!(req.author_avatar.is_none());
    }
}
