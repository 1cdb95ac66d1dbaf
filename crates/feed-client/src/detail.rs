//! A single post with its comment thread.

use feed_core::domain::{Comment, CommentDraft, PostPatch};

use crate::ClientContext;
use crate::card::PostCard;

/// Post detail page: the post and its comments in thread order.
#[derive(Debug, Clone, Default)]
pub struct PostDetail {
    card: Option<PostCard>,
    comments: Vec<Comment>,
    error: Option<String>,
}

impl PostDetail {
    /// Fetch the post and its comments together.
    pub async fn load(ctx: &mut ClientContext, post_id: &str) -> Self {
        let fetched = futures::try_join!(
            ctx.services.posts.get_by_id(post_id),
            ctx.services.comments.get_by_post_id(post_id),
        );

        match fetched {
            Ok((post, comments)) => Self {
                card: Some(PostCard::new(post)),
                comments,
                error: None,
            },
            Err(err) => {
                tracing::warn!(post_id, error = %err, "Post detail failed to load");
                ctx.notices.error("Failed to load post");
                Self {
                    error: Some(err.to_string()),
                    ..Self::default()
                }
            }
        }
    }

    pub fn card(&self) -> Option<&PostCard> {
        self.card.as_ref()
    }

    pub fn card_mut(&mut self) -> Option<&mut PostCard> {
        self.card.as_mut()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn top_level(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter().filter(|c| c.is_top_level())
    }

    pub fn replies<'a>(&'a self, parent_id: &'a str) -> impl Iterator<Item = &'a Comment> {
        self.comments.iter().filter(move |c| c.is_reply_to(parent_id))
    }

    /// Post a comment, or a reply when `parent_id` is given.
    ///
    /// The comment appears once the service confirms it; the post's comment
    /// count is then written back in a separate call.
    pub async fn add_comment(
        &mut self,
        ctx: &mut ClientContext,
        content: &str,
        parent_id: Option<&str>,
    ) -> Option<Comment> {
        let post_id = self.card.as_ref()?.id().to_string();
        let is_reply = parent_id.is_some();

        let content = content.trim();
        if content.is_empty() {
            ctx.notices.error(if is_reply {
                "Please enter a reply"
            } else {
                "Please enter a comment"
            });
            return None;
        }

        let draft = CommentDraft {
            post_id,
            content: content.to_string(),
            author_id: ctx.viewer.id.clone(),
            author_name: ctx.viewer.name.clone(),
            author_avatar: Some(ctx.viewer.avatar.clone()),
            parent_id: parent_id.map(str::to_string),
        };

        let comment = match ctx.services.comments.create(draft).await {
            Ok(comment) => comment,
            Err(err) => {
                tracing::warn!(error = %err, "Comment creation failed");
                ctx.notices.error(if is_reply {
                    "Failed to add reply"
                } else {
                    "Failed to add comment"
                });
                return None;
            }
        };

        self.comments.push(comment.clone());
        ctx.notices.success(if is_reply {
            "Reply added successfully!"
        } else {
            "Comment added successfully!"
        });
        self.sync_comment_count(ctx, 1).await;
        Some(comment)
    }

    /// Delete a comment and its replies.
    pub async fn delete_comment(&mut self, ctx: &mut ClientContext, comment_id: &str) -> bool {
        let removed = match ctx.services.comments.delete(comment_id).await {
            Ok(removed) => removed,
            Err(err) => {
                tracing::warn!(comment_id, error = %err, "Comment delete failed");
                ctx.notices.error("Failed to delete comment");
                return false;
            }
        };

        self.comments
            .retain(|c| c.id != comment_id && !c.is_reply_to(comment_id));
        self.sync_comment_count(ctx, -(removed as i64)).await;
        true
    }

    /// Shift the post's comment count and write it back.
    ///
    /// If the write fails the local count is still adjusted.
    async fn sync_comment_count(&mut self, ctx: &mut ClientContext, delta: i64) {
        let Some(card) = self.card.as_mut() else {
            return;
        };
        let count = card.post().comments.saturating_add_signed(delta);

        match ctx
            .services
            .posts
            .update(card.id(), PostPatch::comments(count))
            .await
        {
            Ok(post) => card.replace(post),
            Err(err) => {
                tracing::warn!(post_id = %card.id(), error = %err, "Comment count not saved");
                card.set_comment_count(count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded_context;

    #[tokio::test]
    async fn test_load_groups_thread() {
        let (mut ctx, _stores) = seeded_context();
        let detail = PostDetail::load(&mut ctx, "post1").await;

        assert_eq!(detail.card().unwrap().id(), "post1");
        assert_eq!(detail.comments().len(), 3);
        assert_eq!(detail.top_level().count(), 2);
        assert_eq!(detail.replies("comment1").count(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_post() {
        let (mut ctx, _stores) = seeded_context();
        let detail = PostDetail::load(&mut ctx, "post_missing").await;
        assert!(detail.card().is_none());
        assert!(detail.error().is_some());
        assert_eq!(ctx.notices.last().unwrap().message, "Failed to load post");
    }

    #[tokio::test]
    async fn test_add_comment_and_reply_update_count() {
        let (mut ctx, _stores) = seeded_context();
        let mut detail = PostDetail::load(&mut ctx, "post3").await;

        let comment = detail.add_comment(&mut ctx, " First! ", None).await.unwrap();
        assert_eq!(comment.content, "First!");
        detail
            .add_comment(&mut ctx, "reply", Some(&comment.id))
            .await
            .unwrap();

        assert_eq!(detail.card().unwrap().post().comments, 3);
        assert_eq!(detail.replies(&comment.id).count(), 1);
        let stored = ctx.services.posts.get_by_id("post3").await.unwrap();
        assert_eq!(stored.comments, 3);
        assert_eq!(ctx.notices.last().unwrap().message, "Reply added successfully!");
    }

    #[tokio::test]
    async fn test_blank_comment_rejected() {
        let (mut ctx, _stores) = seeded_context();
        let mut detail = PostDetail::load(&mut ctx, "post3").await;
        assert!(detail.add_comment(&mut ctx, "   ", None).await.is_none());
        assert_eq!(ctx.notices.last().unwrap().message, "Please enter a comment");
        assert_eq!(detail.comments().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_comment_removes_replies_and_lowers_count() {
        let (mut ctx, _stores) = seeded_context();
        let mut detail = PostDetail::load(&mut ctx, "post1").await;

        assert!(detail.delete_comment(&mut ctx, "comment1").await);
        assert_eq!(detail.comments().len(), 1);
        assert_eq!(detail.card().unwrap().post().comments, 1);

        let remaining = ctx.services.comments.get_by_post_id("post1").await.unwrap();
        assert_eq!(remaining.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_comment() {
        let (mut ctx, _stores) = seeded_context();
        let mut detail = PostDetail::load(&mut ctx, "post1").await;
        assert!(!detail.delete_comment(&mut ctx, "comment_missing").await);
        assert_eq!(detail.comments().len(), 3);
        assert_eq!(ctx.notices.last().unwrap().message, "Failed to delete comment");
    }

    #[tokio::test]
    async fn test_count_kept_locally_when_post_is_gone() {
        let (mut ctx, _stores) = seeded_context();
        let mut detail = PostDetail::load(&mut ctx, "post3").await;
        ctx.services.posts.delete("post3").await.unwrap();

        detail.add_comment(&mut ctx, "still here", None).await.unwrap();
        assert_eq!(detail.card().unwrap().post().comments, 2);
    }
}
