//! Creating and editing posts.

use feed_core::domain::{Post, PostDraft, PostPatch};
use thiserror::Error;

use crate::ClientContext;

/// Longest post body accepted by the composer, in characters.
pub const MAX_POST_CHARS: usize = 500;

/// Reasons the composer refuses to submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Please enter some content for your post")]
    Empty,

    #[error("Post is too long. Maximum {max} characters allowed.")]
    TooLong { max: usize },
}

/// Check a post body before it is sent. Returns the trimmed body.
pub fn validate_post(content: &str) -> Result<&str, ComposeError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ComposeError::Empty);
    }
    if content.chars().count() > MAX_POST_CHARS {
        return Err(ComposeError::TooLong {
            max: MAX_POST_CHARS,
        });
    }
    Ok(trimmed)
}

/// Publish a post as the viewer, then bump the viewer's post counter.
pub async fn create_post(
    ctx: &mut ClientContext,
    content: &str,
    images: Vec<String>,
) -> Option<Post> {
    let content = match validate_post(content) {
        Ok(content) => content,
        Err(err) => {
            ctx.notices.error(err.to_string());
            return None;
        }
    };

    let draft = PostDraft {
        content: content.to_string(),
        images,
        author_id: ctx.viewer.id.clone(),
        author_name: ctx.viewer.name.clone(),
        author_avatar: Some(ctx.viewer.avatar.clone()),
    };

    let post = match ctx.services.posts.create(draft).await {
        Ok(post) => post,
        Err(err) => {
            tracing::warn!(error = %err, "Post creation failed");
            ctx.notices.error("Failed to create post. Please try again.");
            return None;
        }
    };

    if let Err(err) = ctx.services.users.adjust_post_count(&ctx.viewer.id, 1).await {
        tracing::warn!(user_id = %ctx.viewer.id, error = %err, "Post count not adjusted");
    }

    ctx.notices.success("Post created successfully!");
    Some(post)
}

/// Replace a post's body.
///
/// An unchanged body is not submitted; the post comes back as it was.
pub async fn edit_post(ctx: &mut ClientContext, post: &Post, content: &str) -> Option<Post> {
    let content = match validate_post(content) {
        Ok(content) => content,
        Err(err) => {
            ctx.notices.error(err.to_string());
            return None;
        }
    };
    if content == post.content {
        return Some(post.clone());
    }

    let post_id = post.id.as_str();
    match ctx
        .services
        .posts
        .update(post_id, PostPatch::content(content))
        .await
    {
        Ok(post) => {
            ctx.notices.success("Post updated successfully!");
            Some(post)
        }
        Err(err) => {
            tracing::warn!(post_id, error = %err, "Post update failed");
            ctx.notices.error("Failed to update post. Please try again.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;
    use crate::testing::seeded_context;

    #[test]
    fn test_validate_post() {
        assert_eq!(validate_post("  hi  "), Ok("hi"));
        assert_eq!(validate_post("   "), Err(ComposeError::Empty));
        let long = "x".repeat(MAX_POST_CHARS + 1);
        assert_eq!(
            validate_post(&long),
            Err(ComposeError::TooLong {
                max: MAX_POST_CHARS
            })
        );
        assert!(validate_post(&"é".repeat(MAX_POST_CHARS)).is_ok());
    }

    #[tokio::test]
    async fn test_create_post_as_viewer() {
        let (mut ctx, _stores) = seeded_context();
        let before = ctx.services.users.get_by_id("user1").await.unwrap().post_count;

        let post = create_post(&mut ctx, "  hello  ", vec![]).await.unwrap();
        assert_eq!(post.content, "hello");
        assert_eq!(post.author_id, "user1");

        let feed = ctx.services.posts.get_all().await.unwrap();
        assert_eq!(feed[0].id, post.id);
        let after = ctx.services.users.get_by_id("user1").await.unwrap().post_count;
        assert_eq!(after, before + 1);
        assert_eq!(ctx.notices.last().unwrap().message, "Post created successfully!");
    }

    #[tokio::test]
    async fn test_blank_post_never_reaches_service() {
        let (mut ctx, _stores) = seeded_context();
        let count = ctx.services.posts.get_all().await.unwrap().len();

        assert!(create_post(&mut ctx, "\n\t ", vec![]).await.is_none());
        assert_eq!(ctx.services.posts.get_all().await.unwrap().len(), count);

        let notice = ctx.notices.last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Please enter some content for your post");
    }

    #[tokio::test]
    async fn test_edit_post() {
        let (mut ctx, _stores) = seeded_context();
        let original = ctx.services.posts.get_by_id("post4").await.unwrap();
        let post = edit_post(&mut ctx, &original, "rewritten").await.unwrap();
        assert_eq!(post.content, "rewritten");

        ctx.services.posts.delete("post4").await.unwrap();
        assert!(edit_post(&mut ctx, &post, "again").await.is_none());
        assert_eq!(
            ctx.notices.last().unwrap().message,
            "Failed to update post. Please try again."
        );
    }

    #[tokio::test]
    async fn test_unchanged_edit_is_not_submitted() {
        let (mut ctx, _stores) = seeded_context();
        let original = ctx.services.posts.get_by_id("post4").await.unwrap();
        // A deleted post would fail any update that reached the service.
        ctx.services.posts.delete("post4").await.unwrap();

        let padded = format!("  {}  ", original.content);
        let post = edit_post(&mut ctx, &original, &padded).await.unwrap();
        assert_eq!(post.content, original.content);
        assert!(ctx.notices.is_empty());
    }
}
