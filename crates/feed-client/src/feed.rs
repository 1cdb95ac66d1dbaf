//! The home feed.

use std::collections::HashSet;

use feed_core::domain::Post;

use crate::ClientContext;
use crate::card::PostCard;

/// A fetch returning fewer new posts than this means the feed is exhausted.
pub const PAGE_SIZE: usize = 10;

/// Home feed: every post, newest first, with a simulated "load more".
#[derive(Debug, Clone)]
pub struct FeedPage {
    cards: Vec<PostCard>,
    has_more: bool,
    error: Option<String>,
}

impl Default for FeedPage {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            has_more: true,
            error: None,
        }
    }
}

impl FeedPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    pub fn card_mut(&mut self, post_id: &str) -> Option<&mut PostCard> {
        self.cards.iter_mut().find(|card| card.id() == post_id)
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Error from the last refresh, shown in place of the feed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the feed with a fresh copy.
    pub async fn refresh(&mut self, ctx: &mut ClientContext) -> bool {
        self.error = None;
        match ctx.services.posts.get_all().await {
            Ok(posts) => {
                self.has_more = posts.len() >= PAGE_SIZE;
                self.cards = posts.into_iter().map(PostCard::new).collect();
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Feed refresh failed");
                self.error = Some(err.to_string());
                false
            }
        }
    }

    /// Append posts not yet shown. Returns how many were added.
    pub async fn load_more(&mut self, ctx: &mut ClientContext) -> usize {
        if !self.has_more {
            return 0;
        }

        let posts = match ctx.services.posts.get_all().await {
            Ok(posts) => posts,
            Err(err) => {
                tracing::warn!(error = %err, "Loading more posts failed");
                ctx.notices.error("Failed to load posts");
                return 0;
            }
        };

        let fresh: Vec<Post> = {
            let shown: HashSet<&str> = self.cards.iter().map(PostCard::id).collect();
            posts
                .into_iter()
                .filter(|post| !shown.contains(post.id.as_str()))
                .collect()
        };

        let added = fresh.len();
        if added < PAGE_SIZE {
            self.has_more = false;
        }
        self.cards.extend(fresh.into_iter().map(PostCard::new));
        added
    }

    /// Merge an updated post returned by a service call.
    pub fn apply_update(&mut self, post: Post) {
        if let Some(card) = self.card_mut(&post.id) {
            card.replace(post);
        }
    }

    pub fn remove(&mut self, post_id: &str) {
        self.cards.retain(|card| card.id() != post_id);
    }

    /// Put a newly created post at the top.
    pub fn prepend(&mut self, post: Post) {
        self.cards.insert(0, PostCard::new(post));
    }

    pub async fn toggle_like(&mut self, post_id: &str, ctx: &mut ClientContext) -> bool {
        match self.card_mut(post_id) {
            Some(card) => card.toggle_like(ctx).await,
            None => false,
        }
    }

    /// Delete a post and drop it from the feed once the service agrees.
    pub async fn delete(&mut self, post_id: &str, ctx: &mut ClientContext) -> bool {
        let Some(card) = self.cards.iter().find(|card| card.id() == post_id) else {
            return false;
        };
        if !card.delete(ctx).await {
            return false;
        }
        self.remove(post_id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::create_post;
    use crate::testing::{empty_context, seeded_context};

    #[tokio::test]
    async fn test_refresh_sorted_and_exhausted() {
        let (mut ctx, _stores) = seeded_context();
        let mut feed = FeedPage::new();
        assert!(feed.refresh(&mut ctx).await);

        assert_eq!(feed.cards().len(), 6);
        assert!(!feed.has_more());
        let cards = feed.cards();
        assert!(
            cards
                .windows(2)
                .all(|w| w[0].post().timestamp >= w[1].post().timestamp)
        );
    }

    #[tokio::test]
    async fn test_load_more_skips_posts_already_shown() {
        let mut ctx = empty_context();
        for i in 0..PAGE_SIZE + 2 {
            create_post(&mut ctx, &format!("post number {i}"), vec![])
                .await
                .unwrap();
        }

        let mut feed = FeedPage::new();
        feed.refresh(&mut ctx).await;
        assert!(feed.has_more());

        assert_eq!(feed.load_more(&mut ctx).await, 0);
        assert!(!feed.has_more());
        assert_eq!(feed.cards().len(), PAGE_SIZE + 2);
    }

    #[tokio::test]
    async fn test_delete_removes_card() {
        let (mut ctx, _stores) = seeded_context();
        let mut feed = FeedPage::new();
        feed.refresh(&mut ctx).await;

        assert!(feed.delete("post2", &mut ctx).await);
        assert!(feed.cards().iter().all(|c| c.id() != "post2"));
        assert_eq!(ctx.notices.last().unwrap().message, "Post deleted successfully");
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_card() {
        let (mut ctx, _stores) = seeded_context();
        let mut feed = FeedPage::new();
        feed.refresh(&mut ctx).await;
        ctx.services.posts.delete("post2").await.unwrap();

        assert!(!feed.delete("post2", &mut ctx).await);
        assert!(feed.cards().iter().any(|c| c.id() == "post2"));
    }

    #[tokio::test]
    async fn test_apply_update_and_like() {
        let (mut ctx, _stores) = seeded_context();
        let mut feed = FeedPage::new();
        feed.refresh(&mut ctx).await;

        assert!(feed.toggle_like("post3", &mut ctx).await);
        assert!(feed.card_mut("post3").unwrap().like_state().liked);

        let edited = ctx
            .services
            .posts
            .update("post3", feed_core::domain::PostPatch::content("edited"))
            .await
            .unwrap();
        feed.apply_update(edited);
        assert_eq!(feed.card_mut("post3").unwrap().post().content, "edited");
    }
}
