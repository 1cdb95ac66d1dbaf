//! A user's profile and their posts.

use feed_core::domain::User;

use crate::ClientContext;
use crate::card::PostCard;

#[derive(Debug, Clone, Default)]
pub struct ProfilePage {
    user: Option<User>,
    cards: Vec<PostCard>,
    error: Option<String>,
}

impl ProfilePage {
    /// Fetch the user and their posts together.
    pub async fn load(ctx: &mut ClientContext, user_id: &str) -> Self {
        let fetched = futures::try_join!(
            ctx.services.users.get_by_id(user_id),
            ctx.services.posts.get_by_author(user_id),
        );

        match fetched {
            Ok((user, posts)) => Self {
                user: Some(user),
                cards: posts.into_iter().map(PostCard::new).collect(),
                error: None,
            },
            Err(err) => {
                tracing::warn!(user_id, error = %err, "Profile failed to load");
                ctx.notices.error("Failed to load profile");
                Self {
                    error: Some(err.to_string()),
                    ..Self::default()
                }
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    pub fn card_mut(&mut self, post_id: &str) -> Option<&mut PostCard> {
        self.cards.iter_mut().find(|card| card.id() == post_id)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Delete one of the profile's posts and lower the shown post count.
    pub async fn delete(&mut self, post_id: &str, ctx: &mut ClientContext) -> bool {
        let Some(card) = self.cards.iter().find(|card| card.id() == post_id) else {
            return false;
        };
        if !card.delete(ctx).await {
            return false;
        }

        self.cards.retain(|card| card.id() != post_id);
        if let Some(user) = self.user.as_mut() {
            user.adjust_post_count(-1);
        }
        true
    }
}
