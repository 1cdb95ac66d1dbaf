//! A single post as shown in a list or detail view.

use feed_core::DomainResult;
use feed_core::domain::{Post, ReactionKind};

use crate::notice::Notices;
use crate::optimistic::Optimistic;
use crate::ClientContext;

/// Like button state: whether the viewer likes the post and the shown count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub count: u64,
}

impl LikeState {
    pub fn of(post: &Post) -> Self {
        Self {
            liked: post.is_liked,
            count: post.likes,
        }
    }

    /// The state after one press of the like button.
    pub fn toggled(self) -> Self {
        if self.liked {
            Self {
                liked: false,
                count: self.count.saturating_sub(1),
            }
        } else {
            Self {
                liked: true,
                count: self.count.saturating_add(1),
            }
        }
    }
}

/// A post plus the UI state attached to it.
#[derive(Debug, Clone)]
pub struct PostCard {
    post: Post,
    like: Optimistic<LikeState>,
    selected_reaction: Option<ReactionKind>,
}

impl PostCard {
    pub fn new(post: Post) -> Self {
        Self {
            like: Optimistic::new(LikeState::of(&post)),
            post,
            selected_reaction: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.post.id
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    /// The like state to display, including any in-flight change.
    pub fn like_state(&self) -> LikeState {
        *self.like.current()
    }

    pub fn like_phase(&self) -> &Optimistic<LikeState> {
        &self.like
    }

    pub fn selected_reaction(&self) -> Option<ReactionKind> {
        self.selected_reaction
    }

    /// Merge a fresh copy of the post from the service.
    ///
    /// An in-flight like keeps its tentative state until it settles.
    pub fn replace(&mut self, post: Post) {
        if !self.like.is_pending() {
            self.like.confirm(LikeState::of(&post));
        }
        self.post = post;
    }

    pub(crate) fn set_comment_count(&mut self, count: u64) {
        self.post.comments = count;
    }

    /// First phase of a like press: flip the shown state immediately.
    ///
    /// Returns the like state to request from the service.
    pub fn begin_like(&mut self) -> bool {
        let next = self.like.current().toggled();
        self.like.propose(next);
        next.liked
    }

    /// Second phase: confirm with the service's copy or roll back.
    pub fn settle_like(&mut self, result: DomainResult<Post>, notices: &mut Notices) -> bool {
        match result {
            Ok(post) => {
                let liked = post.is_liked;
                self.like.confirm(LikeState::of(&post));
                self.post = post;
                notices.success(if liked { "Post liked!" } else { "Post unliked" });
                true
            }
            Err(err) => {
                tracing::warn!(post_id = %self.post.id, error = %err, "Like failed, reverting");
                self.like.revert();
                notices.error("Failed to update like");
                false
            }
        }
    }

    /// Like or unlike, optimistically.
    pub async fn toggle_like(&mut self, ctx: &mut ClientContext) -> bool {
        let target = self.begin_like();
        let result = ctx.services.posts.toggle_like(&self.post.id, target).await;
        self.settle_like(result, &mut ctx.notices)
    }

    /// Add a reaction once the service accepts it.
    pub async fn react(&mut self, kind: ReactionKind, ctx: &mut ClientContext) -> bool {
        match ctx.services.posts.react(&self.post.id, kind).await {
            Ok(post) => {
                self.replace(post);
                self.selected_reaction = Some(kind);
                ctx.notices.success(format!("Reacted with {}", kind.emoji()));
                true
            }
            Err(err) => {
                tracing::warn!(post_id = %self.post.id, error = %err, "Reaction failed");
                ctx.notices.error("Failed to add reaction");
                false
            }
        }
    }

    /// Delete the post, then lower its author's post counter.
    ///
    /// A failed counter update is logged and does not fail the delete.
    pub async fn delete(&self, ctx: &mut ClientContext) -> bool {
        if let Err(err) = ctx.services.posts.delete(&self.post.id).await {
            tracing::warn!(post_id = %self.post.id, error = %err, "Delete failed");
            ctx.notices.error("Failed to delete post");
            return false;
        }

        if let Err(err) = ctx
            .services
            .users
            .adjust_post_count(&self.post.author_id, -1)
            .await
        {
            tracing::warn!(author_id = %self.post.author_id, error = %err, "Post count not adjusted");
        }

        ctx.notices.success("Post deleted successfully");
        true
    }
}
