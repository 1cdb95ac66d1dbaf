//! Domain entities - the core business objects.

mod comment;
mod post;
mod reaction;
mod user;

use chrono::{DateTime, Utc};

pub use comment::{Comment, CommentDraft, CommentPatch, DEFAULT_AVATAR};
pub use post::{Post, PostDraft, PostPatch};
pub use reaction::{ReactionKind, UnknownReaction};
pub use user::{User, UserDraft, UserPatch};

/// A record held by a record store.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    fn id(&self) -> &str;

    /// Creation instant, used for feed ordering.
    fn created_at(&self) -> DateTime<Utc>;
}
