//! # Feed Client
//!
//! UI-side state for the feed, kept separate from any rendering toolkit.
//!
//! Pages call the entity services in-process and merge the results into local
//! state. Likes are applied optimistically and rolled back on failure; every
//! other mutation waits for the service before touching local state. Failures
//! never propagate out of a page: they become transient [`Notice`]s.

pub mod card;
pub mod compose;
pub mod detail;
pub mod feed;
pub mod notice;
pub mod optimistic;
pub mod profile;
pub mod search;

use feed_core::FeedServices;
use feed_core::domain::DEFAULT_AVATAR;

pub use card::{LikeState, PostCard};
pub use compose::{ComposeError, MAX_POST_CHARS};
pub use detail::PostDetail;
pub use feed::{FeedPage, PAGE_SIZE};
pub use notice::{Notice, NoticeLevel, Notices};
pub use optimistic::Optimistic;
pub use profile::ProfilePage;
pub use search::SearchPage;

/// The signed-in viewer, used as author for new posts and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            id: "user1".to_string(),
            name: "You".to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

/// Everything a page needs to talk to the services and report back.
pub struct ClientContext {
    pub services: FeedServices,
    pub viewer: Viewer,
    pub notices: Notices,
}

impl ClientContext {
    pub fn new(services: FeedServices, viewer: Viewer) -> Self {
        Self {
            services,
            viewer,
            notices: Notices::default(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use feed_core::Latency;
    use feed_infra::InMemoryStores;

    use super::{ClientContext, Viewer};

    pub fn seeded_context() -> (ClientContext, InMemoryStores) {
        let stores = InMemoryStores::seeded().unwrap();
        let ctx = ClientContext::new(stores.services(Latency::disabled()), Viewer::default());
        (ctx, stores)
    }

    pub fn empty_context() -> ClientContext {
        ClientContext::new(
            InMemoryStores::empty().services(Latency::disabled()),
            Viewer::default(),
        )
    }
}
