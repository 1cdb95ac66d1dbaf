//! Post search.

use crate::ClientContext;
use crate::card::PostCard;

#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    query: String,
    results: Vec<PostCard>,
    has_searched: bool,
    error: Option<String>,
}

impl SearchPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[PostCard] {
        &self.results
    }

    /// Whether a non-blank query has been run.
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Run `query`. A blank query clears the page without calling the service.
    pub async fn search(&mut self, ctx: &mut ClientContext, query: &str) {
        self.query = query.trim().to_string();
        self.error = None;

        if self.query.is_empty() {
            self.results.clear();
            self.has_searched = false;
            return;
        }

        self.has_searched = true;
        match ctx.services.posts.search(&self.query).await {
            Ok(posts) => {
                self.results = posts.into_iter().map(PostCard::new).collect();
            }
            Err(err) => {
                tracing::warn!(query = %self.query, error = %err, "Search failed");
                self.error = Some(err.to_string());
                ctx.notices.error("Search failed. Please try again.");
            }
        }
    }

    pub fn card_mut(&mut self, post_id: &str) -> Option<&mut PostCard> {
        self.results.iter_mut().find(|card| card.id() == post_id)
    }

    /// Drop a result after its post was deleted elsewhere.
    pub fn remove(&mut self, post_id: &str) {
        self.results.retain(|card| card.id() != post_id);
    }
}
