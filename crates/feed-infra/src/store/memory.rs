//! In-memory record store implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use feed_core::domain::{Comment, Post, Record, User};
use feed_core::error::RepoError;
use feed_core::ports::{
    BaseRepository, CommentRepository, InsertAt, Mutation, PostRepository, UserRepository,
};

/// Ordered in-memory store using a Vec behind an async RwLock.
///
/// Every operation takes the lock once and releases it before returning, so
/// mutations are atomic with respect to each other.
/// Note: Data is lost on process restart.
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    async fn filtered<F>(&self, keep: F) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        let records = self.records.read().await;
        records.iter().filter(|r| keep(r)).cloned().collect()
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepoError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, entity: T, at: InsertAt) -> Result<T, RepoError> {
        let mut records = self.records.write().await;
        match at {
            InsertAt::Front => records.insert(0, entity.clone()),
            InsertAt::Back => records.push(entity.clone()),
        }
        tracing::debug!(entity = T::ENTITY, id = %entity.id(), "Record inserted");
        Ok(entity)
    }

    async fn update_with(&self, id: &str, mutation: Mutation<T>) -> Result<Option<T>, RepoError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        mutation(record);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.id() == id) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository<Post> {
    async fn find_by_author(&self, author_id: &str) -> Result<Vec<Post>, RepoError> {
        Ok(self.filtered(|post| post.author_id == author_id).await)
    }
}

#[async_trait]
impl CommentRepository for InMemoryRepository<Comment> {
    async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        Ok(self.filtered(|comment| comment.post_id == post_id).await)
    }

    async fn delete_thread(&self, id: &str) -> Result<Option<usize>, RepoError> {
        let mut records = self.records.write().await;
        if !records.iter().any(|c| c.id == id) {
            return Ok(None);
        }

        // Replies only go one level deep, so direct children are the whole thread.
        let before = records.len();
        records.retain(|c| c.id != id && !c.is_reply_to(id));
        Ok(Some(before - records.len()))
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository<User> {}

#[cfg(test)]
mod tests {
    use crate::store::InMemoryPostRepository;
    use super::*;
    use chrono::Utc;
    use feed_core::domain::{CommentDraft, PostDraft};

    fn post(id: &str) -> Post {
        Post::new(
            id.to_string(),
            PostDraft {
                content: format!("content of {id}"),
                author_id: "user1".to_string(),
                author_name: "You".to_string(),
                ..PostDraft::default()
            },
            Utc::now(),
        )
    }

    fn comment(id: &str, parent: Option<&str>) -> Comment {
        Comment::new(
            id.to_string(),
            CommentDraft {
                post_id: "post1".to_string(),
                content: "text".to_string(),
                author_id: "user1".to_string(),
                author_name: "You".to_string(),
                parent_id: parent.map(str::to_string),
                ..CommentDraft::default()
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_insert_front_and_back() {
        let repo = InMemoryRepository::with_records(vec![post("b")]);
        repo.insert(post("a"), InsertAt::Front).await.unwrap();
        repo.insert(post("c"), InsertAt::Back).await.unwrap();

        let ids: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_update_with_returns_updated_copy() {
        let repo = InMemoryRepository::with_records(vec![post("a")]);
        let updated = repo
            .update_with("a", Box::new(|p: &mut Post| p.likes = 7))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.likes, 7);
        assert_eq!(repo.find_by_id("a").await.unwrap().unwrap().likes, 7);
    }

    #[tokio::test]
    async fn test_update_with_missing_record() {
        let repo: InMemoryPostRepository = InMemoryRepository::new();
        let result = repo
            .update_with("nope", Box::new(|p: &mut Post| p.likes = 1))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::with_records(vec![post("a")]);
        assert!(repo.delete("a").await.unwrap());
        assert!(!repo.delete("a").await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_thread_removes_direct_replies() {
        let repo = InMemoryRepository::with_records(vec![
            comment("c1", None),
            comment("c2", Some("c1")),
            comment("c3", None),
            comment("c4", Some("c1")),
            comment("c5", Some("c3")),
        ]);

        assert_eq!(repo.delete_thread("c1").await.unwrap(), Some(3));
        assert_eq!(repo.len().await, 2);
        assert_eq!(repo.delete_thread("c1").await.unwrap(), None);
    }
}
