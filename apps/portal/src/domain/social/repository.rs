use super::comment::{Comment, CommentText};
use crate::domain::shared::errors::ApiError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentApi: Send + Sync {
    async fn list(&self, article_id: &str) -> Result<Vec<Comment>, ApiError>;
    /// Only the status matters; callers reload the thread afterwards.
    async fn create(&self, article_id: &str, text: &CommentText) -> Result<(), ApiError>;
    /// Returns the text as stored (sanitized) by the server.
    async fn update(&self, comment_id: &str, text: &CommentText) -> Result<String, ApiError>;
    async fn delete(&self, comment_id: &str) -> Result<(), ApiError>;
}
