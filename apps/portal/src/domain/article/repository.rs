use super::{entity::Article, like::LikeToggleResponse};
use crate::domain::shared::errors::ApiError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleApi: Send + Sync {
    async fn fetch_article(&self, article_id: &str) -> Result<Article, ApiError>;
    async fn toggle_like(&self, article_id: &str) -> Result<LikeToggleResponse, ApiError>;
    /// A 403 comes back as `ApiError::Status { status: 403, .. }`.
    async fn delete_article(&self, article_id: &str) -> Result<(), ApiError>;
}
