use super::dto::{ArticleEnvelope, CommentBody, PendingUsersPage, ProfileBody, SavedComment};
use super::errors::error_from_body;
use crate::config::Config;
use crate::domain::{
    article::{entity::Article, like::LikeToggleResponse, repository::ArticleApi},
    shared::{
        errors::ApiError,
        pagination::{PageRequest, PaginatedResponse},
    },
    social::{
        comment::{Comment, CommentText},
        repository::CommentApi,
    },
    user::{
        entity::{CurrentUser, PendingUser},
        registration::{RegistrationForm, RegistrationReceipt},
        repository::{AdminApi, ProfileService, RegistrationApi},
    },
};
use async_trait::async_trait;
use http::{Method, header::ACCEPT};
use reqwest::cookie::Jar;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

/// JSON client for the CMS API.
///
/// Every request carries the session cookie, when one is configured, so the
/// server sees the same identity a signed-in browser would.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry path segments or the
    /// underlying HTTP client fails to build.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        if config.api_base.cannot_be_a_base() {
            anyhow::bail!("API base {} cannot carry a path", config.api_base);
        }

        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &config.session_cookie {
            jar.add_cookie_str(cookie, &config.api_base);
        }

        let http = reqwest::Client::builder()
            .cookie_provider(jar)
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base: config.api_base.clone(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("cannot extend {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.header(ACCEPT, "application/json").send().await?;
        let status = response.status();
        debug!(%status, url = %response.url(), "api response");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(error_from_body(status.as_u16(), &body))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_no_content(&self, request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        self.execute(request).await.map(drop)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.http.request(method, url)
    }
}

#[async_trait]
impl ArticleApi for ApiClient {
    #[instrument(skip(self))]
    async fn fetch_article(&self, article_id: &str) -> Result<Article, ApiError> {
        let url = self.endpoint(&["api", "articles", article_id])?;
        let envelope: ArticleEnvelope = self.send_json(self.request(Method::GET, url)).await?;
        Ok(envelope.into_article())
    }

    #[instrument(skip(self))]
    async fn toggle_like(&self, article_id: &str) -> Result<LikeToggleResponse, ApiError> {
        let url = self.endpoint(&["api", "articles", article_id, "like"])?;
        self.send_json(self.request(Method::POST, url)).await
    }

    #[instrument(skip(self))]
    async fn delete_article(&self, article_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "articles", article_id])?;
        self.send_no_content(self.request(Method::DELETE, url)).await
    }
}

#[async_trait]
impl CommentApi for ApiClient {
    #[instrument(skip(self))]
    async fn list(&self, article_id: &str) -> Result<Vec<Comment>, ApiError> {
        let url = self.endpoint(&["api", "comments", article_id])?;
        self.send_json(self.request(Method::GET, url)).await
    }

    #[instrument(skip(self, text))]
    async fn create(&self, article_id: &str, text: &CommentText) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "comments", article_id])?;
        let body = CommentBody {
            text: text.as_str(),
        };
        self.send_no_content(self.request(Method::POST, url).json(&body))
            .await
    }

    #[instrument(skip(self, text))]
    async fn update(&self, comment_id: &str, text: &CommentText) -> Result<String, ApiError> {
        let url = self.endpoint(&["api", "comments", comment_id])?;
        let body = CommentBody {
            text: text.as_str(),
        };
        let saved: SavedComment = self
            .send_json(self.request(Method::PUT, url).json(&body))
            .await?;
        Ok(saved.text.unwrap_or_else(|| text.as_str().to_string()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, comment_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "comments", comment_id])?;
        self.send_no_content(self.request(Method::DELETE, url)).await
    }
}

#[async_trait]
impl ProfileService for ApiClient {
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        let url = self.endpoint(&["api", "auth", "profile"])?;
        match self
            .send_json::<ProfileBody>(self.request(Method::GET, url))
            .await
        {
            Ok(body) => Ok(Some(body.into())),
            Err(err) if err.is_unauthenticated() || err.is_permission_denied() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl AdminApi for ApiClient {
    #[instrument(skip(self))]
    async fn list_pending_users(
        &self,
        request: &PageRequest,
    ) -> Result<PaginatedResponse<PendingUser>, ApiError> {
        let mut url = self.endpoint(&["api", "admin", "pending-users"])?;
        url.query_pairs_mut()
            .append_pair("search", &request.search)
            .append_pair("page", &request.page.to_string())
            .append_pair("limit", &request.limit.to_string());

        let page: PendingUsersPage = self.send_json(self.request(Method::GET, url)).await?;
        Ok(page.into_response(request))
    }

    #[instrument(skip(self))]
    async fn approve(&self, user_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "admin", "approve", user_id])?;
        self.send_no_content(self.request(Method::POST, url)).await
    }

    #[instrument(skip(self))]
    async fn reject(&self, user_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "admin", "reject", user_id])?;
        self.send_no_content(self.request(Method::POST, url)).await
    }
}

#[async_trait]
impl RegistrationApi for ApiClient {
    #[instrument(skip(self, form), fields(username = %form.username))]
    async fn register_pending(
        &self,
        form: &RegistrationForm,
    ) -> Result<RegistrationReceipt, ApiError> {
        let url = self.endpoint(&["api", "auth", "register-pending"])?;
        let response = self
            .execute(self.request(Method::POST, url).json(form))
            .await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(RegistrationReceipt::default());
        }
        Ok(serde_json::from_str(&body)?)
    }
}
