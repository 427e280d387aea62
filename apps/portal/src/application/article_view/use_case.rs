use super::{
    dto::{
        ArticleControls, ArticleMeta, LoadedArticle, format_long_date, split_paragraphs,
        title_or_placeholder,
    },
    gallery::Gallery,
};
use crate::application::{
    like_toggle::controller::{DEFAULT_LIKE_TIMEOUT, LikeToggleController},
    navigation::{self, BackTarget, POST_DELETE_REDIRECT_DELAY},
};
use crate::domain::{
    article::{like::LikeState, repository::ArticleApi},
    user::{entity::CurrentUser, repository::ProfileService},
};
use crate::i18n::current::{article, common};
use crate::presentation::view::traits::{ConfirmPrompt, LikeView, Notifier, ToastKind};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

pub enum ArticlePage {
    Loaded {
        article: LoadedArticle,
        likes: LikeToggleController,
    },
    Failed {
        title: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The viewer does not own the article; nothing was sent.
    Unavailable,
    Cancelled,
    Deleted { redirect_to: String, after: Duration },
    /// The server refused; owner controls have been withdrawn.
    PermissionDenied,
    Failed,
}

pub struct ArticleViewController {
    article_id: String,
    articles: Arc<dyn ArticleApi>,
    profiles: Arc<dyn ProfileService>,
    notifier: Arc<dyn Notifier>,
    like_view: Arc<dyn LikeView>,
    api_base: Url,
    origin: Url,
    like_timeout: Duration,
}

impl ArticleViewController {
    pub fn new(
        article_id: impl Into<String>,
        articles: Arc<dyn ArticleApi>,
        profiles: Arc<dyn ProfileService>,
        notifier: Arc<dyn Notifier>,
        like_view: Arc<dyn LikeView>,
        api_base: Url,
        origin: Url,
    ) -> Self {
        Self {
            article_id: article_id.into(),
            articles,
            profiles,
            notifier,
            like_view,
            api_base,
            origin,
            like_timeout: DEFAULT_LIKE_TIMEOUT,
        }
    }

    pub fn with_like_timeout(mut self, timeout: Duration) -> Self {
        self.like_timeout = timeout;
        self
    }

    #[instrument(skip(self), fields(article_id = %self.article_id))]
    pub async fn load(&self) -> ArticlePage {
        let fetched = match self.articles.fetch_article(&self.article_id).await {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(error = %err, "failed to load article");
                return ArticlePage::Failed {
                    title: common::ERROR_TITLE.to_string(),
                    message: err.user_message_with_status(article::LOAD_FAILED),
                };
            }
        };

        let viewer = self.viewer().await;
        let is_owner = viewer.as_ref().is_some_and(|v| fetched.is_owned_by(v));
        let liked_by_me = viewer.as_ref().is_some_and(|v| fetched.is_liked_by(v));

        let author_label = fetched
            .author
            .as_ref()
            .and_then(|author| author.display_label())
            .unwrap_or(article::AUTHOR_FALLBACK)
            .to_string();

        let loaded = LoadedArticle {
            id: fetched.id.clone(),
            title: title_or_placeholder(fetched.title.as_deref()),
            paragraphs: split_paragraphs(fetched.content.as_deref()),
            meta: ArticleMeta {
                author_label,
                published: fetched.created_at.as_deref().and_then(format_long_date),
                comment_count: fetched.comment_count.unwrap_or(0),
            },
            controls: ArticleControls {
                can_like: viewer.is_some() && !is_owner,
                is_owner,
            },
            gallery: Gallery::new(&self.api_base, &fetched.images),
            viewer,
        };

        let likes = LikeToggleController::new(
            self.article_id.clone(),
            LikeState::new(liked_by_me, fetched.total_likes()),
            self.articles.clone(),
            self.like_view.clone(),
            self.notifier.clone(),
        )
        .with_timeout(self.like_timeout);

        debug!(
            owner = is_owner,
            liked = liked_by_me,
            likes = fetched.total_likes(),
            "article loaded"
        );
        ArticlePage::Loaded {
            article: loaded,
            likes,
        }
    }

    /// Asks for confirmation, then deletes the article.
    #[instrument(skip(self, controls), fields(article_id = %self.article_id))]
    pub async fn delete_article(
        &self,
        controls: &mut ArticleControls,
        referrer: Option<&str>,
    ) -> DeleteOutcome {
        if !controls.is_owner {
            debug!("delete requested without owner controls");
            return DeleteOutcome::Unavailable;
        }

        let confirmed = self
            .notifier
            .confirm(ConfirmPrompt::new(article::DELETE_CONFIRM, common::DELETE))
            .await;
        if !confirmed {
            return DeleteOutcome::Cancelled;
        }

        match self.articles.delete_article(&self.article_id).await {
            Ok(()) => {
                info!("article deleted");
                self.notifier.toast(article::DELETED, ToastKind::Success);
                DeleteOutcome::Deleted {
                    redirect_to: navigation::post_delete_redirect(referrer, &self.origin),
                    after: POST_DELETE_REDIRECT_DELAY,
                }
            }
            Err(err) if err.is_permission_denied() => {
                warn!("article delete forbidden, withdrawing owner controls");
                self.notifier.toast(
                    &err.user_message(article::DELETE_FORBIDDEN),
                    ToastKind::Error,
                );
                controls.revoke_ownership();
                DeleteOutcome::PermissionDenied
            }
            Err(err) => {
                warn!(error = %err, "article delete failed");
                self.notifier.toast(
                    &err.user_message_with_status(article::DELETE_FAILED),
                    ToastKind::Error,
                );
                DeleteOutcome::Failed
            }
        }
    }

    pub fn back_target(&self, saved_list_url: Option<&str>, referrer: Option<&str>) -> BackTarget {
        navigation::back_target(saved_list_url, referrer, &self.origin)
    }

    /// Profile failures degrade to an anonymous view.
    async fn viewer(&self) -> Option<CurrentUser> {
        match self.profiles.current_user().await {
            Ok(viewer) => viewer,
            Err(err) => {
                debug!(error = %err, "profile unavailable, rendering anonymously");
                None
            }
        }
    }
}
