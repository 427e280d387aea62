//! Wire schemas that differ from the domain types.

use crate::domain::{
    article::entity::Article,
    shared::pagination::{PageRequest, PaginatedResponse},
    user::entity::{CurrentUser, PendingUser},
};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Value};

/// `GET /api/articles/{id}` answers either with the article itself or with
/// an envelope carrying the comment count next to it.
///
/// The shape is chosen by the presence of an `article` key, so a broken
/// envelope is reported instead of decoding as an empty bare article.
#[derive(Debug)]
pub enum ArticleEnvelope {
    Wrapped {
        article: Article,
        comment_count: Option<i64>,
    },
    Bare(Article),
}

#[derive(Deserialize)]
struct WrappedArticle {
    article: Article,
    #[serde(rename = "commentCount", default)]
    comment_count: Option<i64>,
}

impl<'de> Deserialize<'de> for ArticleEnvelope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = Map::<String, Value>::deserialize(deserializer)?;
        if body.contains_key("article") {
            let wrapped: WrappedArticle =
                serde_json::from_value(Value::Object(body)).map_err(D::Error::custom)?;
            Ok(Self::Wrapped {
                article: wrapped.article,
                comment_count: wrapped.comment_count,
            })
        } else {
            serde_json::from_value(Value::Object(body))
                .map(Self::Bare)
                .map_err(D::Error::custom)
        }
    }
}

impl ArticleEnvelope {
    /// The article's own comment count wins over the envelope's.
    pub fn into_article(self) -> Article {
        match self {
            Self::Wrapped {
                mut article,
                comment_count,
            } => {
                article.comment_count = article.comment_count.or(comment_count);
                article
            }
            Self::Bare(article) => article,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CommentBody<'a> {
    pub text: &'a str,
}

/// `PUT /api/comments/{id}` answer; only the stored text is read.
#[derive(Debug, Default, Deserialize)]
pub struct SavedComment {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProfileBody {
    Wrapped { user: CurrentUser },
    Bare(CurrentUser),
}

impl From<ProfileBody> for CurrentUser {
    fn from(body: ProfileBody) -> Self {
        match body {
            ProfileBody::Wrapped { user } | ProfileBody::Bare(user) => user,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUsersPage {
    #[serde(default)]
    pub pending_users: Vec<PendingUser>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl PendingUsersPage {
    /// Missing fields fall back to the request and the row count.
    pub fn into_response(self, request: &PageRequest) -> PaginatedResponse<PendingUser> {
        let total = self.total.unwrap_or(self.pending_users.len() as i64);
        PaginatedResponse {
            page: self.page.unwrap_or(request.page),
            total_pages: self.total_pages.unwrap_or(1),
            total,
            items: self.pending_users,
        }
    }
}
