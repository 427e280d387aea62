use crate::domain::user::entity::{AuthorRef, CurrentUser};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// `null` and a missing key both mean no images.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    /// Ids of the users who liked the article, when the API includes them.
    #[serde(default)]
    pub likes: Option<Vec<String>>,
    #[serde(default)]
    pub likes_count: Option<i64>,
    #[serde(default)]
    pub comment_count: Option<i64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Article {
    /// Like total: the id list wins over the bare counter.
    pub fn total_likes(&self) -> i64 {
        match &self.likes {
            Some(ids) => ids.len() as i64,
            None => self.likes_count.unwrap_or(0),
        }
    }

    pub fn is_liked_by(&self, viewer: &CurrentUser) -> bool {
        self.likes
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| *id == viewer.id))
    }

    /// Administrators own every article.
    pub fn is_owned_by(&self, viewer: &CurrentUser) -> bool {
        viewer.is_admin() || self.author.as_ref().is_some_and(|author| author.is(viewer))
    }
}
