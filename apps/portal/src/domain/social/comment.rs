use crate::domain::user::entity::{AuthorRef, CurrentUser};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    /// Server-sanitized markup.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Comment {
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().and_then(AuthorRef::username)
    }

    /// Authors edit their own comments; administrators edit any.
    pub fn is_editable_by(&self, viewer: Option<&CurrentUser>) -> bool {
        let Some(viewer) = viewer else {
            return false;
        };
        viewer.is_admin() || self.author.as_ref().is_some_and(|author| author.is(viewer))
    }
}

/// Comment body that passed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CommentText {
    #[validate(length(min = 6))]
    pub value: String,
}

impl CommentText {
    pub const MIN_LENGTH: usize = 6;

    /// Trims `raw` and checks the minimum length.
    pub fn new(raw: &str) -> Result<Self, validator::ValidationErrors> {
        let text = Self {
            value: raw.trim().to_string(),
        };
        text.validate()?;
        Ok(text)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
