use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";

/// The signed-in viewer as reported by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Author reference: the API sends either a bare id or a populated profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Id(String),
    Profile(AuthorProfile),
}

impl AuthorRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Profile(profile) => &profile.id,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Profile(profile) => non_blank(profile.username.as_deref()),
        }
    }

    /// Email first, then username.
    pub fn display_label(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Profile(profile) => non_blank(profile.email.as_deref())
                .or_else(|| non_blank(profile.username.as_deref())),
        }
    }

    pub fn is(&self, user: &CurrentUser) -> bool {
        self.id() == user.id
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A registration request waiting for an administrator's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}
