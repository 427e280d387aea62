use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload of a pending-registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistrationForm {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub role: String,
}

impl RegistrationForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role: role.into(),
        }
    }

    /// Clear every field, as a submitted form does.
    pub fn reset(&mut self) {
        self.username.clear();
        self.email.clear();
        self.password.clear();
        self.role.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationReceipt {
    #[serde(default)]
    pub message: Option<String>,
}
