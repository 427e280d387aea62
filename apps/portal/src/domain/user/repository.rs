use super::{
    entity::{CurrentUser, PendingUser},
    registration::{RegistrationForm, RegistrationReceipt},
};
use crate::domain::shared::{
    errors::ApiError,
    pagination::{PageRequest, PaginatedResponse},
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// `Ok(None)` when nobody is signed in.
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_pending_users(
        &self,
        request: &PageRequest,
    ) -> Result<PaginatedResponse<PendingUser>, ApiError>;
    async fn approve(&self, user_id: &str) -> Result<(), ApiError>;
    async fn reject(&self, user_id: &str) -> Result<(), ApiError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn register_pending(
        &self,
        form: &RegistrationForm,
    ) -> Result<RegistrationReceipt, ApiError>;
}
