use crate::application::navigation::HOME_PATH;
use crate::domain::{
    shared::errors::ApiError,
    user::{registration::RegistrationForm, repository::RegistrationApi},
};
use crate::i18n::current::{common, registration};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// The form never left the client.
    Invalid(validator::ValidationErrors),
    Submitted { message: String, redirect_to: String },
    Rejected { message: String },
    ConnectionFailed { message: String },
}

pub struct RegistrationController {
    api: Arc<dyn RegistrationApi>,
}

impl RegistrationController {
    pub fn new(api: Arc<dyn RegistrationApi>) -> Self {
        Self { api }
    }

    /// Sends a pending registration. A successful submission resets the form
    /// and points at `next`, or home.
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn submit(&self, form: &mut RegistrationForm, next: Option<&str>) -> RegistrationOutcome {
        if let Err(errors) = form.validate() {
            warn!(%errors, "registration form rejected locally");
            return RegistrationOutcome::Invalid(errors);
        }

        match self.api.register_pending(form).await {
            Ok(_) => {
                info!("registration request submitted");
                form.reset();
                RegistrationOutcome::Submitted {
                    message: registration::SUBMITTED.to_string(),
                    redirect_to: next
                        .filter(|n| !n.is_empty())
                        .unwrap_or(HOME_PATH)
                        .to_string(),
                }
            }
            Err(err @ ApiError::Status { .. }) => {
                warn!(error = %err, "registration refused");
                RegistrationOutcome::Rejected {
                    message: err.user_message(registration::FAILED),
                }
            }
            Err(err) => {
                warn!(error = %err, "registration could not be sent");
                RegistrationOutcome::ConnectionFailed {
                    message: common::CONNECTION_FAILED.to_string(),
                }
            }
        }
    }
}
