use crate::domain::article::like::LikeState;
use crate::i18n::current::{common, like};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub message: String,
    pub ok_text: String,
    pub cancel_text: String,
}

impl ConfirmPrompt {
    pub fn new(message: &str, ok_text: &str) -> Self {
        Self {
            message: message.to_string(),
            ok_text: ok_text.to_string(),
            cancel_text: common::CANCEL.to_string(),
        }
    }
}

/// Transient user feedback and confirmation gate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    fn toast(&self, message: &str, kind: ToastKind);
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool;
}

/// Everything the like control displays, derived from a [`LikeState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeViewModel {
    pub count_text: String,
    pub label: &'static str,
    pub pressed: bool,
    pub aria_label: &'static str,
}

impl LikeViewModel {
    pub fn from_state(state: &LikeState) -> Self {
        let liked = state.liked_by_me;
        Self {
            count_text: state.displayed_count().to_string(),
            label: if liked {
                like::LABEL_LIKED
            } else {
                like::LABEL_NOT_LIKED
            },
            pressed: liked,
            aria_label: if liked {
                like::ARIA_UNLIKE
            } else {
                like::ARIA_LIKE
            },
        }
    }
}

/// Render surface of the like control.
#[cfg_attr(test, mockall::automock)]
pub trait LikeView: Send + Sync {
    fn render(&self, model: &LikeViewModel);
    fn set_enabled(&self, enabled: bool);
}
