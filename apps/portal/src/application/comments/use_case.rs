use super::edit::CommentEntry;
use crate::domain::{
    shared::errors::ApiError,
    social::{comment::CommentText, repository::CommentApi},
    user::{entity::CurrentUser, repository::ProfileService},
};
use crate::i18n::current::{comments, common};
use crate::presentation::view::traits::{ConfirmPrompt, Notifier, ToastKind};
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

lazy_static! {
    static ref REJECTED_DRAFT_REGEX: Regex = Regex::new(comments::REJECTED_DRAFT_PATTERN).unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentsStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Too short; nothing was sent.
    Invalid,
    Posted,
    /// The server refused the comment. The draft is cleared when the refusal
    /// says the text was empty or too short after filtering.
    Rejected { draft_cleared: bool },
    /// The request did not get an answer.
    Failed,
}

/// Comment thread under an article.
pub struct CommentsController {
    article_id: String,
    comments: Arc<dyn CommentApi>,
    profiles: Arc<dyn ProfileService>,
    notifier: Arc<dyn Notifier>,
    viewer: Option<CurrentUser>,
    entries: Vec<CommentEntry>,
    status: CommentsStatus,
    draft: String,
}

impl CommentsController {
    pub fn new(
        article_id: impl Into<String>,
        comments: Arc<dyn CommentApi>,
        profiles: Arc<dyn ProfileService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            article_id: article_id.into(),
            comments,
            profiles,
            notifier,
            viewer: None,
            entries: Vec::new(),
            status: CommentsStatus::Loading,
            draft: String::new(),
        }
    }

    pub fn entries(&self) -> &[CommentEntry] {
        &self.entries
    }

    pub fn status(&self) -> CommentsStatus {
        self.status
    }

    pub fn viewer(&self) -> Option<&CurrentUser> {
        self.viewer.as_ref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    #[instrument(skip(self), fields(article_id = %self.article_id))]
    pub async fn load(&mut self) {
        self.status = CommentsStatus::Loading;

        let listed = match self.comments.list(&self.article_id).await {
            Ok(listed) => listed,
            Err(err) => {
                warn!(error = %err, "failed to load comments");
                self.status = CommentsStatus::Failed;
                self.notifier.toast(comments::LOAD_FAILED, ToastKind::Error);
                return;
            }
        };

        self.viewer = match self.profiles.current_user().await {
            Ok(viewer) => viewer,
            Err(err) => {
                debug!(error = %err, "profile unavailable, comments are read-only");
                None
            }
        };

        let viewer = self.viewer.as_ref();
        self.entries = listed
            .into_iter()
            .map(|comment| CommentEntry::new(comment, viewer))
            .collect();
        self.status = CommentsStatus::Ready;
        debug!(count = self.entries.len(), "comments loaded");
    }

    /// Posts the current draft.
    #[instrument(skip(self), fields(article_id = %self.article_id))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let text = match CommentText::new(&self.draft) {
            Ok(text) => text,
            Err(_) => {
                self.notifier
                    .toast(comments::TOO_SHORT_ON_SUBMIT, ToastKind::Error);
                return SubmitOutcome::Invalid;
            }
        };

        match self.comments.create(&self.article_id, &text).await {
            Ok(()) => {
                debug!("comment posted");
                self.draft.clear();
                self.load().await;
                SubmitOutcome::Posted
            }
            Err(err @ ApiError::Status { .. }) => {
                let message = err.user_message(common::SERVER_ERROR);
                warn!(error = %err, %message, "comment rejected");
                self.notifier.toast(&message, ToastKind::Error);

                let draft_cleared =
                    err.is_bad_request() && REJECTED_DRAFT_REGEX.is_match(&message);
                if draft_cleared {
                    self.draft.clear();
                }
                SubmitOutcome::Rejected { draft_cleared }
            }
            Err(err) => {
                warn!(error = %err, "comment could not be sent");
                self.notifier
                    .toast(common::CONNECTION_FAILED, ToastKind::Error);
                SubmitOutcome::Failed
            }
        }
    }

    /// Asks for confirmation, then deletes the comment.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, comment_id: &str) -> bool {
        let Some(index) = self.editable_position(comment_id) else {
            return false;
        };

        let confirmed = self
            .notifier
            .confirm(ConfirmPrompt::new(comments::DELETE_CONFIRM, common::DELETE))
            .await;
        if !confirmed {
            return false;
        }

        match self.comments.delete(comment_id).await {
            Ok(()) => {
                self.entries.remove(index);
                self.notifier.toast(comments::DELETED, ToastKind::Success);
                true
            }
            Err(err) => {
                warn!(error = %err, "comment delete failed");
                self.notifier.toast(
                    &err.user_message_with_status(comments::DELETE_FAILED),
                    ToastKind::Error,
                );
                false
            }
        }
    }

    /// Whether the viewer may edit or delete this comment.
    pub fn can_modify(&self, comment_id: &str) -> bool {
        self.editable_position(comment_id).is_some()
    }

    pub fn begin_edit(&mut self, comment_id: &str) -> bool {
        self.entry_mut(comment_id)
            .is_some_and(|entry| entry.begin_edit())
    }

    pub fn update_edit(&mut self, comment_id: &str, text: &str) -> bool {
        self.entry_mut(comment_id)
            .is_some_and(|entry| entry.update_draft(text))
    }

    pub fn cancel_edit(&mut self, comment_id: &str) -> bool {
        self.entry_mut(comment_id).is_some_and(|entry| entry.cancel())
    }

    /// Saves the open editor of a comment; returns whether the server took it.
    #[instrument(skip(self))]
    pub async fn save_edit(&mut self, comment_id: &str) -> bool {
        let Some(index) = self.position(comment_id) else {
            return false;
        };
        let text = match self.entries[index].start_save() {
            None => return false,
            Some(Err(_)) => {
                self.notifier
                    .toast(comments::TOO_SHORT_ON_EDIT, ToastKind::Error);
                return false;
            }
            Some(Ok(text)) => text,
        };

        match self.comments.update(comment_id, &text).await {
            Ok(saved_text) => {
                self.entries[index].finish_save(saved_text);
                self.notifier.toast(comments::UPDATED, ToastKind::Success);
                true
            }
            Err(err) => {
                warn!(error = %err, "comment update failed");
                self.entries[index].abort_save();
                self.notifier.toast(
                    &err.user_message_with_status(comments::SAVE_FAILED),
                    ToastKind::Error,
                );
                false
            }
        }
    }

    fn position(&self, comment_id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == comment_id)
    }

    fn editable_position(&self, comment_id: &str) -> Option<usize> {
        self.position(comment_id)
            .filter(|index| self.entries[*index].can_edit)
    }

    fn entry_mut(&mut self, comment_id: &str) -> Option<&mut CommentEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id() == comment_id)
    }
}
