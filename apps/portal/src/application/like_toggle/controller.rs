use crate::domain::{
    article::{
        like::{LikeSnapshot, LikeState},
        repository::ArticleApi,
    },
    shared::errors::ApiError,
};
use crate::i18n::current::like;
use crate::presentation::view::traits::{LikeView, LikeViewModel, Notifier, ToastKind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub const DEFAULT_LIKE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Another toggle was still in flight; nothing happened.
    Skipped,
    /// The server answered; the state now holds its values.
    Confirmed(LikeState),
    /// The request failed; the state is back at the pre-toggle snapshot.
    RolledBack(LikeState),
}

/// Optimistic like toggle for a single article.
///
/// The prediction is shown before the request leaves, then replaced by the
/// server's answer or rolled back. At most one request is in flight per
/// controller; a toggle attempted meanwhile is dropped, not queued.
pub struct LikeToggleController {
    article_id: String,
    api: Arc<dyn ArticleApi>,
    view: Arc<dyn LikeView>,
    notifier: Arc<dyn Notifier>,
    timeout: Duration,
    state: Mutex<LikeState>,
}

impl LikeToggleController {
    pub fn new(
        article_id: impl Into<String>,
        initial: LikeState,
        api: Arc<dyn ArticleApi>,
        view: Arc<dyn LikeView>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            article_id: article_id.into(),
            api,
            view,
            notifier,
            timeout: DEFAULT_LIKE_TIMEOUT,
            state: Mutex::new(LikeState {
                busy: false,
                ..initial
            }),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    pub fn state(&self) -> LikeState {
        *self.lock_state()
    }

    /// Draw the current state, e.g. right after the article view mounts.
    pub fn render(&self) {
        let state = self.state();
        self.view.render(&LikeViewModel::from_state(&state));
        self.view.set_enabled(!state.busy);
    }

    #[instrument(skip(self), fields(article_id = %self.article_id))]
    pub async fn toggle(&self) -> ToggleOutcome {
        let (snapshot, predicted) = {
            let mut state = self.lock_state();
            if state.busy {
                debug!("like toggle already in flight, ignoring");
                return ToggleOutcome::Skipped;
            }
            state.busy = true;
            let snapshot = state.snapshot();
            state.apply_optimistic();
            (snapshot, *state)
        };
        let in_flight = InFlight {
            controller: self,
            snapshot,
            armed: true,
        };

        self.view.set_enabled(false);
        self.view.render(&LikeViewModel::from_state(&predicted));

        let result = match tokio::time::timeout(self.timeout, self.api.toggle_like(&self.article_id))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout),
        };
        in_flight.disarm();

        let settled = {
            let mut state = self.lock_state();
            match &result {
                Ok(confirmed) => state.reconcile(*confirmed),
                Err(_) => state.restore(snapshot),
            }
            *state
        };
        self.view.render(&LikeViewModel::from_state(&settled));

        if let Err(err) = &result {
            warn!(error = %err, "like toggle failed, rolled back");
            self.notifier
                .toast(&err.user_message_with_status(like::SAVE_FAILED), ToastKind::Error);
        }

        let finished = {
            let mut state = self.lock_state();
            state.busy = false;
            *state
        };
        self.view.set_enabled(true);

        match result {
            Ok(_) => {
                debug!(
                    liked = finished.liked_by_me,
                    likes = finished.likes_count,
                    "like toggle confirmed"
                );
                ToggleOutcome::Confirmed(finished)
            }
            Err(_) => ToggleOutcome::RolledBack(finished),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, LikeState> {
        // State is plain data, so a poisoned lock still holds a usable value.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Rolls back and re-enables the control when a toggle future is dropped
/// before the server answered.
struct InFlight<'a> {
    controller: &'a LikeToggleController,
    snapshot: LikeSnapshot,
    armed: bool,
}

impl InFlight<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let restored = {
            let mut state = self.controller.lock_state();
            state.restore(self.snapshot);
            state.busy = false;
            *state
        };
        debug!("like toggle abandoned, rolled back");
        self.controller
            .view
            .render(&LikeViewModel::from_state(&restored));
        self.controller.view.set_enabled(true);
    }
}
