use crate::domain::{
    shared::{
        errors::ApiError,
        pagination::{DEFAULT_PAGE_SIZE, PageRequest, Pager},
    },
    user::{
        entity::PendingUser,
        repository::{AdminApi, ProfileService},
    },
};
use crate::i18n::{current::admin, fill_two};
use crate::presentation::view::traits::{ConfirmPrompt, Notifier, ToastKind};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn prompt(self) -> ConfirmPrompt {
        match self {
            Self::Approve => ConfirmPrompt::new(admin::APPROVE_CONFIRM, admin::APPROVE),
            Self::Reject => ConfirmPrompt::new(admin::REJECT_CONFIRM, admin::REJECT),
        }
    }

    fn done_message(self) -> &'static str {
        match self {
            Self::Approve => admin::APPROVED,
            Self::Reject => admin::REJECTED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub visible: bool,
    pub info: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Pending-registration queue shown to administrators.
pub struct AdminQueueController {
    admin: Arc<dyn AdminApi>,
    profiles: Arc<dyn ProfileService>,
    notifier: Arc<dyn Notifier>,
    search: String,
    limit: u32,
    pager: Pager,
    rows: Vec<PendingUser>,
    total: i64,
}

impl AdminQueueController {
    pub fn new(
        admin: Arc<dyn AdminApi>,
        profiles: Arc<dyn ProfileService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            admin,
            profiles,
            notifier,
            search: String::new(),
            limit: DEFAULT_PAGE_SIZE,
            pager: Pager::default(),
            rows: Vec::new(),
            total: 0,
        }
    }

    pub fn with_page_size(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn rows(&self) -> &[PendingUser] {
        &self.rows
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn current_page(&self) -> u32 {
        self.pager.current_page()
    }

    /// Checks that the viewer is an administrator and loads the first page.
    #[instrument(skip(self))]
    pub async fn open(&mut self) -> bool {
        match self.profiles.current_user().await {
            Ok(Some(viewer)) if viewer.is_admin() => {
                self.load().await;
                true
            }
            Ok(_) => {
                warn!("admin queue opened without admin role");
                self.notifier.toast(admin::NO_ACCESS, ToastKind::Error);
                false
            }
            Err(err) => {
                warn!(error = %err, "could not resolve viewer for admin queue");
                self.notifier.toast(admin::LOAD_FAILED, ToastKind::Error);
                false
            }
        }
    }

    /// Restart from page 1 with a new search phrase.
    pub async fn search(&mut self, phrase: impl Into<String>) -> bool {
        self.search = phrase.into();
        self.pager.reset();
        self.load().await
    }

    pub async fn go_to(&mut self, page: u32) -> bool {
        self.pager.apply(page, self.pager.total_pages().max(page));
        self.load().await
    }

    pub async fn next_page(&mut self) -> bool {
        if !self.pager.advance() {
            return false;
        }
        self.load().await
    }

    pub async fn previous_page(&mut self) -> bool {
        if !self.pager.retreat() {
            return false;
        }
        self.load().await
    }

    #[instrument(skip(self), fields(page = self.pager.current_page(), search = %self.search))]
    pub async fn load(&mut self) -> bool {
        let request = PageRequest {
            search: self.search.clone(),
            page: self.pager.current_page(),
            limit: self.limit,
        };

        match self.admin.list_pending_users(&request).await {
            Ok(page) => {
                debug!(rows = page.items.len(), total = page.total, "pending users loaded");
                self.rows = page.items;
                self.total = page.total;
                self.pager.apply(page.page, page.total_pages);
                true
            }
            Err(err) => {
                warn!(error = %err, "failed to load pending users");
                let message = match &err {
                    ApiError::Status { .. } => err.user_message(admin::PENDING_LOAD_FAILED),
                    _ => admin::FETCH_FAILED.to_string(),
                };
                self.notifier.toast(&message, ToastKind::Error);
                false
            }
        }
    }

    /// Asks for confirmation, applies the decision and refreshes the list.
    #[instrument(skip(self))]
    pub async fn decide(&mut self, user_id: &str, decision: Decision) -> bool {
        if !self.notifier.confirm(decision.prompt()).await {
            return false;
        }

        let result = match decision {
            Decision::Approve => self.admin.approve(user_id).await,
            Decision::Reject => self.admin.reject(user_id).await,
        };

        match result {
            Ok(()) => {
                info!(?decision, "pending user decided");
                self.notifier
                    .toast(decision.done_message(), ToastKind::Success);
                self.load().await;
                true
            }
            Err(err) => {
                warn!(error = %err, ?decision, "decision failed");
                self.notifier
                    .toast(&err.user_message(admin::OPERATION_FAILED), ToastKind::Error);
                false
            }
        }
    }

    pub fn pagination(&self) -> PaginationView {
        PaginationView {
            visible: self.pager.is_visible(),
            info: fill_two(
                admin::PAGE_INFO_TEMPLATE,
                self.pager.current_page(),
                self.pager.total_pages(),
            ),
            prev_enabled: self.pager.can_go_back(),
            next_enabled: self.pager.can_go_forward(),
        }
    }
}
