pub mod admin_queue;
pub mod article_view;
pub mod comments;
pub mod like_toggle;
pub mod navigation;
pub mod registration;
