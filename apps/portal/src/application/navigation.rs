use std::time::Duration;
use url::Url;

pub const HOME_PATH: &str = "/";

/// Pause between the "deleted" toast and leaving the page.
pub const POST_DELETE_REDIRECT_DELAY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackTarget {
    /// The list URL remembered when the reader left it.
    SavedList(String),
    /// The previous page was ours; step back in history.
    HistoryBack,
    Home,
}

/// Where the "back to list" control leads.
pub fn back_target(saved_list_url: Option<&str>, referrer: Option<&str>, origin: &Url) -> BackTarget {
    if let Some(saved) = saved_list_url.filter(|s| !s.is_empty()) {
        return BackTarget::SavedList(saved.to_string());
    }
    if referrer.and_then(|r| same_origin(r, origin)).is_some() {
        return BackTarget::HistoryBack;
    }
    BackTarget::Home
}

/// Where to go once an article is gone: back to the home list we came from,
/// otherwise home.
pub fn post_delete_redirect(referrer: Option<&str>, origin: &Url) -> String {
    match referrer.and_then(|r| same_origin(r, origin)) {
        Some(url) if url.path() == HOME_PATH => url.to_string(),
        _ => HOME_PATH.to_string(),
    }
}

fn same_origin(candidate: &str, origin: &Url) -> Option<Url> {
    let url = Url::parse(candidate).ok()?;
    (url.origin() == origin.origin()).then_some(url)
}
