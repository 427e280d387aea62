use super::gallery::Gallery;
use crate::domain::user::entity::CurrentUser;
use crate::i18n::current::article;
use chrono::{DateTime, Datelike, Local, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMeta {
    pub author_label: String,
    pub published: Option<String>,
    pub comment_count: i64,
}

/// Which interactive controls the viewer gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleControls {
    /// Signed-in viewers who do not own the article may like it.
    pub can_like: bool,
    pub is_owner: bool,
}

impl ArticleControls {
    pub fn edit_href(&self, article_id: &str) -> Option<String> {
        self.is_owner
            .then(|| format!("/new-article.html?id={}", article_id))
    }

    /// The server refused an owner action; stop offering owner controls.
    pub fn revoke_ownership(&mut self) {
        self.is_owner = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedArticle {
    pub id: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub meta: ArticleMeta,
    pub controls: ArticleControls,
    pub gallery: Gallery,
    pub viewer: Option<CurrentUser>,
}

impl LoadedArticle {
    /// Only signed-in viewers see the comment form.
    pub fn comment_form_visible(&self) -> bool {
        self.viewer.is_some()
    }
}

pub fn title_or_placeholder(title: Option<&str>) -> String {
    title
        .filter(|t| !t.is_empty())
        .unwrap_or(article::UNTITLED)
        .to_string()
}

pub fn split_paragraphs(content: Option<&str>) -> Vec<String> {
    match content {
        Some(text) if !text.is_empty() => text.split('\n').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Polish long date, e.g. "19 października 2026". Unparseable input yields `None`.
pub fn format_long_date(raw: &str) -> Option<String> {
    let date = match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.with_timezone(&Local).date_naive(),
        Err(_) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?,
    };
    let month = article::MONTHS_GENITIVE[date.month0() as usize];
    Some(format!("{} {} {}", date.day(), month, date.year()))
}
