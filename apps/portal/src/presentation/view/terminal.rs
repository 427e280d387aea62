//! Terminal rendering of the portal views.

use super::traits::{ConfirmPrompt, LikeView, LikeViewModel, Notifier, ToastKind};
use crate::application::{
    admin_queue::use_case::PaginationView,
    article_view::dto::LoadedArticle,
    comments::{
        edit::{CommentEntry, EditPhase},
        use_case::CommentsStatus,
    },
};
use crate::domain::user::entity::PendingUser;
use crate::i18n::{
    current::{admin, article, comments, common},
    fill_one,
};
use async_trait::async_trait;
use std::fmt::Write as _;
use std::io::{self, BufRead, Write as _};
use tracing::{debug, warn};

pub struct TerminalNotifier {
    assume_yes: bool,
}

impl TerminalNotifier {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    fn toast(&self, message: &str, kind: ToastKind) {
        match kind {
            ToastKind::Error => eprintln!("✗ {message}"),
            ToastKind::Success => println!("✓ {message}"),
            ToastKind::Info => println!("• {message}"),
        }
    }

    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        if self.assume_yes {
            debug!(message = %prompt.message, "confirmation assumed");
            return true;
        }

        let question = format!(
            "{} ({} / {}) {} ",
            prompt.message,
            prompt.ok_text,
            prompt.cancel_text,
            common::CONFIRM_HINT
        );
        let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
            let mut stderr = io::stderr();
            stderr.write_all(question.as_bytes())?;
            stderr.flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => is_affirmative(&line),
            Ok(Err(err)) => {
                warn!(error = %err, "could not read confirmation");
                false
            }
            Err(err) => {
                warn!(error = %err, "confirmation prompt aborted");
                false
            }
        }
    }
}

/// Anything but an explicit yes declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "t" | "tak" | "y" | "yes"
    )
}

pub struct TerminalLikeView;

impl LikeView for TerminalLikeView {
    fn render(&self, model: &LikeViewModel) {
        println!("{}", render_like(model));
    }

    fn set_enabled(&self, enabled: bool) {
        debug!(enabled, "like control");
    }
}

pub fn render_like(model: &LikeViewModel) -> String {
    let heart = if model.pressed { '♥' } else { '♡' };
    format!("{heart} {} · {}", model.count_text, model.label)
}

pub fn render_article(loaded: &LoadedArticle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", loaded.title);
    let mut meta = vec![loaded.meta.author_label.clone()];
    if let Some(published) = &loaded.meta.published {
        meta.push(published.clone());
    }
    meta.push(fill_one(
        article::COMMENT_COUNT_TEMPLATE,
        loaded.meta.comment_count,
    ));
    let _ = writeln!(out, "{}", meta.join(" · "));
    let _ = writeln!(out);

    for paragraph in &loaded.paragraphs {
        let _ = writeln!(out, "{paragraph}");
    }

    if let Some(main) = loaded.gallery.main_image() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {main}", article::IMAGES);
        for (index, url) in loaded.gallery.thumbnails().iter().enumerate() {
            let marker = if index == loaded.gallery.active_index() {
                '*'
            } else {
                ' '
            };
            let _ = writeln!(out, " {marker} [{}] {url}", index + 1);
        }
    }

    if let Some(href) = loaded.controls.edit_href(&loaded.id) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {href}", article::EDIT_ARTICLE);
    }
    out
}

pub fn render_comments(status: CommentsStatus, entries: &[CommentEntry]) -> String {
    match status {
        CommentsStatus::Loading => return format!("{}\n", comments::LOADING),
        CommentsStatus::Failed => return format!("{}\n", comments::LOAD_FAILED),
        CommentsStatus::Ready if entries.is_empty() => return format!("{}\n", comments::EMPTY),
        CommentsStatus::Ready => {}
    }

    let mut out = String::new();
    for entry in entries {
        let author = entry.comment.author_name().unwrap_or(comments::ANONYMOUS);
        let text = match entry.phase() {
            EditPhase::Viewing => entry.comment.text.as_str(),
            EditPhase::Editing { draft, .. } | EditPhase::Saving { draft, .. } => draft.as_str(),
        };
        let suffix = if entry.can_edit {
            format!("  [{}]", entry.id())
        } else {
            String::new()
        };
        let _ = writeln!(out, "{author}: {text}{suffix}");
    }
    out
}

pub fn render_pending(rows: &[PendingUser], pagination: &PaginationView) -> String {
    if rows.is_empty() {
        return format!("{}\n", admin::NO_RESULTS);
    }

    let mut widths = admin::COLUMNS.map(|title| title.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &admin::COLUMNS, &widths);
    for row in rows {
        write_row(&mut out, &cells(row), &widths);
    }

    if pagination.visible {
        let prev = if pagination.prev_enabled { "<" } else { " " };
        let next = if pagination.next_enabled { ">" } else { " " };
        let _ = writeln!(out, "{prev} {} {next}", pagination.info);
    }
    out
}

fn cells(row: &PendingUser) -> [&str; 4] {
    [&row.id, &row.username, &row.email, &row.role]
}

fn write_row(out: &mut String, cells: &[&str; 4], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
