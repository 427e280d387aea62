use super::{AdminCommand, ArticleCommand, Cli, CommentCommand, Commands};
use crate::application::{
    admin_queue::use_case::{AdminQueueController, Decision},
    article_view::use_case::{ArticlePage, ArticleViewController, DeleteOutcome},
    comments::use_case::{CommentsController, SubmitOutcome},
    navigation::{BackTarget, HOME_PATH},
    registration::use_case::{RegistrationController, RegistrationOutcome},
};
use crate::config::Config;
use crate::domain::user::registration::RegistrationForm;
use crate::i18n::current::{article, comments, like, registration};
use crate::infrastructure::http::ApiClient;
use crate::presentation::view::{
    terminal::{TerminalLikeView, TerminalNotifier, render_article, render_comments, render_pending},
    traits::{Notifier, ToastKind},
};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared collaborators for one CLI invocation.
struct Session {
    config: Config,
    api: Arc<ApiClient>,
    notifier: Arc<TerminalNotifier>,
}

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let session = Session {
        api: Arc::new(ApiClient::new(&config)?),
        notifier: Arc::new(TerminalNotifier::new(cli.yes)),
        config,
    };

    match cli.command {
        Commands::Article { action } => match action {
            ArticleCommand::Show {
                id,
                image,
                referrer,
            } => show_article(&session, &id, image, referrer.as_deref()).await,
            ArticleCommand::Like { id } => like_article(&session, &id).await,
            ArticleCommand::Delete { id, referrer } => {
                delete_article(&session, &id, referrer.as_deref()).await
            }
        },
        Commands::Comment { action } => match action {
            CommentCommand::Add { article_id, text } => add_comment(&session, &article_id, text).await,
            CommentCommand::Edit {
                article_id,
                comment_id,
                text,
            } => edit_comment(&session, &article_id, &comment_id, &text).await,
            CommentCommand::Delete {
                article_id,
                comment_id,
            } => delete_comment(&session, &article_id, &comment_id).await,
        },
        Commands::Admin { action } => match action {
            AdminCommand::Pending { search, page } => list_pending(&session, search, page).await,
            AdminCommand::Approve { user_id } => decide(&session, &user_id, Decision::Approve).await,
            AdminCommand::Reject { user_id } => decide(&session, &user_id, Decision::Reject).await,
        },
        Commands::Register {
            username,
            email,
            password,
            role,
            next,
        } => {
            let mut form = RegistrationForm::new(username, email, password, role);
            register(&session, &mut form, next.as_deref()).await
        }
    }
}

fn article_controller(session: &Session, id: &str) -> ArticleViewController {
    ArticleViewController::new(
        id,
        session.api.clone(),
        session.api.clone(),
        session.notifier.clone(),
        Arc::new(TerminalLikeView),
        session.config.api_base.clone(),
        session.config.origin.clone(),
    )
    .with_like_timeout(session.config.like_timeout())
}

fn comments_controller(session: &Session, article_id: &str) -> CommentsController {
    CommentsController::new(
        article_id,
        session.api.clone(),
        session.api.clone(),
        session.notifier.clone(),
    )
}

async fn show_article(
    session: &Session,
    id: &str,
    image: Option<usize>,
    referrer: Option<&str>,
) -> Result<()> {
    let controller = article_controller(session, id);
    let (mut loaded, likes) = match controller.load().await {
        ArticlePage::Loaded { article, likes } => (article, likes),
        ArticlePage::Failed { title, message } => anyhow::bail!("{title}: {message}"),
    };

    if let Some(position) = image {
        if !loaded.gallery.select(position.saturating_sub(1)) {
            warn!(position, "no such gallery image");
        }
    }

    print!("{}", render_article(&loaded));
    println!();
    likes.render();

    let mut thread = comments_controller(session, id);
    thread.load().await;
    println!();
    print!("{}", render_comments(thread.status(), thread.entries()));

    let back = match controller.back_target(session.config.saved_list_url.as_deref(), referrer) {
        BackTarget::SavedList(url) => url,
        BackTarget::HistoryBack => article::HISTORY_BACK.to_string(),
        BackTarget::Home => HOME_PATH.to_string(),
    };
    println!();
    println!("← {}: {back}", article::BACK);
    Ok(())
}

async fn like_article(session: &Session, id: &str) -> Result<()> {
    let controller = article_controller(session, id);
    let (loaded, likes) = match controller.load().await {
        ArticlePage::Loaded { article, likes } => (article, likes),
        ArticlePage::Failed { title, message } => anyhow::bail!("{title}: {message}"),
    };

    if !loaded.controls.can_like {
        session.notifier.toast(like::UNAVAILABLE, ToastKind::Info);
        return Ok(());
    }

    let outcome = likes.toggle().await;
    debug!(?outcome, "like toggle finished");
    Ok(())
}

async fn delete_article(session: &Session, id: &str, referrer: Option<&str>) -> Result<()> {
    let controller = article_controller(session, id);
    let mut loaded = match controller.load().await {
        ArticlePage::Loaded { article, .. } => article,
        ArticlePage::Failed { title, message } => anyhow::bail!("{title}: {message}"),
    };

    match controller.delete_article(&mut loaded.controls, referrer).await {
        DeleteOutcome::Deleted { redirect_to, after } => {
            tokio::time::sleep(after).await;
            println!("→ {redirect_to}");
        }
        DeleteOutcome::Unavailable => {
            session
                .notifier
                .toast(article::DELETE_FORBIDDEN, ToastKind::Error);
        }
        outcome => debug!(?outcome, "article not deleted"),
    }
    Ok(())
}

async fn add_comment(session: &Session, article_id: &str, text: String) -> Result<()> {
    let mut thread = comments_controller(session, article_id);
    thread.set_draft(text);
    if thread.submit().await == SubmitOutcome::Posted {
        print!("{}", render_comments(thread.status(), thread.entries()));
    }
    Ok(())
}

async fn edit_comment(
    session: &Session,
    article_id: &str,
    comment_id: &str,
    text: &str,
) -> Result<()> {
    let mut thread = comments_controller(session, article_id);
    thread.load().await;

    if !thread.begin_edit(comment_id) {
        session
            .notifier
            .toast(comments::NOT_EDITABLE, ToastKind::Error);
        return Ok(());
    }
    thread.update_edit(comment_id, text);
    if thread.save_edit(comment_id).await {
        print!("{}", render_comments(thread.status(), thread.entries()));
    }
    Ok(())
}

async fn delete_comment(session: &Session, article_id: &str, comment_id: &str) -> Result<()> {
    let mut thread = comments_controller(session, article_id);
    thread.load().await;
    if ensure_modifiable(&thread, comment_id, session.notifier.as_ref()) {
        thread.delete(comment_id).await;
    }
    Ok(())
}

/// Reports unknown or foreign comments instead of silently doing nothing.
fn ensure_modifiable(
    thread: &CommentsController,
    comment_id: &str,
    notifier: &dyn Notifier,
) -> bool {
    if thread.can_modify(comment_id) {
        return true;
    }
    notifier.toast(comments::NOT_EDITABLE, ToastKind::Error);
    false
}

fn admin_queue(session: &Session) -> AdminQueueController {
    AdminQueueController::new(
        session.api.clone(),
        session.api.clone(),
        session.notifier.clone(),
    )
    .with_page_size(session.config.admin_page_size)
}

async fn list_pending(session: &Session, search: Option<String>, page: u32) -> Result<()> {
    let mut queue = admin_queue(session);
    if !queue.open().await {
        return Ok(());
    }
    if let Some(phrase) = search {
        queue.search(phrase).await;
    }
    if page > 1 {
        queue.go_to(page).await;
    }
    print!("{}", render_pending(queue.rows(), &queue.pagination()));
    Ok(())
}

async fn decide(session: &Session, user_id: &str, decision: Decision) -> Result<()> {
    let mut queue = admin_queue(session);
    if !queue.open().await {
        return Ok(());
    }
    if queue.decide(user_id, decision).await {
        print!("{}", render_pending(queue.rows(), &queue.pagination()));
    }
    Ok(())
}

async fn register(session: &Session, form: &mut RegistrationForm, next: Option<&str>) -> Result<()> {
    let controller = RegistrationController::new(session.api.clone());
    match controller.submit(form, next).await {
        RegistrationOutcome::Submitted {
            message,
            redirect_to,
        } => {
            session.notifier.toast(&message, ToastKind::Success);
            println!("→ {redirect_to}");
        }
        RegistrationOutcome::Invalid(errors) => {
            session
                .notifier
                .toast(registration::INVALID_FORM, ToastKind::Error);
            for field in errors.field_errors().keys() {
                eprintln!("  - {field}");
            }
        }
        RegistrationOutcome::Rejected { message }
        | RegistrationOutcome::ConnectionFailed { message } => {
            session.notifier.toast(&message, ToastKind::Error);
        }
    }
    Ok(())
}
