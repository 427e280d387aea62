use super::helpers::{
    ARTICLE_ID, AUTHOR_ID, FakeCms, FakeState, RecordingLikeView, RecordingNotifier,
    SESSION_COOKIE, spawn_fake_cms,
};
use portal::{
    application::{
        article_view::use_case::{ArticlePage, ArticleViewController, DeleteOutcome},
        comments::use_case::{CommentsController, CommentsStatus, SubmitOutcome},
        like_toggle::controller::ToggleOutcome,
    },
    domain::{
        article::{like::LikeState, repository::ArticleApi},
        shared::errors::ApiError,
        social::{comment::CommentText, repository::CommentApi},
        user::repository::ProfileService,
    },
    i18n::current::{comments, like},
};
use serde_json::json;
use std::sync::Arc;

fn article_view(
    cms: &FakeCms,
    notifier: Arc<RecordingNotifier>,
    view: Arc<RecordingLikeView>,
) -> ArticleViewController {
    let api = cms.client();
    ArticleViewController::new(
        ARTICLE_ID,
        api.clone(),
        api,
        notifier,
        view,
        cms.base.clone(),
        cms.config().origin,
    )
}

#[tokio::test]
async fn reader_loads_article_and_likes_it() {
    let cms = spawn_fake_cms(FakeState {
        liked_by: vec!["u3".into()],
        ..FakeState::with_viewer("u2", "user")
    })
    .await;
    let notifier = RecordingNotifier::answering(true);
    let view = RecordingLikeView::new();

    let page = article_view(&cms, notifier.clone(), view.clone()).load().await;
    let ArticlePage::Loaded { article, likes } = page else {
        panic!("article should load");
    };

    assert_eq!(article.title, "Wiosna w mieście");
    assert_eq!(article.paragraphs, vec!["Pierwszy akapit", "Drugi akapit"]);
    assert_eq!(article.meta.author_label, "autor@example.com");
    assert_eq!(article.meta.published.as_deref(), Some("5 marca 2024"));
    assert!(article.controls.can_like);
    assert!(!article.controls.is_owner);
    assert!(article.comment_form_visible());
    assert_eq!(
        article.gallery.main_image().map(|url| url.ends_with("/uploads/1.jpg")),
        Some(true)
    );
    assert_eq!(likes.state(), LikeState::new(false, 1));

    assert_eq!(
        likes.toggle().await,
        ToggleOutcome::Confirmed(LikeState::new(true, 2))
    );
    assert_eq!(
        likes.toggle().await,
        ToggleOutcome::Confirmed(LikeState::new(false, 1))
    );

    let state = cms.state();
    assert_eq!(state.like_calls, 2);
    assert_eq!(state.cookies.len(), 2);
    assert!(state.cookies.iter().all(|c| c.contains(SESSION_COOKIE)));
    assert!(notifier.toasts().is_empty());
    assert_eq!(view.enabled_history(), vec![false, true, false, true]);
}

#[tokio::test]
async fn server_refusal_rolls_like_back_with_its_message() {
    let cms = spawn_fake_cms(FakeState {
        like_failure: Some((500, "Serwer chwilowo niedostępny".into())),
        ..FakeState::with_viewer("u2", "user")
    })
    .await;
    let notifier = RecordingNotifier::answering(true);
    let view = RecordingLikeView::new();

    let ArticlePage::Loaded { likes, .. } =
        article_view(&cms, notifier.clone(), view.clone()).load().await
    else {
        panic!("article should load");
    };

    assert_eq!(
        likes.toggle().await,
        ToggleOutcome::RolledBack(LikeState::new(false, 0))
    );
    assert_eq!(notifier.errors(), vec!["Serwer chwilowo niedostępny"]);

    let counts: Vec<String> = view.renders().into_iter().map(|m| m.count_text).collect();
    assert_eq!(counts, vec!["1", "0"]);
}

#[tokio::test]
async fn incomplete_like_answer_is_malformed() {
    let cms = spawn_fake_cms(FakeState {
        like_malformed: true,
        ..FakeState::with_viewer("u2", "user")
    })
    .await;

    let err = cms.client().toggle_like(ARTICLE_ID).await.unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn anonymous_viewer_gets_read_only_page() {
    let cms = spawn_fake_cms(FakeState::default()).await;
    assert_eq!(cms.client().current_user().await, Ok(None));

    let ArticlePage::Loaded { article, .. } = article_view(
        &cms,
        RecordingNotifier::answering(true),
        RecordingLikeView::new(),
    )
    .load()
    .await
    else {
        panic!("article should load");
    };
    assert!(!article.controls.can_like);
    assert!(!article.comment_form_visible());
}

#[tokio::test]
async fn missing_article_shows_error_page() {
    let cms = spawn_fake_cms(FakeState::default()).await;
    let api = cms.client();
    let controller = ArticleViewController::new(
        "missing",
        api.clone(),
        api,
        RecordingNotifier::answering(true),
        RecordingLikeView::new(),
        cms.base.clone(),
        cms.config().origin,
    );

    match controller.load().await {
        ArticlePage::Failed { title, message } => {
            assert_eq!(title, "Błąd");
            assert_eq!(message, "Nie znaleziono artykułu");
        }
        ArticlePage::Loaded { .. } => panic!("missing article should not load"),
    }
}

#[tokio::test]
async fn forbidden_delete_withdraws_owner_controls() {
    let cms = spawn_fake_cms(FakeState {
        delete_status: Some(403),
        ..FakeState::with_viewer(AUTHOR_ID, "user")
    })
    .await;
    let notifier = RecordingNotifier::answering(true);
    let controller = article_view(&cms, notifier.clone(), RecordingLikeView::new());

    let ArticlePage::Loaded { mut article, .. } = controller.load().await else {
        panic!("article should load");
    };
    assert!(article.controls.is_owner);
    assert!(!article.controls.can_like);

    let outcome = controller
        .delete_article(&mut article.controls, None)
        .await;

    assert_eq!(outcome, DeleteOutcome::PermissionDenied);
    assert!(!article.controls.is_owner);
    assert_eq!(notifier.errors(), vec!["Brak uprawnień"]);
    assert_eq!(notifier.prompt_count(), 1);
}

#[tokio::test]
async fn owner_delete_redirects_to_same_origin_home() {
    let cms = spawn_fake_cms(FakeState::with_viewer("root", "admin")).await;
    let controller = article_view(
        &cms,
        RecordingNotifier::answering(true),
        RecordingLikeView::new(),
    );
    let ArticlePage::Loaded { mut article, .. } = controller.load().await else {
        panic!("article should load");
    };

    let referrer = format!("{}?page=2", cms.config().origin.as_str());
    match controller
        .delete_article(&mut article.controls, Some(&referrer))
        .await
    {
        DeleteOutcome::Deleted { redirect_to, after } => {
            assert_eq!(redirect_to, referrer);
            assert_eq!(after.as_millis(), 600);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[tokio::test]
async fn comment_thread_posts_rejects_and_edits() {
    let cms = spawn_fake_cms(FakeState {
        comments: vec![json!({
            "_id": "c0",
            "text": "Komentarz gościa",
            "author": "u9",
        })],
        ..FakeState::with_viewer("u2", "user")
    })
    .await;
    let api = cms.client();
    let notifier = RecordingNotifier::answering(true);
    let mut thread = CommentsController::new(ARTICLE_ID, api.clone(), api, notifier.clone());

    thread.load().await;
    assert_eq!(thread.status(), CommentsStatus::Ready);
    assert_eq!(thread.entries().len(), 1);
    assert!(!thread.entries()[0].can_edit);

    thread.set_draft("abc  ");
    assert_eq!(thread.submit().await, SubmitOutcome::Invalid);
    assert_eq!(cms.state().comment_posts, 0);
    assert_eq!(notifier.errors(), vec![comments::TOO_SHORT_ON_SUBMIT]);

    thread.set_draft("<b></b><i>ok</i>       ");
    assert_eq!(
        thread.submit().await,
        SubmitOutcome::Rejected {
            draft_cleared: true
        }
    );
    assert!(thread.draft().is_empty());

    thread.set_draft("  Świetny artykuł!  ");
    assert_eq!(thread.submit().await, SubmitOutcome::Posted);
    assert_eq!(thread.entries().len(), 2);
    let posted = &thread.entries()[1];
    assert!(posted.can_edit);
    assert_eq!(posted.comment.text, "Świetny artykuł!");
    let posted_id = posted.id().to_string();

    assert!(thread.begin_edit(&posted_id));
    assert!(thread.update_edit(&posted_id, "Poprawiony <em>tekst</em>"));
    assert!(thread.save_edit(&posted_id).await);
    assert_eq!(thread.entries()[1].comment.text, "Poprawiony tekst");
    assert!(!thread.entries()[1].is_editing());

    assert!(!thread.delete("c0").await);
    assert!(thread.delete(&posted_id).await);
    assert_eq!(thread.entries().len(), 1);
    assert_eq!(cms.state().comments.len(), 1);
}

#[tokio::test]
async fn like_failure_without_message_reports_status() {
    let cms = spawn_fake_cms(FakeState {
        like_failure: Some((503, "   ".into())),
        ..FakeState::with_viewer("u2", "user")
    })
    .await;
    let notifier = RecordingNotifier::answering(true);
    let ArticlePage::Loaded { likes, .. } =
        article_view(&cms, notifier.clone(), RecordingLikeView::new())
            .load()
            .await
    else {
        panic!("article should load");
    };

    likes.toggle().await;
    assert_eq!(notifier.errors(), vec!["Błąd 503"]);
    assert_ne!(notifier.errors()[0], like::SAVE_FAILED);
}

#[tokio::test]
async fn comment_writes_succeed_without_full_comment_bodies() {
    let cms = spawn_fake_cms(FakeState {
        terse_comment_bodies: true,
        ..FakeState::with_viewer("u2", "user")
    })
    .await;
    let api = cms.client();

    let text = CommentText::new("Krótka odpowiedź serwera").unwrap();
    api.create(ARTICLE_ID, &text).await.unwrap();
    assert_eq!(cms.state().comments.len(), 1);

    let edited = CommentText::new("Nowa <b>treść</b> komentarza").unwrap();
    assert_eq!(
        api.update("c1", &edited).await,
        Ok("Nowa treść komentarza".to_string())
    );

    let notifier = RecordingNotifier::answering(true);
    let mut thread = CommentsController::new(ARTICLE_ID, api.clone(), api, notifier.clone());
    thread.load().await;
    thread.set_draft("Drugi komentarz w wątku");
    assert_eq!(thread.submit().await, SubmitOutcome::Posted);
    assert!(thread.draft().is_empty());
    assert_eq!(thread.entries().len(), 2);

    assert!(thread.begin_edit("c2"));
    assert!(thread.update_edit("c2", "Drugi komentarz <i>poprawiony</i>"));
    assert!(thread.save_edit("c2").await);
    assert_eq!(thread.entries()[1].comment.text, "Drugi komentarz poprawiony");
    assert!(!thread.entries()[1].is_editing());
    assert_eq!(notifier.errors(), Vec::<String>::new());
}
