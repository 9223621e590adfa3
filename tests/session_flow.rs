mod common;

use ai_image_roaster::client::encoder::PROCESSING_FAILED;
use ai_image_roaster::client::{
    render, Body, ClientError, DataUrlPayload, FileCandidate, HttpRoastApi, RoastApi, Session,
    UiState, MAX_UPLOAD_BYTES,
};
use ai_image_roaster::config::DEFAULT_MAX_BODY_BYTES;
use ai_image_roaster::error::INVALID_API_KEY;
use ai_image_roaster::startup::build_router;
use async_trait::async_trait;
use common::{api_error, state_with_key, StubProvider};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Counts calls and answers with a fixed outcome.
struct FakeApi {
    calls: AtomicUsize,
    fail_with: Option<String>,
}

impl FakeApi {
    fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_with: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_with: Some(message.to_string()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoastApi for FakeApi {
    async fn roast(&self, _image: &DataUrlPayload) -> Result<String, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            None => Ok("Itu bukan outfit, itu tragedi.".to_string()),
            Some(message) => Err(ClientError::Rejected {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}

fn image_file(suffix: &str, bytes: &[u8]) -> (NamedTempFile, FileCandidate) {
    let mut tmp = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    tmp.write_all(bytes).unwrap();
    let candidate = FileCandidate {
        path: tmp.path().to_path_buf(),
        declared_type: ai_image_roaster::client::upload::declared_type(tmp.path()).to_string(),
        size_bytes: bytes.len() as u64,
    };
    (tmp, candidate)
}

#[tokio::test]
async fn valid_selection_previews_without_submitting() {
    let (_tmp, file) = image_file(".jpg", b"\xff\xd8\xff\xe0fake-jpeg");
    let api = FakeApi::ok();
    let mut session = Session::new();

    session.select(&file).await;

    let image = session.state().staged_image().expect("image staged");
    assert!(image.as_str().starts_with("data:image/jpeg;base64,"));
    assert!(matches!(session.state(), UiState::Previewing { .. }));
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn new_selection_clears_previous_error_and_result() {
    let (_a, first) = image_file(".png", b"one");
    let (_b, second) = image_file(".png", b"two");
    let api = FakeApi::ok();
    let mut session = Session::new();

    session.select(&first).await;
    session.submit(&api).await;
    assert!(session.state().roast_result().is_some());

    session.select(&second).await;
    assert!(session.state().roast_result().is_none());
    assert!(session.state().error().is_none());
    assert_eq!(
        session.state().staged_image().unwrap().parts().decode().unwrap(),
        b"two".to_vec()
    );
}

#[tokio::test]
async fn non_image_is_rejected() {
    let (_tmp, file) = image_file(".txt", b"hello");
    let mut session = Session::new();

    session.select(&file).await;

    assert_eq!(session.state().error(), Some("only image files are allowed."));
    assert!(session.state().staged_image().is_none());
}

#[tokio::test]
async fn rejected_selection_after_roast_keeps_the_roast() {
    let (_a, photo) = image_file(".png", b"img");
    let (_b, notes) = image_file(".txt", b"hello");
    let api = FakeApi::ok();
    let mut session = Session::new();

    session.select(&photo).await;
    session.submit(&api).await;
    let staged = session.state().staged_image().cloned();

    session.select(&notes).await;

    assert_eq!(session.state().error(), Some("only image files are allowed."));
    assert_eq!(
        session.state().roast_result(),
        Some("Itu bukan outfit, itu tragedi.")
    );
    assert_eq!(session.state().staged_image().cloned(), staged);
    assert_eq!(
        render(session.state()).kept_roast,
        Some("Itu bukan outfit, itu tragedi.")
    );

    session.reset();
    assert_eq!(session.state(), &UiState::Idle);
}

#[tokio::test]
async fn oversized_file_only_sets_error() {
    let (_tmp, small) = image_file(".png", b"ok");
    let mut session = Session::new();
    session.select(&small).await;
    let staged = session.state().staged_image().cloned();

    // 15 MB PNG; rejected from its size alone, never read
    let big = FileCandidate {
        path: "/nowhere/huge.png".into(),
        declared_type: "image/png".into(),
        size_bytes: 15 * 1024 * 1024,
    };
    session.select(&big).await;

    assert_eq!(session.state().error(), Some("maximum file size is 10MB."));
    assert_eq!(session.state().staged_image().cloned(), staged);
    assert!(big.size_bytes > MAX_UPLOAD_BYTES);
}

#[tokio::test]
async fn unreadable_file_reports_processing_failure() {
    let file = FileCandidate {
        path: "/nowhere/gone.png".into(),
        declared_type: "image/png".into(),
        size_bytes: 100,
    };
    let mut session = Session::new();

    session.select(&file).await;

    assert_eq!(session.state().error(), Some(PROCESSING_FAILED));
    assert!(session.state().staged_image().is_none());
}

#[tokio::test]
async fn submit_without_image_is_a_no_op() {
    let api = FakeApi::ok();
    let mut session = Session::new();

    assert!(!session.submit(&api).await);
    assert_eq!(session.state(), &UiState::Idle);
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn submit_while_loading_is_a_no_op() {
    let (_tmp, file) = image_file(".png", b"img");
    let api = FakeApi::ok();
    let mut session = Session::new();
    session.select(&file).await;

    let first = session.begin_submit();
    assert!(first.is_some());
    assert!(session.state().is_loading());

    assert!(session.begin_submit().is_none());
    assert!(!session.submit(&api).await);
    assert_eq!(api.calls(), 0);

    session.finish_submit(Ok("done".into()));
    assert_eq!(session.state().roast_result(), Some("done"));
}

#[tokio::test]
async fn selection_and_reset_are_ignored_while_loading() {
    let (_a, file) = image_file(".png", b"img");
    let (_b, other) = image_file(".png", b"other");
    let mut session = Session::new();
    session.select(&file).await;
    let staged = session.begin_submit().unwrap();

    session.select(&other).await;
    session.reset();

    assert_eq!(session.state(), &UiState::Submitting { image: staged });
}

#[tokio::test]
async fn failed_request_shows_error_and_keeps_image() {
    let (_tmp, file) = image_file(".png", b"img");
    let api = FakeApi::failing(INVALID_API_KEY);
    let mut session = Session::new();
    session.select(&file).await;

    assert!(session.submit(&api).await);

    assert_eq!(session.state().error(), Some(INVALID_API_KEY));
    assert!(!session.state().is_loading());
    assert!(session.state().staged_image().is_some());
    assert_eq!(render(session.state()).body, Body::Error(INVALID_API_KEY));
}

#[tokio::test]
async fn reset_returns_to_idle() {
    let (_tmp, file) = image_file(".png", b"img");
    let api = FakeApi::ok();
    let mut session = Session::new();
    session.select(&file).await;
    session.submit(&api).await;

    session.reset();

    assert_eq!(session.state(), &UiState::Idle);
    assert_eq!(render(session.state()).body, Body::Prompt);
}

#[tokio::test]
async fn end_to_end_against_running_server() {
    let provider = StubProvider::replying(|| Ok("Itu bukan outfit, itu tragedi.".into()));
    let app = build_router(state_with_key(provider.clone()), DEFAULT_MAX_BODY_BYTES);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // 2 MB JPEG
    let mut bytes = vec![0u8; 2 * 1024 * 1024];
    bytes[..3].copy_from_slice(b"\xff\xd8\xff");
    let (_tmp, file) = image_file(".jpeg", &bytes);

    let api = HttpRoastApi::new(format!("http://{}", addr));
    let mut session = Session::new();
    session.select(&file).await;
    assert_eq!(render(session.state()).body, Body::Preview);

    assert!(session.submit(&api).await);

    let view = render(session.state());
    assert_eq!(view.body, Body::Roast("Itu bukan outfit, itu tragedi."));
    assert!(view.can_reset);

    let seen = provider.last_image().unwrap();
    assert_eq!(seen.mime_type, "image/jpeg");
    assert_eq!(seen.bytes, bytes);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn end_to_end_error_message_reaches_the_user() {
    let provider = StubProvider::replying(|| Err(api_error(429, None, Some("quota exceeded"))));
    let app = build_router(state_with_key(provider), DEFAULT_MAX_BODY_BYTES);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let (_tmp, file) = image_file(".png", b"img");
    let api = Arc::new(HttpRoastApi::new(format!("http://{}/", addr)));
    let mut session = Session::new();
    session.select(&file).await;

    let image = session.begin_submit().unwrap();
    let outcome = api.roast(&image).await;
    assert!(matches!(
        &outcome,
        Err(ClientError::Rejected { status: 429, .. })
    ));
    session.finish_submit(outcome);

    assert_eq!(
        session.state().error(),
        Some("rate limit or quota reached, try again later")
    );
}

#[tokio::test]
async fn oversized_png_never_reaches_the_server() {
    let api = FakeApi::ok();
    let mut session = Session::new();
    let big = FileCandidate {
        path: "/nowhere/huge.png".into(),
        declared_type: "image/png".into(),
        size_bytes: 15 * 1024 * 1024,
    };

    session.select(&big).await;
    session.submit(&api).await;

    assert_eq!(session.state().error(), Some("maximum file size is 10MB."));
    assert_eq!(api.calls(), 0);
}
