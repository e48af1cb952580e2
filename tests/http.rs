use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use latency_statz::chart::{BoxError, ChartRenderer, FrameEncoder};
use latency_statz::samples::{LatencySource, SampleBuffer};
use latency_statz::{server, AppState};

// --- Test helpers ---

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

struct Fixed(Duration);

impl LatencySource for Fixed {
    fn next_latency(&self) -> Duration {
        self.0
    }
}

struct BrokenEncoder;

impl FrameEncoder for BrokenEncoder {
    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn encode(&self, _: &[u8], _: u32, _: u32) -> Result<Vec<u8>, BoxError> {
        Err("png writer refused the frame".into())
    }
}

fn app_with(buffer: Arc<SampleBuffer>, renderer: ChartRenderer) -> Router {
    let state = AppState::with_parts(buffer, Fixed(Duration::from_millis(250)), renderer);
    server::create_router(Arc::new(state))
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Consume a response body into bytes.
async fn response_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
}

// --- GET / ---

#[tokio::test]
async fn root_records_a_sample_and_reports_it() {
    let buffer = Arc::new(SampleBuffer::new());
    let app = app_with(buffer.clone(), ChartRenderer::new());

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/plain"));

    let body = String::from_utf8(response_body(response).await).unwrap();
    assert_eq!(body, "slept for 250ms\n");
    assert_eq!(buffer.snapshot(), vec![Duration::from_millis(250)]);
}

#[tokio::test]
async fn default_state_records_latencies_below_one_second() {
    let state = Arc::new(AppState::new());
    let app = server::create_router(state.clone());

    for _ in 0..20 {
        assert_eq!(get(&app, "/").await.status(), StatusCode::OK);
    }

    let snapshot = state.buffer.snapshot();
    assert_eq!(snapshot.len(), 20);
    assert!(snapshot.iter().all(|d| *d < Duration::from_millis(1000)));
}

#[tokio::test]
async fn unknown_path_is_not_found_and_records_nothing() {
    let buffer = Arc::new(SampleBuffer::new());
    let app = app_with(buffer.clone(), ChartRenderer::new());

    let response = get(&app, "/favicon.ico").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(buffer.is_empty());
}

#[tokio::test]
async fn responses_carry_timing_headers() {
    let app = app_with(Arc::new(SampleBuffer::new()), ChartRenderer::new());

    let response = get(&app, "/").await;
    let us = response.headers().get("X-Response-Time-Us").unwrap();
    assert!(us.to_str().unwrap().parse::<u64>().is_ok());
    assert!(response
        .headers()
        .get("Server-Timing")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("total;dur="));
}

// --- GET /statz ---

#[tokio::test]
async fn dashboard_references_the_chart() {
    let app = app_with(Arc::new(SampleBuffer::new()), ChartRenderer::new());

    let response = get(&app, "/statz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));

    let body = String::from_utf8(response_body(response).await).unwrap();
    assert!(body.contains("/statz/scatter.png"));
}

// --- GET /statz/scatter.png ---

#[tokio::test]
async fn chart_of_empty_buffer_is_a_png() {
    let app = app_with(Arc::new(SampleBuffer::new()), ChartRenderer::new());

    let response = get(&app, "/statz/scatter.png?rand=0.123").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "image/png");
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );

    let body = response_body(response).await;
    assert_eq!(&body[..8], &PNG_SIGNATURE);
}

#[tokio::test]
async fn chart_after_recording_is_a_png() {
    let app = app_with(Arc::new(SampleBuffer::new()), ChartRenderer::new());
    for _ in 0..5 {
        get(&app, "/").await;
    }

    let response = get(&app, "/statz/scatter.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    assert_eq!(&body[..8], &PNG_SIGNATURE);
}

#[tokio::test]
async fn encode_failure_is_a_500_with_the_stage_and_leaves_buffer_alone() {
    let buffer = Arc::new(SampleBuffer::new());
    for ms in [2, 4, 6] {
        buffer.append(Duration::from_millis(ms));
    }
    let before = buffer.snapshot();
    let app = app_with(buffer.clone(), ChartRenderer::with_encoder(BrokenEncoder));

    let response = get(&app, "/statz/scatter.png?rand=1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type(&response).starts_with("text/plain"));

    let body = String::from_utf8(response_body(response).await).unwrap();
    assert_eq!(body, "could not encode output: png writer refused the frame");
    assert_eq!(buffer.snapshot(), before);
}

#[tokio::test]
async fn concurrent_records_and_charts_stay_consistent() {
    let buffer = Arc::new(SampleBuffer::with_capacity(50));
    let app = app_with(buffer.clone(), ChartRenderer::new());

    let mut handles = Vec::new();
    for i in 0..80 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let uri = if i % 10 == 0 { "/statz/scatter.png" } else { "/" };
            get(&app, uri).await.status()
        }));
    }
    for h in handles {
        assert_eq!(h.await.unwrap(), StatusCode::OK);
    }

    // 72 record requests against a 50-sample window.
    assert_eq!(buffer.len(), 50);
}
