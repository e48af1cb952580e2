use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use super::AppError;
use crate::AppState;

/// Re-randomizes the image's `rand` query parameter every 100 ms so the
/// browser keeps fetching a fresh chart.
const DASHBOARD: &str = r#"
<h1>Latency Stats</h1>
<img src="/statz/scatter.png?rand=0" style="width:50%">
<script>
setInterval(function() {
        var imgs = document.getElementsByTagName("IMG");
        for (var i = 0; i < imgs.length; i++) {
                var p = imgs[i].src.lastIndexOf("=");
                imgs[i].src = imgs[i].src.substr(0, p + 1) + Math.random();
        }
}, 100)
</script>
"#;

// ─── GET /statz ──────────────────────────────────────────────────

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD)
}

// ─── GET /statz/scatter.png ──────────────────────────────────────
/// Snapshots the buffer, then renders off the async runtime. The query
/// string is only a cache-buster and is ignored.

pub async fn scatter(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let samples = state.buffer.snapshot();
    let renderer = state.renderer.clone();

    let image = tokio::task::spawn_blocking(move || renderer.render(&samples))
        .await
        .map_err(|e| AppError::Internal(format!("render task failed: {e}")))??;

    Ok(([(header::CONTENT_TYPE, state.renderer.content_type())], image).into_response())
}
