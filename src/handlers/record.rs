use axum::extract::State;
use std::sync::Arc;

use crate::AppState;

// ─── GET / ───────────────────────────────────────────────────────
/// Records one latency sample and reports it, e.g. `slept for 523ms`.

pub async fn record(State(state): State<Arc<AppState>>) -> String {
    let latency = state.recorder.record_sample();
    format!("slept for {latency:?}\n")
}
