use std::sync::Arc;

pub mod chart;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod samples;
pub mod server;

use chart::ChartRenderer;
use samples::{LatencySource, SampleBuffer, SampleRecorder, UniformLatency};

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// The one latency window: recorder writes, chart handler snapshots.
    pub buffer: Arc<SampleBuffer>,

    /// Generates a latency and appends it to `buffer`.
    pub recorder: SampleRecorder,

    /// Shared with blocking render tasks.
    pub renderer: Arc<ChartRenderer>,
}

impl AppState {
    /// Empty default-capacity buffer, uniform synthetic latencies, PNG charts.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(SampleBuffer::new()),
            UniformLatency::default(),
            ChartRenderer::new(),
        )
    }

    pub fn with_parts(
        buffer: Arc<SampleBuffer>,
        source: impl LatencySource + 'static,
        renderer: ChartRenderer,
    ) -> Self {
        Self {
            recorder: SampleRecorder::new(buffer.clone(), source),
            buffer,
            renderer: Arc::new(renderer),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
