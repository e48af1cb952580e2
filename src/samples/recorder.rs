use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use super::SampleBuffer;
use crate::config::LATENCY_CEILING_MS;

/// Where recorded latencies come from.
///
/// The server ships with a synthetic source; a real measurement (e.g. the
/// wall time of an upstream call) can be dropped in without touching the
/// buffer or the chart.
pub trait LatencySource: Send + Sync {
    fn next_latency(&self) -> Duration;
}

/// Whole milliseconds drawn uniformly from `[0, ceiling)`.
#[derive(Debug, Clone, Copy)]
pub struct UniformLatency {
    ceiling_ms: u64,
}

impl UniformLatency {
    pub fn new(ceiling_ms: u64) -> Self {
        Self {
            ceiling_ms: ceiling_ms.max(1),
        }
    }
}

impl Default for UniformLatency {
    fn default() -> Self {
        Self::new(LATENCY_CEILING_MS)
    }
}

impl LatencySource for UniformLatency {
    fn next_latency(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(0..self.ceiling_ms);
        Duration::from_millis(ms)
    }
}

/// Pairs a latency source with the buffer it feeds.
pub struct SampleRecorder {
    buffer: Arc<SampleBuffer>,
    source: Box<dyn LatencySource>,
}

impl SampleRecorder {
    pub fn new(buffer: Arc<SampleBuffer>, source: impl LatencySource + 'static) -> Self {
        Self {
            buffer,
            source: Box::new(source),
        }
    }

    /// Generate one latency, append it and hand it back for display.
    pub fn record_sample(&self) -> Duration {
        let latency = self.source.next_latency();
        self.buffer.append(latency);
        tracing::debug!(latency_ms = latency.as_millis() as u64, "sample recorded");
        latency
    }
}
