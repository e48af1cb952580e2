pub mod buffer;
pub mod recorder;

pub use buffer::SampleBuffer;
pub use recorder::{LatencySource, SampleRecorder, UniformLatency};
