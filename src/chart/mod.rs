pub mod encoder;
pub mod renderer;
pub mod series;
mod text;

pub use encoder::{FrameEncoder, PngFrameEncoder};
pub use renderer::ChartRenderer;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A failure while turning a snapshot into an image, tagged by the
/// pipeline stage that produced it.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not construct {name} series: {message}")]
    Series { name: &'static str, message: String },

    #[error("could not construct plot: {0}")]
    Plot(String),

    #[error("could not encode output: {0}")]
    Encode(#[source] BoxError),
}

impl RenderError {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Series { .. } => "series",
            Self::Plot(_) => "plot",
            Self::Encode(_) => "encode",
        }
    }
}
