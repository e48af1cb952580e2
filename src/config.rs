use clap::Parser;

// ─── Fixed constants ─────────────────────────────────────────────

/// How many of the most recent samples the buffer keeps.
pub const SAMPLE_CAPACITY: usize = 1000;

/// Synthetic latencies are drawn from `[0, LATENCY_CEILING_MS)`.
pub const LATENCY_CEILING_MS: u64 = 1000;

/// Chart raster size in pixels (width, height).
pub const CHART_SIZE: (u32, u32) = (512, 512);

pub const DEFAULT_ADDR: &str = "localhost:8080";

// ─── Command line ────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "latency-statz", version, about = "Latency sampling and chart service")]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "LATENCY_STATZ_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
}
