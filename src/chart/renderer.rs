use plotters::prelude::*;
use std::fmt::Display;
use std::time::Duration;

use super::encoder::{FrameEncoder, PngFrameEncoder};
use super::{series, text, RenderError};
use crate::config::{CHART_SIZE, LATENCY_CEILING_MS};

// ─── Layout ──────────────────────────────────────────────────────

const TITLE: &str = "Endpoint Latency";
const X_DESC: &str = "sample";
const Y_DESC: &str = "ms";

const MARGIN: i32 = 16;
/// Extra space above the plot for the title and the Y description.
const TITLE_AREA: i32 = 40;
const X_LABEL_AREA: i32 = 44;
const Y_LABEL_AREA: i32 = 48;
/// Rough number of grid intervals per axis.
const TICKS: f64 = 5.0;

// ─── Public types ────────────────────────────────────────────────

/// Turns a buffer snapshot into an encoded chart: raw samples as crosses,
/// the running average as a green line, horizontal grid lines behind.
///
/// Holds no shared state; `render` is a pure function of its input.
pub struct ChartRenderer {
    encoder: Box<dyn FrameEncoder>,
    size: (u32, u32),
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::with_encoder(PngFrameEncoder)
    }

    pub fn with_encoder(encoder: impl FrameEncoder + 'static) -> Self {
        Self {
            encoder: Box::new(encoder),
            size: CHART_SIZE,
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.encoder.content_type()
    }

    pub fn render(&self, samples: &[Duration]) -> Result<Vec<u8>, RenderError> {
        let (width, height) = self.size;
        let mut frame = vec![0u8; width as usize * height as usize * 3];
        draw(&mut frame, self.size, samples)?;
        self.encoder
            .encode(&frame, width, height)
            .map_err(RenderError::Encode)
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Drawing ─────────────────────────────────────────────────────

fn draw(frame: &mut [u8], size: (u32, u32), samples: &[Duration]) -> Result<(), RenderError> {
    let raw = series::raw(samples);
    let avg = series::running_average(samples);

    let root = BitMapBackend::with_buffer(frame, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    // ── Axis ranges ─────────────────────────────────────────────
    let x_end = samples.len().max(1) as f64;
    let x_step = nice_step(x_end / TICKS).max(1.0);

    let y_top = if raw.is_empty() {
        LATENCY_CEILING_MS as f64
    } else {
        raw.iter().map(|p| p.1).fold(0.0, f64::max).max(1.0)
    };
    let y_step = nice_step(y_top / TICKS);
    let y_end = ((y_top / y_step).floor() + 1.0) * y_step;

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .margin_top(MARGIN + TITLE_AREA)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(0f64..x_end, 0f64..y_end)
        .map_err(plot_err)?;

    // ── Grid and axes ───────────────────────────────────────────
    let y_ticks = ticks(y_end, y_step);
    let x_ticks = ticks(x_end, x_step);

    chart
        .draw_series(
            y_ticks
                .iter()
                .map(|&y| PathElement::new(vec![(0.0, y), (x_end, y)], RED.mix(0.4))),
        )
        .map_err(plot_err)?;
    chart
        .draw_series([
            PathElement::new(vec![(0.0, 0.0), (x_end, 0.0)], BLACK),
            PathElement::new(vec![(0.0, 0.0), (0.0, y_end)], BLACK),
        ])
        .map_err(plot_err)?;

    // ── Labels ──────────────────────────────────────────────────
    let (left, top) = chart.backend_coord(&(0.0, y_end));
    let (right, bottom) = chart.backend_coord(&(x_end, 0.0));

    text::draw_centered(&root, TITLE, size.0 as i32 / 2, MARGIN, 2, &BLACK)
        .map_err(plot_err)?;
    text::draw_centered(&root, Y_DESC, left, top - 22, 2, &BLACK).map_err(plot_err)?;
    text::draw_centered(&root, X_DESC, (left + right) / 2, bottom + 22, 2, &BLACK)
        .map_err(plot_err)?;

    for &y in &y_ticks {
        let (px, py) = chart.backend_coord(&(0.0, y));
        let label = tick_label(y);
        let x = px - 6 - text::text_width(&label, 1);
        text::draw_text(&root, &label, (x, py - text::GLYPH / 2), 1, &BLACK)
            .map_err(plot_err)?;
    }
    for &x in &x_ticks {
        let (px, py) = chart.backend_coord(&(x, 0.0));
        text::draw_centered(&root, &tick_label(x), px, py + 6, 1, &BLACK).map_err(plot_err)?;
    }

    // ── Series ──────────────────────────────────────────────────
    chart
        .draw_series(raw.iter().map(|&p| Cross::new(p, 3, BLACK)))
        .map_err(|e| series_err("scatter", e))?;
    chart
        .draw_series(LineSeries::new(avg, GREEN.stroke_width(2)))
        .map_err(|e| series_err("running average", e))?;

    root.present().map_err(plot_err)?;
    Ok(())
}

fn plot_err(e: impl Display) -> RenderError {
    RenderError::Plot(e.to_string())
}

fn series_err(name: &'static str, e: impl Display) -> RenderError {
    RenderError::Series {
        name,
        message: e.to_string(),
    }
}

// ─── Axis helpers ────────────────────────────────────────────────

/// Rounds `rough` up to 1, 2 or 5 times a power of ten.
fn nice_step(rough: f64) -> f64 {
    let magnitude = 10f64.powf(rough.log10().floor());
    let norm = rough / magnitude;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Multiples of `step` from zero up to and including `end`.
fn ticks(end: f64, step: f64) -> Vec<f64> {
    let n = (end / step + 1e-9).floor() as usize;
    (0..=n).map(|i| i as f64 * step).collect()
}

fn tick_label(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
