//! Ring rasterization and PNG output
//!
//! Each ring starts at 12 o'clock and sweeps clockwise for its fraction
//! of a full turn. Everything not covered by a ring stays transparent.

use image::{imageops, ImageFormat, Rgba, RgbaImage};
use std::f64::consts::TAU;
use std::path::Path;
use tracing::{debug, info};

use crate::chart::layout::{normalize, GridLayout};
use crate::errors::{DailyError, Result};
use crate::metrics::Score;

/// Samples per axis when estimating pixel coverage
const SUPERSAMPLE: u32 = 4;

/// Visual parameters for the ring grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    /// Side of one square grid cell, in pixels
    pub cell_size: u32,
    /// Gap between a ring's outer edge and its cell border
    pub padding: u32,
    /// Ring thickness as a fraction of the outer radius
    pub wedge_width: f64,
    /// Arc fill color
    pub color: Rgba<u8>,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            cell_size: 240,
            padding: 16,
            wedge_width: 0.3,
            color: Rgba([31, 119, 180, 255]),
        }
    }
}

impl RingStyle {
    fn outer_radius(&self) -> f64 {
        f64::from(self.cell_size) / 2.0 - f64::from(self.padding)
    }

    fn inner_radius(&self) -> f64 {
        self.outer_radius() * (1.0 - self.wedge_width)
    }
}

/// A grid of ring charts, one per score
#[derive(Debug, Clone)]
pub struct RingChart {
    fractions: Vec<f64>,
    layout: GridLayout,
    style: RingStyle,
}

impl RingChart {
    /// Build a chart for the given scores with the default style
    pub fn new(scores: &[Score]) -> Self {
        let fractions = normalize(scores);
        let layout = GridLayout::for_count(fractions.len());
        Self {
            fractions,
            layout,
            style: RingStyle::default(),
        }
    }

    pub fn with_style(mut self, style: RingStyle) -> Self {
        self.style = style;
        self
    }

    /// Filled fraction of each ring, in score order
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn style(&self) -> &RingStyle {
        &self.style
    }

    pub fn ring_count(&self) -> usize {
        self.fractions.len()
    }

    /// Rasterize the full grid, unused cells included, without cropping
    pub fn render(&self) -> RgbaImage {
        let cell = self.style.cell_size;
        let width = self.layout.cols() as u32 * cell;
        let height = self.layout.rows() as u32 * cell;
        let mut image = RgbaImage::new(width, height);

        for (index, fraction) in self.fractions.iter().enumerate() {
            if let Some((row, col)) = self.layout.cell_of(index) {
                draw_ring(
                    &mut image,
                    col as u32 * cell,
                    row as u32 * cell,
                    *fraction,
                    &self.style,
                );
            }
        }

        debug!(
            rows = self.layout.rows(),
            cols = self.layout.cols(),
            unused = self.layout.unused_cells(),
            "chart rendered"
        );
        image
    }

    /// Render, crop to content and write a PNG, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        if self.layout.cells() == 0 {
            return Err(DailyError::RenderError("no scores to draw".to_string()));
        }

        let image = crop_to_content(&self.render());
        image.save_with_format(path, ImageFormat::Png)?;
        info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "chart saved"
        );
        Ok(())
    }
}

/// Draw one ring into the cell whose top-left corner is (`left`, `top`)
fn draw_ring(image: &mut RgbaImage, left: u32, top: u32, fraction: f64, style: &RingStyle) {
    if fraction <= 0.0 {
        return;
    }

    let half = f64::from(style.cell_size) / 2.0;
    let cx = f64::from(left) + half;
    let cy = f64::from(top) + half;
    let outer = style.outer_radius();
    let inner = style.inner_radius();
    let sweep = fraction.min(1.0) * TAU;
    let total = SUPERSAMPLE * SUPERSAMPLE;

    for y in top..top + style.cell_size {
        for x in left..left + style.cell_size {
            let mut covered = 0;
            for sy in 0..SUPERSAMPLE {
                for sx in 0..SUPERSAMPLE {
                    let px = f64::from(x) + (f64::from(sx) + 0.5) / f64::from(SUPERSAMPLE);
                    let py = f64::from(y) + (f64::from(sy) + 0.5) / f64::from(SUPERSAMPLE);
                    if in_arc(px - cx, py - cy, inner, outer, sweep) {
                        covered += 1;
                    }
                }
            }

            if covered > 0 {
                let mut pixel = style.color;
                pixel.0[3] = (u32::from(style.color.0[3]) * covered / total) as u8;
                image.put_pixel(x, y, pixel);
            }
        }
    }
}

/// Whether offset (`dx`, `dy`) from the ring center lies on the filled arc
///
/// Image y grows downward, so 12 o'clock is negative `dy` and the angle
/// grows clockwise.
fn in_arc(dx: f64, dy: f64, inner: f64, outer: f64, sweep: f64) -> bool {
    let distance = dx.hypot(dy);
    if distance < inner || distance > outer {
        return false;
    }
    let mut angle = dx.atan2(-dy);
    if angle < 0.0 {
        angle += TAU;
    }
    angle <= sweep
}

/// Crop to the bounding box of non-transparent pixels
///
/// An image with nothing visible is returned at its original size.
pub fn crop_to_content(image: &RgbaImage) -> RgbaImage {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    match bounds {
        Some((x0, y0, x1, y1)) => {
            imageops::crop_imm(image, x0, y0, x1 - x0 + 1, y1 - y0 + 1).to_image()
        }
        None => image.clone(),
    }
}
