//! Chart sinks for the temperature bar chart.
//!
//! Rendering is a side effect the pipeline does not depend on: callers are
//! expected to log a [`ChartError`] and carry on.

use std::io::Write;
use std::path::PathBuf;

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::ChartError;
use crate::formatters::format_bar_chart;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
// orange at 70% opacity over white
const BAR: Rgb<u8> = Rgb([255, 192, 77]);
const GLYPH_SIZE: u32 = 8;

/// Labeled series handed to a chart sink
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl BarChart {
    fn validate(&self) -> Result<(), ChartError> {
        if self.values.is_empty() {
            return Err(ChartError::Empty);
        }
        if self.labels.len() != self.values.len() {
            return Err(ChartError::LengthMismatch {
                labels: self.labels.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }
}

/// Destination that renders a bar chart
pub trait ChartSink {
    /// Short name used in log output
    fn name(&self) -> &str;

    fn render(&self, chart: &BarChart) -> Result<(), ChartError>;
}

/// Writes the chart as a PNG image with title, axis names and city labels
#[derive(Debug, Clone)]
pub struct PngBarChart {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl PngBarChart {
    /// Creates a 1200x600 chart written to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: 1200,
            height: 600,
        }
    }

    /// Overrides the image size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    fn draw(&self, chart: &BarChart) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.width, self.height, BACKGROUND);

        let margin = (self.width.min(self.height) / 10).max(1);
        let left = margin;
        let right = self.width.saturating_sub(margin).max(left + 1);
        let top = margin;
        let bottom = self.height.saturating_sub(margin).max(top + 1);

        // Bars grow from zero, so the axis always spans it.
        let max = chart.values.iter().copied().fold(0.0_f64, f64::max);
        let min = chart.values.iter().copied().fold(0.0_f64, f64::min);
        let span = if max > min { max - min } else { 1.0 };
        let plot_height = f64::from(bottom - top);
        let y_of = |value: f64| -> u32 { top + ((max - value) / span * plot_height).round() as u32 };
        let baseline = y_of(0.0);

        // Title above the plot, axis names below and to the left of it.
        let title_x = (i64::from(self.width) - text_width(&chart.title, 2)) / 2;
        let title_y = i64::from(top.saturating_sub(GLYPH_SIZE * 2) / 2);
        draw_text(&mut img, &chart.title, title_x, title_y, 2, false);

        let plot_center = i64::from(left + right) / 2;
        let x_label_y = i64::from(bottom) + 6 + i64::from(GLYPH_SIZE) + 12;
        draw_text(
            &mut img,
            &chart.x_label,
            plot_center - text_width(&chart.x_label, 1) / 2,
            x_label_y,
            1,
            false,
        );
        let y_label_bottom = i64::from(top + bottom) / 2 + text_width(&chart.y_label, 1) / 2;
        draw_text(&mut img, &chart.y_label, 4, y_label_bottom, 1, true);

        let mut ticks = vec![max, 0.0, min];
        ticks.dedup();
        for tick in ticks {
            let text = format!("{:.0}", tick);
            let x = i64::from(left) - 4 - text_width(&text, 1);
            let y = i64::from(y_of(tick)) - i64::from(GLYPH_SIZE / 2);
            draw_text(&mut img, &text, x, y, 1, false);
        }

        let slot = f64::from(right - left) / chart.values.len() as f64;
        let label_chars = (slot / f64::from(GLYPH_SIZE)).floor() as usize;
        for (i, (label, &value)) in chart.labels.iter().zip(&chart.values).enumerate() {
            let x0 = left + (slot * (i as f64 + 0.1)).round() as u32;
            let x1 = left + (slot * (i as f64 + 0.9)).round() as u32;
            let y = y_of(value);
            let (y0, y1) = if y <= baseline { (y, baseline) } else { (baseline, y) };
            fill_rect(&mut img, x0, x1, y0, y1, BAR);

            let tick: String = label.chars().take(label_chars).collect();
            let center = i64::from(left) + (slot * (i as f64 + 0.5)).round() as i64;
            draw_text(
                &mut img,
                &tick,
                center - text_width(&tick, 1) / 2,
                i64::from(bottom) + 6,
                1,
                false,
            );
        }

        fill_rect(&mut img, left, right, baseline, baseline + 1, AXIS);
        fill_rect(&mut img, left, left + 1, top, bottom, AXIS);
        img
    }
}

fn fill_rect(img: &mut RgbImage, x0: u32, x1: u32, y0: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..y1.min(img.height()) {
        for x in x0..x1.min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

fn glyph(c: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c))
}

fn text_width(text: &str, scale: u32) -> i64 {
    text.chars().count() as i64 * i64::from(GLYPH_SIZE * scale)
}

/// Plots `text` in 8x8 bitmap glyphs, clipped to the image.
///
/// Horizontal text starts at its top-left corner `(x, y)`. Vertical text
/// reads bottom to top and starts at its bottom-left corner.
fn draw_text(img: &mut RgbImage, text: &str, x: i64, y: i64, scale: u32, vertical: bool) {
    let scale = i64::from(scale);
    let size = i64::from(GLYPH_SIZE);
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        let advance = i as i64 * size * scale;
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                let (row, col) = (row as i64, i64::from(col));
                let (px, py) = if vertical {
                    (x + row * scale, y - advance - (col + 1) * scale)
                } else {
                    (x + advance + col * scale, y + row * scale)
                };
                for dy in 0..scale {
                    for dx in 0..scale {
                        put_clipped(img, px + dx, py + dy, AXIS);
                    }
                }
            }
        }
    }
}

fn put_clipped(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
        if x < img.width() && y < img.height() {
            img.put_pixel(x, y, color);
        }
    }
}

impl ChartSink for PngBarChart {
    fn name(&self) -> &str {
        "png"
    }

    fn render(&self, chart: &BarChart) -> Result<(), ChartError> {
        chart.validate()?;
        self.draw(chart)
            .save_with_format(&self.path, ImageFormat::Png)?;
        tracing::info!("Chart written to {}", self.path.display());
        Ok(())
    }
}

/// Prints the chart as text bars on stdout
#[derive(Debug, Clone, Default)]
pub struct TerminalBarChart;

impl ChartSink for TerminalBarChart {
    fn name(&self) -> &str {
        "terminal"
    }

    fn render(&self, chart: &BarChart) -> Result<(), ChartError> {
        chart.validate()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(format_bar_chart(chart).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
