//! Radial chart capability for the result screen.
//!
//! The result view only knows it can hand over N labeled magnitudes; how they
//! are drawn is up to the [`RadialChart`] implementation.

use colored::Colorize;

/// One spoke of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartAxis {
    pub label: &'static str,
    pub value: f64,
    pub color: (u8, u8, u8),
}

pub trait RadialChart {
    fn render(&self, title: &str, axes: &[ChartAxis], max: f64) -> String;
}

/// Terminal rendition: one colored gauge per axis, scaled to `max`.
#[derive(Debug, Clone, Copy)]
pub struct TextRadialChart {
    pub width: usize,
}

impl Default for TextRadialChart {
    fn default() -> Self {
        Self { width: 30 }
    }
}

impl RadialChart for TextRadialChart {
    fn render(&self, title: &str, axes: &[ChartAxis], max: f64) -> String {
        let label_width = axes
            .iter()
            .map(|a| a.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = format!("{}\n", title.bold());
        for axis in axes {
            let (r, g, b) = axis.color;
            let padding = " ".repeat(label_width - axis.label.chars().count());
            out.push_str(&format!(
                "  {}{} {} {:.2}\n",
                axis.label,
                padding,
                bar(axis.value, max, self.width).truecolor(r, g, b),
                axis.value
            ));
        }
        out
    }
}

/// Filled/empty block bar of `width` cells.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 && value.is_finite() {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
