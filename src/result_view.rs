use std::cmp::Ordering;

use colored::Colorize;
use indexmap::IndexMap;

use crate::chart::{bar, ChartAxis, RadialChart};
use crate::personality;
use crate::prediction::{FeatureImportance, PredictionResult};
use crate::quiz::Category;

/// Upper bound of a trait score.
pub const SCORE_MAX: f64 = 5.0;

const PROBABILITY_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct TraitScore {
    pub category: Category,
    pub value: f64,
    /// Two decimals, e.g. `4.80`.
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityRow {
    pub label: String,
    pub probability: f64,
    /// One decimal with a leading `%`, e.g. `%88.7`.
    pub percent: String,
    pub highlighted: bool,
}

/// `0.887` -> `%88.7`
pub fn format_percent(fraction: f64) -> String {
    format!("%{:.1}", fraction * 100.0)
}

/// Entries by descending probability; ties keep map order.
pub fn rank_probabilities(probabilities: &IndexMap<String, f64>) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = probabilities
        .iter()
        .map(|(label, p)| (label.as_str(), *p))
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked
}

/// Presentation of one prediction result.
pub struct ResultView<'a> {
    result: &'a PredictionResult,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a PredictionResult) -> Self {
        Self { result }
    }

    pub fn chart_axes(&self) -> Vec<ChartAxis> {
        Category::ALL
            .iter()
            .map(|c| ChartAxis {
                label: c.short_label(),
                value: self.result.features.value(*c),
                color: c.color(),
            })
            .collect()
    }

    pub fn prediction(&self) -> &'a str {
        &self.result.prediction
    }

    pub fn confidence(&self) -> Option<String> {
        self.result.confidence.map(format_percent)
    }

    pub fn description(&self) -> &'static str {
        personality::describe(&self.result.prediction)
    }

    pub fn trait_scores(&self) -> Vec<TraitScore> {
        Category::ALL
            .iter()
            .map(|c| {
                let value = self.result.features.value(*c);
                TraitScore {
                    category: *c,
                    value,
                    formatted: format!("{:.2}", value),
                }
            })
            .collect()
    }

    pub fn probabilities(&self) -> Option<Vec<ProbabilityRow>> {
        let probabilities = self.result.all_probabilities.as_ref()?;
        Some(
            rank_probabilities(probabilities)
                .into_iter()
                .map(|(label, p)| ProbabilityRow {
                    label: label.to_string(),
                    probability: p,
                    percent: format_percent(p),
                    highlighted: label == self.result.prediction,
                })
                .collect(),
        )
    }

    pub fn render(&self, chart: &dyn RadialChart) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "Kişilik Analizi Sonucu".bold()));
        out.push_str(&"─".repeat(40));
        out.push_str("\n\n");

        out.push_str(&chart.render("Kişilik Özellikleri", &self.chart_axes(), SCORE_MAX));
        out.push('\n');

        let mut headline = format!("Kişilik Tipiniz: {}", self.prediction()).bold().to_string();
        if let Some(confidence) = self.confidence() {
            headline.push_str(&format!("  [Güven: {}]", confidence));
        }
        out.push_str(&headline);
        out.push('\n');
        out.push_str(self.description());
        out.push_str("\n\nKişilik Özellikleri Puanları:\n");
        for score in self.trait_scores() {
            out.push_str(&format!(
                "  {}: {} / 5\n",
                score.category.title().bold(),
                score.formatted
            ));
        }

        if let Some(rows) = self.probabilities() {
            out.push_str("\nTüm Kişilik Tipleri için Olasılıklar (Random Forest)\n");
            for row in rows {
                let gauge = bar(row.probability, 1.0, PROBABILITY_BAR_WIDTH);
                let line = format!("  {} {} {}", gauge, row.percent, row.label);
                if row.highlighted {
                    out.push_str(&line.bold().to_string());
                } else {
                    out.push_str(&line);
                }
                out.push('\n');
            }
        }

        out.push_str("\n[r] Yeni Test Başlat   [d] Boyut önemleri   [q] Çıkış\n");
        out
    }

    /// The only action of this view; hands control back to the owner.
    pub fn reset<F: FnOnce()>(&self, on_reset: F) {
        on_reset();
    }
}

/// Per-dimension importance of the service's model, highest first.
pub fn render_importance(importance: &FeatureImportance) -> String {
    let mut out = format!("{}\n", "Boyut Önemleri (Random Forest)".bold());
    for (code, value) in rank_probabilities(&importance.dimension_importance) {
        let label = Category::from_code(code)
            .map(|c| c.title())
            .unwrap_or(code);
        out.push_str(&format!("  {:.4}  {}\n", value, label));
    }
    out
}
