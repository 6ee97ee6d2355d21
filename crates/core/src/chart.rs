//! Chart series for dashboard bar charts.
//!
//! A chart given no data still renders: [`ChartData::from_points`] swaps an
//! empty or absent series for a single placeholder point.

use serde::{Deserialize, Serialize};

/// Label of the placeholder point.
pub const PLACEHOLDER_LABEL: &str = "No data";

/// One named value in a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    fn placeholder() -> Self {
        Self::new(PLACEHOLDER_LABEL, 0.0)
    }
}

/// A bar ready for rendering, sized relative to the series maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub value: String,
    /// Width as a percentage of the largest value, 0..=100.
    pub percent: u8,
}

/// The points a chart renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    points: Vec<ChartPoint>,
    placeholder: bool,
}

impl ChartData {
    /// Build chart data from optional points.
    ///
    /// `None` or an empty list yields exactly one placeholder point;
    /// anything else is kept as passed, in order.
    #[must_use]
    pub fn from_points(points: Option<Vec<ChartPoint>>) -> Self {
        match points {
            Some(points) if !points.is_empty() => Self {
                points,
                placeholder: false,
            },
            _ => Self {
                points: vec![ChartPoint::placeholder()],
                placeholder: true,
            },
        }
    }

    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Whether the chart shows the placeholder instead of real data.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Largest value in the series (0 when all values are non-positive).
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.value)
            .fold(0.0_f64, f64::max)
    }

    /// Bars scaled against [`Self::max_value`].
    #[must_use]
    pub fn bars(&self) -> Vec<ChartBar> {
        let max = self.max_value();
        self.points
            .iter()
            .map(|point| {
                let percent = if max > 0.0 {
                    (point.value / max * 100.0).round().clamp(0.0, 100.0)
                } else {
                    0.0
                };
                ChartBar {
                    label: point.name.clone(),
                    value: format_value(point.value),
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=100
                    percent: percent as u8,
                }
            })
            .collect()
    }
}

/// Whole numbers render without a fractional part.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
