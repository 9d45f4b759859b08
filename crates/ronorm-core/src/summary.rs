use serde::{Deserialize, Serialize};

use crate::row::DerivedRow;

/// Mean and population standard deviation over the finite values of one
/// derived metric. Both fields are null when no row produced a finite
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub mean: Option<f64>,
    pub std: Option<f64>,
}

impl MetricStats {
    pub const EMPTY: MetricStats = MetricStats {
        mean: None,
        std: None,
    };

    pub fn from_values(values: impl IntoIterator<Item = Option<f64>>) -> Self {
        let finite: Vec<f64> = values
            .into_iter()
            .flatten()
            .filter(|value| value.is_finite())
            .collect();
        if finite.is_empty() {
            return Self::EMPTY;
        }

        let count = finite.len() as f64;
        let mean = finite.iter().sum::<f64>() / count;
        // Population standard deviation: denominator N, not N - 1.
        let variance = finite
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / count;

        MetricStats {
            mean: Some(mean),
            std: Some(variance.sqrt()),
        }
    }
}

/// The wire-format summary returned by [`crate::pipeline::process_csv`].
/// Key spelling and order are fixed for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "Qp_norm_25C_m3h")]
    pub normalized_flow: MetricStats,
    #[serde(rename = "SaltPass_%")]
    pub salt_passage: MetricStats,
    #[serde(rename = "dP_bar")]
    pub differential_pressure: MetricStats,
    pub rows: usize,
}

impl Summary {
    /// Aggregates the per-row metrics. Every input row contributes one
    /// [`DerivedRow`], so the row count is the slice length.
    pub fn from_derived(derived: &[DerivedRow]) -> Self {
        Summary {
            normalized_flow: MetricStats::from_values(
                derived.iter().map(|row| row.qp_norm_25c_m3h),
            ),
            salt_passage: MetricStats::from_values(derived.iter().map(|row| row.salt_passage_pct)),
            differential_pressure: MetricStats::from_values(
                derived.iter().map(|row| row.differential_pressure_bar),
            ),
            rows: derived.len(),
        }
    }
}
