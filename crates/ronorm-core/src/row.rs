use csv::StringRecord;

use crate::columns::{Field, ResolvedColumns};
use crate::physics::{
    effective_tmp_bar, normalize_permeate_flow, osmotic_pressure_bar, DEFAULT_ALPHA,
    DEFAULT_ION_FACTOR, REF_TEMP_C, REF_TMP_BAR,
};

/// Marker for a record containing a cell that is present but does not
/// parse as a number. Distinct from absence: a faulted record loses its
/// entire derived triple, an absent value only its dependent metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFault;

/// The seven canonical values extracted from one record.
///
/// A value is `None` when its column did not resolve, the cell is missing
/// or empty, or it parses to a non-finite number. Absence is an explicit
/// state here, never a NaN sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeasurementRow {
    pub temp_c: Option<f64>,
    pub permeate_flow_m3h: Option<f64>,
    pub feed_pressure_bar: Option<f64>,
    pub perm_pressure_bar: Option<f64>,
    pub feed_conductivity_mg_l: Option<f64>,
    pub perm_conductivity_mg_l: Option<f64>,
    pub differential_pressure_bar: Option<f64>,
}

impl MeasurementRow {
    pub fn extract(resolved: &ResolvedColumns, record: &StringRecord) -> Result<Self, RowFault> {
        Ok(Self {
            temp_c: cell(resolved, record, Field::TempC)?,
            permeate_flow_m3h: cell(resolved, record, Field::PermeateFlow)?,
            feed_pressure_bar: cell(resolved, record, Field::FeedPressure)?,
            perm_pressure_bar: cell(resolved, record, Field::PermPressure)?,
            feed_conductivity_mg_l: cell(resolved, record, Field::FeedConductivity)?,
            perm_conductivity_mg_l: cell(resolved, record, Field::PermConductivity)?,
            differential_pressure_bar: cell(resolved, record, Field::DifferentialPressure)?,
        })
    }
}

fn cell(
    resolved: &ResolvedColumns,
    record: &StringRecord,
    field: Field,
) -> Result<Option<f64>, RowFault> {
    let Some(index) = resolved.index_of(field) else {
        return Ok(None);
    };
    let Some(raw) = record.get(index) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        // "nan"/"inf" parse fine and count as absent, not as faults.
        Ok(value) => Ok(Some(value).filter(|value| value.is_finite())),
        Err(_) => Err(RowFault),
    }
}

/// The three derived metrics for one row. Each is present only when every
/// input it depends on was present and finite.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedRow {
    pub qp_norm_25c_m3h: Option<f64>,
    pub salt_passage_pct: Option<f64>,
    pub differential_pressure_bar: Option<f64>,
}

/// Evaluates one record against the resolved columns. An absent value
/// degrades the metrics that depend on it; an unparseable cell blanks the
/// whole derived triple. Neither aborts the table.
pub fn evaluate_row(resolved: &ResolvedColumns, record: &StringRecord) -> DerivedRow {
    let Ok(row) = MeasurementRow::extract(resolved, record) else {
        return DerivedRow::default();
    };

    let osmotic = match (row.temp_c, row.feed_conductivity_mg_l) {
        (Some(temp), Some(tds)) => Some(osmotic_pressure_bar(temp, tds, DEFAULT_ION_FACTOR)),
        _ => None,
    };

    let tmp_eff = match (row.feed_pressure_bar, row.perm_pressure_bar, osmotic) {
        (Some(feed), Some(perm), Some(pi)) => {
            Some(effective_tmp_bar(feed, perm, pi, DEFAULT_ALPHA))
        }
        _ => None,
    };

    let qp_norm = match (row.permeate_flow_m3h, row.temp_c, tmp_eff) {
        (Some(flow), Some(temp), Some(tmp)) => {
            Some(normalize_permeate_flow(flow, temp, tmp, REF_TMP_BAR, REF_TEMP_C))
        }
        _ => None,
    };

    let salt_passage = match (row.perm_conductivity_mg_l, row.feed_conductivity_mg_l) {
        (Some(perm), Some(feed)) if feed > 0.0 => Some(perm / feed * 100.0),
        _ => None,
    };

    DerivedRow {
        qp_norm_25c_m3h: qp_norm,
        salt_passage_pct: salt_passage,
        differential_pressure_bar: row.differential_pressure_bar,
    }
}
