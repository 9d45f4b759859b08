//! Temperature and pressure normalization formulas for RO membranes.

use serde::{Deserialize, Serialize};

/// Reference temperature for normalized permeate flow, degrees Celsius.
pub const REF_TEMP_C: f64 = 25.0;

/// Reference transmembrane pressure for normalized permeate flow, bar.
pub const REF_TMP_BAR: f64 = 10.0;

/// Floor applied to both transmembrane pressures inside
/// [`normalize_permeate_flow`].
///
/// Effective TMP can legitimately come out zero or negative when feed
/// pressure is low or feed osmotic pressure is high; the floor keeps the
/// normalization ratio bounded instead of blowing up or flipping sign.
/// This is a numeric-stability policy, not a physical constraint, and the
/// exact value is load-bearing for comparability of summaries.
pub const TMP_FLOOR_BAR: f64 = 0.1;

/// Van 't Hoff-style dissociation count assumed for the feed TDS.
pub const DEFAULT_ION_FACTOR: f64 = 2.0;

/// Osmotic reflection coefficient applied to the feed osmotic pressure.
pub const DEFAULT_ALPHA: f64 = 1.0;

const KELVIN_OFFSET: f64 = 273.15;

/// Dynamic viscosity of water in mPa·s, Vogel-type correlation.
///
/// Valid for any finite temperature where the correlation denominator
/// `T − 140 K` is nonzero; field temperatures are nowhere near that pole,
/// so no guard is applied.
pub fn water_viscosity_mpa_s(temp_c: f64) -> f64 {
    const A: f64 = 2.414e-5;
    const B: f64 = 247.8;
    const C: f64 = 140.0;
    let temp_k = temp_c + KELVIN_OFFSET;
    1000.0 * A * 10.0_f64.powf(B / (temp_k - C))
}

/// Viscosity ratio translating a flow measured at `temp_c` to `ref_temp_c`.
/// Equals 1.0 when the two temperatures coincide.
pub fn temp_correction_factor(temp_c: f64, ref_temp_c: f64) -> f64 {
    water_viscosity_mpa_s(temp_c) / water_viscosity_mpa_s(ref_temp_c)
}

/// Feed osmotic pressure in bar. Linear in TDS and in the ion factor,
/// scaled by the absolute temperature ratio against 25 °C.
pub fn osmotic_pressure_bar(temp_c: f64, tds_mg_l: f64, ion_factor: f64) -> f64 {
    let tds_g_l = tds_mg_l / 1000.0;
    let temp_k = temp_c + KELVIN_OFFSET;
    0.8 * tds_g_l * (temp_k / 298.15) * (ion_factor / 2.0)
}

/// Net driving pressure across the membrane in bar. Not clamped: the
/// result can be zero or negative, and downstream consumers must handle
/// that (see [`normalize_permeate_flow`]).
pub fn effective_tmp_bar(feed_bar: f64, perm_bar: f64, osmotic_bar: f64, alpha: f64) -> f64 {
    (feed_bar - perm_bar) - alpha * osmotic_bar
}

/// Permeate flow normalized to `ref_temp_c` and `ref_tmp_bar`.
///
/// Both TMPs are clamped to [`TMP_FLOOR_BAR`] before forming the pressure
/// ratio.
pub fn normalize_permeate_flow(
    flow_m3h: f64,
    temp_c: f64,
    tmp_eff_bar: f64,
    ref_tmp_bar: f64,
    ref_temp_c: f64,
) -> f64 {
    let tmp_eff = tmp_eff_bar.max(TMP_FLOOR_BAR);
    let tmp_ref = ref_tmp_bar.max(TMP_FLOOR_BAR);
    flow_m3h * temp_correction_factor(temp_c, ref_temp_c) * (tmp_ref / tmp_eff)
}

/// Spot check of the osmotic pressure model for one feed condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuickCheck {
    #[serde(rename = "T_C")]
    pub temp_c: f64,
    #[serde(rename = "TDS_mgL")]
    pub tds_mg_l: f64,
    #[serde(rename = "pi_bar")]
    pub pi_bar: f64,
}

/// Evaluates the osmotic pressure model at one feed condition, with
/// `pi_bar` rounded to 3 decimal places for display.
pub fn quick_check(temp_c: f64, tds_mg_l: f64) -> QuickCheck {
    let pi = osmotic_pressure_bar(temp_c, tds_mg_l, DEFAULT_ION_FACTOR);
    QuickCheck {
        temp_c,
        tds_mg_l,
        pi_bar: (pi * 1000.0).round() / 1000.0,
    }
}
