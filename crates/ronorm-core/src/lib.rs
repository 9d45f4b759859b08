pub mod columns;
pub mod error;
pub mod physics;
pub mod pipeline;
pub mod row;
pub mod summary;

pub use columns::{Field, ResolvedColumns};
pub use error::{PipelineError, Result};
pub use physics::{
    effective_tmp_bar, normalize_permeate_flow, osmotic_pressure_bar, quick_check,
    temp_correction_factor, water_viscosity_mpa_s, QuickCheck, DEFAULT_ALPHA, DEFAULT_ION_FACTOR,
    REF_TEMP_C, REF_TMP_BAR, TMP_FLOOR_BAR,
};
pub use pipeline::{process_csv, summarize_csv};
pub use row::{evaluate_row, DerivedRow, MeasurementRow, RowFault};
pub use summary::{MetricStats, Summary};
