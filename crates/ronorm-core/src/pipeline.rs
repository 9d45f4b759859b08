use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::columns::ResolvedColumns;
use crate::error::{PipelineError, Result};
use crate::row::{evaluate_row, DerivedRow};
use crate::summary::Summary;

/// Computes the normalized-performance summary for one CSV table.
///
/// Columns are resolved once from the header row and reused for every
/// record. Rows are evaluated independently in input order; a bad cell
/// only degrades that row's dependent metrics. Structural CSV failures
/// and missing headers are the only fatal outcomes.
pub fn summarize_csv(csv_text: &str) -> Result<Summary> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(PipelineError::EmptyInput);
    }

    let resolved = ResolvedColumns::from_headers(&headers);
    let unresolved = resolved.unresolved();
    if !unresolved.is_empty() {
        let names: Vec<&str> = unresolved
            .iter()
            .map(|field| field.canonical_name())
            .collect();
        warn!(fields = ?names, "no matching column for some canonical fields");
    }

    let mut derived: Vec<DerivedRow> = Vec::new();
    for record in reader.records() {
        let record = record?;
        derived.push(evaluate_row(&resolved, &record));
    }

    debug!(rows = derived.len(), "evaluated measurement rows");
    Ok(Summary::from_derived(&derived))
}

/// The main entry point: CSV text in, JSON summary document out.
pub fn process_csv(csv_text: &str) -> Result<String> {
    let summary = summarize_csv(csv_text)?;
    Ok(serde_json::to_string(&summary)?)
}
