//! JSON batch mode.
//!
//! Reads an array of requests in the journal's calculate-request shape
//! (`capital`, `risk_pct`, `entry`, `stop_loss`, optional `target`) and writes
//! one JSON object per request, one per line.

use std::io::Write;
use std::path::Path;

use log::{debug, info};
use riskbook::{PositionRiskCalculator, RiskInputs};

use crate::error::{Error, Result};

/// Counts from one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub computed: usize,
    pub not_computable: usize,
}

/// Parse a JSON array of requests.
pub fn parse(json: &str) -> Result<Vec<RiskInputs>> {
    Ok(serde_json::from_str(json)?)
}

/// Load and parse a batch file.
pub fn load(path: &Path) -> Result<Vec<RiskInputs>> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::BatchRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let requests = parse(&contents)?;
    info!("Loaded {} requests from {}", requests.len(), path.display());
    Ok(requests)
}

/// Compute every request and write the outcomes as JSON lines.
pub fn run<W: Write>(
    calc: &PositionRiskCalculator,
    requests: &[RiskInputs],
    out: &mut W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary {
        total: requests.len(),
        ..BatchSummary::default()
    };

    for (i, inputs) in requests.iter().enumerate() {
        let outcome = calc.compute(inputs);
        match outcome.result() {
            Some(r) => {
                summary.computed += 1;
                debug!("request {i}: {} units, max loss {}", r.position_size, r.max_loss);
            }
            None => {
                summary.not_computable += 1;
                debug!("request {i}: not computable");
            }
        }
        serde_json::to_writer(&mut *out, &outcome)?;
        writeln!(out)?;
    }
    out.flush()?;

    info!(
        "Batch complete: {} computed, {} not computable",
        summary.computed, summary.not_computable
    );
    Ok(summary)
}
