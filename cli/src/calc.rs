//! One-shot calculation from command-line values.

use log::debug;
use riskbook::format::DisplayStyle;
use riskbook::inputs::parse_field;
use riskbook::{RiskInputs, RiskOutcome};

use crate::config::Config;
use crate::error::Result;

/// Shown in place of a result when the inputs are incomplete.
pub const NOT_COMPUTABLE: &str =
    "not computable: capital, risk %, entry and stop-loss are required";

/// Raw field values as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct CalcRequest {
    pub capital: Option<String>,
    pub risk_pct: Option<String>,
    pub entry: Option<String>,
    pub stop_loss: Option<String>,
    pub target: Option<String>,
    /// Reject malformed values instead of coercing them to zero.
    pub strict: bool,
}

impl CalcRequest {
    /// Resolve to calculator inputs, filling capital and risk from config
    /// defaults when omitted.
    pub fn resolve(&self, config: &Config) -> Result<RiskInputs> {
        let capital = self
            .capital
            .clone()
            .or_else(|| config.defaults.capital.map(|v| v.to_string()));
        let risk_pct = self
            .risk_pct
            .clone()
            .or_else(|| config.defaults.risk_pct.map(|v| v.to_string()));

        if self.strict {
            return Ok(RiskInputs::parse_strict(
                capital.as_deref(),
                risk_pct.as_deref(),
                self.entry.as_deref(),
                self.stop_loss.as_deref(),
                self.target.as_deref(),
            )?);
        }

        let field = |text: &Option<String>| text.as_deref().map(parse_field).unwrap_or(0.0);
        Ok(RiskInputs::new(
            field(&capital),
            field(&risk_pct),
            field(&self.entry),
            field(&self.stop_loss),
            self.target.as_deref().map(parse_field),
        ))
    }
}

/// Format an outcome as a text summary or pretty JSON.
pub fn render(outcome: &RiskOutcome, style: &DisplayStyle, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }
    Ok(match outcome.result() {
        Some(result) => style.view(result).to_string(),
        None => NOT_COMPUTABLE.to_string(),
    })
}

/// Resolve, compute, and render one request.
pub fn run(config: &Config, request: &CalcRequest, json: bool) -> Result<String> {
    let inputs = request.resolve(config)?;
    debug!("inputs: {inputs:?}");
    let outcome = config.calculator().compute(&inputs);
    if !outcome.is_computable() {
        debug!("inputs not computable");
    }
    render(&outcome, &config.style(), json)
}
