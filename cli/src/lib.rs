//! riskbook-cli: command-line front end for the riskbook position sizer.
//!
//! Loads display and rounding preferences from TOML, then sizes positions
//! one at a time, interactively with live recalculation, or in JSON batches
//! shaped like the journal's calculate requests.

pub mod batch;
pub mod calc;
pub mod config;
pub mod error;
pub mod session;
