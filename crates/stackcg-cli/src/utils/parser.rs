use stackcg::engine::config::Objective;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Invalid objective '{0}'. Expected 'lowest', 'highest' or 'nearest-to=<FLOAT>' (e.g., 'nearest-to=50')."
    )]
    InvalidObjective(String),

    #[error("Invalid number '{value}' for '{key}'.")]
    InvalidNumber { key: String, value: String },

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidAssignment(String),
}

/// Parses the `--objective` flag.
pub fn parse_objective(raw: &str) -> Result<Objective, ParseError> {
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "lowest" => Ok(Objective::Lowest),
        "highest" => Ok(Objective::Highest),
        other => {
            let target = other
                .strip_prefix("nearest-to=")
                .ok_or_else(|| ParseError::InvalidObjective(raw.to_string()))?;
            let value = parse_number("nearest-to", target)?;
            if !value.is_finite() {
                return Err(ParseError::InvalidObjective(raw.to_string()));
            }
            Ok(Objective::NearestTo(value))
        }
    }
}

pub fn parse_number(key: &str, value: &str) -> Result<f64, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Splits a `KEY=VALUE` override at the first `=`.
pub fn split_assignment(raw: &str) -> Result<(&str, &str), ParseError> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim(), value))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| ParseError::InvalidAssignment(raw.to_string()))
}
