//! Money parsing and formatting used for CLI and export outputs.

use crate::errors::{AppError, AppResult};

/// Format an amount with two decimals and the account currency symbol.
///
/// Example: `format_amount(1250.5, "€")` → "1250.50 €"
pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{:.2} {}", value, currency)
}

/// Parse a user-supplied amount. Accepts "," as decimal separator.
/// Rejects non-finite and negative values: every stored amount (daily
/// rate, service price, advance, expense) is non-negative by contract.
pub fn parse_amount(s: &str) -> AppResult<f64> {
    let normalized = s.trim().replace(',', ".");
    let v: f64 = normalized
        .parse()
        .map_err(|_| AppError::InvalidAmount(s.to_string()))?;

    if !v.is_finite() || v < 0.0 {
        return Err(AppError::InvalidAmount(s.to_string()));
    }
    Ok(v)
}
