//! Quantity string parsing - "3.0", "2 m", "2 mi m"
//!
//! A quantity string is a leading numeric literal optionally followed by
//! space-separated tokens. The last token, if it is a known abbreviation,
//! names the unit. Precision is the count of digit characters.

use std::sync::Arc;
use unitd_core::{count_digits, parse_leading_number, Result, UnitdError};
use crate::{Unit, UnitRegistry};

/// Pieces inferred from a quantity string
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    pub value: f64,
    /// Unit named by the trailing token, if any
    pub unit: Option<Arc<Unit>>,
    /// Digit characters present in the text
    pub digits: usize,
}

/// Unit whose abbreviation matches the last space-separated token
pub fn infer_unit(registry: &UnitRegistry, text: &str) -> Option<Arc<Unit>> {
    let token = text.trim().rsplit(' ').next().unwrap_or("");
    registry.lookup_abbr(token).cloned()
}

/// Parse the leading number of `text`, failing with `InvalidValue` on
/// anything that is not a finite number
pub fn parse_value(text: &str) -> Result<f64> {
    match parse_leading_number(text) {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(UnitdError::invalid_value(text)),
    }
}

/// Parse a quantity string into value, inferred unit and digit count
pub fn parse_quantity_string(registry: &UnitRegistry, text: &str) -> Result<ParsedQuantity> {
    let value = parse_value(text)?;
    Ok(ParsedQuantity {
        value,
        unit: infer_unit(registry, text),
        digits: count_digits(text),
    })
}
