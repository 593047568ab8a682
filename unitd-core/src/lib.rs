//! unitd Core - Fundamental types
//!
//! This crate provides the building blocks shared by every unitd crate:
//! - `UnitdError`: the error taxonomy with stable codes
//! - Significant-digit precision: clamping, rounding and rendering
//! - Text coercion: leading-number parsing and digit counting

mod coerce;
mod error;
pub mod precision;

pub use coerce::{count_digits, parse_leading_number};
pub use error::{codes, IdentifierKind, Result, UnitdError};
pub use precision::{
    clamp_precision, format_significant, round_significant, MAX_PRECISION, MIN_PRECISION,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{Result, UnitdError, MAX_PRECISION, MIN_PRECISION};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_then_format_agree() {
        let raw = 4.567;
        let val = round_significant(raw, 2);
        assert_eq!(val, 4.6);
        assert_eq!(format_significant(val, 2), format_significant(raw, 2));
    }

    #[test]
    fn test_string_precision_inference_is_clamped() {
        let digits = count_digits("1234567890.1234567890") as i64;
        assert_eq!(clamp_precision(digits), MAX_PRECISION);
    }
}
