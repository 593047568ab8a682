//! Unit representation with its scale factor

use serde::Serialize;
use std::fmt;
use std::sync::{Arc, LazyLock};
use unitd_core::{Result, UnitdError};
use crate::UnitType;

static MAGNITUDE: LazyLock<Arc<Unit>> =
    LazyLock::new(|| Arc::new(Unit::new(UnitType::Magnitude, "magnitude", "", 1.0)));

/// A named scale within a unit type
///
/// Units are only created through a [`crate::UnitRegistry`] and are shared as
/// `Arc<Unit>` handles. They never change after registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    #[serde(rename = "type")]
    unit_type: UnitType,
    name: String,
    abbr: String,
    /// Canonical base units per one of this unit
    scale: f64,
}

impl Unit {
    pub(crate) fn new(unit_type: UnitType, name: &str, abbr: &str, scale: f64) -> Self {
        Unit {
            unit_type,
            name: name.to_string(),
            abbr: abbr.to_string(),
            scale,
        }
    }

    /// The unitless sentinel, default unit of every measure
    pub fn magnitude() -> Arc<Unit> {
        Arc::clone(&MAGNITUDE)
    }

    pub fn unit_type(&self) -> &UnitType {
        &self.unit_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbr(&self) -> &str {
        &self.abbr
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// True only for the sentinel itself, not for other units sharing its type
    pub fn is_magnitude(&self) -> bool {
        std::ptr::eq(self, Arc::as_ptr(&MAGNITUDE))
    }

    /// Two units are comparable iff they share a type
    pub fn is_comparable(&self, other: &Unit) -> bool {
        self.unit_type == other.unit_type
    }

    /// Convert a value in this unit to the canonical base unit of its type
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale
    }

    /// Convert a value in the canonical base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        value / self.scale
    }

    /// Convert a value from this unit to a comparable target unit
    pub fn convert_value(&self, value: f64, target: &Unit) -> Result<f64> {
        if !self.is_comparable(target) {
            return Err(UnitdError::incomparable(self, target));
        }
        Ok(target.from_base(self.to_base(value)))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new(UnitType::Distance, "meter", "m", 1.0)
    }

    fn kilometer() -> Unit {
        Unit::new(UnitType::Distance, "kilometer", "km", 1000.0)
    }

    fn second() -> Unit {
        Unit::new(UnitType::Time, "second", "s", 1.0)
    }

    #[test]
    fn test_comparable_units() {
        assert!(meter().is_comparable(&kilometer()));
        assert!(kilometer().is_comparable(&meter()));
        assert!(!meter().is_comparable(&second()));
    }

    #[test]
    fn test_magnitude_only_comparable_to_itself() {
        let magnitude = Unit::magnitude();
        assert!(magnitude.is_magnitude());
        assert!(magnitude.is_comparable(&Unit::magnitude()));
        assert!(!magnitude.is_comparable(&meter()));
        assert_eq!(magnitude.abbr(), "");
        assert_eq!(magnitude.scale(), 1.0);
    }

    #[test]
    fn test_reserved_unit_is_not_the_sentinel() {
        let percent = Unit::new(UnitType::Magnitude, "percent", "%", 0.01);
        assert!(!percent.is_magnitude());
        assert!(percent.is_comparable(&Unit::magnitude()));

        let copy = Unit::magnitude().as_ref().clone();
        assert!(!copy.is_magnitude());
    }

    #[test]
    fn test_magnitude_is_a_singleton() {
        assert!(Arc::ptr_eq(&Unit::magnitude(), &Unit::magnitude()));
    }

    #[test]
    fn test_base_conversion() {
        let km = kilometer();
        assert_eq!(km.to_base(5.0), 5000.0);
        assert_eq!(km.from_base(5000.0), 5.0);
    }

    #[test]
    fn test_convert_value() {
        assert_eq!(meter().convert_value(5000.0, &kilometer()).unwrap(), 5.0);

        let err = meter().convert_value(1.0, &second()).unwrap_err();
        assert_eq!(err.to_string(), "Unit meter is not comparable to second");
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(kilometer().to_string(), "kilometer");
    }
}
