//! Measure type - a value with a unit and a significant-digit precision

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use unitd_core::{clamp_precision, format_significant, round_significant, Result, UnitdError, MAX_PRECISION};
use unitd_units::{parse_quantity_string, Unit};
use crate::{Catalog, Input};

/// A measured quantity
///
/// Immutable: conversion and arithmetic return new measures. `val` is
/// `raw` rounded to `precision` significant digits and is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measure {
    raw: f64,
    val: f64,
    precision: u32,
    unit: Arc<Unit>,
}

/// Target of a unit conversion
#[derive(Debug, Clone, Copy)]
pub enum UnitTarget<'a> {
    Unit(&'a Arc<Unit>),
    /// Unit name resolved within the measure's own unit type
    Name(&'a str),
}

impl<'a> From<&'a Arc<Unit>> for UnitTarget<'a> {
    fn from(unit: &'a Arc<Unit>) -> Self {
        UnitTarget::Unit(unit)
    }
}

impl<'a> From<&'a str> for UnitTarget<'a> {
    fn from(name: &'a str) -> Self {
        UnitTarget::Name(name)
    }
}

impl Measure {
    /// Build a measure from any coercible input.
    ///
    /// - An existing measure is returned as is; `unit` and `precision` are
    ///   then ignored.
    /// - Text may name its unit through a trailing abbreviation
    ///   (`"2 km"`); an explicit `unit` takes priority.
    /// - Text implies a precision equal to its digit count (`"3.0"` is 2);
    ///   an explicit `precision` takes priority. Otherwise 15.
    /// - Precision is clamped to `[1, 15]`.
    pub fn build(
        catalog: &Catalog,
        value: impl Into<Input>,
        unit: Option<&Arc<Unit>>,
        precision: Option<i64>,
    ) -> Result<Self> {
        let (raw, inferred_unit, inferred_precision) = match value.into() {
            Input::Measure(measure) => {
                if unit.is_some() || precision.is_some() {
                    tracing::warn!(
                        measure = %measure,
                        "unit and precision are ignored when building from a measure"
                    );
                }
                return Ok(measure);
            }
            Input::Number(n) => (n, None, None),
            Input::Text(text) => {
                let parsed = parse_quantity_string(catalog.units(), &text)?;
                (parsed.value, parsed.unit, Some(parsed.digits as i64))
            }
            Input::Missing => return Err(UnitdError::invalid_value(Input::Missing)),
        };

        let unit = unit.cloned().or(inferred_unit).unwrap_or_else(Unit::magnitude);
        let precision = precision.or(inferred_precision).map_or(MAX_PRECISION, clamp_precision);
        Self::from_parts(raw, unit, precision)
    }

    /// Full-precision measure in `unit`
    pub fn new(value: f64, unit: &Arc<Unit>) -> Result<Self> {
        Self::from_parts(value, Arc::clone(unit), MAX_PRECISION)
    }

    /// Measure in `unit` with an explicit (clamped) precision
    pub fn with_precision(value: f64, unit: &Arc<Unit>, precision: i64) -> Result<Self> {
        Self::from_parts(value, Arc::clone(unit), clamp_precision(precision))
    }

    /// Unitless full-precision measure
    pub fn magnitude(value: f64) -> Result<Self> {
        Self::from_parts(value, Unit::magnitude(), MAX_PRECISION)
    }

    pub(crate) fn from_parts(raw: f64, unit: Arc<Unit>, precision: u32) -> Result<Self> {
        if !raw.is_finite() {
            return Err(UnitdError::invalid_value(raw));
        }
        Ok(Measure {
            raw,
            val: round_significant(raw, precision),
            precision,
            unit,
        })
    }

    /// The value as supplied, unrounded
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// `raw` rounded to `precision` significant digits
    pub fn val(&self) -> f64 {
        self.val
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn unit(&self) -> &Arc<Unit> {
        &self.unit
    }

    pub fn is_magnitude(&self) -> bool {
        self.unit.is_magnitude()
    }

    pub fn is_comparable(&self, other: &Measure) -> bool {
        self.unit.is_comparable(&other.unit)
    }

    /// Convert to another unit of the same type.
    ///
    /// A name is resolved within this measure's unit type and fails with
    /// `UnitNotFound` when absent there. Precision is preserved.
    pub fn convert_to<'a>(&self, catalog: &Catalog, target: impl Into<UnitTarget<'a>>) -> Result<Self> {
        match target.into() {
            UnitTarget::Unit(unit) => self.convert_to_unit(unit),
            UnitTarget::Name(name) => {
                let unit = catalog.units().require(self.unit.unit_type(), name)?;
                self.convert_to_unit(unit)
            }
        }
    }

    /// Convert to a unit handle; needs no catalog
    pub fn convert_to_unit(&self, target: &Arc<Unit>) -> Result<Self> {
        let raw = self.unit.convert_value(self.raw, target)?;
        Self::from_parts(raw, Arc::clone(target), self.precision)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = format_significant(self.raw, self.precision);
        if self.unit.abbr().is_empty() {
            write!(f, "{}", value)
        } else {
            write!(f, "{} {}", value, self.unit.abbr())
        }
    }
}
