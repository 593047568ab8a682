//! Operation dispatch
//!
//! Every operation in a catalog is reachable through [`Measure::apply`].
//! The operation's options decide how units combine:
//!
//! - unit preserving (add, subtract): operands must be comparable. Both are
//!   taken to the canonical base unit, combined, and expressed back in the
//!   left operand's unit.
//! - magnitude scaling (multiply, divide): one operand must be a magnitude.
//!   Raw values combine directly and the other operand's unit is kept.
//! - anything else would need compound units and is rejected.
//!
//! The result precision is the smaller of the two operand precisions.

use std::sync::Arc;
use unitd_core::{Result, UnitdError};
use unitd_units::Unit;
use crate::{Catalog, Input, Measure};

impl Measure {
    /// Apply the operation registered as `op` with `rhs` as right operand.
    ///
    /// `rhs` is coerced with the [`Measure::build`] rules; `unit` and
    /// `precision` apply to it when it is not already a measure.
    pub fn apply(
        &self,
        catalog: &Catalog,
        op: &str,
        rhs: impl Into<Input>,
        unit: Option<&Arc<Unit>>,
        precision: Option<i64>,
    ) -> Result<Measure> {
        let operation = catalog.operations().require(op)?;
        let rhs = Measure::build(catalog, rhs, unit, precision)?;
        let options = operation.meta().options;
        let precision = self.precision().min(rhs.precision());

        tracing::trace!(op, lhs = %self, rhs = %rhs, "applying operation");

        if !options.transformative {
            if !self.is_comparable(&rhs) {
                return Err(UnitdError::incomparable(self.unit(), rhs.unit()));
            }
            let raw = operation.apply(
                self.unit().to_base(self.raw()),
                rhs.unit().to_base(rhs.raw()),
            );
            return Measure::from_parts(self.unit().from_base(raw), Arc::clone(self.unit()), precision);
        }

        if options.magnitude && (self.is_magnitude() || rhs.is_magnitude()) {
            let unit = if self.is_magnitude() { rhs.unit() } else { self.unit() };
            let raw = operation.apply(self.raw(), rhs.raw());
            return Measure::from_parts(raw, Arc::clone(unit), precision);
        }

        Err(UnitdError::UnsupportedUnitAlgebra {
            op: op.to_string(),
            left: self.unit().to_string(),
            right: rhs.unit().to_string(),
        })
    }

    pub fn add(&self, catalog: &Catalog, rhs: impl Into<Input>) -> Result<Measure> {
        self.apply(catalog, "add", rhs, None, None)
    }

    pub fn subtract(&self, catalog: &Catalog, rhs: impl Into<Input>) -> Result<Measure> {
        self.apply(catalog, "subtract", rhs, None, None)
    }

    pub fn multiply(&self, catalog: &Catalog, rhs: impl Into<Input>) -> Result<Measure> {
        self.apply(catalog, "multiply", rhs, None, None)
    }

    pub fn divide(&self, catalog: &Catalog, rhs: impl Into<Input>) -> Result<Measure> {
        self.apply(catalog, "divide", rhs, None, None)
    }
}
