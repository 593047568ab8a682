//! Catalog - the unit and operation registries measures are evaluated against

use std::sync::{Arc, LazyLock};
use unitd_core::Result;
use unitd_ops::{Operation, OperationRegistry};
use unitd_units::{Unit, UnitRegistry, UnitType};
use crate::{Input, Measure};

static STANDARD: LazyLock<Catalog> = LazyLock::new(Catalog::standard);

/// Process-wide catalog with the standard units and operations
pub fn standard_catalog() -> &'static Catalog {
    &STANDARD
}

/// Unit and operation registries
///
/// A catalog is built once and then shared by reference. Measures do not
/// hold a catalog, so an operation registered in a catalog is callable on
/// every measure evaluated against it, whenever that measure was created.
#[derive(Debug, Clone)]
pub struct Catalog {
    units: UnitRegistry,
    operations: OperationRegistry,
}

impl Catalog {
    pub fn new(units: UnitRegistry, operations: OperationRegistry) -> Self {
        Self { units, operations }
    }

    /// Standard units with add, subtract, multiply and divide
    pub fn standard() -> Self {
        Self::new(UnitRegistry::standard(), OperationRegistry::standard())
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub fn units(&self) -> &UnitRegistry {
        &self.units
    }

    pub fn operations(&self) -> &OperationRegistry {
        &self.operations
    }

    pub fn register_unit(
        &mut self,
        unit_type: impl Into<UnitType>,
        name: &str,
        abbr: &str,
        scale: f64,
    ) -> Result<Arc<Unit>> {
        self.units.register(unit_type, name, abbr, scale)
    }

    pub fn register_operation<O: Operation + 'static>(&mut self, op: O) -> Result<()> {
        self.operations.register(op)
    }

    /// Unit named `name` within `unit_type`, failing with `UnitNotFound`
    pub fn unit(&self, unit_type: impl Into<UnitType>, name: &str) -> Result<Arc<Unit>> {
        self.units.require(&unit_type.into(), name).cloned()
    }

    /// Build a measure against this catalog; see [`Measure::build`]
    pub fn measure(
        &self,
        value: impl Into<Input>,
        unit: Option<&Arc<Unit>>,
        precision: Option<i64>,
    ) -> Result<Measure> {
        Measure::build(self, value, unit, precision)
    }

    /// Parse a quantity string such as `"3.0 km"`
    pub fn parse(&self, text: &str) -> Result<Measure> {
        Measure::build(self, text, None, None)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for a [`Catalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    units: UnitRegistry,
    operations: OperationRegistry,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_standard_units(mut self) -> Result<Self> {
        self.units.register_standard_units()?;
        Ok(self)
    }

    pub fn with_standard_operations(mut self) -> Result<Self> {
        self.operations.register_standard_operations()?;
        Ok(self)
    }

    pub fn with_unit(
        mut self,
        unit_type: impl Into<UnitType>,
        name: &str,
        abbr: &str,
        scale: f64,
    ) -> Result<Self> {
        self.units.register(unit_type, name, abbr, scale)?;
        Ok(self)
    }

    pub fn with_operation<O: Operation + 'static>(mut self, op: O) -> Result<Self> {
        self.operations.register(op)?;
        Ok(self)
    }

    pub fn build(self) -> Catalog {
        Catalog::new(self.units, self.operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitd_core::UnitdError;
    use unitd_ops::{FnOperation, OperationOptions};

    #[test]
    fn test_standard_catalog_is_shared() {
        assert!(std::ptr::eq(standard_catalog(), standard_catalog()));
        assert_eq!(standard_catalog().operations().len(), 4);
    }

    #[test]
    fn test_builder() {
        let catalog = Catalog::builder()
            .with_standard_units()
            .and_then(|b| b.with_unit("distance", "furlong", "fur", 201.168))
            .and_then(|b| b.with_standard_operations())
            .and_then(|b| b.with_operation(FnOperation::new("max", OperationOptions::UNIT_PRESERVING, f64::max)))
            .unwrap()
            .build();

        assert!(catalog.units().lookup_abbr("fur").is_some());
        assert!(catalog.operations().contains("max"));
        assert!(catalog.operations().contains("add"));
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let err = Catalog::builder()
            .with_standard_operations()
            .and_then(|b| b.with_standard_operations())
            .unwrap_err();
        assert_eq!(err, UnitdError::DuplicateOperation { name: "add".to_string() });
    }

    #[test]
    fn test_unit_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.unit("distance", "foot").unwrap().abbr(), "ft");
        let err = catalog.unit("distance", "minute").unwrap_err();
        assert_eq!(err.to_string(), "Unable to find unit [minute] in [distance]");
    }

    #[test]
    fn test_empty_builder_has_magnitude_only() {
        let catalog = Catalog::builder().build();
        assert_eq!(catalog.units().units().count(), 1);
        assert!(catalog.operations().is_empty());
    }
}
