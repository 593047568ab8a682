//! Unit registry - unit types, units and the abbreviation index

use std::collections::HashMap;
use std::sync::Arc;
use unitd_core::{IdentifierKind, Result, UnitdError};
use crate::unit_type::is_identifier;
use crate::{Unit, UnitType};

/// Registry of all known units
///
/// Units are unique per (type, name). Abbreviations are indexed on a
/// first-registration-wins basis: a later unit reusing an abbreviation is
/// registered but not reachable through [`UnitRegistry::lookup_abbr`].
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    types: Vec<UnitType>,
    units: Vec<Arc<Unit>>,
    by_type: HashMap<UnitType, HashMap<String, Arc<Unit>>>,
    abbrs: HashMap<String, Arc<Unit>>,
}

impl UnitRegistry {
    /// Empty registry holding only the `magnitude` sentinel
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            types: Vec::new(),
            units: Vec::new(),
            by_type: HashMap::new(),
            abbrs: HashMap::new(),
        };
        registry.insert(Unit::magnitude());
        registry
    }

    /// Registry with the standard amount, distance, time and mass units
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register_standard_units()
            .expect("standard unit table has no duplicates");
        registry
    }

    /// Declare a unit type. Idempotent.
    pub fn register_type(&mut self, unit_type: UnitType) {
        if !self.by_type.contains_key(&unit_type) {
            tracing::debug!(unit_type = %unit_type, "registered unit type");
            self.types.push(unit_type.clone());
            self.by_type.insert(unit_type, HashMap::new());
        }
    }

    /// Register a unit whose `scale` is the number of canonical base units
    /// one of it equals.
    pub fn register(
        &mut self,
        unit_type: impl Into<UnitType>,
        name: &str,
        abbr: &str,
        scale: f64,
    ) -> Result<Arc<Unit>> {
        let unit_type = unit_type.into();

        if !unit_type.is_reserved() {
            if !is_identifier(unit_type.name()) {
                return Err(UnitdError::InvalidIdentifier {
                    kind: IdentifierKind::Type,
                    value: unit_type.name().to_string(),
                });
            }
            if !is_identifier(name) {
                return Err(UnitdError::InvalidIdentifier {
                    kind: IdentifierKind::Name,
                    value: name.to_string(),
                });
            }
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(UnitdError::InvalidScale {
                unit_type: unit_type.to_string(),
                name: name.to_string(),
                scale,
            });
        }
        if self.lookup(&unit_type, name).is_some() {
            return Err(UnitdError::DuplicateUnit {
                unit_type: unit_type.to_string(),
                name: name.to_string(),
            });
        }

        let unit = Arc::new(Unit::new(unit_type, name, abbr, scale));
        self.insert(Arc::clone(&unit));
        Ok(unit)
    }

    fn insert(&mut self, unit: Arc<Unit>) {
        self.register_type(unit.unit_type().clone());
        tracing::debug!(
            unit_type = %unit.unit_type(),
            name = unit.name(),
            abbr = unit.abbr(),
            scale = unit.scale(),
            "registered unit"
        );

        if self.abbrs.contains_key(unit.abbr()) {
            tracing::debug!(abbr = unit.abbr(), name = unit.name(), "abbreviation already indexed");
        } else {
            self.abbrs.insert(unit.abbr().to_string(), Arc::clone(&unit));
        }

        self.by_type
            .entry(unit.unit_type().clone())
            .or_default()
            .insert(unit.name().to_string(), Arc::clone(&unit));
        self.units.push(unit);
    }

    /// The `magnitude` sentinel
    pub fn magnitude(&self) -> Arc<Unit> {
        Unit::magnitude()
    }

    /// Two units are comparable iff they share a type
    pub fn is_comparable(&self, a: &Unit, b: &Unit) -> bool {
        a.is_comparable(b)
    }

    /// Unit first registered under `abbr`
    pub fn lookup_abbr(&self, abbr: &str) -> Option<&Arc<Unit>> {
        self.abbrs.get(abbr)
    }

    /// Unit named `name` within `unit_type`
    pub fn lookup(&self, unit_type: &UnitType, name: &str) -> Option<&Arc<Unit>> {
        self.by_type.get(unit_type).and_then(|units| units.get(name))
    }

    /// Like [`UnitRegistry::lookup`] but failing with `UnitNotFound`
    pub fn require(&self, unit_type: &UnitType, name: &str) -> Result<&Arc<Unit>> {
        self.lookup(unit_type, name).ok_or_else(|| UnitdError::UnitNotFound {
            unit_type: unit_type.to_string(),
            name: name.to_string(),
        })
    }

    /// All types in registration order
    pub fn types(&self) -> &[UnitType] {
        &self.types
    }

    /// All units in registration order
    pub fn units(&self) -> impl Iterator<Item = &Arc<Unit>> {
        self.units.iter()
    }

    /// Units of one type in registration order
    pub fn units_of<'a>(&'a self, unit_type: &'a UnitType) -> impl Iterator<Item = &'a Arc<Unit>> {
        self.units.iter().filter(move |u| u.unit_type() == unit_type)
    }

    /// Register the standard unit table
    pub fn register_standard_units(&mut self) -> Result<()> {
        self.register_amount_units()?;
        self.register_distance_units()?;
        self.register_time_units()?;
        self.register_mass_units()?;
        Ok(())
    }

    fn register_amount_units(&mut self) -> Result<()> {
        self.register(UnitType::Amount, "count", "", 1.0)?;
        self.register(UnitType::Amount, "mole", "mol", 1.0)?;
        Ok(())
    }

    fn register_distance_units(&mut self) -> Result<()> {
        self.register(UnitType::Distance, "astronomicalUnit", "au", 149597870700.0)?;
        self.register(UnitType::Distance, "kilometer", "km", 1000.0)?;
        self.register(UnitType::Distance, "meter", "m", 1.0)?;
        self.register(UnitType::Distance, "millimeter", "mm", 0.001)?;
        self.register(UnitType::Distance, "mile", "mi", 1609.344)?;
        self.register(UnitType::Distance, "yard", "yd", 0.9144)?;
        self.register(UnitType::Distance, "foot", "ft", 0.3048)?;
        self.register(UnitType::Distance, "inch", "in", 0.0254)?;
        Ok(())
    }

    fn register_time_units(&mut self) -> Result<()> {
        self.register(UnitType::Time, "day", "d", 86400.0)?;
        self.register(UnitType::Time, "hour", "hr", 3600.0)?;
        // "m" stays with meter
        self.register(UnitType::Time, "minute", "m", 60.0)?;
        self.register(UnitType::Time, "second", "s", 1.0)?;
        Ok(())
    }

    fn register_mass_units(&mut self) -> Result<()> {
        self.register(UnitType::Mass, "kilogram", "kg", 1.0)?;
        self.register(UnitType::Mass, "gram", "g", 0.001)?;
        self.register(UnitType::Mass, "milligram", "mg", 0.000001)?;
        self.register(UnitType::Mass, "pound", "lb", 0.45359237)?;
        self.register(UnitType::Mass, "ounce", "oz", 0.028349523125)?;
        Ok(())
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
