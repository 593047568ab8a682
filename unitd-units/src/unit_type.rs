//! Unit types (dimensions)
//!
//! Every unit belongs to exactly one type. Two units are comparable,
//! and can be converted or added, only when their types are equal.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;

/// Marker prefix for types that are not user facing
pub const RESERVED_PREFIX: char = '_';

/// Name of the type holding the `magnitude` sentinel
pub const MAGNITUDE_TYPE_NAME: &str = "_reserved";

/// The dimension a unit measures
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitType {
    /// Reserved type of the unitless `magnitude` sentinel
    Magnitude,
    Amount,
    Distance,
    Time,
    Mass,
    /// Type registered at runtime
    Custom(String),
}

impl UnitType {
    /// Resolve a type identifier, mapping built-in names onto their variants
    pub fn from_name(name: &str) -> Self {
        match name {
            MAGNITUDE_TYPE_NAME => UnitType::Magnitude,
            "amount" => UnitType::Amount,
            "distance" => UnitType::Distance,
            "time" => UnitType::Time,
            "mass" => UnitType::Mass,
            other => UnitType::Custom(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            UnitType::Magnitude => MAGNITUDE_TYPE_NAME,
            UnitType::Amount => "amount",
            UnitType::Distance => "distance",
            UnitType::Time => "time",
            UnitType::Mass => "mass",
            UnitType::Custom(name) => name,
        }
    }

    /// Reserved types skip identifier validation and are hidden from users
    pub fn is_reserved(&self) -> bool {
        self.name().starts_with(RESERVED_PREFIX)
    }
}

impl From<&str> for UnitType {
    fn from(name: &str) -> Self {
        UnitType::from_name(name)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for UnitType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[_A-Za-z][_A-Za-z0-9]*$").unwrap())
}

/// Check an identifier against `^[_A-Za-z][_A-Za-z0-9]*$`
pub fn is_identifier(s: &str) -> bool {
    identifier_regex().is_match(s)
}
