//! unitd Units - unit types, units and their registry
//!
//! Every unit belongs to exactly one [`UnitType`] and carries a scale
//! relative to the canonical base unit of that type. Units of the same
//! type are comparable: they can be converted into one another and
//! combined additively.
//!
//! Standard types:
//! - Amount (count, mol)
//! - Distance (au, km, m, mm, mi, yd, ft, in)
//! - Time (d, hr, minute, s)
//! - Mass (kg, g, mg, lb, oz)
//!
//! The reserved `magnitude` unit is unitless and comparable only to itself.

mod parse;
mod registry;
mod unit;
mod unit_type;

pub use parse::{infer_unit, parse_quantity_string, parse_value, ParsedQuantity};
pub use registry::UnitRegistry;
pub use unit::Unit;
pub use unit_type::{is_identifier, UnitType, MAGNITUDE_TYPE_NAME, RESERVED_PREFIX};
