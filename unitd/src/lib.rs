//! unitd - Measures with units
//!
//! A [`Measure`] pairs a value with a [`Unit`] and a significant-digit
//! precision. Measures are evaluated against a [`Catalog`] holding the
//! unit registry and the operation registry:
//!
//! ```
//! use unitd::standard_catalog;
//!
//! let catalog = standard_catalog();
//! let distance = catalog.parse("3 km").unwrap();
//! let sum = distance.add(catalog, "5000 m").unwrap();
//! assert_eq!(sum.raw(), 8.0);
//! assert_eq!(sum.convert_to(catalog, "meter").unwrap().raw(), 8000.0);
//! ```

mod catalog;
mod dispatch;
mod input;
mod measure;

pub use catalog::{standard_catalog, Catalog, CatalogBuilder};
pub use input::Input;
pub use measure::{Measure, UnitTarget};

pub use unitd_core::{codes, Result, UnitdError, MAX_PRECISION, MIN_PRECISION};
pub use unitd_ops::{FnOperation, Operation, OperationMeta, OperationOptions, OperationRegistry};
pub use unitd_units::{Unit, UnitRegistry, UnitType};

/// Build a measure against the standard catalog
#[macro_export]
macro_rules! measure {
    ($value:expr) => {
        $crate::standard_catalog().measure($value, None, None)
    };
    ($value:expr, $precision:expr) => {
        $crate::standard_catalog().measure($value, None, Some($precision))
    };
}
