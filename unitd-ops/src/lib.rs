//! unitd Operations
//!
//! Provides the operation extension point:
//! - `Operation`: a named binary function on raw values
//! - `OperationOptions`: how the operation treats units
//! - `OperationRegistry`: the name → operation table held by a catalog
//!
//! Registering an operation makes it callable on every measure through
//! the catalog that holds the registry.

mod arithmetic;
mod registry;
mod traits;

pub use arithmetic::{Add, Divide, Multiply, Subtract};
pub use registry::OperationRegistry;
pub use traits::{FnOperation, Operation, OperationMeta, OperationOptions};

/// Re-export core types for operation authors
pub mod prelude {
    pub use crate::{FnOperation, Operation, OperationMeta, OperationOptions, OperationRegistry};
    pub use unitd_core::prelude::*;
}
