//! Operation traits

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// How an operation treats the units of its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OperationOptions {
    /// The operation changes the unit of its result (multiply, divide).
    /// Non-transformative operations need comparable units and keep the
    /// left operand's unit.
    pub transformative: bool,
    /// A magnitude operand passes the other operand's unit through
    pub magnitude: bool,
}

impl OperationOptions {
    /// add, subtract
    pub const UNIT_PRESERVING: OperationOptions = OperationOptions {
        transformative: false,
        magnitude: false,
    };

    /// multiply, divide
    pub const MAGNITUDE_SCALING: OperationOptions = OperationOptions {
        transformative: true,
        magnitude: true,
    };
}

/// Metadata for an operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationMeta {
    pub name: String,
    pub description: String,
    pub options: OperationOptions,
}

/// Binary numeric operation on raw values
pub trait Operation: Send + Sync {
    fn meta(&self) -> OperationMeta;
    fn apply(&self, a: f64, b: f64) -> f64;
}

/// Operation backed by a closure, for registration at runtime
#[derive(Clone)]
pub struct FnOperation {
    name: String,
    description: String,
    options: OperationOptions,
    func: Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>,
}

impl FnOperation {
    pub fn new<F>(name: impl Into<String>, options: OperationOptions, func: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: String::new(),
            options,
            func: Arc::new(func),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Debug for FnOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOperation")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Operation for FnOperation {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: self.name.clone(),
            description: self.description.clone(),
            options: self.options,
        }
    }

    fn apply(&self, a: f64, b: f64) -> f64 {
        (self.func)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_operation() {
        let max = FnOperation::new("max", OperationOptions::UNIT_PRESERVING, f64::max)
            .with_description("Larger of two values");
        assert_eq!(max.apply(3.0, 5.0), 5.0);

        let meta = max.meta();
        assert_eq!(meta.name, "max");
        assert_eq!(meta.description, "Larger of two values");
        assert!(!meta.options.transformative);
    }

    #[test]
    fn test_options_serialize() {
        let json = serde_json::to_value(OperationOptions::MAGNITUDE_SCALING).unwrap();
        assert_eq!(json["transformative"], true);
        assert_eq!(json["magnitude"], true);
    }
}
