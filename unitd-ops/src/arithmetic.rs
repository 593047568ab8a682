//! Basic math operations

use crate::{Operation, OperationMeta, OperationOptions};

fn meta(name: &str, description: &str, options: OperationOptions) -> OperationMeta {
    OperationMeta {
        name: name.to_string(),
        description: description.to_string(),
        options,
    }
}

// ============ add ============

pub struct Add;

impl Operation for Add {
    fn meta(&self) -> OperationMeta {
        meta("add", "Sum of two comparable measures", OperationOptions::UNIT_PRESERVING)
    }

    fn apply(&self, a: f64, b: f64) -> f64 {
        a + b
    }
}

// ============ subtract ============

pub struct Subtract;

impl Operation for Subtract {
    fn meta(&self) -> OperationMeta {
        meta("subtract", "Difference of two comparable measures", OperationOptions::UNIT_PRESERVING)
    }

    fn apply(&self, a: f64, b: f64) -> f64 {
        a - b
    }
}

// ============ multiply ============

pub struct Multiply;

impl Operation for Multiply {
    fn meta(&self) -> OperationMeta {
        meta("multiply", "Product of a measure and a magnitude", OperationOptions::MAGNITUDE_SCALING)
    }

    fn apply(&self, a: f64, b: f64) -> f64 {
        a * b
    }
}

// ============ divide ============

pub struct Divide;

impl Operation for Divide {
    fn meta(&self) -> OperationMeta {
        meta("divide", "Quotient of a measure and a magnitude", OperationOptions::MAGNITUDE_SCALING)
    }

    fn apply(&self, a: f64, b: f64) -> f64 {
        a / b
    }
}
