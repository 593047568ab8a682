//! Operation Registry

use crate::arithmetic::{Add, Divide, Multiply, Subtract};
use crate::{Operation, OperationMeta};
use std::collections::HashMap;
use std::sync::Arc;
use unitd_core::{Result, UnitdError};

/// Named binary operations available to every measure
///
/// Names are unique. Registration order is kept for listing.
#[derive(Clone, Default)]
pub struct OperationRegistry {
    operations: HashMap<String, Arc<dyn Operation>>,
    order: Vec<String>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with add, subtract, multiply and divide
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register_standard_operations()
            .expect("standard operations have unique names");
        registry
    }

    pub fn register_standard_operations(&mut self) -> Result<()> {
        self.register(Add)?;
        self.register(Subtract)?;
        self.register(Multiply)?;
        self.register(Divide)?;
        Ok(())
    }

    pub fn register<O: Operation + 'static>(&mut self, op: O) -> Result<()> {
        self.register_arc(Arc::new(op))
    }

    pub fn register_arc(&mut self, op: Arc<dyn Operation>) -> Result<()> {
        let meta = op.meta();
        if self.operations.contains_key(&meta.name) {
            return Err(UnitdError::DuplicateOperation { name: meta.name });
        }
        tracing::debug!(
            name = %meta.name,
            transformative = meta.options.transformative,
            magnitude = meta.options.magnitude,
            "registered operation"
        );
        self.order.push(meta.name.clone());
        self.operations.insert(meta.name, op);
        Ok(())
    }

    /// Builder form of [`OperationRegistry::register`]
    pub fn with_operation<O: Operation + 'static>(mut self, op: O) -> Result<Self> {
        self.register(op)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Operation> {
        self.operations.get(name).map(|op| op.as_ref())
    }

    /// Like [`OperationRegistry::get`] but failing with `UnknownOperation`
    pub fn require(&self, name: &str) -> Result<&dyn Operation> {
        self.get(name).ok_or_else(|| UnitdError::UnknownOperation {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Operation names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Read-only view of every operation in registration order
    pub fn operations(&self) -> impl Iterator<Item = (&str, &dyn Operation)> {
        self.order
            .iter()
            .filter_map(|name| self.operations.get(name).map(|op| (name.as_str(), op.as_ref())))
    }

    pub fn list(&self) -> Vec<OperationMeta> {
        self.operations().map(|(_, op)| op.meta()).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("operations", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnOperation, OperationOptions};

    #[test]
    fn test_standard_operations() {
        let registry = OperationRegistry::standard();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["add", "subtract", "multiply", "divide"]
        );

        let ops: HashMap<&str, &dyn Operation> = registry.operations().collect();
        assert_eq!(ops["add"].apply(3.0, 5.0), 8.0);
        assert_eq!(ops["subtract"].apply(3.0, 5.0), -2.0);
        assert_eq!(ops["multiply"].apply(3.0, -2.0), -6.0);
        assert_eq!(ops["divide"].apply(3.0, 5.0), 0.6);
    }

    #[test]
    fn test_duplicate_operation() {
        let mut registry = OperationRegistry::standard();
        let err = registry.register(Add).unwrap_err();
        assert_eq!(err, UnitdError::DuplicateOperation { name: "add".to_string() });
        assert_eq!(err.to_string(), "Operation [add] is already registered");
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_runtime_registration() {
        let registry = OperationRegistry::standard()
            .with_operation(FnOperation::new("max", OperationOptions::UNIT_PRESERVING, f64::max))
            .unwrap();
        assert!(registry.contains("max"));
        assert_eq!(registry.require("max").unwrap().apply(2.0, 7.0), 7.0);
    }

    #[test]
    fn test_unknown_operation() {
        let registry = OperationRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("add").is_none());
        let err = match registry.require("modulo") {
            Err(err) => err,
            Ok(_) => panic!("modulo should not be registered"),
        };
        assert_eq!(err.code(), unitd_core::codes::UNKNOWN_OPERATION);
    }

    #[test]
    fn test_list_meta() {
        let list = OperationRegistry::standard().list();
        assert_eq!(list.len(), 4);
        assert_eq!(list[2].name, "multiply");
        assert!(list[2].options.transformative);
    }
}
