//! Field registry
//!
//! Ordered mapping from [`FieldId`] to [`FieldDescriptor`] backing the field
//! list. Identifiers are handed out in increasing order and never reused, so
//! key order is insertion order.

use std::collections::BTreeMap;

use console_core::{FieldDescriptor, FieldId};

/// In-memory set of fields for the entity being defined
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRegistry {
    fields: BTreeMap<FieldId, FieldDescriptor>,
    next_id: FieldId,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
            next_id: FieldId::FIRST,
        }
    }
}

impl FieldRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a descriptor under a fresh identifier
    pub fn insert(&mut self, field: FieldDescriptor) -> FieldId {
        let id = self.next_id;
        self.next_id = id.next();
        self.fields.insert(id, field);
        id
    }

    /// Remove a field; absent keys are ignored
    pub fn remove(&mut self, id: FieldId) -> Option<FieldDescriptor> {
        self.fields.remove(&id)
    }

    /// Look up a field
    pub fn get(&self, id: FieldId) -> Option<&FieldDescriptor> {
        self.fields.get(&id)
    }

    /// Whether the identifier is currently present
    pub fn contains(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are defined
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Identifier the next insert will receive
    pub fn next_id(&self) -> FieldId {
        self.next_id
    }

    /// Identifiers and descriptors in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (FieldId, &FieldDescriptor)> {
        self.fields.iter().map(|(id, field)| (*id, field))
    }

    /// Descriptors in insertion order
    pub fn list_fields(&self) -> Vec<FieldDescriptor> {
        self.fields.values().cloned().collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ids_start_at_one() {
        let mut registry = FieldRegistry::new();
        assert_eq!(registry.next_id(), FieldId::new(1));

        let id = registry.insert(FieldDescriptor::new("age", "int").indexed());
        assert_eq!(id, FieldId::new(1));
        assert_eq!(registry.get(id).unwrap().label(), "age (int, indexed)");
    }

    #[test]
    fn test_ids_never_reused() {
        let mut registry = FieldRegistry::new();
        let first = registry.insert(FieldDescriptor::new("a", "int"));
        let second = registry.insert(FieldDescriptor::new("b", "int"));
        registry.remove(second);
        registry.remove(first);

        let third = registry.insert(FieldDescriptor::new("c", "int"));
        assert!(third > second);
        assert_eq!(third, FieldId::new(3));
    }

    #[test]
    fn test_order_survives_removal() {
        let mut registry = FieldRegistry::new();
        let fields: Vec<_> = ["a", "b", "c", "d"]
            .iter()
            .map(|name| FieldDescriptor::new(*name, "string"))
            .collect();
        let ids: Vec<_> = fields.iter().map(|f| registry.insert(f.clone())).collect();

        let removed = registry.remove(ids[1]);
        assert_eq!(removed.as_ref(), Some(&fields[1]));
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.list_fields(),
            vec![fields[0].clone(), fields[2].clone(), fields[3].clone()]
        );
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut registry = FieldRegistry::new();
        registry.insert(FieldDescriptor::new("a", "int"));

        assert_eq!(registry.remove(FieldId::new(42)), None);
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains(FieldId::new(42)));
    }

    #[test]
    fn test_entries() {
        let mut registry = FieldRegistry::new();
        registry.insert(FieldDescriptor::new("a", "int"));
        registry.insert(FieldDescriptor::new("b", "long").pk());

        let labels: Vec<_> = registry
            .entries()
            .map(|(id, f)| format!("{}={}", id, f.label()))
            .collect();
        assert_eq!(labels, vec!["1=a (int)", "2=b (long, pk)"]);
    }
}
