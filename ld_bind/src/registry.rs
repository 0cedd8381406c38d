//! Type resolution: (capability, type name) to constructor.
//!
//! The table is filled before use and then only read. [`Registry::builtin`]
//! hands out a shared `&'static` reference to the ActivityStreams table, so
//! nothing can register into it after initialization.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::record::Record;
use crate::schema::{Capability, TypeSchema};

/// Builds empty records of one concrete type.
#[derive(Debug, Clone, Copy)]
pub struct Constructor {
    schema: &'static TypeSchema,
}

impl Constructor {
    pub fn schema(&self) -> &'static TypeSchema {
        self.schema
    }

    pub fn construct(&self) -> Record {
        Record::new(self.schema)
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    table: HashMap<Capability, HashMap<&'static str, Constructor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(types: &[&'static TypeSchema]) -> Self {
        let mut registry = Registry::new();
        for schema in types {
            registry.register(*schema);
        }
        registry
    }

    /// Register `schema` under every capability it declares. A later
    /// registration of the same name replaces the earlier one.
    pub fn register(&mut self, schema: &'static TypeSchema) -> &mut Self {
        for capability in schema.capabilities {
            self.table
                .entry(*capability)
                .or_default()
                .insert(schema.name, Constructor { schema });
        }
        self
    }

    pub fn resolve(&self, capability: Capability, name: &str) -> Option<Constructor> {
        self.table.get(&capability)?.get(name).copied()
    }

    /// Capabilities `name` is registered under, in declaration order of
    /// [`Capability`].
    pub fn capabilities_of(&self, name: &str) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.resolve(*capability, name).is_some())
            .collect()
    }

    /// Number of distinct registered type names.
    pub fn len(&self) -> usize {
        let mut names: Vec<&str> = self
            .table
            .values()
            .flat_map(|by_name| by_name.keys().copied())
            .collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.values().all(HashMap::is_empty)
    }

    /// The ActivityStreams catalog, built on first use.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let registry = Registry::with_types(crate::vocab::ALL);
            tracing::debug!(types = registry.len(), "built the ActivityStreams type registry");
            registry
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab;

    #[test]
    fn resolves_by_capability_and_name() {
        let registry = Registry::builtin();
        let note = registry.resolve(Capability::Object, "Note").unwrap();
        assert_eq!(note.schema().name, "Note");
        assert_eq!(note.construct().schema().name, "Note");
    }

    #[test]
    fn missing_match_is_none() {
        let registry = Registry::builtin();
        assert!(registry.resolve(Capability::Link, "Note").is_none());
        assert!(registry.resolve(Capability::Object, "Mention").is_none());
        assert!(registry.resolve(Capability::Object, "Unheard").is_none());
    }

    #[test]
    fn narrower_capabilities() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.capabilities_of("Image"),
            vec![Capability::Object, Capability::Image]
        );
        assert_eq!(
            registry.capabilities_of("OrderedCollectionPage"),
            vec![
                Capability::Object,
                Capability::Collection,
                Capability::CollectionPage,
                Capability::OrderedCollection,
            ]
        );
        assert_eq!(registry.capabilities_of("Mention"), vec![Capability::Link]);
    }

    #[test]
    fn builtin_covers_catalog() {
        assert_eq!(Registry::builtin().len(), vocab::ALL.len());
        assert!(std::ptr::eq(Registry::builtin(), Registry::builtin()));
    }

    #[test]
    fn custom_registry() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        registry.register(&vocab::NOTE);
        assert_eq!(registry.len(), 1);
        assert!(registry.resolve(Capability::Object, "Note").is_some());
        assert!(registry.resolve(Capability::Object, "Add").is_none());
    }
}
