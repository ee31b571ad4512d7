//! Named warehouse instances.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, info};

use crate::warehouse::Warehouse;

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Name used by [`WarehouseRegistry::get_default`].
    pub default_name: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_name: "Default".to_string(),
        }
    }
}

impl RegistryConfig {
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }
}

/// One [`Warehouse`] per name.
///
/// Built once by the application and passed to whoever needs warehouses.
/// A name is "absent" until first requested and "present" from then on; there
/// is no way to remove a present warehouse, only to empty it.
///
/// Retrieval resets: every [`WarehouseRegistry::get`] of a name that is
/// already present clears that warehouse (products and change log) before
/// returning it. Callers relying on state across retrievals must keep the
/// returned reference instead of fetching again.
#[derive(Debug, Default)]
pub struct WarehouseRegistry {
    config: RegistryConfig,
    instances: HashMap<String, Warehouse>,
}

impl WarehouseRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            instances: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Return the warehouse called `name`, creating it on first access and
    /// clearing it on every later access.
    pub fn get(&mut self, name: &str) -> &mut Warehouse {
        match self.instances.entry(name.to_string()) {
            Entry::Occupied(entry) => {
                debug!(warehouse = name, "warehouse reset on retrieval");
                let warehouse = entry.into_mut();
                warehouse.clear_products();
                warehouse
            }
            Entry::Vacant(entry) => {
                info!(warehouse = name, "warehouse created");
                entry.insert(Warehouse::new(name))
            }
        }
    }

    /// Same as [`WarehouseRegistry::get`] with the configured default name.
    pub fn get_default(&mut self) -> &mut Warehouse {
        let name = self.config.default_name.clone();
        self.get(&name)
    }

    /// Whether `name` has ever been requested. Never resets anything.
    pub fn contains(&self, name: &str) -> bool {
        self.instances.contains_key(name)
    }

    /// Names of all present warehouses, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.instances.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_products::{AddProduct, BigDecimal, Category};

    fn stock(warehouse: &mut Warehouse) {
        let added = warehouse
            .add_product(AddProduct::new("Widget", Category::Tools))
            .unwrap();
        warehouse
            .update_product_price(added.id_typed(), BigDecimal::from(5))
            .unwrap();
    }

    #[test]
    fn first_get_creates_empty_warehouse() {
        let mut registry = WarehouseRegistry::new();
        assert!(!registry.contains("North"));

        let warehouse = registry.get("North");
        assert_eq!(warehouse.name(), "North");
        assert!(warehouse.is_empty());
        assert!(registry.contains("North"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn repeated_get_resets_products_and_change_log() {
        let mut registry = WarehouseRegistry::new();
        stock(registry.get("North"));
        assert!(!registry.instances["North"].is_empty());

        let again = registry.get("North");
        assert!(again.is_empty());
        assert!(again.changed_products().is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn kept_reference_retains_state() {
        let mut registry = WarehouseRegistry::new();
        let warehouse = registry.get("North");
        stock(warehouse);
        stock(warehouse);

        assert_eq!(warehouse.products().len(), 2);
        assert_eq!(warehouse.changed_products().len(), 2);
    }

    #[test]
    fn names_are_independent() {
        let mut registry = WarehouseRegistry::new();
        stock(registry.get("North"));
        registry.get("South");

        assert!(!registry.instances["North"].is_empty());
        assert!(registry.instances["South"].is_empty());
        assert_eq!(registry.names(), vec!["North", "South"]);
    }

    #[test]
    fn get_default_uses_default_name() {
        let mut registry = WarehouseRegistry::new();
        assert_eq!(registry.get_default().name(), "Default");
        assert!(registry.contains("Default"));

        stock(registry.get("Default"));
        assert!(registry.get_default().is_empty());
    }

    #[test]
    fn configured_default_name_is_honoured() {
        let config = RegistryConfig::default().with_default_name("Central");
        let mut registry = WarehouseRegistry::with_config(config);

        assert_eq!(registry.get_default().name(), "Central");
        assert_eq!(registry.config().default_name, "Central");
        assert!(!registry.contains("Default"));
    }

    #[test]
    fn contains_does_not_reset() {
        let mut registry = WarehouseRegistry::new();
        stock(registry.get("North"));

        assert!(registry.contains("North"));
        assert!(!registry.instances["North"].is_empty());
    }
}
