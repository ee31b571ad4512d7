//! Products of a single named warehouse plus its price-change log.

use std::collections::BTreeMap;

use tracing::debug;

use warehouse_core::{DomainError, DomainResult, ProductId};
use warehouse_products::{AddProduct, BigDecimal, Category, ProductRecord};

/// In-memory product store for one warehouse.
///
/// `products` keeps insertion order and holds at most one record per id.
/// `changed_products` is an append-only log of every record produced by a
/// price update; only [`Warehouse::clear_products`] empties it.
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    name: String,
    products: Vec<ProductRecord>,
    changed_products: Vec<ProductRecord>,
}

impl Warehouse {
    /// Create an empty warehouse.
    ///
    /// Applications normally obtain warehouses through
    /// [`crate::WarehouseRegistry::get`] so that each name maps to one instance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
            changed_products: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Add a new product and return it.
    ///
    /// Uniqueness is checked on the id only; a record whose id is already
    /// stored is rejected even if every other field differs. Use
    /// [`Warehouse::update_product_price`] to change an existing product.
    pub fn add_product(&mut self, cmd: AddProduct) -> DomainResult<ProductRecord> {
        let record = cmd.into_record()?;

        if self.products.contains(&record) {
            return Err(DomainError::conflict(format!(
                "product {} already exists, update it instead",
                record.id_typed()
            )));
        }

        debug!(
            warehouse = %self.name,
            product_id = %record.id_typed(),
            category = %record.category(),
            price = %record.price(),
            "product added"
        );
        self.products.push(record.clone());
        Ok(record)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    /// Replace the price of an existing product and record the change.
    ///
    /// The replacement is appended at the end of the product list, so the
    /// updated product moves behind every other product. It is also appended
    /// to the change log.
    pub fn update_product_price(
        &mut self,
        id: ProductId,
        new_price: BigDecimal,
    ) -> DomainResult<ProductRecord> {
        let position = self
            .products
            .iter()
            .position(|p| p.id_typed() == id)
            .ok_or_else(|| DomainError::product_not_found(id))?;

        let previous = self.products.remove(position);
        let updated = previous.with_price(new_price);

        debug!(
            warehouse = %self.name,
            product_id = %id,
            old_price = %previous.price(),
            new_price = %updated.price(),
            "product price changed"
        );
        self.products.push(updated.clone());
        self.changed_products.push(updated.clone());
        Ok(updated)
    }

    /// Price-update snapshots in the order the updates happened.
    pub fn changed_products(&self) -> &[ProductRecord] {
        &self.changed_products
    }

    /// Products keyed by category. Categories without products are absent.
    pub fn products_grouped_by_category(&self) -> BTreeMap<Category, Vec<&ProductRecord>> {
        let mut groups: BTreeMap<Category, Vec<&ProductRecord>> = BTreeMap::new();
        for product in &self.products {
            groups.entry(product.category()).or_default().push(product);
        }
        groups
    }

    pub fn products_by(&self, category: Category) -> Vec<&ProductRecord> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    /// Remove every product and the whole change log.
    pub fn clear_products(&mut self) {
        debug!(
            warehouse = %self.name,
            products = self.products.len(),
            changes = self.changed_products.len(),
            "warehouse cleared"
        );
        self.products.clear();
        self.changed_products.clear();
    }
}
