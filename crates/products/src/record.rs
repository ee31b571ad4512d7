use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use warehouse_core::{DomainError, DomainResult, Entity, ProductId};

use crate::category::Category;

/// Immutable product value.
///
/// Identity is the `id` alone: two records with the same id compare equal and
/// hash identically even when name, category or price differ. To "change" a
/// record, build a new one with the same id (see [`ProductRecord::with_price`]).
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    category: Category,
    price: BigDecimal,
}

impl ProductRecord {
    /// Build a record, generating an id when none is given and defaulting the
    /// price to zero.
    pub fn new(
        id: Option<ProductId>,
        name: impl Into<String>,
        category: Category,
        price: Option<BigDecimal>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        Ok(Self {
            id: id.unwrap_or_else(ProductId::new),
            name,
            category,
            price: price.unwrap_or_default(),
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> &BigDecimal {
        &self.price
    }

    /// Same product (id, name, category) at a different price.
    pub fn with_price(&self, price: BigDecimal) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            category: self.category,
            price,
        }
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for ProductRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ProductRecord {}

impl core::hash::Hash for ProductRecord {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Command: add a product to a warehouse.
///
/// Every field but `name` may be missing. A missing id is generated and a
/// missing price becomes zero; a missing category or empty name is rejected
/// by the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProduct {
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    pub category: Option<Category>,
    pub price: Option<BigDecimal>,
}

impl AddProduct {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: Some(category),
            price: None,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_price(mut self, price: BigDecimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Validate the command and build the record it describes.
    pub fn into_record(self) -> DomainResult<ProductRecord> {
        if self.name.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        let category = self
            .category
            .ok_or_else(|| DomainError::validation("category cannot be missing"))?;

        ProductRecord::new(self.id, self.name, category, self.price)
    }
}
