//! Warehouse registry.
//!
//! A [`Warehouse`] owns the products of one named warehouse together with its
//! price-change log. A [`WarehouseRegistry`] hands out warehouses by name and
//! is owned by the caller's application context: there is no global state.

pub mod registry;
pub mod warehouse;

pub use registry::{RegistryConfig, WarehouseRegistry};
pub use warehouse::Warehouse;
