//! Products domain module.
//!
//! Product records and their categories, implemented as deterministic domain
//! values (no IO, no storage). Collections of products live in
//! `warehouse-registry`.

pub mod category;
pub mod record;

pub use bigdecimal::BigDecimal;
pub use category::Category;
pub use record::{AddProduct, ProductRecord};
