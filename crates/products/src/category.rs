use core::str::FromStr;

use serde::{Deserialize, Serialize};

use warehouse_core::{DomainError, ValueObject};

/// Closed set of product categories.
///
/// Ordering follows declaration order; grouped views are keyed in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Electronics,
    Grocery,
    Clothing,
    Tools,
    Furniture,
    Toys,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Grocery,
        Category::Clothing,
        Category::Tools,
        Category::Furniture,
        Category::Toys,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "ELECTRONICS",
            Category::Grocery => "GROCERY",
            Category::Clothing => "CLOTHING",
            Category::Tools => "TOOLS",
            Category::Furniture => "FURNITURE",
            Category::Toys => "TOYS",
        }
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s}")))
    }
}
