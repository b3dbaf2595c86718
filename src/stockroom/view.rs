//! Display ordering and paging over the plain lists the store returns.
//!
//! Nothing here mutates the store; these functions work on copies.

use crate::error::{InventoryError, Result};
use crate::model::Item;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Category,
    Supplier,
    Quantity,
    Price,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::Name,
        SortField::Category,
        SortField::Supplier,
        SortField::Quantity,
        SortField::Price,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::Supplier => "supplier",
            SortField::Quantity => "quantity",
            SortField::Price => "price",
        }
    }

    fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortField::Supplier => a.supplier.to_lowercase().cmp(&b.supplier.to_lowercase()),
            SortField::Quantity => a.quantity.cmp(&b.quantity),
            SortField::Price => a.price.total_cmp(&b.price),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == lower)
            .ok_or_else(|| {
                InventoryError::Api(format!(
                    "Unknown sort field: {} (expected one of id, name, category, supplier, quantity, price)",
                    s
                ))
            })
    }
}

/// Stable sort, so items that compare equal keep store order.
pub fn sort_items(items: &mut [Item], field: SortField) {
    items.sort_by(|a, b| field.compare(a, b));
}

/// One page of a listing. `number` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Item>,
    pub number: usize,
    pub pages: usize,
    pub total: usize,
}

/// Cuts `items` into pages of `page_size` (at least 1) and returns page
/// `number`, clamped into range. An empty list still has one (empty) page.
pub fn paginate(items: Vec<Item>, page_size: usize, number: usize) -> Page {
    let page_size = page_size.max(1);
    let total = items.len();
    let pages = total.div_ceil(page_size).max(1);
    let number = number.clamp(1, pages);

    let items = items
        .into_iter()
        .skip((number - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        number,
        pages,
        total,
    }
}
