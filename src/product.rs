use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub quantity: i64,
}

/// The mutable part of a product. `add` and `update` always take all four.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub quantity: i64,
}

impl Product {
    pub fn new(product_id: u64, fields: ProductFields) -> Self {
        Self {
            product_id,
            name: fields.name,
            price: fields.price,
            description: fields.description,
            quantity: fields.quantity,
        }
    }

    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.description = fields.description;
        self.quantity = fields.quantity;
    }

    /// Id compared as text, name compared case-insensitively.
    pub fn matches(&self, query: &str) -> bool {
        self.product_id.to_string() == query || self.name.to_lowercase() == query.to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Name,
}

impl SortKey {
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Name => a.name.cmp(&b.name),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "price" => Ok(SortKey::Price),
            "n" | "name" => Ok(SortKey::Name),
            other => Err(format!(
                "Unknown sort criterion '{}', expected 'price' or 'name'",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Price => f.write_str("price"),
            SortKey::Name => f.write_str("name"),
        }
    }
}
