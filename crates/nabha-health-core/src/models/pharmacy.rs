//! Pharmacy models.

use serde::{Deserialize, Serialize};

use crate::filter::{contains_ignore_case, FilterError, FilterResult, Filterable};

/// A medicine as stocked by one pharmacy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockEntry {
    /// Brand/strength name
    pub name: String,
    /// Generic name
    pub generic: String,
    /// In stock at this pharmacy
    pub available: bool,
    /// Price in rupees (0 when out of stock)
    pub price: u32,
}

impl StockEntry {
    /// True if the query is a case-insensitive substring of the name or generic name.
    pub fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query) || contains_ignore_case(&self.generic, query)
    }
}

/// A pharmacy with its current stock list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pharmacy {
    pub id: String,
    pub name: String,
    pub address: String,
    pub distance: String,
    pub phone: String,
    pub stock: Vec<StockEntry>,
}

impl Pharmacy {
    /// Stock entries matching a search query, in stock-list order.
    pub fn matching_stock(&self, query: &str) -> Vec<&StockEntry> {
        self.stock.iter().filter(|entry| entry.matches(query)).collect()
    }

    pub fn has_in_stock(&self, query: &str) -> bool {
        self.stock
            .iter()
            .any(|entry| entry.available && entry.matches(query))
    }
}

impl Filterable for Pharmacy {
    const KIND: &'static str = "pharmacy";
    const CATEGORICAL_FIELDS: &'static [&'static str] = &[];
    const TEXT_FIELDS: &'static [&'static str] = &["name", "address", "medicine", "generic"];

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self, _field: &str) -> Option<&'static str> {
        None
    }

    fn text_values(&self, field: &str) -> Vec<&str> {
        match field {
            "name" => vec![self.name.as_str()],
            "address" => vec![self.address.as_str()],
            "medicine" => self.stock.iter().map(|e| e.name.as_str()).collect(),
            "generic" => self.stock.iter().map(|e| e.generic.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    fn set_category(&mut self, field: &str, _value: &str) -> FilterResult<()> {
        Err(FilterError::UnknownField {
            kind: Self::KIND,
            field: field.to_string(),
        })
    }
}
