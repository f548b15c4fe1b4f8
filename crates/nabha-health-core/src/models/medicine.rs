//! Medicine lookup models.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterError, FilterResult, Filterable};

/// Stock availability tag used by the availability filter.
pub const AVAILABLE: &str = "available";
pub const OUT_OF_STOCK: &str = "out_of_stock";

/// A medicine offered by a nearby pharmacy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Identifier, unique within the collection
    pub id: String,
    /// Brand/strength name (e.g., "Paracetamol 500mg")
    pub name: String,
    /// Generic name (e.g., "Paracetamol")
    pub generic_name: String,
    /// Pack description (e.g., "10 tablets")
    pub dosage: String,
    /// Price in rupees
    pub price: u32,
    /// Whether the pharmacy has it in stock
    pub available: bool,
    /// Pharmacy carrying the medicine
    pub pharmacy: String,
    /// Display distance to the pharmacy (e.g., "0.5 km")
    pub distance: String,
}

impl Medicine {
    /// Create an in-stock medicine with required fields.
    pub fn new(id: String, name: String, generic_name: String) -> Self {
        Self {
            id,
            name,
            generic_name,
            dosage: String::new(),
            price: 0,
            available: true,
            pharmacy: String::new(),
            distance: String::new(),
        }
    }

    pub fn availability(&self) -> &'static str {
        if self.available {
            AVAILABLE
        } else {
            OUT_OF_STOCK
        }
    }

    /// Locale key for the availability badge.
    pub fn availability_label_key(&self) -> &'static str {
        if self.available {
            "pharmacy.available"
        } else {
            "pharmacy.outOfStock"
        }
    }
}

impl Filterable for Medicine {
    const KIND: &'static str = "medicine";
    const CATEGORICAL_FIELDS: &'static [&'static str] = &["availability"];
    const TEXT_FIELDS: &'static [&'static str] = &["name", "generic_name", "pharmacy"];

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self, field: &str) -> Option<&'static str> {
        match field {
            "availability" => Some(self.availability()),
            _ => None,
        }
    }

    fn text_values(&self, field: &str) -> Vec<&str> {
        match field {
            "name" => vec![self.name.as_str()],
            "generic_name" => vec![self.generic_name.as_str()],
            "pharmacy" => vec![self.pharmacy.as_str()],
            _ => Vec::new(),
        }
    }

    fn set_category(&mut self, field: &str, value: &str) -> FilterResult<()> {
        if field != "availability" {
            return Err(FilterError::UnknownField {
                kind: Self::KIND,
                field: field.to_string(),
            });
        }
        self.available = match value {
            AVAILABLE => true,
            OUT_OF_STOCK => false,
            _ => {
                return Err(FilterError::InvalidValue {
                    kind: Self::KIND,
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
        };
        Ok(())
    }
}
