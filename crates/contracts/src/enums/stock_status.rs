use serde::{Deserialize, Serialize};

/// Stock level of a medicine at a pharmacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Wire code, matches the serde representation.
    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }

    /// Human-readable label for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::LowStock => "Low stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "in_stock" => Some(StockStatus::InStock),
            "low_stock" => Some(StockStatus::LowStock),
            "out_of_stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }
}
