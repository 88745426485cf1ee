use serde::{Deserialize, Serialize};

/// Products at or below this quantity (and above zero) are low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Any price range maximum at or above this value has no upper bound.
pub const UNBOUNDED_PRICE: f64 = 999_999.0;

/// Category name that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Stock availability derived from the in-stock flag and quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    /// In stock with only the given quantity left.
    LowStock(u32),
    InStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::OutOfStock => write!(f, "Out of stock"),
            StockStatus::LowStock(left) => write!(f, "Low stock ({} left)", left),
            StockStatus::InStock => write!(f, "In stock"),
        }
    }
}

/// Where a snapshot's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotOrigin {
    Source,
    Fallback,
}

impl std::fmt::Display for SnapshotOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotOrigin::Source => write!(f, "source"),
            SnapshotOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

impl std::str::FromStr for SnapshotOrigin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(SnapshotOrigin::Source),
            "fallback" => Ok(SnapshotOrigin::Fallback),
            _ => Err(format!("Invalid snapshot origin: {}", s)),
        }
    }
}
