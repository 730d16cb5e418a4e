//! Order book depth payloads
//!
//! Three depth families share the same price-level shape: incremental
//! updates (deltas against a versioned book), limit snapshots (top N
//! levels), and the conflated aggregate stream (deltas spanning a version
//! range). Level order is meaningful and preserved exactly as sent: asks
//! ascend from the best offer, bids descend from the best bid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::parse_decimal;
use crate::error::TypeResult;

/// One price level of the book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    /// Level price as a decimal string
    pub price: String,
    /// Resting quantity as a decimal string; zero removes the level
    pub quantity: String,
}

impl DepthLevel {
    /// Level price parsed as a decimal
    pub fn price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("DepthLevel.price", &self.price)
    }

    /// Resting quantity parsed as a decimal
    pub fn quantity_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("DepthLevel.quantity", &self.quantity)
    }
}

/// Incremental depth update against a versioned book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIncreaseDepths {
    /// Changed ask levels, best offer first
    pub asks: Vec<DepthLevel>,
    /// Changed bid levels, best bid first
    pub bids: Vec<DepthLevel>,
    /// Originating event name on the feed
    pub event_type: String,
    /// Book version this update advances to
    pub version: String,
}

/// Snapshot of the top of the book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicLimitDepths {
    /// Top ask levels, best offer first
    pub asks: Vec<DepthLevel>,
    /// Top bid levels, best bid first
    pub bids: Vec<DepthLevel>,
    /// Originating event name on the feed
    pub event_type: String,
    /// Book version the snapshot was taken at
    pub version: String,
}

/// Batch of incremental depth updates delivered in one push
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIncreaseDepthsBatch {
    /// Updates in version order
    pub items: Vec<PublicIncreaseDepths>,
    /// Originating event name on the feed
    pub event_type: String,
}

/// Conflated depth update spanning a version range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedDepths {
    /// Changed ask levels, best offer first
    pub asks: Vec<DepthLevel>,
    /// Changed bid levels, best bid first
    pub bids: Vec<DepthLevel>,
    /// Originating event name on the feed
    pub event_type: String,
    /// First book version folded into this update
    pub from_version: String,
    /// Last book version folded into this update
    pub to_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_level_accessors() {
        let level = DepthLevel {
            price: "64999.9".to_string(),
            quantity: "1.5".to_string(),
        };

        assert_eq!(level.price_decimal().unwrap().to_string(), "64999.9");
        assert_eq!(level.quantity_decimal().unwrap().to_string(), "1.5");
    }

    #[test]
    fn test_zero_quantity_is_removal() {
        let removal = DepthLevel {
            price: "65000".to_string(),
            quantity: "0".to_string(),
        };

        assert!(removal.quantity_decimal().unwrap().is_zero());
    }
}
