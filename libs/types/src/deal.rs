//! Trade print payloads
//!
//! A deal is one matched trade on the book. Public deal batches fan out to
//! every subscriber of a symbol; a private deal is one of the caller's own
//! fills, tagged with fee and order linkage. The aggregated variant carries
//! the same prints on the conflated (interval-sampled) stream.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::parse_decimal;
use crate::enums::TradeSide;
use crate::error::{TypeError, TypeResult};

/// One matched trade
///
/// Prices and quantities arrive as decimal strings to preserve venue
/// precision. `trade_type` is the raw aggressor-side discriminant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// Execution price as a decimal string
    pub price: String,
    /// Executed base quantity as a decimal string
    pub quantity: String,
    /// Aggressor side discriminant (1 = buy, 2 = sell)
    pub trade_type: i32,
    /// Execution time in epoch milliseconds
    pub time: i64,
}

impl Deal {
    /// Execution price parsed as a decimal
    pub fn price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("Deal.price", &self.price)
    }

    /// Executed quantity parsed as a decimal
    pub fn quantity_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("Deal.quantity", &self.quantity)
    }

    /// Aggressor side as a typed enum
    pub fn side(&self) -> TypeResult<TradeSide> {
        TradeSide::try_from(self.trade_type)
            .map_err(|_| TypeError::unknown_discriminant("TradeSide", self.trade_type))
    }
}

/// Real-time trade prints for one symbol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicDeals {
    /// Trades in execution order
    pub deals: Vec<Deal>,
    /// Originating event name on the feed
    pub event_type: String,
}

/// Trade prints on the conflated stream
///
/// Wire-identical to [`PublicDeals`]; the envelope kind distinguishes the
/// two streams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedDeals {
    /// Trades in execution order
    pub deals: Vec<Deal>,
    /// Originating event name on the feed
    pub event_type: String,
}

/// One of the caller's own fills
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateDeals {
    /// Execution price as a decimal string
    pub price: String,
    /// Executed base quantity as a decimal string
    pub quantity: String,
    /// Executed quote amount as a decimal string
    pub amount: String,
    /// Aggressor side discriminant (1 = buy, 2 = sell)
    pub trade_type: i32,
    /// True when the caller's order was the resting side
    pub is_maker: bool,
    /// True when both sides of the fill belong to the caller
    pub is_self_trade: bool,
    /// Venue-assigned trade identifier
    pub trade_id: String,
    /// Client order identifier supplied at placement, if any
    pub client_order_id: String,
    /// Venue order identifier the fill executed against
    pub order_id: String,
    /// Fee charged for the fill as a decimal string
    pub fee_amount: String,
    /// Currency the fee was charged in
    pub fee_currency: String,
    /// Execution time in epoch milliseconds
    pub time: i64,
}

impl PrivateDeals {
    /// Execution price parsed as a decimal
    pub fn price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PrivateDeals.price", &self.price)
    }

    /// Executed quantity parsed as a decimal
    pub fn quantity_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PrivateDeals.quantity", &self.quantity)
    }

    /// Executed quote amount parsed as a decimal
    pub fn amount_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PrivateDeals.amount", &self.amount)
    }

    /// Fee amount parsed as a decimal
    pub fn fee_amount_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PrivateDeals.fee_amount", &self.fee_amount)
    }

    /// Aggressor side as a typed enum
    pub fn side(&self) -> TypeResult<TradeSide> {
        TradeSide::try_from(self.trade_type)
            .map_err(|_| TypeError::unknown_discriminant("TradeSide", self.trade_type))
    }
}
