//! Ticker payloads
//!
//! Book tickers carry the best bid/ask pair for one symbol; mini tickers
//! carry a rolling-window price summary. Both have batch forms that fan a
//! whole market segment out in a single push.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::parse_decimal;
use crate::error::TypeResult;

/// Best bid and ask for one symbol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicBookTicker {
    /// Best bid price as a decimal string
    pub bid_price: String,
    /// Quantity resting at the best bid
    pub bid_quantity: String,
    /// Best ask price as a decimal string
    pub ask_price: String,
    /// Quantity resting at the best ask
    pub ask_quantity: String,
}

impl PublicBookTicker {
    /// Best bid price parsed as a decimal
    pub fn bid_price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PublicBookTicker.bid_price", &self.bid_price)
    }

    /// Best ask price parsed as a decimal
    pub fn ask_price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PublicBookTicker.ask_price", &self.ask_price)
    }

    /// Quantity at the best bid parsed as a decimal
    pub fn bid_quantity_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PublicBookTicker.bid_quantity", &self.bid_quantity)
    }

    /// Quantity at the best ask parsed as a decimal
    pub fn ask_quantity_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PublicBookTicker.ask_quantity", &self.ask_quantity)
    }
}

/// Best bid and ask on the conflated stream
///
/// Wire-identical to [`PublicBookTicker`]; the envelope kind distinguishes
/// the two streams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedBookTicker {
    /// Best bid price as a decimal string
    pub bid_price: String,
    /// Quantity resting at the best bid
    pub bid_quantity: String,
    /// Best ask price as a decimal string
    pub ask_price: String,
    /// Quantity resting at the best ask
    pub ask_quantity: String,
}

impl AggregatedBookTicker {
    /// Best bid price parsed as a decimal
    pub fn bid_price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("AggregatedBookTicker.bid_price", &self.bid_price)
    }

    /// Best ask price parsed as a decimal
    pub fn ask_price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("AggregatedBookTicker.ask_price", &self.ask_price)
    }
}

/// Book tickers for several symbols in one push
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicBookTickerBatch {
    /// Per-symbol book tickers in feed order
    pub items: Vec<PublicBookTicker>,
}

/// Rolling-window price summary for one symbol
///
/// Rates are fractional changes over the window; the zoned variants apply
/// the venue's display timezone to the window boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMiniTicker {
    /// Symbol the summary describes
    pub symbol: String,
    /// Last trade price as a decimal string
    pub price: String,
    /// Price change rate over the UTC window
    pub rate: String,
    /// Price change rate over the zoned window
    pub zoned_rate: String,
    /// Window high as a decimal string
    pub high: String,
    /// Window low as a decimal string
    pub low: String,
    /// Quote volume over the window
    pub volume: String,
    /// Base quantity over the window
    pub quantity: String,
    /// Previous close change rate over the UTC window
    pub last_close_rate: String,
    /// Previous close change rate over the zoned window
    pub last_close_zoned_rate: String,
    /// Previous close window high
    pub last_close_high: String,
    /// Previous close window low
    pub last_close_low: String,
}

impl PublicMiniTicker {
    /// Last trade price parsed as a decimal
    pub fn price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PublicMiniTicker.price", &self.price)
    }
}

/// Mini tickers for several symbols in one push
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMiniTickers {
    /// Per-symbol summaries in feed order
    pub items: Vec<PublicMiniTicker>,
}
