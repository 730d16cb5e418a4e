//! Candlestick payload

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::parse_decimal;
use crate::error::TypeResult;

/// One candle of a spot kline stream
///
/// `interval` is the venue's interval code (for example `Min1` or `Day1`);
/// window bounds are epoch seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicSpotKline {
    /// Venue interval code
    pub interval: String,
    /// Window open time in epoch seconds
    pub window_start: i64,
    /// Opening price as a decimal string
    pub opening_price: String,
    /// Closing price as a decimal string
    pub closing_price: String,
    /// Window high as a decimal string
    pub highest_price: String,
    /// Window low as a decimal string
    pub lowest_price: String,
    /// Base volume over the window
    pub volume: String,
    /// Quote amount over the window
    pub amount: String,
    /// Window close time in epoch seconds
    pub window_end: i64,
}

impl PublicSpotKline {
    /// Opening price parsed as a decimal
    pub fn opening_price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PublicSpotKline.opening_price", &self.opening_price)
    }

    /// Closing price parsed as a decimal
    pub fn closing_price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PublicSpotKline.closing_price", &self.closing_price)
    }

    /// Window high parsed as a decimal
    pub fn highest_price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PublicSpotKline.highest_price", &self.highest_price)
    }

    /// Window low parsed as a decimal
    pub fn lowest_price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PublicSpotKline.lowest_price", &self.lowest_price)
    }

    /// Base volume parsed as a decimal
    pub fn volume_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PublicSpotKline.volume", &self.volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kline_window_and_prices() {
        let candle = PublicSpotKline {
            interval: "Min1".to_string(),
            window_start: 1700000000,
            opening_price: "64990".to_string(),
            closing_price: "65000.1".to_string(),
            highest_price: "65010.5".to_string(),
            lowest_price: "64980".to_string(),
            volume: "12.5".to_string(),
            amount: "812375".to_string(),
            window_end: 1700000060,
        };

        assert_eq!(candle.window_end - candle.window_start, 60);
        let high = candle.highest_price_decimal().unwrap();
        let low = candle.lowest_price_decimal().unwrap();
        assert!(high > low);
    }
}
