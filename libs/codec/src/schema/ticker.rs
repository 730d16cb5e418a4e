//! Wire tables for ticker payloads
//!
//! Book tickers are four-string quotes; mini tickers are twelve-string
//! rolling summaries. The batch forms repeat the singular message under
//! field 1.

use types::{
    AggregatedBookTicker, PublicBookTicker, PublicBookTickerBatch, PublicMiniTicker,
    PublicMiniTickers,
};

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::ProtocolResult;
use crate::message::{decode_nested, encode_repeated, WireMessage};
use crate::scalar::{decode_string, encode_string};
use crate::tag::FieldTag;

impl WireMessage for PublicBookTicker {
    const NAME: &'static str = "PublicBookTicker";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.bid_price = decode_string(tag, cursor)?,
            2 => self.bid_quantity = decode_string(tag, cursor)?,
            3 => self.ask_price = decode_string(tag, cursor)?,
            4 => self.ask_quantity = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_string(writer, 1, &self.bid_price);
        encode_string(writer, 2, &self.bid_quantity);
        encode_string(writer, 3, &self.ask_price);
        encode_string(writer, 4, &self.ask_quantity);
    }
}

impl WireMessage for AggregatedBookTicker {
    const NAME: &'static str = "AggregatedBookTicker";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.bid_price = decode_string(tag, cursor)?,
            2 => self.bid_quantity = decode_string(tag, cursor)?,
            3 => self.ask_price = decode_string(tag, cursor)?,
            4 => self.ask_quantity = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_string(writer, 1, &self.bid_price);
        encode_string(writer, 2, &self.bid_quantity);
        encode_string(writer, 3, &self.ask_price);
        encode_string(writer, 4, &self.ask_quantity);
    }
}

impl WireMessage for PublicBookTickerBatch {
    const NAME: &'static str = "PublicBookTickerBatch";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.items.push(decode_nested(tag, cursor)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_repeated(writer, 1, &self.items);
    }
}

impl WireMessage for PublicMiniTicker {
    const NAME: &'static str = "PublicMiniTicker";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.symbol = decode_string(tag, cursor)?,
            2 => self.price = decode_string(tag, cursor)?,
            3 => self.rate = decode_string(tag, cursor)?,
            4 => self.zoned_rate = decode_string(tag, cursor)?,
            5 => self.high = decode_string(tag, cursor)?,
            6 => self.low = decode_string(tag, cursor)?,
            7 => self.volume = decode_string(tag, cursor)?,
            8 => self.quantity = decode_string(tag, cursor)?,
            9 => self.last_close_rate = decode_string(tag, cursor)?,
            10 => self.last_close_zoned_rate = decode_string(tag, cursor)?,
            11 => self.last_close_high = decode_string(tag, cursor)?,
            12 => self.last_close_low = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_string(writer, 1, &self.symbol);
        encode_string(writer, 2, &self.price);
        encode_string(writer, 3, &self.rate);
        encode_string(writer, 4, &self.zoned_rate);
        encode_string(writer, 5, &self.high);
        encode_string(writer, 6, &self.low);
        encode_string(writer, 7, &self.volume);
        encode_string(writer, 8, &self.quantity);
        encode_string(writer, 9, &self.last_close_rate);
        encode_string(writer, 10, &self.last_close_zoned_rate);
        encode_string(writer, 11, &self.last_close_high);
        encode_string(writer, 12, &self.last_close_low);
    }
}

impl WireMessage for PublicMiniTickers {
    const NAME: &'static str = "PublicMiniTickers";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.items.push(decode_nested(tag, cursor)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_repeated(writer, 1, &self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{decode_from_slice, encode_to_vec};

    fn sample_book_ticker() -> PublicBookTicker {
        PublicBookTicker {
            bid_price: "64999.9".to_string(),
            bid_quantity: "0.8".to_string(),
            ask_price: "65000.1".to_string(),
            ask_quantity: "1.2".to_string(),
        }
    }

    #[test]
    fn test_book_ticker_roundtrip() {
        let ticker = sample_book_ticker();
        let back: PublicBookTicker = decode_from_slice(&encode_to_vec(&ticker)).unwrap();
        assert_eq!(back, ticker);
    }

    #[test]
    fn test_book_ticker_batch_preserves_feed_order() {
        let batch = PublicBookTickerBatch {
            items: vec![
                sample_book_ticker(),
                PublicBookTicker {
                    bid_price: "3200.5".to_string(),
                    ask_price: "3200.7".to_string(),
                    ..PublicBookTicker::default()
                },
            ],
        };

        let back: PublicBookTickerBatch = decode_from_slice(&encode_to_vec(&batch)).unwrap();
        assert_eq!(back, batch);
        assert_eq!(back.items[0].bid_price, "64999.9");
        assert_eq!(back.items[1].bid_price, "3200.5");
    }

    #[test]
    fn test_mini_ticker_partial_fields() {
        // Real mini ticker pushes often omit the last-close block; those
        // fields decode as empty strings and re-encode as nothing
        let ticker = PublicMiniTicker {
            symbol: "BTCUSDT".to_string(),
            price: "65000.1".to_string(),
            rate: "0.012".to_string(),
            high: "65500".to_string(),
            low: "64000".to_string(),
            volume: "812375".to_string(),
            ..PublicMiniTicker::default()
        };

        let bytes = encode_to_vec(&ticker);
        let back: PublicMiniTicker = decode_from_slice(&bytes).unwrap();
        assert_eq!(back, ticker);
        assert!(back.last_close_rate.is_empty());

        // Re-encoding is byte-identical
        assert_eq!(encode_to_vec(&back), bytes);
    }

    #[test]
    fn test_mini_tickers_roundtrip() {
        let batch = PublicMiniTickers {
            items: vec![
                PublicMiniTicker {
                    symbol: "BTCUSDT".to_string(),
                    price: "65000.1".to_string(),
                    ..PublicMiniTicker::default()
                },
                PublicMiniTicker {
                    symbol: "ETHUSDT".to_string(),
                    price: "3200.6".to_string(),
                    ..PublicMiniTicker::default()
                },
            ],
        };

        let back: PublicMiniTickers = decode_from_slice(&encode_to_vec(&batch)).unwrap();
        assert_eq!(back, batch);
        assert_eq!(back.items[1].symbol, "ETHUSDT");
    }
}
