//! Wire tables for trade print payloads
//!
//! Covers the shared [`Deal`] value message and the three families built on
//! it: real-time public prints, conflated prints, and the caller's own
//! fills. `PublicDeals` and `AggregatedDeals` share one field layout; the
//! envelope kind tells the streams apart.

use types::{AggregatedDeals, Deal, PrivateDeals, PublicDeals};

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::ProtocolResult;
use crate::message::{decode_nested, encode_repeated, WireMessage};
use crate::scalar::{
    decode_bool, decode_int32, decode_int64, decode_string, encode_bool, encode_int32,
    encode_int64, encode_string,
};
use crate::tag::FieldTag;

impl WireMessage for Deal {
    const NAME: &'static str = "Deal";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.price = decode_string(tag, cursor)?,
            2 => self.quantity = decode_string(tag, cursor)?,
            3 => self.trade_type = decode_int32(tag, cursor)?,
            4 => self.time = decode_int64(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_string(writer, 1, &self.price);
        encode_string(writer, 2, &self.quantity);
        encode_int32(writer, 3, self.trade_type);
        encode_int64(writer, 4, self.time);
    }
}

impl WireMessage for PublicDeals {
    const NAME: &'static str = "PublicDeals";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.deals.push(decode_nested(tag, cursor)?),
            2 => self.event_type = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_repeated(writer, 1, &self.deals);
        encode_string(writer, 2, &self.event_type);
    }
}

impl WireMessage for AggregatedDeals {
    const NAME: &'static str = "AggregatedDeals";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.deals.push(decode_nested(tag, cursor)?),
            2 => self.event_type = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_repeated(writer, 1, &self.deals);
        encode_string(writer, 2, &self.event_type);
    }
}

impl WireMessage for PrivateDeals {
    const NAME: &'static str = "PrivateDeals";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.price = decode_string(tag, cursor)?,
            2 => self.quantity = decode_string(tag, cursor)?,
            3 => self.amount = decode_string(tag, cursor)?,
            4 => self.trade_type = decode_int32(tag, cursor)?,
            5 => self.is_maker = decode_bool(tag, cursor)?,
            6 => self.is_self_trade = decode_bool(tag, cursor)?,
            7 => self.trade_id = decode_string(tag, cursor)?,
            8 => self.client_order_id = decode_string(tag, cursor)?,
            9 => self.order_id = decode_string(tag, cursor)?,
            10 => self.fee_amount = decode_string(tag, cursor)?,
            11 => self.fee_currency = decode_string(tag, cursor)?,
            12 => self.time = decode_int64(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_string(writer, 1, &self.price);
        encode_string(writer, 2, &self.quantity);
        encode_string(writer, 3, &self.amount);
        encode_int32(writer, 4, self.trade_type);
        encode_bool(writer, 5, self.is_maker);
        encode_bool(writer, 6, self.is_self_trade);
        encode_string(writer, 7, &self.trade_id);
        encode_string(writer, 8, &self.client_order_id);
        encode_string(writer, 9, &self.order_id);
        encode_string(writer, 10, &self.fee_amount);
        encode_string(writer, 11, &self.fee_currency);
        encode_int64(writer, 12, self.time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{decode_from_slice, encode_to_vec};

    fn sample_deal() -> Deal {
        Deal {
            price: "65000.1".to_string(),
            quantity: "0.002".to_string(),
            trade_type: 1,
            time: 1700000000000,
        }
    }

    #[test]
    fn test_deal_roundtrip() {
        let deal = sample_deal();
        let bytes = encode_to_vec(&deal);
        let back: Deal = decode_from_slice(&bytes).unwrap();
        assert_eq!(back, deal);
    }

    #[test]
    fn test_deal_wire_layout() {
        let bytes = encode_to_vec(&sample_deal());
        // price tag, length, "65000.1"
        assert_eq!(&bytes[..2], &[0x0a, 0x07]);
        assert_eq!(&bytes[2..9], b"65000.1");
        // quantity tag, length, "0.002"
        assert_eq!(&bytes[9..11], &[0x12, 0x05]);
        // trade_type tag, value 1
        assert_eq!(&bytes[16..18], &[0x18, 0x01]);
        // time tag then a six-byte varint for 1.7e12 ms
        assert_eq!(bytes[18], 0x20);
        assert_eq!(bytes.len(), 25);
    }

    #[test]
    fn test_public_deals_preserves_print_order() {
        let batch = PublicDeals {
            deals: vec![
                Deal {
                    price: "65000.1".to_string(),
                    time: 1,
                    ..Deal::default()
                },
                Deal {
                    price: "65000.2".to_string(),
                    time: 2,
                    ..Deal::default()
                },
                Deal {
                    price: "64999.8".to_string(),
                    time: 3,
                    ..Deal::default()
                },
            ],
            event_type: "spot@public.deals.v3.api".to_string(),
        };

        let back: PublicDeals = decode_from_slice(&encode_to_vec(&batch)).unwrap();
        assert_eq!(back, batch);
        let prices: Vec<&str> = back.deals.iter().map(|deal| deal.price.as_str()).collect();
        assert_eq!(prices, vec!["65000.1", "65000.2", "64999.8"]);
    }

    #[test]
    fn test_private_deal_roundtrip_all_fields() {
        let fill = PrivateDeals {
            price: "65000.1".to_string(),
            quantity: "0.002".to_string(),
            amount: "130.0002".to_string(),
            trade_type: 2,
            is_maker: true,
            is_self_trade: false,
            trade_id: "505979017439002624X1".to_string(),
            client_order_id: "my-order-1".to_string(),
            order_id: "C02__443776928827175424".to_string(),
            fee_amount: "0.0000015".to_string(),
            fee_currency: "BTC".to_string(),
            time: 1700000000000,
        };

        let back: PrivateDeals = decode_from_slice(&encode_to_vec(&fill)).unwrap();
        assert_eq!(back, fill);
    }

    #[test]
    fn test_false_bool_roundtrips_through_absence() {
        let fill = PrivateDeals {
            is_maker: false,
            is_self_trade: true,
            ..PrivateDeals::default()
        };

        let bytes = encode_to_vec(&fill);
        // is_maker (field 5) is false and emits nothing; is_self_trade
        // (field 6) emits tag 0x30 value 1
        assert_eq!(bytes, vec![0x30, 0x01]);

        let back: PrivateDeals = decode_from_slice(&bytes).unwrap();
        assert_eq!(back, fill);
    }
}
