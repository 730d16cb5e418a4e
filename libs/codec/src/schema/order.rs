//! Wire table for the order lifecycle payload
//!
//! The widest message in the schema: twenty-four fields spanning prices,
//! lifecycle discriminants, and venue-internal identifiers.

use types::PrivateOrders;

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::ProtocolResult;
use crate::message::WireMessage;
use crate::scalar::{
    decode_bool, decode_int32, decode_int64, decode_string, encode_bool, encode_int32,
    encode_int64, encode_string,
};
use crate::tag::FieldTag;

impl WireMessage for PrivateOrders {
    const NAME: &'static str = "PrivateOrders";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.id = decode_string(tag, cursor)?,
            2 => self.client_id = decode_string(tag, cursor)?,
            3 => self.price = decode_string(tag, cursor)?,
            4 => self.quantity = decode_string(tag, cursor)?,
            5 => self.amount = decode_string(tag, cursor)?,
            6 => self.avg_price = decode_string(tag, cursor)?,
            7 => self.order_type = decode_int32(tag, cursor)?,
            8 => self.trade_type = decode_int32(tag, cursor)?,
            9 => self.is_maker = decode_bool(tag, cursor)?,
            10 => self.remain_amount = decode_string(tag, cursor)?,
            11 => self.remain_quantity = decode_string(tag, cursor)?,
            12 => self.last_deal_quantity = decode_string(tag, cursor)?,
            13 => self.status = decode_int32(tag, cursor)?,
            14 => self.create_time = decode_int64(tag, cursor)?,
            15 => self.market = decode_string(tag, cursor)?,
            16 => self.trigger_type = decode_int32(tag, cursor)?,
            17 => self.trigger_price = decode_string(tag, cursor)?,
            18 => self.state = decode_int32(tag, cursor)?,
            19 => self.oco_id = decode_string(tag, cursor)?,
            20 => self.route_factor = decode_string(tag, cursor)?,
            21 => self.symbol_id = decode_string(tag, cursor)?,
            22 => self.market_id = decode_string(tag, cursor)?,
            23 => self.market_currency_id = decode_string(tag, cursor)?,
            24 => self.currency_id = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_string(writer, 1, &self.id);
        encode_string(writer, 2, &self.client_id);
        encode_string(writer, 3, &self.price);
        encode_string(writer, 4, &self.quantity);
        encode_string(writer, 5, &self.amount);
        encode_string(writer, 6, &self.avg_price);
        encode_int32(writer, 7, self.order_type);
        encode_int32(writer, 8, self.trade_type);
        encode_bool(writer, 9, self.is_maker);
        encode_string(writer, 10, &self.remain_amount);
        encode_string(writer, 11, &self.remain_quantity);
        encode_string(writer, 12, &self.last_deal_quantity);
        encode_int32(writer, 13, self.status);
        encode_int64(writer, 14, self.create_time);
        encode_string(writer, 15, &self.market);
        encode_int32(writer, 16, self.trigger_type);
        encode_string(writer, 17, &self.trigger_price);
        encode_int32(writer, 18, self.state);
        encode_string(writer, 19, &self.oco_id);
        encode_string(writer, 20, &self.route_factor);
        encode_string(writer, 21, &self.symbol_id);
        encode_string(writer, 22, &self.market_id);
        encode_string(writer, 23, &self.market_currency_id);
        encode_string(writer, 24, &self.currency_id);
    }
}
