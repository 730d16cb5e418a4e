//! Wire table for the candlestick payload

use types::PublicSpotKline;

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::ProtocolResult;
use crate::message::WireMessage;
use crate::scalar::{decode_int64, decode_string, encode_int64, encode_string};
use crate::tag::FieldTag;

impl WireMessage for PublicSpotKline {
    const NAME: &'static str = "PublicSpotKline";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.interval = decode_string(tag, cursor)?,
            2 => self.window_start = decode_int64(tag, cursor)?,
            3 => self.opening_price = decode_string(tag, cursor)?,
            4 => self.closing_price = decode_string(tag, cursor)?,
            5 => self.highest_price = decode_string(tag, cursor)?,
            6 => self.lowest_price = decode_string(tag, cursor)?,
            7 => self.volume = decode_string(tag, cursor)?,
            8 => self.amount = decode_string(tag, cursor)?,
            9 => self.window_end = decode_int64(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_string(writer, 1, &self.interval);
        encode_int64(writer, 2, self.window_start);
        encode_string(writer, 3, &self.opening_price);
        encode_string(writer, 4, &self.closing_price);
        encode_string(writer, 5, &self.highest_price);
        encode_string(writer, 6, &self.lowest_price);
        encode_string(writer, 7, &self.volume);
        encode_string(writer, 8, &self.amount);
        encode_int64(writer, 9, self.window_end);
    }
}
