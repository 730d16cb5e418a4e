//! Wire tables for order book depth payloads
//!
//! All depth families carry ordered sequences of the two-field
//! [`DepthLevel`] value message. Wire order of levels is the book order
//! the venue sent and survives the round trip untouched.

use types::{
    AggregatedDepths, DepthLevel, PublicIncreaseDepths, PublicIncreaseDepthsBatch,
    PublicLimitDepths,
};

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::ProtocolResult;
use crate::message::{decode_nested, encode_repeated, WireMessage};
use crate::scalar::{decode_string, encode_string};
use crate::tag::FieldTag;

impl WireMessage for DepthLevel {
    const NAME: &'static str = "DepthLevel";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.price = decode_string(tag, cursor)?,
            2 => self.quantity = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_string(writer, 1, &self.price);
        encode_string(writer, 2, &self.quantity);
    }
}

impl WireMessage for PublicIncreaseDepths {
    const NAME: &'static str = "PublicIncreaseDepths";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.asks.push(decode_nested(tag, cursor)?),
            2 => self.bids.push(decode_nested(tag, cursor)?),
            3 => self.event_type = decode_string(tag, cursor)?,
            4 => self.version = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_repeated(writer, 1, &self.asks);
        encode_repeated(writer, 2, &self.bids);
        encode_string(writer, 3, &self.event_type);
        encode_string(writer, 4, &self.version);
    }
}

impl WireMessage for PublicLimitDepths {
    const NAME: &'static str = "PublicLimitDepths";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.asks.push(decode_nested(tag, cursor)?),
            2 => self.bids.push(decode_nested(tag, cursor)?),
            3 => self.event_type = decode_string(tag, cursor)?,
            4 => self.version = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_repeated(writer, 1, &self.asks);
        encode_repeated(writer, 2, &self.bids);
        encode_string(writer, 3, &self.event_type);
        encode_string(writer, 4, &self.version);
    }
}

impl WireMessage for PublicIncreaseDepthsBatch {
    const NAME: &'static str = "PublicIncreaseDepthsBatch";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.items.push(decode_nested(tag, cursor)?),
            2 => self.event_type = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_repeated(writer, 1, &self.items);
        encode_string(writer, 2, &self.event_type);
    }
}

impl WireMessage for AggregatedDepths {
    const NAME: &'static str = "AggregatedDepths";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.asks.push(decode_nested(tag, cursor)?),
            2 => self.bids.push(decode_nested(tag, cursor)?),
            3 => self.event_type = decode_string(tag, cursor)?,
            4 => self.from_version = decode_string(tag, cursor)?,
            5 => self.to_version = decode_string(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_repeated(writer, 1, &self.asks);
        encode_repeated(writer, 2, &self.bids);
        encode_string(writer, 3, &self.event_type);
        encode_string(writer, 4, &self.from_version);
        encode_string(writer, 5, &self.to_version);
    }
}
