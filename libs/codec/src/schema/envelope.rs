//! Wire table for the push envelope
//!
//! The envelope carries five metadata fields and one oneof slot spanning
//! the body field numbers 301-315. Dispatch runs through the
//! [`PushKind`] registry: a field number the registry resolves is decoded
//! as the matching payload, anything else falls through to the generic
//! skip. Exclusivity is enforced here on the wire; in memory it is already
//! guaranteed by [`PushBody`] being a sum type.

use types::{PushBody, PushEnvelope, PushKind};

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::{ProtocolError, ProtocolResult};
use crate::message::{decode_nested, encode_nested, WireMessage};
use crate::scalar::{
    decode_int64, decode_string, encode_optional_int64, encode_optional_string, encode_string,
};
use crate::tag::FieldTag;

/// Envelope metadata field numbers
///
/// Field 2 is unassigned in the schema and decodes as unknown.
const FIELD_CHANNEL: u32 = 1;
const FIELD_SYMBOL: u32 = 3;
const FIELD_SYMBOL_ID: u32 = 4;
const FIELD_CREATE_TIME: u32 = 5;
const FIELD_SEND_TIME: u32 = 6;

impl WireMessage for PushEnvelope {
    const NAME: &'static str = "PushEnvelope";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            FIELD_CHANNEL => self.channel = decode_string(tag, cursor)?,
            FIELD_SYMBOL => self.symbol = Some(decode_string(tag, cursor)?),
            FIELD_SYMBOL_ID => self.symbol_id = Some(decode_string(tag, cursor)?),
            FIELD_CREATE_TIME => self.create_time = Some(decode_int64(tag, cursor)?),
            FIELD_SEND_TIME => self.send_time = Some(decode_int64(tag, cursor)?),
            number => match PushKind::from_field_number(number) {
                Some(kind) => {
                    if let Some(existing) = &self.body {
                        return Err(ProtocolError::conflicting_oneof_field(
                            existing.kind().name(),
                            kind.name(),
                            cursor.absolute_offset(),
                        ));
                    }
                    self.body = Some(decode_body(kind, tag, cursor)?);
                }
                None => return Ok(false),
            },
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_string(writer, FIELD_CHANNEL, &self.channel);
        encode_optional_string(writer, FIELD_SYMBOL, self.symbol.as_deref());
        encode_optional_string(writer, FIELD_SYMBOL_ID, self.symbol_id.as_deref());
        encode_optional_int64(writer, FIELD_CREATE_TIME, self.create_time);
        encode_optional_int64(writer, FIELD_SEND_TIME, self.send_time);
        if let Some(body) = &self.body {
            encode_body(body, writer);
        }
    }
}

/// Decode one body payload as the kind its field number names
fn decode_body(
    kind: PushKind,
    tag: FieldTag,
    cursor: &mut ByteCursor<'_>,
) -> ProtocolResult<PushBody> {
    Ok(match kind {
        PushKind::PublicDeals => PushBody::PublicDeals(decode_nested(tag, cursor)?),
        PushKind::PublicIncreaseDepths => {
            PushBody::PublicIncreaseDepths(decode_nested(tag, cursor)?)
        }
        PushKind::PublicLimitDepths => PushBody::PublicLimitDepths(decode_nested(tag, cursor)?),
        PushKind::PrivateOrders => PushBody::PrivateOrders(decode_nested(tag, cursor)?),
        PushKind::PublicBookTicker => PushBody::PublicBookTicker(decode_nested(tag, cursor)?),
        PushKind::PrivateDeals => PushBody::PrivateDeals(decode_nested(tag, cursor)?),
        PushKind::PrivateAccount => PushBody::PrivateAccount(decode_nested(tag, cursor)?),
        PushKind::PublicSpotKline => PushBody::PublicSpotKline(decode_nested(tag, cursor)?),
        PushKind::PublicMiniTicker => PushBody::PublicMiniTicker(decode_nested(tag, cursor)?),
        PushKind::PublicMiniTickers => PushBody::PublicMiniTickers(decode_nested(tag, cursor)?),
        PushKind::PublicBookTickerBatch => {
            PushBody::PublicBookTickerBatch(decode_nested(tag, cursor)?)
        }
        PushKind::PublicIncreaseDepthsBatch => {
            PushBody::PublicIncreaseDepthsBatch(decode_nested(tag, cursor)?)
        }
        PushKind::AggregatedDepths => PushBody::AggregatedDepths(decode_nested(tag, cursor)?),
        PushKind::AggregatedDeals => PushBody::AggregatedDeals(decode_nested(tag, cursor)?),
        PushKind::AggregatedBookTicker => {
            PushBody::AggregatedBookTicker(decode_nested(tag, cursor)?)
        }
    })
}

/// Encode the body payload under its kind's field number
fn encode_body(body: &PushBody, writer: &mut ByteWriter) {
    let field_number = body.kind().field_number();
    match body {
        PushBody::PublicDeals(payload) => encode_nested(writer, field_number, payload),
        PushBody::PublicIncreaseDepths(payload) => encode_nested(writer, field_number, payload),
        PushBody::PublicLimitDepths(payload) => encode_nested(writer, field_number, payload),
        PushBody::PrivateOrders(payload) => encode_nested(writer, field_number, payload),
        PushBody::PublicBookTicker(payload) => encode_nested(writer, field_number, payload),
        PushBody::PrivateDeals(payload) => encode_nested(writer, field_number, payload),
        PushBody::PrivateAccount(payload) => encode_nested(writer, field_number, payload),
        PushBody::PublicSpotKline(payload) => encode_nested(writer, field_number, payload),
        PushBody::PublicMiniTicker(payload) => encode_nested(writer, field_number, payload),
        PushBody::PublicMiniTickers(payload) => encode_nested(writer, field_number, payload),
        PushBody::PublicBookTickerBatch(payload) => encode_nested(writer, field_number, payload),
        PushBody::PublicIncreaseDepthsBatch(payload) => {
            encode_nested(writer, field_number, payload)
        }
        PushBody::AggregatedDepths(payload) => encode_nested(writer, field_number, payload),
        PushBody::AggregatedDeals(payload) => encode_nested(writer, field_number, payload),
        PushBody::AggregatedBookTicker(payload) => encode_nested(writer, field_number, payload),
    }
}
