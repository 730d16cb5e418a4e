//! Generic message codec
//!
//! One decode loop and one encode driver serve every message in the
//! schema. Per-type knowledge lives behind [`WireMessage`]: `decode_field`
//! is the type's field table, `encode_fields` its canonical emission
//! order. The drivers own everything the types share: tag walking,
//! unknown-field skipping, nested length framing, and the
//! consumed-equals-declared check on sub-messages.

use tracing::trace;

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::{ProtocolError, ProtocolResult};
use crate::tag::{FieldTag, WireType};
use crate::varint::{read_length, read_varint, write_varint};

/// A message type that knows its own field table
pub trait WireMessage: Default {
    /// Message name used in skip diagnostics
    const NAME: &'static str;

    /// Decode one field into `self`
    ///
    /// Returns `Ok(false)` when the field number is not in this type's
    /// table; the driver then skips the field. Field order on the wire is
    /// arbitrary and repeated occurrences of a scalar field overwrite
    /// earlier ones, so implementations assign rather than merge.
    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool>;

    /// Emit all present fields in ascending field-number order
    fn encode_fields(&self, writer: &mut ByteWriter);

    /// Decode a whole message from the cursor's full extent
    fn decode(cursor: &mut ByteCursor<'_>) -> ProtocolResult<Self> {
        let mut message = Self::default();
        while cursor.has_remaining() {
            let tag = FieldTag::decode(cursor)?;
            if !message.decode_field(tag, cursor)? {
                skip_field(Self::NAME, tag, cursor)?;
            }
        }
        Ok(message)
    }
}

/// Skip one unknown field
///
/// Unknown field numbers are forward compatibility, not errors: the wire
/// type alone determines the field's extent, so newer producers can add
/// fields without breaking older consumers.
fn skip_field(
    message_name: &'static str,
    tag: FieldTag,
    cursor: &mut ByteCursor<'_>,
) -> ProtocolResult<()> {
    let offset = cursor.absolute_offset();
    match tag.wire_type {
        WireType::Varint => {
            read_varint(cursor)?;
        }
        WireType::LengthDelimited => {
            let length = read_length(cursor, "skipped field payload")?;
            cursor.skip(length, "skipped field payload")?;
        }
    }
    trace!(
        message = message_name,
        field_number = tag.field_number,
        wire_type = tag.wire_type as u8,
        offset,
        "skipped unknown field"
    );
    Ok(())
}

/// Decode a top-level message from a byte slice
pub fn decode_from_slice<M: WireMessage>(bytes: &[u8]) -> ProtocolResult<M> {
    M::decode(&mut ByteCursor::new(bytes))
}

/// Decode a length-prefixed nested message
///
/// The length prefix bounds a sub-cursor, so nothing the nested decode
/// does can read outside its declared extent. After the decode the
/// sub-cursor must sit exactly at that extent; a shortfall means the
/// decode logic and the framing disagree and the whole message is
/// rejected.
pub fn decode_nested<M: WireMessage>(
    tag: FieldTag,
    cursor: &mut ByteCursor<'_>,
) -> ProtocolResult<M> {
    crate::scalar::expect_wire_type(tag, WireType::LengthDelimited, cursor.absolute_offset())?;
    let declared = read_length(cursor, "sub-message payload")?;
    let offset = cursor.absolute_offset();
    let mut sub = cursor.sub_cursor(declared, "sub-message payload")?;
    let message = M::decode(&mut sub)?;
    let consumed = sub.position();
    if consumed != declared {
        return Err(ProtocolError::SubMessageLengthMismatch {
            declared,
            consumed,
            offset,
        });
    }
    Ok(message)
}

/// Encode a message to a fresh buffer
pub fn encode_to_vec<M: WireMessage>(message: &M) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    message.encode_fields(&mut writer);
    writer.into_vec()
}

/// Encode one nested message field
///
/// Fork-and-join framing: the body is encoded into a scratch buffer to
/// learn its length, then tag, length, and bytes are emitted. A nested
/// message that is present always emits, even when its encoding is empty;
/// presence of the field is the information.
pub fn encode_nested<M: WireMessage>(writer: &mut ByteWriter, field_number: u32, message: &M) {
    let mut scratch = ByteWriter::new();
    message.encode_fields(&mut scratch);
    let body = scratch.into_vec();

    FieldTag::new(field_number, WireType::LengthDelimited).encode(writer);
    write_varint(writer, body.len() as u64);
    writer.write_bytes(&body);
}

/// Encode a repeated nested-message field, preserving element order
pub fn encode_repeated<M: WireMessage>(writer: &mut ByteWriter, field_number: u32, messages: &[M]) {
    for message in messages {
        encode_nested(writer, field_number, message);
    }
}
