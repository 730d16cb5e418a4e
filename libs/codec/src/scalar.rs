//! Scalar field codecs
//!
//! Field-level encode/decode for the scalar types the schema uses: UTF-8
//! strings, two's-complement int32/int64, and bools. Decode helpers take
//! the already-read tag and verify its wire type against what the schema
//! assigns the field; the schema is fixed, so a known field arriving under
//! the wrong wire type is corruption, not evolution, and fails rather than
//! being skipped.
//!
//! Encoding follows the presence rules of the format. Plain fields have
//! implicit presence: the default value (empty string, zero, false) emits
//! nothing, and decoders materialize the default for absent fields.
//! `Option` fields have explicit presence: `Some` always emits, including
//! `Some` of the default value, and only `None` is absent.

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::{ProtocolError, ProtocolResult};
use crate::tag::{FieldTag, WireType};
use crate::varint::{read_length, read_varint, write_varint};

/// Verify a tag's wire type against the schema's expectation
pub fn expect_wire_type(tag: FieldTag, expected: WireType, offset: usize) -> ProtocolResult<()> {
    if tag.wire_type == expected {
        Ok(())
    } else {
        Err(ProtocolError::unsupported_wire_type(
            tag.field_number,
            tag.wire_type as u8,
            offset,
        ))
    }
}

/// Decode a string field
pub fn decode_string(tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<String> {
    expect_wire_type(tag, WireType::LengthDelimited, cursor.absolute_offset())?;
    let length = read_length(cursor, "string payload")?;
    let offset = cursor.absolute_offset();
    let bytes = cursor.read_bytes(length, "string payload")?;
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_owned()),
        Err(_) => Err(ProtocolError::InvalidUtf8 {
            field_number: tag.field_number,
            offset,
        }),
    }
}

/// Decode an int64 field
pub fn decode_int64(tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<i64> {
    expect_wire_type(tag, WireType::Varint, cursor.absolute_offset())?;
    Ok(read_varint(cursor)? as i64)
}

/// Decode an int32 field
///
/// The wire value is a 64-bit varint; the low 32 bits carry the value and
/// the sign, matching how negative int32 values are sign-extended on
/// encode.
pub fn decode_int32(tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<i32> {
    expect_wire_type(tag, WireType::Varint, cursor.absolute_offset())?;
    Ok(read_varint(cursor)? as i32)
}

/// Decode a bool field; any nonzero varint is true
pub fn decode_bool(tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
    expect_wire_type(tag, WireType::Varint, cursor.absolute_offset())?;
    Ok(read_varint(cursor)? != 0)
}

fn write_string_field(writer: &mut ByteWriter, field_number: u32, value: &str) {
    FieldTag::new(field_number, WireType::LengthDelimited).encode(writer);
    write_varint(writer, value.len() as u64);
    writer.write_bytes(value.as_bytes());
}

/// Encode a plain string field; empty emits nothing
pub fn encode_string(writer: &mut ByteWriter, field_number: u32, value: &str) {
    if value.is_empty() {
        return;
    }
    write_string_field(writer, field_number, value);
}

/// Encode an explicit-presence string field; `Some` always emits
pub fn encode_optional_string(writer: &mut ByteWriter, field_number: u32, value: Option<&str>) {
    if let Some(text) = value {
        write_string_field(writer, field_number, text);
    }
}

/// Encode a plain int64 field; zero emits nothing
pub fn encode_int64(writer: &mut ByteWriter, field_number: u32, value: i64) {
    if value == 0 {
        return;
    }
    FieldTag::new(field_number, WireType::Varint).encode(writer);
    write_varint(writer, value as u64);
}

/// Encode an explicit-presence int64 field; `Some` always emits
pub fn encode_optional_int64(writer: &mut ByteWriter, field_number: u32, value: Option<i64>) {
    if let Some(number) = value {
        FieldTag::new(field_number, WireType::Varint).encode(writer);
        write_varint(writer, number as u64);
    }
}

/// Encode a plain int32 field; zero emits nothing
///
/// Negative values sign-extend to 64 bits before encoding and therefore
/// occupy the full ten bytes, as the format requires.
pub fn encode_int32(writer: &mut ByteWriter, field_number: u32, value: i32) {
    if value == 0 {
        return;
    }
    FieldTag::new(field_number, WireType::Varint).encode(writer);
    write_varint(writer, i64::from(value) as u64);
}

/// Encode a plain bool field; false emits nothing
pub fn encode_bool(writer: &mut ByteWriter, field_number: u32, value: bool) {
    if !value {
        return;
    }
    FieldTag::new(field_number, WireType::Varint).encode(writer);
    write_varint(writer, 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_tag(cursor: &mut ByteCursor<'_>) -> FieldTag {
        FieldTag::decode(cursor).unwrap()
    }

    #[test]
    fn test_string_roundtrip() {
        let mut writer = ByteWriter::new();
        encode_string(&mut writer, 1, "push.deal");
        let bytes = writer.into_vec();
        assert_eq!(&bytes[..2], &[0x0a, 0x09]);

        let mut cursor = ByteCursor::new(&bytes);
        let tag = read_tag(&mut cursor);
        assert_eq!(decode_string(tag, &mut cursor).unwrap(), "push.deal");
    }

    #[test]
    fn test_default_values_emit_nothing() {
        let mut writer = ByteWriter::new();
        encode_string(&mut writer, 1, "");
        encode_int64(&mut writer, 2, 0);
        encode_int32(&mut writer, 3, 0);
        encode_bool(&mut writer, 4, false);
        assert!(writer.is_empty());
    }

    #[test]
    fn test_optional_default_values_emit() {
        let mut writer = ByteWriter::new();
        encode_optional_string(&mut writer, 3, Some(""));
        encode_optional_int64(&mut writer, 5, Some(0));
        // Tag + zero length, then tag + zero varint
        assert_eq!(writer.into_vec(), vec![0x1a, 0x00, 0x28, 0x00]);

        let mut absent = ByteWriter::new();
        encode_optional_string(&mut absent, 3, None);
        encode_optional_int64(&mut absent, 5, None);
        assert!(absent.is_empty());
    }

    #[test]
    fn test_negative_int32_sign_extends() {
        let mut writer = ByteWriter::new();
        encode_int32(&mut writer, 3, -1);
        let bytes = writer.into_vec();
        // One tag byte plus a ten-byte varint
        assert_eq!(bytes.len(), 11);
        assert_eq!(
            &bytes[1..],
            &[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]
        );

        let mut cursor = ByteCursor::new(&bytes);
        let tag = read_tag(&mut cursor);
        assert_eq!(decode_int32(tag, &mut cursor).unwrap(), -1);
    }

    #[test]
    fn test_int64_roundtrip_extremes() {
        for value in [i64::MIN, -1, 1, i64::MAX, 1_700_000_000_000] {
            let mut writer = ByteWriter::new();
            encode_optional_int64(&mut writer, 5, Some(value));
            let bytes = writer.into_vec();

            let mut cursor = ByteCursor::new(&bytes);
            let tag = read_tag(&mut cursor);
            assert_eq!(decode_int64(tag, &mut cursor).unwrap(), value);
        }
    }

    #[test]
    fn test_wrong_wire_type_rejected() {
        // Field 1 as varint where the schema expects a string
        let bytes = [0x08, 0x01];
        let mut cursor = ByteCursor::new(&bytes);
        let tag = read_tag(&mut cursor);
        let err = decode_string(tag, &mut cursor).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnsupportedWireType {
                field_number: 1,
                wire_type: 0,
                offset: 1,
            }
        );
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        // Field 1, length 2, invalid continuation bytes
        let bytes = [0x0a, 0x02, 0xff, 0xfe];
        let mut cursor = ByteCursor::new(&bytes);
        let tag = read_tag(&mut cursor);
        let err = decode_string(tag, &mut cursor).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::InvalidUtf8 {
                field_number: 1,
                offset: 2,
            }
        );
    }

    #[test]
    fn test_bool_decodes_any_nonzero() {
        let bytes = [0x08, 0x2a];
        let mut cursor = ByteCursor::new(&bytes);
        let tag = read_tag(&mut cursor);
        assert!(decode_bool(tag, &mut cursor).unwrap());
    }
}
