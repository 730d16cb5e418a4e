//! Field tags and wire types
//!
//! Every field starts with one varint packing the field number and the
//! wire type: `(field_number << 3) | wire_type`. This protocol uses only
//! two of the protobuf wire types, varint scalars and length-delimited
//! payloads; tags carrying any other wire type are rejected at the tag
//! level before the field is interpreted.

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::{ProtocolError, ProtocolResult};
use crate::varint::{read_varint, write_varint};

/// Highest field number a tag can carry (29 bits)
pub const MAX_FIELD_NUMBER: u64 = (1 << 29) - 1;

/// Supported wire types
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    /// Varint-encoded scalar (int32, int64, bool)
    Varint = 0,
    /// Length-prefixed payload (string, nested message)
    LengthDelimited = 2,
}

/// Decoded field tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag {
    pub field_number: u32,
    pub wire_type: WireType,
}

impl FieldTag {
    /// Create a tag for encoding
    pub fn new(field_number: u32, wire_type: WireType) -> Self {
        Self {
            field_number,
            wire_type,
        }
    }

    /// Read and validate the next tag
    pub fn decode(cursor: &mut ByteCursor<'_>) -> ProtocolResult<Self> {
        let offset = cursor.absolute_offset();
        let raw = read_varint(cursor)?;

        let field_number = raw >> 3;
        if field_number == 0 || field_number > MAX_FIELD_NUMBER {
            return Err(ProtocolError::InvalidFieldNumber {
                field_number,
                offset,
            });
        }

        let wire_type = match (raw & 0x7) as u8 {
            0 => WireType::Varint,
            2 => WireType::LengthDelimited,
            other => {
                return Err(ProtocolError::unsupported_wire_type(
                    field_number as u32,
                    other,
                    offset,
                ))
            }
        };

        Ok(Self {
            field_number: field_number as u32,
            wire_type,
        })
    }

    /// Write this tag
    pub fn encode(&self, writer: &mut ByteWriter) {
        write_varint(
            writer,
            (u64::from(self.field_number) << 3) | u64::from(self.wire_type as u8),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_tag(bytes: &[u8]) -> ProtocolResult<FieldTag> {
        FieldTag::decode(&mut ByteCursor::new(bytes))
    }

    fn encode_tag(tag: FieldTag) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        tag.encode(&mut writer);
        writer.into_vec()
    }

    #[test]
    fn test_tag_roundtrip() {
        let cases = [
            FieldTag::new(1, WireType::LengthDelimited),
            FieldTag::new(5, WireType::Varint),
            FieldTag::new(301, WireType::LengthDelimited),
            FieldTag::new(MAX_FIELD_NUMBER as u32, WireType::Varint),
        ];
        for tag in cases {
            assert_eq!(decode_tag(&encode_tag(tag)).unwrap(), tag);
        }
    }

    #[test]
    fn test_known_tag_bytes() {
        // Field 1, length-delimited: (1 << 3) | 2
        assert_eq!(encode_tag(FieldTag::new(1, WireType::LengthDelimited)), vec![0x0a]);
        // Field 301, length-delimited: (301 << 3) | 2 = 2410
        assert_eq!(
            encode_tag(FieldTag::new(301, WireType::LengthDelimited)),
            vec![0xea, 0x12]
        );
    }

    #[test]
    fn test_field_number_zero_rejected() {
        for raw in [0x00u8, 0x02] {
            let err = decode_tag(&[raw]).unwrap_err();
            assert_eq!(
                err,
                ProtocolError::InvalidFieldNumber {
                    field_number: 0,
                    offset: 0,
                }
            );
        }
    }

    #[test]
    fn test_oversized_field_number_rejected() {
        // (MAX_FIELD_NUMBER + 1) << 3, wire type 0
        let mut writer = ByteWriter::new();
        write_varint(&mut writer, (MAX_FIELD_NUMBER + 1) << 3);
        let err = decode_tag(&writer.into_vec()).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidFieldNumber { .. }));
    }

    #[test]
    fn test_unsupported_wire_types_rejected() {
        // Field 1 with wire types 1 (fixed64), 3 (group start), 4 (group end), 5 (fixed32)
        for wire_type in [1u8, 3, 4, 5] {
            let err = decode_tag(&[(1 << 3) | wire_type]).unwrap_err();
            assert_eq!(
                err,
                ProtocolError::UnsupportedWireType {
                    field_number: 1,
                    wire_type,
                    offset: 0,
                }
            );
        }
    }
}
