//! Base-128 varint primitives
//!
//! Unsigned integers travel as little-endian groups of seven bits, low
//! group first, with the high bit of each byte flagging continuation. A
//! 64-bit value spans one to ten bytes. Signed fields use plain
//! two's-complement through the unsigned encoding (negative values occupy
//! the full ten bytes); there is no zigzag mapping anywhere in this
//! protocol, and changing that would break wire compatibility.

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::{ProtocolError, ProtocolResult};

/// Longest legal varint: ten bytes carry 70 payload bits
pub const MAX_VARINT_LEN: usize = 10;

/// Read one unsigned varint
///
/// Fails with `TruncatedInput` when the buffer ends mid-varint and
/// `MalformedVarint` when no terminator appears within ten bytes. The
/// error offset is the first byte of the varint. Payload bits beyond the
/// 64th are discarded, which only affects the tenth byte.
pub fn read_varint(cursor: &mut ByteCursor<'_>) -> ProtocolResult<u64> {
    let start = cursor.absolute_offset();
    let mut value = 0u64;
    for index in 0..MAX_VARINT_LEN {
        let byte = cursor.read_byte("varint continuation")?;
        value |= u64::from(byte & 0x7f) << (7 * index);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(ProtocolError::MalformedVarint { offset: start })
}

/// Write one unsigned varint in minimal-length form
pub fn write_varint(writer: &mut ByteWriter, mut value: u64) {
    loop {
        let low = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            writer.write_byte(low);
            return;
        }
        writer.write_byte(low | 0x80);
    }
}

/// Read a length prefix and bound it against the remaining buffer
///
/// Lengths are varints, but a declared length that exceeds what is left to
/// read can never be satisfied, so it is rejected here as `TruncatedInput`
/// before any allocation or skip happens.
pub fn read_length(cursor: &mut ByteCursor<'_>, context: &'static str) -> ProtocolResult<usize> {
    let declared = read_varint(cursor)?;
    if declared > cursor.remaining() as u64 {
        return Err(ProtocolError::truncated_input(
            cursor.absolute_offset(),
            declared as usize,
            cursor.remaining(),
            context,
        ));
    }
    Ok(declared as usize)
}
