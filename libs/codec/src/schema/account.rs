//! Wire table for the account balance payload

use types::PrivateAccount;

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::ProtocolResult;
use crate::message::WireMessage;
use crate::scalar::{decode_int64, decode_string, encode_int64, encode_string};
use crate::tag::FieldTag;

impl WireMessage for PrivateAccount {
    const NAME: &'static str = "PrivateAccount";

    fn decode_field(&mut self, tag: FieldTag, cursor: &mut ByteCursor<'_>) -> ProtocolResult<bool> {
        match tag.field_number {
            1 => self.vcoin_name = decode_string(tag, cursor)?,
            2 => self.coin_id = decode_string(tag, cursor)?,
            3 => self.balance_amount = decode_string(tag, cursor)?,
            4 => self.balance_amount_change = decode_string(tag, cursor)?,
            5 => self.frozen_amount = decode_string(tag, cursor)?,
            6 => self.frozen_amount_change = decode_string(tag, cursor)?,
            7 => self.change_type = decode_string(tag, cursor)?,
            8 => self.time = decode_int64(tag, cursor)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut ByteWriter) {
        encode_string(writer, 1, &self.vcoin_name);
        encode_string(writer, 2, &self.coin_id);
        encode_string(writer, 3, &self.balance_amount);
        encode_string(writer, 4, &self.balance_amount_change);
        encode_string(writer, 5, &self.frozen_amount);
        encode_string(writer, 6, &self.frozen_amount_change);
        encode_string(writer, 7, &self.change_type);
        encode_int64(writer, 8, self.time);
    }
}
