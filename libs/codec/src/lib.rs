//! # Pushwire Protocol Codec
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer of the Pushwire workspace: the
//! wire encoding and decoding logic for push protocol v3 frames. It turns
//! raw byte buffers from a transport into typed [`PushEnvelope`] values
//! and typed envelopes back into bytes:
//! - Base-128 varint and field tag primitives
//! - Bounds-checked cursors with absolute-offset diagnostics
//! - Scalar field codecs (UTF-8 strings, int32/int64, bool)
//! - A generic message codec driven by per-type field tables
//! - Envelope oneof dispatch with exclusivity enforcement
//! - Chained envelope construction via [`EnvelopeBuilder`]
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types  →  [codec]   →  transport
//!     ↑            ↓              ↓
//! Pure Data    Protocol Rules  Framing/IO
//! Structures   Encode/Decode   (caller's concern)
//! ```
//!
//! The codec is purely synchronous: one decode or encode call runs to
//! completion against one buffer, holds no shared state, and performs no
//! I/O. Framing (finding where one frame ends and the next begins) is
//! the transport's job; this crate assumes it is handed exactly one
//! frame's bytes.
//!
//! ## What This Crate Does NOT Contain
//! - Network transport, reconnection, or subscription handling
//! - Data structure definitions (those live in `libs/types`)
//! - Authentication or channel naming conventions
//!
//! ## Quick Start
//!
//! ```rust
//! use codec::{decode_envelope, EnvelopeBuilder};
//! use types::{Deal, PublicDeals, PushBody};
//!
//! let bytes = EnvelopeBuilder::new("spot@public.deals.v3.api@BTCUSDT")
//!     .symbol("BTCUSDT")
//!     .body(PushBody::PublicDeals(PublicDeals {
//!         deals: vec![Deal {
//!             price: "65000.1".to_string(),
//!             quantity: "0.002".to_string(),
//!             trade_type: 1,
//!             time: 1700000000000,
//!         }],
//!         event_type: String::new(),
//!     }))
//!     .encode();
//!
//! let envelope = decode_envelope(&bytes).unwrap();
//! match envelope.body {
//!     Some(PushBody::PublicDeals(deals)) => {
//!         assert_eq!(deals.deals[0].price, "65000.1");
//!         assert_eq!(deals.deals[0].time, 1700000000000);
//!     }
//!     other => panic!("unexpected body: {other:?}"),
//! }
//! ```
//!
//! ## Failure Policy
//!
//! A decode failure at any nesting depth aborts the whole call with a
//! [`ProtocolError`] carrying the absolute byte offset; no partial
//! envelope is ever returned. One malformed frame should not halt a
//! long-lived feed, so callers typically drop the frame and keep
//! consuming. Encoding cannot fail: conflicting payloads are
//! unrepresentable and strings are always valid UTF-8.

use tracing::trace;

use types::PushEnvelope;

pub mod builder;
pub mod cursor;
pub mod error;
pub mod message;
pub mod scalar;
pub mod schema;
pub mod tag;
pub mod varint;

// Re-export the working surface for convenience
pub use builder::EnvelopeBuilder;
pub use cursor::{ByteCursor, ByteWriter};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{decode_from_slice, encode_to_vec, WireMessage};
pub use tag::{FieldTag, WireType};

/// Decode one push frame into a typed envelope
///
/// `bytes` must be exactly one frame as delimited by the transport. The
/// decode consumes the whole buffer; trailing unknown fields are skipped,
/// trailing garbage that does not parse as fields is an error.
pub fn decode_envelope(bytes: &[u8]) -> ProtocolResult<PushEnvelope> {
    let envelope: PushEnvelope = message::decode_from_slice(bytes)?;
    trace!(
        channel = %envelope.channel,
        body_kind = envelope.body_kind().map(|kind| kind.name()),
        frame_len = bytes.len(),
        "decoded push envelope"
    );
    Ok(envelope)
}

/// Encode a typed envelope to wire bytes
///
/// Output is canonical: fields emit in ascending field-number order and
/// every varint is minimal-length, so equal envelopes always produce
/// equal bytes.
pub fn encode_envelope(envelope: &PushEnvelope) -> Vec<u8> {
    message::encode_to_vec(envelope)
}

/// Encode a typed envelope into a caller-owned buffer
///
/// The buffer is cleared and refilled, keeping its allocation. Callers
/// that pool encode buffers check a `Vec` out, pass it here, and check
/// the returned one back in; the pooling policy itself stays with the
/// caller.
pub fn encode_envelope_into(envelope: &PushEnvelope, buffer: Vec<u8>) -> Vec<u8> {
    let mut writer = ByteWriter::from_vec(buffer);
    envelope.encode_fields(&mut writer);
    writer.into_vec()
}
