//! Golden byte fixtures
//!
//! Pins the wire image of representative envelopes down to the byte.
//! Encoding is canonical (ascending field numbers, minimal varints), so
//! these fixtures double as regression tests for encoder determinism; the
//! decode direction proves the same bytes reproduce the original values
//! exactly, including 64-bit timestamps.

use codec::{decode_envelope, encode_envelope, EnvelopeBuilder};
use hex_literal::hex;
use types::{Deal, PublicBookTicker, PublicDeals, PushBody, PushEnvelope, PushKind};

/// Envelope: channel "push.deal", symbol "BTCUSDT", one public deal
///
/// Layout:
/// - `0a 09` channel tag + length, "push.deal"
/// - `1a 07` symbol tag + length, "BTCUSDT"
/// - `ea 12 1b` body tag (field 301, two-byte varint) + length 27
///   - `0a 19` deals tag + length 25
///     - `0a 07` price "65000.1"
///     - `12 05` quantity "0.002"
///     - `18 01` trade_type 1
///     - `20 80 d0 95 ff bc 31` time 1700000000000
const DEALS_FRAME: [u8; 50] = hex!(
    "0a09707573682e6465616c"
    "1a0742544355534454"
    "ea121b"
    "0a19"
    "0a0736353030302e31"
    "1205302e303032"
    "1801"
    "2080d095ffbc31"
);

fn deals_envelope() -> PushEnvelope {
    EnvelopeBuilder::new("push.deal")
        .symbol("BTCUSDT")
        .body(PushBody::PublicDeals(PublicDeals {
            deals: vec![Deal {
                price: "65000.1".to_string(),
                quantity: "0.002".to_string(),
                trade_type: 1,
                time: 1700000000000,
            }],
            event_type: String::new(),
        }))
        .build()
}

#[test]
fn test_deals_envelope_encodes_to_golden_bytes() {
    let bytes = encode_envelope(&deals_envelope());
    assert_eq!(
        hex::encode(&bytes),
        hex::encode(DEALS_FRAME),
        "encoded frame diverged from golden image"
    );
}

#[test]
fn test_golden_bytes_decode_to_original_values() {
    let envelope = decode_envelope(&DEALS_FRAME).unwrap();

    assert_eq!(envelope.channel, "push.deal");
    assert_eq!(envelope.symbol.as_deref(), Some("BTCUSDT"));
    assert_eq!(envelope.symbol_id, None);
    assert_eq!(envelope.create_time, None);
    assert_eq!(envelope.send_time, None);
    assert_eq!(envelope.body_kind(), Some(PushKind::PublicDeals));

    let deals = envelope.as_public_deals().unwrap();
    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0].price, "65000.1");
    assert_eq!(deals[0].quantity, "0.002");
    assert_eq!(deals[0].trade_type, 1);
    // Millisecond timestamp past 2^40; must survive bit-exact
    assert_eq!(deals[0].time, 1700000000000);

    assert_eq!(envelope, deals_envelope());
}

#[test]
fn test_metadata_golden_bytes() {
    // All five metadata fields present, no body. create_time/send_time
    // are small values so their varints stay single-byte.
    let envelope = EnvelopeBuilder::new("k")
        .symbol("BT")
        .symbol_id("id")
        .create_time(5)
        .send_time(6)
        .build();

    let bytes = encode_envelope(&envelope);
    assert_eq!(
        bytes,
        hex!(
            "0a016b"     // field 1 "k"
            "1a024254"   // field 3 "BT"
            "22026964"   // field 4 "id"
            "2805"       // field 5 = 5
            "3006"       // field 6 = 6
        )
    );
    assert_eq!(decode_envelope(&bytes).unwrap(), envelope);
}

#[test]
fn test_book_ticker_golden_bytes() {
    let envelope = EnvelopeBuilder::new("bt")
        .body(PushBody::PublicBookTicker(PublicBookTicker {
            bid_price: "9".to_string(),
            bid_quantity: "1".to_string(),
            ask_price: "10".to_string(),
            ask_quantity: "2".to_string(),
        }))
        .build();

    let bytes = encode_envelope(&envelope);
    assert_eq!(
        bytes,
        hex!(
            "0a026274"   // field 1 "bt"
            "8a130d"     // field 305 tag + length 13
            "0a0139"     // bid_price "9"
            "120131"     // bid_quantity "1"
            "1a023130"   // ask_price "10"
            "220132"     // ask_quantity "2"
        )
    );
    assert_eq!(decode_envelope(&bytes).unwrap(), envelope);
}

#[test]
fn test_encoder_never_emits_absent_fields() {
    // Implicit-presence channel at its default, no metadata, no body:
    // the frame is zero bytes
    assert!(encode_envelope(&PushEnvelope::default()).is_empty());

    // Empty buffer decodes back to the all-absent envelope
    assert_eq!(decode_envelope(&[]).unwrap(), PushEnvelope::default());
}
