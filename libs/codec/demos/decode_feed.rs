//! # Push Envelope Codec Demo
//!
//! Walks through the codec surface end to end:
//! - Building and encoding typed envelopes
//! - Decoding live-feed frames and dispatching on body kind
//! - Typed error reporting with absolute byte offsets
//! - Decode/encode throughput with buffer reuse

use codec::{
    decode_envelope, encode_envelope, encode_envelope_into, EnvelopeBuilder, ProtocolError,
};
use types::{Deal, DepthLevel, PrivateOrders, PublicBookTicker, PublicDeals, PublicIncreaseDepths, PushBody};

fn main() {
    println!("🚀 Push Envelope Codec Demo");
    println!("===========================\n");

    // 1. Encode a typed envelope and decode it back
    demo_encode_decode();

    // 2. Dispatch a mixed stream of frames on body kind
    demo_stream_dispatch();

    // 3. Show typed rejection of malformed frames
    demo_error_reporting();

    // 4. Measure decode and encode throughput
    demo_performance();

    println!("✅ Demo complete");
}

fn sample_deals_frame() -> Vec<u8> {
    EnvelopeBuilder::new("spot@public.aggre.deals.v3.api.pb@100ms@BTCUSDT")
        .symbol("BTCUSDT")
        .send_time(1700000000123)
        .body(PushBody::PublicDeals(PublicDeals {
            deals: vec![Deal {
                price: "65000.1".to_string(),
                quantity: "0.002".to_string(),
                trade_type: 1,
                time: 1700000000000,
            }],
            event_type: String::new(),
        }))
        .encode()
}

fn demo_encode_decode() {
    println!("🔧 1. Build, Encode, Decode");

    let frame = sample_deals_frame();
    println!("   📦 Encoded frame: {} bytes", frame.len());
    println!("   📄 Hex: {}", hex::encode(&frame));

    match decode_envelope(&frame) {
        Ok(envelope) => {
            println!("   ✅ Decoded channel: {}", envelope.channel);
            println!("   📊 Symbol: {:?}", envelope.symbol);
            if let Some(deals) = envelope.as_public_deals() {
                for deal in deals {
                    println!(
                        "   💹 Trade: {} x {} (side {}, t={})",
                        deal.price, deal.quantity, deal.trade_type, deal.time
                    );
                }
            }
        }
        Err(e) => println!("   ❌ Decode failed: {}", e),
    }
    println!();
}

fn demo_stream_dispatch() {
    println!("🔀 2. Stream Dispatch on Body Kind");

    let frames = vec![
        sample_deals_frame(),
        EnvelopeBuilder::new("spot@public.aggre.depth.v3.api.pb@100ms@BTCUSDT")
            .symbol("BTCUSDT")
            .body(PushBody::PublicIncreaseDepths(PublicIncreaseDepths {
                asks: vec![DepthLevel {
                    price: "65000.1".to_string(),
                    quantity: "1.2".to_string(),
                }],
                bids: vec![DepthLevel {
                    price: "64999.9".to_string(),
                    quantity: "0.8".to_string(),
                }],
                event_type: String::new(),
                version: "1079912".to_string(),
            }))
            .encode(),
        EnvelopeBuilder::new("spot@public.aggre.bookTicker.v3.api.pb@100ms@BTCUSDT")
            .symbol("BTCUSDT")
            .body(PushBody::PublicBookTicker(PublicBookTicker {
                bid_price: "64999.9".to_string(),
                bid_quantity: "0.8".to_string(),
                ask_price: "65000.1".to_string(),
                ask_quantity: "1.2".to_string(),
            }))
            .encode(),
        EnvelopeBuilder::new("spot@private.orders.v3.api.pb")
            .symbol("BTCUSDT")
            .body(PushBody::PrivateOrders(PrivateOrders {
                id: "C02__443776928827175424".to_string(),
                price: "65000".to_string(),
                quantity: "0.01".to_string(),
                status: 1,
                create_time: 1700000000000,
                ..PrivateOrders::default()
            }))
            .encode(),
    ];

    for frame in &frames {
        let envelope = match decode_envelope(frame) {
            Ok(envelope) => envelope,
            Err(e) => {
                println!("   ❌ Frame rejected: {}", e);
                continue;
            }
        };
        let scope = if envelope.is_private() { "private" } else { "public" };
        match envelope.body {
            Some(PushBody::PublicDeals(deals)) => {
                println!("   💹 [{}] {} trade(s)", scope, deals.deals.len());
            }
            Some(PushBody::PublicIncreaseDepths(depths)) => {
                println!(
                    "   📚 [{}] depth update: {} asks / {} bids @ version {}",
                    scope,
                    depths.asks.len(),
                    depths.bids.len(),
                    depths.version
                );
            }
            Some(PushBody::PublicBookTicker(ticker)) => {
                println!(
                    "   📈 [{}] top of book: {} / {}",
                    scope, ticker.bid_price, ticker.ask_price
                );
            }
            Some(PushBody::PrivateOrders(order)) => {
                println!(
                    "   📝 [{}] order {} status={} @ {}",
                    scope, order.id, order.status, order.price
                );
            }
            Some(other) => println!("   📦 [{}] {:?}", scope, other.kind().name()),
            None => println!("   📭 [{}] bare metadata frame", scope),
        }
    }
    println!();
}

fn demo_error_reporting() {
    println!("🛡️  3. Typed Rejection of Malformed Frames");

    // Valid frame cut mid-body
    let mut truncated = sample_deals_frame();
    truncated.truncate(truncated.len() - 10);
    match decode_envelope(&truncated) {
        Ok(_) => println!("   ❌ Truncated frame unexpectedly decoded"),
        Err(e) => println!("   ⚠️  Truncated frame: {} (expected behavior)", e),
    }

    // Two body payloads in one envelope
    let conflicting = [0xea, 0x12, 0x00, 0x92, 0x13, 0x00];
    match decode_envelope(&conflicting) {
        Ok(_) => println!("   ❌ Conflicting bodies unexpectedly decoded"),
        Err(e @ ProtocolError::ConflictingOneofField { .. }) => {
            println!("   ⚠️  Conflicting bodies: {} (expected behavior)", e);
        }
        Err(e) => println!("   ❌ Unexpected error: {}", e),
    }

    // Invalid UTF-8 in the channel field
    let bad_utf8 = [0x0a, 0x02, 0xff, 0xfe];
    match decode_envelope(&bad_utf8) {
        Ok(_) => println!("   ❌ Invalid UTF-8 unexpectedly decoded"),
        Err(e) => println!("   ⚠️  Invalid UTF-8: {} at offset {} (expected behavior)", e, e.offset()),
    }
    println!();
}

fn demo_performance() {
    println!("🚀 4. Throughput");

    let frame = sample_deals_frame();
    let envelope = decode_envelope(&frame).expect("demo frame decodes");
    let iterations = 100_000;

    let start = std::time::Instant::now();
    for _ in 0..iterations {
        let _ = decode_envelope(&frame).expect("demo frame decodes");
    }
    let duration = start.elapsed();
    println!("   📈 Decode: {} frames in {:?}", iterations, duration);
    println!(
        "      - {:.0} frames/second",
        (iterations as f64) / duration.as_secs_f64()
    );

    let mut buffer = Vec::with_capacity(256);
    let start = std::time::Instant::now();
    for _ in 0..iterations {
        buffer = encode_envelope_into(&envelope, std::mem::take(&mut buffer));
    }
    let duration = start.elapsed();
    println!("   📈 Encode (reused buffer): {} frames in {:?}", iterations, duration);
    println!(
        "      - {:.0} frames/second",
        (iterations as f64) / duration.as_secs_f64()
    );

    let single = encode_envelope(&envelope);
    println!("   📦 Frame size: {} bytes", single.len());
    println!();
}
