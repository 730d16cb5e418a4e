//! # Pushwire Types Library
//!
//! Pure data structures for the push protocol v3 stream: the envelope, the
//! fifteen payload families it can carry, and the typed accessors layered
//! on top of raw wire fields.
//!
//! ## Design Philosophy
//!
//! - **Data, not rules**: this crate defines what a push message *is*. How
//!   it is encoded lives in the codec crate, which depends on this one and
//!   never the reverse.
//! - **No precision loss**: the venue quotes prices, quantities, and
//!   balances as decimal strings; structs keep the strings verbatim and
//!   expose `rust_decimal` accessors for arithmetic.
//! - **Unrepresentable conflicts**: the envelope body is a sum type, so a
//!   frame carrying two payloads cannot be constructed.
//! - **Typed discriminants**: raw int32 discriminants stay on the structs
//!   for exact round-trips; enum accessors surface unknown values as
//!   [`TypeError`] instead of panicking.
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{Deal, PublicDeals, PushBody, PushEnvelope, TradeSide};
//!
//! let envelope = PushEnvelope {
//!     channel: "spot@public.deals.v3.api@BTCUSDT".to_string(),
//!     symbol: Some("BTCUSDT".to_string()),
//!     body: Some(PushBody::PublicDeals(PublicDeals {
//!         deals: vec![Deal {
//!             price: "65000.1".to_string(),
//!             quantity: "0.002".to_string(),
//!             trade_type: 1,
//!             time: 1700000000000,
//!         }],
//!         event_type: String::new(),
//!     })),
//!     ..PushEnvelope::default()
//! };
//!
//! let deal = &envelope.as_public_deals().unwrap()[0];
//! assert_eq!(deal.side().unwrap(), TradeSide::Buy);
//! assert_eq!(deal.price_decimal().unwrap().to_string(), "65000.1");
//! ```

pub mod account;
pub mod deal;
pub mod depth;
pub mod enums;
pub mod envelope;
pub mod error;
pub mod kind;
pub mod kline;
pub mod order;
pub mod ticker;

mod decimal;

// Re-export the full typed surface at the crate root
pub use account::PrivateAccount;
pub use deal::{AggregatedDeals, Deal, PrivateDeals, PublicDeals};
pub use depth::{
    AggregatedDepths, DepthLevel, PublicIncreaseDepths, PublicIncreaseDepthsBatch,
    PublicLimitDepths,
};
pub use enums::{OrderStatus, OrderType, TradeSide};
pub use envelope::{PushBody, PushEnvelope};
pub use error::{TypeError, TypeResult};
pub use kind::PushKind;
pub use kline::PublicSpotKline;
pub use order::PrivateOrders;
pub use ticker::{
    AggregatedBookTicker, PublicBookTicker, PublicBookTickerBatch, PublicMiniTicker,
    PublicMiniTickers,
};
