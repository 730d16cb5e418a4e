//! Chained envelope construction
//!
//! [`EnvelopeBuilder`] assembles a [`PushEnvelope`] field by field and
//! hands it off fully formed. Oneof exclusivity needs no runtime check
//! here: the body slot holds a [`PushBody`], so a second payload replaces
//! the first instead of coexisting with it, and an envelope carrying two
//! bodies cannot be built at all.

use types::{PushBody, PushEnvelope};

use crate::encode_envelope;

/// Builder for push envelopes
///
/// ```rust
/// use codec::EnvelopeBuilder;
/// use types::{Deal, PublicDeals, PushBody};
///
/// let frame = EnvelopeBuilder::new("spot@public.deals.v3.api@BTCUSDT")
///     .symbol("BTCUSDT")
///     .send_time(1700000000123)
///     .body(PushBody::PublicDeals(PublicDeals {
///         deals: vec![Deal {
///             price: "65000.1".to_string(),
///             quantity: "0.002".to_string(),
///             trade_type: 1,
///             time: 1700000000000,
///         }],
///         event_type: String::new(),
///     }))
///     .encode();
/// assert!(!frame.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct EnvelopeBuilder {
    envelope: PushEnvelope,
}

impl EnvelopeBuilder {
    /// Start an envelope for the given subscription channel
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            envelope: PushEnvelope {
                channel: channel.into(),
                ..PushEnvelope::default()
            },
        }
    }

    /// Set the trading symbol
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.envelope.symbol = Some(symbol.into());
        self
    }

    /// Set the venue-internal symbol identifier
    pub fn symbol_id(mut self, symbol_id: impl Into<String>) -> Self {
        self.envelope.symbol_id = Some(symbol_id.into());
        self
    }

    /// Set the venue-side creation time in epoch milliseconds
    pub fn create_time(mut self, millis: i64) -> Self {
        self.envelope.create_time = Some(millis);
        self
    }

    /// Set the venue-side send time in epoch milliseconds
    pub fn send_time(mut self, millis: i64) -> Self {
        self.envelope.send_time = Some(millis);
        self
    }

    /// Set the payload; a later call replaces an earlier one
    pub fn body(mut self, body: PushBody) -> Self {
        self.envelope.body = Some(body);
        self
    }

    /// Finish building the typed envelope
    pub fn build(self) -> PushEnvelope {
        self.envelope
    }

    /// Finish building and encode to wire bytes
    pub fn encode(self) -> Vec<u8> {
        encode_envelope(&self.envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_envelope;
    use types::{PublicBookTicker, PushKind};

    #[test]
    fn test_builder_sets_all_metadata() {
        let envelope = EnvelopeBuilder::new("spot@public.bookTicker.v3.api@BTCUSDT")
            .symbol("BTCUSDT")
            .symbol_id("2fb8869f8afd4fd3b32e7a8ba746eb84")
            .create_time(1700000000100)
            .send_time(1700000000123)
            .build();

        assert_eq!(envelope.channel, "spot@public.bookTicker.v3.api@BTCUSDT");
        assert_eq!(envelope.symbol.as_deref(), Some("BTCUSDT"));
        assert_eq!(envelope.create_time, Some(1700000000100));
        assert_eq!(envelope.send_time, Some(1700000000123));
        assert_eq!(envelope.body, None);
    }

    #[test]
    fn test_later_body_replaces_earlier() {
        let envelope = EnvelopeBuilder::new("ch")
            .body(PushBody::PublicBookTicker(PublicBookTicker::default()))
            .body(PushBody::PublicDeals(types::PublicDeals::default()))
            .build();

        // Exactly one body survives; the sum type cannot hold both
        assert_eq!(envelope.body_kind(), Some(PushKind::PublicDeals));
    }

    #[test]
    fn test_builder_encode_decodes_back() {
        let bytes = EnvelopeBuilder::new("spot@public.bookTicker.v3.api@BTCUSDT")
            .symbol("BTCUSDT")
            .body(PushBody::PublicBookTicker(PublicBookTicker {
                bid_price: "64999.9".to_string(),
                bid_quantity: "0.8".to_string(),
                ask_price: "65000.1".to_string(),
                ask_quantity: "1.2".to_string(),
            }))
            .encode();

        let envelope = decode_envelope(&bytes).unwrap();
        assert_eq!(envelope.body_kind(), Some(PushKind::PublicBookTicker));
        assert_eq!(envelope.symbol.as_deref(), Some("BTCUSDT"));
    }
}
