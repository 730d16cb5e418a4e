//! Push body kind registry
//!
//! Every payload family the envelope can carry is identified by the wire
//! field number of its oneof slot. The registry drives body dispatch during
//! decoding and names kinds in diagnostics.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Body payload kinds keyed by their envelope field number
///
/// Field numbers 301-315 are reserved for the body oneof. Public kinds carry
/// market data fanned out to every subscriber of a symbol; private kinds
/// carry account-scoped order, fill, and balance events.
#[repr(u32)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
pub enum PushKind {
    PublicDeals = 301,
    PublicIncreaseDepths = 302,
    PublicLimitDepths = 303,
    PrivateOrders = 304,
    PublicBookTicker = 305,
    PrivateDeals = 306,
    PrivateAccount = 307,
    PublicSpotKline = 308,
    PublicMiniTicker = 309,
    PublicMiniTickers = 310,
    PublicBookTickerBatch = 311,
    PublicIncreaseDepthsBatch = 312,
    AggregatedDepths = 313,
    AggregatedDeals = 314,
    AggregatedBookTicker = 315,
}

impl PushKind {
    /// Human-readable kind name for diagnostics and logging
    pub fn name(&self) -> &'static str {
        match self {
            PushKind::PublicDeals => "PublicDeals",
            PushKind::PublicIncreaseDepths => "PublicIncreaseDepths",
            PushKind::PublicLimitDepths => "PublicLimitDepths",
            PushKind::PrivateOrders => "PrivateOrders",
            PushKind::PublicBookTicker => "PublicBookTicker",
            PushKind::PrivateDeals => "PrivateDeals",
            PushKind::PrivateAccount => "PrivateAccount",
            PushKind::PublicSpotKline => "PublicSpotKline",
            PushKind::PublicMiniTicker => "PublicMiniTicker",
            PushKind::PublicMiniTickers => "PublicMiniTickers",
            PushKind::PublicBookTickerBatch => "PublicBookTickerBatch",
            PushKind::PublicIncreaseDepthsBatch => "PublicIncreaseDepthsBatch",
            PushKind::AggregatedDepths => "AggregatedDepths",
            PushKind::AggregatedDeals => "AggregatedDeals",
            PushKind::AggregatedBookTicker => "AggregatedBookTicker",
        }
    }

    /// Envelope field number carrying this kind's payload
    pub fn field_number(&self) -> u32 {
        *self as u32
    }

    /// Resolve an envelope field number to a body kind
    ///
    /// Returns `None` for field numbers outside the body range. The decoder
    /// treats those as unknown fields and skips them.
    pub fn from_field_number(field_number: u32) -> Option<Self> {
        Self::try_from(field_number).ok()
    }

    /// True for account-scoped kinds that arrive on an authenticated stream
    pub fn is_private(&self) -> bool {
        matches!(
            self,
            PushKind::PrivateOrders | PushKind::PrivateDeals | PushKind::PrivateAccount
        )
    }

    /// All registered body kinds in field-number order
    pub fn all() -> [PushKind; 15] {
        [
            PushKind::PublicDeals,
            PushKind::PublicIncreaseDepths,
            PushKind::PublicLimitDepths,
            PushKind::PrivateOrders,
            PushKind::PublicBookTicker,
            PushKind::PrivateDeals,
            PushKind::PrivateAccount,
            PushKind::PublicSpotKline,
            PushKind::PublicMiniTicker,
            PushKind::PublicMiniTickers,
            PushKind::PublicBookTickerBatch,
            PushKind::PublicIncreaseDepthsBatch,
            PushKind::AggregatedDepths,
            PushKind::AggregatedDeals,
            PushKind::AggregatedBookTicker,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_field_number_mapping() {
        assert_eq!(PushKind::PublicDeals.field_number(), 301);
        assert_eq!(PushKind::AggregatedBookTicker.field_number(), 315);
        assert_eq!(PushKind::from_field_number(301), Some(PushKind::PublicDeals));
        assert_eq!(
            PushKind::from_field_number(306),
            Some(PushKind::PrivateDeals)
        );
    }

    #[test]
    fn test_unregistered_field_numbers() {
        assert_eq!(PushKind::from_field_number(0), None);
        assert_eq!(PushKind::from_field_number(300), None);
        assert_eq!(PushKind::from_field_number(316), None);
        assert_eq!(PushKind::from_field_number(1), None);
    }

    #[test]
    fn test_all_kinds_registered() {
        let kinds = PushKind::all();
        assert_eq!(kinds.len(), 15);
        for (index, kind) in kinds.iter().enumerate() {
            assert_eq!(kind.field_number(), 301 + index as u32);
            assert_eq!(PushKind::from_field_number(kind.field_number()), Some(*kind));
        }
    }

    #[test]
    fn test_private_kinds() {
        assert!(PushKind::PrivateOrders.is_private());
        assert!(PushKind::PrivateDeals.is_private());
        assert!(PushKind::PrivateAccount.is_private());
        assert!(!PushKind::PublicDeals.is_private());
        assert!(!PushKind::PublicSpotKline.is_private());
    }
}
