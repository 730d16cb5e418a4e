//! Push envelope and body union
//!
//! Every frame on the push stream is one envelope: routing metadata plus at
//! most one payload. The body is a real sum type, so an envelope carrying
//! two payloads at once is unrepresentable in memory; the codec enforces
//! the same exclusivity on the wire.

use serde::{Deserialize, Serialize};

use crate::account::PrivateAccount;
use crate::deal::{AggregatedDeals, Deal, PrivateDeals, PublicDeals};
use crate::depth::{AggregatedDepths, PublicIncreaseDepths, PublicIncreaseDepthsBatch, PublicLimitDepths};
use crate::kind::PushKind;
use crate::kline::PublicSpotKline;
use crate::order::PrivateOrders;
use crate::ticker::{
    AggregatedBookTicker, PublicBookTicker, PublicBookTickerBatch, PublicMiniTicker,
    PublicMiniTickers,
};

/// Exactly one push payload
///
/// Variants map one-to-one onto [`PushKind`] and onto the envelope's body
/// field numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PushBody {
    PublicDeals(PublicDeals),
    PublicIncreaseDepths(PublicIncreaseDepths),
    PublicLimitDepths(PublicLimitDepths),
    PrivateOrders(PrivateOrders),
    PublicBookTicker(PublicBookTicker),
    PrivateDeals(PrivateDeals),
    PrivateAccount(PrivateAccount),
    PublicSpotKline(PublicSpotKline),
    PublicMiniTicker(PublicMiniTicker),
    PublicMiniTickers(PublicMiniTickers),
    PublicBookTickerBatch(PublicBookTickerBatch),
    PublicIncreaseDepthsBatch(PublicIncreaseDepthsBatch),
    AggregatedDepths(AggregatedDepths),
    AggregatedDeals(AggregatedDeals),
    AggregatedBookTicker(AggregatedBookTicker),
}

impl PushBody {
    /// Registry kind of the carried payload
    pub fn kind(&self) -> PushKind {
        match self {
            PushBody::PublicDeals(_) => PushKind::PublicDeals,
            PushBody::PublicIncreaseDepths(_) => PushKind::PublicIncreaseDepths,
            PushBody::PublicLimitDepths(_) => PushKind::PublicLimitDepths,
            PushBody::PrivateOrders(_) => PushKind::PrivateOrders,
            PushBody::PublicBookTicker(_) => PushKind::PublicBookTicker,
            PushBody::PrivateDeals(_) => PushKind::PrivateDeals,
            PushBody::PrivateAccount(_) => PushKind::PrivateAccount,
            PushBody::PublicSpotKline(_) => PushKind::PublicSpotKline,
            PushBody::PublicMiniTicker(_) => PushKind::PublicMiniTicker,
            PushBody::PublicMiniTickers(_) => PushKind::PublicMiniTickers,
            PushBody::PublicBookTickerBatch(_) => PushKind::PublicBookTickerBatch,
            PushBody::PublicIncreaseDepthsBatch(_) => PushKind::PublicIncreaseDepthsBatch,
            PushBody::AggregatedDepths(_) => PushKind::AggregatedDepths,
            PushBody::AggregatedDeals(_) => PushKind::AggregatedDeals,
            PushBody::AggregatedBookTicker(_) => PushKind::AggregatedBookTicker,
        }
    }
}

/// One frame of the push stream
///
/// `channel` names the subscription the frame answers and is always
/// present on real feeds (an absent channel decodes as an empty string).
/// The remaining metadata is optional and independent: absent fields stay
/// `None` and are distinguishable from present-but-default values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushEnvelope {
    /// Subscription channel the frame answers
    pub channel: String,
    /// Trading symbol the payload refers to
    pub symbol: Option<String>,
    /// Venue-internal symbol identifier
    pub symbol_id: Option<String>,
    /// Venue-side creation time in epoch milliseconds
    pub create_time: Option<i64>,
    /// Venue-side send time in epoch milliseconds
    pub send_time: Option<i64>,
    /// Carried payload, absent for bare metadata frames
    pub body: Option<PushBody>,
}

impl PushEnvelope {
    /// Registry kind of the carried payload, if any
    pub fn body_kind(&self) -> Option<PushKind> {
        self.body.as_ref().map(PushBody::kind)
    }

    /// True when the payload is account-scoped
    pub fn is_private(&self) -> bool {
        self.body_kind().is_some_and(|kind| kind.is_private())
    }

    /// Trade prints payload, if that is what the envelope carries
    pub fn as_public_deals(&self) -> Option<&[Deal]> {
        match &self.body {
            Some(PushBody::PublicDeals(payload)) => Some(&payload.deals),
            _ => None,
        }
    }
}
