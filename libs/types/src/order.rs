//! Order lifecycle payload

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::parse_decimal;
use crate::enums::{OrderStatus, OrderType, TradeSide};
use crate::error::{TypeError, TypeResult};

/// State change for one of the caller's orders
///
/// Covers the whole lifecycle: placement, partial and full fills,
/// cancellation, and trigger-order activation. Remaining amounts track the
/// unfilled part of the order; the trigger fields are populated only for
/// stop orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateOrders {
    /// Venue order identifier
    pub id: String,
    /// Client order identifier supplied at placement, if any
    pub client_id: String,
    /// Limit price as a decimal string
    pub price: String,
    /// Ordered base quantity as a decimal string
    pub quantity: String,
    /// Ordered quote amount as a decimal string
    pub amount: String,
    /// Average fill price so far
    pub avg_price: String,
    /// Order execution type discriminant
    pub order_type: i32,
    /// Order side discriminant (1 = buy, 2 = sell)
    pub trade_type: i32,
    /// True when the latest fill rested on the book
    pub is_maker: bool,
    /// Unfilled quote amount
    pub remain_amount: String,
    /// Unfilled base quantity
    pub remain_quantity: String,
    /// Base quantity of the latest fill
    pub last_deal_quantity: String,
    /// Order lifecycle status discriminant
    pub status: i32,
    /// Placement time in epoch milliseconds
    pub create_time: i64,
    /// Market the order was placed on
    pub market: String,
    /// Trigger direction discriminant for stop orders
    pub trigger_type: i32,
    /// Trigger price for stop orders
    pub trigger_price: String,
    /// Venue-internal order state discriminant
    pub state: i32,
    /// One-cancels-other group identifier, if any
    pub oco_id: String,
    /// Fee routing factor applied to the order
    pub route_factor: String,
    /// Venue-internal symbol identifier
    pub symbol_id: String,
    /// Venue-internal market identifier
    pub market_id: String,
    /// Venue-internal quote currency identifier
    pub market_currency_id: String,
    /// Venue-internal base currency identifier
    pub currency_id: String,
}

impl PrivateOrders {
    /// Limit price parsed as a decimal
    pub fn price_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PrivateOrders.price", &self.price)
    }

    /// Ordered quantity parsed as a decimal
    pub fn quantity_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PrivateOrders.quantity", &self.quantity)
    }

    /// Unfilled quantity parsed as a decimal
    pub fn remain_quantity_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PrivateOrders.remain_quantity", &self.remain_quantity)
    }

    /// Order side as a typed enum
    pub fn side(&self) -> TypeResult<TradeSide> {
        TradeSide::try_from(self.trade_type)
            .map_err(|_| TypeError::unknown_discriminant("TradeSide", self.trade_type))
    }

    /// Execution type as a typed enum
    pub fn execution_type(&self) -> TypeResult<OrderType> {
        OrderType::try_from(self.order_type)
            .map_err(|_| TypeError::unknown_discriminant("OrderType", self.order_type))
    }

    /// Lifecycle status as a typed enum
    pub fn lifecycle_status(&self) -> TypeResult<OrderStatus> {
        OrderStatus::try_from(self.status)
            .map_err(|_| TypeError::unknown_discriminant("OrderStatus", self.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_typed_accessors() {
        let order = PrivateOrders {
            id: "C02__443776928827175424".to_string(),
            price: "65000".to_string(),
            quantity: "0.01".to_string(),
            order_type: 1,
            trade_type: 1,
            status: 3,
            remain_quantity: "0.004".to_string(),
            ..PrivateOrders::default()
        };

        assert_eq!(order.side().unwrap(), TradeSide::Buy);
        assert_eq!(order.execution_type().unwrap(), OrderType::LimitOrder);
        assert_eq!(
            order.lifecycle_status().unwrap(),
            OrderStatus::PartiallyFilled
        );
        assert_eq!(order.remain_quantity_decimal().unwrap().to_string(), "0.004");
    }

    #[test]
    fn test_order_unknown_status() {
        let order = PrivateOrders {
            status: 42,
            ..PrivateOrders::default()
        };

        assert!(matches!(
            order.lifecycle_status(),
            Err(TypeError::UnknownDiscriminant {
                enum_name: "OrderStatus",
                value: 42,
            })
        ));
    }
}
