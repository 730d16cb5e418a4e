//! Account balance payload

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::parse_decimal;
use crate::error::TypeResult;

/// Balance change on the caller's account
///
/// Emitted whenever available or frozen funds move for one asset. The
/// change fields carry the delta that produced the new totals;
/// `change_type` names the venue operation that caused it (for example
/// `ENTRUST`, `WITHDRAW`, or `CONTRACT_TRANSFER`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateAccount {
    /// Asset name the change applies to
    pub vcoin_name: String,
    /// Venue-internal asset identifier
    pub coin_id: String,
    /// Available balance after the change
    pub balance_amount: String,
    /// Delta applied to the available balance
    pub balance_amount_change: String,
    /// Frozen balance after the change
    pub frozen_amount: String,
    /// Delta applied to the frozen balance
    pub frozen_amount_change: String,
    /// Venue operation that caused the change
    pub change_type: String,
    /// Change time in epoch milliseconds
    pub time: i64,
}

impl PrivateAccount {
    /// Available balance parsed as a decimal
    pub fn balance_amount_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PrivateAccount.balance_amount", &self.balance_amount)
    }

    /// Frozen balance parsed as a decimal
    pub fn frozen_amount_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal("PrivateAccount.frozen_amount", &self.frozen_amount)
    }

    /// Available balance delta parsed as a decimal
    pub fn balance_change_decimal(&self) -> TypeResult<Decimal> {
        parse_decimal(
            "PrivateAccount.balance_amount_change",
            &self.balance_amount_change,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_accessors() {
        let update = PrivateAccount {
            vcoin_name: "USDT".to_string(),
            balance_amount: "1250.75".to_string(),
            balance_amount_change: "-130".to_string(),
            frozen_amount: "130".to_string(),
            change_type: "ENTRUST".to_string(),
            time: 1700000000123,
            ..PrivateAccount::default()
        };

        assert_eq!(
            update.balance_amount_decimal().unwrap().to_string(),
            "1250.75"
        );
        assert!(update.balance_change_decimal().unwrap().is_sign_negative());
    }
}
