//! Decimal string parsing shared by typed accessors

use crate::error::{TypeError, TypeResult};
use rust_decimal::Decimal;

/// Parse a decimal-formatted wire string into a `Decimal`
///
/// The feed carries prices, quantities, and balances as decimal strings to
/// preserve venue precision. `field` names the originating field in errors.
pub(crate) fn parse_decimal(field: &'static str, value: &str) -> TypeResult<Decimal> {
    value
        .parse()
        .map_err(|_| TypeError::malformed_decimal(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_valid() {
        let value = parse_decimal("test.price", "65000.1").unwrap();
        assert_eq!(value.to_string(), "65000.1");

        let zero = parse_decimal("test.price", "0").unwrap();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_parse_decimal_malformed() {
        let err = parse_decimal("test.price", "not-a-number").unwrap_err();
        assert_eq!(
            err,
            TypeError::MalformedDecimal {
                field: "test.price",
                value: "not-a-number".to_string(),
            }
        );
    }
}
