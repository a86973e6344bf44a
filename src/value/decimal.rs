//! Decimal values (rust_decimal crate).
//!
//! Decimals stay exact; they are never routed through a float.

use ::rust_decimal::Decimal;

use super::Value;

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}
