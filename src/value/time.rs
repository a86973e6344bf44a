//! Timestamp values (time crate).

use ::time::{OffsetDateTime, PrimitiveDateTime};

use super::Value;

impl From<PrimitiveDateTime> for Value {
    fn from(v: PrimitiveDateTime) -> Self {
        Value::PrimitiveDateTime(v)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(v: OffsetDateTime) -> Self {
        Value::OffsetDateTime(v)
    }
}
