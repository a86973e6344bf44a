//! Bound parameter values.
//!
//! Values are carried opaquely from the pending statement to the merged
//! statement. The batcher never inspects or converts them; it only moves them
//! under a new placeholder name.

#[cfg(feature = "with-chrono")]
mod chrono;
#[cfg(feature = "with-rust-decimal")]
mod decimal;
#[cfg(feature = "with-time")]
mod time;
#[cfg(feature = "with-uuid")]
mod uuid;

/// A parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Bytes(Vec<u8>),
    #[cfg(feature = "with-uuid")]
    Uuid(::uuid::Uuid),
    #[cfg(feature = "with-chrono")]
    NaiveDateTime(::chrono::NaiveDateTime),
    #[cfg(feature = "with-chrono")]
    DateTimeUtc(::chrono::DateTime<::chrono::Utc>),
    #[cfg(feature = "with-time")]
    PrimitiveDateTime(::time::PrimitiveDateTime),
    #[cfg(feature = "with-time")]
    OffsetDateTime(::time::OffsetDateTime),
    #[cfg(feature = "with-rust-decimal")]
    Decimal(::rust_decimal::Decimal),
}

impl Value {
    /// Returns true for SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    String => Text,
    Vec<u8> => Bytes,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Parameter direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Input,
    Output,
    InputOutput,
    ReturnValue,
}

/// A named bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Placeholder name including its sigil, e.g. `:name`, `@id` or `$1`
    pub name: String,
    pub value: Value,
    pub direction: Direction,
    /// Server type id supplied by the caller, passed through untouched
    /// (`None` lets the server infer it)
    pub type_oid: Option<u32>,
}

impl Param {
    /// Create an input parameter with no explicit type.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            direction: Direction::Input,
            type_oid: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_type_oid(mut self, type_oid: u32) -> Self {
        self.type_oid = Some(type_oid);
        self
    }

    /// Copy value, direction and type under a new name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: self.value.clone(),
            direction: self.direction,
            type_oid: self.type_oid,
        }
    }
}
