//! UUID values (uuid crate).

use super::Value;

impl From<::uuid::Uuid> for Value {
    fn from(v: ::uuid::Uuid) -> Self {
        Value::Uuid(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_value() {
        let id = ::uuid::Uuid::parse_str("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11").unwrap();
        assert_eq!(Value::from(id), Value::Uuid(id));
    }
}
