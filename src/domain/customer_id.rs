//! src/domain/customer_id.rs

/// Opaque customer identifier. Usually UUID shaped, never checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn parse(s: String) -> CustomerId {
        Self(s)
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
