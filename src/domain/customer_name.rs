//! src/domain/customer_name.rs

/// A customer's display name, kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn parse(s: String) -> CustomerName {
        Self(s)
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
