//! src/domain/customer_email.rs

/// The address notifications are sent to. Not validated: whatever the
/// caller provides is what gets printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    pub fn parse(s: String) -> CustomerEmail {
        Self(s)
    }
}

impl AsRef<str> for CustomerEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
