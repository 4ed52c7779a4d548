//! src/domain/api_key.rs

use secrecy::{ExposeSecret, Secret};

/// The customer's API key. `Debug` output is redacted; reading the value
/// requires going through `ExposeSecret`.
#[derive(Debug, Clone)]
pub struct ApiKey(Secret<String>);

impl ApiKey {
    pub fn parse(s: String) -> ApiKey {
        Self(Secret::new(s))
    }
}

impl From<Secret<String>> for ApiKey {
    fn from(secret: Secret<String>) -> Self {
        Self(secret)
    }
}

impl ExposeSecret<String> for ApiKey {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::ApiKey;

    #[test]
    fn debug_output_does_not_leak_the_key() {
        let api_key = ApiKey::parse("sk_live_abc123xyz789".into());
        let debug = format!("{:?}", api_key);
        assert!(!debug.contains("sk_live_abc123xyz789"));
    }

    #[test]
    fn exposed_key_is_unchanged() {
        let api_key = ApiKey::parse("sk_live_abc123xyz789".into());
        assert_eq!(api_key.expose_secret(), "sk_live_abc123xyz789");
    }
}
