//! src/domain/customer.rs

use crate::config::CustomerSettings;
use crate::domain::api_key::ApiKey;
use crate::domain::customer_email::CustomerEmail;
use crate::domain::customer_id::CustomerId;
use crate::domain::customer_name::CustomerName;

/// What the processing routine needs to know about whoever it is handling.
///
/// `Customer` is the usual implementor, but anything that can hand out an
/// email, a name and an API key can be processed.
pub trait CustomerContact {
    fn email(&self) -> &CustomerEmail;
    fn customer_name(&self) -> &CustomerName;
    fn api_key(&self) -> &ApiKey;
}

/// A customer record. Fields are stored verbatim and never change after
/// construction.
#[derive(Debug, Clone)]
pub struct Customer {
    customer_id: CustomerId,
    email: CustomerEmail,
    customer_name: CustomerName,
    api_key: ApiKey,
}

impl Customer {
    pub fn new(customer_id: String, email: String, customer_name: String, api_key: String) -> Self {
        Self {
            customer_id: CustomerId::parse(customer_id),
            email: CustomerEmail::parse(email),
            customer_name: CustomerName::parse(customer_name),
            api_key: ApiKey::parse(api_key),
        }
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }
}

impl CustomerContact for Customer {
    fn email(&self) -> &CustomerEmail {
        &self.email
    }

    fn customer_name(&self) -> &CustomerName {
        &self.customer_name
    }

    fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

impl From<CustomerSettings> for Customer {
    fn from(settings: CustomerSettings) -> Self {
        Self {
            customer_id: CustomerId::parse(settings.customer_id),
            email: CustomerEmail::parse(settings.email),
            customer_name: CustomerName::parse(settings.customer_name),
            api_key: ApiKey::from(settings.api_key),
        }
    }
}
