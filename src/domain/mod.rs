mod api_key;
mod customer;
mod customer_email;
mod customer_id;
mod customer_name;

pub use api_key::ApiKey;
pub use customer::{Customer, CustomerContact};
pub use customer_email::CustomerEmail;
pub use customer_id::CustomerId;
pub use customer_name::CustomerName;
