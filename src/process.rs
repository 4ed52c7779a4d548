use std::fmt::Formatter;
use std::io::Write;

use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::config::OutputSettings;
use crate::domain::{ApiKey, CustomerContact};
use crate::mail::send_email::{EmailClient, SendEmailError};
use crate::utils::error_helpers::error_chain_fmt;

pub const REDACTED_API_KEY: &str = "[REDACTED]";

#[derive(thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to write customer details")]
    OutputError(#[source] std::io::Error),

    #[error(transparent)]
    EmailError(#[from] SendEmailError),
}

impl std::fmt::Debug for ProcessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn render_api_key<'a>(api_key: &'a ApiKey, output: &OutputSettings) -> &'a str {
    if output.reveal_api_key {
        api_key.expose_secret().as_str()
    } else {
        REDACTED_API_KEY
    }
}

/// Prints the customer's details and notifies them by email.
///
/// Writes exactly three lines to `out`: the processing line, the API key
/// line and the notification line produced by `email_client`. The customer
/// id, if any, is never part of the output.
#[tracing::instrument(
    name = "Processing customer",
    skip(customer, email_client, output, out),
    fields(
        run_id = %Uuid::new_v4(),
        customer_email = %customer.email().as_ref(),
        customer_name = %customer.customer_name().as_ref(),
    )
)]
pub fn process_customer<C, W>(
    customer: &C,
    email_client: &EmailClient,
    output: &OutputSettings,
    out: &mut W,
) -> Result<(), ProcessError>
where
    C: CustomerContact + ?Sized,
    W: Write + ?Sized,
{
    let customer_email = customer.email();
    let api_key = customer.api_key();
    let customer_name = customer.customer_name();

    writeln!(
        out,
        "Processing {} with email {}",
        customer_name.as_ref(),
        customer_email.as_ref()
    )
    .map_err(ProcessError::OutputError)?;
    writeln!(out, "API Key: {}", render_api_key(api_key, output))
        .map_err(ProcessError::OutputError)?;

    email_client.send_email(out, customer_email, customer_name)?;

    Ok(())
}
