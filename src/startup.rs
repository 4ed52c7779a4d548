use std::io::Write;

use crate::config::{Configuration, OutputSettings};
use crate::domain::Customer;
use crate::mail::send_email::EmailClient;
use crate::process::{process_customer, ProcessError};

/// Everything needed for one run, assembled from configuration.
pub struct Application {
    customer: Customer,
    email_client: EmailClient,
    output: OutputSettings,
}

impl Application {
    pub fn build(configuration: Configuration) -> Self {
        let customer = Customer::from(configuration.customer);
        let email_client = EmailClient::new();

        tracing::info!(
            reveal_api_key = configuration.output.reveal_api_key,
            "Built {}",
            configuration.application.name,
        );

        Self {
            customer,
            email_client,
            output: configuration.output,
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Processes the configured customer into `out`, then flushes it.
    pub fn run<W: Write>(&self, mut out: W) -> Result<(), ProcessError> {
        process_customer(&self.customer, &self.email_client, &self.output, &mut out)?;
        out.flush().map_err(ProcessError::OutputError)?;

        tracing::info!("Customer processed");
        Ok(())
    }
}
