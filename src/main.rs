use anyhow::Context;
use customer_notify::config::get_configuration;
use customer_notify::startup::Application;
use customer_notify::telemetry::{get_subscriber, init_subscriber};

fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to load configuration")?;

    init_subscriber(get_subscriber(
        configuration.application.name.clone(),
        configuration.application.log_level.clone(),
        std::io::stderr,
    ))?;

    let application = Application::build(configuration);
    application
        .run(std::io::stdout().lock())
        .context("Failed to process customer")?;

    Ok(())
}
