use std::path::PathBuf;

use once_cell::sync::Lazy;

use customer_notify::config::{get_configuration_from, Configuration, Environment};
use customer_notify::startup::Application;
use customer_notify::telemetry::{get_subscriber, init_subscriber};

pub const JOHN_DOE_OUTPUT: &str = "Processing John Doe with email customer@example.com\n\
    API Key: sk_live_abc123xyz789\n\
    Sending to customer@example.com for John Doe\n";

// Set `TEST_LOG` to see the logs of a test run.
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            "test".into(),
            "debug".into(),
            std::io::stdout,
        ))
        .expect("Failed to initialise telemetry");
    } else {
        init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink))
            .expect("Failed to initialise telemetry");
    }
});

pub struct TestApp {
    pub config: Configuration,
    pub app: Application,
}

impl TestApp {
    /// Runs the application once and returns everything it printed.
    pub fn run(&self) -> String {
        let mut out = Vec::new();
        self.app
            .run(&mut out)
            .expect("Failed to process the customer");
        String::from_utf8(out).expect("Output was not valid UTF-8")
    }
}

pub fn configuration_directory() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configuration")
}

pub fn spawn_app(environment: Environment) -> TestApp {
    Lazy::force(&TRACING);

    let config = get_configuration_from(&configuration_directory(), environment)
        .expect("Failed to load configuration");
    let app = Application::build(config.clone());

    TestApp { config, app }
}
