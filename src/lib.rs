pub mod config;
pub mod domain;
pub mod mail;
pub mod process;
pub mod startup;
pub mod telemetry;
pub mod utils;
