pub mod auth;
pub mod configuration;
pub mod connectors;
pub mod helpers;
pub mod session;
pub mod telemetry;
