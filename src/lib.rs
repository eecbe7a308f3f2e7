pub mod configuration;
pub mod error;
pub mod health;
pub mod models;
pub mod startup;
pub mod telemetry;
