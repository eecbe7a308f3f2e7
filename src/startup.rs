use crate::configuration::DatabaseSettings;
use crate::error::CheckError;
use crate::health::{Connector, ConnectivityCheck, MySqlConnector, ProbeReport};

/// Checks that the configured MySQL server answers a ping.
///
/// Logs exactly one line with the outcome. Configuration problems are
/// reported before any connection is attempted.
pub async fn run(settings: &DatabaseSettings) -> Result<ProbeReport, CheckError> {
    let target = settings.redacted_target();

    let outcome = match settings.connect_options() {
        Ok(options) => run_with(MySqlConnector::new(options), target, settings).await,
        Err(err) => Err(err),
    };

    match &outcome {
        Ok(report) => tracing::info!(
            endpoint = %report.target,
            response_time_ms = report.response_time_ms,
            "Connected to MySQL"
        ),
        Err(err) => tracing::error!(
            kind = err.kind(),
            "MySQL connectivity check failed: {}",
            err
        ),
    }

    outcome
}

pub async fn run_with<C: Connector>(
    connector: C,
    target: String,
    settings: &DatabaseSettings,
) -> Result<ProbeReport, CheckError> {
    tracing::debug!(
        endpoint = %target,
        timeout_secs = settings.connect_timeout_secs,
        "Probing MySQL"
    );

    ConnectivityCheck::new(connector, target, settings.connect_timeout())
        .run()
        .await
}
