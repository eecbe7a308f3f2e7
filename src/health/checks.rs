use super::models::{CheckState, ProbeReport};
use crate::error::CheckError;
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use std::future::Future;
use std::io;
use std::time::{Duration, Instant};
use tokio::time::timeout;

/// Opens one handle to the database.
#[async_trait]
pub trait Connector: Send + Sync {
    type Handle: DatabaseHandle;

    async fn open(&self) -> Result<Self::Handle, sqlx::Error>;
}

#[async_trait]
pub trait DatabaseHandle: Send {
    /// Round trip that does no application work.
    async fn ping(&mut self) -> Result<(), sqlx::Error>;

    async fn close(self) -> Result<(), sqlx::Error>;
}

pub struct MySqlConnector {
    options: MySqlConnectOptions,
}

impl MySqlConnector {
    pub fn new(options: MySqlConnectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    type Handle = MySqlConnection;

    async fn open(&self) -> Result<MySqlConnection, sqlx::Error> {
        MySqlConnection::connect_with(&self.options).await
    }
}

#[async_trait]
impl DatabaseHandle for MySqlConnection {
    async fn ping(&mut self) -> Result<(), sqlx::Error> {
        Connection::ping(self).await
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        Connection::close(self).await
    }
}

/// One-shot liveness check against a single endpoint.
pub struct ConnectivityCheck<C> {
    connector: C,
    target: String,
    timeout: Duration,
    state: CheckState,
}

impl<C: Connector> ConnectivityCheck<C> {
    pub fn new(connector: C, target: String, timeout: Duration) -> Self {
        Self {
            connector,
            target,
            timeout,
            state: CheckState::Unconnected,
        }
    }

    pub fn state(&self) -> CheckState {
        self.state
    }

    fn transition(&mut self, next: CheckState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        tracing::debug!(endpoint = %self.target, from = %self.state, to = %next, "check state changed");
        self.state = next;
    }

    /// Opens a handle, pings it and releases it again.
    ///
    /// Opening and pinging are each bounded by the timeout. The handle is
    /// closed whether the ping succeeds, fails or times out. When opening
    /// fails there is nothing to release.
    #[tracing::instrument(name = "Check MySQL connectivity", level = "debug", skip(self), fields(endpoint = %self.target))]
    pub async fn run(mut self) -> Result<ProbeReport, CheckError> {
        self.transition(CheckState::Probing);
        let start = Instant::now();

        match self.probe().await {
            Ok(()) => {
                self.transition(CheckState::Connected);
                let elapsed = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                Ok(ProbeReport::connected(self.target, elapsed))
            }
            Err(source) => {
                self.transition(CheckState::Failed);
                Err(CheckError::Connectivity {
                    target: self.target,
                    source,
                })
            }
        }
    }

    async fn probe(&self) -> Result<(), sqlx::Error> {
        let mut handle = self.bounded(self.connector.open()).await?;
        tracing::debug!("database handle opened");

        let pinged = self.bounded(handle.ping()).await;

        match timeout(self.timeout, handle.close()).await {
            Ok(Ok(())) => tracing::debug!("database handle released"),
            // the socket is dropped with the handle either way
            Ok(Err(err)) => tracing::warn!(error = %err, "closing database handle failed"),
            Err(_) => tracing::warn!("closing database handle timed out"),
        }

        pinged
    }

    async fn bounded<T>(
        &self,
        step: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, sqlx::Error> {
        match timeout(self.timeout, step).await {
            Ok(result) => result,
            Err(_) => Err(sqlx::Error::Io(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("no answer within {}s", self.timeout.as_secs_f32()),
            ))),
        }
    }
}
