mod checks;
mod models;

pub use checks::{Connector, ConnectivityCheck, DatabaseHandle, MySqlConnector};
pub use models::{CheckState, ProbeReport};
