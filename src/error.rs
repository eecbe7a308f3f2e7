use std::process::ExitCode;

/// sysexits(3) `EX_CONFIG`
pub const EXIT_CONFIGURATION: u8 = 78;
/// sysexits(3) `EX_UNAVAILABLE`
pub const EXIT_CONNECTIVITY: u8 = 69;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("invalid database configuration: {0}")]
    Configuration(String),

    #[error("cannot connect to MySQL at {target}: {source}")]
    Connectivity {
        target: String,
        #[source]
        source: sqlx::Error,
    },
}

impl CheckError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Connectivity { .. } => "connectivity",
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Configuration(_) => ExitCode::from(EXIT_CONFIGURATION),
            Self::Connectivity { .. } => ExitCode::from(EXIT_CONNECTIVITY),
        }
    }
}

impl From<config::ConfigError> for CheckError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
