use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] equiscan_core::ValidationError),

    #[error(transparent)]
    Dashboard(#[from] equiscan_core::DashboardError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Dashboard(_) => 2,
            Self::Serialization(_) => 4,
        }
    }
}
