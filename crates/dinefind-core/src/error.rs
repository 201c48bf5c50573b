use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown city \"{0}\" (expected one of: All, Chhindwara, Mumbai, Pune, Bangalore, Delhi)")]
    UnknownCity(String),

    #[error("page size must be greater than zero")]
    InvalidPageSize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
