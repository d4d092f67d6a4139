use thiserror::Error;

/// Errors of the reaction order calculators, the sampler and the output collaborators
#[derive(Error, Debug)]
pub enum KineticsError {
    /// menu choice outside of the known reaction orders
    #[error("Invalid choice: {0}")]
    InvalidSelection(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// second order denominator 1/C0_A + k*t is zero or not finite
    #[error("Domain error at t = {t}: {reason}")]
    DomainError { t: f64, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings parsing error: {0}")]
    Config(#[from] serde_json::Error),
}
