//! Error types for power-calc
//!
//! Computation outcomes are reported through [`crate::CalcStatus`], never
//! through this type. `CalcError` only covers setup concerns such as loading
//! configuration or exporting history.

use thiserror::Error;

/// Setup and export errors
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CalcError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
