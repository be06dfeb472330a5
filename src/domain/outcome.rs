//! Tagged result of a shorten or inflate operation.

use std::fmt;

/// Status class of an [`OperationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationStatus {
    Success,
    InvalidInput,
    NotFound,
}

impl OperationStatus {
    /// Label used for log fields and metric dimensions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a shortener operation.
///
/// A success carries the resulting URL as its message, an invalid input
/// carries a human readable reason, and a not-found carries nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub status: OperationStatus,
    pub message: Option<String>,
}

impl OperationResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: OperationStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            status: OperationStatus::InvalidInput,
            message: Some(message.into()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: OperationStatus::NotFound,
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }
}
