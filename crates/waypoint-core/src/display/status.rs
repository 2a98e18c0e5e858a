//! One-line status messages for edits that have no richer result to show.

use std::fmt;

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
    Failure,
}

/// A confirmation or error line, such as "Success: Removed day 2".
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Success,
        }
    }

    /// The operation went through but left something behind.
    pub fn warning(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Warning,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Failure,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            StatusLevel::Success => "Success:",
            StatusLevel::Warning => "Warning:",
            StatusLevel::Failure => "Error:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Added item 3 to day 1".to_string());
        assert_eq!(success.to_string(), "Success: Added item 3 to day 1\n");

        let warning = OperationStatus::warning("2 documents left behind".to_string());
        assert!(warning.to_string().starts_with("Warning:"));

        let failure = OperationStatus::failure("Day 9 does not exist".to_string());
        assert!(failure.to_string().starts_with("Error:"));
    }
}
