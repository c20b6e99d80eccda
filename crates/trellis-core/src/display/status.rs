//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::flow::Notice;

/// Wrapper type for displaying operation confirmation messages.
///
/// This provides consistent formatting for operations that require
/// user confirmation or status updates.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl From<&Notice> for OperationStatus {
    fn from(notice: &Notice) -> Self {
        match notice {
            Notice::Info(message) | Notice::Success(message) => Self::success(message.clone()),
            Notice::Error(message) => Self::failure(message.clone()),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Plan created".to_string());
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Submission failed".to_string());
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_notice_conversion() {
        let error = OperationStatus::from(&Notice::Error("bad".to_string()));
        assert!(!error.success);

        let done = OperationStatus::from(&Notice::Success("done".to_string()));
        assert!(done.success);
        assert_eq!(done.message, "done");
    }
}
