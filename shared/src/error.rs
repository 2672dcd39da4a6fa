use strum::{AsRefStr, Display};
use thiserror::Error;

/// Every way a submission can end without rendering results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Please select an image file")]
    NoFileSelected,
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("File is too large ({size} bytes, limit is {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("A detection request is already in progress")]
    AlreadySubmitting,
    #[error("Error: {0}")]
    Rejected(String),
    #[error("Error processing image: {0}")]
    Transport(String),
    #[error("Error processing image: {0}")]
    Parse(String),
    #[error("Request timed out after {secs}s")]
    TimedOut { secs: u64 },
    #[error("Request cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Input,
    Server,
    Transport,
    Timeout,
    Cancelled,
}

impl SubmitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmitError::NoFileSelected
            | SubmitError::UnsupportedFileType(_)
            | SubmitError::FileTooLarge { .. }
            | SubmitError::AlreadySubmitting => ErrorKind::Input,
            SubmitError::Rejected(_) => ErrorKind::Server,
            SubmitError::Transport(_) | SubmitError::Parse(_) => ErrorKind::Transport,
            SubmitError::TimedOut { .. } => ErrorKind::Timeout,
            SubmitError::Cancelled => ErrorKind::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_user_facing_text() {
        assert_eq!(SubmitError::NoFileSelected.to_string(), "Please select an image file");
        assert_eq!(
            SubmitError::Rejected("No file uploaded".into()).to_string(),
            "Error: No file uploaded"
        );
        assert_eq!(
            SubmitError::Transport("Failed to fetch".into()).to_string(),
            "Error processing image: Failed to fetch"
        );
        assert_eq!(SubmitError::TimedOut { secs: 30 }.to_string(), "Request timed out after 30s");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(SubmitError::AlreadySubmitting.kind(), ErrorKind::Input);
        assert_eq!(SubmitError::Parse("eof".into()).kind(), ErrorKind::Transport);
        assert_eq!(SubmitError::Cancelled.kind(), ErrorKind::Cancelled);
        assert_eq!(SubmitError::FileTooLarge { size: 2, limit: 1 }.kind(), ErrorKind::Input);
        assert_eq!(SubmitError::TimedOut { secs: 1 }.kind(), ErrorKind::Timeout);
        assert_eq!(ErrorKind::Timeout.as_ref(), "timeout");
    }
}
