use crate::config::ClientConfig;
use crate::error::SubmitError;

/// What the client knows about a picked file before uploading it.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCandidate {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Lowercased extension, if the name has one.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

pub fn validate_upload(candidate: &UploadCandidate, config: &ClientConfig) -> Result<(), SubmitError> {
    let allowed = candidate
        .extension()
        .map(|ext| config.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(&ext)))
        .unwrap_or(false);
    if !allowed {
        return Err(SubmitError::UnsupportedFileType(candidate.name.clone()));
    }

    if candidate.size > config.max_upload_bytes {
        return Err(SubmitError::FileTooLarge {
            size: candidate.size,
            limit: config.max_upload_bytes,
        });
    }

    Ok(())
}
