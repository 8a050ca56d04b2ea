use crate::application::errors::{UploadError, UNSUPPORTED_FILE_TYPE_MESSAGE};

/// Metadata the host supplies for a file before its bytes are persisted.
///
/// Both fields come from the uploading client and are untrusted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileInfo {
    pub name: String,
    pub mime_type: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Outcome of an upload check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDecision {
    /// The candidate, unchanged, when accepted
    pub file: Option<FileInfo>,
    /// Empty when accepted
    pub rejection_message: String,
}

impl UploadDecision {
    pub fn accept(file: FileInfo) -> Self {
        Self {
            file: Some(file),
            rejection_message: String::new(),
        }
    }

    pub fn reject() -> Self {
        Self {
            file: None,
            rejection_message: UNSUPPORTED_FILE_TYPE_MESSAGE.to_string(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.file.is_some()
    }

    /// Convert into a `Result` for callers that prefer `?`.
    pub fn into_result(self) -> Result<FileInfo, UploadError> {
        self.file.ok_or(UploadError::UnsupportedFileType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_decision_keeps_file_and_empty_message() {
        let file = FileInfo::new("a.png", "image/png");
        let decision = UploadDecision::accept(file.clone());
        assert!(decision.is_accepted());
        assert!(decision.rejection_message.is_empty());
        assert_eq!(decision.into_result(), Ok(file));
    }

    #[test]
    fn rejected_decision_maps_to_unsupported_file_type() {
        let decision = UploadDecision::reject();
        assert!(!decision.is_accepted());
        assert_eq!(decision.rejection_message, UNSUPPORTED_FILE_TYPE_MESSAGE);
        assert_eq!(decision.into_result(), Err(UploadError::UnsupportedFileType));
    }
}
