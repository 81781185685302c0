/// Errors that can occur while reading or writing a report document.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to read existing report: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed existing report: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to write report: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ReportError {
    /// True for failures caused by the existing document rather than the destination.
    pub fn is_decode(&self) -> bool {
        matches!(self, ReportError::Read(_) | ReportError::Decode(_))
    }
}
