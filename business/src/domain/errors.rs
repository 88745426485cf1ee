/// Asset provider errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("source.not_found")]
    NotFound,
    #[error("source.unreadable")]
    Unreadable,
}

impl SourceError {
    pub fn not_found() -> Self {
        SourceError::NotFound
    }
    pub fn unreadable() -> Self {
        SourceError::Unreadable
    }
}

/// Reasons a catalog document cannot become a snapshot.
///
/// These never leave the loader: every variant is recovered by serving the
/// fallback snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.source: {0}")]
    Source(#[from] SourceError),
    #[error("catalog.malformed: {0}")]
    Malformed(String),
    #[error("catalog.status: {0}")]
    Status(String),
    #[error("catalog.empty")]
    Empty,
    #[error("catalog.invalid: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Malformed(err.to_string())
    }
}
