/// Product catalog (entity source) errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse catalog: {reason}")]
    ParseFailed { reason: String },

    #[error("duplicate product id in catalog: {id}")]
    DuplicateId { id: String },

    #[error("product not found: {id}")]
    NotFound { id: String },
}
