/// Catalog-related errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown pricing segment: {0}")]
    UnknownSegment(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
