use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DetailError {
    #[error("No product is currently shown")]
    NothingShown,
    #[error("Catalog lookup failed: {0}")]
    CatalogUnavailable(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
