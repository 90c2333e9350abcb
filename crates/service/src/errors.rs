use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("customer with id {0} not found")]
    NotFound(String),
    #[error("customer with id {0} already exists")]
    AlreadyExists(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(id: &str) -> Self { Self::NotFound(id.to_string()) }
    pub fn already_exists(id: &str) -> Self { Self::AlreadyExists(id.to_string()) }
}
