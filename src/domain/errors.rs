use thiserror::Error;

/// Closed failure taxonomy for the service layer. Every failure is raised at
/// the point of detection and propagates unhandled to the HTTP boundary, which
/// translates it to a status code and a structured body.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Error: customer with id {0} not found in the database")]
    CustomerNotFound(i64),
    #[error("Error: customer with name {0} not found in the database")]
    CustomerByNameNotFound(String),
    #[error("Error: email with id {0} not found in the database")]
    EmailNotFound(i64),
    #[error("Error: phone with id {0} not found in the database")]
    PhoneNotFound(i64),
    #[error("Error: customer id must not be null")]
    CustomerIdMissing,
    #[error("Error: contact type {0} is wrong, it must be email or phone")]
    ContactTypeInvalid(String),
    #[error("Error: email address {0} is in the database already and belongs to another customer")]
    EmailAlreadyOwned(String),
    #[error("Error: phone number {0} is in the database already and belongs to another customer")]
    PhoneAlreadyOwned(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
