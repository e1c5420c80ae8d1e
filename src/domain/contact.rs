use crate::domain::errors::DomainError;

/// A persisted contact record. Emails and phones share this shape; the kind is
/// carried by the repository the record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub customer_id: i64,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub customer_id: i64,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
}

impl ContactKind {
    /// Parses the `type` request parameter, case-insensitively. Resolved once
    /// at the HTTP boundary; services only ever see the enum.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            _ => Err(DomainError::ContactTypeInvalid(raw.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    pub fn not_found(self, id: i64) -> DomainError {
        match self {
            Self::Email => DomainError::EmailNotFound(id),
            Self::Phone => DomainError::PhoneNotFound(id),
        }
    }

    pub fn already_owned(self, value: &str) -> DomainError {
        match self {
            Self::Email => DomainError::EmailAlreadyOwned(value.to_string()),
            Self::Phone => DomainError::PhoneAlreadyOwned(value.to_string()),
        }
    }
}
