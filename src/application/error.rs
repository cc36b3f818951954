//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)           - Business rule violations
//! ├── Repository(RepositoryError)   - Storage failures
//! └── Validation(ValidationErrors)  - Form fields that failed their checks
//! ```
//!
//! # Examples
//!
//! ```
//! use website_quote::application::error::{
//!     ApplicationError, ValidationError, ValidationErrors, ValidationKind,
//! };
//!
//! let errors = ValidationErrors::from(vec![ValidationError::new(
//!     "email",
//!     ValidationKind::Required,
//!     "Email is required",
//! )]);
//! let err = ApplicationError::from(errors);
//! assert!(err.is_validation());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationKind {
    /// A required field was empty.
    Required,
    /// The email is not structurally valid.
    Email,
    /// The email domain is a known misspelling.
    EmailTypo,
    /// The email contains `..`.
    EmailConsecutiveDots,
    /// The phone number is not a valid regional mobile/landline number.
    Phone,
    /// The client name contains disallowed characters or padding.
    ClientName,
    /// The client name is too short or too long.
    ClientNameLength,
    /// A number fell below its minimum.
    Min,
}

impl ValidationKind {
    /// Returns the camelCase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::EmailTypo => "emailTypo",
            Self::EmailConsecutiveDots => "emailConsecutiveDots",
            Self::Phone => "phone",
            Self::ClientName => "clientName",
            Self::ClientNameLength => "clientNameLength",
            Self::Min => "min",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Machine-readable rule.
    pub kind: ValidationKind,
    /// Message suitable for display next to the field.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error.
    #[must_use]
    pub fn new(field: &'static str, kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

/// Every failed check of a form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Returns true if nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failed checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors reported for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.0.iter().filter(move |e| e.field == field)
    }

    /// Returns true if `field` has at least one error.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.for_field(field).next().is_some()
    }

    /// Iterates over all errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Converts into `Ok(())` when empty.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one check failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from business logic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Storage failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Submitted data failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),
}

impl ApplicationError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the validation errors, if this is a validation error.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
