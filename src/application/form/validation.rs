//! # Form Validation
//!
//! Field-level checks for the quote form.
//!
//! Every format check accepts the empty string; emptiness is reported only by
//! the required check, so a blank field yields a single "required" error.
//!
//! | Field        | Checks                                             |
//! |--------------|----------------------------------------------------|
//! | `clientName` | required, no padding, length, letters/space/'/-    |
//! | `phone`      | required, 9 digits starting with 6 or 7            |
//! | `email`      | required, structure, known typo domains, no `..`   |
//! | `pages`      | at least 1                                         |
//! | `languages`  | at least 1                                         |

use crate::application::error::{ValidationError, ValidationErrors, ValidationKind};
use crate::application::form::model::FormModel;
use crate::application::form::params_codec::{
    KEY_CLIENT_NAME, KEY_EMAIL, KEY_LANGUAGES, KEY_PAGES, KEY_PHONE,
};
use crate::domain::value_objects::MIN_WEBSITE_UNITS;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Structural email pattern, applied to the trimmed lowercase address.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+\.[a-z]{2,}$";

/// Client name pattern: letters, with interior spaces, hyphens and apostrophes.
pub const NAME_PATTERN: &str = r"^\p{L}(?:[\p{L}\s'\-]*\p{L})?$";

/// Misspelled domains of popular mail providers.
pub const TYPO_DOMAINS: &[&str] = &[
    "gmial.com",
    "gmai.com",
    "gmil.com",
    "yahooo.com",
    "yaho.com",
    "hotmial.com",
    "outlok.com",
];

/// Digits in a regional phone number.
pub const PHONE_DIGITS: usize = 9;

/// Default minimum client name length, in characters.
pub const DEFAULT_NAME_MIN_LENGTH: usize = 2;

/// Default maximum client name length, in characters.
pub const DEFAULT_NAME_MAX_LENGTH: usize = 100;

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));

#[allow(clippy::expect_used)]
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("valid name regex"));

/// Tunable limits of the validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Shortest accepted client name.
    pub name_min_length: usize,
    /// Longest accepted client name.
    pub name_max_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
        }
    }
}

/// Result of a single field check.
pub type FieldResult = Result<(), ValidationError>;

/// Rejects values that are empty after trimming.
///
/// # Errors
///
/// Returns a `Required` error carrying `message`.
pub fn required(field: &'static str, value: &str, message: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, ValidationKind::Required, message));
    }
    Ok(())
}

/// Checks an email address.
///
/// Surrounding whitespace and letter case are ignored.
///
/// # Errors
///
/// - `Email` if the address is not `local@domain.tld` with a TLD of two or
///   more letters
/// - `EmailTypo` if the domain is a known misspelling
/// - `EmailConsecutiveDots` if the address contains `..`
///
/// # Examples
///
/// ```
/// use website_quote::application::error::ValidationKind;
/// use website_quote::application::form::validation::validate_email;
///
/// assert!(validate_email("user@example.com").is_ok());
/// let err = validate_email("user@gmial.com").unwrap_err();
/// assert_eq!(err.kind, ValidationKind::EmailTypo);
/// ```
pub fn validate_email(value: &str) -> FieldResult {
    let email = value.trim().to_lowercase();
    if email.is_empty() {
        return Ok(());
    }

    if !EMAIL_RE.is_match(&email) {
        return Err(ValidationError::new(
            KEY_EMAIL,
            ValidationKind::Email,
            "Valid email is required",
        ));
    }

    let domain = email.split_once('@').map_or("", |(_, domain)| domain);
    if TYPO_DOMAINS.contains(&domain) {
        return Err(ValidationError::new(
            KEY_EMAIL,
            ValidationKind::EmailTypo,
            "Email domain appears to have a typo. Please verify.",
        ));
    }

    if email.contains("..") {
        return Err(ValidationError::new(
            KEY_EMAIL,
            ValidationKind::EmailConsecutiveDots,
            "Email format is invalid (consecutive dots detected).",
        ));
    }

    Ok(())
}

/// Checks a regional phone number.
///
/// Separators are ignored; exactly nine digits must remain and the first
/// must be `6` or `7`.
///
/// # Errors
///
/// Returns a `Phone` error otherwise.
pub fn validate_phone(value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Ok(());
    }

    let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).collect();
    let valid = digits.len() == PHONE_DIGITS && matches!(digits.first().copied(), Some('6' | '7'));

    if !valid {
        return Err(ValidationError::new(
            KEY_PHONE,
            ValidationKind::Phone,
            "Phone must have 9 digits and start with 6 or 7",
        ));
    }
    Ok(())
}

/// Checks a client name.
///
/// # Errors
///
/// - `ClientName` if the name has leading or trailing whitespace
/// - `ClientNameLength` if it is shorter or longer than the configured limits
/// - `ClientName` if it contains anything but letters and interior spaces,
///   hyphens or apostrophes
pub fn validate_client_name(value: &str, config: &ValidationConfig) -> FieldResult {
    const MESSAGE: &str = "Name may only contain letters, spaces, hyphens and apostrophes";

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    if value != trimmed {
        return Err(ValidationError::new(
            KEY_CLIENT_NAME,
            ValidationKind::ClientName,
            MESSAGE,
        ));
    }

    let length = trimmed.chars().count();
    if length < config.name_min_length {
        return Err(ValidationError::new(
            KEY_CLIENT_NAME,
            ValidationKind::ClientNameLength,
            format!("Name must be at least {} characters", config.name_min_length),
        ));
    }
    if length > config.name_max_length {
        return Err(ValidationError::new(
            KEY_CLIENT_NAME,
            ValidationKind::ClientNameLength,
            format!("Name must not exceed {} characters", config.name_max_length),
        ));
    }

    if !NAME_RE.is_match(trimmed) {
        return Err(ValidationError::new(
            KEY_CLIENT_NAME,
            ValidationKind::ClientName,
            MESSAGE,
        ));
    }

    Ok(())
}

/// Rejects numbers below `min`.
///
/// # Errors
///
/// Returns a `Min` error carrying `message`.
pub fn validate_min(field: &'static str, value: u32, min: u32, message: &str) -> FieldResult {
    if value < min {
        return Err(ValidationError::new(field, ValidationKind::Min, message));
    }
    Ok(())
}

/// Runs every field check against a [`FormModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormValidator {
    config: ValidationConfig,
}

impl FormValidator {
    /// Creates a validator with the given limits.
    #[must_use]
    pub const fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the limits in use.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Collects every failed check, in field order.
    #[must_use]
    pub fn validate(&self, model: &FormModel) -> ValidationErrors {
        let checks = [
            required(KEY_CLIENT_NAME, &model.client_name, "Client name is required"),
            validate_client_name(&model.client_name, &self.config),
            required(KEY_PHONE, &model.phone, "Phone is required"),
            validate_phone(&model.phone),
            required(KEY_EMAIL, &model.email, "Email is required"),
            validate_email(&model.email),
            validate_min(
                KEY_PAGES,
                model.web_config.pages,
                MIN_WEBSITE_UNITS,
                "Pages must be at least 1",
            ),
            validate_min(
                KEY_LANGUAGES,
                model.web_config.languages,
                MIN_WEBSITE_UNITS,
                "Languages must be at least 1",
            ),
        ];

        checks.into_iter().filter_map(Result::err).collect::<Vec<_>>().into()
    }

    /// Returns true if every check passes.
    #[must_use]
    pub fn is_valid(&self, model: &FormModel) -> bool {
        self.validate(model).is_empty()
    }
}
