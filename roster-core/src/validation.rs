use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::{ValidationError, ValidationResult};
use crate::models::{User, UserInput};
use crate::store::UserStore;

/// `local@domain.tld`, no whitespace, at least one dot after the `@`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

const MIN_NAME_LEN: usize = 2;

/// Fields that passed validation, already normalized for storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Checks presence, then email format, then name length.
///
/// The email pattern is matched against the value as given; only the stored
/// value is trimmed and lower-cased.
pub fn validate(input: &UserInput) -> ValidationResult<NewUser> {
    let (name, email) = match (input.name.as_deref(), input.email.as_deref()) {
        (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => (name, email),
        _ => return Err(ValidationError::MissingFields),
    };

    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let name = name.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort);
    }

    Ok(NewUser {
        name: name.to_string(),
        email: email.to_lowercase().trim().to_string(),
    })
}

/// Validates an untyped body and appends the resulting record.
///
/// A rejected body leaves the store untouched and consumes no id.
pub async fn create_user(store: &UserStore, body: &Value) -> ValidationResult<User> {
    let input = UserInput::from_value(body);

    let new_user = validate(&input).map_err(|e| {
        debug!(code = e.code(), "Rejected user input");
        e
    })?;

    let user = store.append(new_user.name, new_user.email).await;
    info!(user_id = user.id, email = %user.email, "Created user");

    Ok(user)
}
