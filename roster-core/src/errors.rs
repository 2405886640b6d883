use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Se requieren los campos name y email")]
    MissingFields,

    #[error("El formato del email no es válido")]
    InvalidEmail,

    #[error("El nombre debe tener al menos 2 caracteres")]
    NameTooShort,
}

impl ValidationError {
    /// Stable machine-readable code for the rejection reason.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "missing_fields",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::NameTooShort => "name_too_short",
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
