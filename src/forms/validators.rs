use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Value is required")]
    Required,
    #[error("Value must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Enter a valid email address")]
    InvalidEmail,
}

/// Built-in validation rules. A field passes when every attached rule
/// passes; rules other than `Required` accept the empty string so that
/// optional fields stay valid until filled in.
#[derive(Debug, Clone)]
pub enum Validator {
    Required,
    MinLength(usize),
    EmailFormat,
}

impl Validator {
    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self {
            Validator::Required => {
                if input.trim().is_empty() {
                    Err(ValidationError::Required)
                } else {
                    Ok(())
                }
            }
            Validator::MinLength(min) => {
                if !input.is_empty() && input.chars().count() < *min {
                    Err(ValidationError::TooShort { min: *min })
                } else {
                    Ok(())
                }
            }
            Validator::EmailFormat => {
                if input.is_empty() || is_email(input) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidEmail)
                }
            }
        }
    }
}

fn is_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = input.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
