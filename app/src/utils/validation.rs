//! Validation utilities for user input

/// Minimum password length accepted by the login form
pub const MIN_PASSWORD_LEN: usize = 6;

/// Email length from which an invalid address is flagged inline
pub const EMAIL_ERROR_MIN_LEN: usize = 6;

/// Password length from which an invalid password is flagged inline
pub const PASSWORD_ERROR_MIN_LEN: usize = 4;

const MAX_LOCAL_PART_LEN: usize = 256;
const MAX_FIRST_LABEL_LEN: usize = 65;
const MAX_LABEL_LEN: usize = 26;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
///
/// Accepts `local@label(.label)+`. The local part may hold letters, digits
/// and `+ . _ % -`. Each domain label starts with a letter or digit and may
/// contain `-` after that. Nothing is resolved or looked up.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return ValidationResult::err("Invalid email format");
    };

    if local.is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if local.len() > MAX_LOCAL_PART_LEN
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '_' | '%' | '-'))
    {
        return ValidationResult::err("Invalid email format");
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return ValidationResult::err("Invalid email domain");
    }

    for (i, label) in labels.iter().enumerate() {
        let max_len = if i == 0 { MAX_FIRST_LABEL_LEN } else { MAX_LABEL_LEN };
        if !is_valid_label(label, max_len) {
            return ValidationResult::err("Invalid email domain");
        }
    }

    ValidationResult::ok()
}

fn is_valid_label(label: &str, max_len: usize) -> bool {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    label.len() <= max_len && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Validate password strength
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }

    ValidationResult::ok()
}

pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_valid
}

pub fn is_valid_password(password: &str) -> bool {
    validate_password(password).is_valid
}
