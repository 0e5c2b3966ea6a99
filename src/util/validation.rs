//! Client-side form validation for the login, register, and category forms.
//!
//! Each field reports the first rule it breaks; every field is checked so the
//! form can show all inline errors at once. Messages are user-facing and
//! differ slightly between forms (login messages end with a period).

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{CategoryDraft, LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 8;

pub const LOGIN_EMAIL_REQUIRED: &str = "Email is required.";
pub const LOGIN_EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const LOGIN_PASSWORD_REQUIRED: &str = "Password is required.";
pub const LOGIN_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";
pub const LOGIN_PASSWORD_WEAK: &str = "Password must contain at least one letter and one number.";

pub const REGISTER_NAME_REQUIRED: &str = "Name is required";
pub const REGISTER_EMAIL_REQUIRED: &str = "Email is required";
pub const REGISTER_EMAIL_INVALID: &str = "Invalid email address";
pub const REGISTER_PASSWORD_REQUIRED: &str = "Password is required";
pub const REGISTER_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";

pub const CATEGORY_NAME_REQUIRED: &str = "Name is required";
pub const CATEGORY_STATUS_REQUIRED: &str = "Status is required";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Add-category form; `status` is the raw `<select>` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub status: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryErrors {
    pub name: Option<&'static str>,
    pub status: Option<&'static str>,
}

/// Validate the login form into a request body.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, LoginErrors> {
    let errors = LoginErrors {
        email: first_failure(&[
            (form.email.is_empty(), LOGIN_EMAIL_REQUIRED),
            (!is_valid_email(&form.email), LOGIN_EMAIL_INVALID),
        ]),
        password: first_failure(&[
            (form.password.is_empty(), LOGIN_PASSWORD_REQUIRED),
            (form.password.chars().count() < MIN_PASSWORD_LEN, LOGIN_PASSWORD_TOO_SHORT),
            (!is_letter_digit_password(&form.password), LOGIN_PASSWORD_WEAK),
        ]),
    };
    if errors.email.is_some() || errors.password.is_some() {
        return Err(errors);
    }
    Ok(LoginRequest { email: form.email.clone(), password: form.password.clone() })
}

/// Validate the registration form into a request body.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_registration(form: &RegisterForm) -> Result<RegisterRequest, RegisterErrors> {
    let errors = RegisterErrors {
        name: first_failure(&[(form.name.is_empty(), REGISTER_NAME_REQUIRED)]),
        email: first_failure(&[
            (form.email.is_empty(), REGISTER_EMAIL_REQUIRED),
            (!is_valid_email(&form.email), REGISTER_EMAIL_INVALID),
        ]),
        password: first_failure(&[
            (form.password.is_empty(), REGISTER_PASSWORD_REQUIRED),
            (form.password.chars().count() < MIN_PASSWORD_LEN, REGISTER_PASSWORD_TOO_SHORT),
        ]),
    };
    if errors.name.is_some() || errors.email.is_some() || errors.password.is_some() {
        return Err(errors);
    }
    Ok(RegisterRequest { name: form.name.clone(), email: form.email.clone(), password: form.password.clone() })
}

/// Validate the add-category form into a create body.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_category(form: &CategoryForm) -> Result<CategoryDraft, CategoryErrors> {
    let status = parse_status(&form.status);
    let errors = CategoryErrors {
        name: first_failure(&[(form.name.is_empty(), CATEGORY_NAME_REQUIRED)]),
        status: first_failure(&[(status.is_none(), CATEGORY_STATUS_REQUIRED)]),
    };
    match status {
        Some(is_active) if errors.name.is_none() => Ok(CategoryDraft { name: form.name.clone(), is_active }),
        _ => Err(errors),
    }
}

/// Map the status `<select>` value to `is_active`.
pub fn parse_status(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn first_failure(rules: &[(bool, &'static str)]) -> Option<&'static str> {
    rules.iter().find(|(failed, _)| *failed).map(|(_, message)| *message)
}

/// Only ASCII letters and digits, with at least one of each.
fn is_letter_digit_password(password: &str) -> bool {
    password.chars().all(|c| c.is_ascii_alphanumeric())
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

const EMAIL_LOCAL_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";
const MAX_DOMAIN_LABEL_LEN: usize = 63;

/// Email syntax check: `local@label(.label)*`.
///
/// The empty string passes so that the `required` rule owns that case.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return true;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok =
        !local.is_empty() && local.chars().all(|c| c.is_ascii_alphanumeric() || EMAIL_LOCAL_SPECIALS.contains(c));
    local_ok && domain.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_DOMAIN_LABEL_LEN
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}
