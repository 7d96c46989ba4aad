//! Field validation for the client account, settings, and request forms.
//!
//! Validators return `Err` with the user-visible message. Multi-field forms
//! collect every field's message at once so the page can show them together.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Loose `something@host.tld` shape check, unanchored.
pub fn is_email_shaped(raw: &str) -> bool {
    EMAIL_SHAPE.is_match(raw)
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    if !is_email_shaped(email) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

/// Client sign-in password: required, at least 6 characters.
pub fn validate_login_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

pub fn validate_full_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Full name is required");
    }
    if trimmed.chars().count() < 2 {
        return Err("Name must be at least 2 characters");
    }
    Ok(())
}

/// Sign-up password: 8+ characters with lowercase, uppercase, and a digit.
pub fn validate_signup_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters");
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return Err("Password must contain uppercase, lowercase, and number");
    }
    Ok(())
}

pub fn validate_terms(accepted: bool) -> Result<(), &'static str> {
    if accepted { Ok(()) } else { Err("You must accept the terms and conditions") }
}

/// Per-field messages for the client sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_login(email: &str, password: &str) -> LoginErrors {
    LoginErrors {
        email: validate_email(email).err(),
        password: validate_login_password(password).err(),
    }
}

/// Per-field messages for the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub terms: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.terms.is_none()
    }
}

pub fn validate_signup(name: &str, email: &str, password: &str, terms_accepted: bool) -> SignupErrors {
    SignupErrors {
        name: validate_full_name(name).err(),
        email: validate_email(email).err(),
        password: validate_signup_password(password).err(),
        terms: validate_terms(terms_accepted).err(),
    }
}

/// Per-field messages for the settings password change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChangeErrors {
    pub new_password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl PasswordChangeErrors {
    pub fn is_valid(&self) -> bool {
        self.new_password.is_none() && self.confirm_password.is_none()
    }
}

/// The current password is not checked; there is no account backend.
pub fn validate_password_change(new_password: &str, confirm_password: &str) -> PasswordChangeErrors {
    PasswordChangeErrors {
        new_password: (new_password.chars().count() < 8).then_some("Password must be at least 8 characters"),
        confirm_password: (new_password != confirm_password).then_some("Passwords do not match"),
    }
}

/// Per-field messages for the client new-project request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectRequestErrors {
    pub name: Option<&'static str>,
    pub project_type: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl ProjectRequestErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.project_type.is_none() && self.description.is_none()
    }
}

pub fn validate_project_request(name: &str, project_type: &str, description: &str) -> ProjectRequestErrors {
    let description = description.trim();
    ProjectRequestErrors {
        name: name.trim().is_empty().then_some("Project name is required"),
        project_type: project_type.is_empty().then_some("Please select a project type"),
        description: if description.is_empty() {
            Some("Project description is required")
        } else if description.chars().count() < 20 {
            Some("Description must be at least 20 characters")
        } else {
            None
        },
    }
}

/// Human-readable attachment size: bytes, then KB / MB with one decimal.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < KIB * KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / (KIB * KIB) as f64)
    }
}
