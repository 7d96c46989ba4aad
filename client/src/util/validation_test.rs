use super::*;

// =============================================================
// email
// =============================================================

#[test]
fn email_shape_accepts_common_addresses() {
    assert!(is_email_shaped("john@example.com"));
    assert!(is_email_shaped("a@b.c"));
    assert!(is_email_shaped("first.last@sub.domain.io"));
}

#[test]
fn email_shape_rejects_missing_parts() {
    assert!(!is_email_shaped("john.example.com"));
    assert!(!is_email_shaped("john@example"));
    assert!(!is_email_shaped("@example.com"));
    assert!(!is_email_shaped("john@.com"));
    assert!(!is_email_shaped("john @ example.com"));
}

#[test]
fn validate_email_requires_value() {
    assert_eq!(validate_email(""), Err("Email is required"));
    assert_eq!(validate_email("   "), Err("Email is required"));
}

#[test]
fn validate_email_reports_bad_shape() {
    assert_eq!(validate_email("nope"), Err("Please enter a valid email address"));
    assert_eq!(validate_email("jane@example.com"), Ok(()));
}

// =============================================================
// client sign-in
// =============================================================

#[test]
fn login_password_rules() {
    assert_eq!(validate_login_password(""), Err("Password is required"));
    assert_eq!(validate_login_password("12345"), Err("Password must be at least 6 characters"));
    assert_eq!(validate_login_password("123456"), Ok(()));
}

#[test]
fn validate_login_collects_both_fields() {
    let errors = validate_login("", "");
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
    assert!(!errors.is_valid());
    assert!(validate_login("john@example.com", "secret1").is_valid());
}

// =============================================================
// sign-up
// =============================================================

#[test]
fn full_name_is_trimmed_before_length_check() {
    assert_eq!(validate_full_name("  "), Err("Full name is required"));
    assert_eq!(validate_full_name(" J "), Err("Name must be at least 2 characters"));
    assert_eq!(validate_full_name("Jo"), Ok(()));
}

#[test]
fn signup_password_requires_mixed_classes() {
    assert_eq!(validate_signup_password(""), Err("Password is required"));
    assert_eq!(validate_signup_password("Ab1"), Err("Password must be at least 8 characters"));
    let weak = Err("Password must contain uppercase, lowercase, and number");
    assert_eq!(validate_signup_password("abcdefgh1"), weak);
    assert_eq!(validate_signup_password("ABCDEFGH1"), weak);
    assert_eq!(validate_signup_password("Abcdefghi"), weak);
    assert_eq!(validate_signup_password("Abcdefg1"), Ok(()));
}

#[test]
fn signup_requires_terms() {
    let errors = validate_signup("Jane Smith", "jane@example.com", "Abcdefg1", false);
    assert_eq!(errors.terms, Some("You must accept the terms and conditions"));
    assert!(!errors.is_valid());
    assert!(validate_signup("Jane Smith", "jane@example.com", "Abcdefg1", true).is_valid());
}

// =============================================================
// settings password change
// =============================================================

#[test]
fn password_change_reports_length_and_mismatch_together() {
    let errors = validate_password_change("short", "other");
    assert_eq!(errors.new_password, Some("Password must be at least 8 characters"));
    assert_eq!(errors.confirm_password, Some("Passwords do not match"));
}

#[test]
fn password_change_accepts_matching_long_password() {
    assert!(validate_password_change("longenough", "longenough").is_valid());
}

// =============================================================
// project request
// =============================================================

#[test]
fn project_request_requires_all_fields() {
    let errors = validate_project_request(" ", "", "");
    assert_eq!(errors.name, Some("Project name is required"));
    assert_eq!(errors.project_type, Some("Please select a project type"));
    assert_eq!(errors.description, Some("Project description is required"));
}

#[test]
fn project_request_description_minimum_counts_trimmed_text() {
    let errors = validate_project_request("Site", "website", "   too short    ");
    assert_eq!(errors.description, Some("Description must be at least 20 characters"));
    assert!(validate_project_request("Site", "website", "A storefront with checkout flow").is_valid());
}

// =============================================================
// file sizes
// =============================================================

#[test]
fn file_size_units() {
    assert_eq!(format_file_size(0), "0 B");
    assert_eq!(format_file_size(1023), "1023 B");
    assert_eq!(format_file_size(1024), "1.0 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
}
