use super::*;

fn reference() -> ReferenceCredentials {
    ReferenceCredentials::new("admin", "secret123")
}

#[test]
fn exact_match_passes() {
    assert!(check(&Credentials::new("admin", "secret123"), &reference()));
}

#[test]
fn wrong_password_fails() {
    assert!(!check(&Credentials::new("admin", "wrongpass"), &reference()));
}

#[test]
fn wrong_username_fails() {
    assert!(!check(&Credentials::new("root", "secret123"), &reference()));
}

#[test]
fn both_fields_wrong_fails() {
    assert!(!check(&Credentials::new("root", "hunter2"), &reference()));
}

#[test]
fn username_is_case_sensitive() {
    assert!(!check(&Credentials::new("Admin", "secret123"), &reference()));
}

#[test]
fn password_is_case_sensitive() {
    assert!(!check(&Credentials::new("admin", "Secret123"), &reference()));
}

#[test]
fn surrounding_whitespace_is_not_trimmed() {
    assert!(!check(&Credentials::new(" admin", "secret123"), &reference()));
    assert!(!check(&Credentials::new("admin", "secret123 "), &reference()));
}

#[test]
fn unconfigured_reference_never_matches() {
    let unset = ReferenceCredentials::default();
    assert!(!unset.is_configured());
    assert!(!check(&Credentials::new("", ""), &unset));
    assert!(!check(&Credentials::new("admin", "secret123"), &unset));
}

#[test]
fn configured_reference_reports_configured() {
    assert!(reference().is_configured());
}

#[test]
fn debug_output_redacts_passwords() {
    let submitted = format!("{:?}", Credentials::new("admin", "secret123"));
    let configured = format!("{:?}", reference());
    assert!(!submitted.contains("secret123"));
    assert!(!configured.contains("secret123"));
    assert!(submitted.contains("admin"));
}
