use super::*;

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_menus_closed_sidebar_open() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
    assert!(!state.contact_open);
    assert!(state.dashboard_sidebar_open);
}

#[test]
fn open_contact_collapses_mobile_menu() {
    let mut state = UiState { mobile_menu_open: true, ..UiState::default() };
    state.open_contact();
    assert!(state.contact_open);
    assert!(!state.mobile_menu_open);
}

// =============================================================
// ContactForm
// =============================================================

fn filled() -> ContactForm {
    ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Need a site".to_owned(),
        ..ContactForm::default()
    }
}

#[test]
fn blank_field_blocks_send() {
    let mut form = ContactForm { message: "   ".to_owned(), ..filled() };
    assert!(!form.is_complete());
    assert!(!form.begin_send());
    assert!(!form.submitting);
}

#[test]
fn second_send_while_submitting_is_ignored() {
    let mut form = filled();
    assert!(form.begin_send());
    assert!(!form.begin_send());
}

#[test]
fn finish_send_clears_fields_and_marks_sent() {
    let mut form = filled();
    form.begin_send();
    form.finish_send();
    assert_eq!(form, ContactForm { sent: true, ..ContactForm::default() });
}
