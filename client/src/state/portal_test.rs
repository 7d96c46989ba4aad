use super::*;

// =============================================================
// DashboardEntry
// =============================================================

#[test]
fn no_query_opens_projects_without_modal() {
    let entry = DashboardEntry::from_query(None, None);
    assert_eq!(entry, DashboardEntry { view: DashboardView::Projects, open_new_project: false });
}

#[test]
fn view_messages_query_opens_messages() {
    assert_eq!(DashboardEntry::from_query(Some("messages"), None).view, DashboardView::Messages);
    assert_eq!(DashboardEntry::from_query(Some("Messages"), None).view, DashboardView::Projects);
}

#[test]
fn new_project_action_opens_modal() {
    let entry = DashboardEntry::from_query(Some("messages"), Some("new-project"));
    assert!(entry.open_new_project);
    assert_eq!(entry.view, DashboardView::Messages);
    assert!(!DashboardEntry::from_query(None, Some("other")).open_new_project);
}

// =============================================================
// Projects
// =============================================================

#[test]
fn seeded_client_projects_cover_each_stage() {
    let projects = client_projects();
    let stages: Vec<_> = projects.iter().map(|p| p.stage.slug()).collect();
    assert_eq!(stages, ["in-progress", "review", "completed"]);
    assert_eq!(ProjectStage::InProgress.label(), "in progress");
}

#[test]
fn project_type_picker_starts_with_prompt() {
    assert_eq!(PROJECT_TYPES[0], ("", "Select project type"));
    assert_eq!(PROJECT_TYPES.len(), 6);
}

// =============================================================
// Inbox
// =============================================================

#[test]
fn inbox_selects_first_conversation() {
    let inbox = Inbox::seeded();
    assert_eq!(inbox.selected().map(|c| c.project_name.as_str()), Some("E-Commerce Website"));
}

#[test]
fn select_unknown_conversation_keeps_current() {
    let mut inbox = Inbox::seeded();
    inbox.select(3);
    assert_eq!(inbox.selected, 3);
    inbox.select(42);
    assert_eq!(inbox.selected, 3);
}

#[test]
fn send_appends_trimmed_client_message() {
    let mut inbox = Inbox::seeded();
    inbox.select(2);
    assert!(inbox.send("  See you Monday  "));
    let convo = inbox.selected().cloned().unwrap_or_else(|| panic!("conversation selected"));
    let last = convo.messages.last().cloned().unwrap_or_else(|| panic!("message appended"));
    assert_eq!(last.id, 3);
    assert_eq!(last.sender, Sender::Client);
    assert_eq!(last.text, "See you Monday");
    assert_eq!(convo.last_message, "See you Monday");
    assert_eq!(convo.timestamp, "Just now");
}

#[test]
fn send_blank_text_is_ignored() {
    let mut inbox = Inbox::seeded();
    assert!(!inbox.send("   "));
    assert_eq!(inbox, Inbox::seeded());
}

// =============================================================
// NotificationCenter
// =============================================================

#[test]
fn seeded_notifications_have_two_unread() {
    let center = NotificationCenter::seeded();
    assert_eq!(center.items.len(), 8);
    assert_eq!(center.unread_count(), 2);
    assert_eq!(center.summary(), "You have 2 unread notifications");
}

#[test]
fn filters_by_unread_and_kind() {
    let center = NotificationCenter::seeded();
    assert_eq!(center.filtered(NotificationFilter::All).len(), 8);
    assert_eq!(center.filtered(NotificationFilter::Unread).len(), 2);
    assert_eq!(center.filtered(NotificationFilter::Kind(NotificationKind::Project)).len(), 3);
    assert_eq!(center.filtered(NotificationFilter::Kind(NotificationKind::Message)).len(), 2);
    assert_eq!(center.filtered(NotificationFilter::Kind(NotificationKind::Payment)).len(), 2);
}

#[test]
fn mark_read_singular_summary() {
    let mut center = NotificationCenter::seeded();
    center.mark_read(1);
    assert_eq!(center.unread_count(), 1);
    assert_eq!(center.summary(), "You have 1 unread notification");
}

#[test]
fn mark_all_read_is_all_caught_up() {
    let mut center = NotificationCenter::seeded();
    center.mark_all_read();
    assert_eq!(center.unread_count(), 0);
    assert_eq!(center.summary(), "All caught up!");
    assert!(center.filtered(NotificationFilter::Unread).is_empty());
}

#[test]
fn delete_and_clear_all() {
    let mut center = NotificationCenter::seeded();
    center.delete(2);
    assert_eq!(center.items.len(), 7);
    assert_eq!(center.unread_count(), 1);
    center.clear_all();
    assert!(center.items.is_empty());
    assert_eq!(center.summary(), "All caught up!");
}

#[test]
fn filter_tab_labels() {
    let labels: Vec<_> = NotificationFilter::TABS.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["All", "Unread", "Projects", "Messages", "Payments"]);
}

// =============================================================
// Profile and settings defaults
// =============================================================

#[test]
fn account_settings_mirror_profile_defaults() {
    let profile = Profile::default();
    let account = AccountSettings::default();
    assert_eq!(account.name, profile.name);
    assert_eq!(account.email, profile.email);
    assert!(profile.avatar_url.is_none());
}

#[test]
fn notification_prefs_default_on() {
    let prefs = NotificationPrefs::default();
    assert!(prefs.email_notifications && prefs.project_updates && prefs.message_alerts);
}

#[test]
fn profile_stats_labels() {
    assert_eq!(profile_stats()[0], ("Total Projects", "12"));
}

// =============================================================
// ProjectRequest
// =============================================================

fn file(name: &str, size: u64) -> AttachedFile {
    AttachedFile { name: name.to_owned(), size }
}

#[test]
fn empty_request_reports_every_field() {
    let mut request = ProjectRequest::default();
    assert!(!request.submit());
    assert_eq!(request.errors.name, Some("Project name is required"));
    assert_eq!(request.errors.project_type, Some("Please select a project type"));
    assert_eq!(request.errors.description, Some("Project description is required"));
}

#[test]
fn short_description_is_rejected_and_form_kept() {
    let mut request = ProjectRequest {
        name: "Shop".to_owned(),
        project_type: "website".to_owned(),
        description: "  too short  ".to_owned(),
        ..ProjectRequest::default()
    };
    assert!(!request.submit());
    assert_eq!(request.errors.description, Some("Description must be at least 20 characters"));
    assert_eq!(request.name, "Shop");
}

#[test]
fn valid_request_resets_form() {
    let mut request = ProjectRequest {
        name: "Shop".to_owned(),
        project_type: "website".to_owned(),
        description: "An online shop with a checkout flow".to_owned(),
        ..ProjectRequest::default()
    };
    request.attach([file("brief.pdf", 2048)]);
    assert!(request.submit());
    assert_eq!(request, ProjectRequest::default());
}

#[test]
fn attach_appends_and_remove_by_index() {
    let mut request = ProjectRequest::default();
    request.attach([file("a.png", 10), file("b.png", 20)]);
    request.attach([file("c.png", 30)]);
    request.remove_file(1);
    let names: Vec<_> = request.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.png", "c.png"]);
    request.remove_file(9);
    assert_eq!(request.files.len(), 2);
}
