use super::*;

fn ids(board: &ProjectBoard) -> Vec<&str> {
    board.items.iter().map(|p| p.id.as_str()).collect()
}

// =============================================================
// ProjectBoard
// =============================================================

#[test]
fn seeded_projects_in_display_order() {
    let board = ProjectBoard::seeded();
    assert_eq!(ids(&board), ["1", "2", "3", "4"]);
    assert_eq!(board.items[2].status, PublishStatus::Draft);
}

#[test]
fn move_project_down_splices_into_target_slot() {
    let mut board = ProjectBoard::seeded();
    assert!(board.move_project("1", "3"));
    assert_eq!(ids(&board), ["2", "3", "1", "4"]);
}

#[test]
fn move_project_up_splices_into_target_slot() {
    let mut board = ProjectBoard::seeded();
    assert!(board.move_project("4", "2"));
    assert_eq!(ids(&board), ["1", "4", "2", "3"]);
}

#[test]
fn move_project_onto_itself_or_unknown_is_noop() {
    let mut board = ProjectBoard::seeded();
    assert!(!board.move_project("2", "2"));
    assert!(!board.move_project("2", "99"));
    assert!(!board.move_project("99", "2"));
    assert_eq!(ids(&board), ["1", "2", "3", "4"]);
}

#[test]
fn toggle_status_and_featured_flip_one_project() {
    let mut board = ProjectBoard::seeded();
    board.toggle_status("3");
    board.toggle_featured("3");
    assert_eq!(board.items[2].status, PublishStatus::Published);
    assert!(board.items[2].featured);
    assert_eq!(board.items[0].status, PublishStatus::Published);
    assert!(board.items[0].featured);
}

#[test]
fn delete_removes_only_matching_project() {
    let mut board = ProjectBoard::seeded();
    board.delete("2");
    assert_eq!(ids(&board), ["1", "3", "4"]);
}

#[test]
fn add_appends_trimmed_draft_with_tags() {
    let mut board = ProjectBoard::seeded();
    let id = board.add(NewPortfolioProject {
        title: "  SaaS Dashboard ".to_owned(),
        category: "Web Development".to_owned(),
        description: "Analytics".to_owned(),
        tags: "Vue.js, D3.js,, ".to_owned(),
        year: "2023".to_owned(),
    });
    let added = board.items.last().cloned().unwrap_or_else(|| panic!("project appended"));
    assert_eq!(added.id, id);
    assert_eq!(added.title, "SaaS Dashboard");
    assert_eq!(added.tags, ["Vue.js", "D3.js"]);
    assert_eq!(added.status, PublishStatus::Draft);
    assert!(!added.featured);
}

#[test]
fn new_project_defaults_to_first_category() {
    assert_eq!(NewPortfolioProject::default().category, "Web Development");
}

// =============================================================
// UserDirectory
// =============================================================

#[test]
fn search_matches_name_or_email_case_insensitively() {
    let users = UserDirectory::seeded();
    assert_eq!(users.search("JANE").len(), 1);
    assert_eq!(users.search("example.com").len(), 2);
    assert_eq!(users.search("doe")[0].name, "John Doe");
    assert!(users.search("nobody").is_empty());
}

#[test]
fn empty_search_returns_everyone() {
    assert_eq!(UserDirectory::seeded().search("").len(), 2);
}

#[test]
fn add_user_assigns_fresh_id() {
    let mut users = UserDirectory::seeded();
    let a = users.add(ClientUser {
        name: "Mike Johnson".to_owned(),
        id: "ignored".to_owned(),
        ..ClientUser::default()
    });
    let b = users.add(ClientUser { name: "Sarah Wilson".to_owned(), ..ClientUser::default() });
    assert_ne!(a, "ignored");
    assert_ne!(a, b);
    assert_eq!(users.users.len(), 4);
    assert_eq!(users.users[2].project_status, EngagementStatus::Pending);
}

#[test]
fn delete_user_removes_by_id() {
    let mut users = UserDirectory::seeded();
    users.delete("1");
    assert_eq!(users.users.len(), 1);
    assert_eq!(users.users[0].id, "2");
}

#[test]
fn engagement_status_labels_round_trip() {
    for status in EngagementStatus::ALL {
        assert_eq!(EngagementStatus::from_label(status.label()), Some(status));
    }
    assert_eq!(EngagementStatus::from_label("Archived"), None);
}

// =============================================================
// PaymentLedger
// =============================================================

#[test]
fn parse_amount_strips_symbol_and_separators() {
    assert_eq!(parse_amount("₹50,000"), 50_000);
    assert_eq!(parse_amount("₹1,25,000"), 125_000);
    assert_eq!(parse_amount("75000"), 75_000);
    assert_eq!(parse_amount("₹1,200.75"), 1_200);
}

#[test]
fn parse_amount_without_digits_is_zero() {
    assert_eq!(parse_amount(""), 0);
    assert_eq!(parse_amount("₹"), 0);
    assert_eq!(parse_amount("free"), 0);
}

#[test]
fn parse_amount_clamps_oversized_values() {
    assert_eq!(parse_amount("₹20,000,000,000,000,000,000"), u64::MAX);
    assert_eq!(parse_amount("₹9,000,000,000,000,000,000"), 9_000_000_000_000_000_000);
}

#[test]
fn totals_saturate_instead_of_overflowing() {
    let huge = |status| Payment { amount: "₹9,000,000,000,000,000,000".to_owned(), status, ..Payment::default() };
    let mut ledger = PaymentLedger { payments: Vec::new() };
    for _ in 0..3 {
        ledger.add(huge(PaymentStatus::Completed));
        ledger.add(huge(PaymentStatus::Pending));
    }
    assert_eq!(ledger.total_revenue(), u64::MAX);
    assert_eq!(ledger.pending_amount(), u64::MAX);
}

#[test]
fn format_rupees_groups_thousands() {
    assert_eq!(format_rupees(0), "₹0");
    assert_eq!(format_rupees(999), "₹999");
    assert_eq!(format_rupees(50_000), "₹50,000");
    assert_eq!(format_rupees(1_250_000), "₹1,250,000");
}

#[test]
fn seeded_totals_split_by_status() {
    let ledger = PaymentLedger::seeded();
    assert_eq!(ledger.total_revenue(), 50_000);
    assert_eq!(ledger.pending_amount(), 75_000);
}

#[test]
fn filter_tabs_select_by_status() {
    let ledger = PaymentLedger::seeded();
    assert_eq!(ledger.filtered(PaymentFilter::All).len(), 2);
    assert_eq!(ledger.filtered(PaymentFilter::Only(PaymentStatus::Pending))[0].id, "2");
    assert!(ledger.filtered(PaymentFilter::Only(PaymentStatus::Failed)).is_empty());
}

#[test]
fn resolving_pending_payment_moves_it_into_revenue() {
    let mut ledger = PaymentLedger::seeded();
    assert!(ledger.resolve("2", PaymentStatus::Completed));
    assert_eq!(ledger.total_revenue(), 125_000);
    assert_eq!(ledger.pending_amount(), 0);
}

#[test]
fn resolve_ignores_settled_payments_and_pending_target() {
    let mut ledger = PaymentLedger::seeded();
    assert!(!ledger.resolve("1", PaymentStatus::Failed));
    assert!(!ledger.resolve("2", PaymentStatus::Pending));
    assert!(!ledger.resolve("missing", PaymentStatus::Completed));
    assert_eq!(ledger, PaymentLedger::seeded());
}

#[test]
fn failed_payments_count_toward_neither_total() {
    let mut ledger = PaymentLedger::seeded();
    ledger.resolve("2", PaymentStatus::Failed);
    assert_eq!(ledger.total_revenue(), 50_000);
    assert_eq!(ledger.pending_amount(), 0);
}

#[test]
fn add_and_delete_payment() {
    let mut ledger = PaymentLedger::seeded();
    let id = ledger.add(Payment { amount: "₹10,000".to_owned(), ..Payment::default() });
    assert_eq!(ledger.total_revenue(), 60_000);
    ledger.delete(&id);
    assert_eq!(ledger, PaymentLedger::seeded());
}

#[test]
fn filter_labels() {
    let labels: Vec<_> = PaymentFilter::TABS.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["All", "Completed", "Pending", "Failed"]);
}

// =============================================================
// Overview helpers
// =============================================================

#[test]
fn initials_take_first_letter_of_each_word() {
    assert_eq!(initials("John Doe"), "JD");
    assert_eq!(initials("sarah  wilson"), "SW");
    assert_eq!(initials(""), "");
}

#[test]
fn overview_has_four_cards_and_activity() {
    assert_eq!(overview_stats().len(), 4);
    assert_eq!(recent_activity()[2].status.label(), "new");
}

#[test]
fn admin_view_titles_follow_sidebar_order() {
    let titles: Vec<_> = AdminView::ALL.iter().map(|v| v.title()).collect();
    assert_eq!(titles, ["Overview", "Projects", "Users", "Payments", "Messages"]);
    assert_eq!(AdminView::default(), AdminView::Overview);
}
