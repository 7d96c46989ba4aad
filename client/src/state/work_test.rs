use super::*;

#[test]
fn slugs_are_unique() {
    for (i, a) in WORK.iter().enumerate() {
        assert!(WORK.iter().skip(i + 1).all(|b| b.slug != a.slug), "duplicate slug {}", a.slug);
    }
}

#[test]
fn find_by_slug_returns_matching_project() {
    let project = find_by_slug("healthcare-app").unwrap_or_else(|| panic!("healthcare-app exists"));
    assert_eq!(project.title, "Healthcare App");
    assert_eq!(project.tags, ["React Native", "Firebase", "WebRTC"]);
}

#[test]
fn find_by_slug_is_exact() {
    assert!(find_by_slug("Healthcare-App").is_none());
    assert!(find_by_slug("").is_none());
    assert!(find_by_slug("unknown-project").is_none());
}

#[test]
fn selected_work_resolves_every_slug() {
    let titles: Vec<_> = selected_work().iter().map(|p| p.title).collect();
    assert_eq!(titles, ["E-Commerce Platform", "Fitness Tracker", "SaaS Dashboard", "Real Estate Portal"]);
}

#[test]
fn sections_are_fragment_links() {
    assert!(SECTIONS.iter().all(|(href, _)| href.starts_with('#')));
    assert_eq!(SERVICES.len(), 3);
}
