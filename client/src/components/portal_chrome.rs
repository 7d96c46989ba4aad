//! Sidebar and header shared by the client dashboard pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar drives the dashboard through query links (`?view=messages`,
//! `?action=new-project`) so the page state survives reloads. The header
//! carries the notification preview and the profile menu.

use leptos::prelude::*;

use crate::state::admin::initials;
use crate::state::portal::{NotificationCenter, Profile};
use crate::state::ui::UiState;

/// Entries of the sidebar: `(href, label)`.
const SIDEBAR_LINKS: [(&str, &str); 3] = [
    ("/dashboard?action=new-project", "New Project"),
    ("/dashboard", "My Projects"),
    ("/dashboard?view=messages", "Messages"),
];

/// Notifications previewed in the header dropdown.
const HEADER_PREVIEW_COUNT: usize = 3;

#[component]
pub fn DashboardSidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <aside class="portal-sidebar" class:portal-sidebar--collapsed=move || !ui.get().dashboard_sidebar_open>
            <a href="/" class="portal-sidebar__brand">"Agency"</a>
            <nav class="portal-sidebar__nav">
                {SIDEBAR_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a class="portal-sidebar__link" href=*href>{*label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="portal-sidebar__footer">
                <a class="portal-sidebar__link" href="/">"Back to Home"</a>
                <a class="portal-sidebar__link portal-sidebar__link--danger" href="/login">"Logout"</a>
            </div>
        </aside>
    }
}

#[component]
pub fn DashboardHeader(#[prop(into)] title: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let show_notifications = RwSignal::new(false);
    let show_profile = RwSignal::new(false);
    let profile = Profile::default();
    let preview = NotificationCenter::seeded().items.into_iter().take(HEADER_PREVIEW_COUNT).collect::<Vec<_>>();
    let avatar = initials(&profile.name);
    let name = profile.name.clone();
    let menu_name = profile.name;
    let menu_email = profile.email;

    view! {
        <header class="portal-header">
            <button
                class="portal-header__menu"
                aria-label="Toggle sidebar"
                on:click=move |_| ui.update(|u| u.dashboard_sidebar_open = !u.dashboard_sidebar_open)
            >
                "☰"
            </button>
            <h1 class="portal-header__title">{title}</h1>
            <div class="portal-header__actions">
                <div class="portal-header__dropdown">
                    <button
                        class="portal-header__icon"
                        aria-label="Notifications"
                        on:click=move |_| {
                            show_notifications.update(|open| *open = !*open);
                            show_profile.set(false);
                        }
                    >
                        "🔔"
                    </button>
                    <Show when=move || show_notifications.get()>
                        <div class="dropdown">
                            <h3 class="dropdown__title">"Notifications"</h3>
                            {preview
                                .iter()
                                .map(|n| {
                                    view! {
                                        <div class="dropdown__item" class:dropdown__item--unread=!n.read>
                                            <h4>{n.title}</h4>
                                            <p>{n.message}</p>
                                            <span class="dropdown__meta">{n.time}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                            <a class="dropdown__footer" href="/dashboard/notifications">
                                "View all notifications"
                            </a>
                        </div>
                    </Show>
                </div>
                <div class="portal-header__dropdown">
                    <button
                        class="portal-header__profile"
                        on:click=move |_| {
                            show_profile.update(|open| *open = !*open);
                            show_notifications.set(false);
                        }
                    >
                        <span class="avatar">{avatar}</span>
                        <span>{name}</span>
                    </button>
                    <Show when=move || show_profile.get()>
                        <div class="dropdown">
                            <p class="dropdown__title">{menu_name.clone()}</p>
                            <p class="dropdown__meta">{menu_email.clone()}</p>
                            <a class="dropdown__item" href="/dashboard/profile">"My Profile"</a>
                            <a class="dropdown__item" href="/dashboard/settings">"Settings"</a>
                            <a class="dropdown__item dropdown__item--danger" href="/login">"Logout"</a>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
