//! Admin back-office shell: sidebar navigation, section header, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole page sits inside `ProtectedRoute`, so nothing below renders
//! until the session gate has authorized this mount. Sections keep their
//! own seeded state and reset when the page remounts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin_payments::PaymentsSection;
use crate::components::admin_projects::ProjectsSection;
use crate::components::admin_users::UsersSection;
use crate::components::protected_route::ProtectedRoute;
use crate::state::admin::{AdminView, initials, overview_stats, recent_activity};
use crate::state::login::logout;
use crate::state::session::SessionStore;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <AdminShell/>
        </ProtectedRoute>
    }
}

#[component]
fn AdminShell() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let active = RwSignal::new(AdminView::default());
    let sidebar_open = RwSignal::new(true);

    let on_logout = move |_| {
        let target = logout(&store);
        leptos::logging::log!("admin logout");
        navigate(target, NavigateOptions::default());
    };

    view! {
        <div class="admin">
            <aside class="admin-sidebar" class:admin-sidebar--collapsed=move || !sidebar_open.get()>
                <div class="admin-sidebar__top">
                    <Show when=move || sidebar_open.get()>
                        <h1 class="admin-sidebar__brand">"ONESSA Admin"</h1>
                    </Show>
                    <button
                        class="admin-sidebar__toggle"
                        aria-label="Toggle sidebar"
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    >
                        {move || if sidebar_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                <nav class="admin-sidebar__nav">
                    {AdminView::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="admin-sidebar__item"
                                    class:admin-sidebar__item--active=move || active.get() == section
                                    title=section.title()
                                    on:click=move |_| active.set(section)
                                >
                                    <span class="admin-sidebar__icon">{icon(section)}</span>
                                    <Show when=move || sidebar_open.get()>
                                        <span>{section.title()}</span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <button class="admin-sidebar__item admin-sidebar__item--danger" on:click=on_logout>
                    <span class="admin-sidebar__icon">"⎋"</span>
                    <Show when=move || sidebar_open.get()>
                        <span>"Logout"</span>
                    </Show>
                </button>
            </aside>
            <div class="admin__main">
                <header class="admin__header">
                    <div>
                        <h2>{move || active.get().title()}</h2>
                        <p class="muted">"Manage your platform"</p>
                    </div>
                    <span class="avatar">"A"</span>
                </header>
                <main class="admin__content">
                    {move || match active.get() {
                        AdminView::Overview => view! { <OverviewSection/> }.into_any(),
                        AdminView::Projects => view! { <ProjectsSection/> }.into_any(),
                        AdminView::Users => view! { <UsersSection/> }.into_any(),
                        AdminView::Payments => view! { <PaymentsSection/> }.into_any(),
                        AdminView::Messages => view! { <MessagesSection/> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

fn icon(section: AdminView) -> &'static str {
    match section {
        AdminView::Overview => "▦",
        AdminView::Projects => "📁",
        AdminView::Users => "👥",
        AdminView::Payments => "💳",
        AdminView::Messages => "💬",
    }
}

#[component]
fn OverviewSection() -> impl IntoView {
    view! {
        <section class="overview">
            <div class="stat-grid">
                {overview_stats()
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class="stat-card">
                                <p class="muted">{card.label}</p>
                                <h3>{card.value}</h3>
                                <span class="stat-card__change">{card.change}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="panel">
                <h3>"Recent Activity"</h3>
                {recent_activity()
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="activity">
                                <span class="avatar">{initials(item.user)}</span>
                                <div class="activity__body">
                                    <p>
                                        <strong>{item.user}</strong>
                                        " "
                                        {item.action}
                                    </p>
                                    <span class="muted">{item.time}</span>
                                </div>
                                <span class=format!("badge badge--{}", item.status.label())>{item.status.label()}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn MessagesSection() -> impl IntoView {
    view! {
        <section class="panel empty-state">
            <h2>"Messages"</h2>
            <p class="muted">"Coming soon..."</p>
        </section>
    }
}
