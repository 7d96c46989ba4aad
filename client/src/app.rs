//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin_dashboard::AdminDashboardPage,
    admin_login::AdminLoginPage,
    dashboard::DashboardPage,
    forgot_password::ForgotPasswordPage,
    home::HomePage,
    login::LoginPage,
    notifications::NotificationsPage,
    profile::ProfilePage,
    settings::SettingsPage,
    signup::SignupPage,
    work::{WorkDetailPage, WorkPage},
};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::credentials::ReferenceCredentials;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, the admin reference credentials, and shared
/// UI state, then sets up client-side routing. Only `/admin/dashboard` is
/// gated; the client portal routes are open.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(SessionStore::browser());
    provide_context(ReferenceCredentials::from_build_env());
    provide_context(ui);

    // Theme preference is only readable in the browser; SSR renders light.
    Effect::new(move |_| {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/agency.css"/>
        <Title text="ONESSA | Digital Agency"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("work") view=WorkPage/>
                <Route path=(StaticSegment("work"), ParamSegment("slug")) view=WorkDetailPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("profile")) view=ProfilePage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("settings")) view=SettingsPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("notifications"))
                    view=NotificationsPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
            </Routes>
        </Router>
    }
}
