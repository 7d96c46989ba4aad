//! Admin login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compares the submitted pair against the reference credentials baked
//! into the bundle, writes the session flag on a match, and enters the
//! back-office after a short cosmetic pause. The submit button stays
//! disabled from the match until navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::login::{LoginForm, LoginOutcome, REDIRECT_DELAY_MS};
use crate::state::session::SessionStore;
use crate::util::credentials::ReferenceCredentials;
use crate::util::delay::after_ms;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let reference = expect_context::<ReferenceCredentials>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());

    if !reference.is_configured() {
        leptos::logging::warn!("admin login: reference credentials are not configured; no login can succeed");
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut outcome = LoginOutcome::Busy;
        form.update(|f| outcome = f.submit(&reference, &store));
        match outcome {
            LoginOutcome::Authenticated { redirect } => {
                leptos::logging::log!("admin login accepted");
                let navigate = navigate.clone();
                after_ms(REDIRECT_DELAY_MS, move || navigate(redirect, NavigateOptions::default()));
            }
            LoginOutcome::Rejected => leptos::logging::warn!("admin login rejected"),
            LoginOutcome::Busy => {}
        }
    };

    view! {
        <div class="admin-login">
            <div class="admin-login__card">
                <div class="admin-login__header">
                    <div class="admin-login__shield">"🛡"</div>
                    <h1>"Admin Login"</h1>
                    <p class="muted">"Enter your credentials to access the admin panel"</p>
                </div>
                <form class="admin-login__form" on:submit=on_submit>
                    {move || {
                        form.get()
                            .error
                            .map(|msg| view! { <div class="alert alert--error" role="alert">"⚠ " {msg}</div> })
                    }}
                    <label class="form-label">
                        "Username"
                        <input
                            class="form-input"
                            type="text"
                            placeholder="Enter username"
                            autocomplete="username"
                            required
                            prop:value=move || form.get().username
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-label">
                        "Password"
                        <div class="password-field">
                            <input
                                class="form-input"
                                type=move || form.get().password_input_type()
                                placeholder="Enter password"
                                autocomplete="current-password"
                                required
                                prop:value=move || form.get().password
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="password-field__toggle"
                                aria-label="Toggle password visibility"
                                on:click=move |_| form.update(|f| f.show_password = !f.show_password)
                            >
                                {move || if form.get().show_password { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || form.get().loading>
                        {move || form.get().submit_label()}
                    </button>
                </form>
                <p class="admin-login__notice">
                    "🔒 This is a protected admin area. Unauthorized access is prohibited."
                </p>
            </div>
        </div>
    }
}
