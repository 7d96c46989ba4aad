//! Client sign-in page.
//!
//! Validates email shape and password length locally, then simulates a
//! sign-in round trip before entering the client dashboard. No account
//! service exists; any well-formed pair is accepted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::{AuthLayout, FieldError};
use crate::util::delay::after_ms;
use crate::util::validation::{LoginErrors, validate_login};

/// Simulated round trip for client sign-in and sign-up.
pub const ACCOUNT_SUBMIT_MS: u64 = 1000;

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let remember = RwSignal::new(false);
    let errors = RwSignal::new(LoginErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let result = validate_login(&email.get_untracked(), &password.get_untracked());
        let valid = result.is_valid();
        errors.set(result);
        if !valid {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        after_ms(ACCOUNT_SUBMIT_MS, move || {
            leptos::logging::log!("client sign-in: {}", email.get_untracked().trim());
            navigate("/dashboard", NavigateOptions::default());
        });
    };

    view! {
        <AuthLayout tagline="Welcome back! Sign in to access your creative projects and continue building amazing digital experiences.">
            <div class="auth-card__header">
                <h2>"Sign In"</h2>
                <a href="/" class="auth-card__back">"Back to Home"</a>
            </div>
            <p class="auth-card__switch">
                "Don't have an account? " <a href="/signup">"Sign Up"</a>
            </p>
            <form class="auth-form" on:submit=on_submit novalidate>
                <label class="form-label" for="email">"Email or Username"</label>
                <input
                    id="email"
                    class="form-input"
                    class:form-input--error=move || errors.get().email.is_some()
                    type="email"
                    placeholder="Enter your email"
                    disabled=move || busy.get()
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        errors.update(|e| e.email = None);
                    }
                />
                <FieldError message=Signal::derive(move || errors.get().email)/>

                <label class="form-label" for="password">"Password"</label>
                <div class="password-field">
                    <input
                        id="password"
                        class="form-input"
                        class:form-input--error=move || errors.get().password.is_some()
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Enter your password"
                        disabled=move || busy.get()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            errors.update(|e| e.password = None);
                        }
                    />
                    <button
                        type="button"
                        class="password-field__toggle"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                <FieldError message=Signal::derive(move || errors.get().password)/>

                <div class="auth-form__row">
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <a href="/forgot-password">"Forgot Password?"</a>
                </div>

                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </AuthLayout>
    }
}
