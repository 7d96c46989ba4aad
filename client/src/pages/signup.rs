//! Client sign-up page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::{AuthLayout, FieldError};
use crate::pages::login::ACCOUNT_SUBMIT_MS;
use crate::util::delay::after_ms;
use crate::util::validation::{SignupErrors, validate_signup};

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let terms = RwSignal::new(false);
    let errors = RwSignal::new(SignupErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let result = validate_signup(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            terms.get_untracked(),
        );
        let valid = result.is_valid();
        errors.set(result);
        if !valid {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        after_ms(ACCOUNT_SUBMIT_MS, move || {
            leptos::logging::log!("client sign-up: {}", email.get_untracked().trim());
            navigate("/dashboard", NavigateOptions::default());
        });
    };

    view! {
        <AuthLayout tagline="Join us and start building remarkable digital products with a team that cares.">
            <div class="auth-card__header">
                <h2>"Sign Up"</h2>
                <a href="/" class="auth-card__back">"Back to Home"</a>
            </div>
            <p class="auth-card__switch">
                "Already have an account? " <a href="/login">"Sign In"</a>
            </p>
            <form class="auth-form" on:submit=on_submit novalidate>
                <label class="form-label" for="name">"Full Name"</label>
                <input
                    id="name"
                    class="form-input"
                    class:form-input--error=move || errors.get().name.is_some()
                    type="text"
                    placeholder="Enter your full name"
                    disabled=move || busy.get()
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        name.set(event_target_value(&ev));
                        errors.update(|e| e.name = None);
                    }
                />
                <FieldError message=Signal::derive(move || errors.get().name)/>

                <label class="form-label" for="email">"Email"</label>
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
                        placeholder="Create a password"
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
                <p class="form-hint">"At least 8 characters with uppercase, lowercase, and a number."</p>

                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || terms.get()
                        on:change=move |ev| {
                            terms.set(event_target_checked(&ev));
                            errors.update(|e| e.terms = None);
                        }
                    />
                    "I agree to the Terms of Service and Privacy Policy"
                </label>
                <FieldError message=Signal::derive(move || errors.get().terms)/>

                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                </button>
            </form>
        </AuthLayout>
    }
}
