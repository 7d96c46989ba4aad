//! Password reset request page. Shows a confirmation panel once a
//! well-formed email is submitted; no mail is sent.

use leptos::prelude::*;

use crate::components::auth_layout::{AuthLayout, FieldError};
use crate::util::validation::validate_email;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get_untracked()) {
            Ok(()) => {
                leptos::logging::log!("password reset requested: {}", email.get_untracked().trim());
                error.set(None);
                submitted.set(true);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let try_again = move |_| {
        submitted.set(false);
        error.set(None);
    };

    view! {
        <AuthLayout tagline="Forgot your password? It happens. We'll help you get back in.">
            <a href="/login" class="auth-card__back">"← Back to Sign In"</a>
            <Show
                when=move || submitted.get()
                fallback=move || {
                    view! {
                        <h2>"Reset Password"</h2>
                        <p class="auth-card__switch">
                            "Enter your email address and we'll send you instructions to reset your password."
                        </p>
                        <form class="auth-form" on:submit=on_submit novalidate>
                            <label class="form-label" for="email">"Email Address"</label>
                            <input
                                id="email"
                                class="form-input"
                                class:form-input--error=move || error.get().is_some()
                                type="email"
                                placeholder="Enter your email"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    email.set(event_target_value(&ev));
                                    error.set(None);
                                }
                            />
                            <FieldError message=error/>
                            <button class="btn btn--primary btn--block" type="submit">
                                "Send Reset Link"
                            </button>
                        </form>
                    }
                }
            >
                <div class="auth-success">
                    <div class="auth-success__icon">"✉"</div>
                    <h2>"Check Your Email"</h2>
                    <p>
                        "We've sent password reset instructions to "
                        <strong>{move || email.get()}</strong>
                    </p>
                    <p class="form-hint">
                        "Didn't receive the email? Check your spam folder or "
                        <button class="btn btn--link" on:click=try_again>
                            "try again"
                        </button>
                    </p>
                    <a href="/login" class="btn btn--primary btn--block">"Back to Sign In"</a>
                </div>
            </Show>
        </AuthLayout>
    }
}
