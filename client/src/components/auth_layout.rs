//! Two-pane layout shared by the client sign-in, sign-up, and password
//! reset pages.

use leptos::prelude::*;

#[component]
pub fn AuthLayout(#[prop(into)] tagline: String, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <aside class="auth-page__brand">
                <h1>"ONESSA"</h1>
                <p class="auth-page__subtitle">"Crafting Timeless Digital Experiences"</p>
                <div class="auth-page__art">"🎨"</div>
                <p class="auth-page__tagline">{tagline}</p>
            </aside>
            <main class="auth-page__form">
                <div class="auth-card">{children()}</div>
            </main>
        </div>
    }
}

/// Inline message under a field; renders nothing when `message` is `None`.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|msg| view! { <p class="form-error">"⚠ " {msg}</p> })
}
