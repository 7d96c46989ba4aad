//! Contact modal opened from the navbar and the landing page footer.
//!
//! Sending is simulated with a short delay; the form never leaves the page.

use leptos::prelude::*;

use crate::state::ui::{ContactForm, UiState};

#[component]
pub fn ContactModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let form = RwSignal::new(ContactForm::default());

    let close = move || {
        ui.update(|u| u.contact_open = false);
        form.set(ContactForm::default());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        form.update(|f| started = f.begin_send());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use std::time::Duration;

            use crate::state::ui::{CONTACT_SEND_MS, CONTACT_SUCCESS_MS};

            gloo_timers::future::sleep(Duration::from_millis(CONTACT_SEND_MS)).await;
            form.update(ContactForm::finish_send);
            leptos::logging::log!("contact form sent");
            gloo_timers::future::sleep(Duration::from_millis(CONTACT_SUCCESS_MS)).await;
            close();
        });
    };

    view! {
        <Show when=move || ui.get().contact_open>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog dialog--contact" on:click=move |ev| ev.stop_propagation()>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| close()>
                        "✕"
                    </button>
                    <Show
                        when=move || form.get().sent
                        fallback=move || {
                            view! {
                                <h2>"Let's work together"</h2>
                                <form class="contact-form" on:submit=on_submit>
                                    <input
                                        class="form-input"
                                        type="text"
                                        placeholder="Your name"
                                        prop:value=move || form.get().name
                                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                    />
                                    <input
                                        class="form-input"
                                        type="email"
                                        placeholder="Email address"
                                        prop:value=move || form.get().email
                                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                    />
                                    <textarea
                                        class="form-input"
                                        rows="5"
                                        placeholder="Your message"
                                        prop:value=move || form.get().message
                                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                                    ></textarea>
                                    <button
                                        class="btn btn--primary"
                                        type="submit"
                                        disabled=move || form.get().submitting
                                    >
                                        {move || if form.get().submitting { "Sending..." } else { "Send Message" }}
                                    </button>
                                </form>
                            }
                        }
                    >
                        <div class="contact-success">
                            <h3>"Message Sent!"</h3>
                            <p>"We'll get back to you soon."</p>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
