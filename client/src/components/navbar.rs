//! Public site navigation bar with section links, theme switch, and a
//! collapsible mobile menu.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;
use crate::state::work::SECTIONS;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let section_links = move |class: &'static str| {
        SECTIONS
            .iter()
            .map(|(fragment, label)| {
                view! {
                    <a
                        class=class
                        href=format!("/{fragment}")
                        on:click=move |_| ui.update(|u| u.mobile_menu_open = false)
                    >
                        {*label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">"Agency"</a>
                <div class="navbar__links">{section_links("navbar__link")}</div>
                <div class="navbar__actions">
                    <ThemeToggle/>
                    <a href="/login" class="btn btn--ghost">"Login"</a>
                    <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_contact)>
                        "Let's Talk"
                    </button>
                    <button
                        class="navbar__menu-button"
                        aria-label="Toggle menu"
                        on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
                    >
                        {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || ui.get().mobile_menu_open>
                <div class="navbar__mobile">
                    {section_links("navbar__mobile-link")}
                    <a href="/login" class="navbar__mobile-link">"Login"</a>
                    <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_contact)>
                        "Let's Talk"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
