//! Light/dark theme switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            title=move || if ui.get().dark_mode { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=on_toggle
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
