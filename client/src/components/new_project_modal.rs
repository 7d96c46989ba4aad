//! Modal form for requesting a new project from the client dashboard.
//!
//! TRADE-OFFS
//! ==========
//! Requests are logged and discarded; attachments are listed by name and
//! size but never read.

use leptos::prelude::*;

use crate::state::portal::{PROJECT_TYPES, ProjectRequest};
use crate::util::validation::format_file_size;

#[component]
pub fn NewProjectModal(open: RwSignal<bool>) -> impl IntoView {
    let form = RwSignal::new(ProjectRequest::default());

    let close = move || {
        open.set(false);
        form.set(ProjectRequest::default());
    };

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::portal::AttachedFile;

            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(list) = input.files() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let picked = (0..list.length())
                    .filter_map(|i| list.item(i))
                    .map(|f| AttachedFile { name: f.name(), size: f.size() as u64 })
                    .collect::<Vec<_>>();
                form.update(|r| r.attach(picked));
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        let mut accepted = false;
        form.update(|r| accepted = r.submit());
        if accepted {
            leptos::logging::log!(
                "project request: name={} type={} files={}",
                snapshot.name.trim(),
                snapshot.project_type,
                snapshot.files.len()
            );
            close();
        }
    };

    let error_line = move |pick: fn(&ProjectRequest) -> Option<&'static str>| {
        move || pick(&form.get()).map(|msg| view! { <p class="form-error">{msg}</p> })
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>"Start New Project"</h2>
                        <button class="dialog__close" aria-label="Close" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>
                    <form class="project-form" on:submit=on_submit>
                        <label class="form-label">
                            "Project Name *"
                            <input
                                class="form-input"
                                type="text"
                                placeholder="E.g., E-Commerce Website"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|r| r.name = event_target_value(&ev))
                            />
                        </label>
                        {error_line(|r| r.errors.name)}
                        <label class="form-label">
                            "Project Type *"
                            <select
                                class="form-input"
                                prop:value=move || form.get().project_type
                                on:change=move |ev| form.update(|r| r.project_type = event_target_value(&ev))
                            >
                                {PROJECT_TYPES
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        {error_line(|r| r.errors.project_type)}
                        <div class="form-row">
                            <label class="form-label">
                                "Budget (Optional)"
                                <input
                                    class="form-input"
                                    type="text"
                                    placeholder="$5,000 - $10,000"
                                    prop:value=move || form.get().budget
                                    on:input=move |ev| form.update(|r| r.budget = event_target_value(&ev))
                                />
                            </label>
                            <label class="form-label">
                                "Deadline (Optional)"
                                <input
                                    class="form-input"
                                    type="date"
                                    prop:value=move || form.get().deadline
                                    on:input=move |ev| form.update(|r| r.deadline = event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <label class="form-label">
                            "Project Description *"
                            <textarea
                                class="form-input"
                                rows="5"
                                placeholder="Describe your project requirements, goals, and any specific features you need..."
                                prop:value=move || form.get().description
                                on:input=move |ev| form.update(|r| r.description = event_target_value(&ev))
                            ></textarea>
                        </label>
                        {error_line(|r| r.errors.description)}
                        <label class="form-label">
                            "Attachments (Optional)"
                            <input class="form-input" type="file" multiple on:change=on_files/>
                        </label>
                        <ul class="file-list">
                            {move || {
                                form.get()
                                    .files
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, file)| {
                                        view! {
                                            <li class="file-list__item">
                                                <span>{file.name}</span>
                                                <span class="file-list__size">{format_file_size(file.size)}</span>
                                                <button
                                                    type="button"
                                                    class="btn btn--icon"
                                                    aria-label="Remove file"
                                                    on:click=move |_| form.update(|r| r.remove_file(index))
                                                >
                                                    "🗑"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn--primary">
                                "Submit Project"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
