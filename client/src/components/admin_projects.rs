//! Admin portfolio section: drag-to-reorder list, publish and feature
//! toggles, delete, and the add-project dialog.
//!
//! DESIGN
//! ======
//! Reordering uses native HTML drag events. The dragged id is held in a
//! signal between `dragstart` and `drop`; the drop target's id decides the
//! splice position in `ProjectBoard::move_project`.

use leptos::prelude::*;

use crate::state::admin::{NewPortfolioProject, PROJECT_CATEGORIES, PortfolioProject, ProjectBoard, PublishStatus};
use crate::util::confirm::confirm;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let board = RwSignal::new(ProjectBoard::seeded());
    let dragging = RwSignal::new(None::<String>);
    let show_add = RwSignal::new(false);

    let on_drop = move |over: String| {
        if let Some(active) = dragging.get_untracked() {
            board.update(|b| {
                b.move_project(&active, &over);
            });
        }
        dragging.set(None);
    };

    view! {
        <section class="admin-projects">
            <div class="section-header">
                <div>
                    <h2>"Portfolio Projects"</h2>
                    <p class="muted">"Manage your showcase projects"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add Project"
                </button>
            </div>
            <p class="muted">"Drag projects to change their order on the site."</p>
            <ul class="sortable">
                {move || {
                    board
                        .get()
                        .items
                        .into_iter()
                        .map(|project| view! { <ProjectRow project=project board=board dragging=dragging on_drop=Callback::new(on_drop)/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <Show when=move || show_add.get()>
                <AddProjectDialog board=board on_close=Callback::new(move |()| show_add.set(false))/>
            </Show>
        </section>
    }
}

#[component]
fn ProjectRow(
    project: PortfolioProject,
    board: RwSignal<ProjectBoard>,
    dragging: RwSignal<Option<String>>,
    on_drop: Callback<String>,
) -> impl IntoView {
    let id = StoredValue::new(project.id.clone());
    let is_dragging = move || dragging.get().as_deref() == Some(id.get_value().as_str());

    let on_delete = move |_| {
        if confirm("Are you sure you want to delete this project?") {
            board.update(|b| b.delete(&id.get_value()));
        }
    };

    view! {
        <li
            class="sortable__item"
            class:sortable__item--dragging=is_dragging
            draggable="true"
            on:dragstart=move |_| dragging.set(Some(id.get_value()))
            on:dragend=move |_| dragging.set(None)
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                on_drop.run(id.get_value());
            }
        >
            <span class="sortable__handle" aria-hidden="true">"⠿"</span>
            <div class="sortable__body">
                <h3>{project.title}</h3>
                <p class="muted">{project.category}</p>
            </div>
            <span class=format!("badge badge--{}", project.status.label().to_lowercase())>
                {project.status.label()}
            </span>
            {project.featured.then(|| view! { <span class="badge badge--featured">"Featured"</span> })}
            <div class="sortable__actions">
                <button
                    class="btn btn--icon"
                    title=if project.status == PublishStatus::Published { "Unpublish" } else { "Publish" }
                    on:click=move |_| board.update(|b| b.toggle_status(&id.get_value()))
                >
                    {if project.status == PublishStatus::Published { "👁" } else { "◌" }}
                </button>
                <button
                    class="btn btn--icon"
                    title="Toggle featured"
                    on:click=move |_| board.update(|b| b.toggle_featured(&id.get_value()))
                >
                    {if project.featured { "★" } else { "☆" }}
                </button>
                <button class="btn btn--icon btn--danger" title="Delete" on:click=on_delete>
                    "🗑"
                </button>
            </div>
        </li>
    }
}

#[component]
fn AddProjectDialog(board: RwSignal<ProjectBoard>, on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(NewPortfolioProject::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new = form.get_untracked();
        if new.title.trim().is_empty() || new.description.trim().is_empty() || new.year.trim().is_empty() {
            return;
        }
        board.update(|b| {
            b.add(new);
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Project"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="form-label">
                        "Project Title *"
                        <input
                            class="form-input"
                            type="text"
                            placeholder="Enter project title"
                            required
                            prop:value=move || form.get().title
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </label>
                    <div class="form-row">
                        <label class="form-label">
                            "Category *"
                            <select
                                class="form-input"
                                prop:value=move || form.get().category
                                on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                            >
                                {PROJECT_CATEGORIES
                                    .iter()
                                    .map(|c| view! { <option value=*c>{*c}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="form-label">
                            "Year *"
                            <input
                                class="form-input"
                                type="text"
                                placeholder="2024"
                                required
                                prop:value=move || form.get().year
                                on:input=move |ev| form.update(|f| f.year = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="form-label">
                        "Description *"
                        <textarea
                            class="form-input"
                            rows="4"
                            placeholder="Brief project description"
                            required
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="form-label">
                        "Tags (comma separated)"
                        <input
                            class="form-input"
                            type="text"
                            placeholder="React, Node.js, MongoDB"
                            prop:value=move || form.get().tags
                            on:input=move |ev| form.update(|f| f.tags = event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Add Project"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
