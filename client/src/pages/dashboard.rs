//! Client dashboard: project list, project conversations, and the
//! new-project request modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active view and modal follow the URL query (`?view=messages`,
//! `?action=new-project`), so sidebar links and bookmarks land on the same
//! screen. The page is not behind the admin gate.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::new_project_modal::NewProjectModal;
use crate::components::portal_chrome::{DashboardHeader, DashboardSidebar};
use crate::state::portal::{DashboardEntry, DashboardView, Inbox, Sender, client_projects};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let query = use_query_map();
    let view = RwSignal::new(DashboardView::Projects);
    let new_project_open = RwSignal::new(false);

    Effect::new(move || {
        let entry = {
            let query = query.read();
            DashboardEntry::from_query(query.get("view").as_deref(), query.get("action").as_deref())
        };
        view.set(entry.view);
        if entry.open_new_project {
            new_project_open.set(true);
        }
    });

    view! {
        <div class="portal">
            <DashboardSidebar/>
            <div class="portal__main">
                <DashboardHeader title="Dashboard"/>
                <main class="portal__content">
                    {move || match view.get() {
                        DashboardView::Projects => {
                            view! { <ProjectsView on_new_project=Callback::new(move |()| new_project_open.set(true))/> }
                                .into_any()
                        }
                        DashboardView::Messages => view! { <MessagesView/> }.into_any(),
                    }}
                </main>
            </div>
            <NewProjectModal open=new_project_open/>
        </div>
    }
}

#[component]
fn ProjectsView(on_new_project: Callback<()>) -> impl IntoView {
    view! {
        <div class="projects-view">
            <div class="projects-view__header">
                <div>
                    <h1>"My Projects"</h1>
                    <p class="muted">"Manage and track your ongoing projects"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| on_new_project.run(())>
                    "+ New Project"
                </button>
            </div>
            <div class="projects-view__grid">
                {client_projects()
                    .into_iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <div class="project-card__top">
                                    <h3>{project.name}</h3>
                                    <span class=format!("badge badge--{}", project.stage.slug())>
                                        {project.stage.label()}
                                    </span>
                                </div>
                                <p class="muted">{project.description}</p>
                                <div class="progress">
                                    <div class="progress__label">
                                        <span>"Progress"</span>
                                        <span>{format!("{}%", project.progress)}</span>
                                    </div>
                                    <div class="progress__track">
                                        <div class="progress__fill" style=format!("width: {}%", project.progress)></div>
                                    </div>
                                </div>
                                <div class="project-card__meta">
                                    <span>"📅 " {project.deadline}</span>
                                    <a href="/dashboard?view=messages">{format!("💬 {}", project.messages)}</a>
                                </div>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn MessagesView() -> impl IntoView {
    let inbox = RwSignal::new(Inbox::seeded());
    let draft = RwSignal::new(String::new());

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut sent = false;
        inbox.update(|i| sent = i.send(&draft.get_untracked()));
        if sent {
            draft.set(String::new());
        }
    };

    view! {
        <div class="messages-view">
            <aside class="messages-view__list">
                <h2>"Messages"</h2>
                {move || {
                    let current = inbox.get();
                    current
                        .conversations
                        .iter()
                        .map(|c| {
                            let id = c.id;
                            view! {
                                <button
                                    class="conversation"
                                    class:conversation--active=current.selected == id
                                    on:click=move |_| inbox.update(|i| i.select(id))
                                >
                                    <div class="conversation__top">
                                        <span class="conversation__name">{c.project_name.clone()}</span>
                                        {(c.unread > 0).then(|| view! { <span class="badge">{c.unread}</span> })}
                                    </div>
                                    <p class="conversation__preview">{c.last_message.clone()}</p>
                                    <span class="conversation__time">{c.timestamp.clone()}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </aside>
            <section class="messages-view__thread">
                {move || {
                    inbox
                        .get()
                        .selected()
                        .cloned()
                        .map(|conversation| {
                            view! {
                                <header class="thread__header">
                                    <h3>{conversation.project_name}</h3>
                                    <p class="muted">"Project Discussion"</p>
                                </header>
                                <div class="thread__messages">
                                    {conversation
                                        .messages
                                        .into_iter()
                                        .map(|m| {
                                            view! {
                                                <div
                                                    class="bubble"
                                                    class:bubble--mine=m.sender == Sender::Client
                                                >
                                                    <p>{m.text}</p>
                                                    <span class="bubble__time">{m.time}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
                <form class="thread__composer" on:submit=on_send>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Type your message..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || draft.get().trim().is_empty()>
                        "Send"
                    </button>
                </form>
            </section>
        </div>
    }
}
