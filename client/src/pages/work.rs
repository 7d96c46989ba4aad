//! Portfolio listing and per-project detail pages.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::contact_modal::ContactModal;
use crate::components::navbar::Navbar;
use crate::state::work::{WORK, find_by_slug};

#[component]
pub fn WorkPage() -> impl IntoView {
    view! {
        <div class="site">
            <Navbar/>
            <main class="work-page">
                <a href="/#work" class="back-link">"← Back to Home"</a>
                <h1>"Our Work"</h1>
                <p class="work-page__lead">
                    "Explore our portfolio of successful projects. From startups to enterprises, we've helped businesses achieve their digital goals."
                </p>
                <div class="work-page__grid">
                    {WORK
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="work-card">
                                    <div class=format!("work-card__media {}", project.accent)>
                                        <span class="work-card__category">{project.category}</span>
                                        <span class="work-card__year">{project.year}</span>
                                        <a class="btn btn--primary work-card__details" href=format!("/work/{}", project.slug)>
                                            "View Details"
                                        </a>
                                    </div>
                                    <div class="work-card__body">
                                        <h3>{project.title}</h3>
                                        <p>{project.description}</p>
                                        <div class="tag-list">
                                            {project.tags.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect::<Vec<_>>()}
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <section class="cta">
                    <h2>"Ready to start your project?"</h2>
                    <p>"Let's collaborate and bring your vision to life. Our team is ready to help you succeed."</p>
                    <a href="/login" class="btn btn--primary">"Get Started"</a>
                </section>
            </main>
            <ContactModal/>
        </div>
    }
}

/// Detail placeholder for one project. Unknown slugs still render, naming
/// the slug, since detail content is meant to be managed later.
#[component]
pub fn WorkDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    view! {
        <div class="site">
            <Navbar/>
            <main class="work-detail">
                <a href="/work" class="back-link">"← Back to Projects"</a>
                {move || {
                    let slug = slug();
                    match find_by_slug(&slug) {
                        Some(project) => {
                            view! {
                                <h1>{project.title}</h1>
                                <p class="work-detail__meta">{project.category} " · " {project.year}</p>
                                <p>{project.description}</p>
                                <div class="tag-list">
                                    {project.tags.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <h1>"Project Details"</h1>
                                <p class="work-detail__meta">"Project: " {slug}</p>
                            }
                                .into_any()
                        }
                    }
                }}
                <p class="work-detail__note">
                    "This page will be customizable from the admin panel. You can add images, videos, descriptions, and more."
                </p>
            </main>
            <ContactModal/>
        </div>
    }
}
