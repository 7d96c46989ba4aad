//! Client profile page: avatar, contact details, bio, and project stats.

use leptos::prelude::*;

use crate::components::portal_chrome::{DashboardHeader, DashboardSidebar};
use crate::state::admin::initials;
use crate::state::portal::{FLASH_MESSAGE_MS, PROFILE_SAVED_MESSAGE, Profile, profile_stats};
use crate::util::delay::after_ms;

/// Single-line fields of the profile form: `(label, input type)`.
const FIELDS: [(&str, &str); 5] =
    [("Full Name", "text"), ("Email", "email"), ("Phone", "tel"), ("Company", "text"), ("Location", "text")];

fn field(profile: &Profile, index: usize) -> &String {
    match index {
        0 => &profile.name,
        1 => &profile.email,
        2 => &profile.phone,
        3 => &profile.company,
        _ => &profile.location,
    }
}

fn field_mut(profile: &mut Profile, index: usize) -> &mut String {
    match index {
        0 => &mut profile.name,
        1 => &mut profile.email,
        2 => &mut profile.phone,
        3 => &mut profile.company,
        _ => &mut profile.location,
    }
}

const RECENT_ACTIVITY: [(&str, &str); 3] = [
    ("Project Completed", "Brand Identity project was marked as completed"),
    ("New Message", "Received a message about E-Commerce Website"),
    ("Project Started", "Mobile App Design project has begun"),
];

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = RwSignal::new(Profile::default());
    let flash = RwSignal::new(None::<&'static str>);

    let on_avatar = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let url = input
                .files()
                .and_then(|list| list.item(0))
                .and_then(|file| web_sys::Url::create_object_url_with_blob(&file).ok());
            if let Some(url) = url {
                profile.update(|p| p.avatar_url = Some(url));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!("profile saved: {}", profile.get_untracked().email);
        flash.set(Some(PROFILE_SAVED_MESSAGE));
        after_ms(FLASH_MESSAGE_MS, move || flash.set(None));
    };

    view! {
        <div class="portal">
            <DashboardSidebar/>
            <div class="portal__main">
                <DashboardHeader title="Profile"/>
                <main class="portal__content profile-page">
                    <h1>"My Profile"</h1>
                    {move || flash.get().map(|msg| view! { <div class="flash flash--success">{msg}</div> })}
                    <section class="profile-card">
                        <label class="avatar avatar--large">
                            {move || match profile.get().avatar_url {
                                Some(url) => view! { <img src=url alt="Avatar"/> }.into_any(),
                                None => initials(&profile.get().name).into_any(),
                            }}
                            <input type="file" accept="image/*" class="visually-hidden" on:change=on_avatar/>
                        </label>
                        <div>
                            <h2>{move || profile.get().name}</h2>
                            <p class="muted">{move || profile.get().email}</p>
                            <p class="muted">{move || profile.get().location} " · Joined Nov 2025"</p>
                        </div>
                    </section>
                    <section class="stat-grid">
                        {profile_stats()
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="stat-card">
                                        <h3>{value}</h3>
                                        <p class="muted">{label}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </section>
                    <form class="panel" on:submit=on_save>
                        <h3>"Profile Information"</h3>
                        <div class="form-grid">
                            {FIELDS
                                .into_iter()
                                .enumerate()
                                .map(|(index, (label, kind))| {
                                    view! {
                                        <label class="form-label">
                                            {label}
                                            <input
                                                class="form-input"
                                                type=kind
                                                prop:value=move || profile.with(|p| field(p, index).clone())
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    profile.update(|p| *field_mut(p, index) = value);
                                                }
                                            />
                                        </label>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <label class="form-label">
                            "Bio"
                            <textarea
                                class="form-input"
                                rows="4"
                                prop:value=move || profile.get().bio
                                on:input=move |ev| profile.update(|p| p.bio = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button class="btn btn--primary" type="submit">"Save Changes"</button>
                    </form>
                    <section class="panel">
                        <h3>"Recent Activity"</h3>
                        {RECENT_ACTIVITY
                            .into_iter()
                            .map(|(title, detail)| {
                                view! {
                                    <div class="activity">
                                        <p class="activity__title">{title}</p>
                                        <p class="muted">{detail}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </section>
                </main>
            </div>
        </div>
    }
}
