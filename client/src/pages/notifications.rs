//! Client notification inbox with filters and bulk actions.

use leptos::prelude::*;

use crate::components::portal_chrome::{DashboardHeader, DashboardSidebar};
use crate::state::portal::{NotificationCenter, NotificationFilter};

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let center = RwSignal::new(NotificationCenter::seeded());
    let filter = RwSignal::new(NotificationFilter::All);

    view! {
        <div class="portal">
            <DashboardSidebar/>
            <div class="portal__main">
                <DashboardHeader title="Notifications"/>
                <main class="portal__content notifications-page">
                    <div class="notifications-page__header">
                        <div>
                            <h1>"Notifications"</h1>
                            <p class="muted">{move || center.get().summary()}</p>
                        </div>
                        <div class="notifications-page__actions">
                            <Show when=move || { center.get().unread_count() > 0 }>
                                <button class="btn" on:click=move |_| center.update(NotificationCenter::mark_all_read)>
                                    "Mark all as read"
                                </button>
                            </Show>
                            <Show when=move || !center.get().items.is_empty()>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| center.update(NotificationCenter::clear_all)
                                >
                                    "Clear all"
                                </button>
                            </Show>
                        </div>
                    </div>

                    <div class="tabs">
                        {NotificationFilter::TABS
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        class="tabs__tab"
                                        class:tabs__tab--active=move || filter.get() == tab
                                        on:click=move |_| filter.set(tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    {move || {
                        let items = center.get().filtered(filter.get());
                        if items.is_empty() {
                            return view! {
                                <div class="empty-state">
                                    <p>"🔔"</p>
                                    <h3>"No notifications"</h3>
                                    <p class="muted">"You're all caught up! Check back later for updates."</p>
                                </div>
                            }
                                .into_any();
                        }
                        view! {
                            <ul class="notification-list">
                                {items
                                    .into_iter()
                                    .map(|n| {
                                        let id = n.id;
                                        view! {
                                            <li class="notification" class:notification--unread=!n.read>
                                                <span class="notification__icon">{n.icon}</span>
                                                <div class="notification__body">
                                                    <h4>{n.title}</h4>
                                                    <p>{n.message}</p>
                                                    <span class="muted">{n.time}</span>
                                                </div>
                                                <div class="notification__actions">
                                                    {(!n.read)
                                                        .then(|| {
                                                            view! {
                                                                <button
                                                                    class="btn btn--link"
                                                                    on:click=move |_| center.update(|c| c.mark_read(id))
                                                                >
                                                                    "Mark read"
                                                                </button>
                                                            }
                                                        })}
                                                    <button
                                                        class="btn btn--icon"
                                                        aria-label="Delete notification"
                                                        on:click=move |_| center.update(|c| c.delete(id))
                                                    >
                                                        "🗑"
                                                    </button>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }}
                </main>
            </div>
        </div>
    }
}
