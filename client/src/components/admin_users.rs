//! Admin client-user section: searchable table, add dialog, delete.

use leptos::prelude::*;

use crate::state::admin::{ClientUser, EngagementStatus, UserDirectory, initials};
use crate::util::clock::today_iso;
use crate::util::confirm::confirm;

#[component]
pub fn UsersSection() -> impl IntoView {
    let directory = RwSignal::new(UserDirectory::seeded());
    let search = RwSignal::new(String::new());
    let show_add = RwSignal::new(false);

    view! {
        <section class="admin-users">
            <div class="section-header">
                <div>
                    <h2>"Users Management"</h2>
                    <p class="muted">"Manage client accounts and project requests"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add User"
                </button>
            </div>
            <input
                class="form-input search-input"
                type="text"
                placeholder="Search users by name or email..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"User"</th>
                        <th>"Contact"</th>
                        <th>"Project"</th>
                        <th>"Status"</th>
                        <th>"Total Paid"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        directory
                            .get()
                            .search(&search.get())
                            .into_iter()
                            .map(|user| {
                                let id = user.id.clone();
                                let on_delete = move |_| {
                                    if confirm("Are you sure you want to delete this user?") {
                                        directory.update(|d| d.delete(&id));
                                    }
                                };
                                view! {
                                    <tr>
                                        <td>
                                            <span class="avatar">{initials(&user.name)}</span>
                                            <div>
                                                <p>{user.name}</p>
                                                <p class="muted">{format!("Joined {}", user.joined_date)}</p>
                                            </div>
                                        </td>
                                        <td>
                                            <p>{user.email}</p>
                                            <p class="muted">{user.phone}</p>
                                        </td>
                                        <td>{user.project_name}</td>
                                        <td>
                                            <span class=format!(
                                                "badge badge--{}",
                                                user.project_status.label().to_lowercase().replace(' ', "-"),
                                            )>{user.project_status.label()}</span>
                                        </td>
                                        <td>{user.total_paid}</td>
                                        <td>
                                            <button class="btn btn--icon btn--danger" title="Delete" on:click=on_delete>
                                                "🗑"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || show_add.get()>
                <AddUserDialog directory=directory on_close=Callback::new(move |()| show_add.set(false))/>
            </Show>
        </section>
    }
}

#[component]
fn AddUserDialog(directory: RwSignal<UserDirectory>, on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(ClientUser::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = form.get_untracked();
        if [&user.name, &user.email, &user.phone, &user.project_name].iter().any(|v| v.trim().is_empty()) {
            return;
        }
        let total_paid = if user.total_paid.trim().is_empty() { "₹0".to_owned() } else { user.total_paid.clone() };
        directory.update(|d| {
            d.add(ClientUser { joined_date: today_iso(), total_paid, ..user });
        });
        on_close.run(());
    };

    let text_input = move |label: &'static str,
                           kind: &'static str,
                           placeholder: &'static str,
                           required: bool,
                           pick: fn(&mut ClientUser) -> &mut String| {
        view! {
            <label class="form-label">
                {label}
                <input
                    class="form-input"
                    type=kind
                    placeholder=placeholder
                    required=required
                    prop:value=move || {
                        let mut user = form.get();
                        std::mem::take(pick(&mut user))
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|u| *pick(u) = value);
                    }
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New User"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <div class="form-row">
                        {text_input("Full Name *", "text", "John Doe", true, |u| &mut u.name)}
                        {text_input("Email *", "email", "john@example.com", true, |u| &mut u.email)}
                    </div>
                    <div class="form-row">
                        {text_input("Phone *", "tel", "+91 98765 43210", true, |u| &mut u.phone)}
                        {text_input("Project Name *", "text", "E-Commerce Platform", true, |u| &mut u.project_name)}
                    </div>
                    <div class="form-row">
                        <label class="form-label">
                            "Project Status *"
                            <select
                                class="form-input"
                                prop:value=move || form.get().project_status.label()
                                on:change=move |ev| {
                                    if let Some(status) = EngagementStatus::from_label(&event_target_value(&ev)) {
                                        form.update(|u| u.project_status = status);
                                    }
                                }
                            >
                                {EngagementStatus::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        {text_input("Total Paid", "text", "₹50,000", false, |u| &mut u.total_paid)}
                    </div>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Add User"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
