//! Client account settings: contact details, password change, and
//! notification preferences.

use leptos::prelude::*;

use crate::components::auth_layout::FieldError;
use crate::components::portal_chrome::{DashboardHeader, DashboardSidebar};
use crate::state::portal::{
    ACCOUNT_SAVED_MESSAGE, AccountSettings, FLASH_MESSAGE_MS, NotificationPrefs, PASSWORD_CHANGED_MESSAGE,
};
use crate::util::delay::after_ms;
use crate::util::validation::{PasswordChangeErrors, validate_password_change};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let account = RwSignal::new(AccountSettings::default());
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_errors = RwSignal::new(PasswordChangeErrors::default());
    let prefs = RwSignal::new(NotificationPrefs::default());
    let flash = RwSignal::new(None::<&'static str>);

    let show_flash = move |msg: &'static str| {
        flash.set(Some(msg));
        after_ms(FLASH_MESSAGE_MS, move || flash.set(None));
    };

    let on_save_account = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!("account settings saved: {}", account.get_untracked().email);
        show_flash(ACCOUNT_SAVED_MESSAGE);
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = validate_password_change(&new_password.get_untracked(), &confirm_password.get_untracked());
        let valid = result.is_valid();
        password_errors.set(result);
        if valid {
            current_password.set(String::new());
            new_password.set(String::new());
            confirm_password.set(String::new());
            show_flash(PASSWORD_CHANGED_MESSAGE);
        }
    };

    let account_input = move |label: &'static str, kind: &'static str, pick: fn(&mut AccountSettings) -> &mut String| {
        view! {
            <label class="form-label">
                {label}
                <input
                    class="form-input"
                    type=kind
                    prop:value=move || account.with(|a| pick(&mut a.clone()).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        account.update(|a| *pick(a) = value);
                    }
                />
            </label>
        }
    };

    let pref_toggle = move |title: &'static str, detail: &'static str, pick: fn(&mut NotificationPrefs) -> &mut bool| {
        view! {
            <label class="pref-row">
                <div>
                    <p class="pref-row__title">{title}</p>
                    <p class="muted">{detail}</p>
                </div>
                <input
                    type="checkbox"
                    class="switch"
                    prop:checked=move || prefs.with(|p| *pick(&mut p.clone()))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        prefs.update(|p| *pick(p) = checked);
                    }
                />
            </label>
        }
    };

    view! {
        <div class="portal">
            <DashboardSidebar/>
            <div class="portal__main">
                <DashboardHeader title="Settings"/>
                <main class="portal__content settings-page">
                    <h1>"Settings"</h1>
                    {move || flash.get().map(|msg| view! { <div class="flash flash--success">{msg}</div> })}

                    <form class="panel" on:submit=on_save_account>
                        <h2>"Account Information"</h2>
                        <div class="form-grid">
                            {account_input("Full Name", "text", |a| &mut a.name)}
                            {account_input("Email", "email", |a| &mut a.email)}
                            {account_input("Phone", "tel", |a| &mut a.phone)}
                            {account_input("Company", "text", |a| &mut a.company)}
                        </div>
                        <button class="btn btn--primary" type="submit">"Save Changes"</button>
                    </form>

                    <form class="panel" on:submit=on_change_password>
                        <h2>"Change Password"</h2>
                        <label class="form-label">
                            "Current Password"
                            <input
                                class="form-input"
                                type="password"
                                prop:value=move || current_password.get()
                                on:input=move |ev| current_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-label">
                            "New Password"
                            <input
                                class="form-input"
                                type="password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| {
                                    new_password.set(event_target_value(&ev));
                                    password_errors.update(|e| e.new_password = None);
                                }
                            />
                        </label>
                        <FieldError message=Signal::derive(move || password_errors.get().new_password)/>
                        <label class="form-label">
                            "Confirm New Password"
                            <input
                                class="form-input"
                                type="password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| {
                                    confirm_password.set(event_target_value(&ev));
                                    password_errors.update(|e| e.confirm_password = None);
                                }
                            />
                        </label>
                        <FieldError message=Signal::derive(move || password_errors.get().confirm_password)/>
                        <button class="btn btn--primary" type="submit">"Update Password"</button>
                    </form>

                    <section class="panel">
                        <h2>"Notification Preferences"</h2>
                        {pref_toggle("Email Notifications", "Receive notifications via email", |p| &mut p.email_notifications)}
                        {pref_toggle("Project Updates", "Get notified about project progress", |p| &mut p.project_updates)}
                        {pref_toggle("Message Alerts", "Receive alerts for new messages", |p| &mut p.message_alerts)}
                    </section>
                </main>
            </div>
        </div>
    }
}
