//! Admin payments section: totals, status filter tabs, settle pending
//! records, add and delete.

use leptos::prelude::*;

use crate::state::admin::{
    Payment, PaymentFilter, PaymentLedger, PaymentMethod, PaymentStatus, format_rupees,
};
use crate::util::clock::today_iso;
use crate::util::confirm::confirm;

#[component]
pub fn PaymentsSection() -> impl IntoView {
    let ledger = RwSignal::new(PaymentLedger::seeded());
    let filter = RwSignal::new(PaymentFilter::All);
    let show_add = RwSignal::new(false);

    view! {
        <section class="admin-payments">
            <div class="section-header">
                <div>
                    <h2>"Payments Management"</h2>
                    <p class="muted">"Track and manage client payments"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add Payment"
                </button>
            </div>
            <div class="stat-grid">
                <div class="stat-card">
                    <p class="muted">"Total Revenue"</p>
                    <h3>{move || format_rupees(ledger.get().total_revenue())}</h3>
                </div>
                <div class="stat-card">
                    <p class="muted">"Pending Amount"</p>
                    <h3>{move || format_rupees(ledger.get().pending_amount())}</h3>
                </div>
                <div class="stat-card">
                    <p class="muted">"Total Transactions"</p>
                    <h3>{move || ledger.get().payments.len()}</h3>
                </div>
            </div>
            <div class="tabs">
                {PaymentFilter::TABS
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
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"User & Project"</th>
                        <th>"Amount"</th>
                        <th>"Transaction ID"</th>
                        <th>"Method"</th>
                        <th>"Date"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        ledger
                            .get()
                            .filtered(filter.get())
                            .into_iter()
                            .map(|payment| view! { <PaymentRow payment=payment ledger=ledger/> })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || show_add.get()>
                <AddPaymentDialog ledger=ledger on_close=Callback::new(move |()| show_add.set(false))/>
            </Show>
        </section>
    }
}

#[component]
fn PaymentRow(payment: Payment, ledger: RwSignal<PaymentLedger>) -> impl IntoView {
    let id = StoredValue::new(payment.id.clone());
    let pending = payment.status == PaymentStatus::Pending;

    let resolve = move |outcome: PaymentStatus| {
        ledger.update(|l| {
            l.resolve(&id.get_value(), outcome);
        });
    };
    let on_delete = move |_| {
        if confirm("Are you sure you want to delete this payment record?") {
            ledger.update(|l| l.delete(&id.get_value()));
        }
    };

    view! {
        <tr>
            <td>
                <p>{payment.user_name}</p>
                <p class="muted">{payment.project_name}</p>
            </td>
            <td>{payment.amount}</td>
            <td class="mono">{payment.transaction_id}</td>
            <td>{payment.method.label()}</td>
            <td>{payment.payment_date}</td>
            <td>
                <span class=format!("badge badge--{}", payment.status.label().to_lowercase())>
                    {payment.status.label()}
                </span>
            </td>
            <td class="data-table__actions">
                {pending
                    .then(|| {
                        view! {
                            <button
                                class="btn btn--icon"
                                title="Mark as Completed"
                                on:click=move |_| resolve(PaymentStatus::Completed)
                            >
                                "✔"
                            </button>
                            <button
                                class="btn btn--icon"
                                title="Mark as Failed"
                                on:click=move |_| resolve(PaymentStatus::Failed)
                            >
                                "✖"
                            </button>
                        }
                    })}
                <button class="btn btn--icon btn--danger" title="Delete" on:click=on_delete>
                    "🗑"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn AddPaymentDialog(ledger: RwSignal<PaymentLedger>, on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(Payment { payment_date: today_iso(), ..Payment::default() });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payment = form.get_untracked();
        let required = [&payment.user_name, &payment.project_name, &payment.amount, &payment.transaction_id];
        if required.iter().any(|v| v.trim().is_empty()) || payment.payment_date.is_empty() {
            return;
        }
        ledger.update(|l| {
            l.add(payment);
        });
        on_close.run(());
    };

    let text_input = move |label: &'static str,
                           kind: &'static str,
                           placeholder: &'static str,
                           pick: fn(&mut Payment) -> &mut String| {
        view! {
            <label class="form-label">
                {label}
                <input
                    class="form-input"
                    type=kind
                    placeholder=placeholder
                    required
                    prop:value=move || {
                        let mut payment = form.get();
                        std::mem::take(pick(&mut payment))
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|p| *pick(p) = value);
                    }
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Payment Record"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <div class="form-row">
                        {text_input("User Name *", "text", "John Doe", |p| &mut p.user_name)}
                        {text_input("Project Name *", "text", "E-Commerce Platform", |p| &mut p.project_name)}
                    </div>
                    <div class="form-row">
                        {text_input("Amount *", "text", "₹50,000", |p| &mut p.amount)}
                        {text_input("Transaction ID *", "text", "TXN123456789", |p| &mut p.transaction_id)}
                    </div>
                    <div class="form-row">
                        <label class="form-label">
                            "Payment Method *"
                            <select
                                class="form-input"
                                prop:value=move || form.get().method.label()
                                on:change=move |ev| {
                                    if let Some(method) = PaymentMethod::from_label(&event_target_value(&ev)) {
                                        form.update(|p| p.method = method);
                                    }
                                }
                            >
                                {PaymentMethod::ALL
                                    .into_iter()
                                    .map(|m| view! { <option value=m.label()>{m.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="form-label">
                            "Status *"
                            <select
                                class="form-input"
                                prop:value=move || form.get().status.label()
                                on:change=move |ev| {
                                    if let Some(status) = PaymentStatus::from_label(&event_target_value(&ev)) {
                                        form.update(|p| p.status = status);
                                    }
                                }
                            >
                                {PaymentStatus::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>
                    {text_input("Payment Date *", "date", "", |p| &mut p.payment_date)}
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Add Payment"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
