//! Client-side guard for the admin back-office.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `/admin/dashboard`. On mount it reads the session flag once through
//! the injected `SessionStore` and either reveals its children or navigates
//! to the admin login route.
//!
//! TRADE-OFFS
//! ==========
//! The decision is not re-evaluated while mounted: clearing the flag from
//! another tab leaves the content visible until the next navigation. During
//! SSR effects never run, so the server always renders the checking state
//! and the browser resolves the gate after hydration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::gate::{GateState, SessionGate};
use crate::state::session::SessionStore;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let gate_state = RwSignal::new(GateState::Checking);

    // Runs once per mount; reads no signals.
    Effect::new(move || {
        let mut gate = SessionGate::new();
        let resolved = gate.mount(&store);
        if let Some(target) = resolved.redirect_target() {
            leptos::logging::warn!("admin gate: no session, redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        gate_state.set(resolved);
    });

    view! {
        <Show
            when=move || gate_state.get().renders_content()
            fallback=move || {
                view! {
                    <Show when=move || gate_state.get() == GateState::Checking>
                        <div class="gate-checking">
                            <div class="gate-checking__spinner"></div>
                            <p>"Verifying access..."</p>
                        </div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
