//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, dialogs, and admin sections while
//! reading/writing shared state from Leptos context providers.

pub mod admin_payments;
pub mod admin_projects;
pub mod admin_users;
pub mod auth_layout;
pub mod contact_modal;
pub mod navbar;
pub mod new_project_modal;
pub mod portal_chrome;
pub mod protected_route;
pub mod theme_toggle;
