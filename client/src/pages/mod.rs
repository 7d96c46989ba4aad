//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin_dashboard;
pub mod admin_login;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod notifications;
pub mod profile;
pub mod settings;
pub mod signup;
pub mod work;
