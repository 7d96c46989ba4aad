//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by area (`session`, `gate`, `admin`, `portal`, etc.) so
//! pages depend on small focused models. Everything here is plain Rust with
//! no DOM access, which keeps it testable under `cargo test`.

pub mod admin;
pub mod gate;
pub mod login;
pub mod portal;
pub mod session;
pub mod ui;
pub mod work;
