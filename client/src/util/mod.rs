//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (local storage,
//! timers, native dialogs, build configuration) from page and component
//! logic. Each browser call has a non-`hydrate` fallback so the same code
//! renders on the server and runs under native tests.

pub mod clock;
pub mod confirm;
pub mod credentials;
pub mod dark_mode;
pub mod delay;
pub mod storage;
pub mod validation;
