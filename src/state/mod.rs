//! Process-wide observable state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is created once in `app` and provided via Leptos context
//! so every view observes the same authentication truth without prop-threading.

pub mod session;
