//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome while reading/writing shared state from the
//! Leptos context providers set up in `app`.

pub mod header;
