//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` carries the login orchestration reused by every sign-in entry point
//! so pages stay thin and the attempt protocol stays identical everywhere.

pub mod auth;
