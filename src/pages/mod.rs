//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components` and shared sign-in flow to `util::auth`.

pub mod home;
pub mod login;
