//! Networking modules for the identity-provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the normalization façade every sign-in path goes through,
//! `api` is its HTTP gateway to the external providers, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod auth;
pub mod types;
