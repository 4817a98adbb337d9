//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and small display pieces while reading
//! shared state from Leptos context providers.

pub mod admin_layout;
pub mod pagination;
pub mod status_badge;
pub mod toast_host;
