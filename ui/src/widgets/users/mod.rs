//! The admin users screen.
//!
//! Submodules:
//! - `api`: GraphQL dispatch over `ehttp`, results handed back via egui temp memory
//! - `panel`: the list table, toolbar, and per-frame response polling
//! - `modal`: the edit-profile dialog

mod api;
mod modal;
mod panel;

pub use panel::{poll_users_responses, users_panel};
