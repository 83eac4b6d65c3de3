//! Domain layer for the Userdesk admin console.
//!
//! This crate is deliberately GUI-free so the UI code can remain "dumb":
//! - UI reads state and renders
//! - UI dispatches network calls and feeds the results back into state
//! - State, validation, and wire definitions live here
//!
//! Everything in this crate is unit-testable without an event loop.

mod config;
pub mod graphql;
pub mod users;

pub use config::AdminConfig;
pub use users::operations::{
    DeleteUserData, DeleteUserPayload, EditUserData, EditUserPayload, UserRecord, UsersData,
};
pub use users::schema::{FieldErrors, validate_profile};
pub use users::state::{AdminUsersState, UserForm};
