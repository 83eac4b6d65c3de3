//! GraphQL calls for the users screen.
//!
//! `ehttp::fetch` completes on a background thread; callbacks decode the
//! response and park the outcome in egui temp memory under the ids below.
//! [`super::panel::poll_users_responses`] drains them at the top of each
//! frame. Mutation failures are logged and otherwise dropped: the screen has
//! no error surface for them.

use userdesk_business::graphql::{self, GraphqlRequest};
use userdesk_business::users::operations::{
    DELETE_USER_MUTATION, DeleteUserData, EDIT_USER_MUTATION, EditUserData, GET_USERS_QUERY,
    UsersData, delete_user_variables, edit_user_variables,
};
use userdesk_business::UserForm;

/// Temp-memory key carrying a fetched `Vec<UserRecord>`.
pub(crate) const USERS_RESPONSE_ID: &str = "users_response";

/// Temp-memory key carrying the fetch failure detail as a `String`.
pub(crate) const USERS_ERROR_ID: &str = "users_error";

/// Temp-memory key set (to a marker `String`) when a mutation completed and
/// the list should be refetched.
pub(crate) const MUTATION_DONE_ID: &str = "users_mutation_done";

fn post_request(graphql_url: &str, body: Vec<u8>) -> ehttp::Request {
    ehttp::Request {
        method: "POST".to_string(),
        url: graphql_url.to_string(),
        body,
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
    }
}

/// Dispatch the users query.
pub(crate) fn fetch_users(graphql_url: &str, ctx: egui::Context) {
    let envelope = GraphqlRequest {
        query: GET_USERS_QUERY,
        variables: None,
    };
    let request = post_request(graphql_url, envelope.to_body());

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result.map_err(|err| err.to_string()).and_then(|response| {
            graphql::decode::<UsersData>(response.status, &response.bytes)
                .map_err(|err| err.to_string())
        }) {
            Ok(data) => {
                ctx.memory_mut(|mem| {
                    mem.data
                        .insert_temp(egui::Id::new(USERS_RESPONSE_ID), data.users);
                });
            }
            Err(err) => {
                log::error!("Failed to fetch users: {err}");
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(egui::Id::new(USERS_ERROR_ID), err);
                });
            }
        }
    });
}

/// Dispatch the update-profile mutation with the form's current values.
pub(crate) fn update_user(graphql_url: &str, form: &UserForm, ctx: egui::Context) {
    let envelope = GraphqlRequest::new(
        EDIT_USER_MUTATION,
        edit_user_variables(&form.id, &form.email, &form.password),
    );
    let request = post_request(graphql_url, envelope.to_body());

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result.map_err(|err| err.to_string()).and_then(|response| {
            graphql::decode::<EditUserData>(response.status, &response.bytes)
                .map_err(|err| err.to_string())
        }) {
            Ok(data) => {
                log::debug!(
                    "Updated profile of user {}",
                    data.update_user_profile.user.id
                );
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new(MUTATION_DONE_ID),
                        "profile_updated".to_string(),
                    );
                });
            }
            Err(err) => {
                // The screen has no error surface for mutations.
                log::error!("Failed to update user profile: {err}");
            }
        }
    });
}

/// Dispatch the delete mutation, keyed by the row's email.
pub(crate) fn delete_user(graphql_url: &str, email: &str, ctx: egui::Context) {
    let envelope = GraphqlRequest::new(DELETE_USER_MUTATION, delete_user_variables(email));
    let request = post_request(graphql_url, envelope.to_body());

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result.map_err(|err| err.to_string()).and_then(|response| {
            graphql::decode::<DeleteUserData>(response.status, &response.bytes)
                .map_err(|err| err.to_string())
        }) {
            Ok(data) => {
                if let Some(error) = &data.delete_user.error {
                    // The backend's error string is never rendered.
                    log::error!("Delete reported an error: {error}");
                }
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new(MUTATION_DONE_ID),
                        "user_deleted".to_string(),
                    );
                });
            }
            Err(err) => {
                log::error!("Failed to delete user: {err}");
            }
        }
    });
}
