//! Main panel for the admin users screen.

use chrono::Utc;
use egui::{Color32, Frame, InnerResponse, Margin, Response, ScrollArea, Stroke, Ui};
use userdesk_business::{AdminUsersState, UserRecord};

use super::api;
use super::modal::edit_user_modal;

/// The generic line shown when the list fetch fails. The failure detail
/// stays in the log; none of it is rendered.
pub const API_ERROR_MESSAGE: &str =
    "We're experiencing errors with the API! Please come back later.";

/// Border color for the table frame (subtle gray).
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray).
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Helper to create a header cell with background.
fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Helper to create a data cell with padding.
fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Displays the users panel: toolbar, then exactly one of the loading
/// indicator, the generic failure line, or the table of rows.
pub fn users_panel(state: &mut AdminUsersState, graphql_url: &str, ui: &mut Ui) -> Response {
    // A pending refetch request (initial load or a completed mutation) turns
    // into an actual dispatch here, at most one in flight at a time.
    if state.take_refetch_request() && !state.is_fetching {
        state.set_fetching();
        api::fetch_users(graphql_url, ui.ctx().clone());
    }

    let response = ui.vertical(|ui| {
        ui.horizontal(|ui| {
            if ui.button("Refresh").clicked() && !state.is_fetching {
                state.set_fetching();
                api::fetch_users(graphql_url, ui.ctx().clone());
            }
            if state.is_fetching {
                ui.spinner();
                ui.label("Loading...");
            }
        });

        ui.add_space(8.0);

        if state.is_fetching {
            // The toolbar already shows the indicator; no rows while in flight.
            return;
        }

        if state.error.is_some() {
            ui.label(API_ERROR_MESSAGE);
            return;
        }

        // Collect row actions after the table iteration (avoiding borrow issues)
        let mut row_to_edit: Option<UserRecord> = None;
        let mut email_to_delete: Option<String> = None;

        Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("users_table")
                        .num_columns(3)
                        .striped(true)
                        .spacing([16.0, 0.0])
                        .min_col_width(60.0)
                        .show(ui, |ui| {
                            header_cell(ui, |ui| {
                                ui.strong("Email");
                            });
                            header_cell(ui, |ui| {
                                ui.strong("Password");
                            });
                            header_cell(ui, |ui| {
                                ui.strong("Actions");
                            });
                            ui.end_row();

                            for user in &state.users {
                                data_cell(ui, |ui| {
                                    ui.label(&user.email);
                                });

                                // The backend hands the password out in
                                // cleartext and this screen shows it as-is.
                                data_cell(ui, |ui| {
                                    ui.label(&user.password);
                                });

                                data_cell(ui, |ui| {
                                    ui.horizontal(|ui| {
                                        if ui.button("Modify").clicked() {
                                            row_to_edit = Some(user.clone());
                                        }
                                        // Dispatched immediately: there is no
                                        // confirmation step for deletes.
                                        if ui.button("Delete").clicked() {
                                            email_to_delete = Some(user.email.clone());
                                        }
                                    });
                                });

                                ui.end_row();
                            }
                        });
                });
            });

        if let Some(user) = row_to_edit {
            state.open_edit(&user);
        }

        if let Some(email) = email_to_delete {
            api::delete_user(graphql_url, &email, ui.ctx().clone());
        }
    });

    if state.edit_open {
        edit_user_modal(state, graphql_url, ui);
    }

    response.response
}

/// Poll for async responses and update state.
/// Call this once per frame, before rendering.
pub fn poll_users_responses(state: &mut AdminUsersState, ctx: &egui::Context) {
    // Users list arrived
    if let Some(users) = ctx.memory(|mem| {
        mem.data
            .get_temp::<Vec<UserRecord>>(egui::Id::new(api::USERS_RESPONSE_ID))
    }) {
        state.update_users(users, Utc::now());
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<Vec<UserRecord>>(egui::Id::new(api::USERS_RESPONSE_ID));
        });
    }

    // Users list fetch failed
    if let Some(error) =
        ctx.memory(|mem| mem.data.get_temp::<String>(egui::Id::new(api::USERS_ERROR_ID)))
    {
        state.set_error(error);
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new(api::USERS_ERROR_ID));
        });
    }

    // A mutation completed; the list is refetched either way the backend
    // flagged the outcome.
    if ctx
        .memory(|mem| {
            mem.data
                .get_temp::<String>(egui::Id::new(api::MUTATION_DONE_ID))
        })
        .is_some()
    {
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new(api::MUTATION_DONE_ID));
        });
        state.request_refetch();
    }
}
