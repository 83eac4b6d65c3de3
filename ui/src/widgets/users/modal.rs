//! The edit-profile dialog.

use egui::{Color32, TextEdit, Ui, Window};
use userdesk_business::{AdminUsersState, validate_profile};

use super::api;

/// Shows the edit modal bound to the state's transient form.
///
/// Submitting validates the schema first; only a clean form dispatches the
/// update mutation, and the dialog then closes and resets without waiting
/// for the mutation to resolve.
pub(crate) fn edit_user_modal(state: &mut AdminUsersState, graphql_url: &str, ui: &mut Ui) {
    let mut open = true;

    Window::new("Edit user")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.add(
                TextEdit::singleline(&mut state.form.email)
                    .hint_text("E-mail*")
                    .desired_width(240.0),
            );
            if let Some(error) = &state.field_errors.email {
                ui.colored_label(Color32::RED, error);
            }

            ui.add_space(4.0);

            // The original screen renders the password as a plain text input.
            ui.add(
                TextEdit::singleline(&mut state.form.password)
                    .hint_text("Password*")
                    .desired_width(240.0),
            );
            if let Some(error) = &state.field_errors.password {
                ui.colored_label(Color32::RED, error);
            }

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Update Admin").clicked() {
                    state.field_errors =
                        validate_profile(&state.form.email, &state.form.password);
                    if state.field_errors.is_empty() {
                        api::update_user(graphql_url, &state.form, ui.ctx().clone());
                        // Fire and forget: the dialog does not wait for the
                        // mutation before closing and resetting.
                        state.close_edit();
                    }
                }

                if ui.button("Cancel").clicked() {
                    state.close_edit();
                }
            });
        });

    if !open {
        state.close_edit();
    }
}

#[cfg(test)]
mod edit_user_modal_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use userdesk_business::UserRecord;

    use super::*;

    /// The modal wired to an address nothing listens on. Validation-failure
    /// tests never reach the network; the dispatch path is covered by the
    /// wiremock integration tests.
    fn modal_harness(state: AdminUsersState) -> Harness<'static, AdminUsersState> {
        Harness::new_ui_state(
            |ui, state| {
                if state.edit_open {
                    edit_user_modal(state, "http://127.0.0.1:9", ui);
                }
            },
            state,
        )
    }

    fn state_editing(email: &str, password: &str) -> AdminUsersState {
        let mut state = AdminUsersState::new();
        state.open_edit(&UserRecord {
            id: "1".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });
        state
    }

    #[test]
    fn test_empty_email_blocks_submit() {
        let mut harness = modal_harness(state_editing("", "abcd1234"));
        harness.step();

        if let Some(button) = harness.query_by_label("Update Admin") {
            button.click();
        }
        harness.step();

        // The modal stays open with the required-field message; no reset.
        let state = harness.state();
        assert!(state.edit_open);
        assert_eq!(state.field_errors.email.as_deref(), Some("Email required"));

        harness.step();
        assert!(harness.query_by_label_contains("Email required").is_some());
    }

    #[test]
    fn test_short_password_blocks_submit() {
        let mut harness = modal_harness(state_editing("a@b.com", "abc"));
        harness.step();

        if let Some(button) = harness.query_by_label("Update Admin") {
            button.click();
        }
        harness.step();

        let state = harness.state();
        assert!(state.edit_open);
        assert!(state.field_errors.password.is_some());

        harness.step();
        assert!(
            harness
                .query_by_label_contains("Must Contain 8 Characters")
                .is_some()
        );
    }

    #[test]
    fn test_valid_submit_closes_and_resets() {
        let mut harness = modal_harness(state_editing("a@b.com", "abcd1234"));
        harness.step();

        if let Some(button) = harness.query_by_label("Update Admin") {
            button.click();
        }
        harness.step();

        // Closed and reset to empty strings without waiting on the network.
        let state = harness.state();
        assert!(!state.edit_open);
        assert_eq!(state.form.email, "");
        assert_eq!(state.form.password, "");
    }

    #[test]
    fn test_cancel_resets_form() {
        let mut harness = modal_harness(state_editing("a@b.com", "abcd1234"));
        harness.step();

        if let Some(button) = harness.query_by_label("Cancel") {
            button.click();
        }
        harness.step();

        let state = harness.state();
        assert!(!state.edit_open);
        assert_eq!(state.form.email, "");
    }
}
