//! State for the admin users screen.
//!
//! The UI renders from this struct and dispatches commands/network calls;
//! every transition lives here so it can be tested without a frame loop.

use chrono::{DateTime, Utc};

use super::operations::UserRecord;
use super::schema::FieldErrors;

/// The transient copy of "the row currently open for editing".
///
/// Closing the modal resets the fields to empty strings, not to an absent
/// record; downstream code relies on that exact shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub id: String,
    pub email: String,
    pub password: String,
}

/// State for the users panel.
#[derive(Debug, Default)]
pub struct AdminUsersState {
    /// List of users fetched from the backend.
    pub users: Vec<UserRecord>,

    /// Whether a list fetch is currently in flight.
    pub is_fetching: bool,

    /// Detail of the last fetch failure. The UI renders a generic message
    /// and keeps the detail for logs and tests.
    pub error: Option<String>,

    /// Set when the screen wants a (re)fetch; the panel consumes it on the
    /// next frame and dispatches the query.
    needs_refetch: bool,

    /// Last successful fetch timestamp (`DateTime<Utc>` for test mockability).
    pub last_fetch: Option<DateTime<Utc>>,

    /// Whether the edit modal is open.
    pub edit_open: bool,

    /// The row being edited, bound to the modal's inputs.
    pub form: UserForm,

    /// Inline validation messages from the last submit attempt.
    pub field_errors: FieldErrors,
}

impl AdminUsersState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for the list to be (re)fetched on the next frame.
    pub fn request_refetch(&mut self) {
        self.needs_refetch = true;
    }

    /// Consume a pending refetch request.
    pub fn take_refetch_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_refetch)
    }

    /// Mark a fetch as in flight.
    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    /// Apply a successful fetch.
    ///
    /// Takes `now` as a parameter so tests can pin the clock.
    pub fn update_users(&mut self, users: Vec<UserRecord>, now: DateTime<Utc>) {
        self.users = users;
        self.is_fetching = false;
        self.error = None;
        self.last_fetch = Some(now);
    }

    /// Apply a failed fetch.
    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_fetching = false;
    }

    /// Open the edit modal pre-filled from a row.
    pub fn open_edit(&mut self, user: &UserRecord) {
        self.form = UserForm {
            id: user.id.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        };
        self.field_errors = FieldErrors::default();
        self.edit_open = true;
    }

    /// Close the edit modal and reset the form to empty strings.
    pub fn close_edit(&mut self) {
        self.edit_open = false;
        self.form = UserForm::default();
        self.field_errors = FieldErrors::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserRecord {
        UserRecord {
            id: "7".to_string(),
            email: "alice@example.com".to_string(),
            password: "abcd1234".to_string(),
        }
    }

    #[test]
    fn test_fetch_cycle() {
        let mut state = AdminUsersState::new();
        state.request_refetch();
        assert!(state.take_refetch_request());
        assert!(!state.take_refetch_request(), "request is consumed once");

        state.set_fetching();
        assert!(state.is_fetching);

        let now = Utc::now();
        state.update_users(vec![sample_user()], now);
        assert!(!state.is_fetching);
        assert_eq!(state.users.len(), 1);
        assert_eq!(state.last_fetch, Some(now));
    }

    #[test]
    fn test_error_clears_on_next_fetch() {
        let mut state = AdminUsersState::new();
        state.set_error("connection refused".to_string());
        assert_eq!(state.error.as_deref(), Some("connection refused"));
        assert!(!state.is_fetching);

        state.set_fetching();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_open_edit_prefills_form() {
        let mut state = AdminUsersState::new();
        state.open_edit(&sample_user());

        assert!(state.edit_open);
        assert_eq!(state.form.id, "7");
        assert_eq!(state.form.email, "alice@example.com");
        assert_eq!(state.form.password, "abcd1234");
        assert!(state.field_errors.is_empty());
    }

    #[test]
    fn test_close_edit_resets_to_empty_strings() {
        let mut state = AdminUsersState::new();
        state.open_edit(&sample_user());
        state.form.email = "edited@example.com".to_string();

        state.close_edit();

        assert!(!state.edit_open);
        // The reset shape is empty strings, not an absent record.
        assert_eq!(state.form, UserForm::default());
        assert_eq!(state.form.email, "");
        assert_eq!(state.form.password, "");
    }

    #[test]
    fn test_open_edit_clears_previous_field_errors() {
        let mut state = AdminUsersState::new();
        state.field_errors.email = Some("Email required".to_string());

        state.open_edit(&sample_user());
        assert!(state.field_errors.is_empty());
    }
}
