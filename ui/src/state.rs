use userdesk_business::{AdminConfig, AdminUsersState};

/// The main application state.
#[derive(Debug, Default)]
pub struct State {
    /// Endpoint configuration.
    pub config: AdminConfig,
    /// The admin users screen.
    pub users: AdminUsersState,
}

impl State {
    /// State pointed at an explicit base URL (tests use the mock server URI).
    pub fn test(base_url: String) -> Self {
        Self {
            config: AdminConfig::new(base_url),
            users: AdminUsersState::new(),
        }
    }
}
