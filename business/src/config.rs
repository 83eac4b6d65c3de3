/// Endpoint configuration for the admin console.
///
/// The whole backend surface is a single GraphQL endpoint; everything the UI
/// dispatches goes through [`AdminConfig::graphql_url`].
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub api_base_url: String,
}

impl AdminConfig {
    /// Point the console at an explicit base URL (tests use the mock server URI).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// The GraphQL endpoint derived from the base URL.
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.api_base_url)
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.userdesk.example.com".to_string(),
        }
    }
}
