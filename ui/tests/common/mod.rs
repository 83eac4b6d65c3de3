// Shared across the integration-test binaries; not every binary uses every
// helper.
#![allow(dead_code)]

use egui_kittest::Harness;
use userdesk_ui::AdminApp;
use userdesk_ui::state::State;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, AdminApp>,
}

impl<'a> TestCtx<'a> {
    /// App harness against a mock backend whose users query returns `users`.
    ///
    /// Mocks must be mounted before the harness exists (the app fetches on
    /// its first frame); callers needing extra mocks mount them on the
    /// server first and then call [`TestCtx::from_server`].
    pub async fn new_with_users(users: serde_json::Value) -> Self {
        let mock_server = start_mock_server().await;
        mount_users_query(&mock_server, users).await;
        Self::from_server(mock_server)
    }

    pub fn from_server(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri());
        let app = AdminApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, AdminApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, AdminApp> {
        &self.harness
    }

    /// Run frames until in-flight requests have had time to land.
    pub async fn settle(&mut self) {
        settle_harness(&mut self.harness).await;
    }
}

/// Step the harness, give background requests time to complete, then step
/// again so the polled results render.
pub async fn settle_harness(harness: &mut Harness<'_, AdminApp>) {
    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }
}

pub async fn start_mock_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

/// Mount the users query returning the given collection.
pub async fn mount_users_query(server: &MockServer, users: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("getUsers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": { "users": users } })),
        )
        .mount(server)
        .await;
}

/// A two-row collection used across tests.
pub fn two_users() -> serde_json::Value {
    serde_json::json!([
        {"id": "1", "email": "a@b.com", "password": "abcd1234"},
        {"id": "2", "email": "x@y.com", "password": "zyxw9876"}
    ])
}
