use std::sync::Arc;

use wiremock::MockServer;

use reviewbattle_client::connectors::{ReviewServiceClient, ReviewServiceConfig};
use reviewbattle_client::session::InMemorySessionStore;

pub struct TestApp {
    pub server: MockServer,
    pub client: ReviewServiceClient,
    pub session: Arc<InMemorySessionStore>,
}

/// Stand up a wiremock server and a client pointed at it, with an
/// in-memory session store shared between test and client.
pub async fn spawn_client() -> TestApp {
    let server = MockServer::start().await;
    let session = Arc::new(InMemorySessionStore::new());
    let config = ReviewServiceConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    };
    let client = ReviewServiceClient::new(config, session.clone());

    TestApp {
        server,
        client,
        session,
    }
}
