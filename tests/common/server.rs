//! Mock admin server

use super::fixtures::sample_org;
use org_admin_rs::config::{ApiConfig, UiConfig};
use org_admin_rs::{AdminConsole, Document, HttpAdminClient, RecordingHost};
use serde_json::Value;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A wiremock server standing in for the admin API
pub struct AdminServer {
    pub server: MockServer,
}

impl AdminServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Server answering the four collection routes with [`sample_org`]
    pub async fn with_sample_org() -> Self {
        let admin = Self::start().await;
        let (departments, teams, roles, users) = sample_org();
        admin.serve("/api/departments", departments).await;
        admin.serve("/api/teams", teams).await;
        admin.serve("/api/roles", roles).await;
        admin.serve("/api/users", users).await;
        admin
    }

    /// Answer `GET route` with `body`
    pub async fn serve(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub fn client(&self) -> HttpAdminClient {
        let config = ApiConfig::default().with_base_url(self.server.uri());
        HttpAdminClient::new(&config).unwrap()
    }

    /// Console bound to `document`, not yet started
    pub fn console(&self, document: Document) -> AdminConsole<RecordingHost> {
        self.console_with_host(document, RecordingHost::new())
    }

    pub fn console_with_host(
        &self,
        document: Document,
        host: RecordingHost,
    ) -> AdminConsole<RecordingHost> {
        AdminConsole::new(UiConfig::default(), Arc::new(self.client()), host, document)
    }

    /// Console bound to `document` with the collections loaded
    pub async fn started_console(&self, document: Document) -> AdminConsole<RecordingHost> {
        let mut console = self.console(document);
        console.start().await;
        console
    }
}
