//! reqwest-backed admin API client

use super::endpoints::{self, StatusTarget};
use super::traits::AdminApi;
use crate::config::ApiConfig;
use crate::core::entities::{Department, Entity, EntityId, Role, Team, User, decode_collection};
use crate::utils::error::{AdminError, Result};
use crate::utils::truncate_string;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use tracing::{debug, info, warn};
use url::Url;

/// Longest server error body kept in logs
const LOG_BODY_LIMIT: usize = 200;

/// HTTP implementation of [`AdminApi`]
#[derive(Debug, Clone)]
pub struct HttpAdminClient {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpAdminClient {
    /// Create a client from the api configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AdminError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!("Admin API client created for {}", base_url);
        Ok(Self { base_url, http })
    }

    /// Base URL routes are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a route, keeping any path prefix of the base URL
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn fetch_collection<T: Entity>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let mut request = self.http.get(self.url(path)?);
        if !query.is_empty() {
            request = request.query(query);
        }
        debug!("GET {} {:?}", path, query);

        let response = self.send(request).await?;
        let body = response.bytes().await?;
        let items = decode_collection::<T>(path, &body)?;

        debug!("GET {} returned {} {}s", path, items.len(), T::KIND);
        Ok(items)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        ensure_success(response).await
    }
}

/// Turn a non-success response into [`AdminError::Status`] carrying its body
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    warn!(
        "{} answered {}: {}",
        url,
        status.as_u16(),
        truncate_string(&body, LOG_BODY_LIMIT)
    );
    Err(AdminError::status(status.as_u16(), body))
}

#[async_trait]
impl AdminApi for HttpAdminClient {
    async fn departments(&self) -> Result<Vec<Department>> {
        self.fetch_collection(endpoints::DEPARTMENTS, &[]).await
    }

    async fn teams(&self) -> Result<Vec<Team>> {
        self.fetch_collection(endpoints::TEAMS, &[]).await
    }

    async fn teams_by_department(&self, department_id: EntityId) -> Result<Vec<Team>> {
        self.fetch_collection(
            endpoints::TEAMS,
            &[(endpoints::DEPARTMENT_ID_PARAM, department_id.to_string())],
        )
        .await
    }

    async fn roles(&self) -> Result<Vec<Role>> {
        self.fetch_collection(endpoints::ROLES, &[]).await
    }

    async fn users(&self) -> Result<Vec<User>> {
        self.fetch_collection(endpoints::USERS, &[]).await
    }

    async fn create_team(&self, entries: &[(String, String)]) -> Result<()> {
        info!("Creating team ({} form fields)", entries.len());
        let request = self
            .http
            .post(self.url(endpoints::CREATE_TEAM)?)
            .form(entries);
        self.send(request).await?;
        Ok(())
    }

    async fn create_role(&self, payload: &serde_json::Value) -> Result<()> {
        info!("Creating role");
        let request = self
            .http
            .post(self.url(endpoints::CREATE_ROLE)?)
            .json(payload);
        self.send(request).await?;
        Ok(())
    }

    async fn set_status(&self, target: StatusTarget, id: EntityId, active: bool) -> Result<()> {
        let path = target.status_path(id);
        info!("Setting {} {} active={}", target.noun(), id, active);
        let request = self
            .http
            .post(self.url(&path)?)
            .form(&[("active", active.to_string())]);
        self.send(request).await?;
        Ok(())
    }
}
