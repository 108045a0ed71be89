//! Projects service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::ClientInner;
use crate::params::Params;
use crate::Result;

/// Service for project operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: teamwork_api::TeamworkClient) -> teamwork_api::Result<()> {
/// use serde_json::json;
///
/// let projects = client.projects().list(Default::default()).await?;
///
/// let params = json!({"status": "late"}).as_object().cloned().unwrap();
/// let late = client.projects().list(params).await?;
/// # Ok(())
/// # }
/// ```
pub struct ProjectsService {
    inner: Arc<ClientInner>,
}

impl ProjectsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all projects visible to the authenticated user.
    ///
    /// Empty parameter values are dropped before they reach the query
    /// string.
    pub async fn list(&self, params: Params) -> Result<Value> {
        self.inner
            .build_request("/projects.json", params, Method::GET)?
            .fetch()
            .await
    }

    /// Get a single project.
    pub async fn get(&self, id: &str, params: Params) -> Result<Value> {
        self.inner
            .build_request(&format!("/projects/{id}.json"), params, Method::GET)?
            .fetch()
            .await
    }

    /// Create a project.
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner
            .build_request("/projects.json", params, Method::POST)?
            .fetch()
            .await
    }

    /// Update a project.
    pub async fn update(&self, id: &str, params: Params) -> Result<Value> {
        self.inner
            .build_request(&format!("/projects/{id}.json"), params, Method::PUT)?
            .fetch()
            .await
    }

    /// Delete a project.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/projects/{id}.json"), Params::new(), Method::DELETE)?
            .fetch()
            .await
    }

    /// List time entries recorded against a project.
    pub async fn time_entries(&self, id: &str, params: Params) -> Result<Value> {
        self.inner
            .build_request(
                &format!("/projects/{id}/time_entries.json"),
                params,
                Method::GET,
            )?
            .fetch()
            .await
    }
}
