//! Time entries service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::ClientInner;
use crate::params::Params;
use crate::Result;

/// Service for time entry operations.
pub struct TimeEntriesService {
    inner: Arc<ClientInner>,
}

impl TimeEntriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all time entries across projects.
    pub async fn list(&self, params: Params) -> Result<Value> {
        self.inner
            .build_request("/time_entries.json", params, Method::GET)?
            .fetch()
            .await
    }

    /// Get a single time entry.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/time_entries/{id}.json"), Params::new(), Method::GET)?
            .fetch()
            .await
    }

    /// Record a time entry against a project.
    pub async fn create(&self, project_id: &str, params: Params) -> Result<Value> {
        self.inner
            .build_request(
                &format!("/projects/{project_id}/time_entries.json"),
                params,
                Method::POST,
            )?
            .fetch()
            .await
    }

    /// Update a time entry.
    pub async fn update(&self, id: &str, params: Params) -> Result<Value> {
        self.inner
            .build_request(&format!("/time_entries/{id}.json"), params, Method::PUT)?
            .fetch()
            .await
    }

    /// Delete a time entry.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/time_entries/{id}.json"), Params::new(), Method::DELETE)?
            .fetch()
            .await
    }
}
