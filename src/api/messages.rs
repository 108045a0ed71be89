//! Messages (posts) service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::ClientInner;
use crate::params::Params;
use crate::Result;

/// Service for project message operations.
pub struct MessagesService {
    inner: Arc<ClientInner>,
}

impl MessagesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the latest messages in a project.
    pub async fn list(&self, project_id: &str, params: Params) -> Result<Value> {
        self.inner
            .build_request(&format!("/projects/{project_id}/posts.json"), params, Method::GET)?
            .fetch()
            .await
    }

    /// Get a single message.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/posts/{id}.json"), Params::new(), Method::GET)?
            .fetch()
            .await
    }

    /// Create a message in a project.
    pub async fn create(&self, project_id: &str, params: Params) -> Result<Value> {
        self.inner
            .build_request(&format!("/projects/{project_id}/posts.json"), params, Method::POST)?
            .fetch()
            .await
    }

    /// Delete a message.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/posts/{id}.json"), Params::new(), Method::DELETE)?
            .fetch()
            .await
    }
}
