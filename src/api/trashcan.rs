//! Trashcan service: inspect and restore soft-deleted resources.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::ClientInner;
use crate::params::Params;
use crate::Result;

/// Service for trashcan operations.
pub struct TrashcanService {
    inner: Arc<ClientInner>,
}

impl TrashcanService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List trashed items within a project.
    pub async fn project(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/trashcan/projects/{id}.json"), Params::new(), Method::GET)?
            .fetch()
            .await
    }

    /// Restore a trashed resource by type and id.
    ///
    /// `resource` and `id` are interpolated into the route verbatim, with
    /// no escaping. A value containing `/` lands in the route as-is.
    pub async fn restore(&self, resource: &str, id: &str) -> Result<Value> {
        self.inner
            .build_request(
                &format!("/trashcan/{resource}/{id}/restore.json"),
                Params::new(),
                Method::GET,
            )?
            .fetch()
            .await
    }
}
