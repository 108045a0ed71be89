//! Companies service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::ClientInner;
use crate::params::Params;
use crate::Result;

/// Service for company operations.
pub struct CompaniesService {
    inner: Arc<ClientInner>,
}

impl CompaniesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all companies.
    pub async fn list(&self, params: Params) -> Result<Value> {
        self.inner
            .build_request("/companies.json", params, Method::GET)?
            .fetch()
            .await
    }

    /// Get a single company.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/companies/{id}.json"), Params::new(), Method::GET)?
            .fetch()
            .await
    }

    /// Create a company.
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner
            .build_request("/companies.json", params, Method::POST)?
            .fetch()
            .await
    }

    /// Update a company.
    pub async fn update(&self, id: &str, params: Params) -> Result<Value> {
        self.inner
            .build_request(&format!("/companies/{id}.json"), params, Method::PUT)?
            .fetch()
            .await
    }

    /// Delete a company.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/companies/{id}.json"), Params::new(), Method::DELETE)?
            .fetch()
            .await
    }
}
