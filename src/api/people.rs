//! People service, including the upstream availability endpoints that
//! remain unimplemented placeholders.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::ClientInner;
use crate::params::Params;
use crate::{Error, Result};

/// Service for people operations.
pub struct PeopleService {
    inner: Arc<ClientInner>,
}

impl PeopleService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all people.
    pub async fn list(&self, params: Params) -> Result<Value> {
        self.inner
            .build_request("/people.json", params, Method::GET)?
            .fetch()
            .await
    }

    /// Get a single person.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/people/{id}.json"), Params::new(), Method::GET)?
            .fetch()
            .await
    }

    /// Add a person.
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner
            .build_request("/people.json", params, Method::POST)?
            .fetch()
            .await
    }

    /// Update a person.
    pub async fn update(&self, id: &str, params: Params) -> Result<Value> {
        self.inner
            .build_request(&format!("/people/{id}.json"), params, Method::PUT)?
            .fetch()
            .await
    }

    /// Delete a person.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/people/{id}.json"), Params::new(), Method::DELETE)?
            .fetch()
            .await
    }

    /// People available for a calendar event.
    ///
    /// Upstream endpoint exists but was never wired up here; calling this
    /// always returns [`Error::NotImplemented`].
    pub async fn available_for_calendar_event(&self) -> Result<Value> {
        Err(Error::NotImplemented("people available for calendar event"))
    }

    /// People available for a message.
    ///
    /// Upstream endpoint exists but was never wired up here; calling this
    /// always returns [`Error::NotImplemented`].
    pub async fn available_for_message(&self) -> Result<Value> {
        Err(Error::NotImplemented("people available for message"))
    }
}
