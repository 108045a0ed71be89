//! Calendar events service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::ClientInner;
use crate::params::Params;
use crate::Result;

/// Service for calendar event operations.
pub struct CalendarService {
    inner: Arc<ClientInner>,
}

impl CalendarService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List calendar events. Upstream expects a date range in `params`.
    pub async fn list(&self, params: Params) -> Result<Value> {
        self.inner
            .build_request("/calendarevents.json", params, Method::GET)?
            .fetch()
            .await
    }

    /// Get a single calendar event.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/calendarevents/{id}.json"), Params::new(), Method::GET)?
            .fetch()
            .await
    }

    /// Create a calendar event.
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner
            .build_request("/calendarevents.json", params, Method::POST)?
            .fetch()
            .await
    }

    /// Delete a calendar event.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.inner
            .build_request(&format!("/calendarevents/{id}.json"), Params::new(), Method::DELETE)?
            .fetch()
            .await
    }
}
