//! Account-level endpoints: account details, timezones, workload.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::ClientInner;
use crate::params::Params;
use crate::Result;

/// Service for account-level operations.
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get details of the installation's account.
    pub async fn get(&self) -> Result<Value> {
        self.inner
            .build_request("/account.json", Params::new(), Method::GET)?
            .fetch()
            .await
    }

    /// List the timezones known to the installation.
    pub async fn timezones(&self) -> Result<Value> {
        self.inner
            .build_request("/timezones.json", Params::new(), Method::GET)?
            .fetch()
            .await
    }

    /// Get the workload report across people and projects.
    pub async fn workload(&self, params: Params) -> Result<Value> {
        self.inner
            .build_request("/workload.json", params, Method::GET)?
            .fetch()
            .await
    }
}
