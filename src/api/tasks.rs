//! Tasks service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::{Error, Result};

/// Service for task operations.
pub struct TasksService {
    #[allow(dead_code)]
    inner: Arc<ClientInner>,
}

impl TasksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List tasks.
    ///
    /// Upstream endpoint exists but was never wired up here; calling this
    /// always returns [`Error::NotImplemented`].
    pub async fn list(&self) -> Result<Value> {
        Err(Error::NotImplemented("list tasks"))
    }
}
