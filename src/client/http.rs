//! HTTP client implementation for the Teamwork API.
//!
//! The pipeline is a strict two-phase protocol. [`ClientInner::build_request`]
//! assembles an [`ApiRequest`] without performing any I/O: headers are rebuilt
//! from scratch on every call, GET parameters are filtered and folded into the
//! route, and the timeout budget is attached. [`ApiRequest::fetch`] consumes
//! the request, performs exactly one HTTP round trip, and classifies the
//! outcome by status code. Because the request is an owned value consumed by
//! `fetch`, no builder state can leak into a later call and a single client
//! can safely drive concurrent requests.

use std::sync::Arc;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::api::{
    AccountService, CalendarService, CompaniesService, MessagesService, PeopleService,
    ProjectsService, TasksService, TimeEntriesService, TrashcanService,
};
use crate::params::{self, Params};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the Teamwork API.
///
/// The client holds the base URI and Basic-auth credentials and exposes the
/// API surface through service structs. Request building and response
/// normalization live here; the services are thin callers.
///
/// # Example
///
/// ```no_run
/// use teamwork_api::TeamworkClient;
///
/// # async fn example() -> teamwork_api::Result<()> {
/// let client = TeamworkClient::new(
///     "https://yoursite.teamwork.com",
///     "api-key",
///     "x",
/// )?;
///
/// let projects = client.projects().list(Default::default()).await?;
/// # Ok(())
/// # }
/// ```
pub struct TeamworkClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_uri: String,
    username: String,
    password: SecretString,
    pub(crate) config: ClientConfig,
}

impl TeamworkClient {
    /// Create a new client against `base_uri` with Basic-auth credentials.
    ///
    /// Performs no I/O and no validation of the URI; a bad base URI shows
    /// up as a transport error on the first call.
    pub fn new(
        base_uri: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(base_uri, username, password, ClientConfig::default())
    }

    /// Create a new client with a custom configuration.
    pub fn with_config(
        base_uri: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_uri: base_uri.into(),
                username: username.into(),
                password: SecretString::from(password.into()),
                config,
            }),
        })
    }

    /// Get the projects service.
    pub fn projects(&self) -> ProjectsService {
        ProjectsService::new(self.inner.clone())
    }

    /// Get the companies service.
    pub fn companies(&self) -> CompaniesService {
        CompaniesService::new(self.inner.clone())
    }

    /// Get the people service.
    pub fn people(&self) -> PeopleService {
        PeopleService::new(self.inner.clone())
    }

    /// Get the tasks service.
    pub fn tasks(&self) -> TasksService {
        TasksService::new(self.inner.clone())
    }

    /// Get the messages service.
    pub fn messages(&self) -> MessagesService {
        MessagesService::new(self.inner.clone())
    }

    /// Get the calendar events service.
    pub fn calendar(&self) -> CalendarService {
        CalendarService::new(self.inner.clone())
    }

    /// Get the time entries service.
    pub fn time_entries(&self) -> TimeEntriesService {
        TimeEntriesService::new(self.inner.clone())
    }

    /// Get the trashcan service.
    pub fn trashcan(&self) -> TrashcanService {
        TrashcanService::new(self.inner.clone())
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// The base URI this client targets.
    pub fn base_uri(&self) -> &str {
        &self.inner.base_uri
    }

    /// Start building a request against an arbitrary route.
    ///
    /// This is the escape hatch for endpoints without a dedicated service
    /// method: `client.request(route, params, method)?.fetch().await`.
    pub fn request(&self, route: &str, params: Params, method: Method) -> Result<ApiRequest<'_>> {
        self.inner.build_request(route, params, method)
    }
}

impl ClientInner {
    /// Build request headers with Basic authentication.
    ///
    /// Headers are always built fresh; nothing carries over from any
    /// previous request.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let credential = STANDARD.encode(format!(
            "{}:{}",
            self.username,
            self.password.expose_secret()
        ));
        let mut auth = HeaderValue::from_str(&format!("Basic {credential}"))
            .map_err(|_| Error::InvalidInput("credentials form an invalid header".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }

    /// Assemble a pending request. No I/O happens here.
    ///
    /// For GET, `params` are filtered of empty values and folded into the
    /// route's query string. For other verbs they become the request body
    /// at dispatch, encoded according to the Content-Type header.
    pub(crate) fn build_request(
        &self,
        route: &str,
        params: Params,
        method: Method,
    ) -> Result<ApiRequest<'_>> {
        let headers = self.build_headers()?;

        let (route, params) = if method == Method::GET {
            (params::append_query(route, &params), Params::new())
        } else {
            (route.to_string(), params)
        };

        Ok(ApiRequest {
            inner: self,
            method,
            route,
            headers,
            params,
            timeout: self.config.timeout,
        })
    }
}

/// A fully-assembled request, ready to dispatch.
///
/// Created by the builder phase and consumed by [`fetch`](Self::fetch);
/// every call starts from a clean slate.
#[must_use = "an ApiRequest does nothing until fetched"]
pub struct ApiRequest<'a> {
    inner: &'a ClientInner,
    method: Method,
    route: String,
    headers: HeaderMap,
    params: Params,
    timeout: Duration,
}

impl ApiRequest<'_> {
    /// The HTTP method this request will use.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The route, with the query string already embedded for GET requests.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The headers that will be sent.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Override the Content-Type header before dispatch.
    ///
    /// Body encoding is decided by this header at fetch time: JSON when it
    /// is `application/json`, form-urlencoded passthrough otherwise.
    pub fn content_type(mut self, value: &str) -> Result<Self> {
        let value = HeaderValue::from_str(value)
            .map_err(|_| Error::InvalidInput(format!("invalid content type: {value}")))?;
        self.headers.insert(CONTENT_TYPE, value);
        Ok(self)
    }

    fn is_json(&self) -> bool {
        self.headers
            .get(CONTENT_TYPE)
            .map(|v| v.as_bytes() == b"application/json")
            .unwrap_or(false)
    }

    /// Perform the HTTP round trip and classify the result.
    ///
    /// The response body is parsed as JSON; an empty or malformed body
    /// decodes to `Value::Null` and classification is driven by the status
    /// code alone. A non-2xx status is a normal [`Error::Api`] result, not
    /// a panic or a transport error.
    pub async fn fetch(self) -> Result<Value> {
        let url = format!("{}{}", self.inner.base_uri, self.route);
        tracing::debug!(method = %self.method, %url, "dispatching request");

        let mut request = self
            .inner
            .http
            .request(self.method.clone(), &url)
            .headers(self.headers.clone())
            .timeout(self.timeout);

        if self.method != Method::GET {
            request = if self.is_json() {
                request.body(serde_json::to_string(&self.params)?)
            } else {
                request.body(params::encode_pairs(&self.params))
            };
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if is_status_ok(status) {
            Ok(body)
        } else {
            tracing::warn!(status, %url, "request returned error status");
            Err(Error::from_response(status, body))
        }
    }
}

/// Check if an HTTP status code is a success.
pub(crate) fn is_status_ok(code: u16) -> bool {
    (200..300).contains(&code)
}

impl Clone for TeamworkClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for TeamworkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamworkClient")
            .field("base_uri", &self.inner.base_uri)
            .field("config", &self.inner.config)
            .finish()
    }
}
