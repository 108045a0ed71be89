//! HTTP client and request pipeline for the Teamwork API.
//!
//! This module provides the main entry point [`TeamworkClient`] and the
//! two-phase request pipeline: the builder phase assembles an [`ApiRequest`]
//! without I/O, and [`ApiRequest::fetch`] performs the round trip and
//! classifies the result.
//!
//! # Example
//!
//! ```no_run
//! use teamwork_api::TeamworkClient;
//!
//! # async fn example() -> teamwork_api::Result<()> {
//! let client = TeamworkClient::new("https://yoursite.teamwork.com", "key", "x")?;
//! let projects = client.projects().list(Default::default()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::{ApiRequest, TeamworkClient};
pub(crate) use http::ClientInner;
