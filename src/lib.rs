//! # teamwork-api
//!
//! An async Rust client for the Teamwork Projects REST API.
//!
//! The crate wraps a (base URI, username, password) triple into a fluent
//! request pipeline: a builder phase assembles one request without
//! performing I/O, and a fetch phase performs exactly one HTTP round trip
//! and normalizes the outcome into a decoded JSON payload or a structured
//! error. Endpoint coverage is exposed through per-resource services.
//!
//! ## Features
//!
//! - **Basic authentication**: credentials are sent as
//!   `Authorization: Basic base64(username:password)` on every request
//! - **Untyped payloads**: responses decode to [`serde_json::Value`], so
//!   the crate tracks upstream API changes without model churn
//! - **Normalized errors**: transport failures and non-2xx statuses are
//!   distinct error categories, both carrying diagnostic context
//! - **Async-first**: built on `reqwest` and Tokio
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use teamwork_api::TeamworkClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> teamwork_api::Result<()> {
//!     let client = TeamworkClient::new(
//!         "https://yoursite.teamwork.com",
//!         "your-api-key",
//!         "x",
//!     )?;
//!
//!     // List projects, dropping empty filter values from the query string
//!     let projects = client.projects().list(Default::default()).await?;
//!     println!("{projects:#}");
//!
//!     // Create a project
//!     let params = json!({"project": {"name": "Roadmap"}})
//!         .as_object()
//!         .cloned()
//!         .unwrap();
//!     let created = client.projects().create(params).await?;
//!     println!("{created:#}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! A non-2xx response is a normal [`Error::Api`] value, never a panic:
//!
//! ```rust,no_run
//! use teamwork_api::{Error, TeamworkClient};
//!
//! # async fn example(client: TeamworkClient) {
//! match client.projects().get("42", Default::default()).await {
//!     Ok(project) => println!("{project:#}"),
//!     Err(Error::Api { status, body, .. }) => {
//!         eprintln!("server said {status}: {body}");
//!     }
//!     Err(other) => eprintln!("transport problem: {other}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod params;

// Re-export primary types at crate root for convenience
pub use client::{ApiRequest, ClientConfig, TeamworkClient};
pub use error::{Error, Result};
pub use params::Params;

/// Prelude module for convenient imports.
///
/// ```rust
/// use teamwork_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AccountService, CalendarService, CompaniesService, MessagesService, PeopleService,
        ProjectsService, TasksService, TimeEntriesService, TrashcanService,
    };
    pub use crate::client::{ApiRequest, ClientConfig, TeamworkClient};
    pub use crate::error::{Error, Result};
    pub use crate::params::Params;
}
