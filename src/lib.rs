//! Client library for the Sonar web service violations API.
//!
//! Queries the code-quality violations reported for a resource and maps the
//! JSON response into typed domain values. The HTTP round trip is an
//! injectable [`Fetch`] capability, so tests run against canned bodies and
//! production uses the [`HttpFetch`] default.
//!
//! ```no_run
//! use sonar_client::{Client, DEPTH_UNBOUNDED, Priority};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = Client::new("http://localhost/sonar/api");
//! let violations = client
//!     .violations("my:resource", &[Priority::Blocker, Priority::Critical], DEPTH_UNBOUNDED)
//!     .await?;
//! for v in &violations {
//!     println!("{}", v);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod fetch;
mod types;
mod url;

pub use client::{Client, DEPTH_UNBOUNDED};
pub use fetch::{Fetch, HttpFetch};
pub use types::{Priority, Resource, Rule, Violation};
pub use url::service_url;
