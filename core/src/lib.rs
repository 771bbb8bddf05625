//! Typed client for the Afterparty backend.
//!
//! # Overview
//! Every call is a [`Resource`] (a URL plus a parse function) handed to
//! [`AfterpartyApi::load`], which returns a cold, cancellable [`Load`] that
//! resolves to exactly one `Result<A, ApiError>`. The endpoint methods
//! (`get_hello_response`, `get_mock_events`, `get_mock_locations`,
//! `get_mock_users`) are that one pattern applied to each route.
//!
//! # Design
//! - Failures collapse into two kinds: the address was unreachable, or the
//!   response was invalid. The detailed cause is logged with `tracing`.
//! - Requests and decoding run on a tokio runtime handle owned by the client,
//!   never on the caller's executor.
//! - Record types are defined independently from the mock-server crate;
//!   integration tests catch schema drift.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use afterparty_core::{AfterpartyApi, Config};
//!
//! let api = AfterpartyApi::new(Config::from_env()?)?;
//! let greeting = api.get_hello_response(Some("Dave")).await?;
//! let users = api.get_mock_users().await?;
//! # let _ = (greeting, users);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod load;
pub mod resource;
pub mod types;

pub use client::AfterpartyApi;
pub use config::{Config, ConfigError, EventsRoute, RootUrl};
pub use endpoint::Endpoint;
pub use error::{ApiError, ClientError, ParseError};
pub use load::{Load, Subscription};
pub use resource::Resource;
pub use types::{Event, Location, User};
