//! # Superclouds Client
//!
//! A typed async client for the Superclouds user management REST API.
//!
//! Requests are authenticated with a bearer token and, at the TLS layer, with
//! a client certificate (mutual TLS). The transport is built once, from the
//! environment or from explicit values, and shared by every call.
//!
//! ## Environment
//!
//! | Variable | Required | Meaning |
//! |---|---|---|
//! | `SUPER_CERT` | yes | Path to the client certificate (PEM) |
//! | `SUPER_KEY` | yes | Path to the client private key (PEM) |
//! | `SUPER_TOKEN` | yes | Bearer token |
//! | `SUPER_URL` | no | API base URL |
//! | `SUPER_TIMEOUT` | no | Per-request deadline in seconds; unset or `0` means none |
//! | `SUPER_INSECURE_SKIP_VERIFY` | no | Skip server certificate verification (default `true`) |
//! | `SUPER_CA_CERT` | no | Extra root certificate to trust when verifying |
//!
//! ## Example
//!
//! ```ignore
//! use superclouds::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let users = UsersClient::from_env()?;
//!
//!     let created = users
//!         .create_user(&CreateUserRequest::new("new.user@example.com"))
//!         .await?;
//!     info!("Created user {}", created.id);
//!
//!     users
//!         .update_user_role(&UpdateUserRoleRequest::new("new.user@example.com", "MODIFY"))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Server verification
//!
//! By default the client accepts any server certificate and trusts no root
//! store, matching how existing deployments reach the API. Turn verification
//! on with [`application::config::Config::with_accept_invalid_certs`] or
//! `SUPER_INSECURE_SKIP_VERIFY=false`.

/// Configuration, TLS setup and the users client
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Transport and request/response models
pub mod model;
/// Commonly used types
pub mod prelude;
/// Domain records
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
