/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Superclouds Client Prelude
//!
//! Brings the commonly used types and traits into scope with one import.
//!
//! ## Usage
//!
//! ```rust
//! use superclouds::prelude::*;
//!
//! let config = Config::with_params("client.crt", "client.key", "token")
//!     .with_accept_invalid_certs(false);
//! assert!(!config.tls.accept_invalid_certs);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Superclouds API client
pub use crate::application::config::{Config, Credentials, RestApiConfig, TlsConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// TRANSPORT AND CLIENTS
// ============================================================================

/// Shared HTTP transport
pub use crate::model::http::HttpClient;

/// Users resource client
pub use crate::application::client::UsersClient;

/// Users service trait
pub use crate::application::interfaces::user::UserService;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    ChangePasswordRequest, CreateUserRequest, DeleteUserRequest, ListUsersRequest,
    UpdateUserRequest, UpdateUserRoleRequest,
};

/// Response models
pub use crate::model::responses::{ListRolesResponse, ListUsersResponse};

/// User record
pub use crate::presentation::user::User;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging and environment utilities
pub use crate::utils::config::load_dotenv;
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
