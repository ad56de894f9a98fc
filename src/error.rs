/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error type shared by every Superclouds operation

use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the Superclouds client
#[derive(Debug)]
pub enum AppError {
    /// A required setting is missing, empty or malformed
    Configuration(String),
    /// The client certificate, key or CA material could not be loaded
    TlsSetup(String),
    /// A request body could not be encoded as JSON
    Serialization(serde_json::Error),
    /// The request could not be sent or the response could not be read
    Network(reqwest::Error),
    /// A response body did not match the expected JSON shape
    Deserialization(serde_json::Error),
    /// A status-only endpoint answered with something other than 200
    Api {
        /// What the caller was trying to do, e.g. "delete user"
        context: &'static str,
        /// Status returned by the server
        status: StatusCode,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::TlsSetup(msg) => write!(f, "tls setup error: {msg}"),
            AppError::Serialization(e) => write!(f, "serialization error: {e}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Deserialization(e) => write!(f, "deserialization error: {e}"),
            AppError::Api { context, status } => write!(f, "failed to {context}: {status}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Serialization(e) | AppError::Deserialization(e) => Some(e),
            AppError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl AppError {
    /// Status code carried by an [`AppError::Api`] error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}
