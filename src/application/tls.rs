/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! TLS setup for the Superclouds HTTP client
//!
//! Loads the client certificate and key used for mutual TLS and applies the
//! server verification policy from [`TlsConfig`].

use crate::application::config::{Config, TlsConfig};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Certificate, Client, Identity};
use std::fs;
use tracing::{debug, warn};

/// Reads a PEM file, mapping any I/O failure to [`AppError::TlsSetup`]
fn read_pem(path: &str, what: &str) -> Result<Vec<u8>, AppError> {
    fs::read(path).map_err(|e| AppError::TlsSetup(format!("failed to read {what} {path}: {e}")))
}

/// Loads the client identity from a certificate file and a key file
///
/// # Arguments
/// * `cert_path` - Path to the PEM certificate (chain)
/// * `key_path` - Path to the PEM private key
///
/// # Returns
/// * `Ok(Identity)` - Key pair ready to hand to the HTTP client
/// * `Err(AppError::TlsSetup)` - If a file is unreadable or the PEM is not a key pair
pub fn load_identity(cert_path: &str, key_path: &str) -> Result<Identity, AppError> {
    let mut pem = read_pem(cert_path, "certificate")?;
    let key = read_pem(key_path, "private key")?;
    pem.push(b'\n');
    pem.extend_from_slice(&key);

    Identity::from_pem(&pem)
        .map_err(|e| AppError::TlsSetup(format!("failed to load key pair: {e}")))
}

/// Loads a root certificate to trust
pub fn load_root_certificate(ca_path: &str) -> Result<Certificate, AppError> {
    let pem = read_pem(ca_path, "CA certificate")?;
    Certificate::from_pem(&pem)
        .map_err(|e| AppError::TlsSetup(format!("failed to parse CA certificate: {e}")))
}

fn apply_server_verification(
    builder: reqwest::ClientBuilder,
    tls: &TlsConfig,
) -> Result<reqwest::ClientBuilder, AppError> {
    if tls.accept_invalid_certs {
        warn!("Server certificate verification is disabled; any server certificate is accepted");
        return Ok(builder
            .danger_accept_invalid_certs(true)
            .tls_built_in_root_certs(false));
    }

    let mut builder = builder
        .danger_accept_invalid_certs(false)
        .tls_built_in_root_certs(true);
    if let Some(ca_path) = &tls.ca_path {
        debug!("Trusting extra root certificate from {}", ca_path);
        builder = builder.add_root_certificate(load_root_certificate(ca_path)?);
    }
    Ok(builder)
}

/// Builds the shared HTTP client for a configuration
///
/// Reads the certificate and key from disk, never touches the network.
///
/// # Returns
/// * `Ok(Client)` - Client presenting the configured identity on every TLS handshake
/// * `Err(AppError::TlsSetup)` - If the key material is unusable
pub fn build_http_client(config: &Config) -> Result<Client, AppError> {
    let identity = load_identity(&config.credentials.cert_path, &config.credentials.key_path)?;

    let mut builder = Client::builder()
        .use_rustls_tls()
        .user_agent(USER_AGENT)
        .identity(identity);
    if let Some(timeout) = config.rest_api.request_timeout() {
        debug!("Requests time out after {:?}", timeout);
        builder = builder.timeout(timeout);
    }

    apply_server_verification(builder, &config.tls)?
        .build()
        .map_err(|e| AppError::TlsSetup(format!("failed to build HTTP client: {e}")))
}
