/// Users resource client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// TLS and HTTP client setup
pub mod tls;
