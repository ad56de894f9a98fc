/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::tls::build_http_client;
use crate::error::AppError;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// Query string pairs, appended in order
pub type QueryParams = Vec<(&'static str, String)>;

/// Transport shared by every Superclouds resource client
///
/// Holds the configuration and a `reqwest` client preloaded with the client
/// certificate. Nothing in it changes after construction, so one instance can
/// serve any number of concurrent requests, usually behind an `Arc`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: Config,
    http_client: Client,
}

impl HttpClient {
    /// Creates the transport from a configuration
    ///
    /// # Arguments
    /// * `config` - Credentials, base URL and TLS settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to send requests
    /// * `Err(AppError::TlsSetup)` - If the certificate or key cannot be loaded
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = build_http_client(&config)?;
        debug!("HTTP client ready for {}", config.rest_api.base_url);
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Creates the transport from `SUPER_CERT`, `SUPER_KEY` and `SUPER_TOKEN`
    ///
    /// # Example
    /// ```ignore
    /// let http_client = HttpClient::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }

    /// Creates the transport from explicit certificate path, key path and token
    ///
    /// # Example
    /// ```ignore
    /// let http_client = HttpClient::with_params("client.crt", "client.key", token)?;
    /// ```
    pub fn with_params(cert_path: &str, key_path: &str, token: &str) -> Result<Self, AppError> {
        Self::new(Config::with_params(cert_path, key_path, token))
    }

    /// Configuration this client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.config.rest_api.base_url
    }

    /// Whether server certificates are accepted without verification
    pub fn accepts_invalid_certs(&self) -> bool {
        self.config.tls.accept_invalid_certs
    }

    /// Composes the target URL for `path`, adding `query` only when non-empty
    ///
    /// # Returns
    /// * `Ok(Url)` - Absolute URL
    /// * `Err(AppError::Configuration)` - If the base URL does not parse
    pub fn url(&self, path: &str, query: &[(&'static str, String)]) -> Result<Url, AppError> {
        let raw = format!("{}{}", self.base_url().trim_end_matches('/'), path);
        let mut url = Url::parse(&raw)
            .map_err(|e| AppError::Configuration(format!("invalid base URL {raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        let token = &self.config.credentials.token;
        if !token.is_empty() {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let url = self.url(path, query)?;
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(AppError::Serialization)?;

        make_http_request(&self.http_client, method, url, self.headers(), body).await
    }

    /// Sends a request and decodes the JSON response body
    ///
    /// The status code is not checked; whatever the server sends back must
    /// decode into `T`.
    ///
    /// # Returns
    /// * `Ok(T)` - Decoded response
    /// * `Err(AppError)` - `Serialization`, `Network` or `Deserialization`
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let response = self.send(method, path, query, body).await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Decoding body of a {} response from {}", status, path);
        }
        parse_response(response).await
    }

    /// Sends a request whose only result is its status code
    ///
    /// Anything other than `200 OK` becomes [`AppError::Api`] carrying
    /// `context`. The response body is never read.
    pub async fn request_status<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
        context: &'static str,
    ) -> Result<(), AppError> {
        let response = self.send(method, path, query, body).await?;
        let status = response.status();
        if status != StatusCode::OK {
            error!("Failed to {}: {}", context, status);
            return Err(AppError::Api { context, status });
        }
        Ok(())
    }

    /// Makes a GET request and decodes the response
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    /// Makes a POST request with a JSON body and decodes the response
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Makes a PATCH request with a JSON body and decodes the response
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PATCH, path, &[], Some(body)).await
    }
}

/// Executes one HTTP request, exactly once
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, PATCH, DELETE, etc.)
/// * `url` - Full URL to request, query included
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body, already encoded
///
/// # Returns
///
/// * `Ok(Response)` - The response, whatever its status
/// * `Err(AppError::Network)` - If the request could not be sent
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: Url,
    headers: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    for (name, value) in headers {
        request = request.header(name, value);
    }
    if let Some(b) = body {
        request = request.body(b);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Reads the whole body and decodes it as JSON
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(AppError::Deserialization)
}
