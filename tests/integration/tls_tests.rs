use crate::common::{TEST_TOKEN, fixture};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use superclouds::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_rustls::TlsAcceptor;
use tokio_rustls::rustls::pki_types::{CertificateDer, PrivateKeyDer};
use tokio_rustls::rustls::server::WebPkiClientVerifier;
use tokio_rustls::rustls::{RootCertStore, ServerConfig, crypto};

const USER_BODY: &str = r#"{"id":"7","email":"tls@example.com"}"#;

fn load_certs(name: &str) -> Vec<CertificateDer<'static>> {
    let mut reader = BufReader::new(File::open(fixture(name)).unwrap());
    rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn load_key(name: &str) -> PrivateKeyDer<'static> {
    let mut reader = BufReader::new(File::open(fixture(name)).unwrap());
    rustls_pemfile::private_key(&mut reader)
        .unwrap()
        .expect("fixture holds a private key")
}

/// Presents `server.crt` (issued by the test CA for 127.0.0.1) and requires a
/// client certificate issued by the same CA
fn server_config() -> Arc<ServerConfig> {
    let provider = Arc::new(crypto::ring::default_provider());
    let mut roots = RootCertStore::empty();
    for cert in load_certs("ca.crt") {
        roots.add(cert).unwrap();
    }
    let verifier = WebPkiClientVerifier::builder_with_provider(Arc::new(roots), provider.clone())
        .build()
        .unwrap();

    let config = ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_client_cert_verifier(verifier)
        .with_single_cert(load_certs("server.crt"), load_key("server.key"))
        .unwrap();
    Arc::new(config)
}

/// Serves a single HTTPS connection answering with [`USER_BODY`].
///
/// The handle resolves to the number of certificates the client presented,
/// or to the handshake error.
async fn spawn_tls_server() -> (String, JoinHandle<std::io::Result<usize>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("https://127.0.0.1:{}", listener.local_addr().unwrap().port());
    let acceptor = TlsAcceptor::from(server_config());

    let handle = tokio::spawn(async move {
        let (tcp, _) = listener.accept().await?;
        let mut stream = acceptor.accept(tcp).await?;
        let client_certs = stream
            .get_ref()
            .1
            .peer_certificates()
            .map_or(0, |certs| certs.len());

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            USER_BODY.len(),
            USER_BODY
        );
        stream.write_all(response.as_bytes()).await?;
        stream.shutdown().await?;
        Ok(client_certs)
    });

    (url, handle)
}

fn tls_client(config: Config) -> UsersClient {
    setup_logger();
    UsersClient::from(HttpClient::new(config).unwrap())
}

fn base_config(url: &str) -> Config {
    Config::with_params(fixture("client.crt"), fixture("client.key"), TEST_TOKEN)
        .with_base_url(url)
        .with_timeout(5)
}

#[tokio::test]
async fn test_default_client_accepts_unknown_server_and_presents_identity() {
    let (url, server) = spawn_tls_server().await;
    let client = tls_client(base_config(&url));

    let user = client.get_user().await.unwrap();
    assert_eq!(user.id, "7");
    assert_eq!(user.email, "tls@example.com");

    let client_certs = server.await.unwrap().unwrap();
    assert!(client_certs >= 1, "client certificate was not presented");
}

#[tokio::test]
async fn test_verifying_client_rejects_unknown_server() {
    let (url, server) = spawn_tls_server().await;
    let client = tls_client(base_config(&url).with_accept_invalid_certs(false));

    let err = client.get_user().await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)), "{err:?}");
    assert!(server.await.unwrap().is_err());
}

#[tokio::test]
async fn test_verifying_client_trusts_configured_root() {
    let (url, server) = spawn_tls_server().await;
    let config = base_config(&url)
        .with_accept_invalid_certs(false)
        .with_ca_cert(fixture("ca.crt"));
    let client = tls_client(config);

    let user = client.get_user().await.unwrap();
    assert_eq!(user.id, "7");
    assert!(server.await.unwrap().unwrap() >= 1);
}
