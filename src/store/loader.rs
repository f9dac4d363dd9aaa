//! Credential store loader
//!
//! Fetches the credential document over HTTP or from disk. Every call
//! re-fetches; any failure degrades to the built-in list.

use super::fallback::fallback_users;
use super::records::{UserRecord, UsersDocument};
use crate::config::PortalConfig;
use crate::error::StoreError;
use async_trait::async_trait;
use log::{debug, error};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Somewhere a credential document can be read from
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch and parse the credential document.
    async fn fetch(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Credential document served over HTTP
pub struct HttpUserSource {
    client: reqwest::Client,
    url: String,
}

impl HttpUserSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch(&self) -> Result<Vec<UserRecord>, StoreError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let document: UsersDocument = serde_json::from_str(&body)?;
        Ok(document.users)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Credential document on the local filesystem
pub struct FileUserSource {
    path: PathBuf,
}

impl FileUserSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UserSource for FileUserSource {
    async fn fetch(&self) -> Result<Vec<UserRecord>, StoreError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        let document: UsersDocument = serde_json::from_str(&body)?;
        Ok(document.users)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise.
pub fn source_for(location: &str, timeout: Duration) -> Result<Arc<dyn UserSource>, StoreError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Arc::new(HttpUserSource::new(location, timeout)?))
    } else {
        Ok(Arc::new(FileUserSource::new(location)))
    }
}

/// Loads credential lists, never failing
#[derive(Clone)]
pub struct CredentialStore {
    source: Option<Arc<dyn UserSource>>,
}

impl CredentialStore {
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// A store that always serves the built-in list.
    pub fn fallback_only() -> Self {
        Self { source: None }
    }

    /// Builds the store for the configured location.
    ///
    /// An HTTP client that cannot be constructed is treated like any other
    /// load failure: the store serves the fallback list.
    pub fn from_config(config: &PortalConfig) -> Self {
        match source_for(&config.users_url, config.fetch_timeout()) {
            Ok(source) => Self::new(source),
            Err(e) => {
                error!("Cannot build credential source {}: {}", config.users_url, e);
                Self::fallback_only()
            }
        }
    }

    /// Load the current credential list.
    pub async fn load_users(&self) -> Vec<UserRecord> {
        let Some(source) = &self.source else {
            return fallback_users();
        };

        match source.fetch().await {
            Ok(users) => {
                debug!("Loaded {} users from {}", users.len(), source.describe());
                users
            }
            Err(e) => {
                error!("Error loading users from {}: {}", source.describe(), e);
                fallback_users()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const DOCUMENT: &str = r#"{"usuarios": [
        {"usuario": "luisgomez", "nombre": "Luis Gomez", "email": "luis@example.com", "password": "clave"}
    ]}"#;

    #[tokio::test]
    async fn test_file_source_loads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let store = CredentialStore::new(Arc::new(FileUserSource::new(file.path())));
        let users = store.load_users().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].handle, "luisgomez");
    }

    #[tokio::test]
    async fn test_missing_file_falls_back() {
        let store = CredentialStore::new(Arc::new(FileUserSource::new("/nonexistent/usuario.json")));
        let users = store.load_users().await;
        assert_eq!(users, fallback_users());
    }

    #[tokio::test]
    async fn test_malformed_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"usuarios\": [oops").unwrap();

        let store = CredentialStore::new(Arc::new(FileUserSource::new(file.path())));
        assert_eq!(store.load_users().await.len(), 3);
    }

    #[tokio::test]
    async fn test_unreachable_http_falls_back() {
        let source = HttpUserSource::new(
            "http://127.0.0.1:9/data/usuario.json",
            Duration::from_secs(2),
        )
        .unwrap();
        let store = CredentialStore::new(Arc::new(source));
        assert_eq!(store.load_users().await, fallback_users());
    }

    // Answers a single HTTP request with the given status line and body
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        format!("http://{}/data/usuario.json", addr)
    }

    #[tokio::test]
    async fn test_http_source_loads_document() {
        let url = serve_once("200 OK", DOCUMENT).await;
        let source = HttpUserSource::new(&url, Duration::from_secs(5)).unwrap();
        let store = CredentialStore::new(Arc::new(source));

        let users = store.load_users().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].handle, "luisgomez");
    }

    #[tokio::test]
    async fn test_http_error_status_falls_back() {
        // A valid body does not rescue a non-success status
        let url = serve_once("404 Not Found", DOCUMENT).await;
        let source = HttpUserSource::new(&url, Duration::from_secs(5)).unwrap();
        let store = CredentialStore::new(Arc::new(source));

        assert_eq!(store.load_users().await, fallback_users());
    }

    #[tokio::test]
    async fn test_load_is_repeatable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let store = CredentialStore::new(Arc::new(FileUserSource::new(file.path())));
        let first = store.load_users().await;
        let second = store.load_users().await;
        assert_eq!(first.len(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_every_load_refetches() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), DOCUMENT).unwrap();

        let store = CredentialStore::new(Arc::new(FileUserSource::new(file.path())));
        assert_eq!(store.load_users().await[0].handle, "luisgomez");

        std::fs::write(
            file.path(),
            r#"{"usuarios": [{"usuario": "rosa", "nombre": "Rosa Mena", "email": "rosa@example.com", "password": "nueva"}]}"#,
        )
        .unwrap();

        let users = store.load_users().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].handle, "rosa");
    }

    #[test]
    fn test_source_selection() {
        let http = source_for("https://example.com/usuario.json", Duration::from_secs(1)).unwrap();
        assert_eq!(http.describe(), "https://example.com/usuario.json");

        let file = source_for("../data/usuario.json", Duration::from_secs(1)).unwrap();
        assert_eq!(file.describe(), "../data/usuario.json");
    }
}
