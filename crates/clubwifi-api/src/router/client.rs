// RouterOS REST HTTP client
//
// Wraps `reqwest::Client` with RouterOS-specific URL construction,
// basic-auth injection, and error-body parsing. The hotspot operations
// are implemented as inherent methods in `hotspot.rs` to keep this
// module focused on transport mechanics.

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, preview};
use crate::transport::TransportConfig;

/// RouterOS REST error body: `{"error": 400, "message": "Bad Request",
/// "detail": "invalid username or password"}`. The `detail` field carries
/// the actual command failure text.
#[derive(serde::Deserialize)]
struct RouterOsError {
    #[allow(dead_code)]
    error: Option<u16>,
    message: Option<String>,
    detail: Option<String>,
}

/// HTTP client for a MikroTik router's REST API (`/rest/...`).
///
/// Every request authenticates with HTTP basic auth -- RouterOS keeps no
/// session state for REST callers. Command failures come back as
/// structured error bodies; `parse_error` surfaces the raw `detail` text
/// so callers can classify it.
pub struct RouterClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: SecretString,
}

impl RouterClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the router root (e.g. `https://192.168.88.1`); the
    /// `/rest` prefix is appended per request.
    pub fn new(
        base_url: Url,
        username: impl Into<String>,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            username: username.into(),
            password,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` (tests).
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            http,
            base_url,
            username: username.into(),
            password,
        }
    }

    /// The router base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Build a full URL for a REST path: `{base}/rest/{path}`.
    pub(crate) fn rest_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/rest/{path}");
        Url::parse(&full).expect("invalid REST URL")
    }

    /// Start a request with basic auth applied.
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
    }

    /// Send a GET request and deserialize the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::parse_json(resp).await
    }

    /// Send a request with a JSON body, discarding any response payload.
    pub(crate) async fn send_json(
        &self,
        method: Method,
        url: Url,
        body: &(impl serde::Serialize + Sync),
    ) -> Result<(), Error> {
        debug!("{} {}", method, url);

        let resp = self
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await.map(|_| ())
    }

    /// Send a bodyless request, discarding any response payload.
    pub(crate) async fn send_empty(&self, method: Method, url: Url) -> Result<(), Error> {
        debug!("{} {}", method, url);

        let resp = self
            .request(method, url)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await.map(|_| ())
    }

    // ── Response parsing ─────────────────────────────────────────────

    async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let resp = Self::check_status(resp).await?;
        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }

    /// Reject non-success statuses, converting RouterOS error bodies into
    /// `Error::RouterApi` with the raw `detail` text preserved.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "router rejected the API credentials".into(),
            });
        }

        let body = resp.text().await.unwrap_or_default();
        if let Ok(err) = serde_json::from_str::<RouterOsError>(&body) {
            if let Some(message) = err.detail.or(err.message) {
                return Err(Error::RouterApi { message });
            }
        }

        Err(Error::RouterApi {
            message: format!("HTTP {status}: {}", preview(&body)),
        })
    }
}
