// Manager API HTTP client
//
// Wraps `reqwest::Client` with NSX-specific URL construction, basic auth and
// error-body parsing. Endpoint groups (switching, node) are implemented as
// inherent methods in separate files to keep this module focused on
// transport mechanics.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::BasicAuth;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Error body returned by the manager on non-2xx responses:
/// `{"httpStatus": "NOT_FOUND", "error_code": 202, "error_message": "..."}`
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    error_code: Option<i64>,
}

/// Async client for the NSX-T manager API.
///
/// All requests go to `{base}/api/v1/{path}` and carry basic-auth
/// credentials when configured.
#[derive(Debug)]
pub struct NsxClient {
    http: reqwest::Client,
    base_url: Url,
    auth: Option<BasicAuth>,
}

impl NsxClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a manager host (with or without scheme), credentials and
    /// transport config.
    pub fn new(host: &str, auth: BasicAuth, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(host)?;
        Ok(Self {
            http,
            base_url,
            auth: Some(auth),
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth).
    pub fn with_client(host: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(host)?;
        Ok(Self {
            http,
            base_url,
            auth: None,
        })
    }

    /// Build `https://host/api/v1/`, defaulting the scheme to https.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let raw = raw.trim();
        let mut url = if raw.contains("://") {
            Url::parse(raw)?
        } else {
            Url::parse(&format!("https://{raw}"))?
        };

        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with("/api/v1") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/v1/"));
        }

        Ok(url)
    }

    /// The API base URL (always ends with `/api/v1/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"node"`) onto the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// `{base}/{collection}/{id}` with `id` percent-encoded as one path segment.
    pub(crate) fn member_url(&self, collection: &str, id: &str) -> Result<Url, Error> {
        let mut url = self.url(collection)?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.get_url(self.url(path)?).await
    }

    pub(crate) async fn get_url<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let mut builder = self.http.get(url);
        if let Some(auth) = &self.auth {
            builder = auth.apply(builder);
        }
        let resp = builder.send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body: body.clone(),
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let (message, error_code) = match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(err) => (
                err.error_message.unwrap_or_else(|| status.to_string()),
                err.error_code,
            ),
            Err(_) if raw.is_empty() => (status.to_string(), None),
            Err(_) => (raw, None),
        };

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Error::Authentication { message };
        }

        Error::Api {
            status: status.as_u16(),
            message,
            error_code,
        }
    }
}
