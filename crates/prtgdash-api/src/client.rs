// PRTG HTTP client
//
// Wraps `reqwest::Client` with PRTG URL construction (credentials travel as
// `username` / `passhash` query parameters), status handling, and JSON
// decoding. Endpoint methods live in sibling modules (channels, history,
// sensors, graph) as inherent impls to keep this file about transport.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::ErrorBody;
use crate::transport::TransportConfig;

/// The two opaque credential parameters every PRTG request carries.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub passhash: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, passhash: SecretString) -> Self {
        Self {
            username: username.into(),
            passhash,
        }
    }
}

/// Raw HTTP client for a PRTG core server.
///
/// Every method returns decoded payloads; HTTP status codes never reach the
/// caller except through [`Error`].
pub struct PrtgClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl PrtgClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the PRTG web root, e.g. `https://prtg.example.net`.
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url, credentials))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url: with_trailing_slash(base_url),
            credentials,
        }
    }

    /// The PRTG web root all endpoint paths are joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}{path}?{params}&username=..&passhash=..`.
    pub(crate) fn endpoint_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, Error> {
        let mut url = self.base_url.join(path)?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query
                .append_pair("username", &self.credentials.username)
                .append_pair("passhash", self.credentials.passhash.expose_secret());
        }
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let resp = self.send(url).await?;
        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    /// Send a GET request and return the `Content-Type` plus raw body.
    pub(crate) async fn get_bytes(&self, url: Url) -> Result<(String, Vec<u8>), Error> {
        let resp = self.send(url).await?;
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let bytes = resp.bytes().await.map_err(Error::Transport)?;
        Ok((content_type, bytes.to_vec()))
    }

    async fn send(&self, url: Url) -> Result<reqwest::Response, Error> {
        // The query string carries the passhash; only the path is logged.
        debug!(path = url.path(), "GET");

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        check_status(resp).await
    }
}

/// Map PRTG's status codes onto [`Error`] variants.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    match status {
        reqwest::StatusCode::UNAUTHORIZED => Err(Error::Authentication {
            message: "invalid username or passhash".into(),
        }),
        reqwest::StatusCode::BAD_REQUEST => {
            let body = resp.text().await.unwrap_or_default();
            Err(Error::BadRequest {
                message: embedded_error_message(&body),
            })
        }
        other => Err(Error::UnexpectedStatus {
            status: other.as_u16(),
        }),
    }
}

/// Pull the error text out of a PRTG 400 body.
///
/// JSON endpoints answer `{"error": "..."}`; XML ones wrap it in
/// `<error>...</error>`. Falls back to the trimmed body.
pub(crate) fn embedded_error_message(body: &str) -> String {
    if let Ok(ErrorBody { error: Some(msg) }) = serde_json::from_str::<ErrorBody>(body) {
        return msg;
    }
    if let Some(start) = body.find("<error>") {
        let rest = &body[start + "<error>".len()..];
        if let Some(end) = rest.find("</error>") {
            return rest[..end].trim().to_owned();
        }
    }
    body.trim().to_owned()
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PrtgClient {
        PrtgClient::with_client(
            reqwest::Client::new(),
            Url::parse(base).expect("valid url"),
            Credentials::new("api_user", SecretString::from("HASH123".to_string())),
        )
    }

    #[test]
    fn endpoint_url_appends_credentials_last() {
        let c = client("https://prtg.example.net");
        let url = c
            .endpoint_url("api/table.json", &[("content", "channels".into()), ("id", "12435".into())])
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://prtg.example.net/api/table.json?content=channels&id=12435&username=api_user&passhash=HASH123"
        );
    }

    #[test]
    fn base_path_prefix_is_preserved() {
        let c = client("https://monitor.example.net/prtg");
        let url = c.endpoint_url("chart.png", &[]).expect("url");
        assert_eq!(url.path(), "/prtg/chart.png");
    }

    #[test]
    fn embedded_error_from_json_body() {
        let body = r#"{"prtg-version":"24.1","error":"Sensor id 999 not found"}"#;
        assert_eq!(embedded_error_message(body), "Sensor id 999 not found");
    }

    #[test]
    fn embedded_error_from_xml_body() {
        let body = "<?xml version=\"1.0\"?><prtg><error> The query was invalid </error></prtg>";
        assert_eq!(embedded_error_message(body), "The query was invalid");
    }

    #[test]
    fn embedded_error_falls_back_to_body() {
        assert_eq!(embedded_error_message("  bad things  "), "bad things");
    }
}
