//! qBittorrent Web UI HTTP client.

use reqwest::{header, Client, Response};
use url::Url;

use crate::api::types::*;
use crate::error::{Error, Result};

/// Body the daemon answers a successful login with.
pub const LOGIN_SUCCESS_BODY: &str = "Ok.";

const LOGIN_PATH: &str = "api/v2/auth/login";
const LOGOUT_PATH: &str = "api/v2/auth/logout";
const TORRENTS_PATH: &str = "api/v2/torrents/info";
const TRACKERS_PATH: &str = "api/v2/torrents/trackers";
const EXPORT_PATH: &str = "api/v2/torrents/export";

/// Authenticated qBittorrent API client.
///
/// The session cookie lives in the client's cookie store, so a value of this
/// type only exists after a successful [`QbitClient::login`].
pub struct QbitClient {
    client: Client,
    base_url: Url,
}

impl QbitClient {
    /// Log into the Web UI and return a client bound to that session.
    pub async fn login(base_url: &Url, username: &str, password: &str) -> Result<Self> {
        let client = build_http_client(base_url)?;
        let api = Self {
            client,
            base_url: base_url.clone(),
        };

        let url = api.endpoint(LOGIN_PATH)?;
        tracing::debug!("POST {}", url);

        let response = api
            .client
            .post(url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Failed to read login response body: {}", e);
                String::new()
            }
        };
        tracing::debug!("Login response: {} {:?}", status, body);

        if status != reqwest::StatusCode::OK || body != LOGIN_SUCCESS_BODY {
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() { "no response body" } else { &body }
            )));
        }

        Ok(api)
    }

    /// End the Web UI session.
    ///
    /// Callers treat failures as non-fatal.
    pub async fn logout(&self) -> Result<()> {
        let url = self.endpoint(LOGOUT_PATH)?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).send().await?;
        check_status(LOGOUT_PATH, response)?;
        Ok(())
    }

    /// List every torrent the daemon manages.
    pub async fn get_torrents(&self) -> Result<Vec<TorrentInfo>> {
        let response = self.get(TORRENTS_PATH, None).await?;
        let text = response.text().await?;
        tracing::debug!("Torrent list response length: {} bytes", text.len());

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse torrent list: {} - Response: {}",
                e,
                &text[..floor_char_boundary(&text, 500)]
            ))
        })
    }

    /// Get the tracker list for one torrent.
    pub async fn get_trackers(&self, hash: &str) -> Result<Vec<TrackerEntry>> {
        let response = self.get(TRACKERS_PATH, Some(hash)).await?;
        let text = response.text().await?;
        tracing::debug!("Trackers response for {}: {}", hash, text);

        serde_json::from_str(&text)
            .map_err(|e| Error::MalformedTrackers(format!("{} - Response: {}", e, text)))
    }

    /// Download the raw `.torrent` file for one torrent.
    pub async fn export_torrent(&self, hash: &str) -> Result<Vec<u8>> {
        let response = self.get(EXPORT_PATH, Some(hash)).await?;
        let bytes = response.bytes().await?;
        tracing::debug!("Exported {} bytes for {}", bytes.len(), hash);
        Ok(bytes.to_vec())
    }

    /// Make a GET request within the session, optionally scoped to a hash.
    async fn get(&self, path: &str, hash: Option<&str>) -> Result<Response> {
        let mut url = self.endpoint(path)?;
        if let Some(hash) = hash {
            url.query_pairs_mut().append_pair("hash", hash);
        }

        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        check_status(path, response)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

/// Build the underlying HTTP client with a cookie store for the session.
fn build_http_client(base_url: &Url) -> Result<Client> {
    let mut headers = header::HeaderMap::new();
    // qBittorrent's CSRF protection rejects requests whose Referer/Origin
    // does not match the Web UI host.
    let referer = header::HeaderValue::from_str(base_url.as_str())
        .map_err(|e| Error::Config(format!("Invalid base URL for Referer header: {}", e)))?;
    headers.insert(header::REFERER, referer);

    Client::builder()
        .cookie_store(true)
        .default_headers(headers)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))
}

fn check_status(endpoint: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            endpoint: endpoint.to_string(),
            status,
        });
    }
    Ok(response)
}

fn floor_char_boundary(text: &str, max: usize) -> usize {
    let mut end = text.len().min(max);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_char_boundary() {
        assert_eq!(floor_char_boundary("abc", 500), 3);
        let text = "ééé";
        assert!(text.is_char_boundary(floor_char_boundary(text, 3)));
        assert_eq!(floor_char_boundary(text, 3), 2);
    }
}
