//! Configuration validation logic.

use url::Url;

use crate::config::settings::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url(&config.base_url)?;

    if config.output_dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "output_dir".to_string(),
            message: "Output directory cannot be empty".to_string(),
        });
    }

    if config.username.is_empty() {
        tracing::debug!("No username configured; relying on Web UI auth bypass");
    }

    Ok(())
}

/// Parse a Web UI address and make sure its path ends in `/`.
///
/// Without the trailing slash, joining `api/v2/...` onto a base such as
/// `http://host/qbittorrent` would drop the last path segment.
pub fn normalize_base_url(input: &str) -> Result<Url> {
    let mut url = Url::parse(input.trim())?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    validate_base_url(&url)?;
    Ok(url)
}

fn validate_base_url(url: &Url) -> Result<()> {
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ConfigValidation {
            field: "url".to_string(),
            message: format!("Unsupported scheme '{}' (expected http or https)", url.scheme()),
        });
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(Error::ConfigValidation {
            field: "url".to_string(),
            message: format!("URL has no host: {}", url),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_trailing_slash() {
        let url = normalize_base_url("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/");

        let url = normalize_base_url("https://seedbox.example/qbittorrent").unwrap();
        assert_eq!(url.as_str(), "https://seedbox.example/qbittorrent/");
        assert_eq!(
            url.join("api/v2/auth/login").unwrap().as_str(),
            "https://seedbox.example/qbittorrent/api/v2/auth/login"
        );
    }

    #[test]
    fn test_normalize_rejects_bad_urls() {
        assert!(normalize_base_url("not a url").is_err());
        assert!(normalize_base_url("ftp://127.0.0.1").is_err());
    }

    #[test]
    fn test_validate_rejects_empty_output_dir() {
        let config = Config::new("http://localhost:8080", "admin", "pw", "").unwrap();
        assert!(validate_config(&config).is_err());

        let config = Config::new("http://localhost:8080", "admin", "pw", "out").unwrap();
        assert!(validate_config(&config).is_ok());
    }
}
