use std::fs;

use thiserror::Error;

/// Demo dataset bundled into the binary, playable with `--sample`.
pub const SAMPLE_QUESTIONS: &str = include_str!("../../assets/fragen.csv");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
    #[cfg(feature = "network")]
    #[error("could not fetch {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },
    #[cfg(feature = "network")]
    #[error("server answered {status} for {url}")]
    HttpStatus { url: String, status: u16 },
    #[cfg(not(feature = "network"))]
    #[error("cannot fetch {url}: built without the network feature")]
    NetworkDisabled { url: String },
}

pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetches the raw questions text from a filesystem path or an http(s) URL.
/// Errors carry the resource name so they can be shown as-is on the board.
pub fn fetch_text(source: &str) -> Result<String, LoadError> {
    if is_url(source) {
        fetch_url(source)
    } else {
        fs::read_to_string(source).map_err(|source_err| LoadError::File {
            path: source.to_string(),
            source: source_err,
        })
    }
}

#[cfg(feature = "network")]
fn fetch_url(url: &str) -> Result<String, LoadError> {
    let wrap = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(wrap)?;
    let response = client.get(url).send().map_err(wrap)?;
    if !response.status().is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    response.text().map_err(wrap)
}

#[cfg(not(feature = "network"))]
fn fetch_url(url: &str) -> Result<String, LoadError> {
    Err(LoadError::NetworkDisabled {
        url: url.to_string(),
    })
}
