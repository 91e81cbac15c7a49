//! Raw byte retrieval from URLs, files, and stdin.
//!
//! Every source yields the undecoded body so the same bytes can feed either
//! the HTML extractor or the PDF extractor.

use std::fs;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{GleanError, Result};

/// Desktop browser identity sent with every request to get past trivial bot blocking.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP client configuration for fetching pages and remote PDFs.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: BROWSER_USER_AGENT.to_string() }
    }
}

/// Fetches the body of a URL as raw bytes.
///
/// Performs exactly one GET request. Redirects are followed by the client,
/// non-2xx responses become [`GleanError::HttpStatus`], and nothing is retried.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<Vec<u8>> {
    let parsed_url = Url::parse(url).map_err(|e| GleanError::InvalidUrl(e.to_string()))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(GleanError::HttpError)?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "fetching");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .send()
        .await
        .map_err(|e| map_transport_error(e, config))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GleanError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let body = response.bytes().await.map_err(|e| map_transport_error(e, config))?;
    tracing::debug!(bytes = body.len(), status = status.as_u16(), "fetched");

    Ok(body.to_vec())
}

#[cfg(feature = "fetch")]
fn map_transport_error(err: reqwest::Error, config: &FetchConfig) -> GleanError {
    if err.is_timeout() { GleanError::Timeout { timeout: config.timeout } } else { GleanError::HttpError(err) }
}

/// Reads a local file as raw bytes.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<Vec<u8>> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(GleanError::FileNotFound(path_buf))
    } else {
        fs::read(&path_buf).map_err(GleanError::from)
    }
}

/// Reads all of standard input as raw bytes.
pub fn fetch_stdin() -> Result<Vec<u8>> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer).map_err(GleanError::from)?;

    Ok(buffer)
}

/// One-shot HTTP responder on loopback for exercising the real client.
#[cfg(all(test, feature = "fetch"))]
pub(crate) mod test_server {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answers a single request with `status_line` and `body`.
    ///
    /// Returns the URL to request and a handle yielding the raw request head.
    pub(crate) fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/page", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&head).into_owned()
        });

        (url, handle)
    }

    /// Value of a request header, matched case-insensitively.
    pub(crate) fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
        head.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name).then_some(value.trim())
        })
    }
}
