//! HTTP log source.
//!
//! One blocking `GET` per fetch. The key is stored base64-encoded and only
//! decoded when a request is made.

use super::LogSource;
use crate::model::FetchError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::blocking::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Header carrying the decoded key.
pub const LOG_KEY_HEADER: &str = "x-log-key";

/// Fetches the raw log batch from the log endpoint.
pub struct HttpSource {
    /// Build failures are kept and reported by the first fetch.
    client: Result<Client, FetchError>,
    endpoint: String,
    api_key_base64: String,
}

impl HttpSource {
    /// Create a source for `endpoint` with a base64-encoded key.
    ///
    /// The client has no request timeout; a slow endpoint only delays the
    /// loading state.
    pub fn new(endpoint: &str, api_key_base64: &str) -> Self {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| FetchError::transport(format!("HTTP client setup failed: {e}")));

        Self {
            client,
            endpoint: endpoint.trim().to_string(),
            api_key_base64: api_key_base64.trim().to_string(),
        }
    }

    /// Endpoint URL, trimmed.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for HttpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpSource")
            .field("endpoint", &self.endpoint)
            .field("api_key_base64", &"<redacted>")
            .finish()
    }
}

/// Decode the configured key.
///
/// # Errors
///
/// Returns `FetchError::InvalidKey` if the value is not base64 or not UTF-8.
pub fn decode_api_key(encoded: &str) -> Result<String, FetchError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| FetchError::InvalidKey {
            reason: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|e| FetchError::InvalidKey {
        reason: e.to_string(),
    })
}

/// Status text for a non-success response.
///
/// Uses the canonical reason phrase, or the numeric code when there is none.
pub fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

impl LogSource for HttpSource {
    fn fetch(&mut self) -> Result<Vec<String>, FetchError> {
        let client = self.client.as_ref().map_err(Clone::clone)?;
        let key = decode_api_key(&self.api_key_base64)?;

        info!(endpoint = %self.endpoint, "Fetching logs");

        let response = client
            .get(&self.endpoint)
            .header(LOG_KEY_HEADER, key)
            .send()
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Log endpoint returned an error status");
            return Err(FetchError::Status {
                status: status_text(status),
            });
        }

        let lines: Vec<String> = response
            .json()
            .map_err(|e| FetchError::transport(e.to_string()))?;

        debug!(lines = lines.len(), "Decoded log payload");
        Ok(lines)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve exactly one HTTP response and report the request head.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            let _ = tx.send(head);

            let mut stream = stream;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        });

        (format!("http://{addr}/api/logs"), rx)
    }

    #[test]
    fn decode_api_key_decodes_base64() {
        assert_eq!(decode_api_key("c2VjcmV0LWtleQ==").unwrap(), "secret-key");
    }

    #[test]
    fn decode_api_key_accepts_empty() {
        assert_eq!(decode_api_key("").unwrap(), "");
    }

    #[test]
    fn decode_api_key_rejects_invalid_base64() {
        let err = decode_api_key("not base64!").unwrap_err();
        assert!(matches!(err, FetchError::InvalidKey { .. }));
    }

    #[test]
    fn status_text_uses_reason_phrase() {
        assert_eq!(
            status_text(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
    }

    #[test]
    fn debug_output_redacts_key() {
        let source = HttpSource::new("http://127.0.0.1:1/api/logs", "c2VjcmV0LWtleQ==");
        let debug = format!("{source:?}");
        assert!(!debug.contains("c2VjcmV0"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn fetch_sends_decoded_key_header_and_returns_lines() {
        let (url, head_rx) = serve_once(
            "200 OK",
            r#"["2024-01-01T10:00|=|high|=|ERROR|=|t1|=|a1","2024-01-02T10:00|=|low|=|info|=|t2|=|a2"]"#,
        );
        let mut source = HttpSource::new(&url, "c2VjcmV0LWtleQ==");

        let lines = source.fetch().unwrap();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2024-01-01T10:00"));
        let head = head_rx.recv().unwrap().to_lowercase();
        assert!(head.starts_with("get /api/logs"));
        assert!(head.contains("x-log-key: secret-key"));
    }

    #[test]
    fn fetch_maps_error_status_to_status_text() {
        let (url, _head) = serve_once("500 Internal Server Error", "[]");
        let mut source = HttpSource::new(&url, "");

        let err = source.fetch().unwrap_err();

        assert_eq!(
            err,
            FetchError::Status {
                status: "Internal Server Error".to_string()
            }
        );
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[test]
    fn fetch_maps_non_array_body_to_transport_error() {
        let (url, _head) = serve_once("200 OK", r#"{"logs":[]}"#);
        let mut source = HttpSource::new(&url, "");

        let err = source.fetch().unwrap_err();

        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[test]
    fn fetch_with_invalid_key_fails_before_request() {
        let mut source = HttpSource::new("http://127.0.0.1:1/api/logs", "%%%");
        assert!(matches!(
            source.fetch().unwrap_err(),
            FetchError::InvalidKey { .. }
        ));
    }

    #[test]
    fn client_setup_failure_surfaces_on_fetch() {
        let mut source = HttpSource {
            client: Err(FetchError::transport("HTTP client setup failed: no TLS backend")),
            endpoint: "http://127.0.0.1:1/api/logs".to_string(),
            api_key_base64: String::new(),
        };

        match source.fetch().unwrap_err() {
            FetchError::Transport { message } => assert!(message.contains("no TLS backend")),
            other => panic!("Expected Transport error, got {other:?}"),
        }
    }

    #[test]
    fn fetch_connection_refused_is_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let mut source = HttpSource::new(&format!("http://127.0.0.1:{port}/api/logs"), "");

        let err = source.fetch().unwrap_err();

        match err {
            FetchError::Transport { message } => assert!(!message.is_empty()),
            other => panic!("Expected Transport error, got {other:?}"),
        }
    }
}
