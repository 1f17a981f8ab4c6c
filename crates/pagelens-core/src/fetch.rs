//! Bounded page retrieval

use std::error::Error as StdError;

use log::debug;
use reqwest::{Client, Response};

use crate::config::FetchConfig;
use crate::error::AnalysisError;

/// A successfully retrieved document.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final status after redirects, always in `200..400`
    pub status: u16,

    /// Body bytes, at most `max_body_size` of them
    pub body: Vec<u8>,
}

/// HTTP client wrapper enforcing the timeout, body cap and status policy.
///
/// A single fetcher can serve any number of independent requests.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_body_size: usize,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            max_body_size: config.max_body_size,
        })
    }

    /// Fetch an already normalized URL.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, AnalysisError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(describe_error(&e)))?;

        let status = response.status();
        debug!("{url} answered {status}");

        if !(200..400).contains(&status.as_u16()) {
            return Err(AnalysisError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        let (body, truncated) = read_capped(response, self.max_body_size)
            .await
            .map_err(|e| AnalysisError::Read {
                status: status.as_u16(),
                message: describe_error(&e),
            })?;

        if truncated {
            debug!(
                "Body of {url} exceeded {} bytes and was truncated",
                self.max_body_size
            );
        }

        Ok(FetchedPage {
            status: status.as_u16(),
            body,
        })
    }
}

/// Stream the body, keeping at most `max_size` bytes.
///
/// Hitting the cap stops the read without an error.
async fn read_capped(mut response: Response, max_size: usize) -> reqwest::Result<(Vec<u8>, bool)> {
    let mut buf = Vec::with_capacity(max_size.min(64 * 1024));

    while let Some(chunk) = response.chunk().await? {
        let remaining = max_size - buf.len();
        if chunk.len() > remaining {
            buf.extend_from_slice(&chunk[..remaining]);
            return Ok((buf, true));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok((buf, false))
}

/// Render an error together with its source chain.
///
/// reqwest's own message is often just "error sending request"; the
/// useful part (DNS, refused, TLS) lives in the sources.
fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        text: &'static str,
        inner: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.text)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.inner.as_deref().map(|e| e as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn describe_error_joins_source_chain() {
        let err = Layer {
            text: "error sending request",
            inner: Some(Box::new(Layer {
                text: "dns error",
                inner: Some(Box::new(Layer {
                    text: "failed to lookup address",
                    inner: None,
                })),
            })),
        };

        assert_eq!(
            describe_error(&err),
            "error sending request: dns error: failed to lookup address"
        );
    }

    #[test]
    fn describe_error_skips_repeated_causes() {
        let err = Layer {
            text: "timed out: operation timed out",
            inner: Some(Box::new(Layer {
                text: "operation timed out",
                inner: None,
            })),
        };

        assert_eq!(describe_error(&err), "timed out: operation timed out");
    }

    #[test]
    fn fetcher_builds_from_default_config() {
        assert!(Fetcher::new(&FetchConfig::default()).is_ok());
    }
}
