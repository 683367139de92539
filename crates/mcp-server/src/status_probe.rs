//! Best-effort homepage reachability check.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of one probe. Every transport failure folds into `ProbeFailed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable { code: u16, reason: String },
    /// The endpoint answered with a 4xx/5xx status.
    RemoteError { code: u16 },
    ProbeFailed { description: String },
}

impl ProbeOutcome {
    pub fn status_line(&self) -> String {
        match self {
            ProbeOutcome::Reachable { code, reason } => {
                format!("🌐 Status: {code} {reason}").trim_end().to_string()
            }
            ProbeOutcome::RemoteError { code } => format!("❌ HTTP Error: {code}"),
            ProbeOutcome::ProbeFailed { description } => {
                format!("⚠️ Status Check Failed: {description}")
            }
        }
    }
}

#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// HEAD request with a fixed timeout. Redirects are reported, not followed.
pub struct HttpStatusProbe {
    /// A client that failed to build is reported on every check instead of at startup.
    client: Result<Client, String>,
}

impl HttpStatusProbe {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .redirect(Policy::none())
            .build()
            .map_err(|err| {
                log::warn!("Failed to build HTTP client for status checks: {err}");
                format!("Failed to build HTTP client: {err}")
            });
        Self { client }
    }
}

impl Default for HttpStatusProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusProbe for HttpStatusProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let client = match &self.client {
            Ok(client) => client,
            Err(description) => {
                return ProbeOutcome::ProbeFailed {
                    description: description.clone(),
                }
            }
        };
        match client.head(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_client_error() || status.is_server_error() {
                    ProbeOutcome::RemoteError {
                        code: status.as_u16(),
                    }
                } else {
                    ProbeOutcome::Reachable {
                        code: status.as_u16(),
                        reason: status.canonical_reason().unwrap_or_default().to_string(),
                    }
                }
            }
            Err(err) => {
                log::debug!("status probe for {url} failed: {err}");
                ProbeOutcome::ProbeFailed {
                    description: err.to_string(),
                }
            }
        }
    }
}
