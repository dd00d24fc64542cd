//! Grade card portal client.
//!
//! [`ResultSource`] is the seam the pipeline depends on; [`PortalClient`] implements it with a
//! single reqwest GET per lookup (no retries, transport-default timeouts).

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::{debug, instrument, warn};

use crate::alias::EnrollmentNumber;
use crate::config::PortalConfig;
use crate::error::FetchError;

const GRADECARD_PATH: &str = "/gradecard/view_gradecard.aspx";

/// Source of grade card HTML for an enrollment number.
#[async_trait]
pub trait ResultSource: Send + Sync {
    /// Returns the page body on HTTP 200.
    async fn fetch(&self, enrollment: EnrollmentNumber) -> Result<String, FetchError>;
}

/// HTTP client for the university portal.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: Url,
    program: String,
    result_type: String,
}

impl PortalClient {
    pub fn new(config: &PortalConfig) -> anyhow::Result<Self> {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &PortalConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| anyhow::anyhow!("Invalid PORTAL_BASE_URL {}: {}", config.base_url, e))?;
        Ok(Self {
            http,
            base_url,
            program: config.program.clone(),
            result_type: config.result_type.clone(),
        })
    }

    /// `<base>/gradecard/view_gradecard.aspx?eno=<n>&prog=<program>&type=<result_type>`.
    /// A path on the base URL is kept as a prefix.
    pub fn gradecard_url(&self, enrollment: EnrollmentNumber) -> Url {
        let mut url = self.base_url.clone();
        let prefix = self.base_url.path().trim_end_matches('/');
        url.set_path(&format!("{}{}", prefix, GRADECARD_PATH));
        url.query_pairs_mut()
            .clear()
            .append_pair("eno", &enrollment.to_string())
            .append_pair("prog", &self.program)
            .append_pair("type", &self.result_type);
        url
    }
}

#[async_trait]
impl ResultSource for PortalClient {
    #[instrument(skip(self))]
    async fn fetch(&self, enrollment: EnrollmentNumber) -> Result<String, FetchError> {
        let url = self.gradecard_url(enrollment);
        debug!(url = %url, "Fetching grade card");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(error = %e, "Portal request failed");
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        match status {
            StatusCode::OK => response
                .text()
                .await
                .map_err(|e| FetchError::Network(e.to_string())),
            StatusCode::NOT_FOUND => {
                warn!(status = status.as_u16(), "Portal returned not found");
                Err(FetchError::NotFound {
                    status: status.as_u16(),
                })
            }
            _ => {
                warn!(status = status.as_u16(), "Portal returned non-200 status");
                Err(FetchError::Transient {
                    status: status.as_u16(),
                })
            }
        }
    }
}
