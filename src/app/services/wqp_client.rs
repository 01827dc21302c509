//! REST client for the Water Quality Portal
//!
//! A thin async wrapper around the portal's RESTlike search endpoints. The
//! client supports `get` and `head` only, passes validated query parameters
//! through, and reduces every response to a plain [`WqpResponse`] value so
//! the mapping engine never touches the HTTP library.

use std::time::Duration;

use tracing::{debug, info};

use crate::app::models::WqpResponse;
use crate::config::Config;
use crate::constants::{
    BIO_SEARCH_PATH, DEFAULT_QUERY_PARAMS, RESULT_SEARCH_PATH, SIMPLESTATION_SEARCH_PATH,
    STATION_SEARCH_PATH, USER_AGENT,
};
use crate::{Error, Result};

/// Portal resource labels and their search paths
///
/// `simplestation` and `bio` are valid portal endpoints but have no tabular
/// schema; fetching them stashes raw XML only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLabel {
    /// `/Station/search`
    Station,
    /// `/Result/search`
    Result,
    /// `/simplestation/search`
    SimpleStation,
    /// `/biologicalresult/search`
    Bio,
}

impl ResourceLabel {
    /// Lowercase label used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceLabel::Station => "station",
            ResourceLabel::Result => "result",
            ResourceLabel::SimpleStation => "simplestation",
            ResourceLabel::Bio => "bio",
        }
    }

    /// Parse a resource label name
    pub fn parse(label: &str) -> Result<Self> {
        match label {
            "station" => Ok(ResourceLabel::Station),
            "result" => Ok(ResourceLabel::Result),
            "simplestation" => Ok(ResourceLabel::SimpleStation),
            "bio" => Ok(ResourceLabel::Bio),
            other => Err(Error::configuration(format!(
                "Unknown resource type '{}'. Valid values: station, result, simplestation, bio",
                other
            ))),
        }
    }

    /// Resource path appended to the portal host
    pub fn search_path(&self) -> &'static str {
        match self {
            ResourceLabel::Station => STATION_SEARCH_PATH,
            ResourceLabel::Result => RESULT_SEARCH_PATH,
            ResourceLabel::SimpleStation => SIMPLESTATION_SEARCH_PATH,
            ResourceLabel::Bio => BIO_SEARCH_PATH,
        }
    }
}

/// HTTP verbs the portal client supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Head,
}

/// Async REST client for portal search requests
#[derive(Debug, Clone)]
pub struct WqpClient {
    http: reqwest::Client,
    host_url: String,
}

impl WqpClient {
    /// Create a client for the configured portal host
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| Error::http("Failed to build HTTP client", e))?;

        Ok(Self {
            http,
            host_url: config.host_url.trim_end_matches('/').to_string(),
        })
    }

    /// The portal host this client talks to
    pub fn host_url(&self) -> &str {
        &self.host_url
    }

    /// Issue a search request against a portal resource
    ///
    /// The default `mimeType=xml` and `zip=no` parameters are applied unless
    /// the caller supplies their own values. Parameters are assumed to have
    /// been validated already.
    pub async fn request(
        &self,
        verb: HttpVerb,
        resource: ResourceLabel,
        parameters: &[(String, String)],
    ) -> Result<WqpResponse> {
        let request_url = format!("{}{}", self.host_url, resource.search_path());

        let mut query: Vec<(&str, &str)> = Vec::new();
        for (name, value) in DEFAULT_QUERY_PARAMS.iter().copied() {
            if !parameters.iter().any(|(n, _)| n.as_str() == name) {
                query.push((name, value));
            }
        }
        query.extend(parameters.iter().map(|(n, v)| (n.as_str(), v.as_str())));

        info!("{:?} {} ({} parameters)", verb, request_url, query.len());

        let builder = match verb {
            HttpVerb::Get => self.http.get(&request_url),
            HttpVerb::Head => self.http.head(&request_url),
        };
        let response = builder
            .query(&query)
            .send()
            .await
            .map_err(|e| Error::http(format!("Request to {} failed", request_url), e))?;

        let url = response.url().to_string();
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();

        let body = match verb {
            HttpVerb::Head => Vec::new(),
            HttpVerb::Get => response
                .bytes()
                .await
                .map_err(|e| Error::http("Failed to read response body", e))?
                .to_vec(),
        };

        debug!(
            "Response {} from {} ({} bytes)",
            status.as_u16(),
            url,
            body.len()
        );

        Ok(WqpResponse {
            url,
            status_code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
            headers,
            body,
        })
    }
}
