//! Application constants for WQX processor
//!
//! This module contains the WQX namespace, Water Quality Portal endpoint
//! fragments, default values, and file naming conventions used throughout
//! the WQX processor application.

// =============================================================================
// WQX Namespace and Document Structure
// =============================================================================

/// Namespace URI of the WQX-Outbound 2.0 schema all portal payloads use
pub const WQX_NAMESPACE: &str = "http://qwwebservices.usgs.gov/schemas/WQX-Outbound/2_0/";

/// Document root element of an outbound WQX payload
pub const WQX_ROOT_ELEMENT: &str = "WQX";

// =============================================================================
// Water Quality Portal Endpoints
// =============================================================================

/// Default Water Quality Portal host
pub const DEFAULT_HOST_URL: &str = "https://www.waterqualitydata.us";

/// Resource path for station searches
pub const STATION_SEARCH_PATH: &str = "/Station/search";

/// Resource path for result searches
pub const RESULT_SEARCH_PATH: &str = "/Result/search";

/// Resource path for simplestation searches (no tabular schema)
pub const SIMPLESTATION_SEARCH_PATH: &str = "/simplestation/search";

/// Resource path for biological result searches (no tabular schema)
pub const BIO_SEARCH_PATH: &str = "/biologicalresult/search";

/// Query parameters applied to every portal request unless overridden
pub const DEFAULT_QUERY_PARAMS: &[(&str, &str)] = &[("mimeType", "xml"), ("zip", "no")];

// =============================================================================
// HTTP Defaults
// =============================================================================

/// Default request timeout in seconds (portal result queries can be slow)
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 300;

/// User agent sent with portal requests
pub const USER_AGENT: &str = concat!("wqx-processor/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// File Naming and Processing Defaults
// =============================================================================

/// Suffix appended to stashed HTTP responses
pub const STASH_HTTP_SUFFIX: &str = ".http";

/// Extension of WQX payload files discovered by the convert command
pub const XML_EXTENSION: &str = "xml";

/// Default number of concurrent workers for directory conversion
pub const DEFAULT_CONVERT_WORKERS: usize = 4;
