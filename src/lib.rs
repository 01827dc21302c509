//! WQX Processor Library
//!
//! A Rust library for converting USGS/EPA Water Quality XML (WQX) documents
//! into their canonical tabular form for CSV export and dataframe analysis.
//!
//! This library provides tools for:
//! - A statically validated schema registry mapping tabular column names to
//!   WQX element paths scoped to the four logical node kinds
//! - Walking a parsed WQX tree in document order to assemble sparse,
//!   column-ordered rows (station and result tables)
//! - Row-major and column-major table construction with identical output
//! - Fetching Water Quality Portal responses and stashing them to disk
//! - Validating WQP query parameters before a request is issued
//! - Writing tables as CSV through polars dataframes

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod param_validator;
        pub mod schema_registry;
        pub mod wqp_client;
        pub mod wqx_mapper;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ContextKind, Table, TableType, WqpResponse};
pub use app::services::schema_registry::SchemaRegistry;
pub use app::services::wqx_mapper::{BuildStrategy, WqxMapper};
pub use config::Config;

/// Result type alias for the WQX processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for WQX processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// XML document could not be parsed
    #[error("XML parsing error: {message}")]
    XmlParsing {
        message: String,
        #[source]
        source: roxmltree::Error,
    },

    /// HTTP request to the Water Quality Portal failed
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Dataframe construction or CSV serialization failed
    #[error("Dataframe error: {message}")]
    DataFrame {
        message: String,
        #[source]
        source: polars::error::PolarsError,
    },

    /// Static schema assets are inconsistent (duplicate or unresolvable column)
    #[error("Schema construction error: {message}")]
    SchemaConstruction { message: String },

    /// Table type name is not one of the supported tabular schemas
    #[error("Unknown table type: {name}")]
    UnknownTableType { name: String },

    /// No column path is registered for the given context kind and name
    #[error("Unknown column '{name}' for context kind '{kind}'")]
    UnknownColumn { kind: String, name: String },

    /// Portal response carried a non-2xx status code
    #[error("The response is not OK: status code {status_code} {reason}")]
    NonSuccessResponse { status_code: u16, reason: String },

    /// Portal response URL does not identify a known resource type
    #[error("Unable to determine table type from response URL: {url}")]
    UnrecognizedResourceType { url: String },

    /// WQP query parameter failed validation
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an XML parsing error with context
    pub fn xml_parsing(message: impl Into<String>, source: roxmltree::Error) -> Self {
        Self::XmlParsing {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a dataframe error with context
    pub fn dataframe(message: impl Into<String>, source: polars::error::PolarsError) -> Self {
        Self::DataFrame {
            message: message.into(),
            source,
        }
    }

    /// Create a schema construction error
    pub fn schema_construction(message: impl Into<String>) -> Self {
        Self::SchemaConstruction {
            message: message.into(),
        }
    }

    /// Create an unknown table type error
    pub fn unknown_table_type(name: impl Into<String>) -> Self {
        Self::UnknownTableType { name: name.into() }
    }

    /// Create an unknown column error
    pub fn unknown_column(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownColumn {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create a non-success response error
    pub fn non_success_response(status_code: u16, reason: impl Into<String>) -> Self {
        Self::NonSuccessResponse {
            status_code,
            reason: reason.into(),
        }
    }

    /// Create an unrecognized resource type error
    pub fn unrecognized_resource_type(url: impl Into<String>) -> Self {
        Self::UnrecognizedResourceType { url: url.into() }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(error: roxmltree::Error) -> Self {
        Self::XmlParsing {
            message: "XML parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::DataFrame {
            message: "Dataframe operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
