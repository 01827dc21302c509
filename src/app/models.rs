//! Data models for WQX processing
//!
//! This module contains the core data structures for representing WQX table
//! types, logical context node kinds, portal responses, and the canonical
//! tabular form, following the WQX-Outbound 2.0 specification.

use crate::constants::{RESULT_SEARCH_PATH, STATION_SEARCH_PATH};
use crate::{Error, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Table Types
// =============================================================================

/// The supported tabular schemas derived from a WQX document
///
/// A portal response maps to exactly one table type. Station tables carry one
/// row per MonitoringLocation node; result tables carry one row per Result
/// node. There is no silent fallback for unrecognized types: resolution from
/// a response or a name is fallible and every downstream branch matches
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableType {
    /// One row per MonitoringLocation (portal /Station/search datasets)
    Station,
    /// One row per Result (portal /Result/search datasets)
    Result,
}

impl TableType {
    /// All supported table types
    pub const ALL: &'static [TableType] = &[TableType::Station, TableType::Result];

    /// The lowercase name used in CLI arguments and file names
    pub fn as_str(&self) -> &'static str {
        match self {
            TableType::Station => "station",
            TableType::Result => "result",
        }
    }

    /// Parse a table type name, failing for anything but `station`/`result`
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "station" => Ok(TableType::Station),
            "result" => Ok(TableType::Result),
            other => Err(Error::unknown_table_type(other)),
        }
    }

    /// Determine the table type from a portal response's status and URL
    ///
    /// Fails with [`Error::NonSuccessResponse`] when the status code is
    /// outside [200, 300), and with [`Error::UnrecognizedResourceType`] when
    /// the URL does not contain a known resource path. This is a precondition
    /// check performed before any tree traversal; it does not parse XML.
    pub fn resolve(status_code: u16, url: &str) -> Result<Self> {
        if !(200..300).contains(&status_code) {
            let reason = reqwest::StatusCode::from_u16(status_code)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("");
            return Err(Error::non_success_response(status_code, reason));
        }

        if url.contains(STATION_SEARCH_PATH) {
            Ok(TableType::Station)
        } else if url.contains(RESULT_SEARCH_PATH) {
            Ok(TableType::Result)
        } else {
            Err(Error::unrecognized_resource_type(url))
        }
    }

    /// The context kind whose nodes correspond to this table's rows
    pub fn leaf_kind(&self) -> ContextKind {
        match self {
            TableType::Station => ContextKind::Station,
            TableType::Result => ContextKind::Result,
        }
    }

    /// Context kinds whose columns are excluded from this table type
    ///
    /// Disambiguates column names shared across unrelated contexts
    /// (e.g. `MonitoringLocationIdentifier` exists under both station and
    /// activity nodes).
    pub fn excluded_kinds(&self) -> &'static [ContextKind] {
        match self {
            TableType::Station => &[ContextKind::Activity, ContextKind::Result],
            TableType::Result => &[ContextKind::Station],
        }
    }

    /// Context kinds contributing columns to this table type, outermost first
    ///
    /// The order is the row-merge order: fragments from later (deeper) kinds
    /// override earlier ones on accidental overlap.
    pub fn eligible_kinds(&self) -> &'static [ContextKind] {
        match self {
            TableType::Station => &[ContextKind::Org, ContextKind::Station],
            TableType::Result => &[ContextKind::Org, ContextKind::Activity, ContextKind::Result],
        }
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Logical Context Node Kinds
// =============================================================================

/// The four logical node kinds of a WQX document
///
/// Context nodes define the structural patterns of the tree: they contain
/// value-bearing leaf elements and possibly other context nodes. Organization
/// nodes nest directly under the document root; MonitoringLocation and
/// Activity nodes nest under an Organization; Result nodes nest under an
/// Activity. MonitoringLocation and Result are leaf kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    /// `/WQX/Organization`
    Org,
    /// `Organization/MonitoringLocation`
    Station,
    /// `Organization/Activity`
    Activity,
    /// `Activity/Result`
    Result,
}

impl ContextKind {
    /// All context kinds in nesting order
    pub const ALL: &'static [ContextKind] = &[
        ContextKind::Org,
        ContextKind::Station,
        ContextKind::Activity,
        ContextKind::Result,
    ];

    /// Short name used in error messages and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::Org => "org",
            ContextKind::Station => "station",
            ContextKind::Activity => "activity",
            ContextKind::Result => "result",
        }
    }

    /// WQX element name of nodes of this kind
    pub fn element_name(&self) -> &'static str {
        match self {
            ContextKind::Org => "Organization",
            ContextKind::Station => "MonitoringLocation",
            ContextKind::Activity => "Activity",
            ContextKind::Result => "Result",
        }
    }

    /// The kind this kind nests directly inside (None for org, which is
    /// scoped to the document root)
    pub fn parent(&self) -> Option<ContextKind> {
        match self {
            ContextKind::Org => None,
            ContextKind::Station | ContextKind::Activity => Some(ContextKind::Org),
            ContextKind::Result => Some(ContextKind::Activity),
        }
    }

    /// Whether nodes of this kind contain no further logical descendants
    pub fn is_leaf(&self) -> bool {
        matches!(self, ContextKind::Station | ContextKind::Result)
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Portal Response
// =============================================================================

/// A captured Water Quality Portal HTTP response
///
/// The mapping engine never touches the HTTP library; a response is reduced
/// to this plain value (final URL, status line, headers, body bytes) by the
/// client and everything downstream works from it.
#[derive(Debug, Clone)]
pub struct WqpResponse {
    /// Final request URL after redirects
    pub url: String,
    /// HTTP status code
    pub status_code: u16,
    /// HTTP reason phrase
    pub reason: String,
    /// Response headers in arrival order
    pub headers: Vec<(String, String)>,
    /// Raw response body
    pub body: Vec<u8>,
}

impl WqpResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Resolve which tabular schema applies to this response
    pub fn table_type(&self) -> Result<TableType> {
        TableType::resolve(self.status_code, &self.url)
    }

    /// Serialize the HTTP message head in the stash format: a status line,
    /// one `name:value` line per header, and a trailing newline
    pub fn serialize_head(&self) -> String {
        let mut head = format!("HTTP/1.1 {} {}\n", self.status_code, self.reason);
        for (name, value) in &self.headers {
            head.push_str(name);
            head.push(':');
            head.push_str(value);
            head.push('\n');
        }
        head
    }

    /// View the body as UTF-8 text
    pub fn body_text(&self) -> Result<&str> {
        std::str::from_utf8(&self.body)
            .map_err(|e| Error::io_error(format!("Response body is not valid UTF-8: {}", e)))
    }
}

// =============================================================================
// Canonical Tabular Form
// =============================================================================

/// A partially assembled row: column name to extracted string value
///
/// Sparse by design; projection through a [`TabularSchema`] fills absent
/// columns with the empty string.
pub type Row = HashMap<&'static str, String>;

/// The ordered, duplicate-free column sequence of one table type
#[derive(Debug, Clone)]
pub struct TabularSchema {
    table_type: TableType,
    columns: Vec<&'static str>,
}

impl TabularSchema {
    pub(crate) fn new(table_type: TableType, columns: Vec<&'static str>) -> Self {
        Self {
            table_type,
            columns,
        }
    }

    /// The table type this schema belongs to
    pub fn table_type(&self) -> TableType {
        self.table_type
    }

    /// Column names in output order
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns (never true for the static schemas)
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The canonical tabular form of a WQX document
///
/// A schema plus column-major value storage. Every column holds one value
/// per row; a value the source XML did not supply is the empty string, never
/// a missing entry. Constructed fresh per input document and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct Table {
    schema: TabularSchema,
    columns: Vec<Vec<String>>,
}

impl Table {
    pub(crate) fn new(schema: TabularSchema, columns: Vec<Vec<String>>) -> Self {
        debug_assert_eq!(schema.len(), columns.len());
        debug_assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "all columns must hold one value per row"
        );
        Self { schema, columns }
    }

    /// The schema this table was projected through
    pub fn schema(&self) -> &TabularSchema {
        &self.schema
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Values of a named column in row order
    pub fn column(&self, name: &str) -> Option<&[String]> {
        let index = self.schema.columns().iter().position(|c| *c == name)?;
        Some(&self.columns[index])
    }

    /// Value at a (row, column-name) coordinate
    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        self.column(name)?.get(row).map(String::as_str)
    }

    /// One row sliced across all columns, in schema order
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.num_rows() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|values| values[index].as_str())
                .collect(),
        )
    }

    /// Convert to a polars dataframe with one Utf8 series per schema column
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let columns: Vec<Column> = self
            .schema
            .columns()
            .iter()
            .zip(&self.columns)
            .map(|(name, values)| Series::new((*name).into(), values.as_slice()).into_column())
            .collect();

        DataFrame::new(columns)
            .map_err(|e| Error::dataframe("Failed to assemble dataframe from table", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_type_parse() {
        assert_eq!(TableType::parse("station").unwrap(), TableType::Station);
        assert_eq!(TableType::parse("result").unwrap(), TableType::Result);

        let err = TableType::parse("biodata").unwrap_err();
        assert!(matches!(err, Error::UnknownTableType { name } if name == "biodata"));
    }

    #[test]
    fn test_resolve_station_and_result_urls() {
        let table_type =
            TableType::resolve(200, "https://www.waterqualitydata.us/Station/search?mimeType=xml")
                .unwrap();
        assert_eq!(table_type, TableType::Station);

        let table_type =
            TableType::resolve(200, "https://www.waterqualitydata.us/Result/search?mimeType=xml")
                .unwrap();
        assert_eq!(table_type, TableType::Result);
    }

    #[test]
    fn test_resolve_rejects_non_success_status() {
        let err = TableType::resolve(404, "https://host/Station/search").unwrap_err();
        assert!(matches!(
            err,
            Error::NonSuccessResponse {
                status_code: 404,
                ..
            }
        ));

        // Status is checked before the URL
        let err = TableType::resolve(500, "https://host/Other/search").unwrap_err();
        assert!(matches!(
            err,
            Error::NonSuccessResponse {
                status_code: 500,
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_rejects_unknown_resource() {
        let err = TableType::resolve(200, "https://host/Other/search").unwrap_err();
        assert!(matches!(err, Error::UnrecognizedResourceType { .. }));
    }

    #[test]
    fn test_context_kind_nesting() {
        assert_eq!(ContextKind::Org.parent(), None);
        assert_eq!(ContextKind::Station.parent(), Some(ContextKind::Org));
        assert_eq!(ContextKind::Activity.parent(), Some(ContextKind::Org));
        assert_eq!(ContextKind::Result.parent(), Some(ContextKind::Activity));

        assert!(ContextKind::Station.is_leaf());
        assert!(ContextKind::Result.is_leaf());
        assert!(!ContextKind::Org.is_leaf());
        assert!(!ContextKind::Activity.is_leaf());
    }

    #[test]
    fn test_eligible_kinds_exclude_unrelated_contexts() {
        let station_kinds = TableType::Station.eligible_kinds();
        assert!(!station_kinds.contains(&ContextKind::Activity));
        assert!(!station_kinds.contains(&ContextKind::Result));

        let result_kinds = TableType::Result.eligible_kinds();
        assert!(!result_kinds.contains(&ContextKind::Station));
    }

    #[test]
    fn test_serialize_head_format() {
        let response = WqpResponse {
            url: "https://host/Station/search".to_string(),
            status_code: 200,
            reason: "OK".to_string(),
            headers: vec![
                ("content-type".to_string(), "text/xml".to_string()),
                ("content-length".to_string(), "42".to_string()),
            ],
            body: Vec::new(),
        };

        let head = response.serialize_head();
        assert_eq!(
            head,
            "HTTP/1.1 200 OK\ncontent-type:text/xml\ncontent-length:42\n"
        );
    }
}
