//! WQX-to-tabular mapping engine
//!
//! This module converts a parsed WQX document into its canonical tabular
//! form. The mapping is driven entirely by the schema registry: context
//! nodes are located by the navigator, their column values extracted against
//! the registry's per-kind bindings, rows assembled by nested traversal, and
//! the result projected through the fixed column order.
//!
//! ## Architecture
//!
//! - [`navigator`] - context nodeset resolution in document order
//! - [`extractor`] - per-context column extraction with the merge rule
//! - [`assembler`] - nested traversal emitting one fragment per row
//! - [`builder`] - row-major / column-major table construction
//!
//! The walk is synchronous and single-pass; the registry is read-only shared
//! state, so any number of documents can be mapped concurrently.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wqx_processor::{BuildStrategy, TableType, WqxMapper};
//!
//! # fn example(xml: &str) -> wqx_processor::Result<()> {
//! let mapper = WqxMapper::new()?;
//! let doc = roxmltree::Document::parse(xml)?;
//! let table = mapper.table_from_xml(TableType::Station, &doc, BuildStrategy::default());
//!
//! println!("{} station rows", table.num_rows());
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod builder;
pub mod extractor;
pub mod navigator;

#[cfg(test)]
pub mod tests;

use polars::prelude::DataFrame;
use roxmltree::Document;
use tracing::info;

use crate::app::models::{Table, TableType, WqpResponse};
use crate::app::services::schema_registry::SchemaRegistry;
use crate::{Error, Result};

pub use builder::BuildStrategy;

/// Maps WQX documents to their canonical tabular form
///
/// Holds a reference to the process-wide schema registry; construction only
/// fails when the registry's static assets fail validation.
#[derive(Debug, Clone, Copy)]
pub struct WqxMapper {
    registry: &'static SchemaRegistry,
}

impl WqxMapper {
    /// Create a mapper backed by the shared schema registry
    pub fn new() -> Result<Self> {
        Ok(Self {
            registry: SchemaRegistry::global()?,
        })
    }

    /// The registry this mapper resolves schemas from
    pub fn registry(&self) -> &'static SchemaRegistry {
        self.registry
    }

    /// Build the tabular form of a parsed document for a known table type
    ///
    /// The document is walked depth-first in a single pass. An input with no
    /// matching context nodes (including a non-WQX root) produces an empty
    /// table that still carries the full column order.
    pub fn table_from_xml(
        &self,
        table_type: TableType,
        doc: &Document,
        strategy: BuildStrategy,
    ) -> Table {
        let schema = self.registry.table_schema(table_type);
        builder::build_table(schema, doc, strategy)
    }

    /// Build the tabular form and convert it to a polars dataframe
    pub fn dataframe_from_xml(
        &self,
        table_type: TableType,
        doc: &Document,
        strategy: BuildStrategy,
    ) -> Result<DataFrame> {
        self.table_from_xml(table_type, doc, strategy).to_dataframe()
    }

    /// Resolve a portal response's table type and map its XML body
    ///
    /// Fails with the resolver's precondition errors for non-2xx responses
    /// and unrecognized resource URLs, and with an XML parsing error for a
    /// malformed body. A successful response with an empty body yields an
    /// empty table.
    pub fn table_from_response(
        &self,
        response: &WqpResponse,
        strategy: BuildStrategy,
    ) -> Result<Table> {
        let table_type = response.table_type()?;

        if response.body.is_empty() {
            let schema = self.registry.table_schema(table_type);
            return Ok(Table::new(
                schema.tabular().clone(),
                vec![Vec::new(); schema.columns().len()],
            ));
        }

        let body = response.body_text()?;
        let doc = Document::parse(body)
            .map_err(|e| Error::xml_parsing(format!("Invalid WQX payload from {}", response.url), e))?;

        let table = self.table_from_xml(table_type, &doc, strategy);
        info!(
            "Mapped {} response to {} rows",
            table_type,
            table.num_rows()
        );
        Ok(table)
    }

    /// Resolve, map, and convert a portal response to a polars dataframe
    pub fn dataframe_from_response(
        &self,
        response: &WqpResponse,
        strategy: BuildStrategy,
    ) -> Result<DataFrame> {
        self.table_from_response(response, strategy)?.to_dataframe()
    }
}
