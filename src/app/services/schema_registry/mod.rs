//! Statically validated schema registry for the canonical tabular form
//!
//! The registry links every tabular column name to the WQX element path it
//! is extracted from, scoped to one of the four logical context kinds. It is
//! built once by an explicit initialization routine, validated at
//! construction time, and shared read-only for the life of the process.
//!
//! ## Validation
//!
//! Construction fails (and must abort initialization) when the static assets
//! are inconsistent:
//! - a column name appears twice within one table type's column order
//! - a column has zero, or more than one, resolvable path among the context
//!   kinds eligible for its table type
//!
//! Eligibility encodes the exclusion rule that disambiguates column names
//! shared across unrelated contexts: station tables never draw from
//! activity- or result-scoped paths, result tables never draw from
//! station-scoped paths. The owning kind of every column is fixed here, at
//! build time, and never re-derived during extraction.

pub mod columns;

#[cfg(test)]
pub mod tests;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::app::models::{ContextKind, TableType, TabularSchema};
use crate::{Error, Result};

pub use columns::{
    ACTIVITY_COLUMN_PATHS, ORG_COLUMN_PATHS, RESULT_COLUMN_PATHS, RESULT_TABLE_COLUMNS,
    STATION_COLUMN_PATHS, STATION_TABLE_COLUMNS,
};

/// A column resolved to its owning context kind and relative element path
#[derive(Debug, Clone)]
pub struct ColumnBinding {
    /// Tabular column name
    pub name: &'static str,
    /// Context kind the path is evaluated against
    pub kind: ContextKind,
    /// Path segments from the context node to the value-bearing leaf
    pub path: Vec<&'static str>,
}

/// One table type's compiled schema: ordered columns plus per-kind bindings
#[derive(Debug, Clone)]
pub struct TableSchema {
    tabular: TabularSchema,
    bindings: HashMap<ContextKind, Vec<ColumnBinding>>,
}

impl TableSchema {
    /// Compile and validate a column order against the static path tables
    pub(crate) fn compile(
        table_type: TableType,
        column_order: &'static [&'static str],
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for name in column_order.iter().copied() {
            if !seen.insert(name) {
                return Err(Error::schema_construction(format!(
                    "Duplicate column '{}' in {} schema",
                    name, table_type
                )));
            }
        }

        let mut bindings: HashMap<ContextKind, Vec<ColumnBinding>> = HashMap::new();
        for name in column_order.iter().copied() {
            let mut candidates = Vec::new();
            for kind in table_type.eligible_kinds() {
                if let Some((_, path)) = kind_paths(*kind).iter().find(|(n, _)| *n == name) {
                    candidates.push((*kind, *path));
                }
            }

            let (kind, path) = match candidates.as_slice() {
                [single] => *single,
                [] => {
                    return Err(Error::schema_construction(format!(
                        "No resolvable path for column '{}' in {} schema",
                        name, table_type
                    )));
                }
                _ => {
                    return Err(Error::schema_construction(format!(
                        "Column '{}' resolves to multiple context kinds in {} schema",
                        name, table_type
                    )));
                }
            };

            bindings.entry(kind).or_default().push(ColumnBinding {
                name,
                kind,
                path: path.split('/').collect(),
            });
        }

        Ok(Self {
            tabular: TabularSchema::new(table_type, column_order.to_vec()),
            bindings,
        })
    }

    /// The table type this schema describes
    pub fn table_type(&self) -> TableType {
        self.tabular.table_type()
    }

    /// The ordered column sequence
    pub fn tabular(&self) -> &TabularSchema {
        &self.tabular
    }

    /// Column names in output order
    pub fn columns(&self) -> &[&'static str] {
        self.tabular.columns()
    }

    /// Bindings owned by the given context kind (empty for kinds that
    /// contribute no columns to this table type)
    pub fn bindings(&self, kind: ContextKind) -> &[ColumnBinding] {
        self.bindings.get(&kind).map_or(&[], Vec::as_slice)
    }
}

/// Relative paths declared for a context kind, keyed by column name
fn kind_paths(kind: ContextKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        ContextKind::Org => ORG_COLUMN_PATHS,
        ContextKind::Station => STATION_COLUMN_PATHS,
        ContextKind::Activity => ACTIVITY_COLUMN_PATHS,
        ContextKind::Result => RESULT_COLUMN_PATHS,
    }
}

/// The process-wide schema registry
///
/// Holds the compiled station and result schemas. Immutable after
/// construction; safe to share across concurrent table constructions
/// without locking.
#[derive(Debug)]
pub struct SchemaRegistry {
    station: TableSchema,
    result: TableSchema,
}

impl SchemaRegistry {
    /// Build and validate the registry from the static schema assets
    pub fn new() -> Result<Self> {
        Ok(Self {
            station: TableSchema::compile(TableType::Station, STATION_TABLE_COLUMNS)?,
            result: TableSchema::compile(TableType::Result, RESULT_TABLE_COLUMNS)?,
        })
    }

    /// Shared registry instance, built on first use
    ///
    /// Construction errors indicate corrupt static assets and propagate to
    /// the caller unmodified; nothing is cached in that case.
    pub fn global() -> Result<&'static SchemaRegistry> {
        static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

        if let Some(registry) = REGISTRY.get() {
            return Ok(registry);
        }
        let built = SchemaRegistry::new()?;
        Ok(REGISTRY.get_or_init(|| built))
    }

    /// The compiled schema for a table type
    pub fn table_schema(&self, table_type: TableType) -> &TableSchema {
        match table_type {
            TableType::Station => &self.station,
            TableType::Result => &self.result,
        }
    }

    /// Ordered column names of a table type
    pub fn columns_for(&self, table_type: TableType) -> &[&'static str] {
        self.table_schema(table_type).columns()
    }

    /// Relative path segments for a (context kind, column name) pair
    ///
    /// Fails with [`Error::UnknownColumn`] when no mapping exists.
    pub fn path_for(&self, kind: ContextKind, name: &str) -> Result<&[&'static str]> {
        for schema in [&self.station, &self.result] {
            if let Some(binding) = schema.bindings(kind).iter().find(|b| b.name == name) {
                return Ok(&binding.path);
            }
        }
        Err(Error::unknown_column(kind.as_str(), name))
    }
}
