//! Table construction: projecting assembled rows through the column order
//!
//! Two equivalent strategies are supported. Row-major collects complete row
//! fragments and projects them through the schema afterwards; column-major
//! appends each row's projected values directly to per-column vectors as
//! rows are assembled. Both yield identical tables: the same column order,
//! the same values at every (row, column) coordinate.
//!
//! Projection is what makes the table sparse by design: a schema column the
//! assembled fragment does not carry becomes the empty string, never a
//! missing entry.

use roxmltree::Document;
use tracing::debug;

use crate::app::models::{Row, Table};
use crate::app::services::schema_registry::TableSchema;

use super::assembler;

/// Table construction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildStrategy {
    /// Build one value vector per schema column, appending in row order
    #[default]
    ColumnMajor,
    /// Collect complete rows first, then project columns
    RowMajor,
}

/// Project one assembled fragment through the schema's column order
fn projected_value(fragment: &Row, column: &str) -> String {
    fragment.get(column).cloned().unwrap_or_default()
}

/// Build the tabular form of `doc` for the schema's table type
pub(crate) fn build_table(schema: &TableSchema, doc: &Document, strategy: BuildStrategy) -> Table {
    let column_names = schema.columns();

    let columns = match strategy {
        BuildStrategy::RowMajor => {
            let mut rows: Vec<Row> = Vec::new();
            assembler::for_each_row(schema, doc, |row| rows.push(row));

            column_names
                .iter()
                .map(|name| {
                    rows.iter()
                        .map(|row| projected_value(row, name))
                        .collect::<Vec<String>>()
                })
                .collect()
        }
        BuildStrategy::ColumnMajor => {
            let mut columns: Vec<Vec<String>> = vec![Vec::new(); column_names.len()];
            assembler::for_each_row(schema, doc, |row| {
                for (values, name) in columns.iter_mut().zip(column_names) {
                    values.push(projected_value(&row, name));
                }
            });
            columns
        }
    };

    let table = Table::new(schema.tabular().clone(), columns);
    debug!(
        "Built {} table: {} rows x {} columns ({:?})",
        schema.table_type(),
        table.num_rows(),
        table.num_columns(),
        strategy
    );
    table
}
