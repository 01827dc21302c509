//! Row assembly: nested traversal of the logical context kinds
//!
//! Drives the walk from Organization nodes down to the table type's leaf
//! kind and emits one merged row fragment per leaf context node:
//!
//! - station tables: `org -> station`, one row per MonitoringLocation
//! - result tables: `org -> activity -> result`, one row per Result
//!
//! Fragments merge outermost-first, so a deeper kind's value wins for any
//! column name accidentally present in both (the kinds' column sets are
//! disjoint by schema construction, but the override order is fixed).

use roxmltree::Document;
use tracing::debug;

use crate::app::models::{ContextKind, Row, TableType};
use crate::app::services::schema_registry::TableSchema;

use super::{extractor, navigator};

/// Walk `doc` according to the schema's table type, calling `emit` once per
/// assembled row in document order
///
/// Total rows emitted equal the number of leaf context nodes in the
/// document: the sum over organizations of their MonitoringLocation children
/// for station tables, or of their activities' Result children for result
/// tables.
pub(crate) fn for_each_row<F>(schema: &TableSchema, doc: &Document, mut emit: F)
where
    F: FnMut(Row),
{
    let organizations = navigator::organizations(doc);
    debug!("Assembling rows from {} organization nodes", organizations.len());

    for org in organizations {
        let org_fragment = extractor::extract(org, schema.bindings(ContextKind::Org));

        match schema.table_type() {
            TableType::Station => {
                for station in navigator::children(org, ContextKind::Station) {
                    let mut row = org_fragment.clone();
                    row.extend(extractor::extract(
                        station,
                        schema.bindings(ContextKind::Station),
                    ));
                    emit(row);
                }
            }
            TableType::Result => {
                for activity in navigator::children(org, ContextKind::Activity) {
                    let activity_fragment =
                        extractor::extract(activity, schema.bindings(ContextKind::Activity));

                    for result in navigator::children(activity, ContextKind::Result) {
                        let mut row = org_fragment.clone();
                        row.extend(activity_fragment.clone());
                        row.extend(extractor::extract(
                            result,
                            schema.bindings(ContextKind::Result),
                        ));
                        emit(row);
                    }
                }
            }
        }
    }
}
