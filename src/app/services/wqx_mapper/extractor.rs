//! Column value extraction from a single context node
//!
//! Given a context node and the column bindings scoped to its kind, produces
//! a flat name-to-value row fragment. Missing data is never an error: a
//! column whose path matches no leaf resolves to the empty string. Multiple
//! matched leaves are merged, never treated as ambiguous.

use roxmltree::Node;

use crate::app::models::Row;
use crate::app::services::schema_registry::ColumnBinding;

use super::navigator::element_children;

/// Extract every bound column of `context` into a row fragment
///
/// Dictionary values are merges of the text values of all descendant leaves
/// matching the column's path; when there are multiple values, the source
/// held multiple sibling elements with non-empty text. The merge is a
/// single-space-delimited concatenation in document order.
pub(crate) fn extract(context: Node, bindings: &[ColumnBinding]) -> Row {
    let mut fragment = Row::with_capacity(bindings.len());
    for binding in bindings {
        fragment.insert(binding.name, merged_text(context, &binding.path));
    }
    fragment
}

/// Merge the text of every leaf reached by walking `path` from `context`
///
/// Each path segment widens the match set to the named element children of
/// every node matched so far, preserving document order. Empty elements
/// carry no text and contribute nothing to the merge; zero matched leaves
/// yield the empty string.
pub(crate) fn merged_text(context: Node, path: &[&str]) -> String {
    let mut matched = vec![context];
    for segment in path {
        matched = matched
            .iter()
            .flat_map(|node| element_children(*node, segment))
            .collect();
    }

    let texts: Vec<&str> = matched.iter().filter_map(|node| node.text()).collect();
    texts.join(" ")
}
