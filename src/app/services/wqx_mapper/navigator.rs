//! Context node navigation over a parsed WQX tree
//!
//! Resolves, from a context node or the document root, the ordered nodeset
//! of the next nested logical kind. Ordering is document order throughout;
//! it determines row order in the final table and is never normalized,
//! filtered, or deduplicated. A malformed document with repeated sibling
//! nodes of the same kind simply yields one context node per sibling.

use roxmltree::{Document, Node};

use crate::app::models::ContextKind;
use crate::constants::{WQX_NAMESPACE, WQX_ROOT_ELEMENT};

/// Whether a node is a WQX element with the given local name
///
/// Portal payloads qualify every element with the WQX-Outbound 2.0
/// namespace; elements with no namespace are also accepted so stripped-down
/// local documents behave the same.
pub(crate) fn is_wqx_element(node: Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node
            .tag_name()
            .namespace()
            .is_none_or(|ns| ns == WQX_NAMESPACE)
}

/// Element children of a node with the given WQX local name, in document order
pub(crate) fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Vec<Node<'a, 'input>> {
    node.children()
        .filter(|child| is_wqx_element(*child, name))
        .collect()
}

/// Context nodes of the given kind directly nested in `context`
pub fn children<'a, 'input>(
    context: Node<'a, 'input>,
    kind: ContextKind,
) -> Vec<Node<'a, 'input>> {
    element_children(context, kind.element_name())
}

/// Organization context nodes of a document
///
/// Organizations are scoped to the document root: a document whose root is
/// not a WQX element yields no context nodes, and therefore no rows.
pub fn organizations<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
    let root = doc.root_element();
    if !is_wqx_element(root, WQX_ROOT_ELEMENT) {
        return Vec::new();
    }
    children(root, ContextKind::Org)
}
