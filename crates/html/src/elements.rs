//! Constructors for the concrete HTML vocabulary.
//!
//! Each function fixes a tag name and capability over the core element
//! model; the accessors are sugar over one named attribute's value.

use wattle_dom::{Attribute, Node};

/// An `<a>` element, seeded with an empty `href` attribute.
pub fn anchor() -> Node {
    let node = Node::new("a", true);
    node.add_attribute(Attribute::new("href", ""));
    node
}

pub fn href(node: &Node) -> String {
    node.attribute("href").unwrap_or_default()
}

pub fn set_href(node: &Node, value: impl Into<String>) {
    node.set_attribute("href", value);
}

/// An `<img>` element: void, self-closing, seeded with an empty `src`
/// attribute.
pub fn image() -> Node {
    let node = Node::new("img", false);
    node.add_attribute(Attribute::new("src", ""));
    node
}

pub fn src(node: &Node) -> String {
    node.attribute("src").unwrap_or_default()
}

pub fn set_src(node: &Node, value: impl Into<String>) {
    node.set_attribute("src", value);
}

pub fn paragraph() -> Node {
    Node::new("p", true)
}

pub fn table() -> Node {
    Node::new("table", true)
}

pub fn table_row() -> Node {
    Node::new("tr", true)
}

pub fn table_cell() -> Node {
    Node::new("td", true)
}

/// A `<td>` already holding a text leaf.
pub fn table_cell_text(text: impl Into<String>) -> Node {
    let cell = table_cell();
    cell.add_text(text);
    cell
}

pub fn list_item() -> Node {
    Node::new("li", true)
}

pub fn unordered_list() -> Node {
    Node::new("ul", true)
}

pub fn ordered_list() -> Node {
    Node::new("ol", true)
}
