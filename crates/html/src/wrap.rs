//! Fluent composition helpers.
//!
//! Pure convenience over the core child mutations: every helper returns
//! a handle to the node the caller keeps composing with, so calls chain
//! without temporaries.

use wattle_dom::Node;

/// Adds `child` under `parent` and hands `parent` back.
pub fn wrap(parent: &Node, child: &Node) -> Node {
    parent.add_child(child);
    parent.clone()
}

/// Adds a text leaf under `parent` and hands `parent` back.
pub fn wrap_text(parent: &Node, text: impl Into<String>) -> Node {
    parent.add_text(text);
    parent.clone()
}

/// Adds every child in order under `parent` and hands `parent` back.
pub fn wrap_all<I>(parent: &Node, children: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    parent.add_children(children);
    parent.clone()
}

/// Adds `child` under `parent` and hands `parent` back; reads best when
/// the child is the subject: `wrap_in(&cell, &row)`.
pub fn wrap_in(child: &Node, parent: &Node) -> Node {
    parent.add_child(child);
    parent.clone()
}

/// Adds every child in order under `parent` and hands `parent` back.
pub fn wrap_all_in<I>(children: I, parent: &Node) -> Node
where
    I: IntoIterator<Item = Node>,
{
    parent.add_children(children);
    parent.clone()
}
