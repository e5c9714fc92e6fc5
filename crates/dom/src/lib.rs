//! Element tree model and serialization.
//!
//! This crate defines the core, in-memory representation of a markup
//! tree built programmatically, and the recursive rendering that turns
//! a tree into text.
//!
//! Nodes are cheap-clone handles over shared state: cloning a [`Node`]
//! yields a second handle to the same element, and equality is identity
//! equality, never structural. The mutation contract is deliberately
//! permissive — every operation that cannot apply (removing an absent
//! child, adding a child to a void element) is a silent no-op, so
//! misuse produces no symptom beyond the content simply not appearing
//! in rendered output.
//!
//! The tree is single-threaded: handles are not `Send`, and callers
//! needing cross-thread access must serialize it externally.

mod node;
mod render;

pub use node::{Attribute, Node, NodeId, NodeKind};
