//! wattle — a fluent, in-memory markup tree builder.
//!
//! Build a tree of elements programmatically and render it to text:
//!
//! ```
//! use wattle::html::{anchor, set_href, wrap_text};
//!
//! let a = anchor();
//! set_href(&a, "http://example.com");
//! wrap_text(&a, "click me");
//! assert_eq!(a.to_html(), "<a href=\"http://example.com\">click me</a>");
//! ```
//!
//! The core model lives in [`wattle_dom`]; the HTML vocabulary and
//! fluent helpers in [`wattle_html`]; inline style value objects in
//! [`wattle_style`].
//!
//! Mutation never fails: operations that cannot apply (children on a
//! void element, removing an absent target) are silent no-ops, so a
//! misplaced call shows up only as content missing from the rendered
//! output. Rendering performs no escaping and no validation.

pub use wattle_dom::{Attribute, Node, NodeId, NodeKind};

pub use wattle_html as html;
pub use wattle_style as style;
