//! Recursive serialization of a node and its subtree.
//!
//! Rendering is a pure function of current tree state: it never fails,
//! never mutates, and produces the same text for the same tree however
//! often it is called.

use crate::node::{Node, NodeKind};
use std::fmt;

impl Node {
    /// Renders this node and its full subtree to markup text.
    pub fn to_html(&self) -> String {
        log::trace!("rendering subtree rooted at {}", self.node_id());
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, f)
    }
}

fn write_node(node: &Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let inner = node.inner.borrow();

    // Raw text leaves bypass tag formatting entirely; this path is kept
    // independent of the tagged path below.
    if let NodeKind::Text(payload) = &inner.kind {
        return f.write_str(payload);
    }

    write!(f, "<{}", inner.tag)?;
    for attr in inner.attrs.iter().filter(|a| a.is_renderable()) {
        write!(f, " {attr}")?;
    }

    match &inner.kind {
        NodeKind::Void => f.write_str("/>"),
        _ => {
            f.write_str(">")?;
            for child in &inner.children {
                write_node(child, f)?;
            }
            write!(f, "</{}>", inner.tag)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{Attribute, Node};

    #[test]
    fn empty_valued_attributes_are_filtered() {
        let a = Node::new("a", true);
        a.add_attribute(Attribute::new("href", "http://x"));
        assert_eq!(a.to_html(), "<a href=\"http://x\"></a>");
    }

    #[test]
    fn void_elements_render_self_closing() {
        let img = Node::new("img", false);
        img.add_attribute(Attribute::new("src", "pic.png"));
        assert_eq!(img.to_html(), "<img src=\"pic.png\"/>");
    }

    #[test]
    fn children_concatenate_in_order_without_separator() {
        let div = Node::new("div", true);
        let first = Node::new("p", true);
        first.add_text("X");
        let second = Node::new("p", true);
        second.add_text("Y");
        div.add_child(&first);
        div.add_child(&second);
        assert_eq!(div.to_html(), "<div><p>X</p><p>Y</p></div>");
    }

    #[test]
    fn text_leaf_renders_payload_verbatim() {
        let leaf = Node::text("hello");
        assert_eq!(leaf.to_html(), "hello");

        // mutations are no-ops and leave rendering untouched
        leaf.add_attribute(Attribute::new("class", "x"));
        leaf.add_text("more");
        assert_eq!(leaf.to_html(), "hello");
    }

    #[test]
    fn text_content_is_not_escaped() {
        let p = Node::new("p", true);
        p.add_text("a < b & \"c\"");
        assert_eq!(p.to_html(), "<p>a < b & \"c\"</p>");
    }

    #[test]
    fn duplicate_attributes_both_render() {
        let div = Node::new("div", true);
        div.add_attribute(Attribute::new("class", "a"));
        div.add_attribute(Attribute::new("class", "b"));
        assert_eq!(div.to_html(), "<div class=\"a\" class=\"b\"></div>");
    }

    #[test]
    fn attribute_order_is_insertion_order_minus_filtered() {
        let div = Node::new("div", true);
        div.add_attribute(Attribute::new("first", "1"));
        div.add_attribute(Attribute::new("hidden", ""));
        div.add_attribute(Attribute::new("last", "2"));
        assert_eq!(div.to_html(), "<div first=\"1\" last=\"2\"></div>");
    }

    #[test]
    fn empty_tag_renders_bare_brackets() {
        let node = Node::new("", true);
        assert_eq!(node.to_html(), "<></>");
    }

    #[test]
    fn rendering_is_referentially_idempotent() {
        let p = Node::new("p", true);
        p.add_text("stable");
        let first = p.to_html();
        assert_eq!(p.to_html(), first);
        assert_eq!(p.children().len(), 1);
    }
}
