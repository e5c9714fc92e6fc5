use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// An opaque identifier for a constructed element.
///
/// Assigned once at construction and never reassigned. Identifiers are
/// unique per process; no ordering guarantee is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AttrId(u64);

impl AttrId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A name/value pair attached to an element.
///
/// The name is fixed at construction; the value stays mutable. An
/// attribute only appears in rendered output while its value is
/// non-empty. Equality is identity equality: a clone compares equal to
/// its original, two independently constructed attributes never do,
/// even with identical content.
#[derive(Debug, Clone)]
pub struct Attribute {
    id: AttrId,
    name: String,
    value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: AttrId::next(),
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether this attribute appears in rendered output.
    pub fn is_renderable(&self) -> bool {
        !self.value.is_empty()
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Attribute {}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

/// The per-variant shape of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An ordinary element rendered as an open/close tag pair.
    Container,
    /// A leaf element rendered self-closing; child operations are no-ops.
    Void,
    /// A raw text payload rendered verbatim, with no tag, attributes or
    /// children; every mutation operation is a no-op.
    Text(String),
}

pub(crate) struct Inner {
    pub(crate) id: NodeId,
    pub(crate) tag: String,
    pub(crate) kind: NodeKind,
    pub(crate) attrs: Vec<Attribute>,
    pub(crate) children: Vec<Node>,
}

/// A handle to one element in a markup tree.
///
/// Cloning is cheap and yields another handle to the same element.
/// Equality between two handles holds iff they refer to the same
/// constructed element (identity, never structure).
///
/// All mutation follows a permissive contract: operations that cannot
/// apply are silent no-ops and nothing here ever fails. In particular,
/// adding children to a [`NodeKind::Void`] or [`NodeKind::Text`] node
/// does nothing, and the children simply never show up in output —
/// callers must not rely on mutation failures being observable.
#[derive(Clone)]
pub struct Node {
    pub(crate) inner: Rc<RefCell<Inner>>,
}

impl Node {
    /// Builds a new element with the given tag name and capability.
    ///
    /// Every element starts with a distinguished `id` attribute whose
    /// value is empty (and therefore unrendered) until set.
    pub fn new(tag: impl Into<String>, can_have_children: bool) -> Self {
        let kind = if can_have_children {
            NodeKind::Container
        } else {
            NodeKind::Void
        };
        Self {
            inner: Rc::new(RefCell::new(Inner {
                id: NodeId::next(),
                tag: tag.into(),
                kind,
                attrs: vec![Attribute::new("id", "")],
                children: Vec::new(),
            })),
        }
    }

    /// Builds a raw text leaf from the given payload.
    ///
    /// Text leaves render as their payload alone, with no escaping, and
    /// ignore every mutation operation.
    pub fn text(payload: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                id: NodeId::next(),
                tag: String::new(),
                kind: NodeKind::Text(payload.into()),
                attrs: Vec::new(),
                children: Vec::new(),
            })),
        }
    }

    pub fn node_id(&self) -> NodeId {
        self.inner.borrow().id
    }

    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    pub fn kind(&self) -> NodeKind {
        self.inner.borrow().kind.clone()
    }

    pub fn can_have_children(&self) -> bool {
        matches!(self.inner.borrow().kind, NodeKind::Container)
    }

    pub fn is_text(&self) -> bool {
        matches!(self.inner.borrow().kind, NodeKind::Text(_))
    }

    /// The raw payload if this is a text leaf.
    pub fn as_text(&self) -> Option<String> {
        match &self.inner.borrow().kind {
            NodeKind::Text(payload) => Some(payload.clone()),
            _ => None,
        }
    }

    /// Snapshot of the current attribute collection, in insertion order.
    pub fn attributes(&self) -> Vec<Attribute> {
        self.inner.borrow().attrs.clone()
    }

    /// Snapshot of the current child handles, in insertion order.
    pub fn children(&self) -> Vec<Node> {
        self.inner.borrow().children.clone()
    }

    pub fn contains_child(&self, node: &Node) -> bool {
        position_of(&self.inner.borrow().children, node).is_some()
    }

    /// Appends an attribute. Duplicate names are legal; every duplicate
    /// with a non-empty value renders. No-op on text leaves.
    pub fn add_attribute(&self, attr: Attribute) {
        if self.is_text() {
            return;
        }
        self.inner.borrow_mut().attrs.push(attr);
    }

    /// Removes the first attribute matching by identity (not by name).
    /// No-op if absent or on text leaves.
    pub fn remove_attribute(&self, attr: &Attribute) {
        if self.is_text() {
            return;
        }
        let mut inner = self.inner.borrow_mut();
        if let Some(pos) = inner.attrs.iter().position(|a| a == attr) {
            inner.attrs.remove(pos);
        }
    }

    /// The value of the first attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .attrs
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.value().to_string())
    }

    /// Sets the value of the first attribute with the given name,
    /// appending a fresh attribute when none exists. No-op on text
    /// leaves.
    pub fn set_attribute(&self, name: &str, value: impl Into<String>) {
        if self.is_text() {
            return;
        }
        let mut inner = self.inner.borrow_mut();
        match inner.attrs.iter_mut().find(|a| a.name() == name) {
            Some(attr) => attr.set_value(value),
            None => inner.attrs.push(Attribute::new(name, value)),
        }
    }

    /// The value of the distinguished `id` attribute.
    pub fn id(&self) -> String {
        self.attribute("id").unwrap_or_default()
    }

    pub fn set_id(&self, value: impl Into<String>) {
        self.set_attribute("id", value);
    }

    /// Appends `child` to this element's children.
    ///
    /// No-op unless this element can have children. Re-parenting guard:
    /// if `child` currently lists this element among its own children,
    /// that reverse edge is removed first, so the single call cannot
    /// create a direct mutual parent/child cycle between the two nodes.
    ///
    /// Known limitation, kept on purpose: the guard only covers the
    /// direct 2-cycle between the two nodes of this call. It does not
    /// walk ancestors, so a node can still be attached as a deeper
    /// descendant of itself.
    pub fn add_child(&self, child: &Node) {
        if !self.can_have_children() {
            return;
        }
        if Rc::ptr_eq(&self.inner, &child.inner) {
            // Self-append: single borrow keeps the permissive contract
            // panic-free. The resulting self-cycle is not prevented.
            let mut inner = self.inner.borrow_mut();
            if let Some(pos) = position_of(&inner.children, child) {
                inner.children.remove(pos);
            }
            inner.children.push(child.clone());
            return;
        }
        {
            let mut child_inner = child.inner.borrow_mut();
            if let Some(pos) = position_of(&child_inner.children, self) {
                child_inner.children.remove(pos);
                log::debug!(
                    "re-parenting guard: removed reverse edge <{}> -> <{}>",
                    child_inner.tag,
                    self.tag(),
                );
            }
        }
        self.inner.borrow_mut().children.push(child.clone());
    }

    /// Appends a fresh text leaf built from `text`. No-op unless this
    /// element can have children.
    pub fn add_text(&self, text: impl Into<String>) {
        if !self.can_have_children() {
            return;
        }
        self.inner.borrow_mut().children.push(Node::text(text));
    }

    /// Appends every node in order at the end of the child collection.
    ///
    /// This is a plain concatenation: unlike [`Node::add_child`], the
    /// re-parenting guard is not applied per element. No-op unless this
    /// element can have children.
    pub fn add_children<I>(&self, children: I)
    where
        I: IntoIterator<Item = Node>,
    {
        if !self.can_have_children() {
            return;
        }
        self.inner.borrow_mut().children.extend(children);
    }

    /// Removes the first child matching by identity. No-op if absent or
    /// when this element cannot have children.
    pub fn remove_child(&self, child: &Node) {
        if !self.can_have_children() {
            return;
        }
        let mut inner = self.inner.borrow_mut();
        if let Some(pos) = position_of(&inner.children, child) {
            inner.children.remove(pos);
        }
    }
}

/// Identity search without touching node state, so it stays valid while
/// a cell in the same tree is mutably borrowed.
fn position_of(children: &[Node], target: &Node) -> Option<usize> {
    children
        .iter()
        .position(|c| Rc::ptr_eq(&c.inner, &target.inner))
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Node")
            .field("id", &inner.id)
            .field("tag", &inner.tag)
            .field("kind", &inner.kind)
            .field("attrs", &inner.attrs)
            .field("children", &inner.children.len())
            .finish()
    }
}
