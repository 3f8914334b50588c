use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use pk_utils::hash::HashMap;

use crate::ops::PersistKind;
use crate::persistence::{Leaf, PersistError};

// -----------------------------------------------------------------------------
// Node

/// One named slot of a [`Document`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A scalar encoding.
    Leaf(Leaf),
    /// A nested document.
    Child(Document),
}

impl Node {
    /// Returns the side of the kind split this node sits on.
    #[inline]
    pub const fn kind(&self) -> PersistKind {
        match self {
            Node::Leaf(_) => PersistKind::Leaf,
            Node::Child(_) => PersistKind::Composite,
        }
    }
}

// -----------------------------------------------------------------------------
// Document

/// An in-memory tree of named nodes.
///
/// `Document` is the representation half of an archive backend: an ordered
/// collection of named slots, each holding either a [`Leaf`] or a nested
/// `Document`. Backends share it and only differ in how they render the tree
/// as text.
///
/// Names are `Cow<'static, str>` because the two writers differ: a walk
/// stores descriptor names, which are `&'static str`, while parsing a textual
/// document produces owned names.
///
/// # Name addressing
///
/// Slots keep their insertion order for deterministic output, but every
/// lookup goes by name. Two documents holding the same nodes under the same
/// names compare equal even when the slots were inserted in a different
/// order.
///
/// # Examples
///
/// ```
/// use pk_persist::Leaf;
/// use pk_persist::archive::{Document, Node};
///
/// let mut inner = Document::new();
/// inner.store_leaf("width", Leaf::UInt(1920));
///
/// let mut document = Document::new();
/// document.store_leaf("label", Leaf::Str("left".into()));
/// document.store_child("monitor", inner);
///
/// assert_eq!(document.retrieve_leaf("label"), Ok(Leaf::Str("left".into())));
/// assert!(document.retrieve_child("monitor").is_ok());
/// assert!(document.get("width").is_none());
/// ```
#[derive(Default, Clone)]
pub struct Document {
    names: Vec<Cow<'static, str>>,
    nodes: Vec<Node>,
    indices: HashMap<Cow<'static, str>, usize>,
}

impl Document {
    /// Creates an empty `Document`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            names: Vec::new(),
            nodes: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// Creates an empty `Document` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity(capacity),
        }
    }

    /// Stores `node` under `name`.
    ///
    /// If the name already exists, this will overwrite the node and keep the
    /// slot's position.
    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, node: Node) {
        let name: Cow<'static, str> = name.into();
        if let Some(index) = self.indices.get(&name) {
            self.nodes[*index] = node;
        } else {
            self.nodes.push(node);
            self.indices.insert(name.clone(), self.nodes.len() - 1);
            self.names.push(name);
        }
    }

    /// Stores a leaf under `name`. See [`set`](Self::set).
    #[inline]
    pub fn store_leaf(&mut self, name: impl Into<Cow<'static, str>>, value: Leaf) {
        self.set(name, Node::Leaf(value));
    }

    /// Stores a nested document under `name`. See [`set`](Self::set).
    #[inline]
    pub fn store_child(&mut self, name: impl Into<Cow<'static, str>>, child: Document) {
        self.set(name, Node::Child(child));
    }

    /// Retrieves a copy of the leaf stored under `name`.
    ///
    /// # Errors
    ///
    /// - [`PersistError::MissingProperty`] if no slot uses `name`.
    /// - [`PersistError::MismatchedNodeKind`] if the slot holds a nested
    ///   document.
    pub fn retrieve_leaf(&self, name: &'static str) -> Result<Leaf, PersistError> {
        match self.get(name) {
            Some(Node::Leaf(leaf)) => Ok(leaf.clone()),
            Some(node) => Err(PersistError::MismatchedNodeKind {
                name,
                from_kind: node.kind(),
                to_kind: PersistKind::Leaf,
            }),
            None => Err(PersistError::MissingProperty { name }),
        }
    }

    /// Retrieves the nested document stored under `name`.
    ///
    /// # Errors
    ///
    /// - [`PersistError::MissingProperty`] if no slot uses `name`.
    /// - [`PersistError::MismatchedNodeKind`] if the slot holds a leaf.
    pub fn retrieve_child(&self, name: &'static str) -> Result<&Document, PersistError> {
        match self.get(name) {
            Some(Node::Child(child)) => Ok(child),
            Some(node) => Err(PersistError::MismatchedNodeKind {
                name,
                from_kind: node.kind(),
                to_kind: PersistKind::Composite,
            }),
            None => Err(PersistError::MissingProperty { name }),
        }
    }

    /// Gets the node stored under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Node> {
        let index = self.index_of(name)?;
        self.nodes.get(index)
    }

    /// Gets the index of the slot with the given name.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns the name of the slot with index `index`.
    #[inline]
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|name| &**name)
    }

    /// Returns the node of the slot with index `index`.
    #[inline]
    pub fn node_at(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an iterator over the `(name, node)` pairs in insertion order.
    #[inline]
    pub const fn iter(&self) -> DocumentIter<'_> {
        DocumentIter {
            document: self,
            index: 0,
        }
    }
}

impl PartialEq for Document {
    /// Documents compare by name, not by slot position.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, node)| other.get(name) == Some(node))
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// Iterator

/// An iterator over the named slots of a [`Document`].
pub struct DocumentIter<'a> {
    document: &'a Document,
    index: usize,
}

impl<'a> Iterator for DocumentIter<'a> {
    type Item = (&'a str, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.document.name_at(self.index)?;
        let node = self.document.node_at(self.index)?;
        self.index += 1;
        Some((name, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.document.len();
        (size - self.index, Some(size))
    }
}

impl ExactSizeIterator for DocumentIter<'_> {}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a str, &'a Node);
    type IntoIter = DocumentIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::archive::{Document, Node};
    use crate::ops::PersistKind;
    use crate::{Leaf, PersistError};

    #[test]
    fn set_overwrites_and_keeps_the_slot() {
        let mut document = Document::new();
        document.store_leaf("label", Leaf::Str(String::from("old")));
        document.store_leaf("width", Leaf::UInt(640));
        document.store_leaf("label", Leaf::Str(String::from("new")));

        assert_eq!(document.len(), 2);
        assert_eq!(document.name_at(0), Some("label"));
        assert_eq!(
            document.get("label"),
            Some(&Node::Leaf(Leaf::Str(String::from("new"))))
        );
    }

    #[test]
    fn retrieval_reports_name_and_kind() {
        let mut document = Document::new();
        document.store_leaf("width", Leaf::UInt(640));
        document.store_child("monitor", Document::new());

        assert_eq!(
            document.retrieve_leaf("height"),
            Err(PersistError::MissingProperty { name: "height" })
        );
        assert_eq!(
            document.retrieve_leaf("monitor"),
            Err(PersistError::MismatchedNodeKind {
                name: "monitor",
                from_kind: PersistKind::Composite,
                to_kind: PersistKind::Leaf,
            })
        );
        assert_eq!(
            document.retrieve_child("width").map(|_| ()),
            Err(PersistError::MismatchedNodeKind {
                name: "width",
                from_kind: PersistKind::Leaf,
                to_kind: PersistKind::Composite,
            })
        );
    }

    #[test]
    fn equality_reads_names_not_positions() {
        let mut forward = Document::new();
        forward.store_leaf("label", Leaf::Str(String::from("left")));
        forward.store_leaf("width", Leaf::UInt(1920));

        let mut backward = Document::new();
        backward.store_leaf("width", Leaf::UInt(1920));
        backward.store_leaf("label", Leaf::Str(String::from("left")));

        assert_eq!(forward, backward);

        backward.store_leaf("width", Leaf::UInt(640));
        assert_ne!(forward, backward);
    }
}
