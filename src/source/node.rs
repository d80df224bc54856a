//! Node tree stored as an index-based arena.
//!
//! Nodes are stored in pre-order: the root is index 0 and every parent
//! precedes its descendants. Children are kept as index lists in source order.

use super::paint::{Effect, Paint, TextStyle};

/// Index of a node within a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in pre-order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The kind of a node. Only text nodes are treated specially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Other(String),
}

impl NodeKind {
    /// Parse a node `type` string.
    pub fn parse(s: &str) -> Self {
        match s {
            "DOCUMENT" => NodeKind::Document,
            "CANVAS" => NodeKind::Canvas,
            "FRAME" => NodeKind::Frame,
            "GROUP" => NodeKind::Group,
            "SECTION" => NodeKind::Section,
            "COMPONENT" => NodeKind::Component,
            "COMPONENT_SET" => NodeKind::ComponentSet,
            "INSTANCE" => NodeKind::Instance,
            "TEXT" => NodeKind::Text,
            "RECTANGLE" => NodeKind::Rectangle,
            "ELLIPSE" => NodeKind::Ellipse,
            "VECTOR" => NodeKind::Vector,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

/// Spacing fields that produce spacing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingField {
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    PaddingBottom,
    ItemSpacing,
    CounterAxisSpacing,
}

impl SpacingField {
    /// All fields in emission order.
    pub const ALL: [SpacingField; 6] = [
        SpacingField::PaddingLeft,
        SpacingField::PaddingRight,
        SpacingField::PaddingTop,
        SpacingField::PaddingBottom,
        SpacingField::ItemSpacing,
        SpacingField::CounterAxisSpacing,
    ];

    /// The source document key.
    pub fn key(self) -> &'static str {
        match self {
            SpacingField::PaddingLeft => "paddingLeft",
            SpacingField::PaddingRight => "paddingRight",
            SpacingField::PaddingTop => "paddingTop",
            SpacingField::PaddingBottom => "paddingBottom",
            SpacingField::ItemSpacing => "itemSpacing",
            SpacingField::CounterAxisSpacing => "counterAxisSpacing",
        }
    }

    /// Whether this field is a gap between children rather than padding.
    pub fn is_gap(self) -> bool {
        matches!(
            self,
            SpacingField::ItemSpacing | SpacingField::CounterAxisSpacing
        )
    }
}

/// A single design node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub name: Option<String>,
    pub kind: NodeKind,
    pub fills: Vec<Paint>,
    pub effects: Vec<Effect>,
    /// Style block, read for text nodes only.
    pub style: Option<TextStyle>,
    pub corner_radius: Option<f64>,
    /// Spacing fields present on the node, in [`SpacingField::ALL`] order.
    pub spacing: Vec<(SpacingField, f64)>,
    pub(crate) depth: usize,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// Create an empty node.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            fills: Vec::new(),
            effects: Vec::new(),
            style: None,
            corner_radius: None,
            spacing: Vec::new(),
            depth: 0,
            children: Vec::new(),
        }
    }

    /// Text style, if this is a text node carrying one.
    pub fn text_style(&self) -> Option<&TextStyle> {
        match self.kind {
            NodeKind::Text => self.style.as_ref(),
            _ => None,
        }
    }

    /// Depth below the root (root is 0).
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// A node tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent` (or as the root when `parent` is `None`).
    ///
    /// Nodes must be added in pre-order, so a parent's whole subtree is
    /// added before its next sibling. Only one root is allowed.
    pub fn push(&mut self, parent: Option<NodeId>, mut node: Node) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        match parent {
            Some(parent) => {
                let depth = self.nodes.get(parent.0)?.depth + 1;
                node.depth = depth;
                self.nodes[parent.0].children.push(id);
            }
            None if self.nodes.is_empty() => node.depth = 0,
            None => return None,
        }
        node.children.clear();
        self.nodes.push(node);
        Some(id)
    }

    /// The root node, if the document is not empty.
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    /// Get a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Children of a node in source order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_tracks_depth_and_children() {
        let mut doc = Document::new();
        let root = doc.push(None, Node::new("0:0", NodeKind::Document)).unwrap();
        let page = doc.push(Some(root), Node::new("0:1", NodeKind::Canvas)).unwrap();
        let frame = doc.push(Some(page), Node::new("1:1", NodeKind::Frame)).unwrap();
        let sibling = doc.push(Some(root), Node::new("0:2", NodeKind::Canvas)).unwrap();

        assert_eq!(doc.len(), 4);
        assert_eq!(doc.children(root), &[page, sibling]);
        assert_eq!(doc.get(frame).unwrap().depth(), 2);
        assert_eq!(doc.get(sibling).unwrap().depth(), 1);
    }

    #[test]
    fn test_second_root_is_rejected() {
        let mut doc = Document::new();
        doc.push(None, Node::new("a", NodeKind::Frame)).unwrap();
        assert!(doc.push(None, Node::new("b", NodeKind::Frame)).is_none());
    }

    #[test]
    fn test_text_style_only_on_text_nodes() {
        let mut node = Node::new("1", NodeKind::Frame);
        node.style = Some(Default::default());
        assert!(node.text_style().is_none());

        node.kind = NodeKind::Text;
        assert!(node.text_style().is_some());
    }

    #[test]
    fn test_node_kind_parse() {
        assert_eq!(NodeKind::parse("TEXT"), NodeKind::Text);
        assert_eq!(
            NodeKind::parse("STICKY"),
            NodeKind::Other("STICKY".to_string())
        );
    }
}
