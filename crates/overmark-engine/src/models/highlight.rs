use serde::{Deserialize, Serialize};

/// Opaque identifier of a content node in the embedding viewer's document.
///
/// The engine never interprets node ids beyond equality and ordering; the
/// viewer decides what a "node" is (a word span, a text run, a DOM node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// A position inside the rendered content: a node plus a character offset
/// within that node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPoint {
    pub node: NodeId,
    pub offset: usize,
}

impl ContentPoint {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// The content range a highlight covers, from `start` to `end` in document
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: ContentPoint,
    pub end: ContentPoint,
}

impl TextRange {
    pub fn new(start: ContentPoint, end: ContentPoint) -> Self {
        Self { start, end }
    }
}

/// An immutable record describing a marked content range.
///
/// Highlights are owned by the embedding application, which stores them in a
/// keyed set and hands the whole set to the overlay controller on every
/// render. The engine passes the range through to the overlay renderers
/// without interpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    range: TextRange,
}

impl Highlight {
    pub fn new(range: TextRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> &TextRange {
        &self.range
    }
}
