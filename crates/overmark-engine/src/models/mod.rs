pub mod callback;
pub mod geometry;
pub mod highlight;

pub use callback::Callback;
pub use geometry::{ClientPoint, ZIndexes};
pub use highlight::{ContentPoint, Highlight, NodeId, TextRange};
