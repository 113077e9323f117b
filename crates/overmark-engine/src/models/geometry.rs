use serde::{Deserialize, Serialize};

/// Viewport-relative pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Layering configuration for the overlay rectangles relative to the content
/// they track. The highlight body sits below the content so the text stays
/// crisp; interactive affordances sit above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZIndexes {
    pub above_content: i32,
    pub below_content: i32,
}

impl ZIndexes {
    pub fn new(above_content: i32, below_content: i32) -> Self {
        Self {
            above_content,
            below_content,
        }
    }
}
