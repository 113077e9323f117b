//! Word-grid layout for the viewed content.
//!
//! The viewer renders the content as individually positioned word spans on a
//! fixed monospace grid, so highlight rectangles computed from the same grid
//! line up with the text exactly without measuring the live DOM.

use overmark_engine::{ContentPoint, NodeId, TextRange};

/// Horizontal advance per character, in px.
/// Keep in sync with the monospace font sizing in assets/overmark.css.
pub const CHAR_ADVANCE: f64 = 8.4;

/// Line height, in px. Keep in sync with assets/overmark.css.
pub const LINE_HEIGHT: f64 = 24.0;

/// Wrap width, in characters.
pub const LINE_CHARS: usize = 72;

/// Where the content surface sits inside the viewport.
/// Keep in sync with the .overmark-surface rule in assets/overmark.css.
pub const SURFACE_ORIGIN_X: f64 = 16.0;
pub const SURFACE_ORIGIN_Y: f64 = 64.0;

/// Element id of the positioning anchor all overlay coordinates are relative
/// to.
pub const SURFACE_ID: &str = "overmark-surface";

/// One laid-out word of the content.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub id: NodeId,
    pub text: String,
    /// Surface-relative position of the first character, in px.
    pub x: f64,
    pub y: f64,
}

impl Word {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An axis-aligned rectangle in surface-relative px coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The laid-out content: a flat list of words with stable ids.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentModel {
    words: Vec<Word>,
}

impl DocumentModel {
    /// Lay the text out as greedily wrapped words. Word ids are their index
    /// in document order, which is what the highlight ranges refer to.
    pub fn from_text(text: &str) -> Self {
        let mut words = Vec::new();
        let mut line = 0usize;
        let mut col = 0usize;

        for raw in text.split_whitespace() {
            let len = raw.chars().count();
            if col > 0 && col + len > LINE_CHARS {
                line += 1;
                col = 0;
            }
            words.push(Word {
                id: NodeId(words.len()),
                text: raw.to_string(),
                x: col as f64 * CHAR_ADVANCE,
                y: line as f64 * LINE_HEIGHT,
            });
            col += len + 1;
        }

        Self { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn word(&self, id: NodeId) -> Option<&Word> {
        self.words.get(id.0)
    }

    /// Surface-relative rectangles covering the range, merged per line so a
    /// multi-word span reads as one continuous mark.
    pub fn range_rects(&self, range: &TextRange) -> Vec<Rect> {
        let mut rects: Vec<Rect> = Vec::new();
        let first = range.start.node.0;
        let last = range.end.node.0;

        for index in first..=last {
            let Some(word) = self.words.get(index) else {
                break;
            };
            let from_char = if index == first {
                range.start.offset.min(word.char_len())
            } else {
                0
            };
            let to_char = if index == last {
                range.end.offset.min(word.char_len())
            } else {
                word.char_len()
            };
            if to_char <= from_char {
                continue;
            }

            let x0 = word.x + from_char as f64 * CHAR_ADVANCE;
            let x1 = word.x + to_char as f64 * CHAR_ADVANCE;

            match rects.last_mut() {
                // Extend across the inter-word gap on the same line.
                Some(rect) if rect.y == word.y => rect.width = x1 - rect.x,
                _ => rects.push(Rect {
                    x: x0,
                    y: word.y,
                    width: x1 - x0,
                    height: LINE_HEIGHT,
                }),
            }
        }

        rects
    }

    /// Surface-relative position of a content point, for anchoring the
    /// confirmation tooltip.
    pub fn point_position(&self, point: &ContentPoint) -> Option<(f64, f64)> {
        let word = self.word(point.node)?;
        let offset = point.offset.min(word.char_len());
        Some((word.x + offset as f64 * CHAR_ADVANCE, word.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn words_lay_out_left_to_right_with_single_spaces() {
        let doc = DocumentModel::from_text("one two  three");

        let words = doc.words();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].x, 0.0);
        assert_eq!(words[1].x, 4.0 * CHAR_ADVANCE);
        assert_eq!(words[2].x, 8.0 * CHAR_ADVANCE);
        assert!(words.iter().all(|w| w.y == 0.0));
    }

    #[test]
    fn long_lines_wrap_at_the_configured_width() {
        let word = "a".repeat(30);
        let text = format!("{word} {word} {word}");
        let doc = DocumentModel::from_text(&text);

        assert_eq!(doc.words()[0].y, 0.0);
        assert_eq!(doc.words()[1].y, 0.0);
        // 31 + 31 + 30 exceeds the 72-character width.
        assert_eq!(doc.words()[2].y, LINE_HEIGHT);
        assert_eq!(doc.words()[2].x, 0.0);
    }

    #[test]
    fn single_line_range_merges_into_one_rect() {
        let doc = DocumentModel::from_text("alpha beta gamma");
        let range = TextRange::new(
            ContentPoint::new(NodeId(0), 0),
            ContentPoint::new(NodeId(1), 4),
        );

        let rects = doc.range_rects(&range);

        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].x, 0.0);
        assert_eq!(rects[0].y, 0.0);
        // "alpha beta" is 10 characters wide.
        assert_close(rects[0].width, 10.0 * CHAR_ADVANCE);
        assert_eq!(rects[0].height, LINE_HEIGHT);
    }

    #[test]
    fn wrapped_range_yields_one_rect_per_line() {
        let word = "a".repeat(30);
        let text = format!("{word} {word} {word}");
        let doc = DocumentModel::from_text(&text);
        let range = TextRange::new(
            ContentPoint::new(NodeId(0), 0),
            ContentPoint::new(NodeId(2), 30),
        );

        let rects = doc.range_rects(&range);

        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].y, 0.0);
        assert_eq!(rects[1].y, LINE_HEIGHT);
    }

    #[test]
    fn start_offset_trims_the_first_word() {
        let doc = DocumentModel::from_text("alpha beta");
        let range = TextRange::new(
            ContentPoint::new(NodeId(0), 2),
            ContentPoint::new(NodeId(0), 5),
        );

        let rects = doc.range_rects(&range);

        assert_eq!(rects.len(), 1);
        assert_close(rects[0].x, 2.0 * CHAR_ADVANCE);
        assert_close(rects[0].width, 3.0 * CHAR_ADVANCE);
    }

    #[test]
    fn out_of_bounds_nodes_produce_no_rects() {
        let doc = DocumentModel::from_text("alpha");
        let range = TextRange::new(
            ContentPoint::new(NodeId(7), 0),
            ContentPoint::new(NodeId(9), 3),
        );

        assert_eq!(doc.range_rects(&range), Vec::new());
    }

    #[test]
    fn point_position_lands_inside_the_word() {
        let doc = DocumentModel::from_text("alpha beta");

        let (x, y) = doc
            .point_position(&ContentPoint::new(NodeId(1), 4))
            .expect("word 1 exists");

        assert_close(x, 10.0 * CHAR_ADVANCE);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn point_position_for_a_missing_node_is_none() {
        let doc = DocumentModel::from_text("alpha");

        assert_eq!(doc.point_position(&ContentPoint::new(NodeId(3), 0)), None);
    }
}
