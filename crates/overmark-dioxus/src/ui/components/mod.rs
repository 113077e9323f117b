pub mod document_view;
pub mod highlight_layer;
pub mod overlay;
pub mod tooltip;

pub use document_view::DocumentView;
pub use highlight_layer::HighlightLayer;
pub use overlay::HighlightOverlay;
pub use tooltip::HighlightTooltip;
