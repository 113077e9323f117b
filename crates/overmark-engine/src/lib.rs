pub mod models;
pub mod overlay;

// Re-export key types for easier usage
pub use models::{callback::*, geometry::*, highlight::*};
pub use overlay::{arena::*, controller::*, frame::*, pointer::*, selection::*};
