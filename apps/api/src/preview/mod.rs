//! Live preview: fit-to-viewport scaling and the debounced re-render
//! pipeline between data edits and the rendered document.

pub mod debounce;
pub mod scaler;
pub mod session;

pub use debounce::Debouncer;
pub use scaler::PreviewLayout;
pub use session::{PreviewSession, RenderedPreview};
