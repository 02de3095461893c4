mod debounce;
mod engine;

pub use debounce::Debouncer;
pub use engine::{Layout, LayoutEngine, Padding, Preset, TitleBlock, Viewport};
