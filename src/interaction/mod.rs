//! Pointer interaction: which region the pointer is over and the popup describing it.

mod popup;

pub use popup::{InteractionLayer, Popup};
