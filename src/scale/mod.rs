//! Value-to-visual mappings: the quantized color scale and the linear axis scale.

mod color;
mod linear;
mod quantize;

pub use color::{Palette, Rgb};
pub use linear::LinearScale;
pub use quantize::{ColorBucket, ColorScale};
