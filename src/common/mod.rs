mod rect;
mod scalar_range;

pub use rect::Rect;
pub use scalar_range::ScalarRange;
