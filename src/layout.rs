/// Overlap detection between placed words.
pub mod collision;
/// Shrink-to-fit search over trial font sizes.
pub mod fit;
/// Row-flow packing with vertical push-down.
pub mod pack;
/// Frequency to font size and alpha mapping.
pub mod size;

pub use collision::first_intersection;
pub use fit::{WordCloudLayout, fit};
pub use pack::{PackedExtent, pack};
