//! Coordinate types shared by the packer and the backends.
//!
//! **Y-axis goes down.** The origin is the top-left corner of the packed block.

/// Unit marker for canvas pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CanvasSpace;

pub type CanvasRect = euclid::Box2D<f32, CanvasSpace>;
pub type CanvasPoint = euclid::Point2D<f32, CanvasSpace>;
pub type CanvasSize = euclid::Size2D<f32, CanvasSpace>;
pub type CanvasVector = euclid::Vector2D<f32, CanvasSpace>;

/// Returns an unplaced rectangle of `size` anchored at the origin.
pub fn rect_at_origin(size: CanvasSize) -> CanvasRect {
    CanvasRect::from_origin_and_size(CanvasPoint::origin(), size)
}

/// Moves `rect` so its top-left corner sits at `(x, y)`, keeping its size.
///
/// The new `min` corner is exactly `(x, y)`, so snapping a rectangle onto
/// another one's edge leaves them touching rather than overlapping.
pub fn offset_to(rect: &mut CanvasRect, x: f32, y: f32) {
    *rect = CanvasRect::from_origin_and_size(CanvasPoint::new(x, y), rect.size());
}
