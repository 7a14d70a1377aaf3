use crate::{geometry, layout::collision::first_intersection, words::PlacedWord};

/// Bounding extent of a packed word list, measured from the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PackedExtent {
    /// Largest right edge of any placed word.
    pub width: f32,
    /// Largest bottom edge of any placed word, the first one included.
    pub height: f32,
}

impl PackedExtent {
    fn include(&mut self, word: &PlacedWord) {
        self.width = self.width.max(word.rect.max.x);
        self.height = self.height.max(word.rect.max.y);
    }

    /// Whether the extent fits inside a `width` x `height` canvas.
    pub fn fits(&self, width: f32, height: f32) -> bool {
        self.width <= width && self.height <= height
    }
}

/// Places every word in `words` without overlap and returns the packed extent.
///
/// Words flow left to right in list order. A word that would cross
/// `canvas_width` wraps to a new row below everything placed so far; any
/// other word starts at the top of its column and is pushed straight down
/// past each word it overlaps. Rectangles must be reset to the origin before
/// calling. An empty list packs to a zero extent.
pub fn pack(
    words: &mut [PlacedWord],
    canvas_width: f32,
    padding_x: f32,
    padding_y: f32,
) -> PackedExtent {
    let mut extent = PackedExtent::default();
    let Some(first) = words.first_mut() else {
        return extent;
    };

    geometry::offset_to(&mut first.rect, 0.0, 0.0);
    let mut cursor_x = first.width();
    extent.include(first);

    for index in 1..words.len() {
        let width = words[index].width();
        let rect = &mut words[index].rect;

        if cursor_x + width + padding_x > canvas_width {
            geometry::offset_to(rect, 0.0, extent.height + padding_y);
            cursor_x = width;
        } else {
            geometry::offset_to(rect, cursor_x + padding_x, 0.0);
            cursor_x += width + padding_x;
        }

        push_down(index, words);

        let rect = &mut words[index].rect;
        let (left, top) = (rect.min.x, rect.min.y + padding_y);
        geometry::offset_to(rect, left, top);
        // the padding nudge may land on a word below
        push_down(index, words);

        extent.include(&words[index]);
    }

    extent
}

/// Moves `words[index]` down until it overlaps no word placed before it.
///
/// Words after `index` still hold their reset position and are not obstacles.
/// Each step snaps the word's top onto the obstacle's bottom edge, so the top
/// strictly increases and the loop runs at most once per earlier word.
fn push_down(index: usize, words: &mut [PlacedWord]) {
    while let Some(obstacle) = first_intersection(index, &words[..=index]) {
        let rect = &mut words[index].rect;
        let shift = (obstacle.max.y - rect.min.y).abs();
        // never stop short of the obstacle's edge on rounding
        let top = (rect.min.y + shift).max(obstacle.max.y);
        let left = rect.min.x;
        geometry::offset_to(rect, left, top);
    }
}
