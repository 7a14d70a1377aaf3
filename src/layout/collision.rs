use crate::{geometry::CanvasRect, words::PlacedWord};

/// Returns the rectangle of the first word that overlaps `words[index]`.
///
/// The word at `index` itself is skipped by position, never by comparing
/// rectangles: two distinct words may share coordinates while being pushed
/// down. Touching edges are not an overlap, and a rectangle with zero width
/// or height has no interior, so it never overlaps anything. Ties go to the
/// earliest word.
pub fn first_intersection(index: usize, words: &[PlacedWord]) -> Option<CanvasRect> {
    let target = words.get(index)?.rect;
    if target.is_empty() {
        return None;
    }

    words
        .iter()
        .enumerate()
        .filter(|(other, _)| *other != index)
        .map(|(_, word)| word.rect)
        .find(|rect| !rect.is_empty() && target.intersects(rect))
}
