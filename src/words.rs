use indexmap::IndexMap;

use crate::{
    color::Color,
    geometry::{self, CanvasRect, CanvasSize},
};

/// A single input word and its weight.
#[derive(Clone, Debug, PartialEq)]
pub struct WordEntry {
    pub text: String,
    /// Occurrence count, must be at least 1.
    pub frequency: u32,
    /// Overrides the configured default word color.
    pub color: Option<Color>,
}

/// Insertion-ordered collection of words keyed by their text.
///
/// Packing walks the words in insertion order, so two runs over equal sets
/// produce identical placements. Re-inserting a word replaces its entry but
/// keeps its original position.
#[derive(Clone, Debug, Default)]
pub struct WordSet {
    entries: IndexMap<String, WordEntry, fxhash::FxBuildHasher>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, text: impl Into<String>, frequency: u32) -> Option<WordEntry> {
        let text = text.into();
        self.insert_entry(WordEntry {
            text,
            frequency,
            color: None,
        })
    }

    pub fn insert_colored(
        &mut self,
        text: impl Into<String>,
        frequency: u32,
        color: Color,
    ) -> Option<WordEntry> {
        let text = text.into();
        self.insert_entry(WordEntry {
            text,
            frequency,
            color: Some(color),
        })
    }

    /// Adds `entry`, returning the entry it replaced.
    pub fn insert_entry(&mut self, entry: WordEntry) -> Option<WordEntry> {
        self.entries.insert(entry.text.clone(), entry)
    }

    /// Removes a word while keeping the order of the remaining ones.
    pub fn remove(&mut self, text: &str) -> Option<WordEntry> {
        self.entries.shift_remove(text)
    }

    pub fn get(&self, text: &str) -> Option<&WordEntry> {
        self.entries.get(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }

    /// Largest frequency in the set, `None` when empty.
    pub fn max_frequency(&self) -> Option<u32> {
        self.iter().map(|entry| entry.frequency).max()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for WordSet {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (text, frequency) in iter {
            set.insert(text, frequency);
        }
        set
    }
}

/// A word sized for one layout attempt.
///
/// The rectangle is the only mutable part during packing. Identity is the
/// word's index in the attempt's list, never its rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub frequency: u32,
    pub font_size: f32,
    /// Final draw color with alpha already resolved.
    pub color: Color,
    pub rect: CanvasRect,
}

impl PlacedWord {
    pub fn new(text: String, frequency: u32, font_size: f32, color: Color, size: CanvasSize) -> Self {
        Self {
            text,
            frequency,
            font_size,
            color,
            rect: geometry::rect_at_origin(size),
        }
    }

    /// Puts the word back at the origin with a freshly measured size.
    pub fn reset(&mut self, font_size: f32, size: CanvasSize) {
        self.font_size = font_size;
        self.rect = geometry::rect_at_origin(size);
    }

    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    pub fn height(&self) -> f32 {
        self.rect.height()
    }
}
