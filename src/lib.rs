//! # Kumo
//!
//! Word cloud layout for Rust.
//!
//! ## Overview
//!
//! `Kumo` turns a set of weighted words into a non-overlapping placement on a
//! bounded canvas. Each word's font size follows a logarithmic scale of its
//! frequency, words are packed row by row with overlaps pushed straight down,
//! and the whole set is shrunk step by step until it fits the canvas.
//!
//! Text measurement and drawing are delegated to a [`backend::RenderBackend`].
//! [`CpuBackend`] rasterizes with `fontdue` into an RGBA image.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kumo::{CpuBackend, WordCloudConfig, WordSet};
//!
//! let mut words = WordSet::new();
//! words.insert("rust", 12);
//! words.insert("cloud", 5);
//! words.insert("word", 1);
//!
//! let config = WordCloudConfig::with_canvas(480, 640);
//! let mut backend = CpuBackend::with_system_fonts()?;
//! let image = kumo::generate(&words, &config, &mut backend)?;
//! println!("{}x{}", image.width, image.height);
//! # Ok::<(), kumo::WordCloudError>(())
//! ```
//!
//! ## Features
//!
//! *   **Deterministic**: words are packed in insertion order, so equal input gives equal output.
//! *   **Shrink to fit**: the largest font size that fits the canvas is searched for automatically.
//! *   **Auto opacity**: rarer words can optionally be drawn more transparent.
//! *   **Pluggable backend**: measurement and drawing sit behind two small traits.

pub mod backend;
pub mod cloud;
pub mod color;
pub mod config;
pub mod error;
pub mod font_storage;
pub mod geometry;
pub mod layout;
pub mod words;

// common re-exports
pub use backend::{CpuBackend, RenderBackend, RgbaImage, TextMeasurer};
pub use cloud::{WordCloud, generate};
pub use color::Color;
pub use config::WordCloudConfig;
pub use error::{Result, WordCloudError};
pub use font_storage::FontStorage;
pub use layout::WordCloudLayout;
pub use words::{PlacedWord, WordEntry, WordSet};

// re-export dependencies
pub use euclid;
pub use fontdb;
pub use fontdue;
pub use palette;
pub use parking_lot;
