use std::{collections::HashMap, path::PathBuf, sync::Arc};

/// Font faces known to the CPU backend.
///
/// Face discovery goes through `fontdb`; the parsed `fontdue` font for a face
/// is created on first use and kept for later measurements and draws.
pub struct FontStorage {
    font_db: fontdb::Database,
    /// Lazily parsed faces. Not every face in `font_db` is loaded here.
    loaded_font: HashMap<fontdb::ID, Arc<fontdue::Font>, fxhash::FxBuildHasher>,
}

impl Default for FontStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FontStorage {
    /// Creates a new empty font storage.
    pub fn new() -> Self {
        Self {
            font_db: fontdb::Database::new(),
            loaded_font: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
        }
    }
}

/// Loading faces.
impl FontStorage {
    /// Loads a font from binary data.
    pub fn load_font_binary(&mut self, data: impl Into<Vec<u8>>) {
        self.font_db.load_font_data(data.into());
    }

    /// Loads a font from a file path.
    pub fn load_font_file(&mut self, path: PathBuf) -> Result<(), std::io::Error> {
        self.font_db.load_font_file(path)
    }

    /// Loads the system fonts.
    pub fn load_system_fonts(&mut self) {
        self.font_db.load_system_fonts();
    }

    pub fn is_empty(&self) -> bool {
        self.font_db.is_empty()
    }

    pub fn len(&self) -> usize {
        self.font_db.len()
    }
}

/// Resolving faces.
impl FontStorage {
    /// Picks a regular sans-serif face, or any face when none matches.
    pub fn default_face(&self) -> Option<fontdb::ID> {
        const FAMILIES: &[fontdb::Family<'_>] = &[fontdb::Family::SansSerif];
        let query = fontdb::Query {
            families: FAMILIES,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        self.font_db
            .query(&query)
            .or_else(|| self.font_db.faces().next().map(|face| face.id))
    }

    /// Returns the parsed font for `id`, parsing it on first use.
    pub fn font(&mut self, id: fontdb::ID) -> Option<Arc<fontdue::Font>> {
        use std::collections::hash_map::Entry;

        match self.loaded_font.entry(id) {
            Entry::Occupied(entry) => Some(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let font_result = self.font_db.with_face_data(id, |data, index| {
                    fontdue::Font::from_bytes(
                        data,
                        fontdue::FontSettings {
                            collection_index: index,
                            scale: 40.0,
                            load_substitutions: true,
                        },
                    )
                })?;

                match font_result {
                    Ok(font) => Some(Arc::clone(entry.insert(Arc::new(font)))),
                    Err(e) => {
                        log::error!("Failed to load font (id: {:?}): {}", id, e);
                        None
                    }
                }
            }
        }
    }
}
