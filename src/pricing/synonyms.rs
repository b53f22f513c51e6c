use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::utils::error::{AppError, Result};

/// Lookup outcome for a free-text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynonymMatch {
    /// The label has no entry at all.
    Unmapped,
    /// The label maps to a canonical price-table product name.
    Canonical(String),
    /// The label is explicitly marked too generic to price.
    TooGeneric,
}

/// Normalizes vision-service vocabulary to canonical price-table product
/// names. Entries are tri-state: unmapped, mapped to a name, or explicitly
/// mapped to nothing ("too generic").
#[derive(Debug, Clone, Default)]
pub struct SynonymMap {
    entries: HashMap<String, Option<String>>,
}

impl SynonymMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in vocabulary for the label space the detection providers
    /// actually emit.
    pub fn with_defaults() -> Self {
        let mut map = Self::new();

        map.insert("tomato", "Tomatoes");
        map.insert("catfish", "Catfish");
        map.insert("fish", "Catfish");
        map.insert("plantain", "Plantain");
        map.insert("banana", "Plantain");
        map.insert("yam", "Yam");
        map.insert("tuber", "Yam");
        map.insert("pepper", "Bell Peppers");
        map.insert("capsicum", "Bell Peppers");
        map.insert("bell pepper", "Bell Peppers");
        map.insert("cocoa", "Cocoa");
        map.insert("cocoa bean", "Cocoa");

        // Labels the vision service produces that are too generic to price.
        map.insert_too_generic("food");
        map.insert_too_generic("fruit");
        map.insert_too_generic("vegetable");
        map.insert_too_generic("produce");
        map.insert_too_generic("plant");
        map.insert_too_generic("ingredient");

        map
    }

    /// Extend the map from a two-column CSV (`label,canonical`); an empty
    /// canonical column marks the label too generic.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AppError::NotFound {
            resource: format!("synonym file '{}': {}", path.display(), e),
        })?;
        self.load_from_reader(file)
    }

    pub fn load_from_reader(&mut self, reader: impl Read) -> Result<()> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        for record in csv_reader.records() {
            let record = record?;
            let Some(label) = record.get(0).map(str::trim).filter(|s| !s.is_empty()) else {
                continue;
            };
            match record.get(1).map(str::trim).filter(|s| !s.is_empty()) {
                Some(canonical) => self.insert(label, canonical),
                None => self.insert_too_generic(label),
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, label: &str, canonical: &str) {
        self.entries
            .insert(label.trim().to_lowercase(), Some(canonical.to_string()));
    }

    pub fn insert_too_generic(&mut self, label: &str) {
        self.entries.insert(label.trim().to_lowercase(), None);
    }

    pub fn resolve(&self, normalized_label: &str) -> SynonymMatch {
        match self.entries.get(normalized_label) {
            None => SynonymMatch::Unmapped,
            Some(Some(canonical)) => SynonymMatch::Canonical(canonical.clone()),
            Some(None) => SynonymMatch::TooGeneric,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
