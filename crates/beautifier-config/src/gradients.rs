/// User gradient library and its on-disk store.
///
/// The library is an ordered, most-recent-first list of CSS background
/// expressions. It is stored as a JSON array under the fixed record name
/// `custom_gradients` inside the data directory.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Maximum number of user gradients kept in the library.
pub const MAX_CUSTOM_GRADIENTS: usize = 12;

/// Record name of the persisted library.
pub const GRADIENTS_KEY: &str = "custom_gradients";

/// Resolves the data directory path.
///
/// Resolution order:
/// 1. `BEAUTIFIER_DATA_DIR` environment variable
/// 2. `.data/` directory next to the executable
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BEAUTIFIER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let exe = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
    exe.parent().unwrap_or(Path::new(".")).join(".data")
}

/// Ordered list of user-created backgrounds, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradientLibrary {
    entries: Vec<String>,
}

impl GradientLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a library from stored entries, keeping at most the first 12.
    pub fn from_entries(mut entries: Vec<String>) -> Self {
        entries.truncate(MAX_CUSTOM_GRADIENTS);
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends `css` and evicts the oldest entry when over capacity.
    pub fn add(&mut self, css: impl Into<String>) {
        self.entries.insert(0, css.into());
        self.entries.truncate(MAX_CUSTOM_GRADIENTS);
    }

    /// Removes the entry at `index`. Returns the removed value, or `None`
    /// when `index` is out of range.
    pub fn delete(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }
}

/// File-backed persistence for the [`GradientLibrary`].
#[derive(Debug, Clone)]
pub struct GradientStore {
    path: PathBuf,
}

impl GradientStore {
    /// Store rooted in `data_dir` (file `custom_gradients.json`).
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{GRADIENTS_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the library. Missing or malformed data yields an empty library.
    pub fn load(&self) -> GradientLibrary {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return GradientLibrary::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}", self.path.display());
                return GradientLibrary::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&contents) {
            Ok(entries) => GradientLibrary::from_entries(entries),
            Err(e) => {
                tracing::error!("Failed to parse saved gradients: {e}");
                GradientLibrary::new()
            }
        }
    }

    /// Writes the library as a JSON array, creating the data dir if needed.
    pub fn save(&self, library: &GradientLibrary) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }
        let json =
            serde_json::to_string(library.entries()).context("Failed to serialize gradients")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
