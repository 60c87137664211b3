//! File reading utilities

use anyhow::{Context, Result};
use haikurs_core::ArticleMeta;
use std::fs;
use std::path::{Path, PathBuf};

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Sidecar metadata path: `story.txt` -> `story.txt.meta.json`
    pub fn meta_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".meta.json");
        PathBuf::from(name)
    }

    /// Article metadata from the sidecar file, or empty metadata when absent
    pub fn read_meta(path: &Path) -> Result<ArticleMeta> {
        let meta_path = Self::meta_path(path);
        if !meta_path.is_file() {
            return Ok(ArticleMeta::default());
        }

        let content = Self::read_text(&meta_path)?;
        let meta = serde_json::from_str(&content)
            .with_context(|| format!("Invalid article metadata: {}", meta_path.display()))?;
        log::debug!("Loaded article metadata from {}", meta_path.display());

        Ok(meta)
    }
}
