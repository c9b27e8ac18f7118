// File: crates/plotter-core/src/mount.rs
// Summary: Targets that receive a finished SVG document (in-memory buffer or file).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Receives the markup of one render; each mount replaces what was there before.
pub trait MountTarget {
    fn mount(&mut self, markup: String) -> Result<()>;
}

impl MountTarget for String {
    fn mount(&mut self, markup: String) -> Result<()> {
        *self = markup;
        Ok(())
    }
}

/// Writes the document to a file, creating parent directories as needed.
#[derive(Clone, Debug)]
pub struct SvgFile {
    path: PathBuf,
}

impl SvgFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MountTarget for SvgFile {
    fn mount(&mut self, markup: String) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(&self.path, markup)
            .with_context(|| format!("failed to write '{}'", self.path.display()))?;
        Ok(())
    }
}
