//! File I/O operations (save, load, new) for designer state.

use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use super::{DesignerState, UNTITLED};

impl DesignerState {
    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.storage
            .save_to_file(path)
            .with_context(|| format!("failed to save design to {}", path.display()))?;

        self.set_current_file(path);
        info!(path = %path.display(), items = self.storage.len(), "saved design");
        Ok(())
    }

    /// Load design from file. On failure the current design is kept.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Err(err) = self.storage.load_from_file(path, &self.registry) {
            if err.is_document_error() {
                warn!(path = %path.display(), %err, "rejected design, keeping the current one");
            }
            return Err(err)
                .with_context(|| format!("failed to load design from {}", path.display()));
        }

        self.set_current_file(path);
        info!(path = %path.display(), items = self.storage.len(), "loaded design");
        Ok(())
    }

    /// Create new design (clear all).
    pub fn new_design(&mut self) {
        self.storage.clear();
        self.current_file_path = None;
        self.is_modified = false;
        self.design_name = UNTITLED.to_string();
    }

    /// Mark design as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.design_name);

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }

    fn set_current_file(&mut self, path: &Path) {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            self.design_name = stem.to_string();
        }
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
    }
}
