//! Project configuration loader describing the multi-page layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::project::PagesLayout;

const DEFAULT_CONFIG_FILE: &str = "mpa.config.json";

/// Discoverable project configuration describing where pages live and how
/// production entries are shaped.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Relative path from the project root to the page source tree.
    pub pages_dir: String,
    /// Glob fragment locating entry modules beneath each page directory.
    pub entry_module_glob: String,
    /// HTML template shared by every generated page.
    pub page_template: String,
    /// Shared third-party vendor chunk name.
    pub vendor_chunk: String,
    /// UI-library chunk name.
    pub ui_chunk: String,
    /// Common-components chunk name.
    pub commons_chunk: String,
    /// Webpack runtime chunk name.
    pub runtime_chunk: String,
    /// Path prefix deciding whether a changed file is page-relevant.
    pub page_root_prefix: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            pages_dir: "src/views".into(),
            entry_module_glob: "**/main.*".into(),
            page_template: "public/index.html".into(),
            vendor_chunk: "chunk-libs".into(),
            ui_chunk: "chunk-elementUI".into(),
            commons_chunk: "chunk-commons".into(),
            runtime_chunk: "runtime".into(),
            page_root_prefix: "src/views/".into(),
        }
    }
}

impl ProjectConfig {
    /// Attempt to load configuration from the provided project directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so downstream callers can continue operating
    /// with sensible assumptions.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Borrowing conversion into the layout consumed by the resolver.
    pub fn to_layout(&self) -> PagesLayout<'_> {
        PagesLayout {
            entry_module_glob: &self.entry_module_glob,
            page_template: &self.page_template,
            vendor_chunk: &self.vendor_chunk,
            ui_chunk: &self.ui_chunk,
            commons_chunk: &self.commons_chunk,
            runtime_chunk: &self.runtime_chunk,
            page_root_prefix: &self.page_root_prefix,
        }
    }

    /// Absolute path of the page source tree for the given project root.
    pub fn pages_dir_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.pages_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.pages_dir, "src/views");
        assert_eq!(config.entry_module_glob, "**/main.*");
        assert_eq!(config.page_template, "public/index.html");
    }

    #[test]
    fn discover_falls_back_to_defaults_when_unparsable() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("mpa.config.json"), "not json").unwrap();
        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.runtime_chunk, "runtime");
    }

    #[test]
    fn from_path_reads_partial_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mpa.config.json");
        fs::write(
            &path,
            r#"{"pagesDir": "app/pages", "pageRootPrefix": "app/pages/"}"#,
        )
        .unwrap();

        let config = ProjectConfig::from_path(&path).unwrap();
        assert_eq!(config.pages_dir, "app/pages");
        assert_eq!(config.page_root_prefix, "app/pages/");
        assert_eq!(config.vendor_chunk, "chunk-libs");
    }

    #[test]
    fn layout_borrows_the_configured_values() {
        let config = ProjectConfig::default();
        let layout = config.to_layout();
        assert_eq!(layout.ui_chunk, "chunk-elementUI");
        assert_eq!(layout.page_root_prefix, "src/views/");
    }
}
