//! Layout and context types describing a multi-page project on disk.

use std::path::Path;

/// Borrowed description of the filesystem conventions of a multi-page project.
#[derive(Debug, Clone, Copy)]
pub struct PagesLayout<'a> {
  /// Glob fragment locating entry modules beneath each page directory.
  pub entry_module_glob: &'a str,
  /// HTML template shared by every generated page.
  pub page_template: &'a str,
  /// Shared third-party vendor chunk name.
  pub vendor_chunk: &'a str,
  /// UI-library chunk name.
  pub ui_chunk: &'a str,
  /// Common-components chunk name.
  pub commons_chunk: &'a str,
  /// Webpack runtime chunk name.
  pub runtime_chunk: &'a str,
  /// Path prefix deciding whether a changed file is page-relevant.
  pub page_root_prefix: &'a str,
}

impl PagesLayout<'_> {
  /// Ordered chunk list for one page, with the page's own chunk in place.
  pub fn chunks_for(&self, entry_id: &str) -> Vec<String> {
    vec![
      self.vendor_chunk.to_string(),
      self.ui_chunk.to_string(),
      self.commons_chunk.to_string(),
      entry_id.to_string(),
      self.runtime_chunk.to_string(),
    ]
  }
}

/// Everything the entry resolver needs to know about one build invocation.
#[derive(Debug, Clone, Copy)]
pub struct PagesBuildContext<'a> {
  /// Filesystem conventions of the project.
  pub layout: PagesLayout<'a>,
  /// Root directory of the project being built.
  pub project_dir: &'a Path,
  /// Directory holding the page source tree.
  pub pages_dir: &'a Path,
}

impl PagesBuildContext<'_> {
  /// Full glob pattern expanding to every entry module under the pages tree.
  pub fn entry_pattern(&self) -> String {
    format!(
      "{}/{}",
      self.pages_dir.display().to_string().trim_end_matches('/'),
      self.layout.entry_module_glob
    )
  }
}
