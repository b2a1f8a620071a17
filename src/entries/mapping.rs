//! Folding scanned entry modules into the canonical entry map.

use std::path::{Path, PathBuf};

use crate::models::{EntryMap, PageEntry};
use crate::naming::canonical_id;

/// Build the raw entry map from scanned entry-module paths.
///
/// Each module is keyed by the canonical identifier of its containing
/// directory relative to `pages_dir`. Identifiers are unique: when two
/// directories normalize to the same identifier the first match in scan order
/// is retained and later ones are silently dropped. Matches outside
/// `pages_dir` are ignored.
pub fn build_entry_map(matches: &[PathBuf], pages_dir: &Path) -> EntryMap {
  let mut entries = EntryMap::new();

  for module_path in matches {
    let Some(page_dir) = module_path.parent() else {
      continue;
    };
    let Ok(relative) = page_dir.strip_prefix(pages_dir) else {
      continue;
    };

    let segment = relative.to_string_lossy().replace('\\', "/");
    let entry_id = canonical_id(&segment);
    if entry_id.is_empty() || entries.contains_key(&entry_id) {
      continue;
    }

    let module = module_path.to_string_lossy().replace('\\', "/");
    entries.insert(entry_id, PageEntry::Module(module));
  }

  entries
}
