//! Translate version-control diffs into the set of pages needing a rebuild.

use std::collections::BTreeSet;

use regex::Regex;

use crate::naming::canonical_id;
use crate::selection::EntryInclusion;

/// Rebuild scope derived from a change-set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildScope {
  /// No page-relevant change was detected; the whole catalog rebuilds.
  Everything,
  /// Only the named entries need rebuilding.
  Entries(BTreeSet<String>),
}

impl RebuildScope {
  /// Restriction argument for the downstream build invocation.
  ///
  /// `None` means the flag is omitted and everything builds.
  pub fn build_path_arg(&self) -> Option<String> {
    match self {
      Self::Everything => None,
      Self::Entries(entry_ids) => {
        let joined: Vec<&str> = entry_ids.iter().map(String::as_str).collect();
        Some(joined.join(","))
      }
    }
  }
}

impl EntryInclusion for RebuildScope {
  fn is_included(&self, entry_id: &str) -> bool {
    match self {
      Self::Everything => true,
      Self::Entries(entry_ids) => entry_ids.contains(entry_id),
    }
  }
}

/// Compute the rebuild scope for raw diff text.
///
/// Each line is matched against the page-root prefix case-insensitively; on a
/// match the first path segment after the prefix names the implicated entry.
/// Implicated identifiers accumulate into a set, so aliased directory names
/// collapse. Lines outside the page root are ignored without error, and a
/// diff with no page-relevant line yields [`RebuildScope::Everything`].
pub fn resolve_change_set(diff_text: &str, page_root_prefix: &str) -> RebuildScope {
  let prefix = Regex::new(&format!("(?i){}", regex::escape(page_root_prefix)))
    .expect("invalid page root prefix regex");

  let mut implicated = BTreeSet::new();
  for line in diff_text.lines() {
    let line = line.trim();
    let Some(found) = prefix.find(line) else {
      continue;
    };

    let remainder = &line[found.end()..];
    let segment = remainder.split('/').next().unwrap_or("");
    let entry_id = canonical_id(segment);
    if !entry_id.is_empty() {
      implicated.insert(entry_id);
    }
  }

  if implicated.is_empty() {
    RebuildScope::Everything
  } else {
    RebuildScope::Entries(implicated)
  }
}
