//! Helpers used to restrict which pages are included in a build.

use std::collections::BTreeSet;

use crate::models::EntryMap;
use crate::naming::canonical_id;

/// Trait describing selection filters for resolved page entries.
pub trait EntryInclusion {
  /// Returns `true` when the entry should be included in the build.
  fn is_included(&self, entry_id: &str) -> bool;
}

/// Exact-match filter parsed from a comma-separated list of module names.
///
/// Requested names are canonicalized before matching, so `UserProfile` and
/// `user-profile` select the same entry.
#[derive(Debug, Clone)]
pub struct ModuleFilter {
  requested: BTreeSet<String>,
}

/// Errors produced while restricting an entry map to requested modules.
#[derive(Debug)]
pub enum ModuleFilterError {
  /// None of the requested module names matched a discovered entry.
  NoMatch {
    /// Canonicalized module names that were requested.
    requested: Vec<String>,
  },
}

impl ModuleFilter {
  /// Parse a raw comma-separated filter string.
  ///
  /// Tokens are trimmed, canonicalized and de-duplicated; empty tokens are
  /// discarded. Returns `None` when nothing remains, meaning no filtering
  /// should take place.
  pub fn from_raw(raw: &str) -> Option<Self> {
    let requested: BTreeSet<String> = raw
      .split(',')
      .map(str::trim)
      .filter(|token| !token.is_empty())
      .map(canonical_id)
      .collect();

    (!requested.is_empty()).then_some(Self { requested })
  }

  /// Restrict an entry map to exactly the requested modules.
  ///
  /// Matching entries keep their order and values. An empty result is fatal:
  /// the caller's build must abort rather than silently produce zero pages.
  pub fn restrict(&self, entries: &EntryMap) -> Result<EntryMap, ModuleFilterError> {
    let matched = narrow_entries(self, entries);
    if matched.is_empty() {
      return Err(ModuleFilterError::NoMatch {
        requested: self.requested.iter().cloned().collect(),
      });
    }
    Ok(matched)
  }
}

impl EntryInclusion for ModuleFilter {
  fn is_included(&self, entry_id: &str) -> bool {
    self.requested.contains(entry_id)
  }
}

/// Produce a new entry map containing only the included entries.
///
/// Order and values carry over unchanged; the input map is never mutated.
pub fn narrow_entries<S: EntryInclusion>(selection: &S, entries: &EntryMap) -> EntryMap {
  entries
    .iter()
    .filter(|(entry_id, _)| selection.is_included(entry_id))
    .map(|(entry_id, entry)| (entry_id.clone(), entry.clone()))
    .collect()
}

/// Apply an optional raw filter string to an entry map.
///
/// An empty or absent filter string returns the full map unchanged.
pub fn filter_entries(raw: Option<&str>, entries: &EntryMap) -> Result<EntryMap, ModuleFilterError> {
  match raw.and_then(ModuleFilter::from_raw) {
    Some(filter) => filter.restrict(entries),
    None => Ok(entries.clone()),
  }
}

impl std::fmt::Display for ModuleFilterError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::NoMatch { requested } => {
        write!(
          f,
          "no page module matched the requested filter `{}`",
          requested.join(",")
        )
      }
    }
  }
}

impl std::error::Error for ModuleFilterError {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::PageEntry;

  fn entries() -> EntryMap {
    let mut entries = EntryMap::new();
    for id in ["user-profile", "order-list", "user-settings"] {
      entries.insert(id.into(), PageEntry::Module(format!("src/views/{id}/main.js")));
    }
    entries
  }

  #[test]
  fn restricts_to_exactly_the_requested_modules() {
    let filter = ModuleFilter::from_raw("user-profile,order-list").unwrap();
    let narrowed = filter.restrict(&entries()).unwrap();

    let ids: Vec<&str> = narrowed.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["user-profile", "order-list"]);
  }

  #[test]
  fn requested_names_are_canonicalized_before_matching() {
    let filter = ModuleFilter::from_raw("UserProfile").unwrap();
    let narrowed = filter.restrict(&entries()).unwrap();
    assert!(narrowed.contains_key("user-profile"));
  }

  #[test]
  fn a_name_matching_no_entry_exactly_is_fatal() {
    let filter = ModuleFilter::from_raw("user").unwrap();
    let err = filter.restrict(&entries()).unwrap_err();
    assert!(err.to_string().contains("user"));
  }

  #[test]
  fn empty_filter_strings_disable_filtering() {
    assert!(ModuleFilter::from_raw("").is_none());
    assert!(ModuleFilter::from_raw(" , ,").is_none());
  }

  #[test]
  fn filter_entries_passes_the_map_through_without_a_filter() {
    let full = entries();
    assert_eq!(filter_entries(None, &full).unwrap(), full);
    assert_eq!(filter_entries(Some(""), &full).unwrap(), full);
  }

  #[test]
  fn matching_entries_keep_their_values() {
    let full = entries();
    let narrowed = filter_entries(Some("order-list"), &full).unwrap();
    assert_eq!(narrowed.get("order-list"), full.get("order-list"));
  }
}
