//! Shaping the raw entry map for the requested build mode.

use crate::models::{BuildMode, EntryDescriptor, EntryMap, PageEntry};
use crate::project::PagesLayout;

/// Shape an entry map for the given build mode.
///
/// Development builds consume the raw module paths unchanged for on-demand
/// per-page serving. Production builds wrap each raw path into a full
/// descriptor carrying the shared template and the ordered chunk list with the
/// page's own chunk substituted in. Values that are already descriptors pass
/// through untouched, and an identifier already present in the output keeps
/// its existing value, mirroring the builder's first-write-wins policy. A
/// second production pass is therefore a no-op.
pub fn format_entries(entries: &EntryMap, mode: BuildMode, layout: &PagesLayout) -> EntryMap {
  match mode {
    BuildMode::Development => entries.clone(),
    BuildMode::Production => {
      let mut formatted = EntryMap::new();
      for (entry_id, entry) in entries {
        if formatted.contains_key(entry_id) {
          continue;
        }

        let descriptor = match entry {
          PageEntry::Descriptor(descriptor) => descriptor.clone(),
          PageEntry::Module(path) => EntryDescriptor {
            entry: path.clone(),
            template: layout.page_template.to_string(),
            chunks: layout.chunks_for(entry_id),
          },
        };
        formatted.insert(entry_id.clone(), PageEntry::Descriptor(descriptor));
      }
      formatted
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn layout() -> PagesLayout<'static> {
    PagesLayout {
      entry_module_glob: "**/main.*",
      page_template: "public/index.html",
      vendor_chunk: "chunk-libs",
      ui_chunk: "chunk-elementUI",
      commons_chunk: "chunk-commons",
      runtime_chunk: "runtime",
      page_root_prefix: "src/views/",
    }
  }

  fn raw_entries() -> EntryMap {
    let mut entries = EntryMap::new();
    entries.insert(
      "user-profile".into(),
      PageEntry::Module("src/views/UserProfile/main.js".into()),
    );
    entries.insert(
      "order-list".into(),
      PageEntry::Module("src/views/order-list/main.js".into()),
    );
    entries
  }

  #[test]
  fn development_mode_passes_the_map_through() {
    let entries = raw_entries();
    let formatted = format_entries(&entries, BuildMode::Development, &layout());
    assert_eq!(formatted, entries);
  }

  #[test]
  fn production_mode_wraps_entries_into_descriptors() {
    let formatted = format_entries(&raw_entries(), BuildMode::Production, &layout());

    let Some(PageEntry::Descriptor(descriptor)) = formatted.get("user-profile") else {
      panic!("expected a descriptor for user-profile");
    };
    assert_eq!(descriptor.entry, "src/views/UserProfile/main.js");
    assert_eq!(descriptor.template, "public/index.html");
    assert_eq!(descriptor.chunks, vec![
      "chunk-libs",
      "chunk-elementUI",
      "chunk-commons",
      "user-profile",
      "runtime"
    ]);
  }

  #[test]
  fn production_mode_keeps_insertion_order() {
    let formatted = format_entries(&raw_entries(), BuildMode::Production, &layout());
    let ids: Vec<&str> = formatted.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["user-profile", "order-list"]);
  }

  #[test]
  fn a_second_production_pass_is_a_no_op() {
    let layout = layout();
    let once = format_entries(&raw_entries(), BuildMode::Production, &layout);
    let twice = format_entries(&once, BuildMode::Production, &layout);
    assert_eq!(once, twice);
  }
}
