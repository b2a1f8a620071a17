//! Data structures produced while resolving a multi-page build.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Build mode controlling the shape of the resolved entry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  /// Entries stay as raw module paths for on-demand per-page serving.
  Development,
  /// Entries are wrapped into full descriptors with template and chunk lists.
  Production,
}

/// Production-mode descriptor for one independently buildable page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EntryDescriptor {
  /// Path of the page's entry module.
  pub entry: String,
  /// HTML template injected for the page.
  pub template: String,
  /// Ordered chunk names wired into the page, own chunk included.
  pub chunks: Vec<String>,
}

/// One value of the entry table, raw in development and wrapped in production.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PageEntry {
  /// Full production descriptor.
  Descriptor(EntryDescriptor),
  /// Raw entry-module path.
  Module(String),
}

impl PageEntry {
  /// Path of the entry module backing this page.
  pub fn entry_path(&self) -> &str {
    match self {
      PageEntry::Descriptor(descriptor) => &descriptor.entry,
      PageEntry::Module(path) => path,
    }
  }
}

/// Insertion-ordered mapping from canonical entry identifier to page entry.
///
/// Identifiers are unique; duplicates collapse first-write-wins during
/// construction.
pub type EntryMap = IndexMap<String, PageEntry>;

/// Resolved build plan consumed by the downstream bundler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPlan {
  /// Entry table for the bundler's multi-page configuration.
  pub entries: EntryMap,
  /// Comma-joined identifier restriction for the build command.
  ///
  /// `None` means build everything.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub build_path_arg: Option<String>,
}
