//! Build planner tying entry discovery to filter and change-set restrictions.

use anyhow::{Context, Result};

use crate::changeset::resolve_change_set;
use crate::entries::{build_entry_map, format_entries, scan_entry_modules};
use crate::models::{BuildMode, BuildPlan, EntryMap};
use crate::project::PagesBuildContext;
use crate::selection::ModuleFilter;

/// High-level helper resolving the page entry catalog for one build.
pub struct PageEntryResolver<'a> {
  context: PagesBuildContext<'a>,
}

impl<'a> PageEntryResolver<'a> {
  /// Create a resolver for the provided build context.
  pub fn new(context: PagesBuildContext<'a>) -> Self {
    Self { context }
  }

  /// Resolve the full entry catalog, shaped for the given build mode.
  ///
  /// The catalog is recomputed from the filesystem on every call; nothing is
  /// cached between invocations.
  pub fn resolve(&self, mode: BuildMode) -> Result<EntryMap> {
    let pattern = self.context.entry_pattern();
    let matches = scan_entry_modules(&pattern)
      .with_context(|| format!("failed to scan page entries under {}", self.context.pages_dir.display()))?;
    let raw = build_entry_map(&matches, self.context.pages_dir);
    Ok(format_entries(&raw, mode, &self.context.layout))
  }

  /// Resolve the catalog and narrow it by an optional module filter.
  ///
  /// With a filter present the plan carries the comma-joined identifiers of
  /// the narrowed catalog as its build-path argument; a filter matching
  /// nothing aborts the plan. Without a filter the full catalog builds.
  pub fn plan(&self, mode: BuildMode, filter: Option<&ModuleFilter>) -> Result<BuildPlan> {
    let entries = self.resolve(mode)?;

    match filter {
      None => Ok(BuildPlan {
        entries,
        build_path_arg: None,
      }),
      Some(filter) => {
        let narrowed = filter.restrict(&entries)?;
        let ids: Vec<&str> = narrowed.keys().map(String::as_str).collect();
        let build_path_arg = Some(ids.join(","));
        Ok(BuildPlan {
          entries: narrowed,
          build_path_arg,
        })
      }
    }
  }

  /// Resolve the catalog and scope the build to a version-control change-set.
  ///
  /// The full catalog is kept; only the build-path argument narrows, so the
  /// downstream invocation decides which entries to rebuild. A diff with no
  /// page-relevant change builds everything.
  pub fn plan_for_diff(&self, mode: BuildMode, diff_text: &str) -> Result<BuildPlan> {
    let entries = self.resolve(mode)?;
    let scope = resolve_change_set(diff_text, self.context.layout.page_root_prefix);
    Ok(BuildPlan {
      entries,
      build_path_arg: scope.build_path_arg(),
    })
  }
}
