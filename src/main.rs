//! `mpa-entries` - resolve the page entry table for a multi-page build and
//! scope it to requested modules or a version-control change-set.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mpa_entry_resolver::{
  BuildMode, ModuleFilter, PageEntryResolver, PagesBuildContext, ProjectConfig,
};

/// Resolve multi-page entries and emit the build plan as JSON.
#[derive(Debug, Parser)]
#[command(name = "mpa-entries", version, about)]
struct Cli {
  /// Project root directory holding the page source tree.
  #[arg(long, default_value = ".")]
  project_dir: PathBuf,

  /// Build mode shaping the emitted entry table.
  #[arg(long, value_enum, default_value_t = BuildMode::Production)]
  mode: BuildMode,

  /// Comma-separated module names restricting the build.
  #[arg(long, conflicts_with = "diff_file")]
  modules: Option<String>,

  /// File holding newline-separated changed paths from a version-control diff.
  #[arg(long)]
  diff_file: Option<PathBuf>,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let config = ProjectConfig::discover(&cli.project_dir);
  let layout = config.to_layout();
  let pages_dir = config.pages_dir_path(&cli.project_dir);
  let resolver = PageEntryResolver::new(PagesBuildContext {
    layout,
    project_dir: &cli.project_dir,
    pages_dir: &pages_dir,
  });

  let plan = if let Some(diff_file) = &cli.diff_file {
    let diff_text = fs::read_to_string(diff_file)
      .with_context(|| format!("failed to read diff file {}", diff_file.display()))?;
    resolver.plan_for_diff(cli.mode, &diff_text)?
  } else {
    let filter = cli.modules.as_deref().and_then(ModuleFilter::from_raw);
    resolver.plan(cli.mode, filter.as_ref())?
  };

  println!("{}", serde_json::to_string_pretty(&plan)?);
  Ok(())
}
