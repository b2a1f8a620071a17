#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod changeset;
pub mod config;
pub mod entries;
pub mod models;
pub mod naming;
pub mod planner;
pub mod project;
pub mod selection;

pub use changeset::{RebuildScope, resolve_change_set};
pub use config::ProjectConfig;
pub use models::{BuildMode, BuildPlan, EntryDescriptor, EntryMap, PageEntry};
pub use planner::PageEntryResolver;
pub use project::{PagesBuildContext, PagesLayout};
pub use selection::{EntryInclusion, ModuleFilter, ModuleFilterError};
