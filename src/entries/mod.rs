//! Discovery and shaping of the multi-page entry table.
//!
//! Resolution runs in three steps that mirror the build pipeline: expand the
//! entry-module glob, fold the matches into an ordered identifier map, then
//! shape that map for the requested build mode. Each step lives in its own
//! submodule so the pieces can be tested independently.

mod formatting;
mod mapping;
mod scanning;

pub use formatting::format_entries;
pub use mapping::build_entry_map;
pub use scanning::scan_entry_modules;
