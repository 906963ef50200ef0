//! Directory tree building
//!
//! `TreeBuilder` walks a path depth-first down to an optional depth limit and
//! produces a `ScanResult`: the root `Entry` plus file and directory counts.
//! Children are sorted by name unless sorting is turned off, in which case
//! they keep the platform-dependent order the filesystem lists them in.

mod builder;
mod config;
mod entry;

pub use builder::{TreeBuilder, build};
pub use config::ScanConfig;
pub use entry::{Counters, Entry, EntryKind, ScanResult};
