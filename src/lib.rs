//! pathinfo - scan a directory into a tree and print it as text or JSON

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{RenderError, ScanError};
pub use output::{
    HumanFormatter, OutputConfig, OutputFormat, format_json, parse_structured, print, render,
    render_token,
};
pub use tree::{Counters, Entry, EntryKind, ScanConfig, ScanResult, TreeBuilder, build};
