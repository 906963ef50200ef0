//! Tree model produced by a scan
//!
//! The serde attributes here define the structured output schema:
//! `{"tree": {"type", "name", "contents"}, "meta": {"files", "dirs"}}`.

use serde::{Deserialize, Deserializer, Serialize};

/// Whether an entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "file")]
    File,
    #[serde(rename = "dir")]
    Directory,
}

/// One node of the scanned tree.
///
/// Files never have children. A directory's children are empty when its
/// depth budget ran out, even if the directory itself is not empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
    #[serde(
        rename = "contents",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Entry>,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::File,
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<Entry>) -> Self {
        Self {
            kind: EntryKind::Directory,
            name: name.into(),
            children,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Count this entry and all of its descendants.
    pub fn count(&self) -> Counters {
        let mut counters = Counters::default();
        self.count_into(&mut counters);
        counters
    }

    fn count_into(&self, counters: &mut Counters) {
        match self.kind {
            EntryKind::File => counters.record_file(),
            EntryKind::Directory => counters.record_dir(),
        }
        for child in &self.children {
            child.count_into(counters);
        }
    }
}

/// Running totals of visited entries, shared across one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    #[serde(rename = "files")]
    pub file_count: u64,
    #[serde(rename = "dirs")]
    pub dir_count: u64,
}

impl Counters {
    pub fn record_file(&mut self) {
        self.file_count += 1;
    }

    pub fn record_dir(&mut self) {
        self.dir_count += 1;
    }

    pub fn total(&self) -> u64 {
        self.file_count + self.dir_count
    }
}

/// The finished tree paired with the counters of the walk that built it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub tree: Entry,
    pub meta: Counters,
}

impl ScanResult {
    pub fn new(tree: Entry, meta: Counters) -> Self {
        Self { tree, meta }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Entry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Entry>>::deserialize(deserializer)?.unwrap_or_default())
}
