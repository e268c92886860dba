//! Structured view of the working tree's pending changes.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Pending changes, as reported by porcelain status and the working-tree diff.
///
/// The status buckets and `details` come from independent sources and are
/// not cross-checked: a path can be in `details` without appearing in any
/// bucket, and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ChangeSet {
    pub modified: Vec<String>,
    pub added: Vec<String>,
    pub deleted: Vec<String>,
    pub details: FileDetails,
}

impl ChangeSet {
    /// True when status reported nothing and the diff had no file sections.
    pub fn is_empty(&self) -> bool {
        self.modified.is_empty()
            && self.added.is_empty()
            && self.deleted.is_empty()
            && self.details.is_empty()
    }

    /// Number of status entries across all three buckets.
    ///
    /// A path carrying several flags (e.g. `AM`) is counted once per bucket.
    pub fn file_count(&self) -> usize {
        self.modified.len() + self.added.len() + self.deleted.len()
    }

    /// Added/removed lines recorded for `path`, if the diff had a section for it.
    pub fn details_for(&self, path: &str) -> Option<&[String]> {
        self.details.get(path)
    }
}

/// Added and removed diff lines per file, kept in order of first appearance.
///
/// Serializes as a JSON object whose keys follow that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDetails {
    entries: Vec<(String, Vec<String>)>,
    // path -> position in `entries`
    index: HashMap<String, usize>,
}

impl FileDetails {
    /// Begin a section for `path` and return its slot.
    ///
    /// A path seen again has its lines cleared but keeps its original position.
    pub(crate) fn start_file(&mut self, path: &str) -> usize {
        if let Some(&slot) = self.index.get(path) {
            self.entries[slot].1.clear();
            return slot;
        }
        let slot = self.entries.len();
        self.entries.push((path.to_string(), Vec::new()));
        self.index.insert(path.to_string(), slot);
        slot
    }

    pub(crate) fn push_line(&mut self, slot: usize, line: &str) {
        if let Some((_, lines)) = self.entries.get_mut(slot) {
            lines.push(line.to_string());
        }
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.index
            .get(path)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(p, lines)| (p.as_str(), lines.as_slice()))
    }
}

impl Serialize for FileDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, lines) in self.iter() {
            map.serialize_entry(path, lines)?;
        }
        map.end()
    }
}
