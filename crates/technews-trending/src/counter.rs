use std::collections::HashMap;

/// Multiset that remembers first-insertion order for tie-breaking.
#[derive(Debug, Default)]
pub(crate) struct FirstSeenCounter {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FirstSeenCounter {
    pub(crate) fn add(&mut self, key: &str, weight: u64) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].1 += weight;
        } else {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), weight));
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by count descending; equal counts keep first-seen order.
    pub(crate) fn most_common(self) -> Vec<(String, u64)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Entries in first-seen order.
    pub(crate) fn into_entries(self) -> Vec<(String, u64)> {
        self.entries
    }
}
