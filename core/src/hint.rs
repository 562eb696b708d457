use crate::graph::Vertex;
use crate::name_index::NameIndex;
use std::ops::Range;
use unidecode::unidecode;

/// Sorting and comparison key for hints: accents folded to ASCII, then
/// lowercased.
pub fn hint_key(name: &str) -> String {
    unidecode(name).to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HintEntry {
    key: String,
    vertex: Vertex,
}

/// Names sorted by [`hint_key`] for prefix auto-completion.
#[derive(Debug, Clone, Default)]
pub struct HintIndex {
    entries: Vec<HintEntry>,
}

impl HintIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(names: &NameIndex) -> Self {
        let mut index = Self::new();
        index.rebuild(names);
        index
    }

    /// Re-sorts from scratch. Sorting dominates the cost of hinting, so this
    /// runs once per bulk load rather than per query.
    pub fn rebuild(&mut self, names: &NameIndex) {
        self.entries = names
            .names()
            .iter()
            .enumerate()
            .map(|(vertex, name)| HintEntry {
                key: hint_key(name),
                vertex,
            })
            .collect();
        self.entries
            .sort_unstable_by(|a, b| a.key.cmp(&b.key).then(a.vertex.cmp(&b.vertex)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Vertices in hint order.
    pub fn sorted_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.entries.iter().map(|entry| entry.vertex)
    }

    /// Half-open range of sorted positions suggested for `prefix`.
    ///
    /// The query key is truncated to `prefix_len` characters. The range
    /// covers every name whose key starts with the truncated key, widened
    /// by up to `margin` entries on each side (clamped to the array) to
    /// catch near misses in alphabetic order.
    pub fn range(&self, prefix: &str, prefix_len: usize, margin: usize) -> Range<usize> {
        let matching = self.matching_range(prefix, prefix_len);
        matching.start.saturating_sub(margin)..(matching.end + margin).min(self.entries.len())
    }

    /// At most `limit` suggested vertices for `prefix`, in hint order.
    /// Prefix matches fill the limit first; near misses from the widened
    /// range take what is left, nearest first.
    pub fn suggest(&self, prefix: &str, prefix_len: usize, margin: usize, limit: usize) -> Vec<Vertex> {
        let matching = self.matching_range(prefix, prefix_len);
        let widened = self.range(prefix, prefix_len, margin);

        let mut positions: Vec<usize> = matching.clone().take(limit).collect();

        let mut before = (widened.start..matching.start).rev();
        let mut after = matching.end..widened.end;
        let mut near_misses = Vec::with_capacity(widened.len() - matching.len());
        loop {
            let (previous, next) = (before.next(), after.next());
            if previous.is_none() && next.is_none() {
                break;
            }
            near_misses.extend(previous);
            near_misses.extend(next);
        }
        let remaining = limit.saturating_sub(positions.len());
        positions.extend(near_misses.into_iter().take(remaining));
        positions.sort_unstable();

        positions
            .into_iter()
            .map(|position| self.entries[position].vertex)
            .collect()
    }

    fn matching_range(&self, prefix: &str, prefix_len: usize) -> Range<usize> {
        let truncated: String = hint_key(prefix).chars().take(prefix_len).collect();
        let mut padded = truncated.clone();
        padded.push(char::MAX);
        padded.push(char::MAX);

        let lower = self
            .entries
            .partition_point(|entry| entry.key.as_str() < truncated.as_str());
        let upper = self
            .entries
            .partition_point(|entry| entry.key.as_str() <= padded.as_str());
        lower..upper
    }
}
