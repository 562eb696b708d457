use crate::graph::Vertex;
use rustc_hash::FxHashMap;

/// Two-way mapping between display names and dense vertex ids. Ids are
/// handed out in insertion order.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    lookup: FxHashMap<String, Vertex>,
    names: Vec<String>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `name`, registering it first if needed. The flag is
    /// true when the name was new.
    pub fn insert(&mut self, name: &str) -> (Vertex, bool) {
        if let Some(&vertex) = self.lookup.get(name) {
            return (vertex, false);
        }

        let vertex = self.names.len();
        self.lookup.insert(name.to_string(), vertex);
        self.names.push(name.to_string());
        (vertex, true)
    }

    pub fn get(&self, name: &str) -> Option<Vertex> {
        self.lookup.get(name).copied()
    }

    pub fn name(&self, vertex: Vertex) -> Option<&str> {
        self.names.get(vertex).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Makes room for `additional` more names so a bulk load does not
    /// rehash repeatedly.
    pub fn reserve(&mut self, additional: usize) {
        self.lookup.reserve(additional);
        self.names.reserve(additional);
    }
}
