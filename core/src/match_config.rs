/// Configuration for loading databases and answering hint queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Separator between the title and cast fields of a database line
    pub delimiter: char,
    /// Number of leading characters of a hint query that must match
    pub hint_prefix_len: usize,
    /// Extra suggestions taken on each side of the matching range
    pub hint_margin: usize,
}

impl MatchConfig {
    pub fn new(delimiter: char, hint_prefix_len: usize, hint_margin: usize) -> Self {
        Self {
            delimiter,
            hint_prefix_len,
            hint_margin,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            delimiter: '/',
            hint_prefix_len: 6,
            hint_margin: 2,
        }
    }
}
