/// Ordered multi-valued string-keyed parameter bag, mirroring the semantics
/// of a location query string.
///
/// `get` returns the first value for a key, `set` replaces the first
/// occurrence and drops the rest (preserving the first occurrence's
/// position), `append` adds at the end, `delete` removes every occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, String)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// First value recorded under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value.as_str())
    }

    /// Every value recorded under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Set `key` to a single value, overwriting any prior values. The first
    /// occurrence keeps its position; later occurrences are dropped.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter().position(|(entry_key, _)| entry_key == key) {
            Some(first) => {
                self.entries[first].1 = value;
                let mut index = self.entries.len();
                while index > first + 1 {
                    index -= 1;
                    if self.entries[index].0 == key {
                        self.entries.remove(index);
                    }
                }
            }
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Remove every occurrence of `key`.
    pub fn delete(&mut self, key: &str) {
        self.entries.retain(|(entry_key, _)| entry_key != key);
    }

    /// Remove every parameter.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the entire contents of the bag.
    pub fn replace(&mut self, other: ParamMap) {
        self.entries = other.entries;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
