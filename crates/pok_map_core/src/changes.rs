//! Before/after capture of cell writes
//!
//! Undo records store only the cells an edit touched. The value a cell had
//! before the first write is kept (first write wins) and the value after the
//! last write is kept (last write wins), so any number of intermediate writes
//! collapse into one invertible change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize, V: Serialize",
    deserialize = "K: Deserialize<'de>, V: Deserialize<'de>"
))]
pub struct ChangeSet<K: Eq + Hash, V> {
    #[serde(with = "pairs")]
    old: HashMap<K, V>,
    #[serde(with = "pairs")]
    new: HashMap<K, V>,
}

/// Maps are written as `[key, value]` lists so keys need not be strings
mod pairs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;
    use std::hash::Hash;

    pub fn serialize<K, V, S>(map: &HashMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize,
        V: Serialize,
        S: Serializer,
    {
        serializer.collect_seq(map.iter())
    }

    pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<HashMap<K, V>, D::Error>
    where
        K: Deserialize<'de> + Eq + Hash,
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(K, V)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

impl<K: Eq + Hash, V> Default for ChangeSet<K, V> {
    fn default() -> Self {
        Self {
            old: HashMap::new(),
            new: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Copy, V: Copy> ChangeSet<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `value` as the pre-edit value of `key` unless one is already known
    pub fn record_old(&mut self, key: K, value: V) {
        self.old.entry(key).or_insert(value);
    }

    /// Remember `value` as the post-edit value of `key`
    pub fn record_new(&mut self, key: K, value: V) {
        self.new.insert(key, value);
    }

    /// Record a single write of `after` over `before`
    pub fn record(&mut self, key: K, before: V, after: V) {
        self.record_old(key, before);
        self.record_new(key, after);
    }

    /// Merge a later change set into this one.
    ///
    /// Old values are only taken for keys this set has not seen, new values
    /// always overwrite.
    pub fn join(&mut self, other: ChangeSet<K, V>) {
        for (key, value) in other.old {
            self.old.entry(key).or_insert(value);
        }
        self.new.extend(other.new);
    }

    /// Swap the before and after sides
    pub fn inverted(self) -> Self {
        Self {
            old: self.new,
            new: self.old,
        }
    }

    pub fn old(&self) -> &HashMap<K, V> {
        &self.old
    }

    pub fn new_values(&self) -> &HashMap<K, V> {
        &self.new
    }

    pub fn old_value(&self, key: &K) -> Option<&V> {
        self.old.get(key)
    }

    pub fn new_value(&self, key: &K) -> Option<&V> {
        self.new.get(key)
    }

    pub fn len(&self) -> usize {
        self.old.len()
    }

    pub fn is_empty(&self) -> bool {
        self.old.is_empty() && self.new.is_empty()
    }
}

impl<K: Eq + Hash + Copy, V: Copy + PartialEq> ChangeSet<K, V> {
    /// True if every touched key ended up with its original value
    pub fn is_identity(&self) -> bool {
        self.old.iter().all(|(k, v)| self.new.get(k) == Some(v))
    }
}
