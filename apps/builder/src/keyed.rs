//! Insertion-ordered keyed collection.
//!
//! Overwriting an existing key replaces the value in place, so the slot keeps
//! the position of the key's first insertion. Both the hospital index and the
//! license/certification reconciler rely on that ordering.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct KeyedList<T> {
    slots: Vec<(String, T)>,
    positions: HashMap<String, usize>,
}

impl<T> Default for KeyedList<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T> KeyedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites. Returns true when an existing value was replaced.
    pub fn insert(&mut self, key: String, value: T) -> bool {
        match self.positions.get(&key) {
            Some(&pos) => {
                self.slots[pos].1 = value;
                true
            }
            None => {
                self.positions.insert(key.clone(), self.slots.len());
                self.slots.push((key, value));
                false
            }
        }
    }

    /// Inserts only when the key is not present yet.
    pub fn insert_if_absent(&mut self, key: String, value: T) -> bool {
        if self.positions.contains_key(&key) {
            return false;
        }
        self.insert(key, value);
        true
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.positions.get(key).map(|&pos| &self.slots[pos].1)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_values(self) -> Vec<T> {
        self.slots.into_iter().map(|(_, v)| v).collect()
    }
}
