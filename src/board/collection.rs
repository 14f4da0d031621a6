//! Ordered, identifier-indexed collection for embedded sub-documents.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An entity addressable by an opaque string identifier.
pub trait Identified {
    /// The entity's identifier.
    fn id(&self) -> &str;
}

/// A sequence that keeps insertion order and resolves identifiers in O(1).
///
/// Serializes as a plain sequence; the index is rebuilt on deserialization.
#[derive(Debug, Clone)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
    positions: HashMap<String, usize>,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Identified> OrderedCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from items in storage order.
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut collection = Self {
            items,
            positions: HashMap::new(),
        };
        collection.reindex_from(0);
        collection
    }

    /// Append an item and return a reference to it.
    pub fn push(&mut self, item: T) -> &T {
        let position = self.items.len();
        self.positions.insert(item.id().to_string(), position);
        self.items.push(item);
        &self.items[position]
    }

    /// Look up an item by identifier.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.positions.get(id).map(|&i| &self.items[i])
    }

    /// Look up an item by identifier for mutation.
    ///
    /// Callers must not change the item's identifier.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        match self.positions.get(id) {
            Some(&i) => Some(&mut self.items[i]),
            None => None,
        }
    }

    /// Remove an item, shifting later items down one position.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let position = self.positions.remove(id)?;
        let item = self.items.remove(position);
        self.reindex_from(position);
        Some(item)
    }

    /// Check whether an identifier is present.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, item) in self.items.iter().enumerate().skip(start) {
            self.positions.insert(item.id().to_string(), i);
        }
    }
}

impl<T> OrderedCollection<T> {
    /// Iterate in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for OrderedCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for OrderedCollection<T>
where
    T: Deserialize<'de> + Identified,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}
