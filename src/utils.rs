//! Utility functions and traits for `ProbingMap`

use crate::ProbingMap;
use crate::hash::KeyHash;

/// Extension trait for map implementations that provides additional utility methods
pub trait MapExtensions<K, V> {
    /// Returns the keys of the map as a Vec, in storage order
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the map as a Vec, in storage order
    fn values(&self) -> Vec<V>;

    /// Returns true if the map contains the given key
    fn contains_key(&self, key: &K) -> bool;
}

impl<K, V, H> MapExtensions<K, V> for ProbingMap<K, V, H>
where
    K: Eq + Clone,
    V: Clone,
    H: KeyHash<K>,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

/// Creates a `ProbingMap` from an iterator of key-value pairs, sized to the
/// iterator's lower bound and growing one slot at a time past it
#[allow(dead_code)]
pub fn from_iter<K, V, I>(iter: I) -> ProbingMap<K, V>
where
    K: Eq + std::hash::Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let iter = iter.into_iter();
    let (lower, _) = iter.size_hint();
    let mut map = ProbingMap::new(lower.max(1));

    for (key, value) in iter {
        map.insert(key, value);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let map = from_iter(data);

        assert_eq!(map.get(&"a".to_string()), Some(&1));
        assert_eq!(map.get(&"b".to_string()), Some(&2));
        assert_eq!(map.get(&"c".to_string()), Some(&3));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_keys_and_values() {
        let mut map = ProbingMap::new(8);
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("c".to_string(), 3);

        let mut keys = map.keys();
        keys.sort();

        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_contains_key() {
        let mut map = ProbingMap::new(8);
        map.insert("a".to_string(), 1);

        assert!(map.contains_key(&"a".to_string()));
        assert!(!map.contains_key(&"b".to_string()));
    }
}
