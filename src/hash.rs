//! Hash function injection for `ProbingMap`

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// A pure mapping from keys to unsigned integers, used to pick home slots.
///
/// Implementations must be deterministic: hashing the same key twice yields
/// the same value. A blanket impl covers `Fn(&K) -> u64` closures, so tests
/// can inject deterministic collision patterns.
pub trait KeyHash<K> {
    /// Computes the hash of the given key
    fn hash_key(&self, key: &K) -> u64;
}

impl<K, F> KeyHash<K> for F
where
    F: Fn(&K) -> u64,
{
    fn hash_key(&self, key: &K) -> u64 {
        self(key)
    }
}

/// The default hash function, delegating to the key's `Hash` implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultKeyHash;

impl<K: Hash> KeyHash<K> for DefaultKeyHash {
    fn hash_key(&self, key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }
}
