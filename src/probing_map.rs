use std::{fmt, mem};

use crate::hash::{DefaultKeyHash, KeyHash};

/// An occupied slot holding a key-value pair
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot<K, V> {
    /// The hash computed for the key when it was inserted
    hash: u64,
    /// The key of the pair
    key: K,
    /// The value associated with the key
    value: V,
}

/// A fixed-capacity hash table using linear probing with wraparound.
///
/// All three operations (lookup, insert, remove) share one probing algorithm:
/// compute the home slot as `hash(key) mod capacity`, then scan forward,
/// wrapping at the end of storage. The first free slot ends a probe chain.
///
/// The table never rehashes. When an insert exhausts a full cyclic scan
/// without finding the key or a free slot, storage grows by exactly one slot
/// at the tail and the pair lands there; existing entries keep their
/// positions. Removal frees the slot outright, with no tombstone marker, so a
/// key stored past the freed slot can become unreachable (see [`Self::remove`]).
///
/// Note: this implementation is not thread-safe. Callers needing concurrent
/// access must serialize externally.
#[derive(Debug, Clone)]
pub struct ProbingMap<K, V, H = DefaultKeyHash> {
    /// The slots storing the key-value pairs; `None` marks a free slot
    slots: Vec<Option<Slot<K, V>>>,
    /// Current number of occupied slots
    size: usize,
    /// The injected hash function mapping keys to unsigned integers
    hash_fn: H,
}

impl<K, V> ProbingMap<K, V> {
    /// Creates a new `ProbingMap` with the given capacity and the default
    /// hash function (the key's natural `Hash` implementation)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_hash_fn(capacity, DefaultKeyHash)
    }
}

impl<K, V, H> ProbingMap<K, V, H> {
    /// Creates a new `ProbingMap` with the given capacity and an explicit
    /// hash function. A capacity of 0 is clamped to 1 so the home slot
    /// computation stays total.
    pub fn with_hash_fn(capacity: usize, hash_fn: H) -> Self {
        Self { slots: (0..capacity.max(1)).map(|_| None).collect(), size: 0, hash_fn }
    }

    /// Returns the number of occupied slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if no slot is occupied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in storage, occupied or free
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns an iterator over the occupied slots in storage order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: &self.slots, index: 0 }
    }

    /// Frees every slot, removing all key-value pairs
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.size = 0;
    }

    /// Advances a probe index by one step, wrapping at the end of storage
    fn next_index(index: usize, slot_count: usize) -> usize {
        let next = index.saturating_add(1);
        if next >= slot_count { 0 } else { next }
    }
}

impl<K, V, H> ProbingMap<K, V, H>
where
    K: Eq,
    H: KeyHash<K>,
{
    /// Maps a hash to its home slot under the current capacity
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn slot_index(&self, hash: u64) -> usize {
        // capacity is kept at least 1, so the modulo is well defined
        (hash % self.slots.len() as u64) as usize
    }

    /// Finds the index of the slot holding the key, following the probe
    /// chain from its home slot. The first free slot ends the chain.
    fn find_index(&self, key: &K) -> Option<usize> {
        let slot_count = self.slots.len();
        let mut index = self.slot_index(self.hash_fn.hash_key(key));

        for _ in 0..slot_count {
            match self.slots.get(index)? {
                None => return None,
                Some(slot) if slot.key == *key => return Some(index),
                Some(_) => {}
            }
            index = Self::next_index(index, slot_count);
        }

        None
    }

    /// Retrieves the value stored for a key, or `None` if the key is absent.
    /// Pure read; the table is never mutated.
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.find_index(key)?;
        self.slots.get(index)?.as_ref().map(|slot| &slot.value)
    }

    /// Retrieves a mutable reference to the value stored for a key
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find_index(key)?;
        self.slots.get_mut(index)?.as_mut().map(|slot| &mut slot.value)
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present (update in place).
    ///
    /// Probes forward from the key's home slot. If the full cyclic scan finds
    /// neither the key nor a free slot, storage grows by exactly one slot and
    /// the pair is placed at the new tail. Existing entries are not rehashed,
    /// so insertion never fails.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_fn.hash_key(&key);
        let slot_count = self.slots.len();
        let mut index = self.slot_index(hash);

        for _ in 0..slot_count {
            let slot_ref = self.slots.get_mut(index)?;
            match slot_ref {
                None => {
                    *slot_ref = Some(Slot { hash, key, value });
                    self.size = self.size.saturating_add(1);
                    return None;
                }
                Some(slot) if slot.key == key => {
                    return Some(mem::replace(&mut slot.value, value));
                }
                Some(_) => {}
            }
            index = Self::next_index(index, slot_count);
        }

        // every slot on the cyclic scan is held by other keys: grow by one
        self.slots.push(Some(Slot { hash, key, value }));
        self.size = self.size.saturating_add(1);
        None
    }

    /// Removes a key-value pair, returning the removed value.
    ///
    /// A missing key is an expected, non-fatal outcome: it is reported on the
    /// `log` facade and the table is left unchanged.
    ///
    /// The freed slot reverts to empty with no tombstone. Because lookups
    /// stop at the first free slot, a key that probed past this slot at
    /// insertion time becomes unreachable afterwards.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let Some(index) = self.find_index(key) else {
            log::debug!("remove: key not found along its probe chain");
            return None;
        };
        let slot = self.slots.get_mut(index)?.take()?;
        self.size = self.size.saturating_sub(1);
        Some(slot.value)
    }
}

impl<K, V, H> Extend<(K, V)> for ProbingMap<K, V, H>
where
    K: Eq,
    H: KeyHash<K>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, H> fmt::Display for ProbingMap<K, V, H>
where
    K: fmt::Display,
    V: fmt::Display,
{
    /// Renders one line per slot in storage order: the slot index, then the
    /// insertion hash, key and value when occupied, or a placeholder when free
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(slot) => writeln!(
                    f,
                    "[{index}] hash={} key={} value={}",
                    slot.hash, slot.key, slot.value
                )?,
                None => writeln!(f, "[{index}] <free>")?,
            }
        }
        Ok(())
    }
}

/// Iterator over the occupied slots of the table, in storage order
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The slots being walked
    slots: &'a [Option<Slot<K, V>>],
    /// Current position in storage order
    index: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Some(slot) = slot {
                return Some((&slot.key, &slot.value));
            }
        }
        None
    }
}
