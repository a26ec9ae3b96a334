//! # Probing Map
//!
//! A Rust implementation of a fixed-capacity hash table with linear probing.
//!
//! The table maps keys to values with open addressing: every operation
//! computes a home slot from the key's hash and scans forward with
//! wraparound. Deletion frees the slot outright (no tombstones), and when an
//! insert exhausts a full cyclic scan the storage grows by exactly one slot
//! instead of rehashing.
//!
//! ## Basic Usage
//!
//! ```rust
//! use probing_map::ProbingMap;
//!
//! // Create a map with five slots
//! let mut map = ProbingMap::new(5);
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get(&"apple".to_string()), Some(&1));
//!
//! // Update values in place
//! map.insert("apple".to_string(), 10);
//! assert_eq!(map.get(&"apple".to_string()), Some(&10));
//!
//! // Remove values
//! map.remove(&"apple".to_string());
//! assert_eq!(map.get(&"apple".to_string()), None);
//! ```
//!
//! ## Custom Hash Functions
//!
//! The hash function is injected at construction, which makes collision
//! patterns deterministic and testable:
//!
//! ```rust
//! use probing_map::ProbingMap;
//!
//! // Identity hash: key 1 lands in slot 1, key 6 collides and probes forward
//! let mut map = ProbingMap::with_hash_fn(5, |key: &u64| *key);
//!
//! map.insert(1, "one");
//! map.insert(6, "six");
//!
//! assert_eq!(map.get(&1), Some(&"one"));
//! assert_eq!(map.get(&6), Some(&"six"));
//! ```

/// Module defining the hash function injection seam
mod hash;
/// Module implementing the fixed-capacity linear-probing map
mod probing_map;
/// Utility functions and traits for the map
mod utils;

pub use hash::{DefaultKeyHash, KeyHash};
pub use probing_map::{Iter, ProbingMap};
pub use utils::MapExtensions;
