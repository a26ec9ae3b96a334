//! Demonstration entry point for the probing map.
//!
//! Builds a small table with an identity hash, runs a fixed sequence of
//! inserts and removals (including a miss and a growth), and dumps the slots
//! after each phase.

use probing_map::ProbingMap;

/// Runs the fixed demonstration sequence and prints the table after each phase
fn main() {
    println!("Fixed-capacity hash table with linear probing");
    println!();

    let mut map = ProbingMap::with_hash_fn(5, |key: &u64| *key);
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(3, "three");
    map.insert(4, "four");
    map.insert(5, "five");

    println!("after inserting keys 1..=5:");
    print!("{map}");
    println!();

    match map.remove(&3) {
        Some(value) => println!("removed key 3 (value {value})"),
        None => println!("key 3 not found"),
    }
    match map.remove(&9) {
        Some(value) => println!("removed key 9 (value {value})"),
        None => println!("key 9 not found"),
    }

    println!("after removals:");
    print!("{map}");
    println!();

    // slot 3 is free again, key 8 probes straight into it
    map.insert(8, "eight");
    // the table is full along key 7's whole cyclic scan, so storage grows
    map.insert(7, "seven");

    println!("after refilling and growing (capacity {}):", map.capacity());
    print!("{map}");
}
