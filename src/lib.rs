//! An ordered associative container backed by a fan-out-16 digital trie.
//!
//! Keys are mapped through an [`order::OrderTransform`] into a
//! fixed-width, unsigned-lexicographic byte representation; the trie
//! itself is addressed one 4-bit nibble at a time. Point operations
//! (`get`/`insert`/`remove`) run in time proportional to the key width,
//! not to the number of stored keys, and every value and interior node
//! is individually heap-allocated so its address is stable across
//! insertion or removal of any other key.
//!
//! ```
//! use trie16::TrieMap;
//!
//! let mut map: TrieMap<u32, &str> = TrieMap::new();
//! map.insert(7, "seven");
//! map.insert(3, "three");
//! assert_eq!(map.get(7), Some(&"seven"));
//!
//! let in_order: Vec<_> = map.iter().map(|(k, _)| k).collect();
//! assert_eq!(in_order, vec![3, 7]);
//! ```

mod cursor;
mod entry;
mod error;
mod map;
mod node;
mod order;

pub use cursor::Cursor;
pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::TrieMapError;
pub use map::{Iter, IterMut, TrieMap};
pub use order::{DefaultOrder, OrderTransform};
