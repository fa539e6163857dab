//! The container facade: [`TrieMap`], its iterators, and cursor-driven
//! operations.

use std::marker::PhantomData;

use crate::cursor::{ceiling, first_leaf, last_leaf, predecessor, successor, Cursor, Overflow};
use crate::entry::{Entry, OccupiedEntry, VacantEntry};
use crate::error::TrieMapError;
use crate::node::{self, Node};
use crate::order::{DefaultOrder, OrderTransform};

/// An ordered associative container over a fan-out-16 digital trie.
///
/// `K` is the key type, `V` the value type, and `O` the
/// [`OrderTransform`] that maps `K` to the byte representation the trie
/// is addressed by (defaulting to [`DefaultOrder`], which covers every
/// built-in integer and floating-point type).
///
/// Every node and value is individually heap-allocated, never stored in
/// a growable buffer, so the address of a value already in the map is
/// never invalidated by inserting or removing a different key.
pub struct TrieMap<K, V, O: OrderTransform<K> = DefaultOrder> {
    pub(crate) root: Node<V>,
    len: usize,
    _marker: PhantomData<fn() -> (K, O)>,
}

impl<K: Copy, V, O: OrderTransform<K>> TrieMap<K, V, O> {
    pub fn new() -> Self {
        TrieMap {
            root: Node::empty(),
            len: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn total_nibbles() -> usize {
        O::BYTE_LEN * 2
    }

    pub(crate) fn bump_len(&mut self) {
        self.len += 1;
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key, freeing every node and value.
    pub fn clear(&mut self) {
        self.root = Node::empty();
        self.len = 0;
    }

    pub fn contains_key(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: K) -> Option<&V> {
        let bytes = O::apply(key);
        node::find(&self.root, bytes.as_ref(), 0, Self::total_nibbles())
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let bytes = O::apply(key);
        node::find_mut(&mut self.root, bytes.as_ref(), 0, Self::total_nibbles())
    }

    /// Like [`Self::get`], but reports a missing key as
    /// [`TrieMapError::KeyNotFound`] instead of `None`.
    pub fn at(&self, key: K) -> Result<&V, TrieMapError> {
        self.get(key).ok_or(TrieMapError::KeyNotFound)
    }

    pub fn at_mut(&mut self, key: K) -> Result<&mut V, TrieMapError> {
        self.get_mut(key).ok_or(TrieMapError::KeyNotFound)
    }

    /// The cursor naming `key`, if present.
    pub fn find_cursor(&self, key: K) -> Option<Cursor<K, O>> {
        let bytes = O::apply(key);
        node::find(&self.root, bytes.as_ref(), 0, Self::total_nibbles())
            .map(|_| Cursor::new(bytes, Overflow::Normal))
    }

    /// The cursor of the smallest stored key greater than or equal to
    /// `key`, or [`Self::end`] if no such key exists.
    pub fn lower_bound(&self, key: K) -> Cursor<K, O> {
        let target = O::apply(key);
        let total = Self::total_nibbles();
        if node::find(&self.root, target.as_ref(), 0, total).is_some() {
            return Cursor::new(target, Overflow::Normal);
        }
        let mut bytes = O::Bytes::default();
        if ceiling(&self.root, target.as_ref(), bytes.as_mut(), 0, total) {
            Cursor::new(bytes, Overflow::Normal)
        } else {
            Cursor::past_end()
        }
    }

    /// The cursor of the smallest stored key strictly greater than `key`,
    /// or [`Self::end`] if no such key exists.
    pub fn upper_bound(&self, key: K) -> Cursor<K, O> {
        let target = O::apply(key);
        let total = Self::total_nibbles();
        if node::find(&self.root, target.as_ref(), 0, total).is_some() {
            let mut bytes = target;
            return if successor(&self.root, bytes.as_mut(), 0, total) {
                Cursor::new(bytes, Overflow::Normal)
            } else {
                Cursor::past_end()
            };
        }
        let mut bytes = O::Bytes::default();
        if ceiling(&self.root, target.as_ref(), bytes.as_mut(), 0, total) {
            Cursor::new(bytes, Overflow::Normal)
        } else {
            Cursor::past_end()
        }
    }

    /// Inserts `key`/`value`. If `key` was already present, the map is
    /// left unchanged and the returned bool is `false`.
    pub fn insert(&mut self, key: K, value: V) -> (Cursor<K, O>, bool) {
        self.insert_with(key, move || value)
    }

    /// As [`Self::insert`], but `make` is only called if `key` is not
    /// already present.
    pub fn insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> (Cursor<K, O>, bool) {
        let bytes = O::apply(key);
        let total = Self::total_nibbles();
        let inserted = node::insert(&mut self.root, bytes.as_ref(), 0, total, make);
        if inserted {
            self.len += 1;
        }
        (Cursor::new(bytes, Overflow::Normal), inserted)
    }

    /// Returns the value for `key`, inserting `V::default()` first if
    /// absent.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_insert_with(V::default)
    }

    /// The combined find-or-insert API: see [`Entry`].
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, O> {
        let bytes = O::apply(key);
        let total = Self::total_nibbles();
        let present = node::find(&self.root, bytes.as_ref(), 0, total).is_some();
        if present {
            Entry::Occupied(OccupiedEntry::new(self, key, bytes))
        } else {
            Entry::Vacant(VacantEntry::new(self, key, bytes))
        }
    }

    /// Removes `key`, returning its value if present.
    pub fn remove(&mut self, key: K) -> Option<V> {
        let bytes = O::apply(key);
        let total = Self::total_nibbles();
        let removed = node::remove(&mut self.root, bytes.as_ref(), 0, total);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes the key named by `cursor`, returning the successor
    /// cursor and the removed value. If `cursor` does not name a
    /// present key (it is `before_begin` or `end`), the map is
    /// unchanged and `None` is returned.
    pub fn remove_at(&mut self, cursor: Cursor<K, O>) -> (Cursor<K, O>, Option<V>) {
        let key = match cursor.key() {
            Some(k) => k,
            None => return (cursor, None),
        };
        // Computed before removal: removing `key` cannot change the byte
        // identity of any other key's cursor.
        let next = self
            .advance_cursor(cursor)
            .unwrap_or_else(|_| Cursor::past_end());
        let removed = self.remove(key);
        (next, removed)
    }

    /// Removes every key in `[first, last)`, returning the count
    /// removed.
    pub fn remove_range(&mut self, first: Cursor<K, O>, last: Cursor<K, O>) -> usize {
        let mut count = 0;
        let mut cur = first;
        while cur != last {
            let key = match cur.key() {
                Some(k) => k,
                None => break,
            };
            let next = self
                .advance_cursor(cur)
                .unwrap_or_else(|_| Cursor::past_end());
            self.remove(key);
            count += 1;
            cur = next;
        }
        count
    }

    /// The cursor of the first element, or [`Self::end`] if the map is
    /// empty.
    pub fn begin(&self) -> Cursor<K, O> {
        let mut bytes = O::Bytes::default();
        if first_leaf(&self.root, bytes.as_mut(), 0, Self::total_nibbles()) {
            Cursor::new(bytes, Overflow::Normal)
        } else {
            Cursor::past_end()
        }
    }

    /// The cursor past the last element.
    pub fn end(&self) -> Cursor<K, O> {
        Cursor::past_end()
    }

    pub(crate) fn advance_cursor(&self, cursor: Cursor<K, O>) -> Result<Cursor<K, O>, TrieMapError> {
        let total = Self::total_nibbles();
        match cursor.overflow {
            Overflow::Before => {
                let mut bytes = O::Bytes::default();
                if first_leaf(&self.root, bytes.as_mut(), 0, total) {
                    Ok(Cursor::new(bytes, Overflow::Normal))
                } else {
                    Ok(Cursor::past_end())
                }
            }
            Overflow::Normal => {
                let mut bytes = cursor.bytes;
                if successor(&self.root, bytes.as_mut(), 0, total) {
                    Ok(Cursor::new(bytes, Overflow::Normal))
                } else {
                    Ok(Cursor::past_end())
                }
            }
            Overflow::Past => Err(TrieMapError::InvariantViolated),
        }
    }

    pub(crate) fn retreat_cursor(&self, cursor: Cursor<K, O>) -> Result<Cursor<K, O>, TrieMapError> {
        let total = Self::total_nibbles();
        match cursor.overflow {
            Overflow::Past => {
                let mut bytes = O::Bytes::default();
                if last_leaf(&self.root, bytes.as_mut(), 0, total) {
                    Ok(Cursor::new(bytes, Overflow::Normal))
                } else {
                    Ok(Cursor::before_begin())
                }
            }
            Overflow::Normal => {
                let mut bytes = cursor.bytes;
                if predecessor(&self.root, bytes.as_mut(), 0, total) {
                    Ok(Cursor::new(bytes, Overflow::Normal))
                } else {
                    Ok(Cursor::before_begin())
                }
            }
            Overflow::Before => Err(TrieMapError::InvariantViolated),
        }
    }

    /// Advance `cursor` one position forward. Wraps exactly once past
    /// the last element, landing on `end()`; calling this again on an
    /// already-past-the-end cursor is a programmer error.
    pub fn advance(&self, cursor: Cursor<K, O>) -> Result<Cursor<K, O>, TrieMapError> {
        self.advance_cursor(cursor)
    }

    /// Retreat `cursor` one position backward. Mirrors [`Self::advance`].
    pub fn retreat(&self, cursor: Cursor<K, O>) -> Result<Cursor<K, O>, TrieMapError> {
        self.retreat_cursor(cursor)
    }

    pub fn iter(&self) -> Iter<'_, K, V, O> {
        Iter {
            map: self,
            front: self.begin(),
            back: self.end(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let total = Self::total_nibbles();
        let mut bytes = O::Bytes::default();
        let mut raw = Vec::with_capacity(self.len);
        node::collect_mut(&mut self.root, bytes.as_mut(), 0, total, &mut raw);
        let items = raw
            .into_iter()
            .map(|(b, v)| {
                let mut key_bytes = O::Bytes::default();
                key_bytes.as_mut().copy_from_slice(&b);
                (O::restore(&key_bytes), v)
            })
            .collect::<Vec<_>>();
        IterMut {
            inner: items.into_iter(),
        }
    }
}

impl<K: Copy, V, O: OrderTransform<K>> Default for TrieMap<K, V, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy, V: Clone, O: OrderTransform<K>> Clone for TrieMap<K, V, O> {
    fn clone(&self) -> Self {
        let mut out = TrieMap::new();
        for (k, v) in self.iter() {
            out.insert(k, v.clone());
        }
        out
    }
}

impl<K: Copy, V, O: OrderTransform<K>> std::ops::Index<K> for TrieMap<K, V, O> {
    type Output = V;

    /// Panics if `key` is not present. Unlike the original `subscript`
    /// operation this never auto-inserts; use [`Self::entry`] for that.
    fn index(&self, key: K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Copy, V, O: OrderTransform<K>> std::ops::IndexMut<K> for TrieMap<K, V, O> {
    fn index_mut(&mut self, key: K) -> &mut V {
        self.get_mut(key).expect("no entry found for key")
    }
}

/// A forward/backward iterator over `(key, &value)` pairs in ascending
/// key order.
pub struct Iter<'a, K: Copy, V, O: OrderTransform<K> = DefaultOrder> {
    map: &'a TrieMap<K, V, O>,
    front: Cursor<K, O>,
    back: Cursor<K, O>,
}

impl<'a, K: Copy, V, O: OrderTransform<K>> Iterator for Iter<'a, K, V, O> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let key = self.front.key()?;
        let total = TrieMap::<K, V, O>::total_nibbles();
        let value = node::find(&self.map.root, self.front.bytes.as_ref(), 0, total)?;
        self.front = self.map.advance_cursor(self.front).ok()?;
        Some((key, value))
    }
}

impl<'a, K: Copy, V, O: OrderTransform<K>> DoubleEndedIterator for Iter<'a, K, V, O> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.map.retreat_cursor(self.back).ok()?;
        let key = self.back.key()?;
        let total = TrieMap::<K, V, O>::total_nibbles();
        let value = node::find(&self.map.root, self.back.bytes.as_ref(), 0, total)?;
        Some((key, value))
    }
}

impl<'a, K: Copy, V, O: OrderTransform<K>> IntoIterator for &'a TrieMap<K, V, O> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A double-ended iterator over `(key, &mut value)` pairs, in ascending
/// key order.
///
/// Unlike [`Iter`], this is collected eagerly: the disjoint-borrow trick
/// that makes a single mutable pass over the trie safe (splitting each
/// node's 16 slots via `iter_mut`) does not extend to resuming from an
/// arbitrary cursor later, so there is no cheap lazy equivalent.
pub struct IterMut<'a, K, V> {
    inner: std::vec::IntoIter<(K, &'a mut V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, K: Copy, V, O: OrderTransform<K>> IntoIterator for &'a mut TrieMap<K, V, O> {
    type Item = (K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
