//! The `Entry` API: the idiomatic umbrella over the original
//! find-or-insert operations (subscript, emplace, try_emplace).

use crate::map::TrieMap;
use crate::order::OrderTransform;

/// A view into a single map slot, obtained from [`TrieMap::entry`].
pub enum Entry<'a, K: Copy, V, O: OrderTransform<K>> {
    Occupied(OccupiedEntry<'a, K, V, O>),
    Vacant(VacantEntry<'a, K, V, O>),
}

impl<'a, K: Copy, V, O: OrderTransform<K>> Entry<'a, K, V, O> {
    /// Ensures a value is present, inserting `default` if the entry was
    /// vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        self.or_insert_with(move || default)
    }

    /// As [`Self::or_insert`], but `make` is only evaluated if the entry
    /// was vacant (no construction happens on a collision).
    pub fn or_insert_with(self, make: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(occ) => occ.into_mut(),
            Entry::Vacant(vac) => vac.insert(make()),
        }
    }

    /// As [`Self::or_insert`], using `V::default()`.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    pub fn key(&self) -> K {
        match self {
            Entry::Occupied(occ) => occ.key(),
            Entry::Vacant(vac) => vac.key(),
        }
    }
}

/// An occupied [`Entry`]: the key is already present in the map.
pub struct OccupiedEntry<'a, K: Copy, V, O: OrderTransform<K>> {
    map: &'a mut TrieMap<K, V, O>,
    key: K,
    bytes: O::Bytes,
}

impl<'a, K: Copy, V, O: OrderTransform<K>> OccupiedEntry<'a, K, V, O> {
    pub(crate) fn new(map: &'a mut TrieMap<K, V, O>, key: K, bytes: O::Bytes) -> Self {
        OccupiedEntry { map, key, bytes }
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn get(&self) -> &V {
        crate::node::find(&self.map.root, self.bytes.as_ref(), 0, TrieMap::<K, V, O>::total_nibbles())
            .expect("occupied entry key must be present")
    }

    pub fn get_mut(&mut self) -> &mut V {
        crate::node::find_mut(
            &mut self.map.root,
            self.bytes.as_ref(),
            0,
            TrieMap::<K, V, O>::total_nibbles(),
        )
        .expect("occupied entry key must be present")
    }

    /// Converts the entry into a mutable reference tied to the map's
    /// own lifetime, rather than to the entry's borrow of it.
    pub fn into_mut(self) -> &'a mut V {
        let total = TrieMap::<K, V, O>::total_nibbles();
        crate::node::find_mut(&mut self.map.root, self.bytes.as_ref(), 0, total)
            .expect("occupied entry key must be present")
    }

    pub fn remove(self) -> V {
        self.map.remove(self.key).expect("occupied entry key must be present")
    }
}

/// A vacant [`Entry`]: the key is not yet present in the map.
pub struct VacantEntry<'a, K: Copy, V, O: OrderTransform<K>> {
    map: &'a mut TrieMap<K, V, O>,
    key: K,
    bytes: O::Bytes,
}

impl<'a, K: Copy, V, O: OrderTransform<K>> VacantEntry<'a, K, V, O> {
    pub(crate) fn new(map: &'a mut TrieMap<K, V, O>, key: K, bytes: O::Bytes) -> Self {
        VacantEntry { map, key, bytes }
    }

    pub fn key(&self) -> K {
        self.key
    }

    /// Inserts `value` and returns a mutable reference to it, tied to
    /// the map's own lifetime.
    pub fn insert(self, value: V) -> &'a mut V {
        let total = TrieMap::<K, V, O>::total_nibbles();
        let inserted = crate::node::insert(&mut self.map.root, self.bytes.as_ref(), 0, total, move || value);
        debug_assert!(inserted, "vacant entry's key must not already be present");
        self.map.bump_len();
        crate::node::find_mut(&mut self.map.root, self.bytes.as_ref(), 0, total)
            .expect("just inserted")
    }
}
