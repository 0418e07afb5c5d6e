//! Property maps bind per-vertex or per-edge values without coupling the
//! traversal engines to any particular container. Engines read and write
//! auxiliary state (colors, weights, distances, predecessors) exclusively
//! through these traits; the maps themselves are allocated and owned by the
//! caller.
//!
//! Each backend chooses an absent-key policy: fail with
//! [`Error::KeyNotFound`](crate::Error::KeyNotFound), or produce a default.
//! Color and distance maps are normally given a default (`Color::White`,
//! an "infinite" distance); weight maps are not, so a missing edge weight
//! surfaces as an error instead of a silently wrong traversal.

use std::{collections::HashMap, fmt::Debug, hash::Hash, marker::PhantomData};

use crate::error::{Error, Result};

/// Read access to a key-to-value binding.
pub trait ReadPropertyMap<K, V> {
    /// Looks up the value bound to `key`, or the map's default for keys
    /// with no binding. Maps without a default policy fail instead.
    fn get(&self, key: &K) -> Result<V>;
}

/// Read/write access to a key-to-value binding.
pub trait ReadWritePropertyMap<K, V>: ReadPropertyMap<K, V> {
    /// Binds `value` to `key`, replacing any previous binding.
    fn put(&mut self, key: K, value: V);
}

/// A `HashMap`-backed property map with an optional default-value policy.
#[derive(Clone, Debug)]
pub struct AssocPropertyMap<K, V> {
    entries: HashMap<K, V>,
    default: Option<V>,
}

impl<K, V> AssocPropertyMap<K, V> {
    /// Creates a map with no default policy; reading an unbound key fails.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            default: None,
        }
    }

    /// Creates a map that yields a copy of `default` for unbound keys.
    pub fn with_default(default: V) -> Self {
        Self {
            entries: HashMap::new(),
            default: Some(default),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the explicitly bound entries. Keys only ever read
    /// through the default policy do not appear here.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> HashMap<K, V> {
        self.entries
    }
}

impl<K, V> Default for AssocPropertyMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for AssocPropertyMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            default: None,
        }
    }
}

impl<K, V> ReadPropertyMap<K, V> for AssocPropertyMap<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    fn get(&self, key: &K) -> Result<V> {
        self.entries
            .get(key)
            .or(self.default.as_ref())
            .cloned()
            .ok_or_else(|| Error::key_not_found(key))
    }
}

impl<K, V> ReadWritePropertyMap<K, V> for AssocPropertyMap<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    fn put(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }
}

/// A read-only map yielding the same value for every key.
#[derive(Clone, Debug)]
pub struct ConstPropertyMap<V> {
    value: V,
}

impl<V> ConstPropertyMap<V> {
    pub fn new(value: V) -> Self {
        Self { value }
    }
}

impl<K, V> ReadPropertyMap<K, V> for ConstPropertyMap<V>
where
    V: Clone,
{
    fn get(&self, _key: &K) -> Result<V> {
        Ok(self.value.clone())
    }
}

/// A read-only map computing its values through a closure.
pub struct FnPropertyMap<K, V, F> {
    func: F,
    marker: PhantomData<fn(&K) -> V>,
}

impl<K, V, F> FnPropertyMap<K, V, F>
where
    F: Fn(&K) -> V,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            marker: PhantomData,
        }
    }
}

impl<K, V, F> ReadPropertyMap<K, V> for FnPropertyMap<K, V, F>
where
    F: Fn(&K) -> V,
{
    fn get(&self, key: &K) -> Result<V> {
        Ok((self.func)(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assoc_map_without_default_fails_on_unbound_key() {
        let mut map: AssocPropertyMap<u32, &str> = AssocPropertyMap::new();
        map.put(1, "one");
        assert_eq!(map.get(&1), Ok("one"));
        assert_eq!(map.get(&2), Err(Error::key_not_found(2)));
    }

    #[test]
    fn assoc_map_default_policy_covers_unbound_keys() {
        let mut map = AssocPropertyMap::with_default(0u64);
        assert_eq!(map.get(&"anything"), Ok(0));
        map.put("bound", 7);
        assert_eq!(map.get(&"bound"), Ok(7));
        // Defaulted reads are not recorded as entries.
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn put_replaces_previous_binding() {
        let mut map = AssocPropertyMap::new();
        map.put('a', 1);
        map.put('a', 2);
        assert_eq!(map.get(&'a'), Ok(2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn const_map_ignores_the_key() {
        let map = ConstPropertyMap::new(42u32);
        assert_eq!(ReadPropertyMap::<u8, _>::get(&map, &0), Ok(42));
        assert_eq!(ReadPropertyMap::<&str, _>::get(&map, &"x"), Ok(42));
    }

    #[test]
    fn fn_map_computes_values() {
        let map = FnPropertyMap::new(|k: &u32| k * 10);
        assert_eq!(map.get(&3), Ok(30));
    }
}
