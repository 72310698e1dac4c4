//! Persistent ordered dictionary.
//!
//! [`PersistentDict`] is an association list of [`Tuple`]s kept sorted by
//! key, with every key present at most once. It is built directly on
//! [`PersistentList`], so updates copy only the entries in front of the
//! affected key and share the rest.
//!
//! # Examples
//!
//! ```rust
//! use rosary::persistent::PersistentDict;
//!
//! let animals = PersistentDict::new()
//!     .insert("Tom", "cat")
//!     .insert("Jerry", "mouse");
//!
//! assert_eq!(animals.get(&"Tom"), Some(&"cat"));
//! assert_eq!(animals.to_string(), "[(Jerry, mouse), (Tom, cat)]");
//!
//! // Structural sharing: the original dictionary is preserved
//! let renamed = animals.insert("Tom", "tiger");
//! assert_eq!(animals.get(&"Tom"), Some(&"cat"));
//! assert_eq!(renamed.get(&"Tom"), Some(&"tiger"));
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::list::PersistentList;
use crate::control::{Maybe, Tuple};
use crate::typeclass::{Monoid, Semigroup};

/// A persistent dictionary with unique, ordered keys.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PersistentDict<K, V> {
    entries: PersistentList<Tuple<K, V>>,
}

impl<K, V> PersistentDict<K, V> {
    /// Creates an empty dictionary.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: PersistentList::new(),
        }
    }

    /// Creates a dictionary with one entry.
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        Self {
            entries: PersistentList::singleton(Tuple::pair(key, value)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries as an association list sorted by key.
    ///
    /// The list shares its nodes with the dictionary.
    #[inline]
    #[must_use]
    pub fn to_list(&self) -> PersistentList<Tuple<K, V>> {
        self.entries.clone()
    }

    /// Iterates over `(key, value)` references in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries
            .iter()
            .map(|entry| (entry.first(), entry.second()))
    }

    /// Folds over the entries from the lowest key to the highest.
    pub fn fold_left<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &K, &V) -> B,
    {
        self.iter()
            .fold(init, |accumulator, (key, value)| function(accumulator, key, value))
    }

    /// Folds over the entries from the highest key to the lowest.
    pub fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&K, &V, B) -> B,
    {
        let entries: Vec<(&K, &V)> = self.iter().collect();
        entries
            .into_iter()
            .rev()
            .fold(init, |accumulator, (key, value)| function(key, value, accumulator))
    }

    /// Walks two dictionaries in key order, calling `left_only`, `both` or
    /// `right_only` for every key depending on where it appears.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::persistent::PersistentDict;
    ///
    /// let left: PersistentDict<i32, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
    /// let right: PersistentDict<i32, char> = [(2, 'x'), (3, 'y')].into_iter().collect();
    ///
    /// let trace = left.merge(
    ///     &right,
    ///     String::new(),
    ///     |key, _, accumulator| format!("{accumulator}L{key}"),
    ///     |key, _, _, accumulator| format!("{accumulator}B{key}"),
    ///     |key, _, accumulator| format!("{accumulator}R{key}"),
    /// );
    /// assert_eq!(trace, "L1B2R3");
    /// ```
    pub fn merge<W, R, FL, FB, FR>(
        &self,
        other: &PersistentDict<K, W>,
        init: R,
        mut left_only: FL,
        mut both: FB,
        mut right_only: FR,
    ) -> R
    where
        K: Ord,
        FL: FnMut(&K, &V, R) -> R,
        FB: FnMut(&K, &V, &W, R) -> R,
        FR: FnMut(&K, &W, R) -> R,
    {
        let mut lefts = self.entries.iter().peekable();
        let mut result = init;

        for right in &other.entries {
            while let Some(left) = lefts.next_if(|left| left.first() < right.first()) {
                result = left_only(left.first(), left.second(), result);
            }
            result = match lefts.next_if(|left| left.first() == right.first()) {
                Some(left) => both(left.first(), left.second(), right.second(), result),
                None => right_only(right.first(), right.second(), result),
            };
        }

        lefts.fold(result, |accumulator, left| {
            left_only(left.first(), left.second(), accumulator)
        })
    }
}

impl<K: Ord, V> PersistentDict<K, V> {
    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .take_while(|entry| entry.first() <= key)
            .find(|entry| entry.first() == key)
            .map(Tuple::second)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K: Ord + Clone, V: Clone> PersistentDict<K, V> {
    /// Builds a dictionary from an association list. When a key repeats,
    /// the later entry wins.
    #[must_use]
    pub fn from_list(list: &PersistentList<Tuple<K, V>>) -> Self {
        let mut sorted = list.to_vec();
        sorted.sort_by(|first, second| first.first().cmp(second.first()));

        let mut unique: Vec<Tuple<K, V>> = Vec::with_capacity(sorted.len());
        for entry in sorted {
            if unique.last().is_some_and(|last| last.first() == entry.first()) {
                unique.pop();
            }
            unique.push(entry);
        }

        Self {
            entries: PersistentList::build_from_vec(unique),
        }
    }

    /// Returns the keys, lowest first.
    #[must_use]
    pub fn keys(&self) -> PersistentList<K> {
        self.entries.map(|entry| entry.first().clone())
    }

    /// Returns the values in key order.
    #[must_use]
    pub fn values(&self) -> PersistentList<V> {
        self.entries.map(|entry| entry.second().clone())
    }

    /// Splits the entries around `key`: those with smaller keys, the value
    /// stored under `key` if any, and the entries with greater keys. The
    /// last part is shared, not copied.
    fn split_around(
        &self,
        key: &K,
    ) -> (Vec<Tuple<K, V>>, Option<V>, PersistentList<Tuple<K, V>>) {
        let mut smaller = Vec::new();
        let mut rest = self.entries.clone();

        loop {
            let Some((entry, tail)) = rest.uncons().map(|(entry, tail)| (entry.clone(), tail))
            else {
                return (smaller, None, rest);
            };
            match entry.first().cmp(key) {
                Ordering::Less => {
                    smaller.push(entry);
                    rest = tail;
                }
                Ordering::Equal => {
                    let (_, value) = entry.into_parts();
                    return (smaller, Some(value), tail);
                }
                Ordering::Greater => return (smaller, None, rest),
            }
        }
    }

    fn rebuild(smaller: Vec<Tuple<K, V>>, greater: PersistentList<Tuple<K, V>>) -> Self {
        let entries = smaller
            .into_iter()
            .rev()
            .fold(greater, |accumulator, entry| accumulator.cons(entry));
        Self { entries }
    }

    /// Inserts an entry, replacing the value of an existing key.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        let (smaller, _, greater) = self.split_around(&key);
        Self::rebuild(smaller, greater.cons(Tuple::pair(key, value)))
    }

    /// Removes `key`; returns an unchanged copy when it is absent.
    #[must_use]
    pub fn remove(&self, key: &K) -> Self {
        match self.split_around(key) {
            (smaller, Some(_), greater) => Self::rebuild(smaller, greater),
            (_, None, _) => self.clone(),
        }
    }

    /// Replaces the value under `key` with the result of `function`.
    ///
    /// The function receives the current value (or `Nothing`); returning
    /// `Nothing` removes the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::control::Maybe;
    /// use rosary::persistent::PersistentDict;
    ///
    /// let counts = PersistentDict::singleton("a", 1);
    /// let increment = |current: Maybe<i32>| Maybe::Just(current.with_default(0) + 1);
    ///
    /// let counts = counts.update("a", increment).update("b", increment);
    /// assert_eq!(counts.to_string(), "[(a, 2), (b, 1)]");
    ///
    /// let counts = counts.update("a", |_| Maybe::Nothing);
    /// assert!(!counts.contains_key(&"a"));
    /// ```
    #[must_use]
    pub fn update<F>(&self, key: K, function: F) -> Self
    where
        F: FnOnce(Maybe<V>) -> Maybe<V>,
    {
        let (smaller, current, greater) = self.split_around(&key);
        match function(current.into()) {
            Maybe::Just(value) => Self::rebuild(smaller, greater.cons(Tuple::pair(key, value))),
            Maybe::Nothing => Self::rebuild(smaller, greater),
        }
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Combines two dictionaries. On a key collision the entry of `other` wins.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let entries = self.merge(
            other,
            Vec::with_capacity(self.len() + other.len()),
            |key, value, accumulator| push_entry(accumulator, key, value),
            |key, _, value, accumulator| push_entry(accumulator, key, value),
            |key, value, accumulator| push_entry(accumulator, key, value),
        );
        Self {
            entries: PersistentList::build_from_vec(entries),
        }
    }

    /// Keeps the entries of `self` whose keys also appear in `other`.
    #[must_use]
    pub fn intersect<W>(&self, other: &PersistentDict<K, W>) -> Self {
        let entries = self.merge(
            other,
            Vec::new(),
            |_, _, accumulator| accumulator,
            |key, value, _, accumulator| push_entry(accumulator, key, value),
            |_, _, accumulator| accumulator,
        );
        Self {
            entries: PersistentList::build_from_vec(entries),
        }
    }

    /// Keeps the entries of `self` whose keys do not appear in `other`.
    #[must_use]
    pub fn diff<W>(&self, other: &PersistentDict<K, W>) -> Self {
        let entries = self.merge(
            other,
            Vec::new(),
            |key, value, accumulator| push_entry(accumulator, key, value),
            |_, _, _, accumulator| accumulator,
            |_, _, accumulator| accumulator,
        );
        Self {
            entries: PersistentList::build_from_vec(entries),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Keeps the entries for which `predicate(key, value)` holds.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        Self {
            entries: self
                .entries
                .filter(|entry| predicate(entry.first(), entry.second())),
        }
    }

    /// Splits into the entries that satisfy `predicate` and those that do not.
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&K, &V) -> bool,
    {
        let (pass, fail) = self
            .entries
            .partition(|entry| predicate(entry.first(), entry.second()));
        (Self { entries: pass }, Self { entries: fail })
    }

    /// Applies a function to every value, keeping the keys.
    #[must_use]
    pub fn map<W, F>(&self, mut function: F) -> PersistentDict<K, W>
    where
        F: FnMut(&V) -> W,
    {
        PersistentDict {
            entries: self
                .entries
                .map(|entry| Tuple::pair(entry.first().clone(), function(entry.second()))),
        }
    }

    /// Copies the entries into a standard `HashMap`.
    #[must_use]
    pub fn to_hash_map(&self) -> HashMap<K, V>
    where
        K: Hash,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

fn push_entry<K: Clone, V: Clone>(
    mut accumulator: Vec<Tuple<K, V>>,
    key: &K,
    value: &V,
) -> Vec<Tuple<K, V>> {
    accumulator.push(Tuple::pair(key.clone(), value.clone()));
    accumulator
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for PersistentDict<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> FromIterator<(K, V)> for PersistentDict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries: PersistentList<Tuple<K, V>> = iter.into_iter().map(Tuple::from).collect();
        Self::from_list(&entries)
    }
}

impl<K: Ord + Clone, V: Clone> From<HashMap<K, V>> for PersistentDict<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PersistentDict<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for PersistentDict<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.entries, formatter)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<K: Ord + Clone, V: Clone> Semigroup for PersistentDict<K, V> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }
}

impl<K: Ord + Clone, V: Clone> Monoid for PersistentDict<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for PersistentDict<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentDictVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for PersistentDictVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord + Clone,
    V: serde::Deserialize<'de> + Clone,
{
    type Value = PersistentDict<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    /// Duplicate keys keep the last value, as with `from_list`.
    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(entries.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for PersistentDict<K, V>
where
    K: serde::Deserialize<'de> + Ord + Clone,
    V: serde::Deserialize<'de> + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(PersistentDictVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
