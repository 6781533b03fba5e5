//! Total lookup tables keyed by closed enums.
//!
//! A [`KeyedTable`] holds exactly one entry per enum variant. Completeness is
//! checked once when the catalog is loaded, which makes every later lookup
//! infallible.

use std::collections::BTreeMap;

use crate::domain::foundation::ValidationError;

/// A closed set of catalog keys (allocation strategies, capacity tiers, ...).
pub trait CatalogKey: Copy + Ord + std::fmt::Debug + 'static {
    /// Every variant, in canonical order.
    const ALL: &'static [Self];

    /// Configuration key used in catalog documents and error messages.
    fn key(&self) -> &'static str;

    /// Position of this variant within [`CatalogKey::ALL`].
    fn index(&self) -> usize;
}

/// One value per variant of `K`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedTable<K: CatalogKey, V> {
    entries: Vec<(K, V)>,
}

impl<K: CatalogKey, V> KeyedTable<K, V> {
    /// Builds the table from a keyed map, rejecting missing keys.
    pub fn from_map(field: &str, mut map: BTreeMap<K, V>) -> Result<Self, ValidationError> {
        let mut entries = Vec::with_capacity(K::ALL.len());
        for key in K::ALL {
            let value = map.remove(key).ok_or_else(|| {
                ValidationError::invalid_format(
                    field,
                    format!("missing entry for '{}'", key.key()),
                )
            })?;
            entries.push((*key, value));
        }
        Ok(Self { entries })
    }

    /// Returns the entry for `key`.
    pub fn get(&self, key: K) -> &V {
        &self.entries[key.index()].1
    }

    /// Iterates entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}
