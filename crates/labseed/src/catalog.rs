//! Two-level catalog (category → items) and sampling over it.
//!
//! Two strategies, kept separate on purpose:
//! - `sample_unique`: uniform over the flattened `(category, item)` list,
//!   without replacement, in acceptance order.
//! - `sample_pair`: uniform category, then uniform item inside it. Items in
//!   small categories come up more often than items in large ones; tests that
//!   count frequencies must expect that skew.

use crate::error::SampleError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Named list of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
}

/// Ordered category → items mapping with unique category names.
///
/// Serialized as a JSON object; document order is preserved on load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `items` to category `name`, creating it at the end if missing.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(cat) => cat.items.extend(items),
            None => self.categories.push(Category { name, items }),
        }
    }

    pub fn with<I, S>(mut self, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, items);
        self
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Distinct `(category, item)` pairs in catalog order. Repeated items
    /// within one category collapse to their first occurrence.
    pub fn flatten(&self) -> Vec<CatalogPick> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut out = Vec::new();
        for cat in &self.categories {
            for item in &cat.items {
                if seen.insert((cat.name.as_str(), item.as_str())) {
                    out.push(CatalogPick::new(&cat.name, item));
                }
            }
        }
        out
    }

    /// `true` when no category has items.
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.items.is_empty())
    }
}

impl<K, V, S> FromIterator<(K, V)> for Catalog
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        for (name, items) in iter {
            catalog.insert(name, items);
        }
        catalog
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for cat in &self.categories {
            map.serialize_entry(&cat.name, &cat.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category name to item list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
                let mut catalog = Catalog::new();
                while let Some((name, items)) = access.next_entry::<String, Vec<String>>()? {
                    catalog.insert(name, items);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// One `(category, item)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatalogPick {
    pub category: String,
    pub item: String,
}

impl CatalogPick {
    pub fn new(category: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            item: item.into(),
        }
    }
}

impl fmt::Display for CatalogPick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.category, self.item)
    }
}

/// Validate a signed subset size coming from outside (CLI, config).
pub fn checked_limit(limit: i64) -> Result<usize, SampleError> {
    if limit < 0 {
        return Err(SampleError::InvalidLimit { requested: limit });
    }
    Ok(usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Up to `limit` distinct pairs, drawn uniformly from the flattened catalog.
///
/// Returns `min(limit, distinct pairs)` picks in the order they were first
/// accepted. Re-drawn duplicates are discarded.
pub fn sample_unique<R: Rng>(rng: &mut R, catalog: &Catalog, limit: usize) -> Vec<CatalogPick> {
    let all = catalog.flatten();
    let target = limit.min(all.len());
    // Pairs are distinct after flattening, so the index is the pair's key.
    let mut seen: HashSet<usize> = HashSet::with_capacity(target);
    let mut out = Vec::with_capacity(target);
    while out.len() < target {
        let i = rng.gen_range(0..all.len());
        if seen.insert(i) {
            out.push(all[i].clone());
        }
    }
    out
}

/// Uniform non-empty category, then uniform item within it.
pub fn sample_pair<R: Rng>(rng: &mut R, catalog: &Catalog) -> Result<CatalogPick, SampleError> {
    let non_empty: Vec<&Category> = catalog
        .categories
        .iter()
        .filter(|c| !c.items.is_empty())
        .collect();
    let cat = non_empty.choose(rng).ok_or(SampleError::EmptyCatalog)?;
    let item = cat.items.choose(rng).ok_or(SampleError::EmptyCatalog)?;
    Ok(CatalogPick::new(&cat.name, item))
}
