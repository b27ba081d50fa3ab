//! Insertion-ordered string set used for tips and warnings.

use serde::Serialize;

/// A list of strings that silently drops exact duplicates.
///
/// Order of first insertion is preserved, so output reads in the order the
/// scoring rules produced it.
///
/// # Examples
/// ```
/// use etchant_core::UniqueList;
///
/// let mut tips = UniqueList::new();
/// assert!(tips.insert("start with short etch times"));
/// assert!(!tips.insert("start with short etch times"));
/// assert_eq!(tips.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UniqueList {
    items: Vec<String>,
}

impl UniqueList {
    /// Construct an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `item` unless an identical entry exists.
    ///
    /// Returns `true` when the item was added.
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let candidate = item.into();
        if self.contains(&candidate) {
            return false;
        }
        self.items.push(candidate);
        true
    }

    /// Report whether an identical entry exists.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    /// Report whether any entry contains `needle` as a substring.
    #[must_use]
    pub fn any_contains(&self, needle: &str) -> bool {
        self.items.iter().any(|existing| existing.contains(needle))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Borrow the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Consume the list and return the entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: Into<String>> FromIterator<S> for UniqueList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<S: Into<String>> Extend<S> for UniqueList {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a> IntoIterator for &'a UniqueList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
