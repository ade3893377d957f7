//! Content-addressed registry for anonymous styles.
//!
//! Every formatted element may carry its own style value. Elements whose
//! styles are equal share one `style:style` declaration in
//! `office:automatic-styles`, named `P1`, `P2`, ... (`T`/`L` for the text and
//! list families) in first-seen order.

use super::family::StyleFamily;
use super::value::{Style, StyleValue};
use crate::common::{Error, Result};
use std::collections::HashMap;

/// A registered automatic style
#[derive(Debug, Clone)]
pub struct AutomaticStyle {
    hash: u64,
    sequence: u32,
    name: String,
    value: StyleValue,
}

impl AutomaticStyle {
    /// Generated name, e.g. `P3`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> StyleFamily {
        self.value.family()
    }

    /// Snapshot taken when the style was added
    pub fn value(&self) -> &StyleValue {
        &self.value
    }

    /// Canonical hash the entry is indexed by
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

/// Registry of automatic styles for one serialization pass.
///
/// [`add`](Self::add) stores a copy of the style. Changing the caller's style
/// afterwards does not affect the registered entry; the changed value is a
/// different key and gets its own name when it is added again.
#[derive(Debug, Default)]
pub struct AutomaticStyles {
    entries: Vec<AutomaticStyle>,
    /// Canonical hash -> entry indices. More than one index only on a hash collision.
    index: HashMap<u64, Vec<usize>>,
    counters: HashMap<StyleFamily, u32>,
}

impl AutomaticStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style and return its name.
    ///
    /// Adding a style equal to one already registered returns the existing
    /// name. Default styles are not registered and return `None`.
    pub fn add<S: Style>(&mut self, style: &S) -> Option<&str> {
        if style.is_default() {
            return None;
        }

        let hash = style.canonical_hash();
        let position = match self.lookup(hash, style) {
            Some(position) => position,
            None => {
                let counter = self.counters.entry(S::FAMILY).or_insert(0);
                *counter += 1;
                let sequence = *counter;
                let name = format!("{}{}", S::FAMILY.name_prefix(), sequence);
                tracing::trace!(family = %S::FAMILY, %name, hash, "registered automatic style");

                let position = self.entries.len();
                self.entries.push(AutomaticStyle {
                    hash,
                    sequence,
                    name,
                    value: style.clone().into_value(),
                });
                self.index.entry(hash).or_default().push(position);
                position
            },
        };
        Some(self.entries[position].name.as_str())
    }

    /// Name of a previously added style.
    ///
    /// Fails with [`Error::StyleNotRegistered`] if no equal style was added.
    pub fn name<S: Style>(&self, style: &S) -> Result<&str> {
        self.get(style)
            .map(AutomaticStyle::name)
            .ok_or(Error::StyleNotRegistered { family: S::FAMILY })
    }

    /// Entry for a previously added style
    pub fn get<S: Style>(&self, style: &S) -> Option<&AutomaticStyle> {
        self.lookup(style.canonical_hash(), style)
            .map(|position| &self.entries[position])
    }

    pub fn contains<S: Style>(&self, style: &S) -> bool {
        self.get(style).is_some()
    }

    fn lookup<S: Style>(&self, hash: u64, style: &S) -> Option<usize> {
        self.index.get(&hash)?.iter().copied().find(|&position| {
            S::from_value(&self.entries[position].value).is_some_and(|stored| stored == style)
        })
    }

    /// All entries in name order: by family, then by sequence number.
    pub fn iter(&self) -> impl Iterator<Item = &AutomaticStyle> {
        let mut sorted: Vec<&AutomaticStyle> = self.entries.iter().collect();
        sorted.sort_by_key(|entry| (entry.family(), entry.sequence));
        sorted.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
