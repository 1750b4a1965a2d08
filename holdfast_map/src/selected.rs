// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered set of selected widget names.

use alloc::string::String;
use alloc::vec::Vec;

/// Selected widget names in selection order.
///
/// Purely the bookkeeping half of selection: membership and order. Keeping
/// widget `SELECT` flags in lockstep with this set is the owning map's job,
/// as is shrinking the set when an update pass fails to regenerate a
/// selected widget. Order is preserved across removals because the draw
/// pass renders selected widgets last, in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedSet {
    items: Vec<String>,
}

impl SelectedSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of selected widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected names in selection order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.items
    }

    /// Whether `name` is selected.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|n| n == name)
    }

    /// The position of `name` in selection order.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|n| n == name)
    }

    pub(crate) fn insert(&mut self, name: String) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.items.push(name);
        true
    }

    /// Appends without the membership scan; the caller must know `name` is
    /// absent.
    pub(crate) fn push(&mut self, name: String) {
        self.items.push(name);
    }

    pub(crate) fn remove(&mut self, name: &str) -> bool {
        match self.position_of(name) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.items.retain(|name| keep(name));
    }
}
