// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible-widget cache.

use alloc::string::String;
use hashbrown::HashMap;

/// The position of a widget within a map: group slot plus index inside it.
///
/// Addresses are ephemeral. Factories rebuild widget lists every update
/// pass, so an address is valid until the pass after the one that produced
/// it; anything that must survive regeneration is keyed by widget name
/// instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetAddr {
    /// Index of the owning group in the map's registration order.
    pub group: usize,
    /// Index of the widget within its group.
    pub index: usize,
}

/// Name-to-address index of the widgets visible this drawing cycle.
///
/// The cache is owned by the host's drawing-cycle state, not by a map, so
/// several maps sharing one region can feed a single cache. Its lifecycle
/// is explicit and asserted:
///
/// 1. [`begin`](Self::begin) at the start of an update pass empties the
///    cache and opens it for inserts.
/// 2. The update pass inserts every visible widget; reconciliation and the
///    draw passes look entries up.
/// 3. The final draw pass calls [`finish`](Self::finish), emptying the
///    cache and closing it until the next pass.
///
/// Inserting into a cache that is not open is a debug assertion and is
/// ignored in release builds; lookups outside the window simply return
/// `None`.
#[derive(Debug, Default)]
pub struct VisibleCache {
    slots: HashMap<String, WidgetAddr>,
    built: bool,
}

impl VisibleCache {
    /// Creates a closed, empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the cache for a fresh update pass, dropping stale entries.
    pub fn begin(&mut self) {
        self.slots.clear();
        self.built = true;
    }

    /// Whether the cache is currently open.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Records `name` as visible at `addr`.
    ///
    /// Re-inserting a name replaces its address.
    pub fn insert(&mut self, name: String, addr: WidgetAddr) {
        debug_assert!(self.built, "insert into a cache that was not begun");
        if self.built {
            self.slots.insert(name, addr);
        }
    }

    /// Looks up the address of a visible widget.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<WidgetAddr> {
        if !self.built {
            return None;
        }
        self.slots.get(name).copied()
    }

    /// Drops every entry addressing `group` and re-points entries for
    /// later groups one slot down.
    ///
    /// Keeps the cache valid across a group unregistration that removes
    /// the group from the map's list mid-cycle.
    pub fn remove_group(&mut self, group: usize) {
        self.slots.retain(|_, addr| addr.group != group);
        for addr in self.slots.values_mut() {
            if addr.group > group {
                addr.group -= 1;
            }
        }
    }

    /// Number of visible widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no widget is recorded as visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates `(name, addr)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, WidgetAddr)> {
        self.slots.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    /// Closes the cache at the end of the final draw pass.
    pub fn finish(&mut self) {
        debug_assert!(self.built, "finish on a cache that was not begun");
        self.slots.clear();
        self.built = false;
    }
}
