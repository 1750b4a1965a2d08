// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget groups and their factory descriptors.
//!
//! Widgets never live on their own: each belongs to a group, and a group is
//! owned by its registered [`GroupKind`], a descriptor combining a stable
//! name, a visibility predicate, and the factory that rebuilds the group's
//! widgets from application state. Maps re-run factories every update pass,
//! so widget *identity* rests entirely on names: a factory that attaches a
//! handle under the same raw name each pass produces the "same" widget as
//! far as highlight and selection continuity are concerned.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::widget::Widget;

/// A registered group descriptor.
pub trait GroupKind<C> {
    /// The group's stable name, used as a prefix for its widgets' names.
    fn name(&self) -> &str;

    /// Whether the group applies to the current application state.
    ///
    /// A group whose predicate fails is skipped whole: its widgets are
    /// neither regenerated, cached, drawn, nor picked until it passes again.
    fn poll(&self, _ctx: &C) -> bool {
        true
    }

    /// Rebuilds the group's widgets from application state.
    ///
    /// Called with an empty group on every update pass; attach one widget
    /// per handle the group currently wants on screen.
    fn populate(&self, ctx: &C, group: &mut GroupWidgets<'_, C>);
}

/// A live widget group: the descriptor plus the widgets it produced.
pub struct WidgetGroup<C> {
    kind: Box<dyn GroupKind<C>>,
    widgets: Vec<Widget<C>>,
}

impl<C> WidgetGroup<C> {
    /// Creates an empty group for `kind`.
    pub fn new(kind: impl GroupKind<C> + 'static) -> Self {
        Self {
            kind: Box::new(kind),
            widgets: Vec::new(),
        }
    }

    /// The group's descriptor name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// Runs the descriptor's visibility predicate.
    #[must_use]
    pub fn poll(&self, ctx: &C) -> bool {
        self.kind.poll(ctx)
    }

    /// Runs the factory, appending fresh widgets to the group.
    pub fn populate(&mut self, ctx: &C) {
        let Self { kind, widgets } = self;
        let mut group = GroupWidgets {
            prefix: kind.name(),
            widgets,
        };
        kind.populate(ctx, &mut group);
    }

    /// The group's widgets.
    #[must_use]
    pub fn widgets(&self) -> &[Widget<C>] {
        &self.widgets
    }

    /// Mutable access to the group's widgets.
    pub fn widgets_mut(&mut self) -> &mut Vec<Widget<C>> {
        &mut self.widgets
    }
}

impl<C> fmt::Debug for WidgetGroup<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetGroup")
            .field("name", &self.kind.name())
            .field("widgets", &self.widgets)
            .finish_non_exhaustive()
    }
}

/// The attach point factories receive in [`GroupKind::populate`].
pub struct GroupWidgets<'a, C> {
    prefix: &'a str,
    widgets: &'a mut Vec<Widget<C>>,
}

impl<C> GroupWidgets<'_, C> {
    /// Attaches `widget` under `raw_name`.
    ///
    /// The stored name is `{group}_{raw_name}`; a collision with a widget
    /// already attached this pass gets a numeric `.001`-style suffix, so
    /// every widget in the group ends up uniquely addressable.
    pub fn attach(&mut self, raw_name: &str, mut widget: Widget<C>) {
        let name = self.unique_name(format!("{}_{raw_name}", self.prefix));
        widget.assign_name(name);
        self.widgets.push(widget);
    }

    /// Number of widgets attached so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether no widget has been attached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn unique_name(&self, base: String) -> String {
        let taken = |name: &str| self.widgets.iter().any(|w| w.name() == name);
        if !taken(&base) {
            return base;
        }
        let mut counter = 1_u32;
        loop {
            let candidate = format!("{base}.{counter:03}");
            if !taken(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

impl<C> fmt::Debug for GroupWidgets<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupWidgets")
            .field("prefix", &self.prefix)
            .field("len", &self.widgets.len())
            .finish()
    }
}
