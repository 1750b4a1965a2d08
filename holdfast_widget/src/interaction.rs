// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event-handling seam for widgets that respond to drags directly.

use crate::event::{Event, TweakFlags};
use crate::widget::Widget;

/// Direct event handling for an activatable widget.
///
/// An `Interaction` receives the press that activates its widget, every
/// event while the widget stays active, and lifecycle notifications around
/// selection and teardown. State private to one drag (the grab offset, the
/// value at press time) belongs inside the implementation and is dropped in
/// [`reset`](Self::reset) when the drag ends.
///
/// Only [`invoke`](Self::invoke) and [`handle`](Self::handle) are required;
/// the remaining hooks default to no-ops.
pub trait Interaction<C> {
    /// Primes the interaction from the activating press.
    fn invoke(&mut self, ctx: &mut C, widget: &Widget<C>, event: &Event);

    /// Handles one event while the widget is active.
    fn handle(&mut self, ctx: &mut C, widget: &mut Widget<C>, event: &Event, flags: TweakFlags);

    /// Reverts optimistic edits after a cancelled drag.
    ///
    /// Called before teardown, so interaction state is still available.
    fn cancel(&mut self, _ctx: &mut C, _widget: &mut Widget<C>) {}

    /// Drops per-drag state at teardown.
    fn reset(&mut self) {}

    /// Notifies the widget that its selection state changed.
    fn select(&mut self, _ctx: &mut C, _widget: &Widget<C>, _selected: bool) {}

    /// Notifies the widget that one of its property slots was rebound.
    fn rebound(&mut self, _widget: &Widget<C>, _slot: usize) {}
}
