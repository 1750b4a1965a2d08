// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-testing seams.
//!
//! Widgets advertise at most one of each: an analytic screen-space test
//! ([`Hit2d`]) used by flat maps, and an id-buffer render hook ([`Hit3d`])
//! used by spatial maps whose picking runs through the host's depth buffer.

use crate::event::Event;
use crate::widget::Widget;

/// Analytic screen-space hit testing.
pub trait Hit2d<C> {
    /// Tests `event` against the widget.
    ///
    /// Returns the hit sub-part code, or `0` for a miss. Sub-part codes are
    /// widget-defined; a simple handle uses a single non-zero code, while a
    /// composite widget distinguishes its grab regions.
    fn intersect(&self, ctx: &C, widget: &Widget<C>, event: &Event) -> u8;
}

/// Id-buffer rendering for depth-based picking.
pub trait Hit3d<C> {
    /// Renders the widget's pickable geometry into the host's pick surface.
    ///
    /// Each drawn sub-part must carry the id `base_id | part` where `part`
    /// is its non-zero sub-part code. The low 8 bits of `base_id` are zero;
    /// the remaining bits identify the widget within the current pick pass.
    fn render_id(&self, ctx: &mut C, widget: &Widget<C>, base_id: u32);
}
