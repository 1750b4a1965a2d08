// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing seam between a widget and its host.

use crate::host::CursorIcon;
use crate::widget::Widget;
use glam::Vec3;

/// How a widget presents itself.
///
/// Every widget owns exactly one `Shape`. The shape reads the widget's
/// geometry, colors, and derived scale and issues whatever draw calls the
/// application context `C` exposes. The two optional hooks let a shape refine
/// view-dependent behavior without a second trait object.
pub trait Shape<C> {
    /// Draws the widget into the host context.
    fn draw(&self, widget: &Widget<C>, ctx: &mut C);

    /// The world-space point used when computing the widget's
    /// constant-screen-size scale.
    ///
    /// Defaults to the widget origin; shapes whose visual bulk sits away
    /// from the origin (an arrow head, an offset ring) can override this so
    /// the scale is sampled where the widget actually appears.
    fn scale_anchor(&self, widget: &Widget<C>) -> Vec3 {
        widget.origin
    }

    /// The cursor to show while this widget is highlighted.
    ///
    /// `None` leaves the host's default cursor in place.
    fn cursor(&self, _widget: &Widget<C>) -> Option<CursorIcon> {
        None
    }
}
