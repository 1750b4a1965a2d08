// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precision-aware drag tracking.

use holdfast_widget::TweakFlags;
use kurbo::{Point, Vec2};

/// Damping applied to per-event deltas while precision mode is held.
pub const PRECISION_FACTOR: f64 = 0.1;

/// Tracks a pointer drag from its anchor press.
///
/// Interactions embed one of these to turn raw motion events into usable
/// deltas. Per-event deltas honor the `PRECISE` flag by damping movement;
/// the total offset is always reported unscaled so toggling precision
/// mid-drag never jumps state built on accumulated deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTrack {
    /// Position of the anchoring press, if a drag is in progress.
    pub start_pos: Option<Point>,
    /// Most recently observed position.
    pub last_pos: Option<Point>,
}

impl DragTrack {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start_pos: None,
            last_pos: None,
        }
    }

    /// Anchors a drag at `pos`.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Advances to `pos`, returning the delta since the last position.
    ///
    /// The delta is damped by [`PRECISION_FACTOR`] while `flags` carries
    /// `PRECISE`. Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point, flags: TweakFlags) -> Option<Vec2> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        let mut delta = pos - last;
        if flags.contains(TweakFlags::PRECISE) {
            delta *= PRECISION_FACTOR;
        }
        Some(delta)
    }

    /// The unscaled offset of `pos` from the anchoring press.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        Some(pos - self.start_pos?)
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Ends the drag, returning the tracker to idle.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }
}
