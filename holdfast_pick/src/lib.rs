// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=holdfast_pick --heading-base-level=0

//! Holdfast Pick: depth-buffer picking primitives for viewport handles.
//!
//! Spatial widget maps pick by rendering candidate handles into a small
//! id buffer around the cursor and reading back `(depth, id)` hits. This
//! crate owns the pure parts of that scheme: the hit record, the id
//! encoding that packs a widget index and a sub-part code into one `u32`,
//! the two hotspot sizes, and the resolution rules. The actual id-buffer
//! render is behind the [`PickSurface`] trait, implemented by the host.
//!
//! ## Two-pass resolution
//!
//! Picking runs twice per query. The first pass uses a generous hotspot
//! ([`HOTSPOT_OUTER`], ~7 px half-size) so small handles stay easy to grab.
//! If anything hit, a second pass repeats the render with a near-pointwise
//! hotspot ([`HOTSPOT_INNER`]) restricted to the ids seen in the first
//! pass; when the pointer is directly on a handle this overrides the coarse
//! result, so a thin handle cannot be stolen by a fat neighbor that merely
//! overlaps the outer rectangle. Within a pass the nearest depth wins and
//! equal depths go to the first-seen hit, keeping resolution deterministic.
//!
//! ```rust
//! use holdfast_pick::{base_id, resolve_two_pass, split_id, Hit};
//!
//! // Two handles overlap the outer hotspot; only the first is under the
//! // pointer itself.
//! let outer = [
//!     Hit { depth: 0.6, id: base_id(0) | 1 },
//!     Hit { depth: 0.4, id: base_id(1) | 1 },
//! ];
//! let inner = [Hit { depth: 0.6, id: base_id(0) | 1 }];
//!
//! let hit = resolve_two_pass(&outer, &inner).unwrap();
//! assert_eq!(split_id(hit.id), (0, 1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::{Point, Rect};

/// Half-size, in pixels, of the coarse first-pass hotspot.
///
/// Generous on purpose: handles are often a few pixels wide, and the first
/// pass is what makes them discoverable without pixel-exact aim.
pub const HOTSPOT_OUTER: f64 = 7.0;

/// Half-size, in pixels, of the precise second-pass hotspot.
pub const HOTSPOT_INNER: f64 = 1.4;

/// Number of low id bits carrying the sub-part code.
const PART_BITS: u32 = 8;

/// One readback entry from a pick render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Depth of the hit; smaller is nearer the viewer.
    pub depth: f32,
    /// Encoded id, as produced by [`base_id`] plus a sub-part code.
    pub id: u32,
}

/// The square hotspot rectangle of half-size `radius` centered on `center`.
#[must_use]
pub fn hotspot_rect(center: Point, radius: f64) -> Rect {
    Rect::new(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    )
}

/// The base id for the widget at `index` in the current pick pass.
///
/// Sub-part codes occupy the low 8 bits; widgets render each pickable part
/// under `base_id(index) | part` with a non-zero `part`.
#[must_use]
pub const fn base_id(index: u32) -> u32 {
    index << PART_BITS
}

/// Splits an encoded id into its widget index and sub-part code.
#[must_use]
pub const fn split_id(id: u32) -> (u32, u8) {
    (id >> PART_BITS, (id & 0xFF) as u8)
}

/// The nearest hit, with equal depths resolved to the first-seen entry.
#[must_use]
pub fn nearest_hit(hits: &[Hit]) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for &hit in hits {
        match best {
            Some(b) if hit.depth >= b.depth => {}
            _ => best = Some(hit),
        }
    }
    best
}

/// Resolves a two-pass pick.
///
/// `inner` hits whose ids never appeared in `outer` are ignored; the host's
/// second pass is a re-render of the same candidates, so an unknown id
/// means the surface returned stale data. A surviving inner hit wins,
/// otherwise the outer result stands.
#[must_use]
pub fn resolve_two_pass(outer: &[Hit], inner: &[Hit]) -> Option<Hit> {
    let known = |hit: &&Hit| outer.iter().any(|o| o.id == hit.id);
    let refined: Vec<Hit> = inner.iter().filter(known).copied().collect();
    nearest_hit(&refined).or_else(|| nearest_hit(outer))
}

/// An id-buffer render target provided by the host.
///
/// A pick query brackets widget renders between [`begin`](Self::begin) and
/// [`end`](Self::end): the map calls `begin` with the hotspot rectangle,
/// asks each candidate widget to render its pickable geometry, and reads
/// the touched `(depth, id)` pairs back from `end`. Hosts typically back
/// this with an occlusion-query or id-texture render of the rectangle.
pub trait PickSurface {
    /// Starts collecting hits inside `rect` (screen coordinates).
    fn begin(&mut self, rect: Rect);

    /// Finishes the render and returns the collected hits.
    fn end(&mut self) -> Vec<Hit>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn id_round_trip_masks_part() {
        let id = base_id(42) | 7;
        assert_eq!(split_id(id), (42, 7));
        assert_eq!(split_id(base_id(0x00FF_FFFF) | 0xFF), (0x00FF_FFFF, 0xFF));
    }

    #[test]
    fn nearest_prefers_smaller_depth() {
        let hits = [
            Hit { depth: 0.6, id: 1 },
            Hit { depth: 0.4, id: 2 },
            Hit { depth: 0.9, id: 3 },
        ];
        assert_eq!(nearest_hit(&hits), Some(Hit { depth: 0.4, id: 2 }));
    }

    #[test]
    fn nearest_ties_go_to_first_seen() {
        let hits = [
            Hit { depth: 0.5, id: 10 },
            Hit { depth: 0.5, id: 11 },
        ];
        assert_eq!(nearest_hit(&hits).map(|h| h.id), Some(10));
    }

    #[test]
    fn nearest_of_empty_is_none() {
        assert_eq!(nearest_hit(&[]), None);
    }

    #[test]
    fn inner_pass_overrides_outer() {
        let outer = [
            Hit { depth: 0.2, id: base_id(0) | 1 },
            Hit { depth: 0.8, id: base_id(1) | 1 },
        ];
        let inner = [Hit { depth: 0.8, id: base_id(1) | 1 }];
        assert_eq!(resolve_two_pass(&outer, &inner).map(|h| h.id), Some(base_id(1) | 1));
    }

    #[test]
    fn empty_inner_pass_falls_back_to_outer() {
        let outer = [Hit { depth: 0.3, id: base_id(2) | 1 }];
        assert_eq!(
            resolve_two_pass(&outer, &[]).map(|h| h.id),
            Some(base_id(2) | 1)
        );
    }

    #[test]
    fn unknown_inner_ids_are_ignored() {
        let outer = [Hit { depth: 0.3, id: base_id(0) | 1 }];
        let inner = vec![Hit { depth: 0.1, id: base_id(9) | 1 }];
        assert_eq!(
            resolve_two_pass(&outer, &inner).map(|h| h.id),
            Some(base_id(0) | 1)
        );
    }

    #[test]
    fn hotspot_rect_is_centered() {
        let rect = hotspot_rect(Point::new(100.0, 50.0), HOTSPOT_OUTER);
        assert_eq!(rect.center(), Point::new(100.0, 50.0));
        assert_eq!(rect.width(), 2.0 * HOTSPOT_OUTER);
        assert_eq!(rect.height(), 2.0 * HOTSPOT_OUTER);
    }
}
