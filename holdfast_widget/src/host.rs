// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration traits implemented by the embedding application.
//!
//! A widget map is generic over one application context type `C`. Rather than
//! demanding a monolithic context trait, each map operation bounds `C` by the
//! small per-concern traits below, so hosts implement exactly what the
//! operations they call require. A command-line inspector that never shows a
//! cursor implements [`Dispatcher`] and nothing else; a full viewport
//! implements all of them on its frame context.

use crate::params::Params;
use glam::Vec3;

/// How a command should be run by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchMode {
    /// Interactive invocation; the command may take over the event stream.
    Invoke,
    /// Direct execution with the given parameters only.
    Exec,
}

/// Cursor icons a widget can request while highlighted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorIcon {
    /// The host's standard arrow cursor.
    #[default]
    Default,
    /// A crosshair.
    Crosshair,
    /// A four-way move cursor.
    Move,
    /// An open or grabbing hand.
    Hand,
    /// Horizontal resize.
    ResizeEw,
    /// Vertical resize.
    ResizeNs,
}

/// Command lookup and invocation.
///
/// Returns `false` when the named command does not exist or fails to start;
/// the caller rolls back any optimistic activation state in that case.
pub trait Dispatcher {
    /// Runs the named command with the given parameter block.
    fn invoke(&mut self, name: &str, mode: DispatchMode, params: &Params) -> bool;
}

/// Viewport queries for view-dependent widget scaling.
pub trait View {
    /// The size of one pixel in world units at `origin`.
    ///
    /// Used to keep handles at a constant on-screen size regardless of how
    /// far from the camera they sit.
    fn pixel_size_at(&self, origin: Vec3) -> f32;
}

/// Window-system services the interaction layer drives.
pub trait Shell {
    /// Replaces the pointer cursor.
    fn set_cursor(&mut self, icon: CursorIcon);
    /// Requests a redraw of the region owning the widgets.
    fn request_redraw(&mut self);
    /// Requests a synthetic pointer event at the current position, so
    /// highlight state is recomputed without waiting for real motion.
    fn request_pointer_refresh(&mut self);
}
