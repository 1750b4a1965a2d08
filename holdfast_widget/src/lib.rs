// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=holdfast_widget --heading-base-level=0

//! Holdfast Widget: core records and behavior seams for interactive viewport handles.
//!
//! This crate defines what a handle *is*; its sibling `holdfast_map` defines
//! how handles are cached, picked, highlighted, and activated per region.
//! The split keeps widget authorship free of interaction bookkeeping: a
//! widget couples plain data (origin, colors, flags) with small capability
//! traits, and everything stateful lives in the map.
//!
//! ## Concepts
//!
//! - [`Widget`]: one handle. Owns a mandatory [`Shape`] (drawing) plus
//!   optional [`Hit2d`] (analytic picking), [`Hit3d`] (depth-buffer
//!   picking), and [`Interaction`] (direct drag handling) capabilities, a
//!   command binding with [`Params`], and externally bound property slots.
//! - [`WidgetGroup`] / [`GroupKind`]: widgets are regenerated every update
//!   pass by their group's factory. Identity across regeneration is by
//!   *name*: groups prefix and uniquify the raw names factories attach
//!   widgets under.
//! - [`Event`] / [`ModalSignal`]: the minimal input vocabulary hosts
//!   translate into. Keymaps stay on the host side; in-drag keybindings
//!   arrive as pre-translated signals.
//! - [`host`]: per-concern integration traits ([`Dispatcher`](host::Dispatcher),
//!   [`View`](host::View), [`Shell`](host::Shell)) implemented by the
//!   application context type that all widget code is generic over.
//!
//! ## Example
//!
//! ```rust
//! use holdfast_widget::{GroupKind, GroupWidgets, Shape, Widget, WidgetFlags, WidgetGroup};
//!
//! // The application context; real hosts carry draw targets and state here.
//! struct App;
//!
//! #[derive(Debug)]
//! struct Ring;
//!
//! impl Shape<App> for Ring {
//!     fn draw(&self, _widget: &Widget<App>, _app: &mut App) {
//!         // Issue draw calls through the app context.
//!     }
//! }
//!
//! struct RotateGroup;
//!
//! impl GroupKind<App> for RotateGroup {
//!     fn name(&self) -> &str {
//!         "rotate"
//!     }
//!
//!     fn populate(&self, _app: &App, group: &mut GroupWidgets<'_, App>) {
//!         let mut ring = Widget::new(Ring);
//!         ring.set_flags(WidgetFlags::SCALE_VIEW, true);
//!         group.attach("ring", ring);
//!     }
//! }
//!
//! let mut group = WidgetGroup::new(RotateGroup);
//! group.populate(&App);
//! assert_eq!(group.widgets()[0].name(), "rotate_ring");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod host;

mod event;
mod group;
mod hit;
mod interaction;
mod params;
mod shape;
mod widget;

pub use event::{Button, Event, ModalSignal, Modifiers, TweakFlags};
pub use group::{GroupKind, GroupWidgets, WidgetGroup};
pub use hit::{Hit2d, Hit3d};
pub use interaction::Interaction;
pub use params::{Params, Value};
pub use shape::Shape;
pub use widget::{CommandBinding, Widget, WidgetFlags};
