// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=holdfast_map --heading-base-level=0

//! Holdfast Map: per-region bookkeeping for interactive viewport handles.
//!
//! A [`WidgetMap`] owns the widget groups registered for one region and
//! the interaction state tying them together: which widget is hovered
//! ([highlighted](WidgetMap::highlighted)), which one a drag is running on
//! ([active](WidgetMap::active)), and which are [selected](WidgetMap::selected).
//! Widgets themselves are rebuilt from application state on every update
//! pass by their group factories; everything that must survive rebuilding
//! is keyed by widget name and reconciled by the map.
//!
//! ## The drawing cycle
//!
//! Hosts own a [`VisibleCache`] per region and drive a strict cycle:
//!
//! 1. [`VisibleCache::begin`] opens the cache.
//! 2. [`WidgetMap::update`] regenerates widgets, recomputes their scales,
//!    fills the cache, and reconciles highlight/selection continuity.
//! 3. [`WidgetMap::draw`] runs once per draw pass (depth-tested scene
//!    pass, flat overlay pass); the final pass tears the cache down.
//!
//! Between a press and its release, [`WidgetMap::update`] touches only the
//! active widget, so per-drag state lives safely inside the widget's
//! interaction.
//!
//! ## Picking
//!
//! [`WidgetMap::pick`] resolves the widget under the pointer. Screen maps
//! scan analytic [`Hit2d`](holdfast_widget::Hit2d) tests; spatial maps
//! render candidates into the host's [`PickSurface`](holdfast_pick::PickSurface)
//! twice (a coarse pass for discoverability, a near-pointwise pass for
//! precision) and resolve the nearest hit. While a drag is in progress the
//! active widget is returned without any query at all.
//!
//! ## Example
//!
//! ```rust
//! use holdfast_map::{MapKind, VisibleCache, WidgetMap};
//! use holdfast_pick::Hit;
//! use holdfast_widget::host::{CursorIcon, Shell, View};
//! use holdfast_widget::{Event, GroupKind, GroupWidgets, Hit2d, Modifiers, Shape, Widget};
//! use kurbo::{Point, Rect};
//!
//! struct App {
//!     redraws: u32,
//! }
//!
//! impl View for App {
//!     fn pixel_size_at(&self, _origin: glam::Vec3) -> f32 {
//!         0.01
//!     }
//! }
//!
//! impl Shell for App {
//!     fn set_cursor(&mut self, _icon: CursorIcon) {}
//!     fn request_redraw(&mut self) {
//!         self.redraws += 1;
//!     }
//!     fn request_pointer_refresh(&mut self) {}
//! }
//!
//! // Screen maps never query the surface, but `pick` is usable either way.
//! impl holdfast_pick::PickSurface for App {
//!     fn begin(&mut self, _rect: Rect) {}
//!     fn end(&mut self) -> Vec<Hit> {
//!         Vec::new()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Dot;
//!
//! impl Shape<App> for Dot {
//!     fn draw(&self, _widget: &Widget<App>, _app: &mut App) {}
//! }
//!
//! struct DotHit;
//!
//! impl Hit2d<App> for DotHit {
//!     fn intersect(&self, _app: &App, _widget: &Widget<App>, event: &Event) -> u8 {
//!         u8::from(event.pos().is_some_and(|p| p.x < 50.0))
//!     }
//! }
//!
//! struct Dots;
//!
//! impl GroupKind<App> for Dots {
//!     fn name(&self) -> &str {
//!         "dots"
//!     }
//!
//!     fn populate(&self, _app: &App, group: &mut GroupWidgets<'_, App>) {
//!         let mut dot = Widget::new(Dot);
//!         dot.set_hit_2d(DotHit);
//!         group.attach("dot", dot);
//!     }
//! }
//!
//! let mut app = App { redraws: 0 };
//! let mut map = WidgetMap::new(MapKind::Screen);
//! let mut cache = VisibleCache::new();
//! map.register(Dots);
//!
//! cache.begin();
//! map.update(&app, &mut cache);
//! assert_eq!(cache.len(), 1);
//!
//! let hover = Event::Motion {
//!     pos: Point::new(10.0, 10.0),
//!     mods: Modifiers::default(),
//! };
//! map.refresh_highlight(&mut app, &hover);
//! assert_eq!(map.highlighted_name(), Some("dots_dot"));
//! assert!(app.redraws > 0);
//!
//! map.draw(&mut app, &mut cache, false, true);
//! assert!(!cache.is_built());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod interact;
mod map;
mod selected;

pub use cache::{VisibleCache, WidgetAddr};
pub use interact::SelectAction;
pub use map::{MapKind, Settings, WidgetMap};
pub use selected::SelectedSet;
