// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures: a recording host context, a reconfigurable group
//! kind, and event helpers.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary compiles this module and uses a subset of it."
)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec3;
use kurbo::{Point, Rect};

use holdfast_pick::{Hit, PickSurface};
use holdfast_widget::host::{CursorIcon, DispatchMode, Dispatcher, Shell, View};
use holdfast_widget::{
    Button, Event, GroupKind, GroupWidgets, Hit2d, Hit3d, Interaction, Modifiers, Params, Shape,
    TweakFlags, Widget, WidgetFlags,
};

/// Shared log the probe interaction writes lifecycle entries into.
pub(crate) type Log = Rc<RefCell<Vec<String>>>;

pub(crate) fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub(crate) fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

pub(crate) fn shared<T>(value: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(value))
}

pub(crate) fn gate(open: bool) -> Rc<Cell<bool>> {
    Rc::new(Cell::new(open))
}

/// Recording application context implementing every host trait.
#[derive(Debug, Default)]
pub(crate) struct TestCtx {
    pub(crate) pixel_size: f32,
    pub(crate) redraws: u32,
    pub(crate) pointer_refreshes: u32,
    pub(crate) cursor: Option<CursorIcon>,
    pub(crate) known_commands: Vec<&'static str>,
    pub(crate) invoked: Vec<String>,
    pub(crate) drawn: Vec<String>,
    // Pick-surface state.
    pub(crate) pick_rect: Option<Rect>,
    pub(crate) staged: Vec<Hit>,
    pub(crate) pick_passes: u32,
}

impl TestCtx {
    pub(crate) fn new() -> Self {
        Self {
            pixel_size: 1.0,
            ..Self::default()
        }
    }
}

impl View for TestCtx {
    fn pixel_size_at(&self, _origin: Vec3) -> f32 {
        self.pixel_size
    }
}

impl Shell for TestCtx {
    fn set_cursor(&mut self, icon: CursorIcon) {
        self.cursor = Some(icon);
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn request_pointer_refresh(&mut self) {
        self.pointer_refreshes += 1;
    }
}

impl Dispatcher for TestCtx {
    fn invoke(&mut self, name: &str, _mode: DispatchMode, params: &Params) -> bool {
        if self.known_commands.contains(&name) {
            self.invoked.push(if params.is_empty() {
                name.to_string()
            } else {
                format!("{name} {params}")
            });
            true
        } else {
            false
        }
    }
}

impl PickSurface for TestCtx {
    fn begin(&mut self, rect: Rect) {
        self.pick_rect = Some(rect);
        self.staged.clear();
        self.pick_passes += 1;
    }

    fn end(&mut self) -> Vec<Hit> {
        self.pick_rect = None;
        std::mem::take(&mut self.staged)
    }
}

/// Shape that records draw calls on the context and can request a cursor.
#[derive(Debug)]
pub(crate) struct FlatShape {
    pub(crate) cursor: Option<CursorIcon>,
}

impl Shape<TestCtx> for FlatShape {
    fn draw(&self, widget: &Widget<TestCtx>, ctx: &mut TestCtx) {
        ctx.drawn.push(widget.name().to_string());
    }

    fn cursor(&self, _widget: &Widget<TestCtx>) -> Option<CursorIcon> {
        self.cursor
    }
}

/// Analytic hit: inside `rect` reports `part`, otherwise a miss.
pub(crate) struct RectHit {
    pub(crate) rect: Rect,
    pub(crate) part: u8,
}

impl Hit2d<TestCtx> for RectHit {
    fn intersect(&self, _ctx: &TestCtx, _widget: &Widget<TestCtx>, event: &Event) -> u8 {
        match event.pos() {
            Some(pos) if self.rect.contains(pos) => self.part,
            _ => 0,
        }
    }
}

/// Depth-pick hook: stages a hit when its screen spot falls inside the
/// surface's current hotspot rectangle.
pub(crate) struct DepthHit {
    pub(crate) spot: Point,
    pub(crate) depth: f32,
    pub(crate) part: u8,
}

impl Hit3d<TestCtx> for DepthHit {
    fn render_id(&self, ctx: &mut TestCtx, _widget: &Widget<TestCtx>, base_id: u32) {
        if ctx.pick_rect.is_some_and(|rect| rect.contains(self.spot)) {
            ctx.staged.push(Hit {
                depth: self.depth,
                id: base_id | u32::from(self.part),
            });
        }
    }
}

/// Interaction probe logging every lifecycle hook.
pub(crate) struct Probe {
    pub(crate) log: Log,
    pub(crate) tag: &'static str,
}

impl Interaction<TestCtx> for Probe {
    fn invoke(&mut self, _ctx: &mut TestCtx, _widget: &Widget<TestCtx>, _event: &Event) {
        self.log.borrow_mut().push(format!("invoke {}", self.tag));
    }

    fn handle(
        &mut self,
        _ctx: &mut TestCtx,
        _widget: &mut Widget<TestCtx>,
        _event: &Event,
        flags: TweakFlags,
    ) {
        let suffix = if flags.contains(TweakFlags::PRECISE) {
            " precise"
        } else {
            ""
        };
        self.log
            .borrow_mut()
            .push(format!("handle {}{suffix}", self.tag));
    }

    fn cancel(&mut self, _ctx: &mut TestCtx, _widget: &mut Widget<TestCtx>) {
        self.log.borrow_mut().push(format!("cancel {}", self.tag));
    }

    fn reset(&mut self) {
        self.log.borrow_mut().push(format!("reset {}", self.tag));
    }

    fn select(&mut self, _ctx: &mut TestCtx, _widget: &Widget<TestCtx>, selected: bool) {
        self.log
            .borrow_mut()
            .push(format!("select {} {selected}", self.tag));
    }
}

/// Blueprint for one widget a [`TestGroup`] regenerates each update.
#[derive(Clone)]
pub(crate) struct WidgetSpec {
    pub(crate) raw: &'static str,
    pub(crate) flags: WidgetFlags,
    pub(crate) user_scale: f32,
    pub(crate) cursor: Option<CursorIcon>,
    pub(crate) hit_rect: Option<(Rect, u8)>,
    pub(crate) pick_spot: Option<(Point, f32, u8)>,
    pub(crate) command: Option<&'static str>,
    pub(crate) probe: bool,
}

impl WidgetSpec {
    pub(crate) fn new(raw: &'static str) -> Self {
        Self {
            raw,
            flags: WidgetFlags::empty(),
            user_scale: 1.0,
            cursor: None,
            hit_rect: None,
            pick_spot: None,
            command: None,
            probe: false,
        }
    }

    pub(crate) fn flags(mut self, flags: WidgetFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub(crate) fn cursor(mut self, icon: CursorIcon) -> Self {
        self.cursor = Some(icon);
        self
    }

    /// Analytic hit rectangle reporting part `1`.
    pub(crate) fn rect(self, rect: Rect) -> Self {
        self.rect_part(rect, 1)
    }

    pub(crate) fn rect_part(mut self, rect: Rect, part: u8) -> Self {
        self.hit_rect = Some((rect, part));
        self
    }

    /// Depth-pick spot reporting part `1`.
    pub(crate) fn spot(self, spot: Point, depth: f32) -> Self {
        self.spot_part(spot, depth, 1)
    }

    pub(crate) fn spot_part(mut self, spot: Point, depth: f32, part: u8) -> Self {
        self.pick_spot = Some((spot, depth, part));
        self
    }

    pub(crate) fn command(mut self, name: &'static str) -> Self {
        self.command = Some(name);
        self
    }

    pub(crate) fn probe(mut self) -> Self {
        self.probe = true;
        self
    }

    pub(crate) fn user_scale(mut self, scale: f32) -> Self {
        self.user_scale = scale;
        self
    }
}

/// A group kind whose widget blueprints and visibility predicate can be
/// changed between update passes through the shared handles.
pub(crate) struct TestGroup {
    pub(crate) name: &'static str,
    pub(crate) specs: Rc<RefCell<Vec<WidgetSpec>>>,
    pub(crate) gate: Rc<Cell<bool>>,
    pub(crate) log: Log,
}

impl GroupKind<TestCtx> for TestGroup {
    fn name(&self) -> &str {
        self.name
    }

    fn poll(&self, _ctx: &TestCtx) -> bool {
        self.gate.get()
    }

    fn populate(&self, _ctx: &TestCtx, group: &mut GroupWidgets<'_, TestCtx>) {
        for spec in self.specs.borrow().iter() {
            let mut widget = Widget::new(FlatShape { cursor: spec.cursor });
            widget.set_flags(spec.flags, true);
            widget.user_scale = spec.user_scale;
            if let Some((rect, part)) = spec.hit_rect {
                widget.set_hit_2d(RectHit { rect, part });
            }
            if let Some((spot, depth, part)) = spec.pick_spot {
                widget.set_hit_3d(DepthHit { spot, depth, part });
            }
            if let Some(command) = spec.command {
                widget.bind_command(command);
            }
            if spec.probe {
                widget.set_interaction(Probe {
                    log: Rc::clone(&self.log),
                    tag: spec.raw,
                });
            }
            group.attach(spec.raw, widget);
        }
    }
}

pub(crate) fn motion(x: f64, y: f64) -> Event {
    Event::Motion {
        pos: Point::new(x, y),
        mods: Modifiers::default(),
    }
}

pub(crate) fn press(x: f64, y: f64) -> Event {
    Event::Press {
        button: Button::Left,
        pos: Point::new(x, y),
        mods: Modifiers::default(),
    }
}

pub(crate) fn release(x: f64, y: f64) -> Event {
    Event::Release {
        button: Button::Left,
        pos: Point::new(x, y),
        mods: Modifiers::default(),
    }
}
