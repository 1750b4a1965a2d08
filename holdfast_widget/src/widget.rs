// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget record.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use glam::Vec3;
use peniko::Color;
use smallvec::SmallVec;

use crate::event::{Event, TweakFlags};
use crate::hit::{Hit2d, Hit3d};
use crate::host::CursorIcon;
use crate::interaction::Interaction;
use crate::params::Params;
use crate::shape::Shape;

bitflags::bitflags! {
    /// Widget state and draw-gating flags.
    ///
    /// `HIGHLIGHT`, `SELECT`, and `ACTIVE` mirror the owning map's context
    /// record and are managed by the map; setting them directly desyncs the
    /// two. The remaining flags are free for widget authors.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct WidgetFlags: u16 {
        /// Excluded from the visible cache and from depth picking.
        const HIDDEN = 1 << 0;
        /// The pointer is over this widget.
        const HIGHLIGHT = 1 << 1;
        /// In the owning map's selected set.
        const SELECT = 1 << 2;
        /// A drag on this widget is in progress.
        const ACTIVE = 1 << 3;
        /// May enter the selected set.
        const SELECTABLE = 1 << 4;
        /// Drawn only while active.
        const DRAW_ACTIVE = 1 << 5;
        /// Drawn only while highlighted.
        const DRAW_HOVER = 1 << 6;
        /// Drawn in the depth-tested scene pass instead of the overlay pass.
        const SCENE_DEPTH = 1 << 7;
        /// Keeps a constant on-screen size by scaling with view distance.
        const SCALE_VIEW = 1 << 8;
    }
}

/// A command binding: the host command a widget dispatches when activated.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandBinding {
    /// The host-side command name.
    pub name: String,
    /// Parameters handed to the dispatcher verbatim.
    pub params: Params,
}

/// One interactive handle.
///
/// A widget couples plain data (geometry, colors, flags) with boxed behavior
/// seams: a mandatory [`Shape`] plus optional [`Hit2d`], [`Hit3d`], and
/// [`Interaction`] capabilities. Widgets are regenerated wholesale by their
/// group's factory on every update pass; continuity of highlight and
/// selection state across regeneration is the owning map's job, keyed by the
/// widget's unique name.
pub struct Widget<C> {
    name: String,
    flags: WidgetFlags,
    /// Highlighted sub-part code; `0` when no part is highlighted.
    part: u8,
    /// World-space position.
    pub origin: Vec3,
    /// Offset applied on top of `origin` by shapes that want it.
    pub offset: Vec3,
    /// Author-controlled scale factor, multiplied into the derived scale.
    pub user_scale: f32,
    /// Derived draw scale, recomputed by the owning map each update.
    scale: f32,
    /// Stroke width hint for shapes.
    pub line_width: f32,
    /// Base draw color.
    pub color: Color,
    /// Draw color while highlighted.
    pub color_highlight: Color,
    shape: Box<dyn Shape<C>>,
    hit_2d: Option<Box<dyn Hit2d<C>>>,
    hit_3d: Option<Box<dyn Hit3d<C>>>,
    interaction: Option<Box<dyn Interaction<C>>>,
    command: Option<CommandBinding>,
    slots: SmallVec<[Option<String>; 1]>,
}

impl<C> Widget<C> {
    /// Creates a widget with the given shape and one property slot.
    pub fn new(shape: impl Shape<C> + 'static) -> Self {
        Self::with_slots(shape, 1)
    }

    /// Creates a widget with the given shape and `slots` property slots.
    pub fn with_slots(shape: impl Shape<C> + 'static, slots: usize) -> Self {
        Self {
            name: String::new(),
            flags: WidgetFlags::empty(),
            part: 0,
            origin: Vec3::ZERO,
            offset: Vec3::ZERO,
            user_scale: 1.0,
            scale: 1.0,
            line_width: 1.0,
            color: Color::WHITE,
            color_highlight: Color::WHITE,
            shape: Box::new(shape),
            hit_2d: None,
            hit_3d: None,
            interaction: None,
            command: None,
            slots: smallvec::smallvec![None; slots],
        }
    }

    /// The widget's unique name within its map.
    ///
    /// Empty until the widget is attached to a group, which prefixes and
    /// uniquifies it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn assign_name(&mut self, name: String) {
        self.name = name;
    }

    /// Current flags.
    #[must_use]
    pub fn flags(&self) -> WidgetFlags {
        self.flags
    }

    /// Sets or clears `flags`.
    pub fn set_flags(&mut self, flags: WidgetFlags, enable: bool) {
        self.flags.set(flags, enable);
    }

    /// The highlighted sub-part code; `0` when none.
    #[must_use]
    pub fn part(&self) -> u8 {
        self.part
    }

    /// Sets the highlighted sub-part code. Managed by the owning map.
    pub fn set_part(&mut self, part: u8) {
        self.part = part;
    }

    /// The derived draw scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Sets the derived draw scale. Recomputed by the owning map each update.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// The color shapes should draw with right now.
    #[must_use]
    pub fn current_color(&self) -> Color {
        if self.flags.contains(WidgetFlags::HIGHLIGHT) {
            self.color_highlight
        } else {
            self.color
        }
    }

    /// Installs an analytic screen-space hit test.
    pub fn set_hit_2d(&mut self, hit: impl Hit2d<C> + 'static) {
        self.hit_2d = Some(Box::new(hit));
    }

    /// Installs an id-buffer render hook for depth picking.
    pub fn set_hit_3d(&mut self, hit: impl Hit3d<C> + 'static) {
        self.hit_3d = Some(Box::new(hit));
    }

    /// Installs a direct interaction.
    pub fn set_interaction(&mut self, interaction: impl Interaction<C> + 'static) {
        self.interaction = Some(Box::new(interaction));
    }

    /// Whether a direct interaction is installed.
    #[must_use]
    pub fn has_interaction(&self) -> bool {
        self.interaction.is_some()
    }

    /// Whether an analytic 2D hit test is installed.
    #[must_use]
    pub fn has_hit_2d(&self) -> bool {
        self.hit_2d.is_some()
    }

    /// Whether a depth-pick render hook is installed.
    #[must_use]
    pub fn has_hit_3d(&self) -> bool {
        self.hit_3d.is_some()
    }

    /// Binds the widget to a host command, returning the parameter block
    /// for filling.
    ///
    /// The binding is dispatched when the widget is activated. Binding a
    /// property afterwards clears it again.
    pub fn bind_command(&mut self, name: impl Into<String>) -> &mut Params {
        let binding = self.command.insert(CommandBinding {
            name: name.into(),
            params: Params::new(),
        });
        &mut binding.params
    }

    /// The current command binding, if any.
    #[must_use]
    pub fn command(&self) -> Option<&CommandBinding> {
        self.command.as_ref()
    }

    /// Binds property slot `slot` to an external property path.
    ///
    /// Clears any command binding; a widget drives either a command or
    /// properties, never both. An out-of-range slot index is reported and
    /// ignored.
    pub fn bind_property(&mut self, slot: usize, path: impl Into<String>) {
        if slot >= self.slots.len() {
            tracing::warn!(
                slot,
                slots = self.slots.len(),
                widget = self.name.as_str(),
                "property slot index out of range; binding ignored"
            );
            return;
        }
        self.slots[slot] = Some(path.into());
        self.command = None;
        if let Some(mut ix) = self.interaction.take() {
            ix.rebound(self, slot);
            self.interaction = Some(ix);
        }
    }

    /// The property path bound to `slot`, if any.
    #[must_use]
    pub fn property(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot)?.as_deref()
    }

    /// Number of property slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Draws the widget via its shape.
    pub fn draw(&self, ctx: &mut C) {
        self.shape.draw(self, ctx);
    }

    /// The world-space point the draw scale is sampled at.
    #[must_use]
    pub fn scale_anchor(&self) -> Vec3 {
        self.shape.scale_anchor(self)
    }

    /// The cursor to show while highlighted, if the shape requests one.
    #[must_use]
    pub fn cursor(&self) -> Option<CursorIcon> {
        self.shape.cursor(self)
    }

    /// Runs the analytic 2D hit test; `0` when absent or missed.
    #[must_use]
    pub fn intersect_2d(&self, ctx: &C, event: &Event) -> u8 {
        self.hit_2d
            .as_ref()
            .map_or(0, |hit| hit.intersect(ctx, self, event))
    }

    /// Renders the widget's pickable geometry under `base_id`.
    ///
    /// No-op when the widget has no depth-pick hook.
    pub fn render_pick_id(&self, ctx: &mut C, base_id: u32) {
        if let Some(hit) = &self.hit_3d {
            hit.render_id(ctx, self, base_id);
        }
    }

    /// Delivers the activating press to the interaction.
    pub fn deliver_invoke(&mut self, ctx: &mut C, event: &Event) {
        if let Some(mut ix) = self.interaction.take() {
            ix.invoke(ctx, self, event);
            self.interaction = Some(ix);
        }
    }

    /// Delivers one active-drag event to the interaction.
    pub fn deliver_event(&mut self, ctx: &mut C, event: &Event, flags: TweakFlags) {
        if let Some(mut ix) = self.interaction.take() {
            ix.handle(ctx, self, event, flags);
            self.interaction = Some(ix);
        }
    }

    /// Delivers a cancellation to the interaction.
    pub fn deliver_cancel(&mut self, ctx: &mut C) {
        if let Some(mut ix) = self.interaction.take() {
            ix.cancel(ctx, self);
            self.interaction = Some(ix);
        }
    }

    /// Notifies the interaction of a selection-state change.
    pub fn deliver_select(&mut self, ctx: &mut C, selected: bool) {
        if let Some(mut ix) = self.interaction.take() {
            ix.select(ctx, self, selected);
            self.interaction = Some(ix);
        }
    }

    /// Drops the interaction's per-drag state.
    pub fn reset_interaction(&mut self) {
        if let Some(ix) = &mut self.interaction {
            ix.reset();
        }
    }
}

impl<C> fmt::Debug for Widget<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("name", &self.name)
            .field("flags", &self.flags)
            .field("part", &self.part)
            .field("origin", &self.origin)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}
