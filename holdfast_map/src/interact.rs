// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking, highlight and activation transitions, and selection operations.

use alloc::string::ToString;
use alloc::vec::Vec;
use kurbo::Point;

use holdfast_pick::{
    HOTSPOT_INNER, HOTSPOT_OUTER, Hit, PickSurface, base_id, hotspot_rect, resolve_two_pass,
    split_id,
};
use holdfast_widget::host::{CursorIcon, DispatchMode, Dispatcher, Shell};
use holdfast_widget::{Event, TweakFlags, WidgetFlags};

use crate::cache::WidgetAddr;
use crate::map::{MapKind, WidgetMap};

/// What a pointer click should do to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAction {
    /// Deselect everything else, then select the highlighted widget.
    Replace,
    /// Select the highlighted widget, keeping the rest.
    Extend,
    /// Flip the highlighted widget's selection state.
    Toggle,
    /// Deselect the highlighted widget.
    Deselect,
}

impl<C> WidgetMap<C> {
    /// Resolves the widget and sub-part under `event`.
    ///
    /// While a drag is in progress this returns the active widget and its
    /// current part without any spatial query; the pointer belongs to the
    /// drag, not to hover resolution. Otherwise the map's kind decides the
    /// strategy: analytic 2D scans for [`MapKind::Screen`], a two-pass
    /// depth render through the host's [`PickSurface`] for
    /// [`MapKind::Spatial`] (screen maps never touch the surface).
    pub fn pick(&self, ctx: &mut C, event: &Event) -> Option<(WidgetAddr, u8)>
    where
        C: PickSurface,
    {
        if let Some(active) = self.context.active.as_deref() {
            let addr = self.locate(active)?;
            let part = self.widget(addr)?.part();
            return Some((addr, part));
        }

        match self.kind {
            MapKind::Screen => self.pick_screen(ctx, event),
            MapKind::Spatial => self.pick_spatial(ctx, event.pos()?),
        }
    }

    /// Analytic scan: first widget reporting a non-zero part wins.
    fn pick_screen(&self, ctx: &C, event: &Event) -> Option<(WidgetAddr, u8)> {
        for (group_index, group) in self.groups.iter().enumerate() {
            if !group.poll(ctx) {
                continue;
            }
            for (index, widget) in group.widgets().iter().enumerate() {
                if !widget.has_hit_2d() {
                    continue;
                }
                let part = widget.intersect_2d(ctx, event);
                if part != 0 {
                    return Some((
                        WidgetAddr {
                            group: group_index,
                            index,
                        },
                        part,
                    ));
                }
            }
        }
        None
    }

    /// Two-pass depth pick around `pos`.
    fn pick_spatial(&self, ctx: &mut C, pos: Point) -> Option<(WidgetAddr, u8)>
    where
        C: PickSurface,
    {
        let mut targets: Vec<WidgetAddr> = Vec::new();
        for (group_index, group) in self.groups.iter().enumerate() {
            if !group.poll(ctx) {
                continue;
            }
            for (index, widget) in group.widgets().iter().enumerate() {
                if widget.has_hit_3d() && !widget.flags().contains(WidgetFlags::HIDDEN) {
                    targets.push(WidgetAddr {
                        group: group_index,
                        index,
                    });
                }
            }
        }
        if targets.is_empty() {
            return None;
        }

        let outer = self.render_pick_pass(ctx, &targets, pos, HOTSPOT_OUTER);
        if outer.is_empty() {
            return None;
        }
        let inner = self.render_pick_pass(ctx, &targets, pos, HOTSPOT_INNER);

        let hit = resolve_two_pass(&outer, &inner)?;
        let (index, part) = split_id(hit.id);
        match targets.get(index as usize) {
            Some(addr) => Some((*addr, part)),
            None => {
                debug_assert!(false, "pick surface returned an id outside this pass");
                None
            }
        }
    }

    fn render_pick_pass(
        &self,
        ctx: &mut C,
        targets: &[WidgetAddr],
        pos: Point,
        radius: f64,
    ) -> Vec<Hit>
    where
        C: PickSurface,
    {
        ctx.begin(hotspot_rect(pos, radius));
        for (index, addr) in targets.iter().enumerate() {
            if let Some(widget) = self.widget(*addr) {
                let index = u32::try_from(index).unwrap_or(u32::MAX);
                widget.render_pick_id(ctx, base_id(index));
            }
        }
        ctx.end()
    }

    /// Re-resolves the highlight from pointer motion.
    ///
    /// No-op while a drag is in progress; the tweak owns the pointer.
    pub fn refresh_highlight(&mut self, ctx: &mut C, event: &Event)
    where
        C: PickSurface + Shell,
    {
        if self.context.active.is_some() {
            return;
        }
        let target = self.pick(ctx, event);
        self.set_highlight(ctx, target);
    }

    /// Moves the highlight to `target` (widget address plus part code).
    ///
    /// Change-detected: re-highlighting the same part of the same widget
    /// does nothing. On a change the old widget's flag and part are
    /// cleared, the new widget's set, the cursor follows the new widget's
    /// request (or resets to the default), and a redraw is requested.
    pub fn set_highlight(&mut self, ctx: &mut C, target: Option<(WidgetAddr, u8)>)
    where
        C: Shell,
    {
        let current = self
            .context
            .highlight
            .as_deref()
            .and_then(|name| self.locate(name));
        let changed = match (current, target) {
            (None, None) => false,
            (Some(old), Some((new, part))) => {
                old != new || self.widget(new).is_some_and(|w| w.part() != part)
            }
            _ => true,
        };
        if !changed {
            return;
        }

        if let Some(addr) = current
            && let Some(widget) = self.widget_mut(addr)
        {
            widget.set_flags(WidgetFlags::HIGHLIGHT, false);
            widget.set_part(0);
        }

        match target {
            Some((addr, part)) => match self.widget_mut(addr) {
                Some(widget) => {
                    widget.set_flags(WidgetFlags::HIGHLIGHT, true);
                    widget.set_part(part);
                    let name = widget.name().to_string();
                    let cursor = widget.cursor();
                    self.context.highlight = Some(name);
                    ctx.set_cursor(cursor.unwrap_or_default());
                }
                None => {
                    debug_assert!(false, "highlight target address is stale");
                    self.context.highlight = None;
                    ctx.set_cursor(CursorIcon::Default);
                }
            },
            None => {
                self.context.highlight = None;
                ctx.set_cursor(CursorIcon::Default);
            }
        }
        ctx.request_redraw();
    }

    /// Activates `target` for a drag, or tears the active state down.
    ///
    /// Activation primes the widget's interaction with `event`, then
    /// dispatches its command binding if it has one. A failed dispatch is
    /// reported and rolled back: the widget's flag and interaction state
    /// are cleared and the map returns to its pre-activation state, with a
    /// redraw requested so optimistic draw state heals.
    ///
    /// Any widget still active is deactivated first.
    ///
    /// Passing `None` is equivalent to [`deactivate`](Self::deactivate).
    pub fn set_active(&mut self, ctx: &mut C, event: &Event, target: Option<WidgetAddr>)
    where
        C: Dispatcher + Shell,
    {
        let Some(addr) = target else {
            self.deactivate(ctx);
            return;
        };
        if self.context.active.is_some() {
            self.deactivate(ctx);
        }

        let Some(widget) = self.widget_mut(addr) else {
            debug_assert!(false, "activation target address is stale");
            return;
        };
        if !widget.has_interaction() && widget.command().is_none() {
            debug_assert!(false, "widget has no interaction and no command binding");
            return;
        }

        let name = widget.name().to_string();
        let command = widget.command().cloned();
        widget.set_flags(WidgetFlags::ACTIVE, true);
        if widget.has_interaction() {
            widget.deliver_invoke(ctx, event);
        }
        self.context.active = Some(name.clone());

        if let Some(binding) = command {
            let ok = ctx.invoke(&binding.name, DispatchMode::Invoke, &binding.params);
            if !ok {
                tracing::warn!(
                    command = binding.name.as_str(),
                    widget = name.as_str(),
                    "command dispatch failed; widget deactivated"
                );
                if let Some(widget) = self.widget_mut(addr) {
                    widget.set_flags(WidgetFlags::ACTIVE, false);
                    widget.reset_interaction();
                }
                self.context.active = None;
                ctx.request_redraw();
            }
        }
    }

    /// Tears down the active state.
    ///
    /// Clears the widget's `ACTIVE` flag, drops its per-drag interaction
    /// state, empties the slot, requests a redraw, and requests a synthetic
    /// pointer refresh so the highlight is recomputed where the pointer
    /// actually is. No-op when nothing is active.
    pub fn deactivate(&mut self, ctx: &mut C)
    where
        C: Shell,
    {
        let Some(name) = self.context.active.take() else {
            return;
        };
        if let Some(addr) = self.locate(&name)
            && let Some(widget) = self.widget_mut(addr)
        {
            widget.set_flags(WidgetFlags::ACTIVE, false);
            widget.reset_interaction();
        }
        ctx.request_redraw();
        ctx.request_pointer_refresh();
    }

    /// Delivers the active widget's cancel hook, then tears down.
    ///
    /// The hook runs before teardown so the interaction can still see its
    /// per-drag state while reverting optimistic edits.
    pub fn cancel_active(&mut self, ctx: &mut C)
    where
        C: Shell,
    {
        if let Some(addr) = self
            .context
            .active
            .as_deref()
            .and_then(|name| self.locate(name))
            && let Some(widget) = self.widget_mut(addr)
        {
            widget.deliver_cancel(ctx);
        }
        self.deactivate(ctx);
    }

    /// Forwards one event to the active widget's interaction.
    pub fn deliver_to_active(&mut self, ctx: &mut C, event: &Event, flags: TweakFlags) {
        if let Some(addr) = self
            .context
            .active
            .as_deref()
            .and_then(|name| self.locate(name))
            && let Some(widget) = self.widget_mut(addr)
        {
            widget.deliver_event(ctx, event, flags);
        }
    }

    /// Services a command-driven drag.
    ///
    /// While the dispatched command is running the host feeds events here;
    /// the active widget's interaction sees each one, keeping its visual
    /// state in step with the command. Once the host reports the command
    /// finished, the active state is torn down.
    pub fn drive_active(&mut self, ctx: &mut C, event: &Event, command_running: bool)
    where
        C: Shell,
    {
        if self.context.active.is_none() {
            return;
        }
        if !command_running {
            self.deactivate(ctx);
            return;
        }
        if let Some(addr) = self
            .context
            .active
            .as_deref()
            .and_then(|name| self.locate(name))
            && let Some(widget) = self.widget_mut(addr)
            && widget.has_interaction()
            && widget.command().is_some()
        {
            widget.deliver_event(ctx, event, TweakFlags::empty());
        }
    }

    /// Selects the widget at `addr`.
    ///
    /// No-op (returning `false`) when the widget is not `SELECTABLE` or is
    /// already selected. Selecting also re-highlights the widget and
    /// notifies its interaction.
    pub fn select(&mut self, ctx: &mut C, addr: WidgetAddr) -> bool
    where
        C: Shell,
    {
        let Some(widget) = self.widget(addr) else {
            return false;
        };
        if !widget.flags().contains(WidgetFlags::SELECTABLE) {
            return false;
        }
        let name = widget.name().to_string();
        let part = widget.part();
        if !self.context.selected.insert(name) {
            return false;
        }

        if let Some(widget) = self.widget_mut(addr) {
            widget.set_flags(WidgetFlags::SELECT, true);
            widget.deliver_select(ctx, true);
        }
        self.set_highlight(ctx, Some((addr, part)));
        ctx.request_redraw();
        true
    }

    /// Deselects the widget at `addr`.
    ///
    /// Deselecting a widget that is not selected is an invariant violation
    /// (debug assertion); release builds treat it as a no-op.
    pub fn deselect(&mut self, ctx: &mut C, addr: WidgetAddr) -> bool
    where
        C: Shell,
    {
        let Some(widget) = self.widget(addr) else {
            return false;
        };
        let name = widget.name().to_string();
        let removed = self.context.selected.remove(&name);
        debug_assert!(removed, "deselect of a widget that is not selected");
        if !removed {
            return false;
        }

        if let Some(widget) = self.widget_mut(addr) {
            widget.set_flags(WidgetFlags::SELECT, false);
            widget.deliver_select(ctx, false);
        }
        ctx.request_redraw();
        true
    }

    /// Selects every visible selectable widget.
    ///
    /// A single pass over polled groups in registration order and widgets
    /// in attach order, so the selection order is deterministic and the
    /// cost stays linear in the widget count. Newly selected widgets are
    /// notified and appended to the set inline; the first candidate ends
    /// up highlighted. A change requests a pointer refresh on top of the
    /// redraw.
    pub fn select_all(&mut self, ctx: &mut C) -> bool
    where
        C: Shell,
    {
        let mut first: Option<(WidgetAddr, u8)> = None;
        let mut changed = false;
        for (group_index, group) in self.groups.iter_mut().enumerate() {
            if !group.poll(ctx) {
                continue;
            }
            for (index, widget) in group.widgets_mut().iter_mut().enumerate() {
                let flags = widget.flags();
                if !flags.contains(WidgetFlags::SELECTABLE) {
                    continue;
                }
                if flags.contains(WidgetFlags::HIDDEN) {
                    continue;
                }
                if first.is_none() {
                    first = Some((WidgetAddr { group: group_index, index }, widget.part()));
                }
                if flags.contains(WidgetFlags::SELECT) {
                    continue;
                }
                widget.set_flags(WidgetFlags::SELECT, true);
                widget.deliver_select(ctx, true);
                // A clear flag means the name is absent from the set.
                self.context.selected.push(widget.name().to_string());
                changed = true;
            }
        }

        if let Some(target) = first {
            self.set_highlight(ctx, Some(target));
        }
        if changed {
            ctx.request_redraw();
            ctx.request_pointer_refresh();
        }
        changed
    }

    /// Empties the selection.
    ///
    /// A single pass over the groups clearing `SELECT` wherever it is set;
    /// the flagged widgets are exactly the set members.
    pub fn deselect_all(&mut self, ctx: &mut C) -> bool
    where
        C: Shell,
    {
        if self.context.selected.is_empty() {
            return false;
        }
        for group in &mut self.groups {
            for widget in group.widgets_mut() {
                if widget.flags().contains(WidgetFlags::SELECT) {
                    widget.set_flags(WidgetFlags::SELECT, false);
                    widget.deliver_select(ctx, false);
                }
            }
        }
        self.context.selected.clear();
        ctx.request_redraw();
        ctx.request_pointer_refresh();
        true
    }

    /// Applies a click's selection action to the highlighted widget.
    ///
    /// Clicking with nothing highlighted is an invariant violation (the
    /// host routes selection clicks here only when hovering a widget);
    /// debug builds assert, release builds return whatever `Replace`
    /// already changed.
    pub fn click_select(&mut self, ctx: &mut C, action: SelectAction) -> bool
    where
        C: Shell,
    {
        let mut changed = false;
        if action == SelectAction::Replace {
            changed |= self.deselect_all(ctx);
        }

        let Some(addr) = self
            .context
            .highlight
            .as_deref()
            .and_then(|name| self.locate(name))
        else {
            debug_assert!(false, "selection click with nothing highlighted");
            return changed;
        };

        let is_selected = self
            .widget(addr)
            .is_some_and(|w| w.flags().contains(WidgetFlags::SELECT));
        let deselect = match action {
            SelectAction::Deselect => true,
            SelectAction::Toggle => is_selected,
            SelectAction::Replace | SelectAction::Extend => false,
        };
        if deselect {
            if is_selected {
                changed |= self.deselect(ctx, addr);
            }
        } else {
            changed |= self.select(ctx, addr);
        }
        changed
    }
}
