// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget map: group registry, context record, update and draw passes.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use holdfast_widget::host::{Shell, View};
use holdfast_widget::{GroupKind, Widget, WidgetFlags, WidgetGroup};

use crate::cache::{VisibleCache, WidgetAddr};
use crate::selected::SelectedSet;

/// Which picking strategy a map uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapKind {
    /// Flat region; picking runs analytic screen-space tests.
    Screen,
    /// Spatial region; picking renders an id buffer through the host's
    /// depth-tested pick surface.
    Spatial,
}

/// Per-map tuning knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Target on-screen handle size factor for view-scaled widgets.
    pub handle_px: f32,
    /// When set, view-scaled widgets keep their world-space size instead
    /// of a constant screen size.
    pub world_space_handles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            handle_px: 75.0,
            world_space_handles: false,
        }
    }
}

/// The interaction context record of one map.
#[derive(Debug, Default)]
pub(crate) struct MapContext {
    /// Name of the highlighted widget; its part code lives on the widget.
    pub(crate) highlight: Option<String>,
    /// Name of the widget a drag is in progress on.
    pub(crate) active: Option<String>,
    /// Selected widget names in selection order.
    pub(crate) selected: SelectedSet,
}

/// A per-region collection of widget groups plus interaction state.
///
/// The map owns its groups and the context record tying flags on widgets
/// (`HIGHLIGHT`, `ACTIVE`, `SELECT`) to the slots naming them. All
/// continuity across the factory-driven regeneration of widgets is by
/// widget name; addresses ([`WidgetAddr`]) are cheap but last only until
/// the next update pass.
///
/// The map is generic over the application context type `C`; operations
/// bound `C` by the per-concern host traits they actually need.
pub struct WidgetMap<C> {
    pub(crate) kind: MapKind,
    pub(crate) settings: Settings,
    pub(crate) groups: Vec<WidgetGroup<C>>,
    pub(crate) context: MapContext,
}

impl<C> WidgetMap<C> {
    /// Creates an empty map of the given kind with default settings.
    #[must_use]
    pub fn new(kind: MapKind) -> Self {
        Self::with_settings(kind, Settings::default())
    }

    /// Creates an empty map with explicit settings.
    #[must_use]
    pub fn with_settings(kind: MapKind, settings: Settings) -> Self {
        Self {
            kind,
            settings,
            groups: Vec::new(),
            context: MapContext::default(),
        }
    }

    /// The map's picking strategy.
    #[must_use]
    pub fn kind(&self) -> MapKind {
        self.kind
    }

    /// The map's settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Mutable access to the map's settings.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Registers a group descriptor. Its widgets appear on the next update.
    pub fn register(&mut self, kind: impl GroupKind<C> + 'static) {
        self.groups.push(WidgetGroup::new(kind));
    }

    /// Unregisters the group named `name`, tearing down any interaction
    /// state its widgets hold.
    ///
    /// Returns `false` when no such group is registered. The cache is
    /// re-pointed so entries for the remaining groups stay valid.
    pub fn unregister(&mut self, ctx: &mut C, cache: &mut VisibleCache, name: &str) -> bool
    where
        C: Shell,
    {
        let Some(position) = self.groups.iter().position(|g| g.name() == name) else {
            return false;
        };

        let doomed: Vec<String> = self.groups[position]
            .widgets()
            .iter()
            .map(|w| w.name().to_string())
            .collect();
        for widget_name in &doomed {
            if self.context.highlight.as_deref() == Some(widget_name) {
                self.set_highlight(ctx, None);
            }
            if self.context.active.as_deref() == Some(widget_name) {
                self.deactivate(ctx);
            }
        }
        self.context
            .selected
            .retain(|selected| !doomed.iter().any(|d| d == selected));

        self.groups.remove(position);
        cache.remove_group(position);
        ctx.request_redraw();
        true
    }

    /// The registered groups, in registration order.
    #[must_use]
    pub fn groups(&self) -> &[WidgetGroup<C>] {
        &self.groups
    }

    /// Finds a widget's current address by name.
    #[must_use]
    pub fn locate(&self, name: &str) -> Option<WidgetAddr> {
        for (group, g) in self.groups.iter().enumerate() {
            if let Some(index) = g.widgets().iter().position(|w| w.name() == name) {
                return Some(WidgetAddr { group, index });
            }
        }
        None
    }

    /// The widget at `addr`, if the address is still valid.
    #[must_use]
    pub fn widget(&self, addr: WidgetAddr) -> Option<&Widget<C>> {
        self.groups.get(addr.group)?.widgets().get(addr.index)
    }

    pub(crate) fn widget_mut(&mut self, addr: WidgetAddr) -> Option<&mut Widget<C>> {
        self.groups
            .get_mut(addr.group)?
            .widgets_mut()
            .get_mut(addr.index)
    }

    /// Name of the highlighted widget, if any.
    #[must_use]
    pub fn highlighted_name(&self) -> Option<&str> {
        self.context.highlight.as_deref()
    }

    /// The highlighted widget, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&Widget<C>> {
        let addr = self.locate(self.context.highlight.as_deref()?)?;
        self.widget(addr)
    }

    /// Name of the active widget, if a drag is in progress.
    #[must_use]
    pub fn active_name(&self) -> Option<&str> {
        self.context.active.as_deref()
    }

    /// The active widget, if a drag is in progress.
    #[must_use]
    pub fn active(&self) -> Option<&Widget<C>> {
        let addr = self.locate(self.context.active.as_deref()?)?;
        self.widget(addr)
    }

    /// The selected set, in selection order.
    #[must_use]
    pub fn selected(&self) -> &SelectedSet {
        &self.context.selected
    }

    /// Regenerates widgets and rebuilds visibility for one drawing cycle.
    ///
    /// The host must have called [`VisibleCache::begin`] for this pass.
    ///
    /// While a drag is in progress only the active widget's scale is
    /// refreshed and re-cached; groups are left untouched so the dragged
    /// widget's state survives. Otherwise each group passing its predicate
    /// is regenerated by its factory, and highlight and selection state
    /// carries over to the fresh widgets by name. A highlighted or selected
    /// name with no fresh counterpart is dropped from the context record,
    /// so no stale entry outlives the pass.
    pub fn update(&mut self, ctx: &C, cache: &mut VisibleCache)
    where
        C: View,
    {
        debug_assert!(cache.is_built(), "update requires a begun cache");
        if !cache.is_built() {
            return;
        }
        let settings = self.settings;

        if let Some(active) = self.context.active.clone() {
            match self.locate(&active) {
                Some(addr) => {
                    if let Some(widget) = self.widget_mut(addr) {
                        compute_scale(widget, ctx, settings);
                        if !widget.flags().contains(WidgetFlags::HIDDEN) {
                            cache.insert(active, addr);
                        }
                    }
                }
                None => {
                    debug_assert!(false, "active widget vanished from its group");
                    self.context.active = None;
                }
            }
            return;
        }

        if self.groups.is_empty() {
            return;
        }

        let mut kept_selected: Vec<Widget<C>> = Vec::new();
        let mut kept_highlight: Option<Widget<C>> = None;

        for (group_index, group) in self.groups.iter_mut().enumerate() {
            if !group.poll(ctx) {
                continue;
            }

            // Selected state is checked first so a widget that is both
            // selected and highlighted reconciles through the selection
            // path, part code included.
            for widget in core::mem::take(group.widgets_mut()) {
                if widget.flags().contains(WidgetFlags::SELECT) {
                    kept_selected.push(widget);
                } else if widget.flags().contains(WidgetFlags::HIGHLIGHT) {
                    kept_highlight = Some(widget);
                }
            }

            group.populate(ctx);
            for (index, widget) in group.widgets_mut().iter_mut().enumerate() {
                compute_scale(widget, ctx, settings);
                if !widget.flags().contains(WidgetFlags::HIDDEN) {
                    cache.insert(
                        widget.name().to_string(),
                        WidgetAddr {
                            group: group_index,
                            index,
                        },
                    );
                }
            }
        }

        if let Some(old) = kept_highlight.take() {
            match cache.lookup(old.name()) {
                Some(addr) => {
                    if let Some(fresh) = self.widget_mut(addr) {
                        fresh.set_flags(WidgetFlags::HIGHLIGHT, true);
                        fresh.set_part(old.part());
                    }
                }
                None => {
                    self.context.highlight = None;
                }
            }
        }

        for old in kept_selected {
            match cache.lookup(old.name()) {
                Some(addr) => {
                    if let Some(fresh) = self.widget_mut(addr) {
                        fresh.set_flags(WidgetFlags::SELECT, true);
                        if old.flags().contains(WidgetFlags::HIGHLIGHT) {
                            fresh.set_flags(WidgetFlags::HIGHLIGHT, true);
                            fresh.set_part(old.part());
                        }
                    }
                }
                None => {
                    self.context.selected.remove(old.name());
                    if old.flags().contains(WidgetFlags::HIGHLIGHT) {
                        self.context.highlight = None;
                    }
                }
            }
        }
    }

    /// Draws the map's visible widgets for one pass.
    ///
    /// The host runs up to two passes per cycle: a depth-tested scene pass
    /// (`in_scene` set) and an overlay pass; a widget participates in the
    /// pass matching its `SCENE_DEPTH` flag. While a drag is in progress
    /// only the active widget is considered, and only if it opted in with
    /// `DRAW_ACTIVE`. Selected widgets always draw last, in selection
    /// order. The final pass of a cycle hands the cache back by tearing it
    /// down.
    pub fn draw(&self, ctx: &mut C, cache: &mut VisibleCache, in_scene: bool, final_pass: bool) {
        if let Some(active) = self.context.active.as_deref() {
            if let Some(addr) = self.locate(active)
                && let Some(widget) = self.widget(addr)
                && in_scene == widget.flags().contains(WidgetFlags::SCENE_DEPTH)
                && widget.flags().contains(WidgetFlags::DRAW_ACTIVE)
            {
                widget.draw(ctx);
            }
        } else if !self.groups.is_empty() {
            for (_, addr) in cache.iter() {
                let Some(widget) = self.widget(addr) else {
                    continue;
                };
                let flags = widget.flags();
                if flags.contains(WidgetFlags::SELECT) {
                    continue;
                }
                if in_scene != flags.contains(WidgetFlags::SCENE_DEPTH) {
                    continue;
                }
                if flags.contains(WidgetFlags::DRAW_HOVER)
                    && !flags.contains(WidgetFlags::HIGHLIGHT)
                {
                    continue;
                }
                widget.draw(ctx);
            }
        }

        for name in self.context.selected.names() {
            if let Some(addr) = cache.lookup(name)
                && let Some(widget) = self.widget(addr)
                && in_scene == widget.flags().contains(WidgetFlags::SCENE_DEPTH)
            {
                widget.draw(ctx);
            }
        }

        if final_pass {
            cache.finish();
        }
    }
}

impl<C> fmt::Debug for WidgetMap<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetMap")
            .field("kind", &self.kind)
            .field("settings", &self.settings)
            .field("groups", &self.groups)
            .field("context", &self.context)
            .finish()
    }
}

/// Recomputes a widget's derived draw scale.
pub(crate) fn compute_scale<C>(widget: &mut Widget<C>, ctx: &C, settings: Settings)
where
    C: View,
{
    let mut scale = 1.0;
    if widget.flags().contains(WidgetFlags::SCALE_VIEW) && !settings.world_space_handles {
        scale = ctx.pixel_size_at(widget.scale_anchor()) * settings.handle_px;
    }
    widget.set_scale(scale * widget.user_scale);
}
