// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The suspended drag task.

use alloc::string::{String, ToString};

use holdfast_map::WidgetMap;
use holdfast_widget::host::{Dispatcher, Shell};
use holdfast_widget::{Button, Event, ModalSignal, TweakFlags};

/// What one resumed event did to the task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweakOutcome {
    /// The drag continues; park the task and resume it with the next event.
    Running,
    /// The drag ended normally; its edits stand.
    Finished,
    /// The drag was aborted; the widget's cancel hook has reverted it.
    Cancelled,
}

/// A drag in progress on one widget.
///
/// Holds what the next event needs: the dragged widget's name, the button
/// whose release ends the drag, and the current [`TweakFlags`]. Everything
/// heavier (grab offsets, value snapshots) lives in the widget's own
/// interaction state, which the map tears down when the task ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tweak {
    widget: String,
    init_button: Button,
    flags: TweakFlags,
}

impl Tweak {
    /// Starts a drag on the map's highlighted widget.
    ///
    /// Activates the widget, which primes its interaction and dispatches
    /// its command binding if it has one. A task is returned only when the
    /// widget handles events directly: command-bound widgets stay active
    /// under the dispatched command instead, and a failed dispatch leaves
    /// the map idle. Starting with nothing highlighted, or from anything
    /// but a press, is an invariant violation (debug assertion).
    pub fn start<C>(map: &mut WidgetMap<C>, ctx: &mut C, event: &Event) -> Option<Self>
    where
        C: Dispatcher + Shell,
    {
        let Event::Press { button, .. } = event else {
            debug_assert!(false, "drag must start from a press");
            return None;
        };
        let Some(name) = map.highlighted_name().map(str::to_string) else {
            debug_assert!(false, "drag started with nothing highlighted");
            return None;
        };
        let Some(addr) = map.locate(&name) else {
            return None;
        };
        let direct = map
            .widget(addr)
            .is_some_and(|w| w.has_interaction() && w.command().is_none());

        map.set_active(ctx, event, Some(addr));
        if map.active_name().is_none() || !direct {
            return None;
        }

        Some(Self {
            widget: name,
            init_button: *button,
            flags: TweakFlags::empty(),
        })
    }

    /// Name of the widget being dragged.
    #[must_use]
    pub fn widget_name(&self) -> &str {
        &self.widget
    }

    /// The current tweak flags.
    #[must_use]
    pub fn flags(&self) -> TweakFlags {
        self.flags
    }

    /// Consumes one event.
    ///
    /// Release of the initiating button or a confirm signal finishes the
    /// drag; a cancel signal delivers the widget's cancel hook and then
    /// tears down; precision signals adjust the flags. Every event that
    /// does not end the drag is forwarded to the widget's interaction with
    /// the flags current at that point.
    pub fn resume<C>(&mut self, map: &mut WidgetMap<C>, ctx: &mut C, event: &Event) -> TweakOutcome
    where
        C: Shell,
    {
        if map.active_name() != Some(self.widget.as_str()) {
            debug_assert!(false, "resumed a drag whose widget is no longer active");
            return TweakOutcome::Cancelled;
        }

        match event {
            Event::Release { button, .. } if *button == self.init_button => {
                map.deactivate(ctx);
                return TweakOutcome::Finished;
            }
            Event::Signal(ModalSignal::Confirm) => {
                map.deactivate(ctx);
                return TweakOutcome::Finished;
            }
            Event::Signal(ModalSignal::Cancel) => {
                map.cancel_active(ctx);
                return TweakOutcome::Cancelled;
            }
            Event::Signal(ModalSignal::PrecisionOn) => {
                self.flags |= TweakFlags::PRECISE;
            }
            Event::Signal(ModalSignal::PrecisionOff) => {
                self.flags -= TweakFlags::PRECISE;
            }
            _ => {}
        }

        map.deliver_to_active(ctx, event, self.flags);
        TweakOutcome::Running
    }
}
