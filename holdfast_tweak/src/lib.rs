// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=holdfast_tweak --heading-base-level=0

//! Holdfast Tweak: the modal drag task for viewport handles.
//!
//! A tweak is the span between pressing a button on a highlighted widget
//! and releasing it. Hosts are event-driven, so the span is represented as
//! a suspended-state object: [`Tweak::start`] activates the widget and
//! returns the task, the host parks it, and [`Tweak::resume`] consumes one
//! event at a time until it reports [`Finished`](TweakOutcome::Finished)
//! or [`Cancelled`](TweakOutcome::Cancelled).
//!
//! While the task runs, every event is forwarded to the widget's
//! [`Interaction`](holdfast_widget::Interaction) together with the current
//! [`TweakFlags`]. Precision signals adjust the flags in place; releasing
//! the initiating button or a confirm signal finishes the task, and a
//! cancel signal delivers the widget's cancel hook before teardown so
//! optimistic edits can be reverted.
//!
//! Widgets bound to a host command rather than a direct interaction do not
//! produce a task at all: the dispatched command owns the drag, and the
//! map's [`drive_active`](holdfast_map::WidgetMap::drive_active) keeps the
//! widget serviced until the host reports the command done.
//!
//! [`DragTrack`] is the companion helper interactions embed to turn raw
//! motion into deltas, damping them while precision mode is held.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drag;
mod tweak;

pub use drag::{DragTrack, PRECISION_FACTOR};
pub use holdfast_widget::TweakFlags;
pub use tweak::{Tweak, TweakOutcome};
