// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events and interaction flags delivered to widgets.
//!
//! Hosts translate their native input layer into these small types before
//! handing events to a widget map or a tweak task. Modal keybindings (escape,
//! return, shift-for-precision and so on) arrive pre-translated as
//! [`ModalSignal`]s, keeping keymap handling entirely on the host side.

use kurbo::Point;

/// A pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// The primary button.
    Left,
    /// The middle button or wheel press.
    Middle,
    /// The secondary button.
    Right,
}

/// Keyboard modifier state carried alongside pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift is held.
    pub shift: bool,
    /// Control is held.
    pub ctrl: bool,
    /// Alt is held.
    pub alt: bool,
}

/// A pre-translated modal signal for an in-progress interaction.
///
/// These are produced by the host's keymap layer, not by raw key matching
/// inside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalSignal {
    /// Abort the interaction and revert any optimistic edits.
    Cancel,
    /// Finish the interaction, keeping its result.
    Confirm,
    /// Enter precision mode (smaller drag deltas).
    PrecisionOn,
    /// Leave precision mode.
    PrecisionOff,
}

/// An input event in the host viewport's screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// The pointer moved.
    Motion {
        /// Pointer position.
        pos: Point,
        /// Modifier state.
        mods: Modifiers,
    },
    /// A button was pressed.
    Press {
        /// The pressed button.
        button: Button,
        /// Pointer position.
        pos: Point,
        /// Modifier state.
        mods: Modifiers,
    },
    /// A button was released.
    Release {
        /// The released button.
        button: Button,
        /// Pointer position.
        pos: Point,
        /// Modifier state.
        mods: Modifiers,
    },
    /// A modal signal from the host's keymap layer.
    Signal(ModalSignal),
}

impl Event {
    /// The pointer position, for event kinds that carry one.
    #[must_use]
    pub fn pos(&self) -> Option<Point> {
        match self {
            Self::Motion { pos, .. } | Self::Press { pos, .. } | Self::Release { pos, .. } => {
                Some(*pos)
            }
            Self::Signal(_) => None,
        }
    }

    /// The modifier state, for event kinds that carry one.
    #[must_use]
    pub fn mods(&self) -> Option<Modifiers> {
        match self {
            Self::Motion { mods, .. } | Self::Press { mods, .. } | Self::Release { mods, .. } => {
                Some(*mods)
            }
            Self::Signal(_) => None,
        }
    }
}

bitflags::bitflags! {
    /// Flags describing the state of an in-progress tweak, passed to
    /// [`Interaction::handle`](crate::Interaction::handle) with every event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct TweakFlags: u8 {
        /// Precision mode is held; drag deltas should be damped.
        const PRECISE = 1 << 0;
    }
}
