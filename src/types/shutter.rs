// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roller-shutter actions for the X-4VR extension.

use crate::types::Level;

/// An action sent to an X-4VR roller-shutter channel.
///
/// The gateway speaks in "closed percentage": 0 is fully open, 100 fully
/// closed and 101 stops a moving shutter. [`ShutterAction::Position`] takes
/// the opening level and converts it.
///
/// # Examples
///
/// ```
/// use ipx800_lib::types::{Level, ShutterAction};
///
/// assert_eq!(ShutterAction::Open.raw_value(), 0);
/// assert_eq!(ShutterAction::Close.raw_value(), 100);
/// assert_eq!(ShutterAction::Stop.raw_value(), 101);
/// assert_eq!(ShutterAction::Position(Level::new(70).unwrap()).raw_value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShutterAction {
    /// Open completely.
    Open,
    /// Close completely.
    Close,
    /// Stop the current movement.
    Stop,
    /// Move to the given opening level.
    Position(Level),
}

impl ShutterAction {
    /// Raw value understood by the `SetVR` command.
    pub const STOP_VALUE: u8 = 101;

    /// Returns the raw `SetVR` value for this action.
    #[must_use]
    pub const fn raw_value(&self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Close => 100,
            Self::Stop => Self::STOP_VALUE,
            Self::Position(level) => level.inverted().value(),
        }
    }
}
