// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percentage level type for dimmers, PWM channels and roller shutters.

use std::fmt;

use crate::error::ValueError;

/// A level expressed as a percentage (0-100).
///
/// Used for X-Dimmer brightness, X-PWM duty cycle and the opening of an
/// X-4VR roller shutter.
///
/// # Examples
///
/// ```
/// use ipx800_lib::types::Level;
///
/// let level = Level::new(75).unwrap();
/// assert_eq!(level.value(), 75);
/// assert_eq!(level.inverted().value(), 25);
///
/// assert!(Level::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(u8);

impl Level {
    /// Minimum level (0%).
    pub const MIN: Self = Self(0);

    /// Maximum level (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a level, clamping to the valid range.
    ///
    /// ```
    /// use ipx800_lib::types::Level;
    ///
    /// assert_eq!(Level::clamped(150).value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Creates a level from a raw gateway reading.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the reading is negative or above 100.
    pub fn from_raw(raw: i64) -> Result<Self, ValueError> {
        match u8::try_from(raw) {
            Ok(value) => Self::new(value),
            Err(_) => Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u32::try_from(raw).unwrap_or(u32::MAX),
            }),
        }
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the complementary level (`100 - value`).
    ///
    /// Roller shutters report how far they are closed; accessors expose how
    /// far they are open.
    #[must_use]
    pub const fn inverted(&self) -> Self {
        Self(100 - self.0)
    }

    /// Returns `true` for a level of 0.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Level {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_valid_values() {
        for v in 0..=100 {
            assert_eq!(Level::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn level_invalid_value() {
        assert!(Level::new(101).is_err());
    }

    #[test]
    fn level_clamped() {
        assert_eq!(Level::clamped(50).value(), 50);
        assert_eq!(Level::clamped(255).value(), 100);
    }

    #[test]
    fn level_from_raw() {
        assert_eq!(Level::from_raw(30).unwrap().value(), 30);
        assert!(Level::from_raw(-1).is_err());
        assert!(Level::from_raw(101).is_err());
        assert!(Level::from_raw(1_000).is_err());
    }

    #[test]
    fn level_inverted() {
        assert_eq!(Level::new(30).unwrap().inverted().value(), 70);
        assert_eq!(Level::MIN.inverted(), Level::MAX);
    }

    #[test]
    fn level_display() {
        assert_eq!(Level::new(42).unwrap().to_string(), "42%");
    }
}
