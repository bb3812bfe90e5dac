// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transition time for dimmer and PWM level changes.

use std::fmt;
use std::time::Duration;

/// Fade duration sent along with X-Dimmer (`Time`) and X-PWM (`PWMDelay`)
/// commands, in milliseconds.
///
/// # Examples
///
/// ```
/// use ipx800_lib::types::Transition;
/// use std::time::Duration;
///
/// assert_eq!(Transition::default().as_millis(), 500);
/// assert_eq!(Transition::from(Duration::from_secs(2)).as_millis(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition(u32);

impl Transition {
    /// Transition used when none is given.
    pub const DEFAULT: Self = Self(500);

    /// Immediate change.
    pub const INSTANT: Self = Self(0);

    /// Creates a transition lasting `millis` milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> u32 {
        self.0
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Duration> for Transition {
    /// Durations longer than `u32::MAX` milliseconds saturate.
    fn from(duration: Duration) -> Self {
        Self(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_display_is_raw_millis() {
        assert_eq!(Transition::from_millis(1500).to_string(), "1500");
    }

    #[test]
    fn transition_from_huge_duration_saturates() {
        let t = Transition::from(Duration::from_secs(u64::MAX / 1000));
        assert_eq!(t.as_millis(), u32::MAX);
    }
}
