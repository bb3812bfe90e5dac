// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pilot-wire heating modes for the X-4FP extension.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Heating mode of an X-4FP pilot-wire zone.
///
/// # Examples
///
/// ```
/// use ipx800_lib::types::PilotWireMode;
///
/// assert_eq!(PilotWireMode::Eco.as_num(), 1);
/// assert_eq!("3".parse::<PilotWireMode>().unwrap(), PilotWireMode::Off);
/// assert_eq!(PilotWireMode::try_from(5).unwrap(), PilotWireMode::ComfortMinus2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PilotWireMode {
    /// Comfort temperature.
    Comfort,
    /// Economy temperature.
    Eco,
    /// Frost protection.
    FrostProtection,
    /// Heating off.
    Off,
    /// Comfort minus one degree.
    ComfortMinus1,
    /// Comfort minus two degrees.
    ComfortMinus2,
}

impl PilotWireMode {
    /// Returns the numeric code used by `SetFP` commands.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Comfort => 0,
            Self::Eco => 1,
            Self::FrostProtection => 2,
            Self::Off => 3,
            Self::ComfortMinus1 => 4,
            Self::ComfortMinus2 => 5,
        }
    }
}

impl TryFrom<i64> for PilotWireMode {
    type Error = ValueError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Comfort),
            1 => Ok(Self::Eco),
            2 => Ok(Self::FrostProtection),
            3 => Ok(Self::Off),
            4 => Ok(Self::ComfortMinus1),
            5 => Ok(Self::ComfortMinus2),
            other => Err(ValueError::InvalidPilotWireMode(other.to_string())),
        }
    }
}

impl FromStr for PilotWireMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| ValueError::InvalidPilotWireMode(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for PilotWireMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_num())
    }
}
