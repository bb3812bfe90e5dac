// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Addressing of channels on four-channel extensions (X-4VR, X-4FP).

use std::fmt;

use crate::error::ValueError;

/// A channel on a four-channel extension.
///
/// Extensions are numbered from 1 and each carries four channels numbered
/// 1 to 4. Write commands address a channel by its global number
/// `(extension - 1) * 4 + channel`, rendered on two digits.
///
/// # Examples
///
/// ```
/// use ipx800_lib::types::ExtensionAddress;
///
/// let addr = ExtensionAddress::new(2, 3).unwrap();
/// assert_eq!(addr.number(), 7);
///
/// assert!(ExtensionAddress::new(0, 1).is_err());
/// assert!(ExtensionAddress::new(1, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtensionAddress {
    extension: u8,
    channel: u8,
}

impl ExtensionAddress {
    /// Channels carried by one extension.
    pub const CHANNELS_PER_EXTENSION: u8 = 4;

    /// Highest extension index whose channel numbers still fit two digits.
    pub const MAX_EXTENSION: u8 = 24;

    /// Creates an address for `channel` on `extension`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the extension is outside
    /// `1..=24` or the channel outside `1..=4`.
    pub fn new(extension: u8, channel: u8) -> Result<Self, ValueError> {
        if !(1..=Self::MAX_EXTENSION).contains(&extension) {
            return Err(ValueError::OutOfRange {
                min: 1,
                max: u32::from(Self::MAX_EXTENSION),
                actual: u32::from(extension),
            });
        }
        if !(1..=Self::CHANNELS_PER_EXTENSION).contains(&channel) {
            return Err(ValueError::OutOfRange {
                min: 1,
                max: u32::from(Self::CHANNELS_PER_EXTENSION),
                actual: u32::from(channel),
            });
        }
        Ok(Self { extension, channel })
    }

    /// Returns the extension index.
    #[must_use]
    pub const fn extension(&self) -> u8 {
        self.extension
    }

    /// Returns the channel index within the extension.
    #[must_use]
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Returns the global channel number used by write commands.
    #[must_use]
    pub const fn number(&self) -> u8 {
        (self.extension - 1) * Self::CHANNELS_PER_EXTENSION + self.channel
    }
}

impl fmt::Display for ExtensionAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.extension, self.channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_counts_four_channels_per_extension() {
        assert_eq!(ExtensionAddress::new(1, 1).unwrap().number(), 1);
        assert_eq!(ExtensionAddress::new(1, 4).unwrap().number(), 4);
        assert_eq!(ExtensionAddress::new(2, 1).unwrap().number(), 5);
        assert_eq!(ExtensionAddress::new(3, 2).unwrap().number(), 10);
        assert_eq!(ExtensionAddress::new(24, 4).unwrap().number(), 96);
    }

    #[test]
    fn number_is_not_a_product() {
        // 2 * 3 would be 6
        assert_eq!(ExtensionAddress::new(2, 3).unwrap().number(), 7);
    }

    #[test]
    fn invalid_addresses() {
        assert!(ExtensionAddress::new(0, 1).is_err());
        assert!(ExtensionAddress::new(25, 1).is_err());
        assert!(ExtensionAddress::new(1, 0).is_err());
        assert!(ExtensionAddress::new(1, 5).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(ExtensionAddress::new(1, 3).unwrap().to_string(), "1-3");
    }
}
