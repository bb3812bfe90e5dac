// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! X-4VR roller-shutter channels.

use crate::device::DeviceKind;
use crate::error::{Error, ParseError};
use crate::protocol::Ipx800;
use crate::types::{ExtensionAddress, Level, ShutterAction};

/// A roller shutter driven by an X-4VR extension.
///
/// The gateway reports how far a shutter is closed; this accessor exposes
/// how far it is open.
///
/// # Examples
///
/// ```no_run
/// use ipx800_lib::{Ipx800, Ipx800Config};
/// use ipx800_lib::types::{ExtensionAddress, Level};
///
/// # async fn example() -> ipx800_lib::Result<()> {
/// let ipx = Ipx800::new(Ipx800Config::new("192.168.1.240", "apikey"))?;
/// let shutter = ipx.x4vr(ExtensionAddress::new(1, 2)?);
///
/// shutter.set_level(Level::new(70)?).await?;
/// println!("open at {}", shutter.level().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct X4Vr<'a> {
    client: &'a Ipx800,
    address: ExtensionAddress,
}

impl<'a> X4Vr<'a> {
    const KIND: DeviceKind = DeviceKind::X4Vr;

    /// Creates an accessor for the shutter at `address`.
    #[must_use]
    pub fn new(client: &'a Ipx800, address: ExtensionAddress) -> Self {
        Self { client, address }
    }

    /// Returns the shutter address.
    #[must_use]
    pub fn address(&self) -> ExtensionAddress {
        self.address
    }

    /// Returns the key of this shutter in state answers, e.g. `VR1-2`.
    #[must_use]
    pub fn key(&self) -> String {
        Self::KIND.zone_key(self.address)
    }

    /// Returns the opening level (100 = fully open).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the position is invalid.
    pub async fn level(&self) -> Result<Level, Error> {
        Ok(self.closed_level().await?.inverted())
    }

    /// Returns `true` unless the shutter is fully closed.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the position is invalid.
    pub async fn is_open(&self) -> Result<bool, Error> {
        Ok(self.closed_level().await? < Level::MAX)
    }

    /// Opens the shutter completely.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn open(&self) -> Result<(), Error> {
        self.send(ShutterAction::Open).await
    }

    /// Closes the shutter completely.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn close(&self) -> Result<(), Error> {
        self.send(ShutterAction::Close).await
    }

    /// Stops the shutter.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn stop(&self) -> Result<(), Error> {
        self.send(ShutterAction::Stop).await
    }

    /// Moves the shutter to the given opening level.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_level(&self, level: Level) -> Result<(), Error> {
        self.send(ShutterAction::Position(level)).await
    }

    /// Sends an action to the shutter.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn send(&self, action: ShutterAction) -> Result<(), Error> {
        let params = Self::KIND.set_command(self.address.number(), action.raw_value());
        self.client.request(&params).await?;
        Ok(())
    }

    async fn closed_level(&self) -> Result<Level, Error> {
        let key = self.key();
        let response = self
            .client
            .request(&Self::KIND.read_params(self.address.extension()))
            .await?;
        let raw = response.integer(&key)?;
        Level::from_raw(raw).map_err(|e| {
            Error::Parse(ParseError::InvalidValue {
                field: key,
                message: e.to_string(),
            })
        })
    }
}
