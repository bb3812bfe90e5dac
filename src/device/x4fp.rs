// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! X-4FP pilot-wire heating zones.

use crate::device::DeviceKind;
use crate::error::{Error, ParseError};
use crate::protocol::Ipx800;
use crate::types::{ExtensionAddress, PilotWireMode};

/// `SetFP` number addressing every zone of every X-4FP.
const ALL_ZONES: u8 = 0;

/// A heating zone driven by an X-4FP extension.
#[derive(Debug, Clone, Copy)]
pub struct X4Fp<'a> {
    client: &'a Ipx800,
    address: ExtensionAddress,
}

impl<'a> X4Fp<'a> {
    const KIND: DeviceKind = DeviceKind::X4Fp;

    /// Creates an accessor for the zone at `address`.
    #[must_use]
    pub fn new(client: &'a Ipx800, address: ExtensionAddress) -> Self {
        Self { client, address }
    }

    /// Returns the zone address.
    #[must_use]
    pub fn address(&self) -> ExtensionAddress {
        self.address
    }

    /// Returns the key of this zone in state answers, e.g. `FP1 Zone 2`.
    #[must_use]
    pub fn key(&self) -> String {
        Self::KIND.zone_key(self.address)
    }

    /// Returns the current heating mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the mode is unknown.
    pub async fn mode(&self) -> Result<PilotWireMode, Error> {
        let key = self.key();
        let response = self
            .client
            .request(&Self::KIND.read_params(self.address.extension()))
            .await?;
        let code = response.integer(&key)?;
        PilotWireMode::try_from(code).map_err(|e| {
            Error::Parse(ParseError::InvalidValue {
                field: key,
                message: e.to_string(),
            })
        })
    }

    /// Sets the heating mode of this zone.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_mode(&self, mode: PilotWireMode) -> Result<(), Error> {
        self.client
            .request(&Self::KIND.set_command(self.address.number(), mode))
            .await?;
        Ok(())
    }

    /// Sets the heating mode of every zone of every X-4FP.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_mode_all(&self, mode: PilotWireMode) -> Result<(), Error> {
        self.client
            .request(&Self::KIND.set_command(ALL_ZONES, mode))
            .await?;
        Ok(())
    }
}
