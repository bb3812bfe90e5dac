// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Onboard relays.

use crate::device::{DeviceKind, SwitchAction};
use crate::error::Error;
use crate::protocol::Ipx800;

/// A relay of the IPX800.
///
/// # Examples
///
/// ```no_run
/// use ipx800_lib::{Ipx800, Ipx800Config};
///
/// # async fn example() -> ipx800_lib::Result<()> {
/// let ipx = Ipx800::new(Ipx800Config::new("192.168.1.240", "apikey"))?;
/// let relay = ipx.relay(1);
///
/// if !relay.is_on().await? {
///     relay.on().await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Relay<'a> {
    client: &'a Ipx800,
    id: u8,
}

impl<'a> Relay<'a> {
    const KIND: DeviceKind = DeviceKind::Relay;

    /// Creates an accessor for relay `id`.
    #[must_use]
    pub fn new(client: &'a Ipx800, id: u8) -> Self {
        Self { client, id }
    }

    /// Returns the relay index.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns the key of this relay in state answers.
    #[must_use]
    pub fn key(&self) -> String {
        Self::KIND.key(self.id)
    }

    /// Returns `true` if the relay is closed.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the state is missing.
    pub async fn is_on(&self) -> Result<bool, Error> {
        let response = self.client.request(&Self::KIND.read_params(self.id)).await?;
        Ok(response.flag(&self.key())?)
    }

    /// Turns the relay on.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn on(&self) -> Result<(), Error> {
        self.switch(SwitchAction::On).await
    }

    /// Turns the relay off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn off(&self) -> Result<(), Error> {
        self.switch(SwitchAction::Off).await
    }

    /// Toggles the relay.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn toggle(&self) -> Result<(), Error> {
        self.switch(SwitchAction::Toggle).await
    }

    async fn switch(&self, action: SwitchAction) -> Result<(), Error> {
        self.client
            .request(&Self::KIND.switch_command(action, self.id))
            .await?;
        Ok(())
    }
}
