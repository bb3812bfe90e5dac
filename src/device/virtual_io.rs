// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Virtual inputs and outputs.
//!
//! Virtual I/O are software flags of the gateway, usable in its scenarios
//! like physical inputs and relays.

use crate::device::{DeviceKind, SwitchAction};
use crate::error::Error;
use crate::protocol::Ipx800;

/// A virtual digital input.
#[derive(Debug, Clone, Copy)]
pub struct VirtualInput<'a> {
    client: &'a Ipx800,
    id: u8,
}

impl<'a> VirtualInput<'a> {
    const KIND: DeviceKind = DeviceKind::VirtualInput;

    /// Creates an accessor for virtual input `id`.
    #[must_use]
    pub fn new(client: &'a Ipx800, id: u8) -> Self {
        Self { client, id }
    }

    /// Returns the input index.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns `true` if the input is set.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the state is missing.
    pub async fn is_on(&self) -> Result<bool, Error> {
        read_flag(self.client, Self::KIND, self.id).await
    }

    /// Sets the input.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn on(&self) -> Result<(), Error> {
        switch(self.client, Self::KIND, SwitchAction::On, self.id).await
    }

    /// Clears the input.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn off(&self) -> Result<(), Error> {
        switch(self.client, Self::KIND, SwitchAction::Off, self.id).await
    }

    /// Toggles the input.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn toggle(&self) -> Result<(), Error> {
        switch(self.client, Self::KIND, SwitchAction::Toggle, self.id).await
    }
}

/// A virtual digital output.
#[derive(Debug, Clone, Copy)]
pub struct VirtualOutput<'a> {
    client: &'a Ipx800,
    id: u8,
}

impl<'a> VirtualOutput<'a> {
    const KIND: DeviceKind = DeviceKind::VirtualOutput;

    /// Creates an accessor for virtual output `id`.
    #[must_use]
    pub fn new(client: &'a Ipx800, id: u8) -> Self {
        Self { client, id }
    }

    /// Returns the output index.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns the key of this output in state answers.
    #[must_use]
    pub fn key(&self) -> String {
        Self::KIND.key(self.id)
    }

    /// Returns `true` if the output is set.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the state is missing.
    pub async fn is_on(&self) -> Result<bool, Error> {
        read_flag(self.client, Self::KIND, self.id).await
    }

    /// Sets the output.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn on(&self) -> Result<(), Error> {
        switch(self.client, Self::KIND, SwitchAction::On, self.id).await
    }

    /// Clears the output.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn off(&self) -> Result<(), Error> {
        switch(self.client, Self::KIND, SwitchAction::Off, self.id).await
    }

    /// Toggles the output.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn toggle(&self) -> Result<(), Error> {
        switch(self.client, Self::KIND, SwitchAction::Toggle, self.id).await
    }
}

async fn read_flag(client: &Ipx800, kind: DeviceKind, id: u8) -> Result<bool, Error> {
    let response = client.request(&kind.read_params(id)).await?;
    Ok(response.flag(&kind.key(id))?)
}

async fn switch(
    client: &Ipx800,
    kind: DeviceKind,
    action: SwitchAction,
    id: u8,
) -> Result<(), Error> {
    client.request(&kind.switch_command(action, id)).await?;
    Ok(())
}
