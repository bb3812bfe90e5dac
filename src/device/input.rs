// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Digital, analog and virtual analog inputs.

use crate::device::DeviceKind;
use crate::error::Error;
use crate::protocol::Ipx800;

/// An onboard digital input.
#[derive(Debug, Clone, Copy)]
pub struct DigitalInput<'a> {
    client: &'a Ipx800,
    id: u8,
}

impl<'a> DigitalInput<'a> {
    const KIND: DeviceKind = DeviceKind::DigitalInput;

    /// Creates an accessor for digital input `id`.
    #[must_use]
    pub fn new(client: &'a Ipx800, id: u8) -> Self {
        Self { client, id }
    }

    /// Returns the input index.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns `true` if the input is active.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the state is missing.
    pub async fn is_on(&self) -> Result<bool, Error> {
        let response = self.client.request(&Self::KIND.read_params(self.id)).await?;
        Ok(response.flag(&Self::KIND.key(self.id))?)
    }
}

/// An onboard analog input.
///
/// The value is the raw reading of the gateway; conversion to a physical
/// unit depends on the wired sensor.
#[derive(Debug, Clone, Copy)]
pub struct AnalogInput<'a> {
    client: &'a Ipx800,
    id: u8,
}

impl<'a> AnalogInput<'a> {
    const KIND: DeviceKind = DeviceKind::AnalogInput;

    /// Creates an accessor for analog input `id`.
    #[must_use]
    pub fn new(client: &'a Ipx800, id: u8) -> Self {
        Self { client, id }
    }

    /// Returns the input index.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns the current reading.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the value is missing.
    pub async fn value(&self) -> Result<f64, Error> {
        let response = self.client.request(&Self::KIND.read_params(self.id)).await?;
        Ok(response.number(&Self::KIND.key(self.id))?)
    }
}

/// A virtual analog input.
#[derive(Debug, Clone, Copy)]
pub struct VirtualAnalogInput<'a> {
    client: &'a Ipx800,
    id: u8,
}

impl<'a> VirtualAnalogInput<'a> {
    const KIND: DeviceKind = DeviceKind::VirtualAnalogInput;

    /// Creates an accessor for virtual analog input `id`.
    #[must_use]
    pub fn new(client: &'a Ipx800, id: u8) -> Self {
        Self { client, id }
    }

    /// Returns the input index.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns the current value.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the value is missing.
    pub async fn value(&self) -> Result<f64, Error> {
        let response = self.client.request(&Self::KIND.read_params(self.id)).await?;
        Ok(response.number(&Self::KIND.key(self.id))?)
    }

    /// Sets the value (16-bit register).
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_value(&self, value: u16) -> Result<(), Error> {
        self.client
            .request(&Self::KIND.set_command(self.id, value))
            .await?;
        Ok(())
    }
}
