// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! X-PWM channels.
//!
//! Levels are read through the JSON API, but the JSON API cannot drive PWM
//! channels: writes go through the legacy CGI endpoint and therefore need
//! the gateway credentials.

use crate::device::DeviceKind;
use crate::error::{Error, ParseError};
use crate::protocol::{ApiResponse, Ipx800, RequestParams, XPWM_ALL_CHANNELS};
use crate::types::{Level, Transition};

/// A channel of an X-PWM extension.
#[derive(Debug, Clone, Copy)]
pub struct XPwm<'a> {
    client: &'a Ipx800,
    id: u8,
}

impl<'a> XPwm<'a> {
    const KIND: DeviceKind = DeviceKind::XPwm;

    /// Creates an accessor for PWM channel `id`.
    #[must_use]
    pub fn new(client: &'a Ipx800, id: u8) -> Self {
        Self { client, id }
    }

    /// Returns the channel index.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns the duty cycle of the channel.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the level is invalid.
    pub async fn level(&self) -> Result<Level, Error> {
        let key = Self::KIND.key(self.id);
        let response = self.client.request(&Self::KIND.read_params(self.id)).await?;
        let raw = response.integer(&key)?;
        Level::from_raw(raw).map_err(|e| {
            Error::Parse(ParseError::InvalidValue {
                field: key,
                message: e.to_string(),
            })
        })
    }

    /// Returns `true` if the duty cycle is above zero.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the level is invalid.
    pub async fn is_on(&self) -> Result<bool, Error> {
        Ok(!self.level().await?.is_off())
    }

    /// Reads the levels of every X-PWM channel (`PWM1` to `PWM24`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn all_channels(&self) -> Result<ApiResponse, Error> {
        self.client
            .request(&RequestParams::get(XPWM_ALL_CHANNELS))
            .await
    }

    /// Sets the channel to 100%.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn on(&self, transition: Transition) -> Result<(), Error> {
        self.set_level(Level::MAX, transition).await
    }

    /// Sets the channel to 0%.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn off(&self, transition: Transition) -> Result<(), Error> {
        self.set_level(Level::MIN, transition).await
    }

    /// Turns the channel off if active, on otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if reading the level or the command fails.
    pub async fn toggle(&self, transition: Transition) -> Result<(), Error> {
        if self.is_on().await? {
            self.off(transition).await
        } else {
            self.on(transition).await
        }
    }

    /// Fades the channel to `level`.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails, including
    /// `ProtocolError::AuthenticationFailed` on wrong credentials.
    pub async fn set_level(&self, level: Level, transition: Transition) -> Result<(), Error> {
        let params = RequestParams::new()
            .with("SetPWM", self.id)
            .with("PWMValue", level.value())
            .with("PWMDelay", transition);
        self.client.request_legacy(&params).await?;
        Ok(())
    }
}
