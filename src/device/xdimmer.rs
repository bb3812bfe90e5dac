// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! X-Dimmer channels.

use serde::Deserialize;

use crate::device::DeviceKind;
use crate::error::{Error, ValueError};
use crate::protocol::Ipx800;
use crate::types::{Level, Transition};

/// `SetG` value restoring the channel's previous level.
const RESTORE_LEVEL: u8 = 101;

/// State of one X-Dimmer channel.
///
/// The gateway reports each channel as a nested object:
///
/// ```json
/// {"G1": {"Etat": "ON", "Valeur": 80}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DimmerState {
    #[serde(rename = "Etat")]
    state: String,
    #[serde(rename = "Valeur")]
    value: u8,
}

impl DimmerState {
    /// Returns `true` if the channel is lit.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state == "ON"
    }

    /// Returns the brightness level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the gateway reported more than 100.
    pub fn level(&self) -> Result<Level, ValueError> {
        Level::new(self.value)
    }
}

/// A channel of an X-Dimmer extension.
///
/// # Examples
///
/// ```no_run
/// use ipx800_lib::{Ipx800, Ipx800Config};
/// use ipx800_lib::types::{Level, Transition};
///
/// # async fn example() -> ipx800_lib::Result<()> {
/// let ipx = Ipx800::new(Ipx800Config::new("192.168.1.240", "apikey"))?;
/// let dimmer = ipx.xdimmer(3);
///
/// dimmer.set_level(Level::new(40)?, Transition::from_millis(1000)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct XDimmer<'a> {
    client: &'a Ipx800,
    id: u8,
}

impl<'a> XDimmer<'a> {
    const KIND: DeviceKind = DeviceKind::XDimmer;

    /// Creates an accessor for dimmer channel `id`.
    #[must_use]
    pub fn new(client: &'a Ipx800, id: u8) -> Self {
        Self { client, id }
    }

    /// Returns the channel index.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Reads the channel state.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the state is missing.
    pub async fn state(&self) -> Result<DimmerState, Error> {
        let response = self.client.request(&Self::KIND.read_params(self.id)).await?;
        Ok(response.field(&Self::KIND.key(self.id))?)
    }

    /// Returns `true` if the channel is lit.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the state is missing.
    pub async fn is_on(&self) -> Result<bool, Error> {
        Ok(self.state().await?.is_on())
    }

    /// Returns the brightness level.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the state is invalid.
    pub async fn level(&self) -> Result<Level, Error> {
        Ok(self.state().await?.level()?)
    }

    /// Turns the channel on at its previous level.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn on(&self, transition: Transition) -> Result<(), Error> {
        self.send(RESTORE_LEVEL, transition).await
    }

    /// Turns the channel off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn off(&self, transition: Transition) -> Result<(), Error> {
        self.send(0, transition).await
    }

    /// Turns the channel off if lit, on otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if reading the state or the command fails.
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
    /// Returns error if the command fails.
    pub async fn set_level(&self, level: Level, transition: Transition) -> Result<(), Error> {
        self.send(level.value(), transition).await
    }

    async fn send(&self, value: u8, transition: Transition) -> Result<(), Error> {
        let params = Self::KIND
            .set_command(self.id, value)
            .with("Time", transition);
        self.client.request(&params).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimmer_state_from_json() {
        let state: DimmerState = serde_json::from_str(r#"{"Etat": "ON", "Valeur": 80}"#).unwrap();
        assert!(state.is_on());
        assert_eq!(state.level().unwrap().value(), 80);

        let state: DimmerState = serde_json::from_str(r#"{"Etat": "OFF", "Valeur": 0}"#).unwrap();
        assert!(!state.is_on());
    }

    #[test]
    fn dimmer_state_out_of_range_level() {
        let state: DimmerState =
            serde_json::from_str(r#"{"Etat": "ON", "Valeur": 101}"#).unwrap();
        assert!(state.level().is_err());
    }
}
