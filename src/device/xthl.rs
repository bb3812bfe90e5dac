// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! X-THL temperature, humidity and luminosity sensors.

use crate::device::DeviceKind;
use crate::error::Error;
use crate::protocol::Ipx800;

/// A quantity measured by an X-THL sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThlMeasure {
    /// Temperature in degrees Celsius.
    Temperature,
    /// Relative humidity in percent.
    Humidity,
    /// Luminosity in lux.
    Luminosity,
}

impl ThlMeasure {
    /// Returns the suffix of the state key.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Temperature => "TEMP",
            Self::Humidity => "HUM",
            Self::Luminosity => "LUM",
        }
    }
}

/// An X-THL climate sensor.
#[derive(Debug, Clone, Copy)]
pub struct XThl<'a> {
    client: &'a Ipx800,
    id: u8,
}

impl<'a> XThl<'a> {
    const KIND: DeviceKind = DeviceKind::XThl;

    /// Creates an accessor for sensor `id`.
    #[must_use]
    pub fn new(client: &'a Ipx800, id: u8) -> Self {
        Self { client, id }
    }

    /// Returns the sensor index.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns the key of a measure in state answers, e.g. `THL1-TEMP`.
    #[must_use]
    pub fn key(&self, measure: ThlMeasure) -> String {
        format!("{}-{}", Self::KIND.key(self.id), measure.suffix())
    }

    /// Reads one measure.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the value is missing.
    pub async fn measure(&self, measure: ThlMeasure) -> Result<f64, Error> {
        let response = self.client.request(&Self::KIND.read_params(self.id)).await?;
        Ok(response.number(&self.key(measure))?)
    }

    /// Reads the temperature in degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the value is missing.
    pub async fn temperature(&self) -> Result<f64, Error> {
        self.measure(ThlMeasure::Temperature).await
    }

    /// Reads the relative humidity in percent.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the value is missing.
    pub async fn humidity(&self) -> Result<f64, Error> {
        self.measure(ThlMeasure::Humidity).await
    }

    /// Reads the luminosity in lux.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the value is missing.
    pub async fn luminosity(&self) -> Result<f64, Error> {
        self.measure(ThlMeasure::Luminosity).await
    }
}
