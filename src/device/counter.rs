// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pulse counters.

use std::fmt;

use crate::device::DeviceKind;
use crate::error::Error;
use crate::protocol::Ipx800;

/// Change applied to a counter by a `SetC` command.
///
/// # Examples
///
/// ```
/// use ipx800_lib::device::CounterChange;
///
/// assert_eq!(CounterChange::Set(120).to_string(), "120");
/// assert_eq!(CounterChange::Increment(5).to_string(), "+5");
/// assert_eq!(CounterChange::Decrement(1).to_string(), "-1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterChange {
    /// Overwrite the counter.
    Set(u32),
    /// Add to the counter.
    Increment(u32),
    /// Subtract from the counter.
    Decrement(u32),
}

impl fmt::Display for CounterChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(value) => write!(f, "{value}"),
            Self::Increment(step) => write!(f, "+{step}"),
            Self::Decrement(step) => write!(f, "-{step}"),
        }
    }
}

/// A pulse counter of the IPX800.
#[derive(Debug, Clone, Copy)]
pub struct Counter<'a> {
    client: &'a Ipx800,
    id: u8,
}

impl<'a> Counter<'a> {
    const KIND: DeviceKind = DeviceKind::Counter;

    /// Creates an accessor for counter `id`.
    #[must_use]
    pub fn new(client: &'a Ipx800, id: u8) -> Self {
        Self { client, id }
    }

    /// Returns the counter index.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns the current count.
    ///
    /// The gateway may report it as an integer or a float.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the value is missing.
    pub async fn value(&self) -> Result<f64, Error> {
        let response = self.client.request(&Self::KIND.read_params(self.id)).await?;
        Ok(response.number(&Self::KIND.key(self.id))?)
    }

    /// Overwrites the count.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_value(&self, value: u32) -> Result<(), Error> {
        self.apply(CounterChange::Set(value)).await
    }

    /// Adds `step` to the count.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn increment(&self, step: u32) -> Result<(), Error> {
        self.apply(CounterChange::Increment(step)).await
    }

    /// Subtracts `step` from the count.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn decrement(&self, step: u32) -> Result<(), Error> {
        self.apply(CounterChange::Decrement(step)).await
    }

    /// Applies a change to the count.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn apply(&self, change: CounterChange) -> Result<(), Error> {
        self.client
            .request(&Self::KIND.set_command(self.id, change))
            .await?;
        Ok(())
    }
}
