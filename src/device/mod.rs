// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed accessors for the I/O and extensions of an IPX800.
//!
//! Each accessor borrows the shared [`Ipx800`] client and identifies its
//! channel by an index, or by an [`ExtensionAddress`] for four-channel
//! extensions. Accessors are cheap `Copy` values: build them on demand.
//!
//! ```no_run
//! use ipx800_lib::{Ipx800, Ipx800Config};
//! use ipx800_lib::types::{ExtensionAddress, PilotWireMode};
//!
//! # async fn example() -> ipx800_lib::Result<()> {
//! let ipx = Ipx800::new(
//!     Ipx800Config::new("192.168.1.240", "apikey").with_credentials("admin", "password"),
//! )?;
//!
//! ipx.relay(2).toggle().await?;
//! let temperature = ipx.xthl(1).temperature().await?;
//! ipx.x4fp(ExtensionAddress::new(1, 3)?).set_mode(PilotWireMode::Eco).await?;
//! # Ok(())
//! # }
//! ```

mod counter;
mod input;
mod kind;
mod relay;
mod virtual_io;
mod x4fp;
mod x4vr;
mod xdimmer;
mod xpwm;
mod xthl;

pub use counter::{Counter, CounterChange};
pub use input::{AnalogInput, DigitalInput, VirtualAnalogInput};
pub use kind::{DeviceKind, SwitchAction};
pub use relay::Relay;
pub use virtual_io::{VirtualInput, VirtualOutput};
pub use x4fp::X4Fp;
pub use x4vr::X4Vr;
pub use xdimmer::{DimmerState, XDimmer};
pub use xpwm::XPwm;
pub use xthl::{ThlMeasure, XThl};

use crate::protocol::Ipx800;
use crate::types::ExtensionAddress;

impl Ipx800 {
    /// Returns an accessor for relay `id`.
    #[must_use]
    pub fn relay(&self, id: u8) -> Relay<'_> {
        Relay::new(self, id)
    }

    /// Returns an accessor for digital input `id`.
    #[must_use]
    pub fn digital_input(&self, id: u8) -> DigitalInput<'_> {
        DigitalInput::new(self, id)
    }

    /// Returns an accessor for analog input `id`.
    #[must_use]
    pub fn analog_input(&self, id: u8) -> AnalogInput<'_> {
        AnalogInput::new(self, id)
    }

    /// Returns an accessor for virtual input `id`.
    #[must_use]
    pub fn virtual_input(&self, id: u8) -> VirtualInput<'_> {
        VirtualInput::new(self, id)
    }

    /// Returns an accessor for virtual output `id`.
    #[must_use]
    pub fn virtual_output(&self, id: u8) -> VirtualOutput<'_> {
        VirtualOutput::new(self, id)
    }

    /// Returns an accessor for virtual analog input `id`.
    #[must_use]
    pub fn virtual_analog_input(&self, id: u8) -> VirtualAnalogInput<'_> {
        VirtualAnalogInput::new(self, id)
    }

    /// Returns an accessor for counter `id`.
    #[must_use]
    pub fn counter(&self, id: u8) -> Counter<'_> {
        Counter::new(self, id)
    }

    /// Returns an accessor for X-Dimmer channel `id`.
    #[must_use]
    pub fn xdimmer(&self, id: u8) -> XDimmer<'_> {
        XDimmer::new(self, id)
    }

    /// Returns an accessor for X-PWM channel `id`.
    #[must_use]
    pub fn xpwm(&self, id: u8) -> XPwm<'_> {
        XPwm::new(self, id)
    }

    /// Returns an accessor for X-THL sensor `id`.
    #[must_use]
    pub fn xthl(&self, id: u8) -> XThl<'_> {
        XThl::new(self, id)
    }

    /// Returns an accessor for the X-4VR shutter at `address`.
    #[must_use]
    pub fn x4vr(&self, address: ExtensionAddress) -> X4Vr<'_> {
        X4Vr::new(self, address)
    }

    /// Returns an accessor for the X-4FP zone at `address`.
    #[must_use]
    pub fn x4fp(&self, address: ExtensionAddress) -> X4Fp<'_> {
        X4Fp::new(self, address)
    }
}
