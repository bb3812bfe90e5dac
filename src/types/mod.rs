// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for IPX800 device control.
//!
//! Each type checks its range at construction time so commands never carry
//! values the gateway would misinterpret.
//!
//! # Types
//!
//! - [`Level`] - Percentage level (0-100%)
//! - [`Transition`] - Fade duration in milliseconds
//! - [`ExtensionAddress`] - Channel on a four-channel extension
//! - [`ShutterAction`] - Open/close/stop/position for roller shutters
//! - [`PilotWireMode`] - Heating mode of a pilot-wire zone

mod address;
mod level;
mod pilot_wire;
mod shutter;
mod transition;

pub use address::ExtensionAddress;
pub use level::Level;
pub use pilot_wire::PilotWireMode;
pub use shutter::ShutterAction;
pub use transition::Transition;
