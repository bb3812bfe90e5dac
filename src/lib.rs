// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ipx800_lib` - A Rust library to control a GCE IPX800 v4.
//!
//! This library provides async APIs to query and drive the gateway and its
//! extensions over its HTTP interfaces. Every interaction is a discrete
//! request/response exchange initiated by the caller.
//!
//! # Supported Devices
//!
//! - **Onboard I/O**: relays, digital and analog inputs, counters
//! - **Virtual I/O**: virtual inputs, outputs and analog inputs
//! - **Extensions**: X-Dimmer, X-PWM, X-THL, X-4VR (roller shutters),
//!   X-4FP (pilot-wire heating)
//!
//! # Quick Start
//!
//! ```no_run
//! use ipx800_lib::{Ipx800, Ipx800Config};
//! use ipx800_lib::types::{Level, Transition};
//!
//! #[tokio::main]
//! async fn main() -> ipx800_lib::Result<()> {
//!     let ipx = Ipx800::new(Ipx800Config::new("192.168.1.240", "apikey"))?;
//!
//!     if !ipx.ping().await {
//!         return Ok(());
//!     }
//!
//!     ipx.relay(1).on().await?;
//!     ipx.xdimmer(2)
//!         .set_level(Level::new(60)?, Transition::default())
//!         .await?;
//!
//!     let state = ipx.fetch_all_state().await?;
//!     println!("{} values", state.len());
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Failures are classified so callers can react differently to an
//! unreachable gateway, refused credentials, or a rejected request:
//!
//! ```no_run
//! use ipx800_lib::{Ipx800, Ipx800Config};
//!
//! # async fn example(ipx: &Ipx800) {
//! match ipx.relay(1).toggle().await {
//!     Ok(()) => {}
//!     Err(e) if e.is_connection_error() => eprintln!("gateway offline: {e}"),
//!     Err(e) => eprintln!("command failed: {e}"),
//! }
//! # }
//! ```

pub mod device;
pub mod error;
pub mod protocol;
pub mod types;

pub use device::{
    AnalogInput, Counter, DeviceKind, DigitalInput, Relay, VirtualAnalogInput, VirtualInput,
    VirtualOutput, X4Fp, X4Vr, XDimmer, XPwm, XThl,
};
pub use error::{Error, ParseError, ProtocolError, Result, TransportError, ValueError};
pub use protocol::{ApiResponse, Credentials, Ipx800, Ipx800Config, RequestParams, RetryPolicy};
pub use types::{ExtensionAddress, Level, PilotWireMode, ShutterAction, Transition};
