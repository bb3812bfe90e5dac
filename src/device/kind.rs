// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device categories and how they map to command and state keys.

use std::fmt;

use crate::protocol::RequestParams;
use crate::types::ExtensionAddress;

/// Kind of I/O or extension channel handled by the gateway.
///
/// Centralizes the naming scheme of the JSON API:
///
/// | Kind | `Get=` | State key | Write command |
/// |------|--------|-----------|---------------|
/// | Relay | `R` | `R1` | `SetR=1` / `ClearR=1` / `ToggleR=1` |
/// | Digital input | `D` | `D1` | - |
/// | Analog input | `A` | `A1` | - |
/// | Virtual input | `VI` | `VI1` | `SetVI=1` / `ClearVI=1` / `ToggleVI=1` |
/// | Virtual output | `VO` | `VO1` | `SetVO=1` / `ClearVO=1` / `ToggleVO=1` |
/// | Virtual analog input | `VA` | `VA1` | `SetVA01=<value>` |
/// | Counter | `C` | `C1` | `SetC01=<value>` |
/// | X-Dimmer | `G` | `G1` | `SetG01=<level>` |
/// | X-PWM | `XPWM\|1` | `PWM1` | CGI `SetPWM=1` |
/// | X-THL | `XTHL` | `THL1-TEMP` | - |
/// | X-4VR | `VR1` | `VR1-2` | `SetVR02=<closed %>` |
/// | X-4FP | `FP` | `FP1 Zone 2` | `SetFP02=<mode>` |
///
/// # Examples
///
/// ```
/// use ipx800_lib::device::{DeviceKind, SwitchAction};
/// use ipx800_lib::types::ExtensionAddress;
///
/// assert_eq!(DeviceKind::Relay.key(3), "R3");
/// assert_eq!(DeviceKind::XPwm.key(3), "PWM3");
///
/// let addr = ExtensionAddress::new(2, 1).unwrap();
/// assert_eq!(DeviceKind::X4Vr.zone_key(addr), "VR2-1");
/// assert_eq!(DeviceKind::X4Fp.zone_key(addr), "FP2 Zone 1");
///
/// let params = DeviceKind::VirtualOutput.switch_command(SwitchAction::Off, 4);
/// assert_eq!(params.to_query_string(), "ClearVO=4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Onboard relay.
    Relay,
    /// Onboard digital input.
    DigitalInput,
    /// Onboard analog input.
    AnalogInput,
    /// Virtual digital input.
    VirtualInput,
    /// Virtual digital output.
    VirtualOutput,
    /// Virtual analog input.
    VirtualAnalogInput,
    /// Pulse counter.
    Counter,
    /// X-Dimmer channel.
    XDimmer,
    /// X-PWM channel.
    XPwm,
    /// X-THL climate sensor.
    XThl,
    /// X-4VR roller-shutter channel.
    X4Vr,
    /// X-4FP pilot-wire heating zone.
    X4Fp,
}

impl DeviceKind {
    /// Returns the category code used in commands.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::Relay => "R",
            Self::DigitalInput => "D",
            Self::AnalogInput => "A",
            Self::VirtualInput => "VI",
            Self::VirtualOutput => "VO",
            Self::VirtualAnalogInput => "VA",
            Self::Counter => "C",
            Self::XDimmer => "G",
            Self::XPwm => "XPWM",
            Self::XThl => "XTHL",
            Self::X4Vr => "VR",
            Self::X4Fp => "FP",
        }
    }

    /// Returns the prefix of state keys in JSON answers.
    #[must_use]
    pub const fn key_prefix(self) -> &'static str {
        match self {
            Self::XPwm => "PWM",
            Self::XThl => "THL",
            other => other.category(),
        }
    }

    /// Returns the state key of channel `id`.
    #[must_use]
    pub fn key(self, id: u8) -> String {
        format!("{}{id}", self.key_prefix())
    }

    /// Returns the state key of a channel on a four-channel extension.
    #[must_use]
    pub fn zone_key(self, address: ExtensionAddress) -> String {
        match self {
            Self::X4Fp => format!(
                "{}{} Zone {}",
                self.key_prefix(),
                address.extension(),
                address.channel()
            ),
            _ => format!(
                "{}{}-{}",
                self.key_prefix(),
                address.extension(),
                address.channel()
            ),
        }
    }

    /// Returns the read command whose answer holds the state of `id`.
    ///
    /// Most categories are read as a whole; X-PWM is read per channel and
    /// X-4VR per extension, so `id` is the channel or extension index there.
    #[must_use]
    pub fn read_params(self, id: u8) -> RequestParams {
        match self {
            Self::XPwm => RequestParams::get(format!("{}|{id}", self.category())),
            Self::X4Vr => RequestParams::get(format!("{}{id}", self.category())),
            _ => RequestParams::get(self.category()),
        }
    }

    /// Returns an on/off/toggle command for channel `id`.
    #[must_use]
    pub fn switch_command(self, action: SwitchAction, id: u8) -> RequestParams {
        RequestParams::new().with(format!("{}{}", action.as_str(), self.category()), id)
    }

    /// Returns a `Set<category><NN>=<value>` command.
    ///
    /// `number` is rendered on two digits; `0` addresses every channel of
    /// the category where the gateway supports it.
    #[must_use]
    pub fn set_command(self, number: u8, value: impl fmt::Display) -> RequestParams {
        RequestParams::new().with(format!("Set{}{number:02}", self.category()), value)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// Action of a switch command on relays and virtual I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchAction {
    /// Turn on (`Set`).
    On,
    /// Turn off (`Clear`).
    Off,
    /// Invert the current state (`Toggle`).
    Toggle,
}

impl SwitchAction {
    /// Returns the command prefix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "Set",
            Self::Off => "Clear",
            Self::Toggle => "Toggle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        assert_eq!(DeviceKind::DigitalInput.key(2), "D2");
        assert_eq!(DeviceKind::AnalogInput.key(1), "A1");
        assert_eq!(DeviceKind::VirtualAnalogInput.key(12), "VA12");
        assert_eq!(DeviceKind::XDimmer.key(4), "G4");
        assert_eq!(DeviceKind::XThl.key(1), "THL1");
    }

    #[test]
    fn read_params_per_category() {
        assert_eq!(DeviceKind::Relay.read_params(5).value("Get"), Some("R"));
        assert_eq!(DeviceKind::XThl.read_params(1).value("Get"), Some("XTHL"));
        assert_eq!(DeviceKind::XPwm.read_params(7).value("Get"), Some("XPWM|7"));
        assert_eq!(DeviceKind::X4Vr.read_params(2).value("Get"), Some("VR2"));
        assert_eq!(DeviceKind::X4Fp.read_params(2).value("Get"), Some("FP"));
    }

    #[test]
    fn switch_commands() {
        let on = DeviceKind::Relay.switch_command(SwitchAction::On, 3);
        assert_eq!(on.value("SetR"), Some("3"));

        let toggle = DeviceKind::VirtualInput.switch_command(SwitchAction::Toggle, 12);
        assert_eq!(toggle.value("ToggleVI"), Some("12"));
    }

    #[test]
    fn set_commands_use_two_digits() {
        assert_eq!(
            DeviceKind::XDimmer.set_command(3, 101).to_query_string(),
            "SetG03=101"
        );
        assert_eq!(
            DeviceKind::X4Vr.set_command(10, 30).to_query_string(),
            "SetVR10=30"
        );
        assert_eq!(
            DeviceKind::X4Fp.set_command(0, 1).to_query_string(),
            "SetFP00=1"
        );
        assert_eq!(
            DeviceKind::VirtualAnalogInput
                .set_command(4, 65535_u16)
                .to_query_string(),
            "SetVA04=65535"
        );
    }
}
