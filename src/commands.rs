//! Discrete inputs to the cab controller: driver commands, host keys,
//! beacons and resets.
//!
//! Every input is a closed enum matched exhaustively by the controller, so a
//! new variant cannot be left unhandled.
//!
//! # Keys vs Commands
//!
//! The host reports raw [`VirtualKey`]s. [`CabCommand::from_key`] maps the
//! bound keys onto cab actions; route beacons feed the same
//! [`CabCommand`]s, so an AI-driven indicator change behaves exactly like a
//! driver pressing the switch.
//!
//! ```rust
//! use lrv_cab::{CabCommand, TurnSignal, VirtualKey};
//!
//! assert_eq!(
//!     CabCommand::from_key(VirtualKey::D),
//!     Some(CabCommand::Indicator(TurnSignal::Left))
//! );
//! assert_eq!(CabCommand::from_key(VirtualKey::C1), None);
//! ```

use crate::indices::{beacon, panel, PanelIndex};
use crate::state::{IndicatorState, TurnSignal};

// ============================================================================
// Host keys
// ============================================================================

/// Virtual keys reported by the host simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum VirtualKey {
    S,
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    GearUp,
    GearDown,
    MainBreaker,
    WiperSpeedUp,
    WiperSpeedDown,
    LeftDoors,
    RightDoors,
}

// ============================================================================
// Commands
// ============================================================================

/// Which free-running digit counter to advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Digit {
    /// First digit.
    One,
    /// Second digit.
    Two,
    /// Third digit.
    Three,
}

impl Digit {
    /// Panel slot of this digit.
    pub const fn panel_index(self) -> PanelIndex {
        match self {
            Digit::One => panel::DIGIT_1,
            Digit::Two => panel::DIGIT_2,
            Digit::Three => panel::DIGIT_3,
        }
    }
}

/// A 0/1 panel switch flipped by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSwitch {
    /// Tread brake indicator. Silent.
    TreadBrake,
    /// Cab door. Silent.
    CabDoor,
    /// Headlight.
    Headlight,
    /// Cab light.
    CabLight,
    /// Speedometer light.
    SpeedometerLight,
}

impl PanelSwitch {
    /// Panel slot of this switch.
    pub const fn panel_index(self) -> PanelIndex {
        match self {
            PanelSwitch::TreadBrake => panel::TREAD_BRAKE,
            PanelSwitch::CabDoor => panel::CAB_DOOR,
            PanelSwitch::Headlight => panel::HEADLIGHT,
            PanelSwitch::CabLight => panel::CAB_LIGHT,
            PanelSwitch::SpeedometerLight => panel::SPEEDOMETER_LIGHT,
        }
    }

    /// Whether flipping the switch clicks in the cab.
    pub const fn clicks(self) -> bool {
        !matches!(self, PanelSwitch::TreadBrake | PanelSwitch::CabDoor)
    }
}

/// Driver action on the cab controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CabCommand {
    /// Manual reset of interlocks and warnings.
    Reset,
    /// Advance the speed mode selector.
    CycleSpeedMode,
    /// Press a turn signal switch.
    Indicator(TurnSignal),
    /// Flip a 0/1 panel switch.
    Toggle(PanelSwitch),
    /// Advance a digit counter.
    IncrementDigit(Digit),
    /// Advance the route/destination counter.
    NextRoute,
    /// Wiper switch one step up.
    WiperUp,
    /// Wiper switch one step down.
    WiperDown,
    /// Start or stop the MTR-style door beep.
    DoorBeep,
}

impl CabCommand {
    /// Map a host key onto a cab command. Unbound keys return `None`.
    pub const fn from_key(key: VirtualKey) -> Option<Self> {
        let cmd = match key {
            VirtualKey::A1 => CabCommand::Reset,
            VirtualKey::A2 => CabCommand::CycleSpeedMode,
            VirtualKey::B1 => CabCommand::Toggle(PanelSwitch::TreadBrake),
            VirtualKey::D => CabCommand::Indicator(TurnSignal::Left),
            VirtualKey::E => CabCommand::Indicator(TurnSignal::Right),
            VirtualKey::MainBreaker => CabCommand::Indicator(TurnSignal::Both),
            VirtualKey::F => CabCommand::NextRoute,
            VirtualKey::G => CabCommand::IncrementDigit(Digit::One),
            VirtualKey::H => CabCommand::IncrementDigit(Digit::Two),
            VirtualKey::I => CabCommand::IncrementDigit(Digit::Three),
            VirtualKey::L => CabCommand::Toggle(PanelSwitch::SpeedometerLight),
            VirtualKey::S => CabCommand::Toggle(PanelSwitch::CabDoor),
            VirtualKey::K => CabCommand::Toggle(PanelSwitch::Headlight),
            VirtualKey::J => CabCommand::Toggle(PanelSwitch::CabLight),
            VirtualKey::WiperSpeedUp => CabCommand::WiperUp,
            VirtualKey::WiperSpeedDown => CabCommand::WiperDown,
            VirtualKey::LeftDoors => CabCommand::DoorBeep,
            VirtualKey::B2
            | VirtualKey::C1
            | VirtualKey::C2
            | VirtualKey::GearUp
            | VirtualKey::GearDown
            | VirtualKey::RightDoors => return None,
        };
        Some(cmd)
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of pressing a turn signal switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorOutcome {
    /// State changed to the contained value.
    Changed(IndicatorState),
    /// Press rejected; hazard cannot be combined with a side indicator.
    Rejected {
        /// State left in place.
        current: IndicatorState,
    },
}

/// Result of applying a [`CabCommand`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Command took effect.
    Applied,
    /// Turn signal switch result.
    Indicator(IndicatorOutcome),
    /// Command had no effect in the current state (e.g. door beep with
    /// doors closed).
    Ignored,
}

// ============================================================================
// Beacons
// ============================================================================

/// Track-side beacon passed by the train.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Beacon {
    /// New speed limit. Non-positive values are ignored.
    SpeedLimit {
        /// Limit in km/h.
        kmh: i32,
    },
    /// AI request for the left indicator.
    IndicatorLeft {
        /// `true` to turn it on, `false` to turn indicators off.
        on: bool,
    },
    /// AI request for the right indicator.
    IndicatorRight {
        /// `true` to turn it on, `false` to turn indicators off.
        on: bool,
    },
    /// Beacon type this add-on does not handle.
    Other {
        /// Raw beacon type.
        kind: i32,
        /// Raw payload.
        optional: i32,
    },
}

impl Beacon {
    /// Decode a raw beacon type and payload.
    ///
    /// ```
    /// use lrv_cab::Beacon;
    ///
    /// assert_eq!(Beacon::from_raw(140, 40), Beacon::SpeedLimit { kmh: 40 });
    /// assert_eq!(Beacon::from_raw(145, 1), Beacon::IndicatorLeft { on: true });
    /// assert_eq!(Beacon::from_raw(146, 0), Beacon::IndicatorRight { on: false });
    /// assert_eq!(Beacon::from_raw(7, 3), Beacon::Other { kind: 7, optional: 3 });
    /// ```
    pub const fn from_raw(kind: i32, optional: i32) -> Self {
        match kind {
            beacon::SPEED_LIMIT => Beacon::SpeedLimit { kmh: optional },
            beacon::INDICATOR_LEFT => Beacon::IndicatorLeft { on: optional == 1 },
            beacon::INDICATOR_RIGHT => Beacon::IndicatorRight { on: optional == 1 },
            _ => Beacon::Other { kind, optional },
        }
    }
}

// ============================================================================
// Resets
// ============================================================================

/// Why the controller is being reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetKind {
    /// Host (re)initialised the train or jumped to a station.
    JumpStation,
    /// Driver pressed the reset key.
    Manual,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_keys() {
        assert_eq!(
            CabCommand::from_key(VirtualKey::E),
            Some(CabCommand::Indicator(TurnSignal::Right))
        );
        assert_eq!(
            CabCommand::from_key(VirtualKey::MainBreaker),
            Some(CabCommand::Indicator(TurnSignal::Both))
        );
    }

    #[test]
    fn unbound_keys() {
        for key in [
            VirtualKey::B2,
            VirtualKey::C1,
            VirtualKey::C2,
            VirtualKey::GearUp,
            VirtualKey::GearDown,
            VirtualKey::RightDoors,
        ] {
            assert_eq!(CabCommand::from_key(key), None);
        }
    }

    #[test]
    fn silent_switches() {
        assert!(!PanelSwitch::TreadBrake.clicks());
        assert!(!PanelSwitch::CabDoor.clicks());
        assert!(PanelSwitch::Headlight.clicks());
        assert!(PanelSwitch::CabLight.clicks());
        assert!(PanelSwitch::SpeedometerLight.clicks());
    }

    #[test]
    fn indicator_beacon_payload_other_than_one_is_off() {
        assert_eq!(Beacon::from_raw(145, 2), Beacon::IndicatorLeft { on: false });
        assert_eq!(Beacon::from_raw(146, 1), Beacon::IndicatorRight { on: true });
    }

    #[test]
    fn negative_speed_limit_still_decodes() {
        assert_eq!(Beacon::from_raw(140, -5), Beacon::SpeedLimit { kmh: -5 });
    }
}
