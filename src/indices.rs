//! Fixed panel, sound and beacon indices shared with the train's panel and
//! sound definitions.
//!
//! These numbers are part of the add-on's contract with the vehicle content
//! (panel.xml / sound.cfg), so they never change at runtime.

/// Index of a panel slot (lamp, digit or status value).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelIndex(u8);

impl PanelIndex {
    /// Wrap a raw panel index.
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Raw index as used by the host's flat panel array.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a sound slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundIndex(u8);

impl SoundIndex {
    /// Wrap a raw sound index.
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Raw index as used by the host's sound table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Panel slots written by the cab controller.
pub mod panel {
    use super::PanelIndex;

    /// Cab light toggle.
    pub const CAB_LIGHT: PanelIndex = PanelIndex::new(99);
    /// Turn signal display (0 none, 1 left, 2 right, 3 both).
    pub const INDICATOR: PanelIndex = PanelIndex::new(102);
    /// Destination display, driven by the route index.
    pub const DESTINATION: PanelIndex = PanelIndex::new(104);
    /// Free-running digit counters.
    pub const DIGIT_1: PanelIndex = PanelIndex::new(105);
    #[allow(missing_docs)]
    pub const DIGIT_2: PanelIndex = PanelIndex::new(106);
    #[allow(missing_docs)]
    pub const DIGIT_3: PanelIndex = PanelIndex::new(107);
    /// Hazard (both indicators) switch lamp.
    pub const INDICATOR_BOTH: PanelIndex = PanelIndex::new(108);
    /// Headlight. Also raised as a crash warning.
    pub const HEADLIGHT: PanelIndex = PanelIndex::new(109);
    /// Speedometer light. Also raised as the severe crash warning.
    pub const SPEEDOMETER_LIGHT: PanelIndex = PanelIndex::new(110);
    /// Cab door.
    pub const CAB_DOOR: PanelIndex = PanelIndex::new(111);
    /// Speed mode selector position.
    pub const SPEED_MODE_SWITCH: PanelIndex = PanelIndex::new(112);
    /// Wiper mode.
    pub const WIPER_MODE: PanelIndex = PanelIndex::new(113);
    /// Tread brake indicator.
    pub const TREAD_BRAKE: PanelIndex = PanelIndex::new(114);
    /// Tutorial overlay, English.
    pub const TUTORIAL_EN: PanelIndex = PanelIndex::new(121);
    /// Tutorial overlay, Chinese.
    pub const TUTORIAL_ZH: PanelIndex = PanelIndex::new(122);
    /// Train status value from the configuration.
    pub const TRAIN_STATUS: PanelIndex = PanelIndex::new(131);
    /// iSPS overspeed lamp.
    pub const OVERSPEED: PanelIndex = PanelIndex::new(201);
    /// Stopped at a station with doors not yet opened.
    pub const STATION_STOP_WARNING: PanelIndex = PanelIndex::new(202);
    /// Secondary station warning, cleared on reset.
    pub const STATION_AUX_WARNING: PanelIndex = PanelIndex::new(203);
    /// Door warning, cleared when the doors close.
    pub const DOOR_WARNING: PanelIndex = PanelIndex::new(204);
    /// Car number plate of the first car.
    pub const FIRST_CAR_NUMBER: PanelIndex = PanelIndex::new(205);
    /// Car number plate of the second car.
    pub const SECOND_CAR_NUMBER: PanelIndex = PanelIndex::new(206);
    /// Collision warning.
    pub const CRASH_WARNING: PanelIndex = PanelIndex::new(213);
}

/// Sound slots triggered by the cab controller.
pub mod sound {
    use super::SoundIndex;

    /// Switch click, only audible in cab.
    pub const CLICK: SoundIndex = SoundIndex::new(221);
    /// Turn signal relay loop.
    pub const CAB_INDICATOR: SoundIndex = SoundIndex::new(222);
    /// Collision.
    pub const CRASH: SoundIndex = SoundIndex::new(223);
    /// MTR-style door beep, played per car.
    pub const MTR_BEEP: SoundIndex = SoundIndex::new(224);
    /// Brake application, played on every car.
    pub const START_BRAKE: SoundIndex = SoundIndex::new(225);
    /// Driver handle detent click.
    pub const HANDLE_CLICK: SoundIndex = SoundIndex::new(226);
}

/// Raw beacon type identifiers placed in the route.
pub mod beacon {
    /// Speed limit; payload is the limit in km/h.
    pub const SPEED_LIMIT: i32 = 140;
    /// Left indicator request for AI driving; payload 1 turns it on.
    pub const INDICATOR_LEFT: i32 = 145;
    /// Right indicator request for AI driving; payload 1 turns it on.
    pub const INDICATOR_RIGHT: i32 = 146;
}
