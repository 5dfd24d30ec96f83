//! Control state of the cab: indicator, speed mode, door and interlock flags.
//!
//! [`ControlState`] is the single mutable record behind every rule the cab
//! controller evaluates. It is owned by [`CabController`](crate::CabController)
//! and only changes through its frame update and event handlers.

/// Turn signal state shown on the indicator display.
///
/// `Left` and `Right` are never combined into `Both`: the hazard setting can
/// only be entered from `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IndicatorState {
    /// No indicator lit.
    #[default]
    None,
    /// Left indicator.
    Left,
    /// Right indicator.
    Right,
    /// Both indicators (hazard).
    Both,
}

impl IndicatorState {
    /// Value written to the indicator panel slot.
    #[inline]
    pub const fn panel_code(self) -> i32 {
        match self {
            IndicatorState::None => 0,
            IndicatorState::Left => 1,
            IndicatorState::Right => 2,
            IndicatorState::Both => 3,
        }
    }

    /// Returns the state as a lowercase string.
    pub const fn as_str(self) -> &'static str {
        match self {
            IndicatorState::None => "none",
            IndicatorState::Left => "left",
            IndicatorState::Right => "right",
            IndicatorState::Both => "both",
        }
    }

    /// State after pressing the switch for `signal`, or `None` if the press
    /// is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrv_cab::{IndicatorState, TurnSignal};
    ///
    /// assert_eq!(IndicatorState::None.toggled(TurnSignal::Left), Some(IndicatorState::Left));
    /// assert_eq!(IndicatorState::Left.toggled(TurnSignal::Left), Some(IndicatorState::None));
    /// assert_eq!(IndicatorState::Right.toggled(TurnSignal::Left), Some(IndicatorState::Left));
    /// assert_eq!(IndicatorState::Left.toggled(TurnSignal::Both), None);
    /// ```
    pub const fn toggled(self, signal: TurnSignal) -> Option<Self> {
        use IndicatorState as S;
        match (signal, self) {
            (TurnSignal::Left, S::Left) => Some(S::None),
            (TurnSignal::Left, _) => Some(S::Left),
            (TurnSignal::Right, S::Right) => Some(S::None),
            (TurnSignal::Right, _) => Some(S::Right),
            (TurnSignal::Both, S::Both) => Some(S::None),
            (TurnSignal::Both, S::None) => Some(S::Both),
            (TurnSignal::Both, S::Left | S::Right) => None,
        }
    }
}

/// One of the three turn signal switches in the cab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TurnSignal {
    /// Left indicator switch.
    Left,
    /// Right indicator switch.
    Right,
    /// Hazard switch.
    Both,
}

impl TurnSignal {
    /// Indicator state this switch turns on.
    #[inline]
    pub const fn state(self) -> IndicatorState {
        match self {
            TurnSignal::Left => IndicatorState::Left,
            TurnSignal::Right => IndicatorState::Right,
            TurnSignal::Both => IndicatorState::Both,
        }
    }
}

/// Driving profile that decides how far the power handle may go.
///
/// Cycles `Normal -> Fast -> Slow -> Normal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpeedMode {
    /// Top power notch is held back.
    #[default]
    Normal,
    /// All power notches available.
    Fast,
    /// Power limited to P1.
    Slow,
}

impl SpeedMode {
    /// Next mode in the selector cycle.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            SpeedMode::Normal => SpeedMode::Fast,
            SpeedMode::Fast => SpeedMode::Slow,
            SpeedMode::Slow => SpeedMode::Normal,
        }
    }

    /// Selector position written to the speed mode panel slot.
    #[inline]
    pub const fn switch_position(self) -> i32 {
        match self {
            SpeedMode::Normal => 0,
            SpeedMode::Fast => 1,
            SpeedMode::Slow => 2,
        }
    }

    /// Power notch allowed in this mode for a `requested` notch on a handle
    /// with `max` power notches.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrv_cab::SpeedMode;
    ///
    /// assert_eq!(SpeedMode::Slow.clamp_power(5, 8), 1);
    /// assert_eq!(SpeedMode::Normal.clamp_power(8, 8), 7);
    /// assert_eq!(SpeedMode::Normal.clamp_power(6, 8), 6);
    /// assert_eq!(SpeedMode::Fast.clamp_power(8, 8), 8);
    /// ```
    pub const fn clamp_power(self, requested: u32, max: u32) -> u32 {
        match self {
            SpeedMode::Slow if requested > 1 => 1,
            SpeedMode::Fast => requested,
            SpeedMode::Normal | SpeedMode::Slow if requested == max => max.saturating_sub(1),
            SpeedMode::Normal | SpeedMode::Slow => requested,
        }
    }
}

/// Wiper switch position.
///
/// Stepping up wraps from [`WiperMode::TOP`] to 0. Stepping down from 0 wraps
/// to [`WiperMode::DOWN_WRAP`], one past the top, matching the vehicle
/// content shipped with the add-on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WiperMode(u8);

impl WiperMode {
    /// Highest position reached by stepping up.
    pub const TOP: u8 = 4;
    /// Position reached by stepping down from 0.
    // TODO: confirm with the vehicle content owners whether 5 is a real
    // wiper frame or an off-by-one; `up` never produces it.
    pub const DOWN_WRAP: u8 = 5;

    /// Raw position.
    #[inline]
    pub const fn position(self) -> u8 {
        self.0
    }

    /// Next position up.
    pub const fn up(self) -> Self {
        if self.0 >= Self::TOP {
            Self(0)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Next position down.
    pub const fn down(self) -> Self {
        if self.0 == 0 {
            Self(Self::DOWN_WRAP)
        } else {
            Self(self.0 - 1)
        }
    }
}

/// Speed limit in force before the first speed limit beacon.
pub const DEFAULT_SPEED_LIMIT_KMH: f64 = 60.0;

/// Brake notch assumed before the first brake handle report.
pub const DEFAULT_LAST_BRAKE_NOTCH: u32 = 5;

/// Mutable control flags of the cab.
///
/// Fields are public for inspection; the controller is the only writer.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlState {
    /// Turn signal state.
    pub indicator: IndicatorState,
    /// Speed mode selector.
    pub speed_mode: SpeedMode,
    /// A door is currently open.
    pub door_open: bool,
    /// Doors have been opened since the last station approach was armed.
    /// Gates the station door lock.
    pub doors_reopened: bool,
    /// Brake applied while the doors are open.
    pub door_brake: bool,
    /// iSPS station lock: holds the train at a platform until the doors
    /// have been opened.
    pub isps_lock: bool,
    /// Collision latch, cleared only by a reset.
    pub crashed: bool,
    /// Brake notch reported on the previous brake handle change.
    pub last_brake_notch: u32,
    /// Destination/route counter.
    pub route_index: i32,
    /// Speed limit from the last speed limit beacon.
    pub speed_limit_kmh: f64,
    /// Wiper switch position.
    pub wiper: WiperMode,
    /// Station detector reports an upcoming platform.
    pub approaching_station: bool,
    /// AI driver is in control.
    pub ai_enabled: bool,
    /// Vehicle speed seen on the last frame.
    pub speed_kmh: f64,
    /// At least one frame has run.
    pub ready: bool,
    /// The update check request has been sent (or skipped).
    pub update_checked: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            indicator: IndicatorState::None,
            speed_mode: SpeedMode::Normal,
            door_open: false,
            doors_reopened: true,
            door_brake: false,
            isps_lock: false,
            crashed: false,
            last_brake_notch: DEFAULT_LAST_BRAKE_NOTCH,
            route_index: 0,
            speed_limit_kmh: DEFAULT_SPEED_LIMIT_KMH,
            wiper: WiperMode::default(),
            approaching_station: false,
            ai_enabled: false,
            speed_kmh: 0.0,
            ready: false,
            update_checked: false,
        }
    }
}

impl ControlState {
    /// Creates the state the add-on starts with.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the brake interlock should override the driver this frame.
    pub fn brake_override(&self, door_apply_brake: bool, isps: bool) -> bool {
        (self.door_brake && door_apply_brake) || (self.isps_lock && isps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [IndicatorState; 4] = [
        IndicatorState::None,
        IndicatorState::Left,
        IndicatorState::Right,
        IndicatorState::Both,
    ];

    #[test]
    fn both_never_entered_from_a_side() {
        assert_eq!(IndicatorState::Left.toggled(TurnSignal::Both), None);
        assert_eq!(IndicatorState::Right.toggled(TurnSignal::Both), None);
        for state in ALL_STATES {
            if let Some(next) = state.toggled(TurnSignal::Both) {
                assert!(matches!(
                    (state, next),
                    (IndicatorState::None, IndicatorState::Both)
                        | (IndicatorState::Both, IndicatorState::None)
                ));
            }
        }
    }

    #[test]
    fn double_toggle_from_none_returns_to_none() {
        for signal in [TurnSignal::Left, TurnSignal::Right, TurnSignal::Both] {
            let once = IndicatorState::None.toggled(signal).unwrap();
            assert_eq!(once, signal.state());
            assert_eq!(once.toggled(signal), Some(IndicatorState::None));
        }
    }

    #[test]
    fn side_switch_overrides_other_side() {
        assert_eq!(
            IndicatorState::Left.toggled(TurnSignal::Right),
            Some(IndicatorState::Right)
        );
        assert_eq!(
            IndicatorState::Both.toggled(TurnSignal::Left),
            Some(IndicatorState::Left)
        );
    }

    #[test]
    fn panel_codes() {
        let codes: [i32; 4] = ALL_STATES.map(IndicatorState::panel_code);
        assert_eq!(codes, [0, 1, 2, 3]);
    }

    #[test]
    fn speed_mode_has_period_three() {
        for start in [SpeedMode::Normal, SpeedMode::Fast, SpeedMode::Slow] {
            assert_ne!(start.next(), start);
            assert_ne!(start.next().next(), start);
            assert_eq!(start.next().next().next(), start);
        }
        assert_eq!(SpeedMode::Normal.next(), SpeedMode::Fast);
        assert_eq!(SpeedMode::Fast.next(), SpeedMode::Slow);
    }

    #[test]
    fn slow_mode_keeps_low_notches() {
        assert_eq!(SpeedMode::Slow.clamp_power(0, 5), 0);
        assert_eq!(SpeedMode::Slow.clamp_power(1, 5), 1);
    }

    #[test]
    fn slow_mode_on_single_notch_vehicle() {
        // P1 is the top notch there, so it stays reserved for fast mode.
        assert_eq!(SpeedMode::Slow.clamp_power(1, 1), 0);
        assert_eq!(SpeedMode::Slow.clamp_power(2, 2), 1);
        assert_eq!(SpeedMode::Fast.clamp_power(1, 1), 1);
    }

    #[test]
    fn normal_clamp_with_zero_notch_handle() {
        assert_eq!(SpeedMode::Normal.clamp_power(0, 0), 0);
    }

    #[test]
    fn wiper_wraps_asymmetrically() {
        let mut w = WiperMode::default();
        for expected in [1, 2, 3, 4, 0] {
            w = w.up();
            assert_eq!(w.position(), expected);
        }
        assert_eq!(w.down().position(), 5);
        assert_eq!(w.down().down().position(), 4);
        assert_eq!(w.down().up().position(), 0);
    }

    #[test]
    fn default_state() {
        let s = ControlState::new();
        assert!(s.doors_reopened);
        assert!(!s.crashed);
        assert_eq!(s.speed_limit_kmh, 60.0);
        assert_eq!(s.last_brake_notch, 5);
        assert_eq!(s.indicator, IndicatorState::None);
    }

    #[test]
    fn brake_override_respects_features() {
        let mut s = ControlState::new();
        s.door_brake = true;
        assert!(s.brake_override(true, false));
        assert!(!s.brake_override(false, true));

        s.door_brake = false;
        s.isps_lock = true;
        assert!(s.brake_override(false, true));
        assert!(!s.brake_override(true, false));
    }
}
