//! Main cab controller that ties the control state, panel and host together.
//!
//! This module provides [`CabController`], the single owner of the cab's
//! [`ControlState`] and [`Panel`].
//!
//! # Overview
//!
//! The host drives the controller from its simulation callback thread:
//! - once per frame, [`CabController::elapse`] derives panel values, sounds
//!   and handle overrides from the current [`VehicleSnapshot`]
//! - discrete events (keys, beacons, door changes, resets) mutate the state
//!   immediately; the next frame picks up their effects
//!
//! # Example
//!
//! ```rust
//! use lrv_cab::{CabConfig, CabController, DoorInterlock, Handles, Reverser, VehicleSnapshot};
//! use lrv_cab::hal::MockHost;
//! use lrv_cab::indices::panel;
//!
//! let mut cab = CabController::new(MockHost::new(), CabConfig::default());
//! cab.initialize();
//!
//! let snapshot = VehicleSnapshot::at_rest("en-us")
//!     .with_speed(30.0)
//!     .with_handles(Handles { power: 2, brake: 0, reverser: Reverser::Forward });
//! let command = cab.elapse(&snapshot).unwrap();
//!
//! assert_eq!(command.door_interlock, DoorInterlock::Locked);
//! assert_eq!(cab.panel().get(panel::OVERSPEED), 0);
//! ```
//!
//! [`VehicleSnapshot`]: crate::VehicleSnapshot

mod events;
mod frame;

use crate::config::CabConfig;
use crate::indices::{panel, sound};
use crate::panel::Panel;
use crate::state::{ControlState, IndicatorState, SpeedMode, WiperMode};
use crate::traits::{CabHost, CameraView, SoundOutput};
use crate::vehicle::VehicleSpecs;

/// Doors lock above this speed.
pub const DOOR_LOCK_SPEED_KMH: f64 = 2.0;
/// The overspeed lamp lights this far below the speed limit.
pub const OVERSPEED_MARGIN_KMH: f64 = 5.0;
/// A gap to the train ahead inside `(CRASH_GAP_MIN_M, CRASH_GAP_MAX_M)` is a
/// collision.
pub const CRASH_GAP_MIN_M: f64 = -4.0;
#[allow(missing_docs)]
pub const CRASH_GAP_MAX_M: f64 = 0.1;
/// Closing speed above which a collision raises the crash warnings.
pub const CRASH_WARNING_KMH: f64 = 10.0;
/// Closing speed above which a collision is severe.
pub const CRASH_SEVERE_KMH: f64 = 17.0;
/// Below this speed the train counts as stopped at a platform.
pub const STATION_STOP_KMH: f64 = 0.1;
/// The station stop warning clears above this speed.
pub const STATION_WARNING_CLEAR_KMH: f64 = 10.0;
/// Brake applications above this speed play the start-brake sound.
pub const START_BRAKE_MIN_KMH: f64 = 15.0;

/// Cab controller.
///
/// Owns the control state and panel, and talks to the simulator through a
/// [`CabHost`].
///
/// # Type Parameter
///
/// - `H`: The host collaborators ([`CabHost`] bundle)
///
/// # Thread Safety
///
/// Not thread-safe and not meant to be: the host calls every entry point
/// from its single simulation thread.
pub struct CabController<H: CabHost> {
    host: H,
    config: CabConfig,
    specs: VehicleSpecs,
    control: ControlState,
    panel: Panel,
}

impl<H: CabHost> CabController<H> {
    /// Create a controller with the loaded configuration.
    pub fn new(host: H, config: CabConfig) -> Self {
        Self {
            host,
            config,
            specs: VehicleSpecs::default(),
            control: ControlState::new(),
            panel: Panel::new(),
        }
    }

    /// Host (re)initialisation. Behaves like a station jump.
    pub fn initialize(&mut self) {
        self.reset(crate::ResetKind::JumpStation);
    }

    /// Store the vehicle description and show the configured car numbers.
    pub fn set_vehicle_specs(&mut self, specs: VehicleSpecs) {
        self.specs = specs;
        let [first, second] = self.config.car_numbers;
        self.panel.set(panel::FIRST_CAR_NUMBER, first);
        self.panel.set(panel::SECOND_CAR_NUMBER, second);
    }

    /// Change a car number plate. Car 1 is the first car; any other value
    /// addresses the second.
    pub fn change_car_number(&mut self, car: u32, value: i32) {
        let index = if car == 1 {
            panel::FIRST_CAR_NUMBER
        } else {
            panel::SECOND_CAR_NUMBER
        };
        self.panel.set(index, value);
    }

    /// Current control state.
    pub fn control(&self) -> &ControlState {
        &self.control
    }

    /// Current panel values.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Loaded configuration.
    pub fn config(&self) -> &CabConfig {
        &self.config
    }

    /// Vehicle description.
    pub fn specs(&self) -> &VehicleSpecs {
        &self.specs
    }

    /// Host collaborators.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Host collaborators, mutably (e.g. to update a mock between frames).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Get the current state for UI/debugging
    pub fn state(&self) -> CabState {
        CabState {
            indicator: self.control.indicator,
            speed_mode: self.control.speed_mode,
            wiper: self.control.wiper,
            door_open: self.control.door_open,
            door_brake: self.control.door_brake,
            isps_lock: self.control.isps_lock,
            crashed: self.control.crashed,
            speed_limit_kmh: self.control.speed_limit_kmh,
            route_index: self.control.route_index,
        }
    }

    /// Switch click, only heard in cab.
    fn click(&mut self) -> Result<(), H::Error> {
        if self.host.in_cab() {
            self.host.play_once(sound::CLICK)?;
        }
        Ok(())
    }
}

/// State snapshot for UI/debugging.
///
/// # Example
///
/// ```rust
/// use lrv_cab::{CabConfig, CabController, IndicatorState};
/// use lrv_cab::hal::MockHost;
///
/// let cab = CabController::new(MockHost::new(), CabConfig::default());
///
/// let state = cab.state();
/// assert_eq!(state.indicator, IndicatorState::None);
/// assert!(!state.crashed);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabState {
    /// Turn signal state.
    pub indicator: IndicatorState,
    /// Speed mode selector.
    pub speed_mode: SpeedMode,
    /// Wiper switch position.
    pub wiper: WiperMode,
    /// A door is open.
    pub door_open: bool,
    /// Door-open brake is active.
    pub door_brake: bool,
    /// iSPS station lock is active.
    pub isps_lock: bool,
    /// Collision latch.
    pub crashed: bool,
    /// Speed limit in force.
    pub speed_limit_kmh: f64,
    /// Route counter.
    pub route_index: i32,
}
