//! Feature switches for the cab controller.
//!
//! The host loads these once (from the add-on's settings file) and hands them
//! to [`CabController::new`](crate::CabController::new). They are read-only
//! afterwards.
//!
//! # Example
//!
//! ```rust
//! use lrv_cab::config::CabConfig;
//!
//! // Use defaults
//! let config = CabConfig::default();
//! assert!(config.door_lock);
//!
//! // Or customize
//! let config = CabConfig::default()
//!     .with_tutorial_mode(true)
//!     .with_mtr_beeping(true)
//!     .with_car_numbers([3, 4]);
//! assert!(config.tutorial_mode);
//! ```

/// Cab controller configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CabConfig {
    /// Lock the doors above 2 km/h.
    pub door_lock: bool,
    /// Hold the brake while a door is open.
    pub door_apply_brake: bool,
    /// Enable the iSPS station lock.
    pub isps: bool,
    /// Detect collisions with the train ahead.
    pub crash_detection: bool,
    /// Let a driver in reverse release the station lock.
    pub allow_reversing_in_stations: bool,
    /// Show the tutorial overlay.
    pub tutorial_mode: bool,
    /// Enable the MTR-style door beep.
    pub mtr_beeping: bool,
    /// Skip the update check on the first frame.
    pub ignore_update: bool,
    /// Value shown on the train status display.
    pub train_status: i32,
    /// Car number plate values for the first and second car.
    pub car_numbers: [i32; 2],
}

impl Default for CabConfig {
    fn default() -> Self {
        Self {
            door_lock: true,
            door_apply_brake: true,
            isps: true,
            crash_detection: true,
            allow_reversing_in_stations: false,
            tutorial_mode: false,
            mtr_beeping: false,
            ignore_update: false,
            train_status: 0,
            car_numbers: [0, 0],
        }
    }
}

impl CabConfig {
    /// Config with every optional feature turned off.
    pub fn minimal() -> Self {
        Self {
            door_lock: false,
            door_apply_brake: false,
            isps: false,
            crash_detection: false,
            ignore_update: true,
            ..Self::default()
        }
    }

    /// Enable or disable the door lock
    pub fn with_door_lock(mut self, enabled: bool) -> Self {
        self.door_lock = enabled;
        self
    }

    /// Enable or disable the door-open brake
    pub fn with_door_apply_brake(mut self, enabled: bool) -> Self {
        self.door_apply_brake = enabled;
        self
    }

    /// Enable or disable the iSPS station lock
    pub fn with_isps(mut self, enabled: bool) -> Self {
        self.isps = enabled;
        self
    }

    /// Enable or disable collision detection
    pub fn with_crash_detection(mut self, enabled: bool) -> Self {
        self.crash_detection = enabled;
        self
    }

    /// Allow reversing out of the station lock
    pub fn with_allow_reversing_in_stations(mut self, allowed: bool) -> Self {
        self.allow_reversing_in_stations = allowed;
        self
    }

    /// Enable or disable the tutorial overlay
    pub fn with_tutorial_mode(mut self, enabled: bool) -> Self {
        self.tutorial_mode = enabled;
        self
    }

    /// Enable or disable the MTR door beep
    pub fn with_mtr_beeping(mut self, enabled: bool) -> Self {
        self.mtr_beeping = enabled;
        self
    }

    /// Skip the update check
    pub fn with_ignore_update(mut self, ignore: bool) -> Self {
        self.ignore_update = ignore;
        self
    }

    /// Set the train status value
    pub fn with_train_status(mut self, status: i32) -> Self {
        self.train_status = status;
        self
    }

    /// Set the car number plate values
    pub fn with_car_numbers(mut self, numbers: [i32; 2]) -> Self {
        self.car_numbers = numbers;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
