//! Data exchanged with the host simulation every frame.

/// Reverser handle position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Reverser {
    /// Backward (-1).
    Backward,
    /// Neutral (0).
    #[default]
    Neutral,
    /// Forward (1).
    Forward,
}

impl Reverser {
    /// Convert the host's signed reverser position.
    ///
    /// ```
    /// use lrv_cab::Reverser;
    ///
    /// assert_eq!(Reverser::from_position(1), Reverser::Forward);
    /// assert_eq!(Reverser::from_position(-1), Reverser::Backward);
    /// assert_eq!(Reverser::from_position(0), Reverser::Neutral);
    /// ```
    pub const fn from_position(position: i32) -> Self {
        match position {
            p if p > 0 => Reverser::Forward,
            p if p < 0 => Reverser::Backward,
            _ => Reverser::Neutral,
        }
    }
}

/// Driver handle positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Handles {
    /// Power notch (0 = off).
    pub power: u32,
    /// Brake notch (0 = released).
    pub brake: u32,
    /// Reverser position.
    pub reverser: Reverser,
}

/// Train ahead on the same track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrecedingVehicle {
    /// Gap to the train ahead in metres. Negative once the trains overlap.
    pub distance_m: f64,
    /// Speed of the train ahead.
    pub speed_kmh: f64,
}

/// Per-frame input from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleSnapshot<'a> {
    /// Own speed.
    pub speed_kmh: f64,
    /// Train ahead, if the host reports one.
    pub preceding: Option<PrecedingVehicle>,
    /// Handle positions requested by the driver (or AI).
    pub handles: Handles,
    /// Host UI language code, e.g. `"en-us"` or `"zh-hk"`.
    pub language: &'a str,
}

impl<'a> VehicleSnapshot<'a> {
    /// Snapshot of a train standing still with handles at rest.
    pub fn at_rest(language: &'a str) -> Self {
        Self {
            speed_kmh: 0.0,
            preceding: None,
            handles: Handles::default(),
            language,
        }
    }

    /// Set the speed.
    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Set the handle positions.
    pub fn with_handles(mut self, handles: Handles) -> Self {
        self.handles = handles;
        self
    }

    /// Set the train ahead.
    pub fn with_preceding(mut self, distance_m: f64, speed_kmh: f64) -> Self {
        self.preceding = Some(PrecedingVehicle {
            distance_m,
            speed_kmh,
        });
        self
    }
}

/// Static vehicle description reported once after loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleSpecs {
    /// Number of power notches; the highest is reserved for fast mode.
    pub power_notches: u32,
    /// Brake notch forced by the interlocks (the "B67" position).
    pub b67_notch: u32,
    /// Number of cars in the consist.
    pub cars: u32,
}

impl Default for VehicleSpecs {
    fn default() -> Self {
        Self {
            power_notches: 5,
            b67_notch: 4,
            cars: 2,
        }
    }
}

/// Door interlock state requested from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DoorInterlock {
    /// Doors may be opened.
    #[default]
    Unlocked,
    /// Doors are held shut.
    Locked,
}

/// Per-frame output to the host: door interlock plus optional handle
/// overrides.
///
/// `None` leaves the driver's handle as it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct VehicleCommand {
    /// Door interlock for this frame.
    pub door_interlock: DoorInterlock,
    /// Power notch to apply instead of the driver's.
    pub power_notch: Option<u32>,
    /// Brake notch to apply instead of the driver's.
    pub brake_notch: Option<u32>,
}

impl VehicleCommand {
    /// Whether any handle is overridden.
    pub fn overrides_handles(&self) -> bool {
        self.power_notch.is_some() || self.brake_notch.is_some()
    }

    /// Handles the host should apply, given what the driver requested.
    pub fn apply_to(&self, mut handles: Handles) -> Handles {
        if let Some(power) = self.power_notch {
            handles.power = power;
        }
        if let Some(brake) = self.brake_notch {
            handles.brake = brake;
        }
        handles
    }
}

/// Host door state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DoorState {
    /// All doors closed.
    #[default]
    None,
    /// Left side open.
    Left,
    /// Right side open.
    Right,
    /// Both sides open.
    Both,
}

impl DoorState {
    /// Whether any door is open.
    #[inline]
    pub const fn is_open(self) -> bool {
        !matches!(self, DoorState::None)
    }
}
