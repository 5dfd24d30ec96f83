//! # lrv-cab
//!
//! In-cab control logic for a light rail vehicle simulator add-on: turn
//! signals, speed modes, door and station interlocks, collision detection
//! and panel/sound outputs.
//!
//! ## Features
//!
//! - **Single owned state**: every control flag lives in one [`ControlState`]
//! - **Per-frame rules**: door lock, overspeed lamp, brake interlocks, notch
//!   clamping, collision latch and iSPS station lock, evaluated in a fixed order
//! - **Closed event types**: keys, beacons, door changes and resets are enums
//!   matched exhaustively
//! - **Host abstraction**: sounds, notices, camera and update check go through
//!   traits, so the whole controller runs under test without a simulator
//!
//! ## Architecture
//!
//! - `state` - Control flags and their transition tables
//! - `commands` - Driver commands, host keys, beacons, outcomes
//! - `cab` - The controller: frame update and event handlers
//! - `panel` / `indices` - Panel value store and the fixed slot numbers
//! - `traits` - Host collaborator abstractions
//! - `hal` - Mock host for testing
//!
//! ## Example
//!
//! ```rust
//! use lrv_cab::{
//!     CabConfig, CabController, Handles, IndicatorState, Reverser, TurnSignal,
//!     VehicleSnapshot, VehicleSpecs, hal::MockHost, indices::panel,
//! };
//!
//! let mut cab = CabController::new(MockHost::new(), CabConfig::default());
//! cab.set_vehicle_specs(VehicleSpecs { power_notches: 5, b67_notch: 4, cars: 2 });
//! cab.initialize();
//!
//! // Driver presses the left indicator switch
//! cab.toggle_indicator(TurnSignal::Left).unwrap();
//! assert_eq!(cab.control().indicator, IndicatorState::Left);
//!
//! // Run a frame: the top power notch is held back outside fast mode
//! let snapshot = VehicleSnapshot::at_rest("en-us")
//!     .with_speed(20.0)
//!     .with_handles(Handles { power: 5, brake: 0, reverser: Reverser::Forward });
//! let command = cab.elapse(&snapshot).unwrap();
//!
//! assert_eq!(command.power_notch, Some(4));
//! assert_eq!(cab.panel().get(panel::INDICATOR), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Cab controller: per-frame update and event handlers.
pub mod cab;
/// Driver commands, host keys, beacons and outcomes.
pub mod commands;
/// Feature switches loaded by the host.
pub mod config;
/// Mock host implementations for testing.
pub mod hal;
/// Fixed panel, sound and beacon indices.
pub mod indices;
/// Sparse panel value store.
pub mod panel;
/// Control state and its transition tables.
pub mod state;
/// Host collaborator traits.
pub mod traits;
/// Per-frame vehicle input and output.
pub mod vehicle;

/// Add-on release reported with the update check.
///
/// The update server compares this against published add-on releases, so it
/// follows the add-on's numbering rather than this crate's.
pub const ADDON_VERSION: &str = "2.5.0";

// Re-exports for convenience
pub use cab::{CabController, CabState};
pub use commands::{
    Beacon, CabCommand, CommandOutcome, Digit, IndicatorOutcome, PanelSwitch, ResetKind,
    VirtualKey,
};
pub use config::CabConfig;
pub use panel::Panel;
pub use state::{ControlState, IndicatorState, SpeedMode, TurnSignal, WiperMode};
pub use traits::{
    CabHost, CameraView, MessageId, Notice, NoticeOutput, SoundOutput, SoundRequest,
    UpdateNotifier,
};
pub use vehicle::{
    DoorInterlock, DoorState, Handles, PrecedingVehicle, Reverser, VehicleCommand,
    VehicleSnapshot, VehicleSpecs,
};
