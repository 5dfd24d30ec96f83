//! Scenario replay for the cab controller.
//!
//! Drives a [`CabController`] with the mock host through a scripted run
//! (departure, overspeed, station stop with iSPS lock, door cycle, restart)
//! and prints the interlock state and the non-zero panel slots after every
//! step. Useful when checking panel indices against vehicle content.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --features replay --bin cab_replay -- zh-hk
//! ```
//!
//! The optional argument is the host language code (default `en-us`).

use lrv_cab::hal::MockHost;
use lrv_cab::{
    Beacon, CabConfig, CabController, DoorState, Handles, Reverser, TurnSignal, VehicleCommand,
    VehicleSnapshot, VehicleSpecs, VirtualKey,
};
use tracing_subscriber::EnvFilter;

/// One scripted step.
enum Step {
    Frame { speed_kmh: f64, power: u32, brake: u32 },
    Key(VirtualKey),
    Beacon(Beacon),
    Doors(DoorState, DoorState),
    StationApproach,
}

fn script() -> Vec<(&'static str, Step)> {
    let forward = |speed_kmh, power, brake| Step::Frame {
        speed_kmh,
        power,
        brake,
    };
    vec![
        ("stand at platform", forward(0.0, 0, 4)),
        ("left indicator on", Step::Key(VirtualKey::D)),
        ("depart on top notch", forward(5.0, 5, 0)),
        ("left indicator off", Step::Key(VirtualKey::D)),
        ("pass 40 km/h limit", Step::Beacon(Beacon::from_raw(140, 40))),
        ("overspeed", forward(38.0, 3, 0)),
        ("approach station", Step::StationApproach),
        ("braking in", forward(12.0, 0, 3)),
        ("stopped", forward(0.0, 0, 3)),
        ("try to leave", forward(0.0, 3, 0)),
        ("doors open", Step::Doors(DoorState::None, DoorState::Left)),
        ("dwell", forward(0.0, 0, 3)),
        ("doors close", Step::Doors(DoorState::Left, DoorState::None)),
        ("hazard on", Step::Key(VirtualKey::MainBreaker)),
        ("right indicator over hazard", Step::Key(VirtualKey::E)),
        ("depart", forward(6.0, 3, 0)),
    ]
}

fn print_step(name: &str, cab: &CabController<MockHost>, command: Option<VehicleCommand>) {
    let state = cab.state();
    println!(
        "{name:<26} indicator={:<5} isps={} door_brake={} crashed={}",
        state.indicator.as_str(),
        state.isps_lock,
        state.door_brake,
        state.crashed
    );
    if let Some(cmd) = command {
        println!(
            "{:<26} interlock={:?} power={:?} brake={:?}",
            "", cmd.door_interlock, cmd.power_notch, cmd.brake_notch
        );
    }
    let mut slots: Vec<_> = cab.panel().iter().filter(|(_, v)| *v != 0).collect();
    slots.sort_by_key(|(index, _)| *index);
    let rendered: Vec<String> = slots
        .iter()
        .map(|(index, value)| format!("{}={}", index.index(), value))
        .collect();
    println!("{:<26} panel [{}]", "", rendered.join(" "));
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let language = std::env::args().nth(1).unwrap_or_else(|| "en-us".into());

    let config = CabConfig::default()
        .with_ignore_update(true)
        .with_tutorial_mode(true)
        .with_car_numbers([1, 2]);
    let mut cab = CabController::new(MockHost::new(), config);
    cab.set_vehicle_specs(VehicleSpecs {
        power_notches: 5,
        b67_notch: 4,
        cars: 2,
    });
    cab.initialize();

    let sound_error = |()| anyhow::anyhow!("mock sound output failed");

    for (name, step) in script() {
        let command = match step {
            Step::Frame {
                speed_kmh,
                power,
                brake,
            } => {
                let snapshot = VehicleSnapshot::at_rest(&language)
                    .with_speed(speed_kmh)
                    .with_handles(Handles {
                        power,
                        brake,
                        reverser: Reverser::Forward,
                    });
                cab.set_brake_notch(brake).map_err(sound_error)?;
                Some(cab.elapse(&snapshot).map_err(sound_error)?)
            }
            Step::Key(key) => {
                cab.key_down(key).map_err(sound_error)?;
                None
            }
            Step::Beacon(beacon) => {
                cab.pass_beacon(beacon).map_err(sound_error)?;
                None
            }
            Step::Doors(old, new) => {
                cab.door_change(old, new);
                None
            }
            Step::StationApproach => {
                cab.station_approach();
                None
            }
        };
        print_step(name, &cab, command);
    }

    // Hazard cannot be combined with a side indicator.
    cab.toggle_indicator(TurnSignal::Both).map_err(sound_error)?;
    println!("notices shown: {}", cab.host().notices.len());

    Ok(())
}
