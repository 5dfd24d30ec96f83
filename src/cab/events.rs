//! Discrete event handlers: driver commands, turn signals, doors, beacons,
//! handle changes and resets.

use tracing::{debug, info};

use super::{CabController, START_BRAKE_MIN_KMH};
use crate::commands::{Beacon, CabCommand, CommandOutcome, IndicatorOutcome, ResetKind, VirtualKey};
use crate::indices::{panel, sound};
use crate::state::{IndicatorState, TurnSignal};
use crate::traits::{CabHost, CameraView, MessageId, Notice, NoticeOutput, SoundOutput, SoundRequest};
use crate::vehicle::DoorState;

/// Volume of the MTR door beep.
const DOOR_BEEP_VOLUME: f32 = 2.0;

impl<H: CabHost> CabController<H> {
    /// Handle a host key press. Unbound keys return `Ok(None)`.
    pub fn key_down(&mut self, key: VirtualKey) -> Result<Option<CommandOutcome>, H::Error> {
        match CabCommand::from_key(key) {
            Some(cmd) => self.apply_command(cmd).map(Some),
            None => Ok(None),
        }
    }

    /// Apply a driver command.
    pub fn apply_command(&mut self, cmd: CabCommand) -> Result<CommandOutcome, H::Error> {
        let outcome = match cmd {
            CabCommand::Reset => {
                self.reset(ResetKind::Manual);
                CommandOutcome::Applied
            }

            CabCommand::CycleSpeedMode => {
                self.click()?;
                let mode = self.control.speed_mode.next();
                self.control.speed_mode = mode;
                self.panel
                    .set(panel::SPEED_MODE_SWITCH, mode.switch_position());
                CommandOutcome::Applied
            }

            CabCommand::Indicator(signal) => {
                CommandOutcome::Indicator(self.toggle_indicator(signal)?)
            }

            CabCommand::Toggle(switch) => {
                self.panel.toggle(switch.panel_index());
                if switch.clicks() {
                    self.click()?;
                }
                CommandOutcome::Applied
            }

            CabCommand::IncrementDigit(digit) => {
                self.panel.increment(digit.panel_index());
                CommandOutcome::Applied
            }

            CabCommand::NextRoute => {
                self.control.route_index = self.control.route_index.wrapping_add(1);
                CommandOutcome::Applied
            }

            CabCommand::WiperUp | CabCommand::WiperDown => {
                let wiper = if cmd == CabCommand::WiperUp {
                    self.control.wiper.up()
                } else {
                    self.control.wiper.down()
                };
                self.control.wiper = wiper;
                self.panel
                    .set(panel::WIPER_MODE, i32::from(wiper.position()));
                self.click()?;
                CommandOutcome::Applied
            }

            CabCommand::DoorBeep => self.toggle_door_beep()?,
        };

        Ok(outcome)
    }

    /// Press a turn signal switch.
    ///
    /// Pressing the hazard switch while a side indicator is lit is rejected
    /// with an on-screen notice and leaves the state unchanged.
    pub fn toggle_indicator(&mut self, signal: TurnSignal) -> Result<IndicatorOutcome, H::Error> {
        let current = self.control.indicator;
        let Some(next) = current.toggled(signal) else {
            debug!(current = current.as_str(), "hazard rejected while indicating");
            self.host
                .show_notice(Notice::warning(MessageId::TurnOffTurnSignal));
            return Ok(IndicatorOutcome::Rejected { current });
        };

        if signal == TurnSignal::Both {
            self.panel
                .set(panel::INDICATOR_BOTH, i32::from(next == IndicatorState::Both));
        }
        self.control.indicator = next;
        self.click()?;

        Ok(IndicatorOutcome::Changed(next))
    }

    fn toggle_door_beep(&mut self) -> Result<CommandOutcome, H::Error> {
        if !self.control.door_open || !self.config.mtr_beeping {
            return Ok(CommandOutcome::Ignored);
        }

        if self.host.is_playing(sound::MTR_BEEP) {
            self.host.stop(sound::MTR_BEEP)?;
        } else {
            // Two-car sets beep on both cars.
            let cars = if self.specs.cars == 2 { 2 } else { 1 };
            for car in 0..cars {
                self.host.submit(SoundRequest::PlayCar {
                    sound: sound::MTR_BEEP,
                    car,
                    volume: DOOR_BEEP_VOLUME,
                    pitch: 1.0,
                    looped: false,
                })?;
            }
        }
        Ok(CommandOutcome::Applied)
    }

    /// Door state change reported by the host.
    pub fn door_change(&mut self, old: DoorState, new: DoorState) {
        let c = &mut self.control;
        match (old.is_open(), new.is_open()) {
            (false, true) => {
                c.door_open = true;
                c.doors_reopened = true;
                c.door_brake = true;
            }
            (true, false) => {
                c.door_open = false;
                c.approaching_station = false;
                c.isps_lock = false;
                c.door_brake = false;
                self.panel.clear(panel::DOOR_WARNING);
                self.panel.clear(panel::STATION_STOP_WARNING);
            }
            (false, false) | (true, true) => {}
        }
    }

    /// Beacon passed by the train.
    ///
    /// Indicator beacons only act while the AI is driving, and go through
    /// the same switch logic as the driver's keys.
    pub fn pass_beacon(&mut self, beacon: Beacon) -> Result<(), H::Error> {
        match beacon {
            Beacon::SpeedLimit { kmh } if kmh > 0 => {
                self.control.speed_limit_kmh = f64::from(kmh);
            }
            Beacon::SpeedLimit { kmh } => {
                debug!(kmh = kmh, "ignoring non-positive speed limit");
            }
            Beacon::IndicatorLeft { on } => self.follow_indicator_beacon(TurnSignal::Left, on)?,
            Beacon::IndicatorRight { on } => {
                self.follow_indicator_beacon(TurnSignal::Right, on)?
            }
            Beacon::Other { kind, .. } => {
                debug!(kind = kind, "unhandled beacon");
            }
        }
        Ok(())
    }

    fn follow_indicator_beacon(&mut self, signal: TurnSignal, on: bool) -> Result<(), H::Error> {
        if !self.control.ai_enabled {
            return Ok(());
        }
        let current = self.control.indicator;
        let press = if on {
            current != signal.state()
        } else {
            current != IndicatorState::None
        };
        if press {
            self.apply_command(CabCommand::Indicator(signal))?;
        }
        Ok(())
    }

    /// Power handle moved.
    pub fn set_power_notch(&mut self, notch: u32) -> Result<(), H::Error> {
        self.handle_click(notch)
    }

    /// Brake handle moved.
    ///
    /// Applying the brake from release above 15 km/h plays the brake
    /// sound on every car.
    pub fn set_brake_notch(&mut self, notch: u32) -> Result<(), H::Error> {
        let applying = self.control.last_brake_notch == 0 && notch > 0;
        self.control.last_brake_notch = notch;

        if applying && self.control.speed_kmh > START_BRAKE_MIN_KMH {
            self.host.submit(SoundRequest::PlayAllCars {
                sound: sound::START_BRAKE,
                volume: 1.0,
                pitch: 1.0,
            })?;
        }
        self.handle_click(notch)
    }

    /// Detent click on even notches, once the first frame has run.
    fn handle_click(&mut self, notch: u32) -> Result<(), H::Error> {
        if notch % 2 == 0 && self.control.ready && self.host.in_cab() {
            self.host.play_once(sound::HANDLE_CLICK)?;
        }
        Ok(())
    }

    /// The station detector reports the train approaching a platform.
    ///
    /// Arms the station lock: it engages once the train stops, until the
    /// doors are opened.
    pub fn station_approach(&mut self) {
        self.control.approaching_station = true;
        self.control.doors_reopened = false;
    }

    /// AI driver took over or handed back control.
    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.control.ai_enabled = enabled;
    }

    /// Reset interlocks and warnings after a station jump or on request.
    pub fn reset(&mut self, kind: ResetKind) {
        let c = &mut self.control;
        if c.crashed {
            c.crashed = false;
            self.panel.clear(panel::SPEEDOMETER_LIGHT);
            self.panel.clear(panel::HEADLIGHT);
            self.panel.clear(panel::CRASH_WARNING);
        }
        c.isps_lock = false;
        c.door_brake = false;
        c.ai_enabled = false;
        c.approaching_station = false;
        if kind == ResetKind::JumpStation {
            c.doors_reopened = true;
        }
        self.panel.clear(panel::STATION_STOP_WARNING);
        self.panel.clear(panel::STATION_AUX_WARNING);

        info!(?kind, "cab reset");
    }
}
