//! Per-frame rule evaluation.

use tracing::info;

use super::{
    CabController, CRASH_GAP_MAX_M, CRASH_GAP_MIN_M, CRASH_SEVERE_KMH, CRASH_WARNING_KMH,
    DOOR_LOCK_SPEED_KMH, OVERSPEED_MARGIN_KMH, STATION_STOP_KMH, STATION_WARNING_CLEAR_KMH,
};
use crate::indices::{panel, sound};
use crate::state::IndicatorState;
use crate::traits::{CabHost, CameraView, SoundOutput, UpdateNotifier};
use crate::vehicle::{DoorInterlock, PrecedingVehicle, Reverser, VehicleCommand, VehicleSnapshot};
use crate::ADDON_VERSION;

impl<H: CabHost> CabController<H> {
    /// Run one simulation frame.
    ///
    /// Rules run in a fixed order; later ones may overwrite panel slots
    /// written by earlier ones (a severe collision clears the indicator
    /// display written just before it). The returned command carries the
    /// door interlock and any handle overrides for this frame.
    pub fn elapse(&mut self, snapshot: &VehicleSnapshot<'_>) -> Result<VehicleCommand, H::Error> {
        let speed = snapshot.speed_kmh;
        self.control.ready = true;
        self.control.speed_kmh = speed;
        self.panel.set(panel::DESTINATION, self.control.route_index);
        self.request_update_check(snapshot.language);

        let mut command = VehicleCommand {
            door_interlock: if speed > DOOR_LOCK_SPEED_KMH && self.config.door_lock {
                DoorInterlock::Locked
            } else {
                DoorInterlock::Unlocked
            },
            ..Default::default()
        };

        let overspeed = speed > self.control.speed_limit_kmh - OVERSPEED_MARGIN_KMH;
        self.panel.set(panel::OVERSPEED, i32::from(overspeed));

        let braking = self
            .control
            .brake_override(self.config.door_apply_brake, self.config.isps);
        if braking {
            command.power_notch = Some(0);
            command.brake_notch = Some(self.specs.b67_notch);
        }

        self.panel
            .set(panel::INDICATOR, self.control.indicator.panel_code());
        self.update_tutorial(snapshot.language);

        // The brake override already holds power at 0.
        if !braking {
            let requested = snapshot.handles.power;
            let allowed = self
                .control
                .speed_mode
                .clamp_power(requested, self.specs.power_notches);
            if allowed != requested {
                command.power_notch = Some(allowed);
            }
        }

        if let Some(preceding) = snapshot.preceding {
            self.detect_collision(speed, preceding)?;
        }

        self.update_station_lock(speed, snapshot.handles.reverser);
        self.update_indicator_sound()?;
        self.panel.set(panel::TRAIN_STATUS, self.config.train_status);

        Ok(command)
    }

    fn request_update_check(&mut self, language: &str) {
        if self.control.update_checked {
            return;
        }
        if !self.config.ignore_update {
            info!(version = ADDON_VERSION, "requesting update check");
            self.host.request_update_check(language, ADDON_VERSION);
        }
        self.control.update_checked = true;
    }

    fn update_tutorial(&mut self, language: &str) {
        if self.config.tutorial_mode {
            let slot = if language.starts_with("zh") {
                panel::TUTORIAL_ZH
            } else {
                panel::TUTORIAL_EN
            };
            self.panel.set(slot, 1);
        } else {
            self.panel.clear(panel::TUTORIAL_ZH);
            self.panel.clear(panel::TUTORIAL_EN);
        }
    }

    fn detect_collision(
        &mut self,
        speed: f64,
        preceding: PrecedingVehicle,
    ) -> Result<(), H::Error> {
        if !self.config.crash_detection || self.control.crashed {
            return Ok(());
        }
        let gap = preceding.distance_m;
        if gap <= CRASH_GAP_MIN_M || gap >= CRASH_GAP_MAX_M {
            return Ok(());
        }

        self.host.play_once(sound::CRASH)?;

        let closing = (preceding.speed_kmh - speed).abs();
        if closing > CRASH_WARNING_KMH {
            self.panel.set(panel::CRASH_WARNING, 1);
            self.panel.set(panel::HEADLIGHT, 1);

            if closing > CRASH_SEVERE_KMH {
                self.panel.set(panel::SPEEDOMETER_LIGHT, 1);
                self.control.indicator = IndicatorState::None;
                self.panel.clear(panel::INDICATOR);
            }
        }

        info!(gap_m = gap, closing_kmh = closing, "collision with preceding train");
        self.control.crashed = true;
        Ok(())
    }

    fn update_station_lock(&mut self, speed: f64, reverser: Reverser) {
        let c = &mut self.control;
        if c.approaching_station && speed < STATION_STOP_KMH && !c.doors_reopened {
            self.panel.set(panel::STATION_STOP_WARNING, 1);
            match reverser {
                Reverser::Forward => {
                    if !c.isps_lock {
                        info!("iSPS station lock engaged");
                    }
                    c.isps_lock = true;
                }
                Reverser::Neutral | Reverser::Backward => {
                    if self.config.allow_reversing_in_stations {
                        c.isps_lock = false;
                    }
                }
            }
        }

        if speed > STATION_WARNING_CLEAR_KMH && self.panel.is_raised(panel::STATION_STOP_WARNING) {
            self.panel.clear(panel::STATION_STOP_WARNING);
        }
    }

    /// Loop the indicator sound while lit and in cab; every other frame
    /// sends a stop, whatever the host reports as playing.
    fn update_indicator_sound(&mut self) -> Result<(), H::Error> {
        let wanted =
            self.control.indicator != IndicatorState::None && self.host.in_cab();
        if !wanted {
            self.host.stop(sound::CAB_INDICATOR)?;
        } else if !self.host.is_playing(sound::CAB_INDICATOR) {
            self.host.play_looping(sound::CAB_INDICATOR)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::hal::MockHost;
    use crate::indices::{panel, sound};
    use crate::traits::SoundOutput;
    use crate::vehicle::{Handles, Reverser, VehicleSnapshot, VehicleSpecs};
    use crate::{CabConfig, CabController, SpeedMode, TurnSignal};

    fn new_cab(config: CabConfig) -> CabController<MockHost> {
        let mut cab = CabController::new(MockHost::new(), config);
        cab.set_vehicle_specs(VehicleSpecs {
            power_notches: 8,
            b67_notch: 7,
            cars: 2,
        });
        cab.initialize();
        cab
    }

    fn power(notch: u32) -> Handles {
        Handles {
            power: notch,
            brake: 0,
            reverser: Reverser::Forward,
        }
    }

    #[test]
    fn overspeed_boundary() {
        let mut cab = new_cab(CabConfig::minimal());
        cab.elapse(&VehicleSnapshot::at_rest("en").with_speed(61.0))
            .unwrap();
        assert_eq!(cab.panel().get(panel::OVERSPEED), 1);

        cab.elapse(&VehicleSnapshot::at_rest("en").with_speed(55.0))
            .unwrap();
        assert_eq!(cab.panel().get(panel::OVERSPEED), 0);

        cab.elapse(&VehicleSnapshot::at_rest("en").with_speed(54.0))
            .unwrap();
        assert_eq!(cab.panel().get(panel::OVERSPEED), 0);
    }

    #[test]
    fn top_notch_reserved_outside_fast_mode() {
        let mut cab = new_cab(CabConfig::minimal());
        let snap = VehicleSnapshot::at_rest("en").with_handles(power(8));
        assert_eq!(cab.elapse(&snap).unwrap().power_notch, Some(7));

        cab.apply_command(crate::CabCommand::CycleSpeedMode).unwrap();
        assert_eq!(cab.control().speed_mode, SpeedMode::Fast);
        assert_eq!(cab.elapse(&snap).unwrap().power_notch, None);

        cab.apply_command(crate::CabCommand::CycleSpeedMode).unwrap();
        assert_eq!(cab.elapse(&snap).unwrap().power_notch, Some(1));
    }

    #[test]
    fn tutorial_slot_follows_language() {
        let mut cab = new_cab(CabConfig::minimal().with_tutorial_mode(true));
        cab.elapse(&VehicleSnapshot::at_rest("zh-hk")).unwrap();
        assert_eq!(cab.panel().get(panel::TUTORIAL_ZH), 1);
        assert_eq!(cab.panel().get(panel::TUTORIAL_EN), 0);

        let mut cab = new_cab(CabConfig::minimal().with_tutorial_mode(true));
        cab.elapse(&VehicleSnapshot::at_rest("en-us")).unwrap();
        assert_eq!(cab.panel().get(panel::TUTORIAL_EN), 1);
        assert_eq!(cab.panel().get(panel::TUTORIAL_ZH), 0);
    }

    #[test]
    fn tutorial_disabled_clears_both() {
        let mut cab = new_cab(CabConfig::minimal());
        cab.elapse(&VehicleSnapshot::at_rest("zh")).unwrap();
        assert_eq!(cab.panel().get(panel::TUTORIAL_ZH), 0);
        assert_eq!(cab.panel().get(panel::TUTORIAL_EN), 0);
    }

    #[test]
    fn indicator_loop_only_in_cab() {
        let mut cab = new_cab(CabConfig::minimal());
        cab.toggle_indicator(TurnSignal::Left).unwrap();

        cab.elapse(&VehicleSnapshot::at_rest("en")).unwrap();
        assert!(cab.host().is_playing(sound::CAB_INDICATOR));

        cab.host_mut().in_cab = false;
        cab.elapse(&VehicleSnapshot::at_rest("en")).unwrap();
        assert!(!cab.host().is_playing(sound::CAB_INDICATOR));

        cab.host_mut().in_cab = true;
        cab.elapse(&VehicleSnapshot::at_rest("en")).unwrap();
        cab.toggle_indicator(TurnSignal::Left).unwrap();
        cab.elapse(&VehicleSnapshot::at_rest("en")).unwrap();
        assert!(!cab.host().is_playing(sound::CAB_INDICATOR));
    }

    #[test]
    fn update_check_sent_once() {
        let mut cab = new_cab(CabConfig::default());
        for _ in 0..3 {
            cab.elapse(&VehicleSnapshot::at_rest("en-us")).unwrap();
        }
        assert_eq!(cab.host().update_requests.len(), 1);
        assert_eq!(cab.host().update_requests[0].0, "en-us");
        assert_eq!(cab.host().update_requests[0].1, "2.5.0");
    }

    #[test]
    fn update_check_skipped_when_ignored() {
        let mut cab = new_cab(CabConfig::default().with_ignore_update(true));
        cab.elapse(&VehicleSnapshot::at_rest("en-us")).unwrap();
        assert!(cab.host().update_requests.is_empty());
    }

    #[test]
    fn train_status_and_destination_written() {
        let mut cab = new_cab(CabConfig::minimal().with_train_status(4));
        cab.apply_command(crate::CabCommand::NextRoute).unwrap();
        cab.apply_command(crate::CabCommand::NextRoute).unwrap();
        cab.elapse(&VehicleSnapshot::at_rest("en")).unwrap();
        assert_eq!(cab.panel().get(panel::TRAIN_STATUS), 4);
        assert_eq!(cab.panel().get(panel::DESTINATION), 2);
    }
}
