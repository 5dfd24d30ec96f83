//! Sound output abstraction.
//!
//! The host owns the sound table; the cab controller only asks for sounds to
//! start or stop through [`SoundOutput`].

use crate::indices::SoundIndex;

/// A request to the host's sound system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SoundRequest {
    /// Play on the driver's car.
    Play {
        /// Sound slot.
        sound: SoundIndex,
        /// Volume factor.
        volume: f32,
        /// Pitch factor.
        pitch: f32,
        /// Loop until stopped.
        looped: bool,
    },
    /// Play on one car of the consist.
    PlayCar {
        /// Sound slot.
        sound: SoundIndex,
        /// Car index, 0 is the first car.
        car: u32,
        /// Volume factor.
        volume: f32,
        /// Pitch factor.
        pitch: f32,
        /// Loop until stopped.
        looped: bool,
    },
    /// Play on every car.
    PlayAllCars {
        /// Sound slot.
        sound: SoundIndex,
        /// Volume factor.
        volume: f32,
        /// Pitch factor.
        pitch: f32,
    },
    /// Stop the sound wherever it plays.
    Stop(SoundIndex),
}

impl SoundRequest {
    /// Sound slot this request refers to.
    pub const fn sound(&self) -> SoundIndex {
        match *self {
            SoundRequest::Play { sound, .. }
            | SoundRequest::PlayCar { sound, .. }
            | SoundRequest::PlayAllCars { sound, .. }
            | SoundRequest::Stop(sound) => sound,
        }
    }
}

/// Sound sink trait.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use lrv_cab::traits::{SoundOutput, SoundRequest};
/// use lrv_cab::indices::SoundIndex;
///
/// struct HostSounds { /* host callbacks */ }
///
/// impl SoundOutput for HostSounds {
///     type Error = ();
///
///     fn submit(&mut self, request: SoundRequest) -> Result<(), ()> {
///         // Forward to the host's PlaySound / PlayCarSound callbacks...
///         Ok(())
///     }
///
///     fn is_playing(&self, sound: SoundIndex) -> bool {
///         false
///     }
/// }
/// ```
pub trait SoundOutput {
    /// Error type for sound operations.
    type Error;

    /// Hand a request to the host.
    fn submit(&mut self, request: SoundRequest) -> Result<(), Self::Error>;

    /// Whether the sound is currently playing on any car.
    fn is_playing(&self, sound: SoundIndex) -> bool;

    /// Play once at normal volume and pitch.
    fn play_once(&mut self, sound: SoundIndex) -> Result<(), Self::Error> {
        self.submit(SoundRequest::Play {
            sound,
            volume: 1.0,
            pitch: 1.0,
            looped: false,
        })
    }

    /// Start a loop at normal volume and pitch.
    fn play_looping(&mut self, sound: SoundIndex) -> Result<(), Self::Error> {
        self.submit(SoundRequest::Play {
            sound,
            volume: 1.0,
            pitch: 1.0,
            looped: true,
        })
    }

    /// Stop a sound.
    fn stop(&mut self, sound: SoundIndex) -> Result<(), Self::Error> {
        self.submit(SoundRequest::Stop(sound))
    }
}
