//! Mock host for testing without a simulator.
//!
//! [`MockHost`] implements every collaborator trait the cab controller needs
//! and records what the controller asked for.
//!
//! | Trait | Recorded in |
//! |-------|-------------|
//! | [`SoundOutput`] | `sounds`, `playing` |
//! | [`NoticeOutput`] | `notices` |
//! | [`CameraView`] | answers from `in_cab` |
//! | [`UpdateNotifier`] | `update_requests` |
//!
//! # Example
//!
//! ```rust
//! use lrv_cab::{CabConfig, CabController, TurnSignal};
//! use lrv_cab::hal::MockHost;
//! use lrv_cab::indices::sound;
//!
//! let mut cab = CabController::new(MockHost::new(), CabConfig::default());
//! cab.toggle_indicator(TurnSignal::Left).unwrap();
//!
//! assert_eq!(cab.host().count(sound::CLICK), 1);
//! ```
//!
//! [`SoundOutput`]: crate::traits::SoundOutput
//! [`NoticeOutput`]: crate::traits::NoticeOutput
//! [`CameraView`]: crate::traits::CameraView
//! [`UpdateNotifier`]: crate::traits::UpdateNotifier

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::indices::SoundIndex;
use crate::traits::{CameraView, Notice, NoticeOutput, SoundOutput, SoundRequest, UpdateNotifier};

/// Mock simulator host.
///
/// Tracks which sounds are playing from the start/stop requests it receives,
/// so `is_playing` answers the way a real sound system would (one-shot
/// sounds are treated as playing until stopped).
#[derive(Debug)]
pub struct MockHost {
    /// Every sound request, in order.
    pub sounds: Vec<SoundRequest>,
    /// Sounds started and not yet stopped.
    pub playing: Vec<SoundIndex>,
    /// Notices shown.
    pub notices: Vec<Notice>,
    /// Update check requests as `(language, version)`.
    pub update_requests: Vec<(String, String)>,
    /// Answer for [`CameraView::in_cab`].
    pub in_cab: bool,
    /// Make every sound request fail.
    pub fail_sounds: bool,
}

impl MockHost {
    /// Creates a mock host with the camera in the cab.
    pub fn new() -> Self {
        Self {
            sounds: Vec::new(),
            playing: Vec::new(),
            notices: Vec::new(),
            update_requests: Vec::new(),
            in_cab: true,
            fail_sounds: false,
        }
    }

    /// Creates a mock host with the camera outside the cab.
    pub fn outside_cab() -> Self {
        Self {
            in_cab: false,
            ..Self::new()
        }
    }

    /// Number of start requests (any car) for a sound.
    pub fn count(&self, sound: SoundIndex) -> usize {
        self.sounds
            .iter()
            .filter(|r| !matches!(r, SoundRequest::Stop(_)) && r.sound() == sound)
            .count()
    }

    /// Number of stop requests for a sound.
    pub fn stops(&self, sound: SoundIndex) -> usize {
        self.sounds
            .iter()
            .filter(|r| **r == SoundRequest::Stop(sound))
            .count()
    }

    /// Translation keys of the notices shown, in order.
    pub fn notice_keys(&self) -> Vec<&'static str> {
        self.notices.iter().map(|n| n.message.key()).collect()
    }

    /// Forget recorded requests (playing state is kept).
    pub fn clear_log(&mut self) {
        self.sounds.clear();
        self.notices.clear();
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundOutput for MockHost {
    type Error = ();

    fn submit(&mut self, request: SoundRequest) -> Result<(), ()> {
        if self.fail_sounds {
            return Err(());
        }
        self.sounds.push(request);
        let sound = request.sound();
        match request {
            SoundRequest::Stop(_) => self.playing.retain(|s| *s != sound),
            _ => {
                if !self.playing.contains(&sound) {
                    self.playing.push(sound);
                }
            }
        }
        Ok(())
    }

    fn is_playing(&self, sound: SoundIndex) -> bool {
        self.playing.contains(&sound)
    }
}

impl NoticeOutput for MockHost {
    fn show_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

impl CameraView for MockHost {
    fn in_cab(&self) -> bool {
        self.in_cab
    }
}

impl UpdateNotifier for MockHost {
    fn request_update_check(&mut self, language: &str, current_version: &str) {
        self.update_requests
            .push((language.into(), current_version.into()));
    }
}
