//! Host collaborators other than sound and notices, and the [`CabHost`]
//! bundle the controller is generic over.

use super::{NoticeOutput, SoundOutput};

/// Camera query.
pub trait CameraView {
    /// Whether the observer is in the driver's cab. Cab-only sounds are
    /// skipped otherwise.
    fn in_cab(&self) -> bool;
}

/// Receiver for the one-off update check request.
///
/// The controller sends the request and never waits for or reads a result;
/// any networking lives entirely on the host side.
pub trait UpdateNotifier {
    /// Ask the host to check for a newer add-on version.
    fn request_update_check(&mut self, language: &str, current_version: &str);
}

/// Everything the cab controller needs from the host.
///
/// Implemented automatically for any type providing all four traits.
pub trait CabHost: SoundOutput + NoticeOutput + CameraView + UpdateNotifier {}

impl<T> CabHost for T where T: SoundOutput + NoticeOutput + CameraView + UpdateNotifier {}
