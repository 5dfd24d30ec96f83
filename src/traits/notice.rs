//! On-screen notices.
//!
//! The controller names a message by [`MessageId`]; the host looks up the
//! translated text and shows it in its message area.

/// Messages the cab controller can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageId {
    /// "Turn off the turn signal first".
    TurnOffTurnSignal,
}

impl MessageId {
    /// Key into the host's translation table.
    pub const fn key(self) -> &'static str {
        match self {
            MessageId::TurnOffTurnSignal => "gameMsg.turnOffTurnSignal",
        }
    }
}

/// A transient message for the driver, shown in the host's warning color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Notice {
    /// What to say.
    pub message: MessageId,
    /// How long to show it.
    pub duration_secs: f32,
}

impl Notice {
    /// Warning shown for five seconds.
    pub const fn warning(message: MessageId) -> Self {
        Self {
            message,
            duration_secs: 5.0,
        }
    }
}

/// Sink for on-screen notices. Showing a notice cannot fail.
pub trait NoticeOutput {
    /// Show a notice.
    fn show_notice(&mut self, notice: Notice);
}
