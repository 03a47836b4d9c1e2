//! User-visible notices emitted by the sync layer.
//!
//! The UI owns the receiving end of the channel and renders each notice as a
//! toast. A dropped receiver is not an error; notices are then discarded.

use tokio::sync::mpsc;

/// Sending half handed to the sync types.
pub type NoticeSender = mpsc::UnboundedSender<Notice>;

/// Receiving half owned by the UI.
pub type NoticeReceiver = mpsc::UnboundedReceiver<Notice>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Create a connected notice channel.
pub fn channel() -> (NoticeSender, NoticeReceiver) {
    mpsc::unbounded_channel()
}

/// Send a notice, ignoring a closed receiver.
pub(crate) fn emit(sender: &NoticeSender, notice: Notice) {
    let _ = sender.send(notice);
}
