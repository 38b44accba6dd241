/// Outcome kind for user-visible notifications.
///
/// This enum classifies notifications by operation outcome, allowing the UI
/// to display them appropriately. There are exactly two kinds: anything that
/// is not a success is surfaced as a failure banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates a failed operation; the message carries the raw error text.
    Fail,
}

/// A notification payload intended for the user interface.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    /// The kind of the notification, determining its visual style.
    pub kind: NotificationKind,
    /// The text content to display to the user.
    pub message: String,
}
