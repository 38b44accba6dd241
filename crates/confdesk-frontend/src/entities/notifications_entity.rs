use confdesk_bridge::notification::NotificationKind;

use crate::formatting;

/// A single banner owned by the notification list.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Identifier unique within the list for the lifetime of the process.
    pub id: u64,
    /// Outcome kind, determining the banner's visual style.
    pub kind: NotificationKind,
    /// The text shown to the user, exactly as it was pushed.
    pub message: String,
    /// Formatted local time at which the banner was pushed.
    pub timestamp: String,
}

/// Ordered collection of visible banners, newest first.
///
/// The list is the single source of truth for what is on screen: views render
/// directly from it and mutate it only through [`push`](Self::push) and
/// [`dismiss`](Self::dismiss).
#[derive(Debug, Clone, Default)]
pub struct NotificationsEntity {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationsEntity {
    /// Currently visible banners, newest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Prepends a new banner and returns its identifier.
    ///
    /// Identifiers come from a monotonic counter, so banners pushed within
    /// the same instant still get distinct ids.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.insert(
            0,
            Notification {
                id,
                kind,
                message: message.into(),
                timestamp: formatting::now_timestamp(),
            },
        );
        id
    }

    /// Removes the banner with the given identifier, leaving the rest
    /// untouched. Unknown identifiers are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notification| notification.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_prepends_exactly_one_banner_with_the_message() {
        let mut list = NotificationsEntity::default();

        list.push(NotificationKind::Success, "первое");
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].message, "первое");
        assert_eq!(list.items()[0].kind, NotificationKind::Success);

        list.push(NotificationKind::Fail, "второе");
        assert_eq!(list.items().len(), 2);
        // Newest first.
        assert_eq!(list.items()[0].message, "второе");
        assert_eq!(list.items()[1].message, "первое");
    }

    #[test]
    fn rapid_pushes_get_distinct_increasing_ids() {
        let mut list = NotificationsEntity::default();

        let first = list.push(NotificationKind::Success, "a");
        let second = list.push(NotificationKind::Success, "b");
        let third = list.push(NotificationKind::Fail, "c");

        assert!(first < second && second < third);
    }

    #[test]
    fn dismiss_removes_only_the_given_banner() {
        let mut list = NotificationsEntity::default();
        let first = list.push(NotificationKind::Success, "a");
        let second = list.push(NotificationKind::Fail, "b");
        let third = list.push(NotificationKind::Success, "c");

        list.dismiss(second);

        let remaining: Vec<u64> = list.items().iter().map(|n| n.id).collect();
        assert_eq!(remaining, vec![third, first]);
    }

    #[test]
    fn dismissing_an_unknown_id_changes_nothing() {
        let mut list = NotificationsEntity::default();
        list.push(NotificationKind::Fail, "a");

        list.dismiss(9000);
        assert_eq!(list.items().len(), 1);
    }
}
