//! Account notification model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::account_notifications;
use crate::types::NotificationEvent;

/// A notification addressed to a single account.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = account_notifications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountNotification {
    /// Unique notification identifier
    pub id: Uuid,
    /// Account receiving the notification
    pub account_id: Uuid,
    /// Event that produced the notification
    pub event: NotificationEvent,
    /// Notification title
    pub title: String,
    /// Notification message
    pub message: String,
    /// Whether notification has been read
    pub is_read: bool,
    /// Timestamp when notification was read
    pub read_at: Option<Timestamp>,
    /// ID of the related entity (vehicle, invoice, balance request)
    pub related_id: Option<Uuid>,
    /// Notification creation timestamp
    pub created_at: Timestamp,
}

/// Data for creating a new account notification.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = account_notifications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAccountNotification {
    /// Account receiving the notification
    pub account_id: Uuid,
    /// Event that produced the notification
    pub event: NotificationEvent,
    /// Notification title
    pub title: String,
    /// Notification message
    pub message: String,
    /// ID of the related entity
    pub related_id: Option<Uuid>,
}

impl AccountNotification {
    /// Returns whether this notification is unread.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}
