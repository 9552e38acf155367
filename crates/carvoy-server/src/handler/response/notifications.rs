//! Account notification response types.

use carvoy_postgres::model::AccountNotification;
use carvoy_postgres::types::NotificationEvent;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response type for an account notification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// Event that produced the notification.
    pub event: NotificationEvent,
    /// Notification title.
    pub title: String,
    /// Notification message.
    pub message: String,
    /// Whether the notification has been read.
    pub is_read: bool,
    /// When the notification was read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<Timestamp>,
    /// Related entity ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_id: Option<Uuid>,
    /// When the notification was created.
    pub created_at: Timestamp,
}

impl From<AccountNotification> for Notification {
    fn from(notification: AccountNotification) -> Self {
        Self {
            id: notification.id,
            event: notification.event,
            title: notification.title,
            message: notification.message,
            is_read: notification.is_read,
            read_at: notification.read_at.map(Into::into),
            related_id: notification.related_id,
            created_at: notification.created_at.into(),
        }
    }
}

/// Count of unread notifications.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnreadStatus {
    /// Number of unread notifications.
    pub unread_count: i64,
}
