use chrono::{DateTime, Utc};
use opcrab_stack::DataChangeNotification;
use opcrab_types::Scalar;

/// One decoded data-change notification.
///
/// Ephemeral: constructed per notification, handed to the registered
/// observer and discarded. Events are never queued or retained; with no
/// observer registered they are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DataChangeEvent {
    pub subscription_id: u32,
    pub monitored_item_id: u32,
    /// Server timestamp as calendar time, when the notification carried one.
    pub server_time: Option<DateTime<Utc>>,
    /// Source timestamp as calendar time, when the notification carried one.
    pub source_time: Option<DateTime<Utc>>,
    /// Decoded new value. `None` when the wire kind falls outside the
    /// notification decode set, see
    /// [notification_value](opcrab_types::Variant::notification_value).
    pub value: Option<Scalar>,
}

impl DataChangeEvent {
    pub(crate) fn from_notification(notification: DataChangeNotification) -> Self {
        Self {
            subscription_id: notification.subscription_id,
            monitored_item_id: notification.monitored_item_id,
            server_time: notification.server_timestamp.and_then(|t| t.to_utc()),
            source_time: notification.source_timestamp.and_then(|t| t.to_utc()),
            value: notification.value.notification_value(),
        }
    }
}
