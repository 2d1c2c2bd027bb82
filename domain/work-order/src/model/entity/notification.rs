use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An in-app notification addressed to a single user, raised by lifecycle
/// decisions on a work order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub content: String,
    /// The work order the notification refers to.
    pub work_order_id: Uuid,
    pub is_read: bool,
    pub created_time: DateTime<Utc>,
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq,
)]
pub enum NotificationKind {
    WorkOrderApproved,
    WorkOrderRejected,
    CompletionApproved,
    CompletionRejected,
}

impl Notification {
    pub fn new(
        user_id: Uuid,
        kind: NotificationKind,
        title: impl Into<String>,
        content: impl Into<String>,
        work_order_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            title: title.into(),
            content: content.into(),
            work_order_id,
            is_read: false,
            created_time: Utc::now(),
        }
    }
}
