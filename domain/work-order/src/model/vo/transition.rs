use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exception::{WorkOrderException, WorkOrderResult};
use crate::model::entity::work_order::{WorkOrder, WorkOrderStatus};
use crate::model::entity::{Notification, NotificationKind};

/// Caller identity and role as resolved by the authentication layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

#[derive(
    FromPrimitive,
    ToPrimitive,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
pub enum Role {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

/// A requested change of work-order state.
///
/// Legality, guard, and payload rules for every state change live here, in
/// one table, instead of being re-checked per endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Transition {
    Approve,
    Reject { reason: String },
    Resubmit,
    RequestCompletion,
    ApproveCompletion,
    RejectCompletion { reason: String },
}

impl Transition {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject { .. } => "reject",
            Self::Resubmit => "resubmit",
            Self::RequestCompletion => "request-completion",
            Self::ApproveCompletion => "approve-completion",
            Self::RejectCompletion { .. } => "reject-completion",
        }
    }

    /// The state this transition lands on.
    pub fn target(&self) -> WorkOrderStatus {
        match self {
            Self::Approve => WorkOrderStatus::Ongoing,
            Self::Reject { .. } => WorkOrderStatus::Rejected,
            Self::Resubmit => WorkOrderStatus::Pending,
            Self::RequestCompletion => WorkOrderStatus::CompletionRequested,
            Self::ApproveCompletion => WorkOrderStatus::Completed,
            Self::RejectCompletion { .. } => WorkOrderStatus::Ongoing,
        }
    }

    fn allowed_from(&self, current: WorkOrderStatus) -> bool {
        use WorkOrderStatus::*;
        matches!(
            (self, current),
            (Self::Approve, Pending)
                | (Self::Reject { .. }, Pending)
                | (Self::Resubmit, Rejected)
                | (Self::RequestCompletion, Pending | Ongoing | CompletionRequested)
                | (Self::ApproveCompletion, CompletionRequested)
                | (Self::RejectCompletion { .. }, CompletionRequested)
        )
    }

    /// Check legality from `current`, the caller's guard, and the payload,
    /// in that order.
    pub fn validate(
        &self,
        current: WorkOrderStatus,
        actor: &Actor,
        requested_by: Uuid,
    ) -> WorkOrderResult<()> {
        if !self.allowed_from(current) {
            return Err(WorkOrderException::InvalidTransition {
                transition: self.name(),
                current,
            });
        }

        let permitted = match self {
            Self::Approve | Self::Reject { .. } => actor.role >= Role::Admin,
            Self::Resubmit => actor.id == requested_by,
            Self::RequestCompletion => true,
            Self::ApproveCompletion | Self::RejectCompletion { .. } => {
                actor.role == Role::SuperAdmin
            }
        };
        if !permitted {
            return Err(WorkOrderException::Forbidden {
                transition: self.name(),
            });
        }

        match self {
            Self::Reject { reason } | Self::RejectCompletion { reason }
                if reason.trim().is_empty() =>
            {
                Err(WorkOrderException::validation(format!(
                    "{} requires a non-empty reason",
                    self.name()
                )))
            }
            _ => Ok(()),
        }
    }

    /// The notification owed to the requester, if this transition is a
    /// decision on the order or on its completion request.
    pub fn notification(&self, order: &WorkOrder) -> Option<Notification> {
        let no = &order.work_order_no;
        let (kind, title, content) = match self {
            Self::Approve => (
                NotificationKind::WorkOrderApproved,
                format!("Work order {no} approved"),
                format!("Work order {no} was approved and is now ongoing."),
            ),
            Self::Reject { reason } => (
                NotificationKind::WorkOrderRejected,
                format!("Work order {no} rejected"),
                format!("Work order {no} was rejected: {reason}"),
            ),
            Self::ApproveCompletion => (
                NotificationKind::CompletionApproved,
                format!("Work order {no} completed"),
                format!("Completion of work order {no} was approved."),
            ),
            Self::RejectCompletion { reason } => (
                NotificationKind::CompletionRejected,
                format!("Completion of work order {no} rejected"),
                format!("Completion of work order {no} was rejected: {reason}"),
            ),
            Self::Resubmit | Self::RequestCompletion => return None,
        };
        Some(Notification::new(
            order.requested_by,
            kind,
            title,
            content,
            order.id,
        ))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [WorkOrderStatus; 5] = [
        WorkOrderStatus::Pending,
        WorkOrderStatus::Ongoing,
        WorkOrderStatus::CompletionRequested,
        WorkOrderStatus::Completed,
        WorkOrderStatus::Rejected,
    ];

    fn actor(role: Role) -> Actor {
        Actor {
            id: Uuid::new_v4(),
            role,
        }
    }

    fn all_transitions() -> Vec<Transition> {
        vec![
            Transition::Approve,
            Transition::Reject {
                reason: "r".to_string(),
            },
            Transition::Resubmit,
            Transition::RequestCompletion,
            Transition::ApproveCompletion,
            Transition::RejectCompletion {
                reason: "r".to_string(),
            },
        ]
    }

    #[test]
    fn every_target_is_a_member_of_the_status_enumeration() {
        for t in all_transitions() {
            assert!(ALL_STATUSES.contains(&t.target()));
        }
    }

    #[test]
    fn approve_and_reject_below_admin_are_forbidden() {
        let requester = Uuid::new_v4();
        for t in [
            Transition::Approve,
            Transition::Reject {
                reason: "incomplete".to_string(),
            },
        ] {
            let err = t
                .validate(WorkOrderStatus::Pending, &actor(Role::User), requester)
                .unwrap_err();
            assert!(matches!(err, WorkOrderException::Forbidden { .. }));
            t.validate(WorkOrderStatus::Pending, &actor(Role::Admin), requester).unwrap();
        }
    }

    #[test]
    fn completion_decisions_require_superadmin() {
        let requester = Uuid::new_v4();
        for t in [
            Transition::ApproveCompletion,
            Transition::RejectCompletion {
                reason: "not done".to_string(),
            },
        ] {
            let err = t
                .validate(
                    WorkOrderStatus::CompletionRequested,
                    &actor(Role::Admin),
                    requester,
                )
                .unwrap_err();
            assert!(matches!(err, WorkOrderException::Forbidden { .. }));
            t.validate(
                WorkOrderStatus::CompletionRequested,
                &actor(Role::SuperAdmin),
                requester,
            )
            .unwrap();
        }
    }

    #[test]
    fn resubmit_only_from_rejected_and_only_by_the_requester() {
        let requester = Uuid::new_v4();
        let own = Actor {
            id: requester,
            role: Role::User,
        };

        Transition::Resubmit.validate(WorkOrderStatus::Rejected, &own, requester).unwrap();

        let err = Transition::Resubmit
            .validate(WorkOrderStatus::Rejected, &actor(Role::SuperAdmin), requester)
            .unwrap_err();
        assert!(matches!(err, WorkOrderException::Forbidden { .. }));

        for status in ALL_STATUSES.iter().filter(|s| **s != WorkOrderStatus::Rejected) {
            let err = Transition::Resubmit.validate(*status, &own, requester).unwrap_err();
            assert!(matches!(err, WorkOrderException::InvalidTransition { .. }));
        }
    }

    #[test]
    fn request_completion_is_open_to_any_authenticated_actor() {
        let requester = Uuid::new_v4();
        for status in [
            WorkOrderStatus::Pending,
            WorkOrderStatus::Ongoing,
            WorkOrderStatus::CompletionRequested,
        ] {
            Transition::RequestCompletion.validate(status, &actor(Role::User), requester).unwrap();
        }
        for status in [WorkOrderStatus::Completed, WorkOrderStatus::Rejected] {
            let err = Transition::RequestCompletion
                .validate(status, &actor(Role::User), requester)
                .unwrap_err();
            assert!(matches!(err, WorkOrderException::InvalidTransition { .. }));
        }
    }

    #[test]
    fn rejections_require_a_non_empty_reason() {
        let requester = Uuid::new_v4();
        let err = Transition::Reject {
            reason: "  ".to_string(),
        }
        .validate(WorkOrderStatus::Pending, &actor(Role::Admin), requester)
        .unwrap_err();
        assert!(matches!(err, WorkOrderException::Validation { .. }));

        let err = Transition::RejectCompletion {
            reason: String::new(),
        }
        .validate(
            WorkOrderStatus::CompletionRequested,
            &actor(Role::SuperAdmin),
            requester,
        )
        .unwrap_err();
        assert!(matches!(err, WorkOrderException::Validation { .. }));
    }

    #[test]
    fn no_transition_leaves_completed() {
        for t in all_transitions() {
            assert!(!t.allowed_from(WorkOrderStatus::Completed));
        }
    }

    #[test]
    fn legality_is_checked_before_the_guard() {
        // A user below admin attempting approve from a non-pending state gets
        // InvalidTransition, not Forbidden.
        let err = Transition::Approve
            .validate(WorkOrderStatus::Ongoing, &actor(Role::User), Uuid::new_v4())
            .unwrap_err();
        assert!(matches!(err, WorkOrderException::InvalidTransition { .. }));
    }
}
