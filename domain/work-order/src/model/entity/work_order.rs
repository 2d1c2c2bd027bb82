use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exception::WorkOrderResult;
use crate::model::vo::transition::{Actor, Transition};

/// A unit of maintenance work tracked from creation through completion.
///
/// The lifecycle fields after `status` are populated only by the transition
/// that owns them and cleared again when the order is resubmitted after a
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkOrder {
    pub id: Uuid,
    /// Human-readable order number, unique across all orders.
    pub work_order_no: String,
    pub order_date: NaiveDate,
    pub equipment_id: String,
    /// Usage counter of the equipment when the order was raised, e.g.
    /// running hours.
    pub usage_count: Option<i64>,
    pub description: String,
    pub requested_by: Uuid,
    /// Free-text work classification, bucketed into report categories.
    pub work_type: String,
    pub allocated_at: DateTime<Utc>,
    pub work_completed_date: Option<NaiveDate>,
    pub status: WorkOrderStatus,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub completion_requested_by: Option<Uuid>,
    pub completion_requested_at: Option<DateTime<Utc>>,
    pub completion_approved_by: Option<Uuid>,
    pub completion_approved_at: Option<DateTime<Utc>>,
    pub completion_rejection_reason: Option<String>,
    /// Stored path of the uploaded reference document, if any.
    pub reference_document: Option<String>,
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    /// Created by a requester, awaiting admin approval.
    #[default]
    Pending,
    /// Approved and being worked on.
    Ongoing,
    /// Completion requested, awaiting superadmin sign-off.
    CompletionRequested,
    /// Completion approved. Terminal absent further action.
    Completed,
    /// Rejected by an admin, recoverable through resubmit.
    Rejected,
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Ongoing => "ongoing",
            Self::CompletionRequested => "completion_requested",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

impl WorkOrder {
    /// Validate `transition` against the current state and the caller, then
    /// apply its field effects in place.
    ///
    /// Returns the status the order held before the transition so the caller
    /// can persist with a current-status predicate.
    pub fn apply_transition(
        &mut self,
        transition: &Transition,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> WorkOrderResult<WorkOrderStatus> {
        let prior = self.status;
        transition.validate(prior, actor, self.requested_by)?;

        match transition {
            Transition::Approve => {
                self.rejection_reason = None;
                self.approved_by = Some(actor.id);
                self.approved_at = Some(now);
            }
            Transition::Reject { reason } => {
                self.rejection_reason = Some(reason.clone());
            }
            Transition::Resubmit => {
                self.rejection_reason = None;
                self.approved_by = None;
                self.approved_at = None;
            }
            Transition::RequestCompletion => {
                self.completion_requested_by = Some(actor.id);
                self.completion_requested_at = Some(now);
            }
            Transition::ApproveCompletion => {
                self.completion_approved_by = Some(actor.id);
                self.completion_approved_at = Some(now);
                if self.work_completed_date.is_none() {
                    self.work_completed_date = Some(now.date_naive());
                }
            }
            Transition::RejectCompletion { reason } => {
                self.completion_rejection_reason = Some(reason.clone());
                self.completion_requested_by = None;
                self.completion_requested_at = None;
            }
        }
        self.status = transition.target();
        Ok(prior)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::vo::transition::Role;

    fn order(status: WorkOrderStatus) -> WorkOrder {
        WorkOrder {
            id: Uuid::new_v4(),
            work_order_no: "WO-2024-0001".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            equipment_id: "GSE-117".to_string(),
            description: "Hydraulic leak on lift platform".to_string(),
            requested_by: Uuid::new_v4(),
            work_type: "Mechanical".to_string(),
            status,
            ..Default::default()
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap()
    }

    #[test]
    fn approve_sets_approver_and_clears_rejection() {
        let mut wo = order(WorkOrderStatus::Pending);
        wo.rejection_reason = Some("stale reason".to_string());
        let admin = Actor {
            id: Uuid::new_v4(),
            role: Role::Admin,
        };
        let prior = wo.apply_transition(&Transition::Approve, &admin, at(2024, 1, 3)).unwrap();
        assert_eq!(prior, WorkOrderStatus::Pending);
        assert_eq!(wo.status, WorkOrderStatus::Ongoing);
        assert_eq!(wo.approved_by, Some(admin.id));
        assert!(wo.approved_at.is_some());
        assert!(wo.rejection_reason.is_none());
    }

    #[test]
    fn resubmit_clears_rejection_and_approval_fields() {
        let mut wo = order(WorkOrderStatus::Rejected);
        wo.rejection_reason = Some("missing part numbers".to_string());
        wo.approved_by = Some(Uuid::new_v4());
        wo.approved_at = Some(at(2024, 1, 3));
        let requester = Actor {
            id: wo.requested_by,
            role: Role::User,
        };
        wo.apply_transition(&Transition::Resubmit, &requester, at(2024, 1, 4)).unwrap();
        assert_eq!(wo.status, WorkOrderStatus::Pending);
        assert!(wo.rejection_reason.is_none());
        assert!(wo.approved_by.is_none());
        assert!(wo.approved_at.is_none());
    }

    #[test]
    fn approve_completion_fills_completed_date_only_when_unset() {
        let superadmin = Actor {
            id: Uuid::new_v4(),
            role: Role::SuperAdmin,
        };

        let mut wo = order(WorkOrderStatus::CompletionRequested);
        wo.apply_transition(&Transition::ApproveCompletion, &superadmin, at(2024, 1, 10))
            .unwrap();
        assert_eq!(wo.status, WorkOrderStatus::Completed);
        assert_eq!(wo.completion_approved_by, Some(superadmin.id));
        assert_eq!(wo.work_completed_date, Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()));

        let mut wo = order(WorkOrderStatus::CompletionRequested);
        wo.work_completed_date = Some(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        wo.apply_transition(&Transition::ApproveCompletion, &superadmin, at(2024, 1, 10))
            .unwrap();
        assert_eq!(wo.work_completed_date, Some(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()));
    }

    #[test]
    fn reject_completion_returns_to_ongoing_and_clears_request_fields() {
        let mut wo = order(WorkOrderStatus::CompletionRequested);
        wo.completion_requested_by = Some(Uuid::new_v4());
        wo.completion_requested_at = Some(at(2024, 1, 9));
        let superadmin = Actor {
            id: Uuid::new_v4(),
            role: Role::SuperAdmin,
        };
        wo.apply_transition(
            &Transition::RejectCompletion {
                reason: "checklist incomplete".to_string(),
            },
            &superadmin,
            at(2024, 1, 10),
        )
        .unwrap();
        assert_eq!(wo.status, WorkOrderStatus::Ongoing);
        assert_eq!(wo.completion_rejection_reason.as_deref(), Some("checklist incomplete"));
        assert!(wo.completion_requested_by.is_none());
        assert!(wo.completion_requested_at.is_none());
    }
}
