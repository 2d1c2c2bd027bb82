use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_work_order::exception::{WorkOrderException, WorkOrderResult};
use domain_work_order::model::entity::work_order::WorkOrderStatus;
use domain_work_order::model::entity::WorkOrder;
use domain_work_order::model::vo::{Actor, Page, Transition, WorkOrderDraft, WorkOrderFilter};
use domain_work_order::repository::{NotificationRepo, WorkOrderRepo};
use domain_work_order::service::WorkOrderService;
use tracing::info;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct WorkOrderServiceImpl {
    work_order_repo: Arc<dyn WorkOrderRepo>,
    notification_repo: Arc<dyn NotificationRepo>,
}

#[async_trait]
impl WorkOrderService for WorkOrderServiceImpl {
    async fn create(&self, draft: WorkOrderDraft, actor: Actor) -> WorkOrderResult<WorkOrder> {
        draft.validate()?;
        if self
            .work_order_repo
            .get_by_order_no(&draft.work_order_no)
            .await?
            .is_some()
        {
            return Err(WorkOrderException::validation(format!(
                "work order number {} is already taken",
                draft.work_order_no
            )));
        }

        let order = WorkOrder {
            id: Uuid::new_v4(),
            work_order_no: draft.work_order_no,
            order_date: draft.order_date,
            equipment_id: draft.equipment_id,
            usage_count: draft.usage_count,
            description: draft.description,
            requested_by: actor.id,
            work_type: draft.work_type,
            allocated_at: Utc::now(),
            status: WorkOrderStatus::Pending,
            ..Default::default()
        };
        self.work_order_repo.insert(&order).await?;
        info!(work_order = %order.work_order_no, "work order created");
        Ok(order)
    }

    async fn get(&self, id: Uuid) -> WorkOrderResult<WorkOrder> {
        self.work_order_repo.get_by_id(id).await?.ok_or(WorkOrderException::NotFound {
            entity: "work order",
            id,
        })
    }

    async fn list(&self, filter: WorkOrderFilter) -> WorkOrderResult<Page<WorkOrder>> {
        Ok(self.work_order_repo.find_page(&filter).await?)
    }

    async fn transit(
        &self,
        id: Uuid,
        actor: Actor,
        transition: Transition,
    ) -> WorkOrderResult<WorkOrder> {
        let mut order = self.get(id).await?;
        let prior = order.apply_transition(&transition, &actor, Utc::now())?;

        // The store only applies the write while the status still equals
        // `prior`; zero affected rows means a concurrent transition won.
        if !self.work_order_repo.update_status_checked(&order, prior).await? {
            let current = self.get(id).await.map(|o| o.status).unwrap_or(prior);
            return Err(WorkOrderException::InvalidTransition {
                transition: transition.name(),
                current,
            });
        }

        if let Some(notification) = transition.notification(&order) {
            self.notification_repo.insert(&notification).await?;
        }
        info!(work_order = %order.work_order_no, %transition, status = %order.status, "transition applied");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::NaiveDate;
    use domain_work_order::mock::prelude::*;
    use domain_work_order::model::entity::NotificationKind;
    use domain_work_order::model::vo::Role;
    use mockall::predicate::eq;

    use super::*;

    fn pending_order(requested_by: Uuid) -> WorkOrder {
        WorkOrder {
            id: Uuid::new_v4(),
            work_order_no: "WO-2024-0007".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            equipment_id: "TUG-04".to_string(),
            description: "Brake pads worn".to_string(),
            requested_by,
            work_type: "Mechanical".to_string(),
            status: WorkOrderStatus::Pending,
            ..Default::default()
        }
    }

    fn service(
        work_order_repo: MockWorkOrderRepo,
        notification_repo: MockNotificationRepo,
    ) -> WorkOrderServiceImpl {
        WorkOrderServiceImpl::builder()
            .work_order_repo(Arc::new(work_order_repo))
            .notification_repo(Arc::new(notification_repo))
            .build()
    }

    #[tokio::test]
    async fn approve_persists_with_prior_status_and_notifies_requester() {
        let requester = Uuid::new_v4();
        let order = pending_order(requester);
        let id = order.id;

        let mut work_order_repo = MockWorkOrderRepo::new();
        work_order_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(order.clone())));
        work_order_repo
            .expect_update_status_checked()
            .withf(|entity, expected| {
                entity.status == WorkOrderStatus::Ongoing && *expected == WorkOrderStatus::Pending
            })
            .once()
            .returning(|_, _| Ok(true));

        let mut notification_repo = MockNotificationRepo::new();
        notification_repo
            .expect_insert()
            .withf(move |n| {
                n.user_id == requester && n.kind == NotificationKind::WorkOrderApproved
            })
            .once()
            .returning(|n| Ok(n.id));

        let admin = Actor {
            id: Uuid::new_v4(),
            role: Role::Admin,
        };
        let updated = service(work_order_repo, notification_repo)
            .transit(id, admin, Transition::Approve)
            .await
            .unwrap();
        assert_eq!(updated.status, WorkOrderStatus::Ongoing);
        assert_eq!(updated.approved_by, Some(admin.id));
    }

    #[tokio::test]
    async fn lost_race_maps_to_invalid_transition_and_skips_notification() {
        let order = pending_order(Uuid::new_v4());
        let id = order.id;

        let mut work_order_repo = MockWorkOrderRepo::new();
        let mut seq = mockall::Sequence::new();
        let first = order.clone();
        work_order_repo
            .expect_get_by_id()
            .once()
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(first.clone())));
        work_order_repo
            .expect_update_status_checked()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(false));
        let mut raced = order;
        raced.status = WorkOrderStatus::Rejected;
        work_order_repo
            .expect_get_by_id()
            .once()
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(raced.clone())));

        let mut notification_repo = MockNotificationRepo::new();
        notification_repo.expect_insert().never();

        let err = service(work_order_repo, notification_repo)
            .transit(
                id,
                Actor {
                    id: Uuid::new_v4(),
                    role: Role::Admin,
                },
                Transition::Approve,
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkOrderException::InvalidTransition {
                current: WorkOrderStatus::Rejected,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn reject_completion_with_empty_reason_is_rejected_before_any_write() {
        let mut order = pending_order(Uuid::new_v4());
        order.status = WorkOrderStatus::CompletionRequested;
        let id = order.id;

        let mut work_order_repo = MockWorkOrderRepo::new();
        work_order_repo
            .expect_get_by_id()
            .returning(move |_| Ok(Some(order.clone())));
        work_order_repo.expect_update_status_checked().never();

        let mut notification_repo = MockNotificationRepo::new();
        notification_repo.expect_insert().never();

        let err = service(work_order_repo, notification_repo)
            .transit(
                id,
                Actor {
                    id: Uuid::new_v4(),
                    role: Role::SuperAdmin,
                },
                Transition::RejectCompletion {
                    reason: "   ".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, WorkOrderException::Validation { .. }));
    }

    #[tokio::test]
    async fn transit_on_unknown_id_is_not_found() {
        let mut work_order_repo = MockWorkOrderRepo::new();
        work_order_repo.expect_get_by_id().returning(|_| Ok(None));
        let notification_repo = MockNotificationRepo::new();

        let err = service(work_order_repo, notification_repo)
            .transit(
                Uuid::new_v4(),
                Actor {
                    id: Uuid::new_v4(),
                    role: Role::SuperAdmin,
                },
                Transition::Approve,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, WorkOrderException::NotFound { .. }));
    }

    #[tokio::test]
    async fn duplicate_order_number_fails_validation() {
        let existing = pending_order(Uuid::new_v4());
        let mut work_order_repo = MockWorkOrderRepo::new();
        work_order_repo
            .expect_get_by_order_no()
            .withf(|no| no == "WO-2024-0007")
            .returning(move |_| Ok(Some(existing.clone())));
        work_order_repo.expect_insert().never();
        let notification_repo = MockNotificationRepo::new();

        let draft = WorkOrderDraft {
            work_order_no: "WO-2024-0007".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            equipment_id: "TUG-04".to_string(),
            usage_count: None,
            description: "duplicate".to_string(),
            work_type: "Mechanical".to_string(),
        };
        let err = service(work_order_repo, notification_repo)
            .create(
                draft,
                Actor {
                    id: Uuid::new_v4(),
                    role: Role::User,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, WorkOrderException::Validation { .. }));
    }

    /// Conditional-update fake standing in for the relational store.
    #[derive(Default)]
    struct InMemoryWorkOrderRepo {
        orders: Mutex<HashMap<Uuid, WorkOrder>>,
    }

    #[async_trait]
    impl WorkOrderRepo for InMemoryWorkOrderRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<WorkOrder>> {
            Ok(self.orders.lock().unwrap().get(&id).cloned())
        }

        async fn get_by_order_no(&self, work_order_no: &str) -> anyhow::Result<Option<WorkOrder>> {
            Ok(self
                .orders
                .lock()
                .unwrap()
                .values()
                .find(|o| o.work_order_no == work_order_no)
                .cloned())
        }

        async fn insert(&self, entity: &WorkOrder) -> anyhow::Result<Uuid> {
            self.orders.lock().unwrap().insert(entity.id, entity.clone());
            Ok(entity.id)
        }

        async fn find_page(&self, filter: &WorkOrderFilter) -> anyhow::Result<Page<WorkOrder>> {
            let items: Vec<_> = self
                .orders
                .lock()
                .unwrap()
                .values()
                .filter(|o| filter.status.map_or(true, |s| o.status == s))
                .cloned()
                .collect();
            let total = items.len() as u64;
            Ok(Page { items, total })
        }

        async fn update_status_checked(
            &self,
            entity: &WorkOrder,
            expected: WorkOrderStatus,
        ) -> anyhow::Result<bool> {
            let mut orders = self.orders.lock().unwrap();
            match orders.get_mut(&entity.id) {
                Some(stored) if stored.status == expected => {
                    *stored = entity.clone();
                    Ok(true)
                }
                _ => Ok(false),
            }
        }

        async fn set_reference_document<'a>(
            &'a self,
            id: Uuid,
            path: Option<&'a str>,
        ) -> anyhow::Result<bool> {
            let mut orders = self.orders.lock().unwrap();
            match orders.get_mut(&id) {
                Some(stored) => {
                    stored.reference_document = path.map(str::to_string);
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    #[derive(Default)]
    struct InMemoryNotificationRepo {
        notifications: Mutex<Vec<domain_work_order::model::entity::Notification>>,
    }

    #[async_trait]
    impl NotificationRepo for InMemoryNotificationRepo {
        async fn insert(
            &self,
            entity: &domain_work_order::model::entity::Notification,
        ) -> anyhow::Result<Uuid> {
            self.notifications.lock().unwrap().push(entity.clone());
            Ok(entity.id)
        }

        async fn list_by_user(
            &self,
            user_id: Uuid,
        ) -> anyhow::Result<Vec<domain_work_order::model::entity::Notification>> {
            Ok(self
                .notifications
                .lock()
                .unwrap()
                .iter()
                .filter(|n| n.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn mark_read(&self, _id: Uuid, _user_id: Uuid) -> anyhow::Result<bool> {
            Ok(true)
        }
    }

    fn in_memory_service() -> (WorkOrderServiceImpl, Arc<InMemoryNotificationRepo>) {
        let notifications = Arc::new(InMemoryNotificationRepo::default());
        let service = WorkOrderServiceImpl::builder()
            .work_order_repo(Arc::new(InMemoryWorkOrderRepo::default()))
            .notification_repo(notifications.clone())
            .build();
        (service, notifications)
    }

    #[tokio::test]
    async fn full_lifecycle_round_trip() {
        let (service, notifications) = in_memory_service();
        let requester = Actor {
            id: Uuid::new_v4(),
            role: Role::User,
        };
        let admin = Actor {
            id: Uuid::new_v4(),
            role: Role::Admin,
        };
        let superadmin = Actor {
            id: Uuid::new_v4(),
            role: Role::SuperAdmin,
        };

        let draft = WorkOrderDraft {
            work_order_no: "WO-2024-0100".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            equipment_id: "BELT-12".to_string(),
            usage_count: Some(5400),
            description: "Conveyor belt slipping".to_string(),
            work_type: "Mechanical".to_string(),
        };
        let created = service.create(draft, requester).await.unwrap();

        service.transit(created.id, admin, Transition::Approve).await.unwrap();
        service
            .transit(created.id, requester, Transition::RequestCompletion)
            .await
            .unwrap();
        service
            .transit(created.id, superadmin, Transition::ApproveCompletion)
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.status, WorkOrderStatus::Completed);
        assert_eq!(fetched.work_order_no, "WO-2024-0100");
        assert_eq!(fetched.completion_approved_by, Some(superadmin.id));
        assert!(fetched.completion_approved_at.is_some());

        let inbox = notifications.list_by_user(requester.id).await.unwrap();
        let kinds: Vec<_> = inbox.iter().map(|n| n.kind).collect();
        assert!(kinds.contains(&NotificationKind::WorkOrderApproved));
        assert!(kinds.contains(&NotificationKind::CompletionApproved));
    }

    #[tokio::test]
    async fn concurrent_completion_approvals_have_exactly_one_winner() {
        let (service, _) = in_memory_service();
        let requester = Actor {
            id: Uuid::new_v4(),
            role: Role::User,
        };
        let admin = Actor {
            id: Uuid::new_v4(),
            role: Role::Admin,
        };
        let superadmin = Actor {
            id: Uuid::new_v4(),
            role: Role::SuperAdmin,
        };

        let draft = WorkOrderDraft {
            work_order_no: "WO-2024-0101".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            equipment_id: "GPU-02".to_string(),
            usage_count: None,
            description: "Output voltage unstable".to_string(),
            work_type: "Electrical".to_string(),
        };
        let created = service.create(draft, requester).await.unwrap();
        service.transit(created.id, admin, Transition::Approve).await.unwrap();
        service
            .transit(created.id, requester, Transition::RequestCompletion)
            .await
            .unwrap();

        let (a, b) = tokio::join!(
            service.transit(created.id, superadmin, Transition::ApproveCompletion),
            service.transit(created.id, superadmin, Transition::ApproveCompletion),
        );
        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        let loser = if a.is_ok() { b } else { a };
        assert!(matches!(
            loser.unwrap_err(),
            WorkOrderException::InvalidTransition { .. }
        ));
        assert_eq!(
            service.get(created.id).await.unwrap().status,
            WorkOrderStatus::Completed
        );
    }
}
