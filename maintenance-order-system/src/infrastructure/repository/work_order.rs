use domain_work_order::model::entity::work_order::WorkOrderStatus;
use domain_work_order::model::entity::WorkOrder;
use domain_work_order::model::vo::{Page, SortOrder, WorkOrderFilter};
use domain_work_order::repository::WorkOrderRepo;
use sea_orm::sea_query::Expr;
use sea_orm::{prelude::*, Condition, PaginatorTrait, QueryFilter, QueryOrder};

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl WorkOrderRepo for OrmRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<WorkOrder>> {
        WorkOrderEntity::find_by_id(id)
            .one(self.con())
            .await?
            .map(WorkOrder::try_from)
            .transpose()
    }

    async fn get_by_order_no(&self, work_order_no: &str) -> anyhow::Result<Option<WorkOrder>> {
        WorkOrderEntity::find()
            .filter(WorkOrderColumn::WorkOrderNo.eq(work_order_no))
            .one(self.con())
            .await?
            .map(WorkOrder::try_from)
            .transpose()
    }

    async fn insert(&self, entity: &WorkOrder) -> anyhow::Result<Uuid> {
        WorkOrderEntity::insert(WorkOrderModel::from(entity).into_set())
            .exec(self.con())
            .await?;
        Ok(entity.id)
    }

    async fn find_page(&self, filter: &WorkOrderFilter) -> anyhow::Result<Page<WorkOrder>> {
        let mut query = WorkOrderEntity::find();
        if let Some(status) = filter.status {
            query = query.filter(WorkOrderColumn::Status.eq(status as i32));
        }
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            query = query.filter(
                Condition::any()
                    .add(WorkOrderColumn::WorkOrderNo.like(&pattern))
                    .add(WorkOrderColumn::EquipmentId.like(&pattern))
                    .add(WorkOrderColumn::Description.like(&pattern)),
            );
        }
        if let Some(from) = filter.order_date_from {
            query = query.filter(WorkOrderColumn::OrderDate.gte(from));
        }
        if let Some(to) = filter.order_date_to {
            query = query.filter(WorkOrderColumn::OrderDate.lte(to));
        }
        query = match filter.sort {
            SortOrder::OrderDateAsc => query.order_by_asc(WorkOrderColumn::OrderDate),
            SortOrder::OrderDateDesc => query.order_by_desc(WorkOrderColumn::OrderDate),
        };

        let paginator = query.paginate(self.con(), filter.per_page.clamp(1, 200));
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(filter.page.saturating_sub(1)).await?;
        let mut items = Vec::with_capacity(models.len());
        for model in models {
            items.push(model.try_into()?);
        }
        Ok(Page { items, total })
    }

    async fn update_status_checked(
        &self,
        entity: &WorkOrder,
        expected: WorkOrderStatus,
    ) -> anyhow::Result<bool> {
        let res = WorkOrderEntity::update_many()
            .set(WorkOrderModel::from(entity).into_set())
            .filter(WorkOrderColumn::Id.eq(entity.id))
            .filter(WorkOrderColumn::Status.eq(expected as i32))
            .exec(self.con())
            .await?;
        Ok(res.rows_affected == 1)
    }

    async fn set_reference_document<'a>(
        &'a self,
        id: Uuid,
        path: Option<&'a str>,
    ) -> anyhow::Result<bool> {
        let res = WorkOrderEntity::update_many()
            .col_expr(
                WorkOrderColumn::ReferenceDocument,
                Expr::value(path.map(str::to_string)),
            )
            .filter(WorkOrderColumn::Id.eq(id))
            .exec(self.con())
            .await?;
        Ok(res.rows_affected == 1)
    }
}
