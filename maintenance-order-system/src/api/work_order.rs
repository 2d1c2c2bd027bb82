use actix_web::web::{self, Path};
use actix_web::{get, post};
use domain_work_order::model::vo::{Page, Transition, WorkOrderDraft, WorkOrderFilter};

use crate::api::auth::Identity;
use crate::api::dtos::{RejectRequest, WorkOrderDto};
use crate::api::{extract_uuid, ApiResult};
use crate::infrastructure::ServiceProvider;

#[post("work-order/Create")]
pub async fn create_work_order(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
    draft: web::Json<WorkOrderDraft>,
) -> ApiResult<web::Json<WorkOrderDto>> {
    let order = sp.work_order_service.create(draft.into_inner(), identity.0).await?;
    Ok(web::Json(order.into()))
}

#[get("work-order/Get/{id}")]
pub async fn get_work_order(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    id: Path<String>,
) -> ApiResult<web::Json<WorkOrderDto>> {
    let id = extract_uuid(&id)?;
    Ok(web::Json(sp.work_order_service.get(id).await?.into()))
}

#[get("work-order/List")]
pub async fn list_work_orders(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    filter: web::Query<WorkOrderFilter>,
) -> ApiResult<web::Json<Page<WorkOrderDto>>> {
    let page = sp.work_order_service.list(filter.into_inner()).await?;
    Ok(web::Json(Page {
        items: page.items.into_iter().map(Into::into).collect(),
        total: page.total,
    }))
}

async fn transit(
    sp: &ServiceProvider,
    identity: Identity,
    id: &str,
    transition: Transition,
) -> ApiResult<web::Json<WorkOrderDto>> {
    let id = extract_uuid(id)?;
    let order = sp.work_order_service.transit(id, identity.0, transition).await?;
    Ok(web::Json(order.into()))
}

#[post("work-order/Approve/{id}")]
pub async fn approve_work_order(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
    id: Path<String>,
) -> ApiResult<web::Json<WorkOrderDto>> {
    transit(&sp, identity, &id, Transition::Approve).await
}

#[post("work-order/Reject/{id}")]
pub async fn reject_work_order(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
    id: Path<String>,
    body: web::Json<RejectRequest>,
) -> ApiResult<web::Json<WorkOrderDto>> {
    transit(
        &sp,
        identity,
        &id,
        Transition::Reject {
            reason: body.into_inner().reason,
        },
    )
    .await
}

#[post("work-order/Resubmit/{id}")]
pub async fn resubmit_work_order(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
    id: Path<String>,
) -> ApiResult<web::Json<WorkOrderDto>> {
    transit(&sp, identity, &id, Transition::Resubmit).await
}

#[post("work-order/RequestCompletion/{id}")]
pub async fn request_completion(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
    id: Path<String>,
) -> ApiResult<web::Json<WorkOrderDto>> {
    transit(&sp, identity, &id, Transition::RequestCompletion).await
}

#[post("work-order/ApproveCompletion/{id}")]
pub async fn approve_completion(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
    id: Path<String>,
) -> ApiResult<web::Json<WorkOrderDto>> {
    transit(&sp, identity, &id, Transition::ApproveCompletion).await
}

#[post("work-order/RejectCompletion/{id}")]
pub async fn reject_completion(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
    id: Path<String>,
    body: web::Json<RejectRequest>,
) -> ApiResult<web::Json<WorkOrderDto>> {
    transit(
        &sp,
        identity,
        &id,
        Transition::RejectCompletion {
            reason: body.into_inner().reason,
        },
    )
    .await
}
