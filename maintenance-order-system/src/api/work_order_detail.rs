use actix_web::web::{self, Path};
use actix_web::{get, post, HttpResponse};
use domain_work_order::model::entity::{Action, Finding, SparePart, Technician};
use domain_work_order::model::vo::{ActionDraft, FindingDraft, SparePartDraft};

use crate::api::auth::Identity;
use crate::api::{extract_uuid, ApiResult};
use crate::infrastructure::ServiceProvider;

#[post("work-order/AddFinding/{id}")]
pub async fn add_finding(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    id: Path<String>,
    draft: web::Json<FindingDraft>,
) -> ApiResult<web::Json<Finding>> {
    let id = extract_uuid(&id)?;
    Ok(web::Json(sp.detail_service.add_finding(id, draft.into_inner()).await?))
}

#[get("work-order/Findings/{id}")]
pub async fn list_findings(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    id: Path<String>,
) -> ApiResult<web::Json<Vec<Finding>>> {
    let id = extract_uuid(&id)?;
    Ok(web::Json(sp.detail_service.findings(id).await?))
}

#[post("work-order/DeleteFinding/{finding_id}")]
pub async fn delete_finding(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    finding_id: Path<String>,
) -> ApiResult<HttpResponse> {
    let finding_id = extract_uuid(&finding_id)?;
    sp.detail_service.remove_finding(finding_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("work-order/AddAction/{id}")]
pub async fn add_action(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    id: Path<String>,
    draft: web::Json<ActionDraft>,
) -> ApiResult<web::Json<Action>> {
    let id = extract_uuid(&id)?;
    Ok(web::Json(sp.detail_service.add_action(id, draft.into_inner()).await?))
}

#[get("work-order/Actions/{id}")]
pub async fn list_actions(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    id: Path<String>,
) -> ApiResult<web::Json<Vec<Action>>> {
    let id = extract_uuid(&id)?;
    Ok(web::Json(sp.detail_service.actions(id).await?))
}

#[post("work-order/DeleteAction/{action_id}")]
pub async fn delete_action(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    action_id: Path<String>,
) -> ApiResult<HttpResponse> {
    let action_id = extract_uuid(&action_id)?;
    sp.detail_service.remove_action(action_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("work-order/AddSparePart/{id}")]
pub async fn add_spare_part(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    id: Path<String>,
    draft: web::Json<SparePartDraft>,
) -> ApiResult<web::Json<SparePart>> {
    let id = extract_uuid(&id)?;
    Ok(web::Json(sp.detail_service.add_spare_part(id, draft.into_inner()).await?))
}

#[get("work-order/SpareParts/{id}")]
pub async fn list_spare_parts(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    id: Path<String>,
) -> ApiResult<web::Json<Vec<SparePart>>> {
    let id = extract_uuid(&id)?;
    Ok(web::Json(sp.detail_service.spare_parts(id).await?))
}

#[post("work-order/DeleteSparePart/{spare_part_id}")]
pub async fn delete_spare_part(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    spare_part_id: Path<String>,
) -> ApiResult<HttpResponse> {
    let spare_part_id = extract_uuid(&spare_part_id)?;
    sp.detail_service.remove_spare_part(spare_part_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("work-order/AssignTechnician/{action_id}/{technician_id}")]
pub async fn assign_technician(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    path: Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (action_id, technician_id) = path.into_inner();
    let action_id = extract_uuid(&action_id)?;
    let technician_id = extract_uuid(&technician_id)?;
    sp.detail_service.assign_technician(action_id, technician_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("work-order/UnassignTechnician/{action_id}/{technician_id}")]
pub async fn unassign_technician(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    path: Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (action_id, technician_id) = path.into_inner();
    let action_id = extract_uuid(&action_id)?;
    let technician_id = extract_uuid(&technician_id)?;
    sp.detail_service.unassign_technician(action_id, technician_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("work-order/Technicians/{id}")]
pub async fn list_technicians(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    id: Path<String>,
) -> ApiResult<web::Json<Vec<Technician>>> {
    let id = extract_uuid(&id)?;
    Ok(web::Json(sp.detail_service.technicians(id).await?))
}
