use std::io::Read;

use actix_easy_multipart::MultipartForm;
use actix_web::web::{self, Path};
use actix_web::post;
use domain_work_order::exception::WorkOrderException;

use crate::api::auth::Identity;
use crate::api::dtos::{UploadReferenceDocumentRequest, WorkOrderDto};
use crate::api::{extract_uuid, ApiResult, AppError};
use crate::infrastructure::ServiceProvider;

#[post("work-order/UploadReferenceDocument/{id}")]
pub async fn upload_reference_document(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    id: Path<String>,
    form: MultipartForm<UploadReferenceDocumentRequest>,
) -> ApiResult<web::Json<WorkOrderDto>> {
    let id = extract_uuid(&id)?;
    let form = form.into_inner();

    let file_name = form
        .file
        .file_name
        .clone()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("uploaded file has no name".to_string()))?;

    let mut content = Vec::new();
    let mut file = form.file.file.as_file();
    file.read_to_end(&mut content).map_err(|e| {
        AppError::WorkOrder(WorkOrderException::InternalError {
            source: anyhow::Error::new(e),
        })
    })?;

    let order = sp.document_service.upload(id, &file_name, content).await?;
    Ok(web::Json(order.into()))
}

#[post("work-order/DeleteReferenceDocument/{id}")]
pub async fn delete_reference_document(
    sp: web::Data<ServiceProvider>,
    _identity: Identity,
    id: Path<String>,
) -> ApiResult<web::Json<WorkOrderDto>> {
    let id = extract_uuid(&id)?;
    let order = sp.document_service.remove(id).await?;
    Ok(web::Json(order.into()))
}
