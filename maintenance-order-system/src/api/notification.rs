use actix_web::web::{self, Path};
use actix_web::{get, post, HttpResponse};

use crate::api::auth::Identity;
use crate::api::dtos::NotificationDto;
use crate::api::{extract_uuid, ApiResult};
use crate::infrastructure::ServiceProvider;

#[get("notification/List")]
pub async fn list_notifications(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
) -> ApiResult<web::Json<Vec<NotificationDto>>> {
    let notifications = sp.notification_service.list_for(identity.0.id).await?;
    Ok(web::Json(notifications.into_iter().map(Into::into).collect()))
}

#[post("notification/MarkRead/{id}")]
pub async fn mark_notification_read(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
    id: Path<String>,
) -> ApiResult<HttpResponse> {
    let id = extract_uuid(&id)?;
    sp.notification_service.mark_read(id, identity.0.id).await?;
    Ok(HttpResponse::NoContent().finish())
}
