use actix_http::header;
use actix_web::{get, web, HttpResponse};
use domain_reporting::model::ReportRange;
use domain_work_order::model::vo::Role;

use crate::api::auth::Identity;
use crate::api::dtos::{ReportFormat, ReportQuery};
use crate::api::{ApiResult, AppError};
use crate::infrastructure::ServiceProvider;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn admin_range(identity: &Identity, query: &ReportQuery) -> ApiResult<ReportRange> {
    if identity.0.role < Role::Admin {
        return Err(AppError::Forbidden("generate reports"));
    }
    Ok(ReportRange::new(query.from, query.to).map_err(AppError::Report)?)
}

fn xlsx_response(file_stem: &str, range: &ReportRange, bytes: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, XLSX_CONTENT_TYPE))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{file_stem}-{}-{}.xlsx\"",
                range.from, range.to
            ),
        ))
        .body(bytes)
}

#[get("report/Progress")]
pub async fn progress_report(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
    query: web::Query<ReportQuery>,
) -> ApiResult<HttpResponse> {
    let range = admin_range(&identity, &query)?;
    match query.format {
        ReportFormat::Json => {
            let report = sp.progress_report_service.build(range).await?;
            Ok(HttpResponse::Ok().json(report))
        }
        ReportFormat::Xlsx => {
            let bytes = sp.progress_report_service.render_xlsx(range).await?;
            Ok(xlsx_response("progress-report", &range, bytes))
        }
    }
}

#[get("report/TechnicianPerformance")]
pub async fn technician_performance_report(
    sp: web::Data<ServiceProvider>,
    identity: Identity,
    query: web::Query<ReportQuery>,
) -> ApiResult<HttpResponse> {
    let range = admin_range(&identity, &query)?;
    match query.format {
        ReportFormat::Json => {
            let report = sp.technician_report_service.build(range).await?;
            Ok(HttpResponse::Ok().json(report))
        }
        ReportFormat::Xlsx => {
            let bytes = sp.technician_report_service.render_xlsx(range).await?;
            Ok(xlsx_response("technician-performance", &range, bytes))
        }
    }
}
