use std::str::FromStr;

use actix_http::StatusCode;
use actix_web::HttpResponse;
use domain_reporting::exception::ReportException;
use domain_work_order::exception::WorkOrderException;
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

pub mod auth;
pub mod document;
pub mod dtos;
pub mod notification;
pub mod report;
pub mod work_order;
pub mod work_order_detail;

pub(crate) type ApiResult<T> = Result<T, AppError>;

pub(crate) fn extract_uuid(s: &str) -> ApiResult<Uuid> {
    Uuid::from_str(s)
        .map_err(|e| AppError::BadRequest(format!(r#"error when parse uuid from "{s}": {e}"#)))
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    WorkOrder(#[from] WorkOrderException),

    #[error(transparent)]
    Report(#[from] ReportException),

    #[error("{0}")]
    BadRequest(String),

    #[error("The caller is not allowed to {0}.")]
    Forbidden(&'static str),

    #[error("Missing or malformed identity headers.")]
    Unauthorized,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::WorkOrder(e) => match e {
                WorkOrderException::NotFound { .. } => StatusCode::NOT_FOUND,
                WorkOrderException::InvalidTransition { .. } => StatusCode::CONFLICT,
                WorkOrderException::Forbidden { .. } => StatusCode::FORBIDDEN,
                WorkOrderException::Validation { .. } => StatusCode::BAD_REQUEST,
                WorkOrderException::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Report(e) => match e {
                ReportException::InvalidRange { .. } => StatusCode::BAD_REQUEST,
                ReportException::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Internal detail stays in the log, never in the response body.
        if status.is_server_error() {
            error!(error = ?self, "request failed with internal error");
            return HttpResponse::build(status).json(ErrorBody {
                message: "internal server error".to_string(),
            });
        }
        HttpResponse::build(status).json(ErrorBody {
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use domain_work_order::model::entity::work_order::WorkOrderStatus;

    use super::*;

    #[test]
    fn exceptions_map_to_distinguishable_status_codes() {
        let not_found = AppError::WorkOrder(WorkOrderException::NotFound {
            entity: "work order",
            id: Uuid::new_v4(),
        });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict = AppError::WorkOrder(WorkOrderException::InvalidTransition {
            transition: "approve",
            current: WorkOrderStatus::Ongoing,
        });
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let forbidden = AppError::WorkOrder(WorkOrderException::Forbidden {
            transition: "approve-completion",
        });
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

        let internal = AppError::WorkOrder(WorkOrderException::InternalError {
            source: anyhow::anyhow!("connection refused"),
        });
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
