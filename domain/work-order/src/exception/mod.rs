use thiserror::Error;
use uuid::Uuid;

use crate::model::entity::work_order::WorkOrderStatus;

pub type WorkOrderResult<T> = Result<T, WorkOrderException>;

#[derive(Error, Debug)]
pub enum WorkOrderException {
    #[error("There is no such {entity} with id: {id}.")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{transition} is not allowed while the work order is {current}.")]
    InvalidTransition {
        transition: &'static str,
        current: WorkOrderStatus,
    },

    #[error("The caller is not allowed to perform {transition} on this work order.")]
    Forbidden { transition: &'static str },

    #[error("Invalid request: {reason}")]
    Validation { reason: String },

    #[error("Work order internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for WorkOrderException {
    fn from(e: anyhow::Error) -> Self {
        WorkOrderException::InternalError { source: e }
    }
}

impl WorkOrderException {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}
