use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::entity::work_order::WorkOrderStatus;

/// Optional predicates for listing work orders. Absent fields place no
/// constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkOrderFilter {
    pub status: Option<WorkOrderStatus>,
    /// Matched against order number, equipment id, and description.
    pub search: Option<String>,
    pub order_date_from: Option<NaiveDate>,
    pub order_date_to: Option<NaiveDate>,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    OrderDateAsc,
    #[default]
    OrderDateDesc,
}

/// One page of results together with the unpaged total.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}
