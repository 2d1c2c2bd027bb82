pub mod draft;
pub mod query;
pub mod transition;

#[rustfmt::skip]
pub use {
    draft::{ActionDraft, FindingDraft, SparePartDraft, WorkOrderDraft},
    query::{Page, SortOrder, WorkOrderFilter},
    transition::{Actor, Role, Transition},
};
