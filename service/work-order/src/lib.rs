mod detail;
mod document;
mod lifecycle;
mod notification;

#[rustfmt::skip]
pub use {
    detail::WorkOrderDetailServiceImpl,
    document::ReferenceDocumentServiceImpl,
    lifecycle::WorkOrderServiceImpl,
    notification::NotificationServiceImpl,
};
