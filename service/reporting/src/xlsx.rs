use domain_reporting::model::{ProgressReport, TechnicianPerformanceReport};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

pub(crate) fn render_progress(report: &ProgressReport) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Progress")?;

    let bold = Format::new().set_bold();
    sheet.write_string_with_format(
        0,
        0,
        format!("Progress report {} to {}", report.range.from, report.range.to),
        &bold,
    )?;
    for (col, header) in ["Category", "Ongoing", "Ongoing orders", "Completed", "Completed orders"]
        .into_iter()
        .enumerate()
    {
        sheet.write_string_with_format(1, col as u16, header, &bold)?;
    }

    for (i, row) in report.rows.iter().enumerate() {
        let r = i as u32 + 2;
        sheet.write_string(r, 0, row.bucket.label())?;
        sheet.write_number(r, 1, row.ongoing_count as f64)?;
        sheet.write_string(r, 2, row.ongoing_orders.join(", "))?;
        sheet.write_number(r, 3, row.completed_count as f64)?;
        sheet.write_string(r, 4, row.completed_orders.join(", "))?;
    }
    sheet.set_column_width(0, 24)?;
    sheet.set_column_width(2, 40)?;
    sheet.set_column_width(4, 40)?;

    workbook.save_to_buffer()
}

pub(crate) fn render_technician(report: &TechnicianPerformanceReport) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Technician performance")?;

    let bold = Format::new().set_bold();
    sheet.write_string_with_format(
        0,
        0,
        format!(
            "Technician performance {} to {}",
            report.range.from, report.range.to
        ),
        &bold,
    )?;
    for (col, header) in ["Staff no", "Name", "Actions worked", "Actions completed", "Total minutes"]
        .into_iter()
        .enumerate()
    {
        sheet.write_string_with_format(1, col as u16, header, &bold)?;
    }

    for (i, row) in report.rows.iter().enumerate() {
        let r = i as u32 + 2;
        sheet.write_string(r, 0, row.staff_no.as_str())?;
        sheet.write_string(r, 1, row.name.as_str())?;
        sheet.write_number(r, 2, row.actions_worked as f64)?;
        sheet.write_number(r, 3, row.actions_completed as f64)?;
        sheet.write_number(r, 4, row.total_minutes as f64)?;
    }
    sheet.set_column_width(1, 28)?;

    workbook.save_to_buffer()
}
