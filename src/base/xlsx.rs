use rust_xlsxwriter::Format;
use rust_xlsxwriter::Workbook;

use crate::base::report::Report;

/// Writes the report as a spreadsheet with one worksheet per sheet.
pub fn write(report: &Report, path: &std::path::Path) -> Result<(), rust_xlsxwriter::XlsxError> {
    let mut workbook = Workbook::new();
    let title_format = Format::new().set_bold();

    for sheet in &report.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;
        for (r, row) in sheet.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if r == 0 {
                    worksheet.write_with_format(r as u32, c as u16, cell.as_str(), &title_format)?;
                } else {
                    worksheet.write(r as u32, c as u16, cell.as_str())?;
                }
            }
        }
        for (c, w) in sheet.widths.iter().enumerate() {
            worksheet.set_column_width(c as u16, f64::from(*w))?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
