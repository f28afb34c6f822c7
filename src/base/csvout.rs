use crate::base::report::Report;

/// Writes the report as one CSV file per sheet under `dir`, returning the
/// created paths. Rows are padded so every record has the sheet's full
/// column count.
pub fn write(report: &Report, dir: &std::path::Path) -> csv::Result<Vec<std::path::PathBuf>> {
    let mut paths = Vec::with_capacity(report.sheets.len());
    for sheet in &report.sheets {
        let columns = sheet.rows.iter().map(Vec::len).max().unwrap_or(0);
        let path = dir.join(format!("{}.csv", sheet.name));
        let mut wtr = csv::Writer::from_path(&path)?;
        for row in &sheet.rows {
            let padding = columns - row.len();
            let record = row
                .iter()
                .map(String::as_str)
                .chain(std::iter::repeat_n("", padding));
            wtr.write_record(record)?;
        }
        wtr.flush()?;
        paths.push(path);
    }
    Ok(paths)
}
