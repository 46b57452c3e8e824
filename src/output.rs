use crate::error::{ExportError, ExportResult};
use crate::types::{CoffeeStatistics, MonthlyRecord, QualityGrade, RegionalShare, RiskFactor};
use rust_xlsxwriter::{Workbook, XlsxError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

pub const JSON_FILE: &str = "coffee_statistics.json";
pub const MONTHLY_CSV_FILE: &str = "monthly_production_2024.csv";
pub const REGIONAL_CSV_FILE: &str = "regional_distribution.csv";
pub const WORKBOOK_FILE: &str = "coffee_statistics_complete.xlsx";

pub const SHEET_MONTHLY: &str = "Producción Mensual";
pub const SHEET_REGIONAL: &str = "Distribución Regional";
pub const SHEET_QUALITY: &str = "Clasificación Calidad";
pub const SHEET_RISK: &str = "Factores de Riesgo";

/// Locations of the four artifacts produced by one export.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub monthly_csv: PathBuf,
    pub regional_csv: PathBuf,
    pub workbook: PathBuf,
}

impl ExportPaths {
    pub fn in_dir(dir: &Path) -> Self {
        ExportPaths {
            json: dir.join(JSON_FILE),
            monthly_csv: dir.join(MONTHLY_CSV_FILE),
            regional_csv: dir.join(REGIONAL_CSV_FILE),
            workbook: dir.join(WORKBOOK_FILE),
        }
    }
}

/// A single spreadsheet cell. Strings become text cells, everything else a
/// numeric cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

/// A record that renders as one worksheet row.
///
/// `HEADERS` must list the same names, in the same order, as the record's
/// serde fields so the sheets and the CSV files agree.
pub trait SheetRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell<'_>>;
}

impl SheetRow for MonthlyRecord {
    const HEADERS: &'static [&'static str] = &[
        "month",
        "month_short",
        "production",
        "exports",
        "price_usd_lb",
        "quality_premium",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Text(&self.month),
            Cell::Text(&self.month_short),
            Cell::Number(f64::from(self.production)),
            Cell::Number(f64::from(self.exports)),
            Cell::Number(self.price_usd_lb),
            Cell::Number(self.quality_premium),
        ]
    }
}

impl SheetRow for RegionalShare {
    const HEADERS: &'static [&'static str] = &["name", "percentage", "quality_score"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Text(&self.name),
            Cell::Number(self.percentage),
            Cell::Number(f64::from(self.quality_score)),
        ]
    }
}

impl SheetRow for QualityGrade {
    const HEADERS: &'static [&'static str] = &["grade", "percentage", "price_premium"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Text(&self.grade),
            Cell::Number(f64::from(self.percentage)),
            Cell::Number(f64::from(self.price_premium)),
        ]
    }
}

impl SheetRow for RiskFactor {
    const HEADERS: &'static [&'static str] = &["factor", "impact_level", "probability"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Text(&self.factor),
            Cell::Text(&self.impact_level),
            Cell::Number(self.probability),
        ]
    }
}

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> ExportResult<()> {
    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;
    for r in rows {
        wtr.serialize(r).map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = rows.len(), "wrote csv");
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> ExportResult<()> {
    let s = serde_json::to_string_pretty(value).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, s).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote json");
    Ok(())
}

fn add_sheet<T: SheetRow>(workbook: &mut Workbook, name: &str, rows: &[T]) -> Result<(), XlsxError> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;

    for (col, header) in T::HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col_idx, cell) in row.cells().into_iter().enumerate() {
            match cell {
                Cell::Text(text) => worksheet.write_string(excel_row, col_idx as u16, text)?,
                Cell::Number(num) => worksheet.write_number(excel_row, col_idx as u16, num)?,
            };
        }
    }
    Ok(())
}

/// Monthly, regional, quality and risk sections, one sheet each, in that order.
pub fn build_workbook(stats: &CoffeeStatistics) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    add_sheet(&mut workbook, SHEET_MONTHLY, &stats.monthly_data_2024)?;
    add_sheet(&mut workbook, SHEET_REGIONAL, &stats.regional_distribution)?;
    add_sheet(&mut workbook, SHEET_QUALITY, &stats.quality_classification)?;
    add_sheet(&mut workbook, SHEET_RISK, &stats.risk_factors)?;
    Ok(workbook)
}

pub fn write_workbook(path: &Path, stats: &CoffeeStatistics) -> ExportResult<()> {
    let xlsx_err = |source| ExportError::Xlsx {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = build_workbook(stats).map_err(xlsx_err)?;
    workbook.save(path).map_err(xlsx_err)?;
    info!(path = %path.display(), sheets = 4, "wrote workbook");
    Ok(())
}

/// Write all four artifacts into `dir`, replacing any previous run.
///
/// The directory is created when missing. Writes are independent, so a
/// failure part-way leaves the earlier files in place.
pub fn export_to_formats(stats: &CoffeeStatistics, dir: &Path) -> ExportResult<ExportPaths> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let paths = ExportPaths::in_dir(dir);

    write_json(&paths.json, stats)?;
    write_csv(&paths.monthly_csv, &stats.monthly_data_2024)?;
    write_csv(&paths.regional_csv, &stats.regional_distribution)?;
    write_workbook(&paths.workbook, stats)?;
    Ok(paths)
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
