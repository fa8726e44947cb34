// src/export/logic.rs

use crate::core::aggregate::record_day;
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::RecordExport;
use crate::export::range::parse_range;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::record::DailyRecord;
use crate::utils::date::in_range;
use crate::utils::path::expand_tilde;
use chrono::{NaiveDate, TimeZone};
use std::path::Path;

/// High-level export of the stored records.
pub struct ExportLogic;

impl ExportLogic {
    /// Rows for the records whose calendar day (in `tz`) is inside `range`.
    /// `None` or `"all"` selects everything. Newest first, as stored.
    pub fn select<Tz: TimeZone>(
        records: &[DailyRecord],
        range: Option<&str>,
        tz: &Tz,
    ) -> AppResult<Vec<RecordExport>> {
        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        Ok(records
            .iter()
            .filter(|r| in_range(record_day(r, tz), bounds))
            .map(RecordExport::from)
            .collect())
    }

    /// Write `rows` to `file` in the requested format.
    ///
    /// - `file` must be absolute (`~/` is expanded)
    /// - an existing file is overwritten only with `force` or after confirmation
    pub fn write(
        rows: &[RecordExport],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let expanded = expand_tilde(file);
        let path = Path::new(&expanded);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => write_csv(path, rows)?,
            ExportFormat::Json => write_json(path, rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), rows.len(), path);
        Ok(())
    }
}
