use crate::errors::AppResult;
use crate::export::model::RecordExport;
use std::path::Path;

/// Write the rows as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, rows: &[RecordExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
