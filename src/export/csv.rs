use crate::errors::AppResult;
use crate::export::model::{RecordExport, get_headers};
use csv::Writer;
use std::path::Path;

fn opt(v: Option<f64>) -> String {
    v.map(|x| format!("{:.2}", x)).unwrap_or_default()
}

/// Write the rows as CSV, amounts with two decimals.
pub(crate) fn write_csv(path: &Path, rows: &[RecordExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for r in rows {
        wtr.write_record(&[
            r.id.clone(),
            r.date.clone(),
            format!("{:.2}", r.revenue),
            format!("{:.2}", r.fuel),
            r.fuel_type.clone(),
            opt(r.kilometers),
            opt(r.fuel_efficiency),
            format!("{:.2}", r.variable_costs),
            format!("{:.2}", r.net_profit),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
