// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of the per-staff premium breakdown.

use csv::WriterBuilder;
use premia_domain::StaffPremiumSummary;
use serde::Serialize;

/// Errors raised while rendering a CSV report.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Flushing the output buffer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The rendered report was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 8] = [
    "staff_id",
    "display_name",
    "registration_count",
    "publication_count",
    "collection_count",
    "pub_milestone_bonus",
    "collection_milestone_bonus",
    "total_premium",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    staff_id: &'a str,
    display_name: &'a str,
    registration_count: u32,
    publication_count: u32,
    collection_count: u32,
    pub_milestone_bonus: String,
    collection_milestone_bonus: String,
    total_premium: String,
}

/// Renders per-staff premium rows as CSV.
///
/// The header row is always written, even when there are no rows.
///
/// # Errors
///
/// Returns an error if a row cannot be written.
pub fn render_staff_csv(rows: &[StaffPremiumSummary]) -> Result<String, ExportError> {
    let mut writer: csv::Writer<Vec<u8>> = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.serialize(CsvRow {
            staff_id: row.staff_id.value(),
            display_name: &row.display_name,
            registration_count: row.registration_count,
            publication_count: row.publication_count,
            collection_count: row.collection_count,
            pub_milestone_bonus: row.pub_milestone_bonus.to_string(),
            collection_milestone_bonus: row.collection_milestone_bonus.to_string(),
            total_premium: row.total_premium.to_string(),
        })?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
