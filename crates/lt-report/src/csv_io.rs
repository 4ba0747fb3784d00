//! Delimited file reading and atomic writing.

use std::path::Path;

use tempfile::NamedTempFile;

use crate::driver::Row;
use crate::error::ReportError;

/// Read every record of `path` into memory, header included.
///
/// Records may have different field counts; short or long rows are passed
/// through as they are. A blank line is kept as a row with no fields, so
/// row numbers line up with the file and the row survives into the report.
/// A leading UTF-8 byte order mark is dropped.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be read as UTF-8 text,
/// [`ReportError::Csv`] if a record cannot be parsed, and
/// [`ReportError::EmptyInput`] if it contains no records at all.
pub fn read_rows(path: &Path, delimiter: u8) -> Result<Vec<Row>, ReportError> {
    let content = std::fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut rows = Vec::new();
    for line in record_lines(content) {
        let parsed = parse_records(line, delimiter)?;
        if parsed.is_empty() {
            rows.push(Row::new());
        } else {
            rows.extend(parsed);
        }
    }

    if rows.is_empty() {
        return Err(ReportError::EmptyInput(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), rows = rows.len(), "input read");
    Ok(rows)
}

/// Split `content` at newlines that sit outside quoted fields.
///
/// The text after a final newline is not a line of its own.
fn record_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    for (at, byte) in content.bytes().enumerate() {
        match byte {
            b'"' => quoted = !quoted,
            b'\n' if !quoted => {
                lines.push(&content[start..at]);
                start = at + 1;
            }
            _ => {}
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Parse one line with the CSV codec. A blank line yields no records.
fn parse_records(line: &str, delimiter: u8) -> Result<Vec<Row>, ReportError> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(line.as_bytes())
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect::<Row>())
                .map_err(ReportError::from)
        })
        .collect()
}

/// Write `rows` to `path`, replacing any existing file in one step.
///
/// Rows go to a temp file in the destination directory first, which is then
/// persisted over `path`, so readers never observe a half-written report.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the temp file cannot be created or
/// persisted, and [`ReportError::Csv`] if a record cannot be encoded.
pub fn write_rows(path: &Path, rows: &[Row], delimiter: u8) -> Result<(), ReportError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let tmp = NamedTempFile::new_in(dir)?;

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .delimiter(delimiter)
        .terminator(csv::Terminator::CRLF)
        .from_writer(tmp);
    for row in rows {
        writer.write_record(row)?;
    }
    let tmp = writer
        .into_inner()
        .map_err(|e| ReportError::Io(e.into_error()))?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "report written");
    Ok(())
}
