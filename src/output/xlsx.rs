//! Spreadsheet writer

use std::path::Path;

use rust_xlsxwriter::{
    ColNum,
    RowNum,
    Workbook,
    Worksheet,
    XlsxError,
};
use serde_json::Value;
use thiserror::Error;

use crate::ir::{
    KEY_COLUMN,
    OutputTable,
};

/// Rows per worksheet, header included.
const MAX_ROWS: usize = 1_048_576;

/// Columns per worksheet.
const MAX_COLUMNS: usize = 16_384;

/// Characters Excel keeps in one cell.
const MAX_CELL_CHARS: usize = 32_767;

/// Leading characters of a key shown in truncation warnings.
const KEY_PREVIEW_CHARS: usize = 40;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Xlsx(#[from] XlsxError),

    #[error("{0} rows do not fit in a worksheet (limit 1048576)")]
    TooManyRows(usize),

    #[error("{0} columns do not fit in a worksheet (limit 16384)")]
    TooManyColumns(usize),
}

/// Write `table` to a new workbook at `path` with a single sheet named `sheet_name`.
///
/// The header row holds [`OutputTable::columns`]; each following row holds a
/// key and its translations. An existing file at `path` is replaced.
/// Text longer than [`MAX_CELL_CHARS`] is cut to that length with a warning.
///
/// # Errors
/// Returns error if the table exceeds the worksheet limits, the sheet name is
/// rejected, or the file cannot be written.
pub fn write_workbook(
    table: &OutputTable,
    path: &Path,
    sheet_name: &str,
) -> Result<(), WriteError> {
    let columns = table.columns();
    let row_count = table.rows().len() + 1;
    if row_count > MAX_ROWS {
        return Err(WriteError::TooManyRows(row_count));
    }
    if columns.len() > MAX_COLUMNS {
        return Err(WriteError::TooManyColumns(columns.len()));
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, &header) in columns.iter().enumerate() {
        let header = fit_cell_text(header, CellOrigin { key: "(header)", column: header });
        worksheet.write_string(0, to_col_num(col)?, header)?;
    }

    for (index, row) in table.rows().iter().enumerate() {
        let row_num = to_row_num(index + 1)?;
        let key = fit_cell_text(&row.key, CellOrigin { key: &row.key, column: KEY_COLUMN });
        worksheet.write_string(row_num, 0, key)?;
        for (offset, (value, locale)) in row.cells.iter().zip(table.locales()).enumerate() {
            let origin = CellOrigin { key: &row.key, column: locale };
            write_cell(worksheet, row_num, to_col_num(offset + 1)?, value, origin)?;
        }
    }

    tracing::debug!(
        path = %path.display(),
        rows = row_count,
        columns = columns.len(),
        "Saving workbook"
    );
    workbook.save(path)?;

    Ok(())
}

/// Row key and column header of a cell, for log messages.
#[derive(Debug, Clone, Copy)]
struct CellOrigin<'a> {
    /// Translation key of the row.
    key: &'a str,
    /// Header of the column.
    column: &'a str,
}

/// Writes one translation value.
///
/// Strings, numbers and booleans keep their cell type. `null` leaves the cell
/// blank; arrays and objects are written as compact JSON.
fn write_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: &Value,
    origin: CellOrigin<'_>,
) -> Result<(), XlsxError> {
    match value {
        Value::Null => {}
        Value::Bool(flag) => {
            worksheet.write_boolean(row, col, *flag)?;
        }
        Value::Number(number) => {
            if let Some(number) = number.as_f64() {
                worksheet.write_number(row, col, number)?;
            } else {
                worksheet.write_string(row, col, number.to_string())?;
            }
        }
        Value::String(text) => {
            worksheet.write_string(row, col, fit_cell_text(text, origin))?;
        }
        Value::Array(_) | Value::Object(_) => {
            let json = value.to_string();
            worksheet.write_string(row, col, fit_cell_text(&json, origin))?;
        }
    }
    Ok(())
}

/// Cuts `text` to [`MAX_CELL_CHARS`] characters, on a character boundary.
fn fit_cell_text<'a>(text: &'a str, origin: CellOrigin<'_>) -> &'a str {
    let Some((end, _)) = text.char_indices().nth(MAX_CELL_CHARS) else {
        return text;
    };

    let key: String = origin.key.chars().take(KEY_PREVIEW_CHARS).collect();
    tracing::warn!(
        key = %key,
        column = %origin.column,
        length = text.chars().count(),
        "Cell text exceeds 32767 characters and was truncated"
    );
    text.get(..end).unwrap_or(text)
}

/// Converts a table row index to a worksheet row number.
fn to_row_num(index: usize) -> Result<RowNum, WriteError> {
    RowNum::try_from(index).map_err(|_| WriteError::TooManyRows(index))
}

/// Converts a table column index to a worksheet column number.
fn to_col_num(index: usize) -> Result<ColNum, WriteError> {
    ColNum::try_from(index).map_err(|_| WriteError::TooManyColumns(index))
}
