use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::domain::order::Order;

const SHEET_NAME: &str = "Sheet1";
const GRAND_TOTAL_LABEL: &str = "GRAND TOTAL";
const COLUMN_WIDTH: f64 = 15.0;

/// Write one order to its own workbook: a header row, the order's rows
/// sorted by item number, and a closing grand-total row. No index column.
///
/// Every column present gets the fixed width, not a hard-coded count, so
/// passthrough columns are covered too.
pub fn write_order(order: &Order, headers: &[String], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, header)?;
    }

    for (offset, row) in order.rows.iter().enumerate() {
        for (col, cell) in row.cells.iter().enumerate() {
            write_cell(sheet, (offset + 1) as u32, col as u16, cell)?;
        }
    }

    let summary_row = (order.rows.len() + 1) as u32;
    let last_col = headers.len().saturating_sub(1) as u16;
    let grand_total = order
        .grand_total
        .to_f64()
        .expect("every Decimal is representable as f64");
    sheet.write_string(summary_row, 0, GRAND_TOTAL_LABEL)?;
    sheet.write_number(summary_row, last_col, grand_total)?;

    for col in 0..headers.len() as u16 {
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    workbook.save(path)?;
    Ok(())
}

// Numeric-looking cells become spreadsheet numbers, everything else text.
fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &str) -> Result<(), XlsxError> {
    match cell.parse::<f64>() {
        Ok(number) => sheet.write_number(row, col, number)?,
        Err(_) => sheet.write_string(row, col, cell)?,
    };
    Ok(())
}
