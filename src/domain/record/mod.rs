use csv::StringRecord;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{
    error::{Error, Result},
    schema::{Schema, ITEM_NUMBER, ITEM_QUANTITY, PRICE_EACH},
};

/// Typed view of the fields the pipeline computes with. Deserialized by
/// header name so column positions stay free for passthrough columns.
#[derive(Debug, Deserialize)]
struct TypedFields {
    #[serde(rename = "ORDER ID")]
    order_id: String,
    #[serde(rename = "ITEM NUMBER")]
    item_number: i64,
    #[serde(rename = "ITEM QUANTITY")]
    quantity: Decimal,
    #[serde(rename = "PRICE EACH")]
    price_each: Decimal,
}

/// One sales row, already transformed: the order identifier is kept aside as
/// the grouping key, the geographic columns are gone, and the total price is
/// computed and appended as the last output cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRow {
    pub order_id: String,
    pub item_number: i64,
    pub total_price: Decimal,
    /// Output cells in output-header order, total price last.
    pub cells: Vec<String>,
}

impl SalesRow {
    pub fn from_record(
        schema: &Schema,
        headers: &StringRecord,
        record: &StringRecord,
    ) -> Result<Self> {
        let typed: TypedFields = record
            .deserialize(Some(headers))
            .map_err(|_| invalid_number(schema, record))?;
        let total_price = typed.quantity * typed.price_each;

        let mut cells: Vec<String> = schema
            .kept_columns()
            .iter()
            .map(|&index| record.get(index).unwrap_or_default().to_owned())
            .collect();
        cells.push(total_price.to_string());

        Ok(SalesRow {
            order_id: typed.order_id,
            item_number: typed.item_number,
            total_price,
            cells,
        })
    }
}

/// Pin a failed typed parse to the numeric cell that caused it, so the
/// operator learns the column, line, and value instead of a serde message.
fn invalid_number(schema: &Schema, record: &StringRecord) -> Error {
    let line = record.position().map_or(0, |position| position.line());
    let cell = |index: usize| record.get(index).unwrap_or_default();

    let failures = [
        (
            ITEM_NUMBER,
            schema.item_number,
            cell(schema.item_number).parse::<i64>().is_err(),
        ),
        (
            ITEM_QUANTITY,
            schema.item_quantity,
            cell(schema.item_quantity).parse::<Decimal>().is_err(),
        ),
        (
            PRICE_EACH,
            schema.price_each,
            cell(schema.price_each).parse::<Decimal>().is_err(),
        ),
    ];

    for (column, index, failed) in failures {
        if failed {
            return Error::InvalidNumber {
                column,
                line,
                value: cell(index).to_owned(),
            };
        }
    }

    unreachable!("typed parse only fails on a numeric cell")
}
