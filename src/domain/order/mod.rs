use itertools::Itertools;
use rust_decimal::Decimal;

use super::record::SalesRow;

/// All sales rows sharing one order identifier, ready for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    /// Rows sorted ascending by item number.
    pub rows: Vec<SalesRow>,
    pub grand_total: Decimal,
}

impl Order {
    /// Partition rows by order identifier.
    ///
    /// Iteration order across orders is unspecified; each order owns its rows
    /// independently of the others.
    pub fn group(rows: impl IntoIterator<Item = SalesRow>) -> Vec<Self> {
        rows.into_iter()
            .into_group_map_by(|row| row.order_id.clone())
            .into_iter()
            .map(|(id, rows)| Self::from_rows(id, rows))
            .collect()
    }

    fn from_rows(id: String, mut rows: Vec<SalesRow>) -> Self {
        rows.sort_by_key(|row| row.item_number);
        let grand_total = rows.iter().map(|row| row.total_price).sum();

        Order {
            id,
            rows,
            grand_total,
        }
    }
}
