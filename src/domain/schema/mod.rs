use csv::StringRecord;

use super::error::{Error, Result};

pub const ORDER_ID: &str = "ORDER ID";
pub const ITEM_NUMBER: &str = "ITEM NUMBER";
pub const ITEM_QUANTITY: &str = "ITEM QUANTITY";
pub const PRICE_EACH: &str = "PRICE EACH";
pub const TOTAL_PRICE: &str = "TOTAL PRICE";

/// Address columns, present in every export but never carried into the
/// per-order sheets.
pub const GEOGRAPHIC_COLUMNS: [&str; 5] = ["ADDRESS", "CITY", "STATE", "POSTAL CODE", "COUNTRY"];

/// Columns the sales file must carry. Anything else passes through untouched.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    ORDER_ID,
    ITEM_NUMBER,
    ITEM_QUANTITY,
    PRICE_EACH,
    "ADDRESS",
    "CITY",
    "STATE",
    "POSTAL CODE",
    "COUNTRY",
];

/// Column layout of one sales file, resolved once from its header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub item_number: usize,
    pub item_quantity: usize,
    pub price_each: usize,
    /// Input indexes that survive into the output, in input order. The order
    /// identifier and the geographic columns are excluded.
    kept: Vec<usize>,
    /// Kept headers plus the computed total-price column at the end.
    pub output_headers: Vec<String>,
}

impl Schema {
    /// Resolve the header row against [`REQUIRED_COLUMNS`].
    ///
    /// The geographic columns must be present even though they are dropped,
    /// otherwise the input is not the export this program understands.
    pub fn resolve(headers: &StringRecord) -> Result<Self> {
        for name in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == name) {
                return Err(Error::MissingColumn { name });
            }
        }

        let index_of = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(Error::MissingColumn { name })
        };
        let item_number = index_of(ITEM_NUMBER)?;
        let item_quantity = index_of(ITEM_QUANTITY)?;
        let price_each = index_of(PRICE_EACH)?;

        let kept: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, header)| {
                *header != ORDER_ID && !GEOGRAPHIC_COLUMNS.contains(header)
            })
            .map(|(index, _)| index)
            .collect();

        let mut output_headers: Vec<String> = kept
            .iter()
            .map(|&index| headers[index].to_owned())
            .collect();
        output_headers.push(TOTAL_PRICE.to_owned());

        Ok(Schema {
            item_number,
            item_quantity,
            price_each,
            kept,
            output_headers,
        })
    }

    /// Input indexes carried into the output, in input order.
    pub fn kept_columns(&self) -> &[usize] {
        &self.kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_headers() -> StringRecord {
        StringRecord::from(vec![
            "ORDER ID",
            "ORDER DATE",
            "ITEM NUMBER",
            "PRODUCT CODE",
            "ITEM QUANTITY",
            "PRICE EACH",
            "CUSTOMER NAME",
            "ADDRESS",
            "CITY",
            "STATE",
            "POSTAL CODE",
            "COUNTRY",
        ])
    }

    #[test]
    fn resolve_drops_order_id_and_geography() {
        let schema = Schema::resolve(&sample_headers()).unwrap();

        assert_eq!(
            schema.output_headers,
            vec![
                "ORDER DATE",
                "ITEM NUMBER",
                "PRODUCT CODE",
                "ITEM QUANTITY",
                "PRICE EACH",
                "CUSTOMER NAME",
                "TOTAL PRICE",
            ]
        );
        assert_eq!(schema.kept_columns(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(schema.item_number, 2);
        assert_eq!(schema.item_quantity, 4);
        assert_eq!(schema.price_each, 5);
    }

    #[test]
    fn passthrough_columns_keep_their_position() {
        let headers = StringRecord::from(vec![
            "ORDER ID",
            "ITEM NUMBER",
            "ITEM QUANTITY",
            "SKU COLOUR",
            "PRICE EACH",
            "ADDRESS",
            "CITY",
            "STATE",
            "POSTAL CODE",
            "COUNTRY",
        ]);
        let schema = Schema::resolve(&headers).unwrap();

        assert_eq!(
            schema.output_headers,
            vec![
                "ITEM NUMBER",
                "ITEM QUANTITY",
                "SKU COLOUR",
                "PRICE EACH",
                "TOTAL PRICE",
            ]
        );
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let headers = StringRecord::from(vec![
            "ORDER ID",
            "ITEM NUMBER",
            "ITEM QUANTITY",
            "PRICE EACH",
            "ADDRESS",
            "CITY",
            "STATE",
            "POSTAL CODE",
        ]);

        assert_eq!(
            Schema::resolve(&headers),
            Err(Error::MissingColumn { name: "COUNTRY" })
        );
    }
}
