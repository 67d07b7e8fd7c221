use std::io::Read;

use csv::Reader;

use crate::{
    domain::{record::SalesRow, schema::Schema},
    error::Result,
};

/// Parse [`SalesRow`]s from a reader.
///
/// The header row is resolved against the required schema once, then every
/// data row is transformed against it. Malformed CSV or an unparseable
/// numeric cell is an error; there is no point exporting a partial order.
pub fn read(reader: impl Read) -> Result<(Schema, Vec<SalesRow>)> {
    let mut reader = Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let schema = Schema::resolve(&headers)?;

    let mut rows = Vec::new();
    for record in reader.into_records() {
        rows.push(SalesRow::from_record(&schema, &headers, &record?)?);
    }

    Ok((schema, rows))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    const SAMPLE: &str = "\
ORDER ID,ITEM NUMBER,ITEM QUANTITY,PRICE EACH,ADDRESS,CITY,STATE,POSTAL CODE,COUNTRY
A1,102,2,5.00,1 Main St,Springfield,IL,62701,USA
B2,300,4,2.50,9 High Rd,Portland,OR,97035,USA
A1,101,1,3.00,1 Main St,Springfield,IL,62701,USA
";

    #[test]
    fn reads_all_rows_with_totals() {
        let (schema, rows) = read(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            schema.output_headers,
            vec!["ITEM NUMBER", "ITEM QUANTITY", "PRICE EACH", "TOTAL PRICE"]
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].order_id, "A1");
        assert_eq!(rows[0].total_price, dec!(10.00));
        assert_eq!(rows[1].total_price, dec!(10.00));
        assert_eq!(rows[2].total_price, dec!(3.00));
    }

    #[test]
    fn missing_required_column_fails() {
        let input = "ORDER ID,ITEM NUMBER,ITEM QUANTITY\nA1,101,2\n";
        assert!(read(input.as_bytes()).is_err());
    }

    #[test]
    fn malformed_number_reports_column_and_line() {
        let input = SAMPLE.replace("2,5.00", "two,5.00");

        let err = read(input.as_bytes()).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("ITEM QUANTITY"), "{rendered}");
        assert!(rendered.contains("\"two\""), "{rendered}");
        assert!(rendered.contains("line 2"), "{rendered}");
    }
}
