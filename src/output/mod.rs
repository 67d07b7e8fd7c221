use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

/// Provision the dated orders directory next to the sales file.
///
/// The directory is `Orders_<YYYY-MM-DD>` inside the sales file's own
/// directory. Creation is idempotent: a same-day rerun reuses the directory
/// and overwrites same-named workbooks, a later day gets a fresh one. The
/// date is passed in rather than read here so callers can fix it.
pub fn orders_dir(sales_csv: &Path, date: NaiveDate) -> io::Result<PathBuf> {
    let sales_csv = sales_csv.canonicalize()?;
    let parent = sales_csv.parent().unwrap_or_else(|| Path::new("/"));

    let dir = parent.join(format!("Orders_{date}"));
    fs::create_dir_all(&dir)?;

    Ok(dir)
}
