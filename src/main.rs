use std::{
    env,
    fs::File,
    path::{Path, PathBuf},
    process,
};

use chrono::{Local, NaiveDate};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod csv;
mod domain;
mod error;
mod output;
mod xlsx;

use domain::order::Order;
use error::Result;

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries only the two result paths; logs go to stderr.
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let sales_csv = get_sales_csv();

    match run(&sales_csv, Local::now().date_naive()) {
        Ok(orders_dir) => {
            println!("{}", sales_csv.display());
            println!("{}", orders_dir.display());
        }
        Err(e) => {
            eprintln!("an error occurred: {e:#?}");
            process::exit(1);
        }
    }
}

/// Validate the single positional argument: it must be present and name an
/// existing file. Usage errors terminate here with status 1.
fn get_sales_csv() -> PathBuf {
    let Some(arg) = env::args_os().nth(1) else {
        eprintln!("Error: missing sales CSV file path");
        process::exit(1);
    };

    let sales_csv = PathBuf::from(arg);
    if !sales_csv.is_file() {
        eprintln!("Error: invalid sales CSV file path");
        process::exit(1);
    }

    sales_csv
}

/// The whole pipeline: load, group, provision the dated directory, export
/// one workbook per order. Returns the orders directory for printing.
///
/// `today` names the directory; it is a parameter so tests can fix it.
fn run(sales_csv: &Path, today: NaiveDate) -> Result<PathBuf> {
    let file = File::open(sales_csv)?;
    let (schema, rows) = csv::read(file)?;
    info!(rows = rows.len(), "loaded sales file");

    let orders_dir = output::orders_dir(sales_csv, today)?;
    let orders = Order::group(rows);
    info!(
        orders = orders.len(),
        dir = %orders_dir.display(),
        "exporting orders"
    );

    for order in &orders {
        let path = orders_dir.join(format!("{}.xlsx", order.id));
        xlsx::write_order(order, &schema.output_headers, &path)?;
        info!(order = %order.id, "wrote workbook");
    }

    Ok(orders_dir)
}
