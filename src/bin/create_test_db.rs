use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use cashflow::{Expense, initialize_db, insert_expense};

/// A utility for creating a test database for the cashflow server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Expenses spread over a few weeks with amounts in several histogram buckets.
const SAMPLE_EXPENSES: [(&str, f64, &str); 12] = [
    ("Coffee", 4.5, "2025-09-01 08:15:00"),
    ("Bus fare", 3.2, "2025-09-01 17:40:00"),
    ("Groceries", 86.35, "2025-09-03 18:05:00"),
    ("Lunch", 14.0, "2025-09-05 12:30:00"),
    ("Coffee", 5.0, "2025-09-08 08:20:00"),
    ("Power bill", 142.9, "2025-09-10 09:00:00"),
    ("Movie tickets", 32.0, "2025-09-13 19:45:00"),
    ("Groceries", 74.1, "2025-09-17 18:10:00"),
    ("Books", 27.99, "2025-09-20 14:25:00"),
    ("Rent", 450.0, "2025-09-22 10:00:00"),
    ("Dinner out", 58.5, "2025-09-26 20:15:00"),
    ("Coffee", 4.5, "2025-09-29 08:10:00"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating {} sample expenses...", SAMPLE_EXPENSES.len());

    for (item_name, amount, date) in SAMPLE_EXPENSES {
        insert_expense(Expense::build(item_name, amount).date(Some(date)), &conn)?;
    }

    println!("Success!");

    Ok(())
}
