use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use rust_decimal::Decimal;
use time::{Date, Duration, OffsetDateTime};

use expense_tracker::{Amount, Category, Expense, ExpenseStore, SQLiteExpenseStore, initialize_db};

/// A utility for creating a test database for the expense_tracker web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Sample expenses as (days ago, amount in cents, category, description).
const SAMPLE_EXPENSES: [(i64, i64, Category, &str); 12] = [
    (0, 1250, Category::FoodAndDining, "Lunch"),
    (2, 4599, Category::Transportation, "Fuel"),
    (5, 8900, Category::Shopping, "Running shoes"),
    (9, 1599, Category::Entertainment, "Streaming subscription"),
    (14, 12000, Category::BillsAndUtilities, "Power bill"),
    (21, 3500, Category::Health, "Pharmacy"),
    (33, 24999, Category::Travel, "Weekend away"),
    (40, 6420, Category::FoodAndDining, "Groceries"),
    (47, 999, Category::Other, "Gift wrap"),
    (63, 8000, Category::BillsAndUtilities, "Internet"),
    (70, 2750, Category::Entertainment, "Concert tickets"),
    (88, 5830, Category::FoodAndDining, "Groceries"),
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

    println!("Creating sample expenses...");

    let today = OffsetDateTime::now_utc().date();
    let mut store = SQLiteExpenseStore::new(Arc::new(Mutex::new(conn)));

    for (days_ago, cents, category, description) in SAMPLE_EXPENSES {
        let date: Date = today - Duration::days(days_ago);
        let amount = Amount::new(Decimal::new(cents, 2))?;

        store.create(Expense::build(amount, category, date).description(description))?;
    }

    println!("Success!");

    Ok(())
}
