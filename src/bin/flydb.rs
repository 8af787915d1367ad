//! FlyDB Binary
//!
//! Loads the table files and shows one page of a table on the console.

use std::io;

use clap::{Parser, ValueEnum};
use flydb::pager::{draw_page, page_size};
use flydb::screen::{Screen, SystemTerminal};
use flydb::{Config, FlyDb, TableKey};
use tracing_subscriber::{fmt, EnvFilter};

/// FlyDB table pager
#[derive(Parser, Debug)]
#[command(name = "flydb")]
#[command(about = "Page through flight, airport and price tables")]
#[command(version)]
struct Args {
    /// Directory holding flights.fdb, airports.fdb and prices.fdb
    #[arg(short, long, default_value = "database")]
    data_dir: String,

    /// Maximum rows per table
    #[arg(short, long, default_value = "100")]
    capacity: usize,

    /// Table to show
    #[arg(short, long, value_enum, default_value = "flights")]
    table: Table,

    /// Index of the first row on the page
    #[arg(short, long, default_value = "0")]
    from: usize,

    /// Rows per page (defaults to what fits on the terminal)
    #[arg(short, long)]
    rows: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Table {
    Flights,
    Airports,
    Prices,
}

impl From<Table> for TableKey {
    fn from(table: Table) -> Self {
        match table {
            Table::Flights => TableKey::Flight,
            Table::Airports => TableKey::Airport,
            Table::Prices => TableKey::Price,
        }
    }
}

fn main() {
    // Initialize tracing/logging on stderr, the screen owns stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,flydb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("FlyDB v{}", flydb::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .table_capacity(args.capacity)
        .build();

    let db = match FlyDb::open(config) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    let terminal = SystemTerminal;
    let mut screen = match Screen::for_terminal(&terminal) {
        Ok(screen) => screen,
        Err(e) => {
            tracing::warn!("Cannot query terminal size ({}), using default", e);
            let (width, height) = SystemTerminal::FALLBACK;
            Screen::new(width, height)
        }
    };

    let key = TableKey::from(args.table);
    let rows = args.rows.unwrap_or_else(|| page_size(&screen)).max(1);
    let to = args.from.saturating_add(rows - 1);

    let records = match db.get_range(key, args.from, to) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Range read failed: {}", e);
            std::process::exit(1);
        }
    };

    let row_count = db.database().row_count(key).unwrap_or_default();
    draw_page(&mut screen, key, args.from, &records, row_count);

    if let Err(e) = screen.render(&mut io::stdout().lock()) {
        tracing::error!("Render failed: {}", e);
        std::process::exit(1);
    }
}
