//! depthbook - Interactive Driver
//!
//! Menu-driven session over one of the two book stores. The driver owns
//! the store for the lifetime of the session: it loads the order file on
//! startup, applies one command at a time, times each operation, and
//! saves back on exit. All store errors are reported and the loop
//! continues; nothing here aborts the process for an expected condition.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use rand::Rng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use depthbook::types::price;
use depthbook::{Book, FlatBook, Order, Side, SortedBook};

/// Orders shown per side by the "show top" command
const TOP_DEPTH: usize = 5;

// ============================================================================
// CLI
// ============================================================================

/// Which store representation backs the session
#[derive(Debug, Clone, Copy, ValueEnum)]
enum BookKind {
    /// Single unordered list, sorted on every top-of-book query
    Flat,
    /// Per-side sorted sequences, kept sorted on every insert
    Sorted,
}

#[derive(Debug, Parser)]
#[command(name = "depthbook", version, about = "Interactive order book session")]
struct Args {
    /// Store representation to use
    #[arg(long, value_enum, default_value_t = BookKind::Sorted)]
    book: BookKind,

    /// Order file loaded on startup and saved on exit
    #[arg(long, default_value = "orders.txt")]
    file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "depthbook=info".into()),
        )
        .init();

    let args = Args::parse();
    info!(book = ?args.book, file = %args.file.display(), "starting session");

    match args.book {
        BookKind::Flat => run_session(&mut FlatBook::new(), &args.file),
        BookKind::Sorted => run_session(&mut SortedBook::new(), &args.file),
    }
}

// ============================================================================
// Session loop
// ============================================================================

fn run_session<B: Book>(book: &mut B, file: &Path) {
    match book.load(file) {
        Ok(count) => info!(count, file = %file.display(), "orders loaded"),
        // A missing file on the first run is normal; the store stays empty
        Err(err) => warn!(%err, "load failed, starting with the book as-is"),
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Options:");
        println!("1. Add random order");
        println!("2. Modify order");
        println!("3. Delete order");
        println!("4. Show top {} per side", TOP_DEPTH);
        println!("5. Exit");

        let Some(choice) = read_field(&mut lines, "Enter option: ") else {
            break;
        };

        match choice.as_str() {
            "1" => add_random(book),
            "2" => modify(book, &mut lines),
            "3" => delete(book, &mut lines),
            "4" => show_top(book),
            "5" => break,
            other => error!("invalid option `{other}`"),
        }
    }

    match book.save(file) {
        Ok(count) => info!(count, file = %file.display(), "orders saved"),
        Err(err) => error!(%err, "save failed, in-memory book unchanged"),
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Random order in the session's trading range: price 50-200 whole
/// units, volume 1-1000, uniform side.
fn random_order() -> Order {
    let mut rng = rand::thread_rng();
    let price = rng.gen_range(50..=200) * price::SCALE;
    let volume = rng.gen_range(1..=1000);
    let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
    Order::new(price, volume, side)
}

fn add_random<B: Book>(book: &mut B) {
    let order = random_order();
    println!("Adding: {order}");

    let start = Instant::now();
    book.insert(order);
    println!("Time elapsed: {} ns", start.elapsed().as_nanos());
}

fn modify<B: Book>(book: &mut B, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let Some((index, side)) = read_position(lines) else {
        return;
    };
    let Some(new_price) = read_price(lines) else {
        return;
    };
    let Some(volume) = read_parsed::<u64>(lines, "Enter the new volume: ") else {
        return;
    };

    let start = Instant::now();
    match book.modify(index, new_price, volume, side) {
        Ok(()) => println!("Time elapsed: {} ns", start.elapsed().as_nanos()),
        Err(err) => error!(%err, "modify failed"),
    }
}

fn delete<B: Book>(book: &mut B, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let Some((index, side)) = read_position(lines) else {
        return;
    };

    let start = Instant::now();
    match book.delete(index, side) {
        Ok(()) => println!("Time elapsed: {} ns", start.elapsed().as_nanos()),
        Err(err) => error!(%err, "delete failed"),
    }
}

fn show_top<B: Book>(book: &B) {
    let start = Instant::now();
    let bids = book.top(Side::Buy, TOP_DEPTH);
    let asks = book.top(Side::Sell, TOP_DEPTH);
    let elapsed = start.elapsed();

    println!("Top {} Buy orders:", TOP_DEPTH);
    for order in &bids {
        println!("  {order}");
    }
    println!("Top {} Sell orders:", TOP_DEPTH);
    for order in &asks {
        println!("  {order}");
    }
    println!("Time elapsed: {} ns", elapsed.as_nanos());
}

// ============================================================================
// Input helpers
// ============================================================================

/// Prompt and read one trimmed line. Returns None on EOF or I/O error.
fn read_field(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;
    match lines.next()? {
        Ok(line) => Some(line.trim().to_string()),
        Err(err) => {
            error!(%err, "failed to read input");
            None
        }
    }
}

/// Prompt for a value with a `FromStr` type; reports a parse failure and
/// returns None so the caller falls back to the menu.
fn read_parsed<T: std::str::FromStr>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Option<T> {
    let field = read_field(lines, prompt)?;
    match field.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            error!("invalid number `{field}`");
            None
        }
    }
}

/// Prompt for an order's position: its index and the side it sits on.
fn read_position(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Option<(usize, Side)> {
    let index = read_parsed::<usize>(lines, "Enter the index of the order: ")?;
    let side_choice = read_field(lines, "Enter the side (1 - Buy or 2 - Sell): ")?;
    let side = match side_choice.as_str() {
        "1" => Side::Buy,
        "2" => Side::Sell,
        other => {
            error!("invalid side `{other}`");
            return None;
        }
    };
    Some((index, side))
}

/// Prompt for a decimal price and convert to fixed-point.
fn read_price(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<u64> {
    let field = read_field(lines, "Enter the new price: ")?;
    match price::parse_fixed(&field) {
        Some(value) => Some(value),
        None => {
            error!("invalid price `{field}`");
            None
        }
    }
}
