//! Line-oriented text persistence for order stores.
//!
//! ## Format
//!
//! One line per order, whitespace-separated fields in fixed order:
//!
//! ```text
//! price volume side
//! ```
//!
//! where `price` is a decimal string, `volume` a non-negative integer, and
//! `side` the exact token `Buy` or `Sell`. Blank lines are skipped. The
//! file imposes no ordering guarantee; stores that need one re-establish
//! it after loading.
//!
//! ## Failure policy
//!
//! `read_orders` parses the whole file before returning, so a caller can
//! swap its state in one step: a missing file or a malformed line yields
//! an error and no partial data. `write_orders` truncates the target path
//! and never touches in-memory state.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::BookError;
use crate::types::{price, Order, Side};

/// Read all orders from a text file.
///
/// Returns every order in file order, or the first error encountered.
/// Errors carry the 1-based line number and the offending text.
pub fn read_orders(path: &Path) -> Result<Vec<Order>, BookError> {
    let file = File::open(path).map_err(|source| BookError::Io {
        op: "open",
        path: path.to_path_buf(),
        source,
    })?;

    let mut orders = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| BookError::Io {
            op: "open",
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        orders.push(parse_line(&line, idx + 1)?);
    }

    Ok(orders)
}

/// Write all orders to a text file, truncating any previous contents.
///
/// Returns the number of lines written.
pub fn write_orders(path: &Path, orders: &[Order]) -> Result<usize, BookError> {
    let file = File::create(path).map_err(|source| BookError::Io {
        op: "create",
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    for order in orders {
        writeln!(
            writer,
            "{} {} {}",
            price::format_fixed(order.price),
            order.volume,
            order.side
        )
        .map_err(|source| BookError::Io {
            op: "create",
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| BookError::Io {
        op: "create",
        path: path.to_path_buf(),
        source,
    })?;

    Ok(orders.len())
}

/// Parse one `price volume side` line.
fn parse_line(line: &str, line_no: usize) -> Result<Order, BookError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(BookError::Parse {
            line: line_no,
            reason: format!("expected 3 fields, got {} in `{}`", fields.len(), line.trim()),
        });
    }

    let price = price::parse_fixed(fields[0]).ok_or_else(|| BookError::Parse {
        line: line_no,
        reason: format!("invalid price `{}`", fields[0]),
    })?;

    let volume: u64 = fields[1].parse().map_err(|_| BookError::Parse {
        line: line_no,
        reason: format!("invalid volume `{}`", fields[1]),
    })?;

    let side = Side::from_token(fields[2]).ok_or_else(|| BookError::Parse {
        line: line_no,
        reason: format!("unrecognized side token `{}`", fields[2]),
    })?;

    Ok(Order::new(price, volume, side))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let order = parse_line("120.5 8 Buy", 1).unwrap();
        assert_eq!(order.price, 12_050_000_000);
        assert_eq!(order.volume, 8);
        assert_eq!(order.side, Side::Buy);
    }

    #[test]
    fn test_parse_line_extra_whitespace() {
        let order = parse_line("  80   2   Sell ", 1).unwrap();
        assert_eq!(order.price, 8_000_000_000);
        assert_eq!(order.volume, 2);
        assert_eq!(order.side, Side::Sell);
    }

    #[test]
    fn test_parse_line_field_count() {
        assert!(matches!(
            parse_line("120.5 8", 4),
            Err(BookError::Parse { line: 4, .. })
        ));
        assert!(matches!(
            parse_line("120.5 8 Buy extra", 4),
            Err(BookError::Parse { line: 4, .. })
        ));
    }

    #[test]
    fn test_parse_line_bad_price() {
        let err = parse_line("cheap 8 Buy", 2).unwrap_err();
        assert!(err.to_string().contains("invalid price `cheap`"));
    }

    #[test]
    fn test_parse_line_bad_volume() {
        let err = parse_line("120.5 lots Buy", 2).unwrap_err();
        assert!(err.to_string().contains("invalid volume `lots`"));
    }

    #[test]
    fn test_parse_line_unknown_side_is_an_error() {
        // The legacy format coerced anything that was not `Buy` to Sell;
        // the closed enumeration rejects it instead.
        let err = parse_line("120.5 8 Hold", 7).unwrap_err();
        assert!(err.to_string().contains("unrecognized side token `Hold`"));
        assert!(err.to_string().starts_with("line 7:"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.txt");

        let orders = vec![
            Order::new(10_000_000_000, 10, Side::Buy),
            Order::new(8_000_000_000, 2, Side::Sell),
        ];

        let written = write_orders(&path, &orders).unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "100 10 Buy\n80 2 Sell\n");

        let loaded = read_orders(&path).unwrap();
        assert_eq!(loaded, orders);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_file.txt");

        assert!(matches!(
            read_orders(&path),
            Err(BookError::Io { op: "open", .. })
        ));
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.txt");
        std::fs::write(&path, "100 10 Buy\n\n   \n80 2 Sell\n").unwrap();

        let loaded = read_orders(&path).unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
