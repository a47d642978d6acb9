//! Display formatting for commission results
//!
//! Renders band ranges, rates and amounts the way the results panel shows
//! them: `£5000 - £10000`, `10%`, `£500.00`.

use crate::models::{Band, CommissionResult};

/// Currency symbol prefixed to every monetary value
pub const CURRENCY_SYMBOL: &str = "£";

/// Label for a band's revenue range
///
/// # Example
/// ```
/// use commission_engine_core_rs::{format::range_label, Band};
///
/// assert_eq!(range_label(&Band::new(0.0, 5_000.0, 0.0)), "£0 - £5000");
/// assert_eq!(range_label(&Band::unbounded(20_000.0, 0.25)), "£20000+");
/// ```
pub fn range_label(band: &Band) -> String {
    match band.upper_bound {
        Some(upper) => format!(
            "{}{} - {}{}",
            CURRENCY_SYMBOL, band.lower_bound, CURRENCY_SYMBOL, upper
        ),
        None => format!("{}{}+", CURRENCY_SYMBOL, band.lower_bound),
    }
}

/// Rate as a percentage string
///
/// Rounded to 4 decimal places so `0.15` prints as `15%` rather than
/// `15.000000000000002%`.
pub fn rate_label(rate: f64) -> String {
    let percent = (rate * 100.0 * 10_000.0).round() / 10_000.0;
    // -0.0 would print as "-0"
    format!("{}%", percent + 0.0)
}

/// Monetary amount with 2 decimal places
pub fn currency(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// Render the total heading and the per-band table
///
/// ```text
/// Total Commission: £200.00
/// Range           Rate  Amount
/// £0 - £5000      0%    £0.00
/// £5000 - £10000  10%   £200.00
/// ```
pub fn render_table(result: &CommissionResult) -> String {
    let rows: Vec<[String; 3]> = result
        .breakdown
        .iter()
        .map(|band| [band.label.clone(), rate_label(band.rate), currency(band.amount)])
        .collect();

    let header = ["Range", "Rate", "Amount"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!(
        "Total Commission: {}\n",
        currency(result.total_commission)
    );
    out.push_str(&render_row(&header, &widths));
    for row in &rows {
        let cells = [row[0].as_str(), row[1].as_str(), row[2].as_str()];
        out.push_str(&render_row(&cells, &widths));
    }
    out
}

fn render_row(cells: &[&str; 3], widths: &[usize; 3]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i + 1 == cells.len() {
            line.push_str(cell);
        } else {
            // Pad by chars, not bytes: the currency symbol is multi-byte
            let pad = width - cell.chars().count();
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 2));
        }
    }
    line.push('\n');
    line
}
