use std::io::Write;

use crate::error::Result;
use crate::models::{EstimationResult, Vibe};

/// Footer printed under every table.
pub const DISCLAIMER: &str = "Estimates are approximations for planning only. This tool does not \
encourage illegal or unsafe use. Be aware of local laws, safety, and consent. For alcohol: \
1 standard drink = 1.5 fl oz (44 mL) of 40% ABV spirit, or one 12-oz beer (approx).";

const TABLE_HEADERS: [&str; 3] = ["Item", "Quantity", "Notes"];

/// One-line natural-language summary of an estimate.
pub fn summary_line(result: &EstimationResult) -> String {
    format!(
        "For {} people ({}) — ~{} beers, ~{} booze-drinks, {} g za, {} g bag.",
        result.head,
        result.vibe.display_name(),
        result.total_beers,
        result.shots,
        result.weed_grams,
        result.coke_grams
    )
}

/// Breakdown rows as an aligned Item / Quantity / Notes table.
pub fn render_table(result: &EstimationResult) -> String {
    let cells: Vec<[&str; 3]> = result
        .breakdown
        .iter()
        .map(|r| [r.item.as_str(), r.quantity.as_str(), r.notes.as_str()])
        .collect();

    // Width in chars, not bytes (≈ and → are multi-byte)
    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_row = |row: &[&str; 3]| {
        out.push_str(&format!(
            "{:<w0$} | {:<w1$} | {}\n",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1]
        ));
    };

    push_row(&TABLE_HEADERS);
    let rule = [
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2]),
    ];
    push_row(&[rule[0].as_str(), rule[1].as_str(), rule[2].as_str()]);
    for row in &cells {
        push_row(row);
    }

    out
}

/// Print summary, table and disclaimer.
pub fn display_estimate(result: &EstimationResult) {
    println!();
    println!("Summary: {}", summary_line(result));
    println!();
    print!("{}", render_table(result));
    println!();
    println!("{}", DISCLAIMER);
}

/// Write the whole estimate as pretty JSON.
pub fn write_json<W: Write>(result: &EstimationResult, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the breakdown rows as CSV with an `item,quantity,notes` header.
pub fn write_csv<W: Write>(result: &EstimationResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in &result.breakdown {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Print the vibe preset table.
pub fn display_presets() {
    println!();
    println!("=== Vibes ===");
    println!();
    println!(
        "{:<10} {:<18} {:>10} {:>12} {:>10} {:>10}",
        "key", "label", "beers/pp", "drinks/pp", "za g/pp", "bag g/pp"
    );

    for vibe in Vibe::ALL {
        let p = vibe.preset();
        println!(
            "{:<10} {:<18} {:>10} {:>12} {:>10} {:>10}",
            vibe.key(),
            vibe.label(),
            p.beer_per,
            p.drinks_per,
            p.weed_per,
            p.coke_per
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate;
    use crate::models::EstimationInput;

    #[test]
    fn test_summary_line_default() {
        let result = estimate(&EstimationInput::default());
        assert_eq!(
            summary_line(&result),
            "For 25 people (chill) — ~30 beers, ~8 booze-drinks, 3 g za, 0.1 g bag."
        );
    }

    #[test]
    fn test_summary_line_rounds_gram_totals() {
        let result = estimate(&EstimationInput {
            headcount: 3,
            beer_share: 100.0,
            liquor_share: 100.0,
            weed_share: 100.0,
            coke_share: 100.0,
            ..EstimationInput::default()
        });
        assert_eq!(
            summary_line(&result),
            "For 3 people (chill) — ~6 beers, ~3 booze-drinks, 1.5 g za, 0.3 g bag."
        );
    }

    #[test]
    fn test_table_has_header_and_five_rows() {
        let result = estimate(&EstimationInput::default());
        let table = render_table(&result);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Item"));
        assert!(lines[2].starts_with("Beer (12 oz servings)"));
        assert!(lines[6].contains("0.1 g ≈ 0.03 x 1/8 oz (8-ball)"));
    }

    #[test]
    fn test_write_csv() {
        let result = estimate(&EstimationInput::default());
        let mut buf = Vec::new();
        write_csv(&result, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("item,quantity,notes"));
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("Za,3 g ≈ 0.11 oz,\"6 users, 0.5 g/user\""));
    }

    #[test]
    fn test_write_json() {
        let result = estimate(&EstimationInput::default());
        let mut buf = Vec::new();
        write_json(&result, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["head"], 25);
        assert_eq!(value["vibe"], "chill");
        assert_eq!(value["beer"]["kegs"], 0.18);
        assert_eq!(value["breakdown"].as_array().unwrap().len(), 5);
    }
}
