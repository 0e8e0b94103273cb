//! Text and JSON rendering of parcels for the operator shell.

use std::io::Write;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::{DisplayConfig, OutputFormat};
use crate::i18n;
use crate::model::parcel::Parcel;

/// Write a listing of `parcels` in the chosen format.
///
/// Table output starts with a header and a separator line. JSON output is
/// one object per line with no header.
pub fn write_parcels<'a, W, I>(
    out: &mut W,
    parcels: I,
    format: OutputFormat,
    layout: &DisplayConfig,
) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Parcel>,
{
    match format {
        OutputFormat::Table => {
            let header = header_row(layout);
            writeln!(out, "{header}")?;
            writeln!(out, "  {}", "-".repeat(UnicodeWidthStr::width(header.trim())))?;
            for parcel in parcels {
                writeln!(out, "{}", table_row(parcel, layout))?;
            }
        }
        OutputFormat::Json => {
            for parcel in parcels {
                writeln!(out, "{}", serde_json::to_string(parcel)?)?;
            }
        }
    }
    Ok(())
}

/// Write a single search hit.
pub fn write_found<W: Write>(
    out: &mut W,
    parcel: &Parcel,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => writeln!(out, "{}: {}", i18n::msg_parcel_found(), summary(parcel))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(parcel)?)?,
    }
    Ok(())
}

/// `ID=P001, Sender=Alice, Receiver=Zul, Status=Pending`
pub fn summary(parcel: &Parcel) -> String {
    format!(
        "{}={}, {}={}, {}={}, {}={}",
        i18n::col_id(),
        parcel.id(),
        i18n::col_sender(),
        parcel.sender(),
        i18n::col_receiver(),
        parcel.receiver(),
        i18n::col_status(),
        parcel.status()
    )
}

fn header_row(layout: &DisplayConfig) -> String {
    format!(
        "  {} {} {} {}",
        fit(i18n::col_id(), layout.id_width),
        fit(i18n::col_sender(), layout.name_width),
        fit(i18n::col_receiver(), layout.name_width),
        i18n::col_status()
    )
}

fn table_row(parcel: &Parcel, layout: &DisplayConfig) -> String {
    let row = format!(
        "  {} {} {} {}",
        fit(parcel.id(), layout.id_width),
        fit(parcel.sender(), layout.name_width),
        fit(parcel.receiver(), layout.name_width),
        fit(parcel.status().as_str(), layout.status_width)
    );
    row.trim_end().to_string()
}

/// Truncate and pad `s` to exactly `width` terminal columns.
fn fit(s: &str, width: usize) -> String {
    let mut cell = truncate_str(s, width);
    let used = UnicodeWidthStr::width(cell.as_str());
    cell.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    cell
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    // Too narrow for an ellipsis: hard cut.
    let ellipsis = if max_width <= 3 { "" } else { "..." };
    let budget = max_width - ellipsis.len();

    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > budget {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str(ellipsis);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::Status;

    fn render(parcels: &[Parcel], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_parcels(&mut buf, parcels, format, &DisplayConfig::default()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Alice", 10), "Alice");
        assert_eq!(truncate_str("Bartholomew", 8), "Barth...");
        assert_eq!(truncate_str("abcdef", 2), "ab");
    }

    #[test]
    fn test_fit_pads_wide_chars_by_column_width() {
        // Each CJK character is two columns wide.
        let cell = fit("日本", 6);
        assert_eq!(UnicodeWidthStr::width(cell.as_str()), 6);
        assert_eq!(cell, "日本  ");
    }

    #[test]
    fn test_summary() {
        let p = Parcel::with_status("P002", "Amir", "Frank", Status::InTransit);
        assert_eq!(
            summary(&p),
            "ID=P002, Sender=Amir, Receiver=Frank, Status=In Transit"
        );
    }

    #[test]
    fn test_table_listing() {
        let parcels = vec![
            Parcel::with_status("P001", "Alice", "Zul", Status::Pending),
            Parcel::with_status("P002", "Amir", "Frank", Status::Delivered),
        ];
        let text = render(&parcels, OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Sender"));
        assert!(lines[1].trim_start().starts_with('-'));
        assert!(lines[2].starts_with("  P001"));
        assert!(lines[2].ends_with("Pending"));
        assert!(lines[3].ends_with("Delivered"));
    }

    #[test]
    fn test_json_listing() {
        let parcels = vec![Parcel::with_status("P001", "Alice", "Zul", Status::Pending)];
        let text = render(&parcels, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["sender"], "Alice");
        assert_eq!(value["status"], "Pending");
    }
}
