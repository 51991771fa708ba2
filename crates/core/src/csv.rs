//! Minimal CSV row splitting for the published sheet export.
//!
//! The sheet rows are simple enough that a full RFC 4180 reader is not
//! needed: a quote character toggles an in-quotes flag, commas outside
//! quotes split fields, and everything else accumulates. Doubled quotes
//! inside a quoted field are kept verbatim rather than collapsed to one.
//! Malformed quoting never fails, it only moves field boundaries.

/// Splits one raw line into trimmed, unquoted field values.
#[must_use]
pub fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    // The last field is emitted unconditionally, even when empty.
    fields.push(current);

    fields.iter().map(|field| unquote(field)).collect()
}

/// Trims surrounding whitespace, then strips at most one leading and one
/// trailing literal quote.
fn unquote(field: &str) -> String {
    let trimmed = field.trim();
    let without_leading = trimmed.strip_prefix('"').unwrap_or(trimmed);
    without_leading
        .strip_suffix('"')
        .unwrap_or(without_leading)
        .to_owned()
}
