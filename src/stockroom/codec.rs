//! # Record Codec
//!
//! Converts a single [`Item`] to and from one line of comma-separated text.
//!
//! ## Line Format
//!
//! ```text
//! id,name,category,supplier,quantity,price
//! 3,"Widget, Pro",Tools,,10,9.99
//! ```
//!
//! Text fields are quoted only when they contain a comma, a double quote or a
//! line break. Quotes inside a quoted field are doubled.
//!
//! ## Malformed Input
//!
//! Decoding never fails. [`decode`] always yields an item: missing trailing
//! fields are empty / zero, and numeric fields that do not parse become zero.
//! Every numeric field that did not parse is reported as a [`FieldIssue`] so
//! the caller can pick a [`DecodePolicy`]: keep the zero-filled item
//! (`Lenient`) or drop the line (`Strict`). The store applies the policy; the
//! codec only reports.
//!
//! ## Multi-line Records
//!
//! A quoted field may contain `\n`, which means one record can span several
//! physical lines of a file. [`records`] groups physical lines into logical
//! records by tracking whether a quoted span is still open.

use crate::model::Item;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fmt;
use std::io::Write;

pub const DELIMITER: char = ',';
pub const QUOTE: char = '"';
pub const FIELD_COUNT: usize = 6;

/// Position of a field within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Category,
    Supplier,
    Quantity,
    Price,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Category => "category",
            Field::Supplier => "supplier",
            Field::Quantity => "quantity",
            Field::Price => "price",
        };
        f.write_str(name)
    }
}

/// A numeric field whose text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Field,
    pub value: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} {:?}", self.field, self.value)
    }
}

/// What to do with a line that has malformed numeric fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Keep the item with zero in place of each malformed number.
    #[default]
    Lenient,
    /// Reject the whole line.
    Strict,
}

impl DecodePolicy {
    pub fn admits(self, decoded: &Decoded) -> bool {
        match self {
            DecodePolicy::Lenient => true,
            DecodePolicy::Strict => decoded.issues.is_empty(),
        }
    }
}

/// Result of decoding one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub item: Item,
    pub issues: Vec<FieldIssue>,
}

impl Decoded {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

fn fields_of(item: &Item) -> [String; FIELD_COUNT] {
    [
        item.id.to_string(),
        item.name.clone(),
        item.category.clone(),
        item.supplier.clone(),
        item.quantity.to_string(),
        item.price.to_string(),
    ]
}

/// Writes `items` one record each, `\n`-terminated, no header row.
pub fn write_items<'a, W: Write>(
    out: W,
    items: impl IntoIterator<Item = &'a Item>,
) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER as u8)
        .quote(QUOTE as u8)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);
    for item in items {
        writer.write_record(fields_of(item))?;
    }
    writer.flush()?;
    Ok(())
}

/// One record without its line terminator.
pub fn encode(item: &Item) -> csv::Result<String> {
    let mut buf = Vec::new();
    write_items(&mut buf, [item])?;
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Splits a line into raw field strings, unquoting as it goes.
///
/// A quote opens a quoted span anywhere outside one, not only at the start of
/// a field. An unterminated span runs to the end of the line.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == QUOTE {
            in_quotes = true;
        } else if c == DELIMITER {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);
    fields
}

/// Decodes a line with defaults: never fails, zero-fills what does not parse.
pub fn decode(line: &str) -> Decoded {
    let mut fields = split_fields(line).into_iter();
    let mut next = || fields.next().unwrap_or_default();
    let mut issues = Vec::new();

    let id = parse_id(&next(), &mut issues);
    let name = next();
    let category = next();
    let supplier = next();
    let quantity = parse_number(Field::Quantity, &next(), &mut issues).unwrap_or(0);
    let price = parse_number(Field::Price, &next(), &mut issues).unwrap_or(0.0);

    Decoded {
        item: Item {
            id,
            name,
            category,
            supplier,
            quantity,
            price,
        },
        issues,
    }
}

/// Zero and negative ids mean "unassigned" and decode to 0 without an issue.
fn parse_id(raw: &str, issues: &mut Vec<FieldIssue>) -> u64 {
    if let Some(digits) = raw.trim().strip_prefix('-') {
        if digits.parse::<u64>().is_ok() {
            return 0;
        }
    }
    parse_number::<u64>(Field::Id, raw, issues).unwrap_or(0)
}

fn parse_number<T: std::str::FromStr>(
    field: Field,
    raw: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            issues.push(FieldIssue {
                field,
                value: raw.to_string(),
            });
            None
        }
    }
}

/// One logical record of a file and the physical line it starts on (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub line: usize,
    pub text: String,
}

/// Groups the physical lines of `text` into logical records.
///
/// Lines are joined with `\n` while a quoted span is open. Both `\n` and
/// `\r\n` terminate a record, and a missing final terminator is accepted.
/// Blank records are skipped.
pub fn records(text: &str) -> Vec<RawRecord> {
    let mut out = Vec::new();
    let mut buffer = String::new();
    let mut start = 0;
    let mut open = false;

    for (idx, physical) in text.split('\n').enumerate() {
        if buffer.is_empty() && !open {
            start = idx + 1;
        } else {
            buffer.push('\n');
        }
        buffer.push_str(physical);

        // Doubled quotes toggle twice, so parity is enough to know if a span
        // is still open.
        if physical.chars().filter(|&c| c == QUOTE).count() % 2 == 1 {
            open = !open;
        }
        if open {
            continue;
        }

        let record = std::mem::take(&mut buffer);
        let record = record.strip_suffix('\r').unwrap_or(&record);
        if !record.trim().is_empty() {
            out.push(RawRecord {
                line: start,
                text: record.to_string(),
            });
        }
    }

    if !buffer.trim().is_empty() {
        out.push(RawRecord {
            line: start,
            text: buffer,
        });
    }
    out
}
