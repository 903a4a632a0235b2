//! Parser for a single line of InfluxDB line protocol.
//!
//! A line has up to three space-separated sections:
//!
//! ```text
//! measurement[,tag=value...] [field=value[,field=value...]] [timestamp]
//! ```
//!
//! Delimiters (space, comma, equals) can be escaped with a backslash, in
//! which case they are literal content. The scanner below tracks escape
//! state explicitly instead of using regular expressions, so the one-token
//! lookback ("is the previous character an unescaped backslash") stays
//! correct and auditable.

use crate::cast::cast;
use crate::error::{Error, Result};
use crate::point::LinePoint;

/// Parse one line of line protocol into a [`LinePoint`].
///
/// Tag values are always strings; field values are cast via [`cast`]. Tags
/// come back sorted alphabetically by key, fields in input order. The
/// timestamp is `None` when the line omits it.
///
/// # Example
///
/// ```
/// use influxdb_line::{parse, Value};
///
/// let point = parse("cpu,host=server01 value=0.64 1434055562000000000")?;
/// assert_eq!(point.measurement, "cpu");
/// assert_eq!(point.tag("host"), Some("server01"));
/// assert_eq!(point.field("value"), Some(&Value::from(0.64)));
/// assert_eq!(point.timestamp, Some(1434055562000000000));
/// # Ok::<(), influxdb_line::Error>(())
/// ```
pub fn parse(line: &str) -> Result<LinePoint> {
    // Runs of unescaped spaces separate the sections; escaped spaces stay
    // inside their token and are resolved later by `unescape`.
    let sections: Vec<&str> = split_unescaped(line, ' ')
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();

    let Some((&head, mut rest)) = sections.split_first() else {
        return Err(Error::MalformedLine("missing measurement".to_string()));
    };

    // The trailing section is a timestamp only when purely numeric; a
    // two-section line `m k=v` has fields and no timestamp.
    let mut timestamp = None;
    if let Some(&last) = rest.last() {
        if last.bytes().all(|b| b.is_ascii_digit()) {
            timestamp = Some(parse_timestamp(last)?);
            rest = &rest[..rest.len() - 1];
        }
    }

    let fields_section = match rest {
        [] => None,
        [section] => Some(*section),
        _ => {
            return Err(Error::MalformedLine(
                "unescaped space inside fields section".to_string(),
            ));
        }
    };

    let mut head_parts = split_unescaped(head, ',').into_iter();
    // An escaped comma is literal measurement content, not a delimiter:
    // `cpu\,01` is the measurement `cpu,01`.
    let measurement = unescape(head_parts.next().unwrap_or_default());
    if measurement.is_empty() {
        return Err(Error::MalformedLine("missing measurement".to_string()));
    }

    let mut tags = Vec::new();
    for clause in head_parts {
        let (key, value) = split_clause(clause).ok_or_else(|| {
            Error::MalformedLine(format!("tag clause '{}' has no '='", clause))
        })?;
        tags.push((unescape(key), unescape(value)));
    }
    // Stable sort: duplicate keys keep their input order.
    tags.sort_by(|a, b| a.0.cmp(&b.0));

    let mut fields = Vec::new();
    if let Some(section) = fields_section {
        for clause in split_unescaped(section, ',') {
            let (key, value) = split_clause(clause).ok_or_else(|| {
                Error::MalformedLine(format!("field clause '{}' has no '='", clause))
            })?;
            fields.push((unescape(key), cast(&unescape(value))?));
        }
    }

    Ok(LinePoint {
        measurement,
        timestamp,
        fields,
        tags,
    })
}

fn parse_timestamp(token: &str) -> Result<u64> {
    token
        .parse::<u64>()
        .map_err(|source| Error::MalformedTimestamp {
            value: token.to_string(),
            source,
        })
}

/// Split `input` on every unescaped occurrence of `delim`.
///
/// Escaped delimiters (and their backslashes) are left in the returned
/// slices untouched.
fn split_unescaped(input: &str, delim: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == delim {
            parts.push(&input[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Split a `key=value` clause on its first unescaped `=`.
fn split_clause(clause: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, c) in clause.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' {
            return Some((&clause[..i], &clause[i + 1..]));
        }
    }
    None
}

/// Resolve delimiter escapes: drop the backslash before an escaped space,
/// comma or equals sign. Any other backslash is ordinary content.
fn unescape(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && matches!(chars.peek(), Some(' ' | ',' | '=')) {
            continue;
        }
        out.push(c);
    }
    out
}
