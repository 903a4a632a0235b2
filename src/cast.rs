//! Type casting for raw field value tokens.
//!
//! The line protocol marks field types inside the value token itself: a
//! trailing `i` for integers, double quotes for strings, the boolean literals
//! `t`/`true`/`f`/`false` in any casing, and bare numbers for floats.

use ordered_float::OrderedFloat;

use crate::error::{Error, Result};
use crate::value::Value;

/// Cast a raw field value token into its typed [`Value`].
///
/// The rules apply in priority order:
///
/// 1. a trailing `i` marks a signed integer (`2i` is `Integer(2)`, while
///    bare `2` is `Float(2.0)`);
/// 2. a matching pair of double quotes marks a string; exactly one layer of
///    quotes is stripped and escaped inner quotes (`\"`) are unescaped;
/// 3. `t`, `true`, `f`, `false` (case-insensitive) are booleans;
/// 4. anything else must parse as a 64-bit float.
///
/// A token that matches the integer or float rule but fails numeric parsing
/// is [`Error::MalformedCast`]; no default value is ever substituted.
///
/// # Example
///
/// ```
/// use influxdb_line::{cast, Value};
///
/// assert_eq!(cast("23i")?, Value::Integer(23));
/// assert_eq!(cast("\"ok\"")?, Value::String("ok".to_string()));
/// assert_eq!(cast("TRUE")?, Value::Bool(true));
/// # Ok::<(), influxdb_line::Error>(())
/// ```
pub fn cast(raw: &str) -> Result<Value> {
    if let Some(digits) = raw.strip_suffix('i') {
        let v = digits
            .parse::<i64>()
            .map_err(|_| Error::MalformedCast(raw.to_string()))?;
        return Ok(Value::Integer(v));
    }

    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        let inner = &raw[1..raw.len() - 1];
        return Ok(Value::String(inner.replace("\\\"", "\"")));
    }

    match raw.to_ascii_lowercase().as_str() {
        "t" | "true" => return Ok(Value::Bool(true)),
        "f" | "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    let v = raw
        .parse::<f64>()
        .map_err(|_| Error::MalformedCast(raw.to_string()))?;
    Ok(Value::Float(OrderedFloat(v)))
}
