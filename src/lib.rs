//! # influxdb-line
//!
//! Parser and type caster for the InfluxDB line protocol, the compact text
//! format InfluxDB uses for time-series data points:
//!
//! ```text
//! cpu_load_short,host=server01,region=us-west value=2.0 1422568543702900257
//! ```
//!
//! ## Why?
//!
//! The interesting part of the protocol is all in one line: delimiter
//! precedence, backslash escapes, and the literal rules that distinguish
//! `2i` (integer) from `2` (float) from `"2"` (string). This crate does
//! exactly that — one line in, one structured [`LinePoint`] out — with no
//! I/O, no batching and no schema validation. Feed it lines from wherever
//! you get them.
//!
//! ## Quick Start
//!
//! ```
//! use influxdb_line::{parse, Value};
//!
//! let point = parse(
//!     "cpu_load_short,host=server01,region=us-west value=2.0 1422568543702900257",
//! )?;
//!
//! assert_eq!(point.measurement, "cpu_load_short");
//! assert_eq!(point.tag("host"), Some("server01"));
//! assert_eq!(point.field("value"), Some(&Value::from(2.0)));
//! assert_eq!(point.timestamp, Some(1422568543702900257));
//! # Ok::<(), influxdb_line::Error>(())
//! ```
//!
//! ## Features
//!
//! - **All field types**: integer (`2i`), float, boolean (`t`/`true`/`f`/
//!   `false`, any casing), and quoted strings with `\"` escapes
//! - **Faithful structure**: tags and fields are ordered clause lists, so
//!   input order and duplicate keys survive parsing
//! - **Explicit absence**: a missing timestamp stays `None`, never "now"
//! - **Error handling**: malformed lines, casts and timestamps are returned
//!   as `Result`s, no panics and no silent defaults
//! - **JSON projection**: [`line_to_json`] flattens a point into a plain
//!   JSON object

pub mod cast;
pub mod error;
pub mod parser;
pub mod point;
pub mod value;

// Re-export main types at crate root
pub use cast::cast;
pub use error::{Error, Result};
pub use parser::parse;
pub use point::{LinePoint, line_to_json};
pub use value::Value;
