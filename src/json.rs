use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

use crate::error::Result;

const INDENT: &[u8] = b"    ";

/// Parses a response body and re-emits it with four-space indentation
///
/// Object keys keep the order they had in the body.
pub fn format(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)?;
    to_pretty(&value)
}

fn to_pretty(value: &Value) -> Result<String> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(out).expect("serde_json emits UTF-8"))
}
