// ABOUTME: Coercion of runtime values into integers and display strings
// ABOUTME: Implements the fixed conversion rules used by filters and math functions

use std::fmt::{self, Write as _};

use super::error::{Result, ValueError};
use super::Value;

/// Convert a value to an integer.
///
/// Integers of any width are widened, floats are truncated toward zero and
/// strings are parsed as base-10. Everything else is a conversion error.
pub fn to_int(value: &Value) -> Result<i64> {
    match value {
        Value::Integer(i) => Ok(i.get()),
        Value::Float(f) => {
            let f = f.get();
            let truncated = f.trunc();
            if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64
            {
                return Err(ValueError::TypeConversion {
                    found: value.kind(),
                    reason: format!("{} is out of range", f),
                });
            }
            Ok(truncated as i64)
        }
        Value::String(s) => s.parse::<i64>().map_err(|e| ValueError::TypeConversion {
            found: value.kind(),
            reason: format!("parsing {:?}: {}", s, e),
        }),
        Value::Absent | Value::Bool(_) | Value::Sequence(_) | Value::Mapping(_) => {
            Err(ValueError::TypeConversion {
                found: value.kind(),
                reason: "unsupported type".to_string(),
            })
        }
    }
}

/// Render any value as human-readable text. Never fails.
///
/// Mapping keys are sorted so the same mapping always renders the same way.
pub fn to_display_string(value: &Value) -> String {
    let mut out = String::new();
    write_display(&mut out, value);
    out
}

fn write_display(out: &mut String, value: &Value) {
    match value {
        Value::Absent => out.push_str("<nil>"),
        Value::Bool(b) => {
            let _ = write!(out, "{}", b);
        }
        Value::Integer(i) => {
            let _ = write!(out, "{}", i.get());
        }
        Value::Float(super::Float::F32(f)) => write_float(out, *f, f64::from(*f)),
        Value::Float(super::Float::F64(f)) => write_float(out, *f, *f),
        Value::String(s) => out.push_str(s),
        Value::Sequence(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_display(out, item);
            }
            out.push(']');
        }
        Value::Mapping(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push_str("map[");
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(key);
                out.push(':');
                write_display(out, &map[key]);
            }
            out.push(']');
        }
    }
}

/// Shortest round-trip digits, switching to exponent form (`1e+21`, `1e-07`)
/// when the decimal exponent is below -4 or at least 21.
fn write_float<F: fmt::Display + fmt::LowerExp>(out: &mut String, f: F, wide: f64) {
    if wide.is_nan() {
        out.push_str("NaN");
        return;
    }
    if wide.is_infinite() {
        out.push_str(if wide > 0.0 { "+Inf" } else { "-Inf" });
        return;
    }
    let scientific = format!("{:e}", f);
    if let Some((mantissa, exp)) = scientific.split_once('e') {
        if let Ok(exp) = exp.parse::<i32>() {
            if !(-4..21).contains(&exp) {
                let sign = if exp < 0 { '-' } else { '+' };
                let _ = write!(out, "{}e{}{:02}", mantissa, sign, exp.abs());
                return;
            }
        }
    }
    let _ = write!(out, "{}", f);
}
