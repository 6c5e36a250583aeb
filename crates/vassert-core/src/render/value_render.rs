use crate::value::Value;
use std::fmt::{self, Write as _};

/// Display form of untyped and typed nil.
pub const NIL: &str = "<nil>";

/// Display form of the missing side of a mapping key or record field.
pub const ABSENT: &str = "<absent>";

/// Render a value in its natural display form.
///
/// Composites are dumped in full: sequences as `[a b]`, mappings as
/// `map[k:v]`, records as `{a b}` and references as `&` followed by the
/// target. Both nil states render as `<nil>`.
pub fn render_value(value: &Value) -> String {
    value.to_string()
}

/// Render one side of a mismatch, using [`ABSENT`] when the side is missing.
pub fn render_side(value: Option<&Value>) -> String {
    match value {
        Some(v) => render_value(v),
        None => ABSENT.to_string(),
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_infinite() {
        f.write_str(if x > 0.0 { "+Inf" } else { "-Inf" })
    } else {
        write!(f, "{x}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil | Value::TypedNil(_) => f.write_str(NIL),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Uint(u) => write!(f, "{u}"),
            Value::Float(x) => write_float(f, *x),
            Value::Str(s) => f.write_str(s),
            Value::Seq(s) => {
                f.write_char('[')?;
                for (i, item) in s.items().iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Value::Map(m) => {
                f.write_str("map[")?;
                for (i, (key, item)) in m.entries().iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{key}:{item}")?;
                }
                f.write_char(']')
            }
            Value::Record(r) => {
                f.write_char('{')?;
                for (i, field) in r.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{}", field.value)?;
                }
                f.write_char('}')
            }
            Value::Ref(r) => write!(f, "&{}", r.target()),
        }
    }
}
