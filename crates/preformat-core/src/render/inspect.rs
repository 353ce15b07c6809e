//! Debug-style value rendering

use crate::types::Value;

/// Nesting depth after which arrays and objects collapse to `[Array]`/`[Object]`
const MAX_DEPTH: usize = 2;

/// Options for [`inspect`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectOptions {
    /// Wrap scalars in ANSI color codes
    pub colors: bool,
}

impl InspectOptions {
    pub fn colored() -> Self {
        Self { colors: true }
    }

    pub fn plain() -> Self {
        Self { colors: false }
    }
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Number,
    String,
    Symbol,
    Undefined,
    Null,
    Special,
}

impl Style {
    fn codes(self) -> (u8, u8) {
        match self {
            Style::Number => (33, 39),
            Style::String | Style::Symbol => (32, 39),
            Style::Undefined => (90, 39),
            Style::Null => (1, 22),
            Style::Special => (36, 39),
        }
    }
}

fn stylize(text: String, style: Style, options: InspectOptions) -> String {
    if !options.colors {
        return text;
    }
    let (open, close) = style.codes();
    format!("\x1b[{}m{}\x1b[{}m", open, text, close)
}

/// Render a value the way a debugger or REPL would show it
///
/// Strings are quoted, numbers use JavaScript notation, and nested
/// structures render on a single line.
///
/// # Example
///
/// ```
/// use preformat_core::render::{inspect, InspectOptions};
/// use preformat_core::Value;
///
/// let value = Value::object([("ok", Value::Bool(true)), ("msg", Value::from("hi"))]);
/// assert_eq!(inspect(&value, InspectOptions::plain()), "{ ok: true, msg: 'hi' }");
/// ```
pub fn inspect(value: &Value, options: InspectOptions) -> String {
    inspect_at(value, options, 0)
}

fn inspect_at(value: &Value, options: InspectOptions, depth: usize) -> String {
    match value {
        Value::Undefined => stylize("undefined".to_string(), Style::Undefined, options),
        Value::Null => stylize("null".to_string(), Style::Null, options),
        Value::Bool(b) => stylize(b.to_string(), Style::Number, options),
        Value::Number(n) => stylize(format_number(*n), Style::Number, options),
        Value::BigInt(n) => stylize(format!("{}n", n), Style::Number, options),
        Value::String(s) => stylize(quote_string(s), Style::String, options),
        Value::Symbol(desc) => stylize(format!("Symbol({})", desc), Style::Symbol, options),
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            if depth > MAX_DEPTH {
                return stylize("[Array]".to_string(), Style::Special, options);
            }
            let parts: Vec<String> = items
                .iter()
                .map(|item| inspect_at(item, options, depth + 1))
                .collect();
            format!("[ {} ]", parts.join(", "))
        }
        Value::Object(entries) => {
            if entries.is_empty() {
                return "{}".to_string();
            }
            if depth > MAX_DEPTH {
                return stylize("[Object]".to_string(), Style::Special, options);
            }
            let parts: Vec<String> = entries
                .iter()
                .map(|(key, v)| format!("{}: {}", format_key(key), inspect_at(v, options, depth + 1)))
                .collect();
            format!("{{ {} }}", parts.join(", "))
        }
    }
}

/// Format a number the way JavaScript prints it
///
/// Integral values drop the fractional part, `-0` keeps its sign, and very
/// large or very small magnitudes use exponent notation (`1e+21`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exp,
        };
    }
    format!("{}", n)
}

fn format_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote_with(key, '\'')
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Quote a string, preferring single quotes and switching to `"` or `` ` ``
/// when that avoids escaping
pub fn quote_string(s: &str) -> String {
    let quote = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') {
        '`'
    } else {
        '\''
    };
    quote_with(s, quote)
}

fn quote_with(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{b}' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
