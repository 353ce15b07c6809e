//! printf-style substitution over log arguments

use super::inspect::{format_number, inspect, InspectOptions};
use crate::types::Value;

/// Join log arguments into one line, substituting `%` tokens
///
/// When the first argument is a string it is scanned for tokens:
///
/// | Token | Output |
/// |---|---|
/// | `%s` | the argument as text |
/// | `%d` | the argument converted to a number |
/// | `%i` | the integer prefix of the argument |
/// | `%f` | the float prefix of the argument |
/// | `%j` | the argument as JSON |
/// | `%o`, `%O` | the inspected argument (never colored) |
/// | `%c` | nothing (the argument is consumed) |
/// | `%%` | a literal `%` |
///
/// A lone string is returned as written, `%%` included. Tokens without a
/// remaining argument, and unknown tokens, are kept as written. Arguments left over after substitution are appended separated by
/// spaces: strings verbatim, everything else inspected.
///
/// # Example
///
/// ```
/// use preformat_core::render::format_values;
/// use preformat_core::args;
///
/// assert_eq!(format_values(&args!["%s has %i items", "cart", 3.7], false), "cart has 3 items");
/// assert_eq!(format_values(&args!["a", 1, true], false), "a 1 true");
/// ```
pub fn format_values(values: &[Value], colors: bool) -> String {
    let options = InspectOptions { colors };
    let Some((first, rest)) = values.split_first() else {
        return String::new();
    };

    if let ([], Value::String(text)) = (rest, first) {
        return text.clone();
    }

    let Value::String(pattern) = first else {
        return values
            .iter()
            .map(|value| append_form(value, options))
            .collect::<Vec<_>>()
            .join(" ");
    };

    let mut out = String::with_capacity(pattern.len());
    let mut next = 0;
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(&token) = chars.peek() else {
            out.push('%');
            break;
        };
        if token == '%' {
            chars.next();
            out.push('%');
            continue;
        }
        if !matches!(token, 's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O' | 'c') || next >= rest.len() {
            out.push('%');
            continue;
        }
        chars.next();
        let arg = &rest[next];
        next += 1;
        match token {
            's' => out.push_str(&substitute_string(arg)),
            'd' => out.push_str(&substitute_number(arg)),
            'i' => out.push_str(&substitute_integer(arg)),
            'f' => out.push_str(&substitute_float(arg)),
            'j' => out.push_str(&substitute_json(arg)),
            'o' | 'O' => out.push_str(&inspect(arg, InspectOptions::plain())),
            _ => {}
        }
    }

    for arg in &rest[next..] {
        out.push(' ');
        out.push_str(&append_form(arg, options));
    }
    out
}

fn append_form(value: &Value, options: InspectOptions) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => inspect(other, options),
    }
}

fn substitute_string(arg: &Value) -> String {
    match arg {
        Value::BigInt(n) => format!("{}n", n),
        Value::Array(_) | Value::Object(_) => inspect(arg, InspectOptions::plain()),
        other => to_js_string(other),
    }
}

fn substitute_number(arg: &Value) -> String {
    match arg {
        Value::BigInt(n) => format!("{}n", n),
        Value::Symbol(_) => "NaN".to_string(),
        other => format_number(to_number(other)),
    }
}

fn substitute_integer(arg: &Value) -> String {
    match arg {
        Value::BigInt(n) => format!("{}n", n),
        Value::Symbol(_) => "NaN".to_string(),
        other => parse_int_prefix(&to_js_string(other))
            .map(format_number)
            .unwrap_or_else(|| "NaN".to_string()),
    }
}

fn substitute_float(arg: &Value) -> String {
    match arg {
        Value::Symbol(_) => "NaN".to_string(),
        other => parse_float_prefix(&to_js_string(other))
            .map(format_number)
            .unwrap_or_else(|| "NaN".to_string()),
    }
}

fn substitute_json(arg: &Value) -> String {
    match arg.to_json() {
        Some(json) => serde_json::to_string(&json).unwrap_or_else(|_| "undefined".to_string()),
        None => "undefined".to_string(),
    }
}

/// Plain textual conversion (`String(value)` semantics)
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::BigInt(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Symbol(desc) => format!("Symbol({})", desc),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Undefined | Value::Null => String::new(),
                other => to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Numeric conversion (`Number(value)` semantics)
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined | Value::Symbol(_) | Value::Object(_) => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => *n,
        Value::BigInt(n) => *n as f64,
        Value::String(s) => string_to_number(s),
        Value::Array(_) => string_to_number(&to_js_string(value)),
    }
}

fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }
    // Rust also accepts "inf"/"nan" spellings that are not numbers here
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Leading integer of a string (`parseInt` semantics, base 10)
pub fn parse_int_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<f64>().ok().map(|n| sign * n)
}

/// Leading decimal number of a string (`parseFloat` semantics)
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits = has_digits || frac_end > frac_start;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-') | Some(b'+')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    s[..end].trim_end_matches('.').parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn f(values: Vec<Value>) -> String {
        format_values(&values, false)
    }

    #[test]
    fn test_no_values() {
        assert_eq!(f(vec![]), "");
    }

    #[test]
    fn test_literal_concatenation() {
        assert_eq!(f(args!["foo", "string"]), "foo string");
        assert_eq!(f(args![1.5, "number"]), "1.5 number");
        assert_eq!(f(args!["Prefix:", "Hello %s!"]), "Prefix: Hello %s!");
    }

    #[test]
    fn test_substitutions() {
        assert_eq!(f(args!["%s", "foo", "string"]), "foo string");
        assert_eq!(f(args!["%d", 1.5, "number"]), "1.5 number");
        assert_eq!(f(args!["%i", 1.5, "number"]), "1 number");
        assert_eq!(f(args!["%f", 1.5, "number"]), "1.5 number");
        assert_eq!(f(args!["%o", "foo", "string"]), "'foo' string");
        assert_eq!(f(args!["%o", "{}", "object"]), "'{}' object");
        assert_eq!(f(args!["%j", Value::object([("a", 1)])]), "{\"a\":1}");
        assert_eq!(f(args!["%c%s", "color: red", "x"]), "x");
    }

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(f(args!["%d", "abc"]), "NaN");
        assert_eq!(f(args!["%d", ""]), "0");
        assert_eq!(f(args!["%d", "0x10"]), "16");
        assert_eq!(f(args!["%i", "-3.9px"]), "-3");
        assert_eq!(f(args!["%f", "2.5e3kg"]), "2500");
        assert_eq!(f(args!["%d", Value::bigint(7)]), "7n");
        assert_eq!(f(args!["%d", true]), "1");
        assert_eq!(f(args!["%d", Value::Array(vec![Value::Null])]), "0");
        assert_eq!(f(args!["%d", Value::Array(vec![Value::Undefined])]), "0");
        assert_eq!(f(args!["%d", args![5]]), "5");
        assert_eq!(f(args!["%d", args![1, 2]]), "NaN");
        assert_eq!(f(args!["%d", Value::Array(vec![])]), "0");
    }

    #[test]
    fn test_string_substitution_of_bigint() {
        assert_eq!(f(args!["%s", Value::bigint(7)]), "7n");
        assert_eq!(to_js_string(&Value::bigint(7)), "7");
    }

    #[test]
    fn test_literal_tokens() {
        assert_eq!(f(args!["100%%"]), "100%%");
        assert_eq!(f(args!["100%% of %s", "tests"]), "100% of tests");
        assert_eq!(f(args!["%s and %s", "one"]), "one and %s");
        assert_eq!(f(args!["%x", "a"]), "%x a");
        assert_eq!(f(args!["trailing %"]), "trailing %");
    }

    #[test]
    fn test_leftover_args_inspected() {
        assert_eq!(f(args!["a", Value::Null, Value::Array(vec![])]), "a null []");
        assert_eq!(f(args![true, "x"]), "true x");
    }

    #[test]
    fn test_parse_prefixes() {
        assert_eq!(parse_int_prefix("  42abc"), Some(42.0));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix("."), None);
    }
}
