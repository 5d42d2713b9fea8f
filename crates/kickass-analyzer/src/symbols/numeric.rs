/// Convert a Kick Assembler numeric literal to its value.
///
/// Understands an optional `#` immediate marker, a `<` (low byte) or `>`
/// (high byte) modifier, and the `$` (hex), `%` (binary) and leading-`0`
/// (octal) base prefixes. Anything that is not a plain literal yields `None`.
pub fn to_decimal(text: &str) -> Option<i64> {
    let mut literal = text.trim();
    literal = literal.strip_prefix('#').unwrap_or(literal).trim_start();

    let mut byte = ByteSelect::Whole;
    if let Some(rest) = literal.strip_prefix('<') {
        byte = ByteSelect::Low;
        literal = rest.trim_start();
    } else if let Some(rest) = literal.strip_prefix('>') {
        byte = ByteSelect::High;
        literal = rest.trim_start();
    }

    let value = parse_unsigned(literal)?;
    Some(match byte {
        ByteSelect::Whole => value,
        ByteSelect::Low => value % 256,
        ByteSelect::High => value >> 8,
    })
}

#[derive(Clone, Copy)]
enum ByteSelect {
    Whole,
    Low,
    High,
}

fn parse_unsigned(literal: &str) -> Option<i64> {
    let (digits, radix) = if let Some(hex) = literal.strip_prefix('$') {
        (hex, 16)
    } else if let Some(binary) = literal.strip_prefix('%') {
        (binary, 2)
    } else if literal.len() > 1 && literal.starts_with('0') {
        (&literal[1..], 8)
    } else {
        (literal, 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

/// Render a value the way hover shows numeric literals.
pub fn describe_number(value: i64) -> String {
    if value < 0 {
        return format!("{value}");
    }
    let mut out = format!("{value} | ${value:X}");
    if value <= 0xFFFF {
        out.push_str(&format!(" | %{value:b}"));
    }
    out
}
