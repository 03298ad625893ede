use crate::color::model::Color;
use crate::error::{InvalidInput, Result, byte_channel, unit_channel};

/// Parse a hex color of the exact form `#RRGGBB`.
///
/// Shorthand (`#RGB`) and alpha (`#RRGGBBAA`) forms are rejected.
pub(crate) fn parse_hex(hex: &str) -> Result<Color> {
    use InvalidInput::*;

    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let bytes = hex.as_bytes();
    if bytes.len() != 7 {
        log::debug!("rejecting hex color {hex:?}: length {}", bytes.len());
        return Err(HexLength(bytes.len()));
    }
    if bytes[0] != b'#' {
        log::debug!("rejecting hex color {hex:?}: no leading '#'");
        return Err(HexPrefix);
    }

    let pair = |hi: u8, lo: u8| -> Result<u8> {
        let h = nibble(hi).ok_or_else(|| HexDigits(hex.to_owned()))?;
        let l = nibble(lo).ok_or_else(|| HexDigits(hex.to_owned()))?;

        Ok(h << 4 | l)
    };

    Ok(Color::from_rgb888(
        pair(bytes[1], bytes[2])?,
        pair(bytes[3], bytes[4])?,
        pair(bytes[5], bytes[6])?,
    ))
}

/// The argument list of `name(...)`, if `s` is a call to it.
fn call<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)
        .and_then(|rest| rest.trim_start().strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
}

/// Split a function argument list on commas.
fn args<'a>(args: &'a str, arity: usize, func: &str) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != arity {
        return Err(InvalidInput::Syntax(format!(
            "{func}() takes {arity} arguments, got {}",
            parts.len()
        )));
    }
    Ok(parts)
}

fn byte(name: &'static str, token: &str) -> Result<u8> {
    let value = token
        .parse::<i64>()
        .map_err(|_| InvalidInput::Syntax(format!("{name} channel {token:?} is not an integer")))?;
    byte_channel(name, value)
}

fn number(name: &str, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| InvalidInput::Syntax(format!("{name} {token:?} is not a number")))
}

fn percent(name: &'static str, token: &str) -> Result<f64> {
    let digits = token
        .strip_suffix('%')
        .ok_or_else(|| InvalidInput::Syntax(format!("{name} {token:?} must be a percentage")))?;
    unit_channel(name, number(name, digits.trim_end())? / 100.0)
}

/// Parse a CSS rgb function.
///
/// rgb(r, g, b) with integer channels 0..=255
fn parse_css_rgb(input: &str) -> Result<Color> {
    let nums = args(input, 3, "rgb")?;

    Ok(Color::from_rgb888(
        byte("red", nums[0])?,
        byte("green", nums[1])?,
        byte("blue", nums[2])?,
    ))
}

/// Parse a CSS rgba function.
///
/// rgba(r, g, b, a) where alpha is either an integer 0..=255 or a
/// decimal in [0, 1] (anything containing a '.')
fn parse_css_rgba(input: &str) -> Result<Color> {
    let nums = args(input, 4, "rgba")?;

    let r = byte("red", nums[0])?;
    let g = byte("green", nums[1])?;
    let b = byte("blue", nums[2])?;

    if nums[3].contains('.') {
        let alpha = unit_channel("alpha", number("alpha", nums[3])?)?;
        Color::from_rgb888(r, g, b).with_alpha(alpha)
    } else {
        Ok(Color::from_rgba8888(r, g, b, byte("alpha", nums[3])?))
    }
}

/// Parse a CSS hsl function.
///
/// hsl(h, s%, l%) with the hue in degrees
fn parse_css_hsl(input: &str) -> Result<Color> {
    let nums = args(input, 3, "hsl")?;

    Color::from_hsl(
        number("hue", nums[0])?,
        percent("saturation", nums[1])?,
        percent("lightness", nums[2])?,
    )
}

/// Parse a color from text.
///
/// Accepted forms:
/// * `#RRGGBB`
/// * `rgb(r, g, b)`
/// * `rgba(r, g, b, a)`
/// * `hsl(h, s%, l%)`
pub fn parse_color(s: &str) -> Result<Color> {
    let s = s.trim();
    if s.is_empty() {
        return Err(InvalidInput::Empty);
    }

    if s.starts_with('#') {
        return parse_hex(s);
    }

    let lower = s.to_ascii_lowercase();

    // rgba must be tried before rgb, "rgb" is a prefix of it
    if let Some(inner) = call(&lower, "rgba") {
        return parse_css_rgba(inner);
    }
    if let Some(inner) = call(&lower, "rgb") {
        return parse_css_rgb(inner);
    }
    if let Some(inner) = call(&lower, "hsl") {
        return parse_css_hsl(inner);
    }

    log::debug!("unrecognized color syntax {s:?}");
    Err(InvalidInput::Syntax(s.to_owned()))
}

impl core::str::FromStr for Color {
    type Err = InvalidInput;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = InvalidInput;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
