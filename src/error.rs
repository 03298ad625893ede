use thiserror::Error;

/// Everything a caller can get wrong when building or transforming a
/// [`Color`](crate::Color).
///
/// All variants are the same kind of failure (bad input); they only differ in
/// which argument was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("{name} channel {value} is outside [0, 1]")]
    Channel { name: &'static str, value: f64 },

    #[error("coefficient {0} is outside [0, 1]")]
    Coefficient(f64),

    #[error("hue {0} is not a finite angle")]
    Hue(f64),

    #[error("8-bit {name} channel {value} is outside [0, 255]")]
    Byte { name: &'static str, value: i64 },

    #[error("hex color must be 7 characters long, got {0}")]
    HexLength(usize),

    #[error("hex color must start with '#'")]
    HexPrefix,

    #[error("invalid hex digits in {0:?}")]
    HexDigits(String),

    #[error("empty color string")]
    Empty,

    #[error("unrecognized color syntax {0:?}")]
    Syntax(String),
}

pub type Result<T, E = InvalidInput> = std::result::Result<T, E>;

/// Reject `value` unless it lies in `[0, 1]`. NaN is rejected.
pub(crate) fn unit_channel(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        log::debug!("rejecting {name} channel {value}");
        Err(InvalidInput::Channel { name, value })
    }
}

/// Same range check as [`unit_channel`] for transform coefficients.
pub(crate) fn unit_coefficient(k: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&k) {
        Ok(k)
    } else {
        log::debug!("rejecting coefficient {k}");
        Err(InvalidInput::Coefficient(k))
    }
}

/// Narrow a parsed integer to an 8-bit channel.
pub(crate) fn byte_channel(name: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        log::debug!("rejecting 8-bit {name} channel {value}");
        InvalidInput::Byte { name, value }
    })
}
