use std::fmt;

use crate::error::{InvalidInput, Result, unit_channel, unit_coefficient};

/// Largest value of a channel in the RGB888 / RGBA8888 formats.
const RGBA_8888_MAX: f64 = 255.0;

// ITU-R BT.709 luma weights
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// How far past `[0, 1]` an HSL reconstruction may drift before it stops
/// being rounding noise.
const HSL_NOISE: f64 = 1e-9;

/// Pull values that overshoot `[0, 1]` by rounding noise back onto the bound.
/// Anything further out is left alone so validation still rejects it.
#[inline]
fn settle(v: f64) -> f64 {
    if v < 0.0 && v > -HSL_NOISE {
        0.0
    } else if v > 1.0 && v < 1.0 + HSL_NOISE {
        1.0
    } else {
        v
    }
}

/// An immutable RGBA color with every channel normalized to `[0, 1]`.
///
/// The only way to get a `Color` is through one of the checked constructors
/// (or a palette constant), so the range invariant always holds. Transforms
/// hand back a new value and never touch `self`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "crate::serialize::RawChannels"))]
pub struct Color {
    pub(crate) red: f64,
    pub(crate) green: f64,
    pub(crate) blue: f64,
    pub(crate) alpha: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    /// Build a color from four normalized channels.
    ///
    /// Fails with [`InvalidInput::Channel`] if any channel is outside `[0, 1]`.
    /// Nothing is clamped.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self> {
        Ok(Self {
            red: unit_channel("red", red)?,
            green: unit_channel("green", green)?,
            blue: unit_channel("blue", blue)?,
            alpha: unit_channel("alpha", alpha)?,
        })
    }

    /// Fully transparent black.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            alpha: 0.0,
        }
    }

    #[must_use]
    pub const fn white() -> Self {
        Self::from_rgb888(0xff, 0xff, 0xff)
    }

    #[must_use]
    pub const fn black() -> Self {
        Self::from_rgb888(0x00, 0x00, 0x00)
    }

    /// Opaque gray with all three color channels set to `grayness`.
    pub fn gray(grayness: f64) -> Result<Self> {
        Self::new(grayness, grayness, grayness, 1.0)
    }

    /// Parse a `#RRGGBB` string (either case). Alpha is fully opaque.
    pub fn from_hex(hex: &str) -> Result<Self> {
        crate::color::parse::parse_hex(hex)
    }

    #[must_use]
    #[inline]
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8888(r, g, b, u8::MAX)
    }

    #[must_use]
    #[inline]
    pub const fn from_rgba8888(r: u8, g: u8, b: u8, a: u8) -> Self {
        // any byte divided by 255 is already in [0, 1]
        Self {
            red: r as f64 / RGBA_8888_MAX,
            green: g as f64 / RGBA_8888_MAX,
            blue: b as f64 / RGBA_8888_MAX,
            alpha: a as f64 / RGBA_8888_MAX,
        }
    }

    /// Build an opaque color from hue (degrees), saturation and lightness.
    ///
    /// Any finite hue is accepted and wrapped onto the wheel; saturation and
    /// lightness must be in `[0, 1]`.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Result<Self> {
        // solution from https://www.rapidtables.com/convert/color/hsl-to-rgb.html
        if !hue.is_finite() {
            log::debug!("rejecting hue {hue}");
            return Err(InvalidInput::Hue(hue));
        }
        let s = unit_channel("saturation", saturation)?;
        let l = unit_channel("lightness", lightness)?;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let sector = (hue / 60.0).floor().rem_euclid(6.0) as u8;
        let (r_prime, g_prime, b_prime) = match sector {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x), // 5
        };

        Self::new(
            settle(r_prime + m),
            settle(g_prime + m),
            settle(b_prime + m),
            1.0,
        )
    }

    #[must_use]
    #[inline]
    pub fn red(self) -> f64 {
        self.red
    }

    #[must_use]
    #[inline]
    pub fn green(self) -> f64 {
        self.green
    }

    #[must_use]
    #[inline]
    pub fn blue(self) -> f64 {
        self.blue
    }

    #[must_use]
    #[inline]
    pub fn alpha(self) -> f64 {
        self.alpha
    }

    /// Each channel times 255, truncated (not rounded).
    #[must_use]
    #[inline]
    pub fn to_rgb888(self) -> (u8, u8, u8) {
        (
            (self.red * RGBA_8888_MAX) as u8,
            (self.green * RGBA_8888_MAX) as u8,
            (self.blue * RGBA_8888_MAX) as u8,
        )
    }

    /// Same truncation as [`Color::to_rgb888`], alpha included.
    #[must_use]
    #[inline]
    pub fn to_rgba8888(self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb888();
        (r, g, b, (self.alpha * RGBA_8888_MAX) as u8)
    }

    /// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
    ///
    /// Achromatic colors report a hue and saturation of zero.
    #[must_use]
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let (r, g, b) = (self.red, self.green, self.blue);

        let c_max = r.max(g).max(b);
        let c_min = r.min(g).min(b);
        let l = (c_max + c_min) / 2.0;

        if c_max == c_min {
            return (0.0, 0.0, l);
        }

        let delta = c_max - c_min;
        let s = if l <= 0.5 {
            delta / (c_max + c_min)
        } else {
            delta / (2.0 - c_max - c_min)
        };

        let rc = (c_max - r) / delta;
        let gc = (c_max - g) / delta;
        let bc = (c_max - b) / delta;

        let turns = match c_max {
            _ if r == c_max => bc - gc,
            _ if g == c_max => 2.0 + rc - bc,
            _ => 4.0 + gc - rc, // b == c_max
        };

        let h = (turns / 6.0).rem_euclid(1.0) * 360.0;
        // rem_euclid can land on the divisor for tiny negative inputs
        let h = if h >= 360.0 { 0.0 } else { h };

        (h, s, l)
    }

    /// Lowercase `#rrggbb`. Alpha is not encoded.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb888();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Perceptual luma of the color channels, alpha ignored.
    #[must_use]
    #[inline]
    pub fn brightness(self) -> f64 {
        LUMA_R * self.red + LUMA_G * self.green + LUMA_B * self.blue
    }

    /// Scale lightness down by `k`: `l * (1 - k)`.
    pub fn darker(self, k: f64) -> Result<Self> {
        let k = unit_coefficient(k)?;
        let (h, s, l) = self.to_hsl();
        self.rebuild(h, s, l * (1.0 - k))
    }

    /// Move lightness toward 1 by the fraction `k`.
    pub fn lighter(self, k: f64) -> Result<Self> {
        let k = unit_coefficient(k)?;
        let (h, s, l) = self.to_hsl();
        self.rebuild(h, s, l + (1.0 - l) * k)
    }

    /// Move saturation toward 1 by the fraction `k`.
    pub fn saturated(self, k: f64) -> Result<Self> {
        let k = unit_coefficient(k)?;
        let (h, s, l) = self.to_hsl();
        self.rebuild(h, s + (1.0 - s) * k, l)
    }

    /// Scale saturation down by `k`: `s * (1 - k)`.
    pub fn desaturated(self, k: f64) -> Result<Self> {
        let k = unit_coefficient(k)?;
        let (h, s, l) = self.to_hsl();
        self.rebuild(h, s * (1.0 - k), l)
    }

    /// Copy of this color with only the alpha channel replaced.
    pub fn with_alpha(self, alpha: f64) -> Result<Self> {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    // back through HSL, keeping our alpha
    fn rebuild(self, hue: f64, saturation: f64, lightness: f64) -> Result<Self> {
        Self::from_hsl(hue, settle(saturation), settle(lightness))?.with_alpha(self.alpha)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb888(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::from_rgba8888(r, g, b, a)
    }
}

impl From<Color> for (u8, u8, u8, u8) {
    fn from(color: Color) -> Self {
        color.to_rgba8888()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
