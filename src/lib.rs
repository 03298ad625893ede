//! Immutable RGBA color values.
//!
//! A [`Color`] holds four channels normalized to `[0, 1]` and converts to and
//! from 8-bit RGB(A), `#rrggbb` hex and HSL. Lighten, darken, saturate and
//! desaturate go through HSL and always return a new value.
//!
//! ```
//! use tint::Color;
//!
//! let blurple = Color::from_hex("#5865F2")?;
//! assert_eq!(blurple.to_hex(), "#5865f2");
//!
//! let hover = blurple.lighter(0.1)?;
//! assert!(hover.brightness() > blurple.brightness());
//! # Ok::<(), tint::InvalidInput>(())
//! ```

pub mod color;
pub mod error;
pub mod palette;
pub mod serialize;

pub use color::model::Color;
pub use color::parse::parse_color;
pub use error::{InvalidInput, Result};
