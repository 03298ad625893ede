//! Named colors.
//!
//! Everything here is a plain literal; the brand colors follow Discord's
//! published palette.

use crate::Color;

/// Fully transparent black.
pub const NONE: Color = Color::none();

pub const WHITE: Color = Color::white();

pub const BLACK: Color = Color::black();

/// Discord Grey (`#99AAB5`)
pub const GREY: Color = Color::from_rgb888(0x99, 0xAA, 0xB5);

/// Discord Nitro (`#FF73FA`)
pub const NITRO: Color = Color::from_rgb888(0xFF, 0x73, 0xFA);

/// Discord Online (`#43B581`)
pub const ONLINE: Color = Color::from_rgb888(0x43, 0xB5, 0x81);

/// Discord primary button, "blurple" (`#5865F2`)
pub const PRIMARY: Color = Color::from_rgb888(0x58, 0x65, 0xF2);

/// Discord secondary button (`#4F545C`)
pub const SECONDARY: Color = Color::from_rgb888(0x4F, 0x54, 0x5C);

/// Discord success button (`#57F287`)
pub const SUCCESS: Color = Color::from_rgb888(0x57, 0xF2, 0x87);

/// Discord danger button (`#ED4245`)
pub const DANGER: Color = Color::from_rgb888(0xED, 0x42, 0x45);

/// Discord warning button (`#FEE75C`)
pub const WARNING: Color = Color::from_rgb888(0xFE, 0xE7, 0x5C);
