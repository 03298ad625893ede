//! Reading and writing colors to byte streams.
//!
//! [`Serializer`] is the whole contract: one `read`, one `write`. Two
//! encodings ship with the crate:
//! - [`Rgba8888Serializer`]: four bytes, quantized like [`Color::to_rgba8888`]
//! - [`ChannelSerializer`]: four little-endian `f64`s, lossless

use std::io::{self, Read, Write};

use thiserror::Error;

use crate::{Color, InvalidInput};

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("decoded an invalid color: {0}")]
    Invalid(#[from] InvalidInput),
}

/// Packs values of `T` into a stream and unpacks them again.
pub trait Serializer<T> {
    /// Read one value from `stream`.
    fn read<R: Read + ?Sized>(&self, stream: &mut R) -> Result<T, SerializeError>;

    /// Write `value` to `stream`.
    fn write<W: Write + ?Sized>(&self, stream: &mut W, value: &T) -> Result<(), SerializeError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Rgba8888Serializer;

impl Serializer<Color> for Rgba8888Serializer {
    fn read<R: Read + ?Sized>(&self, stream: &mut R) -> Result<Color, SerializeError> {
        let mut buf = [0u8; 4];
        stream.read_exact(&mut buf)?;
        log::trace!("read rgba8888 {buf:?}");

        Ok(Color::from_rgba8888(buf[0], buf[1], buf[2], buf[3]))
    }

    fn write<W: Write + ?Sized>(&self, stream: &mut W, value: &Color) -> Result<(), SerializeError> {
        let (r, g, b, a) = value.to_rgba8888();
        log::trace!("write rgba8888 {:?}", [r, g, b, a]);
        stream.write_all(&[r, g, b, a])?;
        Ok(())
    }
}

/// Bytes per channel in [`ChannelSerializer`].
const CHANNEL_WIDTH: usize = size_of::<f64>();

#[derive(Clone, Copy, Debug, Default)]
pub struct ChannelSerializer;

impl Serializer<Color> for ChannelSerializer {
    fn read<R: Read + ?Sized>(&self, stream: &mut R) -> Result<Color, SerializeError> {
        let mut buf = [0u8; 4 * CHANNEL_WIDTH];
        stream.read_exact(&mut buf)?;

        let mut channels = [0.0f64; 4];
        for (channel, chunk) in channels.iter_mut().zip(buf.chunks_exact(CHANNEL_WIDTH)) {
            let mut bytes = [0u8; CHANNEL_WIDTH];
            bytes.copy_from_slice(chunk);
            *channel = f64::from_le_bytes(bytes);
        }
        log::trace!("read channels {channels:?}");

        let [r, g, b, a] = channels;
        Ok(Color::new(r, g, b, a)?)
    }

    fn write<W: Write + ?Sized>(&self, stream: &mut W, value: &Color) -> Result<(), SerializeError> {
        log::trace!("write channels {value:?}");
        for channel in [value.red, value.green, value.blue, value.alpha] {
            stream.write_all(&channel.to_le_bytes())?;
        }
        Ok(())
    }
}

/// Unchecked wire shape of a [`Color`]; deserialization goes through
/// [`Color::new`] so the range invariant still holds.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub(crate) struct RawChannels {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawChannels> for Color {
    type Error = InvalidInput;

    fn try_from(raw: RawChannels) -> Result<Self, Self::Error> {
        Color::new(raw.red, raw.green, raw.blue, raw.alpha)
    }
}
