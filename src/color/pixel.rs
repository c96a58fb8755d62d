//! Pixel values and packed-color conversion.

use crate::error::{Result, SimpixError};

const OPAQUE_ALPHA: u32 = 0xFF00_0000;

/// An RGB color. Alpha is not modeled; it is fixed to opaque on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Splits a packed `0xAARRGGBB` word into its color channels.
///
/// The alpha byte is discarded.
///
/// # Examples
///
/// ```
/// use u_simpix::color::{decompose, Pixel};
///
/// assert_eq!(decompose(0xFF12_3456), Pixel::new(0x12, 0x34, 0x56));
/// ```
pub fn decompose(packed: u32) -> Pixel {
    Pixel {
        r: (packed >> 16) as u8,
        g: (packed >> 8) as u8,
        b: packed as u8,
    }
}

/// Packs a pixel into `0xAARRGGBB` with a fully opaque alpha byte.
pub fn recompose(pixel: Pixel) -> u32 {
    OPAQUE_ALPHA | (pixel.r as u32) << 16 | (pixel.g as u32) << 8 | pixel.b as u32
}

/// Decomposes every word of a packed image.
pub fn decompose_all(packed: &[u32]) -> Vec<Pixel> {
    packed.iter().copied().map(decompose).collect()
}

/// Recomposes every pixel into an opaque packed word.
pub fn recompose_all(pixels: &[Pixel]) -> Vec<u32> {
    pixels.iter().copied().map(recompose).collect()
}

/// A row-major image of [`Pixel`]s with known geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Wraps `pixels` as a `width x height` image.
    ///
    /// Fails with [`SimpixError::InvalidInput`] when the pixel count does not
    /// match the geometry.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            SimpixError::InvalidInput(format!("{width}x{height} overflows the pixel count"))
        })?;
        if pixels.len() != expected {
            return Err(SimpixError::InvalidInput(format!(
                "{width}x{height} image needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a buffer from packed `0xAARRGGBB` words.
    pub fn from_argb(width: usize, height: usize, packed: &[u32]) -> Result<Self> {
        Self::new(width, height, decompose_all(packed))
    }

    /// Packs the buffer back into opaque `0xFFRRGGBB` words.
    pub fn to_argb(&self) -> Vec<u32> {
        recompose_all(&self.pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Consumes the buffer, returning the row-major pixels.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}
