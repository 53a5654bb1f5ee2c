//! Pixel strip abstraction
//!
//! The pattern engine never talks to hardware directly. It writes into a
//! [`PixelStrip`] and asks it to show the buffered frame.

use heapless::Vec;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};
use crate::error::ConfigError;

/// Addressable strip with a readable pixel buffer
///
/// Implement this trait to plug the engine into a custom LED buffer.
pub trait PixelStrip {
    /// Number of addressable pixels
    fn pixel_count(&self) -> usize;

    /// Write a pixel into the buffer without showing it
    ///
    /// Writes past the end of the strip are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Read the buffered color of a pixel
    ///
    /// Reads past the end of the strip return black.
    fn pixel(&self, index: usize) -> Rgb;

    /// Push the buffered frame to the LEDs
    fn show(&mut self);
}

/// Fixed-capacity pixel buffer in front of an [`OutputDriver`]
///
/// `N` is the maximum number of LEDs, the actual strip length is chosen at
/// construction time.
pub struct FrameBuffer<D: OutputDriver, const N: usize> {
    driver: D,
    pixels: Vec<Rgb, N>,
}

impl<D: OutputDriver, const N: usize> FrameBuffer<D, N> {
    /// Create a black frame buffer of `pixel_count` pixels
    pub fn new(driver: D, pixel_count: usize) -> Result<Self, ConfigError> {
        let mut pixels: Vec<Rgb, N> = Vec::new();
        pixels
            .resize(pixel_count, BLACK)
            .map_err(|()| ConfigError::BufferTooSmall {
                requested: pixel_count,
                capacity: N,
            })?;
        Ok(Self { driver, pixels })
    }

    /// Buffered frame
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D: OutputDriver, const N: usize> PixelStrip for FrameBuffer<D, N> {
    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn pixel(&self, index: usize) -> Rgb {
        self.pixels.get(index).copied().unwrap_or(BLACK)
    }

    fn show(&mut self) {
        self.driver.write(&self.pixels);
    }
}
