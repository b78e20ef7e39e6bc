// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pixel surfaces
//!
//! The rasterizer only needs raw pixel access and the surface dimensions.
//! [`Surface`] and [`SurfaceMut`] are that boundary; [`PixelBuffer`] is the
//! in-memory implementation used by scenes, tests and the CLI.
//!
//! # Pixel Format
//!
//! Pixels are packed `0xAARRGGBB` values (see [`crate::core::color`]) stored
//! row-major, left-to-right and top-to-bottom.

use std::path::Path;

use image::RgbaImage;

use super::color::Color;
use super::error::Result;

/// Read access to a pixel surface
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Read a pixel
    ///
    /// The rasterizer only calls this with in-range coordinates; implementations
    /// are not required to check them.
    fn read_pixel(&self, x: u32, y: u32) -> u32;
}

/// Write access to a pixel surface
pub trait SurfaceMut: Surface {
    /// Write a pixel
    ///
    /// The rasterizer only calls this with coordinates inside its clip
    /// rectangle, which is always intersected with the surface bounds.
    fn write_pixel(&mut self, x: u32, y: u32, color: u32);
}

/// In-memory 32-bit ARGB surface
///
/// # Examples
///
/// ```
/// use pxraster::core::{Color, PixelBuffer};
///
/// let mut surface = PixelBuffer::new(4, 4);
/// surface.set_pixel(1, 2, Color::GREEN.to_u32());
/// assert_eq!(surface.pixel(1, 2), Some(Color::GREEN.to_u32()));
/// assert_eq!(surface.pixel(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a surface cleared to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a surface cleared to `color`
    pub fn filled(width: u32, height: u32, color: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Wrap existing pixel data
    ///
    /// Returns `None` if the slice length does not match the dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Bounds-checked read
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Bounds-checked write; out-of-range coordinates are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, color: u32) {
        if x < self.width && y < self.height {
            let index = self.index(x, y);
            self.pixels[index] = color;
        }
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Count pixels matching a predicate
    pub fn count_if<F>(&self, predicate: F) -> usize
    where
        F: Fn(u32) -> bool,
    {
        self.pixels.iter().filter(|&&p| predicate(p)).count()
    }

    /// Iterate `(x, y, color)` over every pixel
    pub fn iter_pixels(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &p)| (i as u32 % width, i as u32 / width, p))
    }

    /// Convert an RGBA8 image into a surface
    pub fn from_image(image: &RgbaImage) -> Self {
        let pixels = image
            .pixels()
            .map(|p| Color::rgba(p[0], p[1], p[2], p[3]).to_u32())
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            pixels,
        }
    }

    /// Convert the surface into an RGBA8 image
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = Color::from_u32(self.pixels[self.index(x, y)]);
            image::Rgba([c.r, c.g, c.b, c.a])
        })
    }

    /// Load a PNG (or any format the `image` crate was built with)
    pub fn load_png<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgba8();
        log::debug!(
            "Loaded image {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::from_image(&image))
    }

    /// Save the surface as a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_image().save(path.as_ref())?;
        Ok(())
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Surface for PixelBuffer {
    #[inline(always)]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    fn read_pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }
}

impl SurfaceMut for PixelBuffer {
    #[inline(always)]
    fn write_pixel(&mut self, x: u32, y: u32, color: u32) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }
}
