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

//! Geometry and settings types shared by the rasterizer
//!
//! This module contains the floating-point input point type, the integer
//! clipping rectangle and the per-draw raster settings.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A 2D point in floating-point screen (or texture) space
///
/// Screen positions are in pixels with the origin at the top-left corner;
/// pixel `(x, y)` covers the area `[x, x + 1) × [y, y + 1)`. Texture
/// coordinates use the normalized `[0, 1]` range.
///
/// # Examples
///
/// ```
/// use pxraster::core::Point2;
///
/// let p = Point2::new(1.5, 2.0);
/// assert_eq!(p.x, 1.5);
/// assert_eq!(Point2::ZERO, Point2::new(0.0, 0.0));
/// ```
///
/// Serialized as a two-element `[x, y]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point2 {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Point2> for [f32; 2] {
    fn from(point: Point2) -> Self {
        [point.x, point.y]
    }
}

/// Integer clipping rectangle
///
/// `left`/`top` are inclusive, `right`/`bottom` are exclusive, so a rectangle
/// covering a whole `w × h` surface is `(0, 0, w, h)`.
///
/// # Examples
///
/// ```
/// use pxraster::core::ClipRect;
///
/// let clip = ClipRect::new(10, 10, 20, 30);
/// assert_eq!(clip.width(), 10);
/// assert_eq!(clip.height(), 20);
/// assert!(clip.contains(10, 29));
/// assert!(!clip.contains(20, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ClipRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle covering a whole surface of the given size
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    pub fn width(&self) -> i32 {
        (self.right - self.left).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.bottom - self.top).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Overlap of two rectangles (may be empty)
    pub fn intersect(&self, other: &ClipRect) -> ClipRect {
        ClipRect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        }
    }
}

bitflags! {
    /// Which attributes a draw call interpolates and how it blends
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RasterFlags: u8 {
        /// Sample a texture surface
        const TEXTURED = 1 << 0;
        /// Interpolate per-vertex colors
        const COLORED = 1 << 1;
        /// Add the premultiplied source instead of alpha blending
        const ADDITIVE = 1 << 2;
    }
}

/// Immutable per-draw settings passed to every span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSettings {
    pub flags: RasterFlags,
    /// Clip rectangle already intersected with the destination surface
    pub clip: ClipRect,
}

impl RasterSettings {
    #[inline(always)]
    pub fn textured(&self) -> bool {
        self.flags.contains(RasterFlags::TEXTURED)
    }

    #[inline(always)]
    pub fn colored(&self) -> bool {
        self.flags.contains(RasterFlags::COLORED)
    }

    #[inline(always)]
    pub fn additive(&self) -> bool {
        self.flags.contains(RasterFlags::ADDITIVE)
    }
}
