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

//! Software Rasterizer
//!
//! This module implements the triangle filler used by every filled primitive.
//! It walks the triangle's left and right edges one scanline at a time and
//! fills the span between them, interpolating texture coordinates and vertex
//! colors affinely.
//!
//! # Algorithm
//!
//! 1. Setup: convert vertices to 16.16 fixed point (shifted by half a pixel so
//!    rows and columns sample pixel centers) and compute per-pixel gradients
//! 2. Start a left and a right edge walker at the topmost vertex
//! 3. For every scanline, fill `[ceil(left.x), ceil(right.x))` through the
//!    blend function, clipped to the clip rectangle
//! 4. Step both walkers; when an edge runs out, move to the next one
//! 5. Stop when a walker reaches the bottom vertex
//!
//! # Coordinate Range
//!
//! Screen positions are converted to 16.16 fixed point, so they must stay
//! within ±32767 pixels. Positions beyond that saturate at the range limit.
//! Edges between any two in-range vertices are set up in 64-bit arithmetic,
//! so very tall or nearly flat edges never overflow.
//!
//! # References
//!
//! - [Chris Hecker: Perspective Texture Mapping, part 1](https://www.chrishecker.com/Miscellaneous_Technical_Articles)
//! - [Triangle Rasterization Tutorial](https://www.sunshine2k.de/coding/java/TriangleRasterization/TriangleRasterization.html)

pub mod fixed;
pub mod section;
pub mod setup;
pub mod span;

#[cfg(test)]
mod tests;

use fixed::fixed_ceil16;
use section::{Section, Side};
use setup::setup_triangle;
use span::render_span;

use crate::core::surface::{Surface, SurfaceMut};
use crate::core::types::{ClipRect, Point2};

/// Rasterize one triangle
///
/// # Arguments
///
/// * `dest` - Destination surface
/// * `texture` - Optional texture, sampled nearest-neighbor
/// * `points` - Screen positions of the three vertices
/// * `uvs` - Normalized texture coordinates, scaled by the texture size
/// * `colors` - Packed ARGB vertex colors (modulate the texture if present)
/// * `clip` - Clip rectangle; `right`/`bottom` exclusive
/// * `additive` - Add the premultiplied source instead of alpha blending
///
/// # Behavior
///
/// - Zero-area triangles draw nothing.
/// - Either winding is accepted; coverage does not depend on vertex order.
/// - A texture with opaque white vertex colors is drawn unmodulated.
/// - Source pixels with alpha 0 leave the destination untouched; alpha 255
///   overwrites it; anything in between is blended.
///
/// # Examples
///
/// ```
/// use pxraster::core::raster::draw_triangle;
/// use pxraster::core::{ClipRect, Color, PixelBuffer, Point2};
///
/// let mut surface = PixelBuffer::new(16, 16);
/// draw_triangle(
///     &mut surface,
///     None,
///     [Point2::new(0.0, 0.0), Point2::new(10.0, 10.0), Point2::new(20.0, 20.0)],
///     [Point2::ZERO; 3],
///     [Color::WHITE.to_u32(); 3],
///     ClipRect::from_size(16, 16),
///     false,
/// );
///
/// // Collinear points: nothing drawn
/// assert_eq!(surface.count_if(|p| p != 0), 0);
/// ```
pub fn draw_triangle<D>(
    dest: &mut D,
    texture: Option<&dyn Surface>,
    points: [Point2; 3],
    uvs: [Point2; 3],
    colors: [u32; 3],
    clip: ClipRect,
    additive: bool,
) where
    D: SurfaceMut + ?Sized,
{
    let clip = clip.intersect(&ClipRect::from_size(dest.width(), dest.height()));
    if clip.is_empty() {
        return;
    }

    let texture_size = texture.map(|t| (t.width(), t.height()));
    if matches!(texture_size, Some((0, _)) | Some((_, 0))) {
        log::debug!("Skipping triangle with empty texture");
        return;
    }

    let Some(tri) = setup_triangle(points, uvs, colors, texture_size, clip, additive) else {
        log::debug!(
            "Skipping degenerate triangle: ({}, {}), ({}, {}), ({}, {})",
            points[0].x,
            points[0].y,
            points[1].x,
            points[1].y,
            points[2].x,
            points[2].y
        );
        return;
    };

    let mut left = Section::new(Side::Left, &tri);
    let mut right = Section::new(Side::Right, &tri);
    if !left.advance(&tri) || !right.advance(&tri) {
        return;
    }

    let mut y = fixed_ceil16(tri.vertices[tri.top_vertex()].y);
    while y < clip.bottom {
        render_span(dest, texture, &tri, &left, &right, y);

        y += 1;
        if !left.next_row(&tri) || !right.next_row(&tri) {
            break;
        }
    }
}

/// Rasterize a quadrilateral as the triangles (0, 1, 2) and (2, 3, 0)
///
/// Both triangles walk the shared 0-2 diagonal identically, so the quad is
/// covered without gaps or double-blended pixels.
///
/// # Examples
///
/// ```
/// use pxraster::core::raster::draw_quad;
/// use pxraster::core::{ClipRect, Color, PixelBuffer, Point2};
///
/// let mut surface = PixelBuffer::new(8, 8);
/// draw_quad(
///     &mut surface,
///     None,
///     [
///         Point2::new(0.0, 0.0),
///         Point2::new(8.0, 0.0),
///         Point2::new(8.0, 8.0),
///         Point2::new(0.0, 8.0),
///     ],
///     [Point2::ZERO; 4],
///     [Color::BLUE.to_u32(); 4],
///     ClipRect::from_size(8, 8),
///     false,
/// );
///
/// assert_eq!(surface.count_if(|p| p == Color::BLUE.to_u32()), 64);
/// ```
pub fn draw_quad<D>(
    dest: &mut D,
    texture: Option<&dyn Surface>,
    points: [Point2; 4],
    uvs: [Point2; 4],
    colors: [u32; 4],
    clip: ClipRect,
    additive: bool,
) where
    D: SurfaceMut + ?Sized,
{
    for [a, b, c] in [[0, 1, 2], [2, 3, 0]] {
        draw_triangle(
            dest,
            texture,
            [points[a], points[b], points[c]],
            [uvs[a], uvs[b], uvs[c]],
            [colors[a], colors[b], colors[c]],
            clip,
            additive,
        );
    }
}
