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

//! Triangle setup
//!
//! Converts the floating-point inputs of a draw call into fixed-point
//! vertices and computes the horizontal gradients of every interpolated
//! attribute.
//!
//! # Gradients
//!
//! For an attribute `f` with values `f1, f2, f3` at the three vertices, the
//! change per horizontal pixel is
//!
//! ```text
//! df/dx = ((f1 - f3)(y2 - y3) - (f2 - f3)(y1 - y3)) / D
//! D     = (x1 - x3)(y2 - y3) - (x2 - x3)(y1 - y3)
//! ```
//!
//! `D` is twice the signed area. Its sign also tells the winding: the edge
//! walkers expect `D < 0`, so triangles with `D > 0` get their second and
//! third vertices swapped (attributes travel with their vertex, so
//! coverage and shading are unchanged).

use super::fixed::{float_to_fixed, float_to_fixed_half_pixel, Fixed, FIXED_SHIFT};
use crate::core::types::{ClipRect, Point2, RasterFlags, RasterSettings};

/// Triangles whose doubled signed area is within this tolerance are skipped
pub const DEGENERATE_EPSILON: f32 = 1e-5;

const OPAQUE_WHITE: u32 = 0xFFFF_FFFF;

/// Color channel order used by [`RasterVertex::color`] and [`Gradients::color`]
pub const CHANNEL_SHIFTS: [u32; 4] = [16, 8, 0, 24];

/// A vertex in fixed-point raster space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterVertex {
    /// Screen X, shifted by half a pixel (16.16)
    pub x: Fixed,
    /// Screen Y, shifted by half a pixel (16.16)
    pub y: Fixed,
    /// Texture U in texels (16.16)
    pub u: Fixed,
    /// Texture V in texels (16.16)
    pub v: Fixed,
    /// R, G, B, A channels in 0..=255 (16.16)
    pub color: [Fixed; 4],
}

/// Per-pixel horizontal deltas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gradients {
    pub du: Fixed,
    pub dv: Fixed,
    pub color: [Fixed; 4],
}

/// Everything the edge walkers and span renderer need for one draw call
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [RasterVertex; 3],
    pub gradients: Gradients,
    pub settings: RasterSettings,
}

impl Triangle {
    /// Index of the vertex with the smallest Y (first one on ties)
    pub fn top_vertex(&self) -> usize {
        (1..3).fold(0, |best, i| {
            if self.vertices[i].y < self.vertices[best].y {
                i
            } else {
                best
            }
        })
    }

    /// Index of the vertex with the largest Y (first one on ties)
    pub fn bottom_vertex(&self) -> usize {
        (1..3).fold(0, |best, i| {
            if self.vertices[i].y > self.vertices[best].y {
                i
            } else {
                best
            }
        })
    }
}

/// Doubled signed area of the triangle
#[inline]
pub fn signed_area(points: &[Point2; 3]) -> f32 {
    let [p1, p2, p3] = points;
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Build the fixed-point triangle for a draw call
///
/// # Arguments
///
/// * `points` - Screen positions
/// * `uvs` - Normalized texture coordinates (ignored without a texture)
/// * `colors` - Packed ARGB vertex colors
/// * `texture_size` - Texture dimensions, if the draw is textured
/// * `clip` - Clip rectangle, already intersected with the destination
/// * `additive` - Use additive blending
///
/// # Returns
///
/// `None` for degenerate (zero-area) triangles.
pub fn setup_triangle(
    mut points: [Point2; 3],
    mut uvs: [Point2; 3],
    mut colors: [u32; 3],
    texture_size: Option<(u32, u32)>,
    clip: ClipRect,
    additive: bool,
) -> Option<Triangle> {
    let mut area = signed_area(&points);
    if area.abs() <= DEGENERATE_EPSILON {
        return None;
    }

    if area > 0.0 {
        points.swap(1, 2);
        uvs.swap(1, 2);
        colors.swap(1, 2);
        area = -area;
    }

    let mut flags = RasterFlags::empty();
    if texture_size.is_some() {
        flags |= RasterFlags::TEXTURED;
    }
    let plain_texture = texture_size.is_some() && colors.iter().all(|&c| c == OPAQUE_WHITE);
    if !plain_texture {
        flags |= RasterFlags::COLORED;
    }
    if additive {
        flags |= RasterFlags::ADDITIVE;
    }

    // Texture coordinates in texel space
    let (tex_w, tex_h) = texture_size.unwrap_or((0, 0));
    let texels: [Point2; 3] =
        uvs.map(|uv| Point2::new(uv.x * tex_w as f32, uv.y * tex_h as f32));

    let mut vertices = [RasterVertex::default(); 3];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let (x, y) = float_to_fixed_half_pixel(points[i]);
        vertex.x = x;
        vertex.y = y;

        if flags.contains(RasterFlags::TEXTURED) {
            vertex.u = float_to_fixed(texels[i].x);
            vertex.v = float_to_fixed(texels[i].y);
        }

        if flags.contains(RasterFlags::COLORED) {
            for (slot, shift) in vertex.color.iter_mut().zip(CHANNEL_SHIFTS) {
                *slot = (((colors[i] >> shift) & 0xFF) as Fixed) << FIXED_SHIFT;
            }
        }
    }

    let mut gradients = Gradients::default();
    let scale = (1u32 << FIXED_SHIFT) as f64 / area as f64;
    let gradient = |f: [f32; 3]| -> Fixed { horizontal_gradient(&points, f, scale) };

    if flags.contains(RasterFlags::TEXTURED) {
        gradients.du = gradient(texels.map(|t| t.x));
        gradients.dv = gradient(texels.map(|t| t.y));
    }

    if flags.contains(RasterFlags::COLORED) {
        for (slot, shift) in gradients.color.iter_mut().zip(CHANNEL_SHIFTS) {
            *slot = gradient(colors.map(|c| ((c >> shift) & 0xFF) as f32));
        }
    }

    log::trace!(
        "Triangle setup: ({:.2}, {:.2}), ({:.2}, {:.2}), ({:.2}, {:.2}) area={:.2} flags={:?}",
        points[0].x,
        points[0].y,
        points[1].x,
        points[1].y,
        points[2].x,
        points[2].y,
        area,
        flags
    );

    Some(Triangle {
        vertices,
        gradients,
        settings: RasterSettings { flags, clip },
    })
}

/// `df/dx` in 16.16 for one attribute; `scale` is `65536 / D`
fn horizontal_gradient(points: &[Point2; 3], f: [f32; 3], scale: f64) -> Fixed {
    let [p1, p2, p3] = points;
    let numerator = (f[0] as f64 - f[2] as f64) * (p2.y as f64 - p3.y as f64)
        - (f[1] as f64 - f[2] as f64) * (p1.y as f64 - p3.y as f64);
    (numerator * scale).round() as Fixed
}
