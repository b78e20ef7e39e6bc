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

//! Span renderer
//!
//! Fills one scanline between the left and right walkers. The covered
//! pixels are `[ceil(left.x), ceil(right.x))` in half-pixel space, which is
//! the set of pixels whose centers lie inside the edges (top-left rule).
//!
//! Three inner loops exist so that solid and plain-textured fills do not pay
//! for attributes they do not use:
//! - textured and colored (texture modulated by the Gouraud color)
//! - textured only
//! - colored only

use super::fixed::{fixed_ceil16, fixed_mul16, saturate_fixed, Fixed, FIXED_SHIFT};
use super::section::{EdgeAttributes, Section};
use super::setup::{Gradients, Triangle};
use crate::core::color::{self, compose};
use crate::core::surface::{Surface, SurfaceMut};

/// Attribute values at the first pixel of a span
#[derive(Debug, Clone, Copy)]
struct SpanCursor {
    u: Fixed,
    v: Fixed,
    color: [Fixed; 4],
}

impl SpanCursor {
    /// Move from the edge value `offset` pixels to the right (16.16 offset)
    #[inline(always)]
    fn from_edge(attrs: &EdgeAttributes, gradients: &Gradients, offset: Fixed) -> Self {
        let mut color = attrs.color;
        for (value, delta) in color.iter_mut().zip(gradients.color) {
            *value = value.wrapping_add(fixed_mul16(offset, delta));
        }
        Self {
            u: attrs.u.wrapping_add(fixed_mul16(offset, gradients.du)),
            v: attrs.v.wrapping_add(fixed_mul16(offset, gradients.dv)),
            color,
        }
    }

    /// Advance by a whole number of pixels
    #[inline(always)]
    fn skip(&mut self, gradients: &Gradients, pixels: i32) {
        self.u = self.u.wrapping_add(gradients.du.wrapping_mul(pixels));
        self.v = self.v.wrapping_add(gradients.dv.wrapping_mul(pixels));
        for (value, delta) in self.color.iter_mut().zip(gradients.color) {
            *value = value.wrapping_add(delta.wrapping_mul(pixels));
        }
    }

    #[inline(always)]
    fn step_uv(&mut self, gradients: &Gradients) {
        self.u = self.u.wrapping_add(gradients.du);
        self.v = self.v.wrapping_add(gradients.dv);
    }

    #[inline(always)]
    fn step_color(&mut self, gradients: &Gradients) {
        for (value, delta) in self.color.iter_mut().zip(gradients.color) {
            *value = value.wrapping_add(delta);
        }
    }

    /// Current color, each channel clamped to 0..=255
    #[inline(always)]
    fn packed_color(&self) -> u32 {
        let [r, g, b, a] = self.color.map(|c| (c >> FIXED_SHIFT).clamp(0, 255) as u32);
        color::pack(r, g, b, a)
    }

    /// Nearest texel, clamped to the texture
    #[inline(always)]
    fn texel(&self, texture: &dyn Surface) -> u32 {
        let max_x = texture.width().saturating_sub(1) as i32;
        let max_y = texture.height().saturating_sub(1) as i32;
        let tx = (self.u >> FIXED_SHIFT).clamp(0, max_x);
        let ty = (self.v >> FIXED_SHIFT).clamp(0, max_y);
        texture.read_pixel(tx as u32, ty as u32)
    }
}

/// Pixel range of one row after clipping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanBounds {
    /// First covered pixel before clipping
    pub dest_x: i32,
    /// Covered width before clipping
    pub width: i32,
    /// First pixel actually written
    pub start: i32,
    /// One past the last pixel written
    pub end: i32,
}

/// Compute the covered, clipped pixel range of row `y`
///
/// Returns `None` if nothing on this row is visible.
pub fn span_bounds(tri: &Triangle, left: &Section, right: &Section, y: i32) -> Option<SpanBounds> {
    let clip = &tri.settings.clip;
    if y < clip.top || y >= clip.bottom {
        return None;
    }

    let dest_x = fixed_ceil16(left.x);
    let width = fixed_ceil16(right.x) - dest_x;
    if width <= 0 {
        return None;
    }

    let start = dest_x.max(clip.left);
    let end = (dest_x + width).min(clip.right);
    if start >= end {
        return None;
    }

    Some(SpanBounds {
        dest_x,
        width,
        start,
        end,
    })
}

/// Render row `y` of the triangle
///
/// # Arguments
///
/// * `dest` - Destination surface
/// * `texture` - Texture surface (required when the triangle is textured)
/// * `tri` - Triangle state
/// * `left` - Left walker positioned on row `y`
/// * `right` - Right walker positioned on row `y`
/// * `y` - Destination row
pub fn render_span<D>(
    dest: &mut D,
    texture: Option<&dyn Surface>,
    tri: &Triangle,
    left: &Section,
    right: &Section,
    y: i32,
) where
    D: SurfaceMut + ?Sized,
{
    let Some(bounds) = span_bounds(tri, left, right, y) else {
        return;
    };

    let gradients = &tri.gradients;
    let settings = &tri.settings;

    // Horizontal prestep from the edge to the first pixel center
    let offset = saturate_fixed(((bounds.dest_x as i64) << FIXED_SHIFT) - left.x as i64);
    let mut cursor = SpanCursor::from_edge(&left.attrs, gradients, offset);
    cursor.skip(gradients, bounds.start - bounds.dest_x);

    let row = y as u32;
    let pixels = (bounds.start as u32)..(bounds.end as u32);

    match (texture.filter(|_| settings.textured()), settings.colored()) {
        (Some(texture), true) => {
            let additive = settings.additive();
            for x in pixels {
                let src = color::modulate(cursor.texel(texture), cursor.packed_color());
                put_pixel(dest, x, row, src, additive);
                cursor.step_uv(gradients);
                cursor.step_color(gradients);
            }
        }
        (Some(texture), false) => {
            let additive = settings.additive();
            for x in pixels {
                put_pixel(dest, x, row, cursor.texel(texture), additive);
                cursor.step_uv(gradients);
            }
        }
        (None, _) => {
            let additive = settings.additive();
            for x in pixels {
                put_pixel(dest, x, row, cursor.packed_color(), additive);
                cursor.step_color(gradients);
            }
        }
    }
}

#[inline(always)]
fn put_pixel<D>(dest: &mut D, x: u32, y: u32, src: u32, additive: bool)
where
    D: SurfaceMut + ?Sized,
{
    let current = dest.read_pixel(x, y);
    if let Some(out) = compose(current, src, additive) {
        dest.write_pixel(x, y, out);
    }
}
