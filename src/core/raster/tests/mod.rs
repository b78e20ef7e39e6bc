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

//! Rasterizer tests
//!
//! Tests are organized into the following modules:
//! - `basic`: Entry point behavior (degenerate input, empty clips, termination)
//! - `coverage`: Which pixels a triangle covers (area, fill rule, winding)
//! - `gradient`: Vertex color interpolation
//! - `texture`: Texture sampling and modulation
//! - `clipping`: Clip rectangle handling
//! - `blending`: Alpha and additive blending

mod basic;

use super::*;
use crate::core::color::Color;
use crate::core::surface::PixelBuffer;

/// Draw an untextured triangle with one color
pub(super) fn fill(
    surface: &mut PixelBuffer,
    points: [(f32, f32); 3],
    color: u32,
    clip: ClipRect,
) {
    draw_triangle(
        surface,
        None,
        points.map(|(x, y)| Point2::new(x, y)),
        [Point2::ZERO; 3],
        [color; 3],
        clip,
        false,
    );
}

/// Full-surface clip rectangle
pub(super) fn full_clip(surface: &PixelBuffer) -> ClipRect {
    ClipRect::from_size(surface.width(), surface.height())
}

/// Pixels that differ from `background`
pub(super) fn covered(surface: &PixelBuffer, background: u32) -> Vec<(u32, u32)> {
    surface
        .iter_pixels()
        .filter(|&(_, _, p)| p != background)
        .map(|(x, y, _)| (x, y))
        .collect()
}

/// Opaque red used by most coverage tests
pub(super) const RED: u32 = Color::RED.to_u32();
