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

//! Fixed-point helpers
//!
//! Positions, texture coordinates and color channels are tracked as 16.16
//! signed integers. Single-scanline edges use an 18.14 reciprocal instead of
//! a 16.16 divide (see [`edge_delta`]). Edge setup works on `i64`
//! intermediates and narrows with [`saturate_fixed`].

use crate::core::types::Point2;

/// 16.16 fixed-point value
pub type Fixed = i32;

pub const FIXED_SHIFT: u32 = 16;
pub const FIXED_ONE: Fixed = 1 << FIXED_SHIFT;

/// Fractional bits of the reciprocal used for one-scanline edges
pub const FIXED14_SHIFT: u32 = 14;

/// `round(value * 65536)`
#[inline]
pub fn float_to_fixed(value: f32) -> Fixed {
    (value * FIXED_ONE as f32).round() as Fixed
}

/// Convert a screen position, shifting by half a pixel so that integer
/// rows/columns sample pixel centers
#[inline]
pub fn float_to_fixed_half_pixel(point: Point2) -> (Fixed, Fixed) {
    (float_to_fixed(point.x - 0.5), float_to_fixed(point.y - 0.5))
}

/// Smallest integer not below the fixed-point value
///
/// Uses an arithmetic shift so negative coordinates (geometry above or left
/// of the surface) still round up.
#[inline(always)]
pub fn fixed_ceil16(value: Fixed) -> i32 {
    ((value as i64 + 0xFFFF) >> FIXED_SHIFT) as i32
}

/// 16.16 × 16.16 with a 64-bit intermediate
#[inline(always)]
pub fn fixed_mul16(a: Fixed, b: Fixed) -> Fixed {
    ((a as i64 * b as i64) >> FIXED_SHIFT) as Fixed
}

/// Narrow a widened 16.16 value, saturating at the `Fixed` range
#[inline(always)]
pub fn saturate_fixed(value: i64) -> Fixed {
    value.clamp(Fixed::MIN as i64, Fixed::MAX as i64) as Fixed
}

/// Per-scanline delta of a quantity changing by `delta` over `height`
///
/// `height` is the raw 16.16 vertical extent of the edge and `scanlines`
/// the number of rows it covers. Edges that cover a single row go through
/// an 18.14 reciprocal of the height; taller edges use a plain 16.16
/// divide.
///
/// Inputs and result are widened: an edge between two in-range vertices
/// can span twice the `Fixed` range, and a one-row edge can be steeper
/// than any `Fixed` slope. Callers narrow with [`saturate_fixed`].
#[inline]
pub fn edge_delta(delta: i64, height: i64, scanlines: i32) -> i64 {
    debug_assert!(height > 0 && scanlines > 0);
    if scanlines == 1 {
        let inv_height = (1i64 << (FIXED_SHIFT + FIXED14_SHIFT)) / height;
        (delta * inv_height) >> FIXED14_SHIFT
    } else {
        (delta << FIXED_SHIFT) / height
    }
}
