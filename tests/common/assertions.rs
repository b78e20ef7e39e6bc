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

//! Custom assertions for rendered surfaces

use pxraster::core::{ClipRect, PixelBuffer};

/// Assert a pixel has the expected packed color
#[allow(dead_code)]
pub fn assert_pixel(surface: &PixelBuffer, x: u32, y: u32, expected: u32) {
    let actual = surface.pixel(x, y);
    assert_eq!(
        actual,
        Some(expected),
        "Pixel ({}, {}) mismatch: expected 0x{:08X}, got {:08X?}",
        x,
        y,
        expected,
        actual
    );
}

/// Assert two surfaces agree inside a rectangle
#[allow(dead_code)]
pub fn assert_region_eq(actual: &PixelBuffer, expected: &PixelBuffer, region: ClipRect) {
    for y in region.top..region.bottom {
        for x in region.left..region.right {
            let (x, y) = (x as u32, y as u32);
            assert_eq!(
                actual.pixel(x, y),
                expected.pixel(x, y),
                "Pixel ({}, {}) differs",
                x,
                y
            );
        }
    }
}

/// Assert every pixel of a surface has the same color
#[allow(dead_code)]
pub fn assert_uniform(surface: &PixelBuffer, expected: u32) {
    let mismatches = surface.count_if(|p| p != expected);
    assert_eq!(
        mismatches, 0,
        "{} pixels differ from 0x{:08X}",
        mismatches, expected
    );
}
