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

//! Entry point tests

use super::*;

#[test]
fn test_collinear_points_draw_nothing() {
    let mut surface = PixelBuffer::new(32, 32);
    let clip = full_clip(&surface);

    fill(&mut surface, [(0.0, 0.0), (10.0, 10.0), (20.0, 20.0)], RED, clip);

    assert_eq!(surface.count_if(|p| p != 0), 0);
}

#[test]
fn test_coincident_points_draw_nothing() {
    let mut surface = PixelBuffer::new(16, 16);
    let clip = full_clip(&surface);

    fill(&mut surface, [(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)], RED, clip);

    assert_eq!(surface.count_if(|p| p != 0), 0);
}

#[test]
fn test_flat_triangle_draws_nothing() {
    let mut surface = PixelBuffer::new(16, 16);
    let clip = full_clip(&surface);

    // All vertices on one scanline
    fill(&mut surface, [(1.0, 4.0), (12.0, 4.0), (6.0, 4.0)], RED, clip);

    assert_eq!(surface.count_if(|p| p != 0), 0);
}

#[test]
fn test_empty_clip_draws_nothing() {
    let mut surface = PixelBuffer::new(16, 16);

    fill(
        &mut surface,
        [(0.0, 0.0), (0.0, 16.0), (16.0, 0.0)],
        RED,
        ClipRect::new(8, 8, 8, 12),
    );

    assert_eq!(surface.count_if(|p| p != 0), 0);
}

#[test]
fn test_thin_sliver_stays_inside_bounds() {
    let mut surface = PixelBuffer::new(16, 16);
    let clip = full_clip(&surface);

    // Much less than a pixel wide; may cover nothing, must not misbehave
    fill(&mut surface, [(2.0, 0.0), (2.1, 15.0), (2.05, 0.0)], RED, clip);

    assert!(surface.count_if(|p| p != 0) <= 15);
}

#[test]
fn test_subpixel_triangle_between_centers() {
    let mut surface = PixelBuffer::new(8, 8);
    let clip = full_clip(&surface);

    // Lies entirely between pixel centers
    fill(&mut surface, [(3.6, 3.6), (3.6, 3.9), (3.9, 3.6)], RED, clip);

    assert_eq!(surface.count_if(|p| p != 0), 0);
}

#[test]
fn test_offscreen_triangle_draws_nothing() {
    let mut surface = PixelBuffer::new(16, 16);
    let clip = full_clip(&surface);

    fill(&mut surface, [(-40.0, -40.0), (-40.0, -20.0), (-20.0, -40.0)], RED, clip);
    fill(&mut surface, [(40.0, 40.0), (40.0, 60.0), (60.0, 40.0)], RED, clip);

    assert_eq!(surface.count_if(|p| p != 0), 0);
}

#[test]
fn test_large_triangle_covers_small_surface() {
    let mut surface = PixelBuffer::new(16, 16);
    let clip = full_clip(&surface);

    fill(&mut surface, [(-100.0, -100.0), (-100.0, 300.0), (300.0, -100.0)], RED, clip);

    assert_eq!(surface.count_if(|p| p == RED), 256);
}

#[test]
fn test_edge_taller_than_fixed_range() {
    // The left edge spans 40000 rows; its height in 16.16 exceeds i32
    let mut surface = PixelBuffer::new(32, 32);
    let clip = full_clip(&surface);

    fill(&mut surface, [(0.0, -20000.0), (10.0, 20000.0), (20000.0, 0.0)], RED, clip);

    // Left edge sits near x = 5 across the whole surface
    for y in [0, 15, 31] {
        assert_eq!(surface.pixel(4, y), Some(0), "row {y}");
        assert_eq!(surface.pixel(5, y), Some(RED), "row {y}");
        assert_eq!(surface.pixel(31, y), Some(RED), "row {y}");
    }
    assert_eq!(surface.count_if(|p| p == RED), 27 * 32);
}

#[test]
fn test_nearly_flat_top_edge_keeps_its_row() {
    // The top edge drops 0.0005 px over 30 px and crosses the row 0 center
    // near x = 11.3, a slope far outside the 16.16 range
    let mut surface = PixelBuffer::new(32, 12);
    let clip = full_clip(&surface);

    fill(&mut surface, [(0.0, 0.4998), (30.0, 0.5003), (15.0, 10.0)], RED, clip);

    let row0: Vec<u32> = (0..32).filter(|&x| surface.pixel(x, 0) == Some(RED)).collect();
    assert_eq!(row0, (0..12).collect::<Vec<_>>());
    assert_eq!(surface.pixel(2, 1), Some(RED));
}

#[test]
fn test_quad_covers_every_pixel_once() {
    let mut surface = PixelBuffer::new(12, 7);
    let clip = full_clip(&surface);

    // Half-transparent white: any pixel blended twice would come out brighter
    let color = Color::WHITE.with_alpha(128).to_u32();
    draw_quad(
        &mut surface,
        None,
        [
            Point2::new(0.0, 0.0),
            Point2::new(12.0, 0.0),
            Point2::new(12.0, 7.0),
            Point2::new(0.0, 7.0),
        ],
        [Point2::ZERO; 4],
        [color; 4],
        clip,
        false,
    );

    let first = surface.pixel(0, 0).unwrap();
    assert_ne!(first, 0);
    assert_eq!(surface.count_if(|p| p == first), 12 * 7);
}
