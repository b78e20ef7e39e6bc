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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pxraster::core::color;
use pxraster::core::raster::{draw_quad, draw_triangle};
use pxraster::core::{ClipRect, Color, PixelBuffer, Point2};
use std::hint::black_box;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

fn quad_points(size: f32) -> [Point2; 4] {
    [
        Point2::new(0.0, 0.0),
        Point2::new(size, 0.0),
        Point2::new(size, size),
        Point2::new(0.0, size),
    ]
}

const QUAD_UVS: [Point2; 4] = [
    Point2::new(0.0, 0.0),
    Point2::new(1.0, 0.0),
    Point2::new(1.0, 1.0),
    Point2::new(0.0, 1.0),
];

fn checker(size: u32) -> PixelBuffer {
    let mut texture = PixelBuffer::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let on = ((x / 4) + (y / 4)) % 2 == 0;
            texture.set_pixel(x, y, if on { 0xFFFFFFFF } else { 0xFF404040 });
        }
    }
    texture
}

fn solid_triangle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("solid_triangle");
    let clip = ClipRect::from_size(WIDTH, HEIGHT);

    for size in [16.0f32, 64.0, 200.0] {
        group.bench_with_input(BenchmarkId::new("flat", size as u32), &size, |b, &size| {
            let mut surface = PixelBuffer::new(WIDTH, HEIGHT);
            let points = [
                Point2::new(10.0, 10.0),
                Point2::new(10.0, 10.0 + size),
                Point2::new(10.0 + size, 10.0),
            ];
            b.iter(|| {
                draw_triangle(
                    &mut surface,
                    None,
                    black_box(points),
                    [Point2::ZERO; 3],
                    [Color::RED.to_u32(); 3],
                    clip,
                    false,
                );
            });
        });

        group.bench_with_input(BenchmarkId::new("gouraud", size as u32), &size, |b, &size| {
            let mut surface = PixelBuffer::new(WIDTH, HEIGHT);
            let points = [
                Point2::new(10.0, 10.0),
                Point2::new(10.0, 10.0 + size),
                Point2::new(10.0 + size, 10.0),
            ];
            let colors = [
                Color::RED.to_u32(),
                Color::GREEN.to_u32(),
                Color::BLUE.to_u32(),
            ];
            b.iter(|| {
                draw_triangle(
                    &mut surface,
                    None,
                    black_box(points),
                    [Point2::ZERO; 3],
                    colors,
                    clip,
                    false,
                );
            });
        });
    }

    group.finish();
}

fn textured_quad_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("textured_quad");
    let clip = ClipRect::from_size(WIDTH, HEIGHT);
    let texture = checker(64);

    group.bench_function("plain", |b| {
        let mut surface = PixelBuffer::new(WIDTH, HEIGHT);
        b.iter(|| {
            draw_quad(
                &mut surface,
                Some(&texture),
                black_box(quad_points(128.0)),
                QUAD_UVS,
                [Color::WHITE.to_u32(); 4],
                clip,
                false,
            );
        });
    });

    group.bench_function("tinted", |b| {
        let mut surface = PixelBuffer::new(WIDTH, HEIGHT);
        b.iter(|| {
            draw_quad(
                &mut surface,
                Some(&texture),
                black_box(quad_points(128.0)),
                QUAD_UVS,
                [0xC0FF8040; 4],
                clip,
                false,
            );
        });
    });

    group.bench_function("additive", |b| {
        let mut surface = PixelBuffer::new(WIDTH, HEIGHT);
        b.iter(|| {
            draw_quad(
                &mut surface,
                Some(&texture),
                black_box(quad_points(128.0)),
                QUAD_UVS,
                [0x80FFFFFF; 4],
                clip,
                true,
            );
        });
    });

    group.finish();
}

fn blend_benchmark(c: &mut Criterion) {
    c.bench_function("compose_half_alpha", |b| {
        b.iter(|| {
            for i in 0..256u32 {
                black_box(color::compose(black_box(0xFF102030), 0x80000000 | i, false));
            }
        });
    });

    c.bench_function("modulate", |b| {
        b.iter(|| {
            for i in 0..256u32 {
                black_box(color::modulate(black_box(0xFFFFFFFF), 0xFF000000 | (i << 8)));
            }
        });
    });
}

criterion_group!(
    benches,
    solid_triangle_benchmark,
    textured_quad_benchmark,
    blend_benchmark
);
criterion_main!(benches);
