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

//! Software triangle rasterizer library
//!
//! This library provides a span-based triangle filler for 32-bit ARGB pixel
//! surfaces, with fixed-point edge walking, Gouraud color interpolation,
//! nearest-neighbor texture mapping and alpha/additive blending.
//!
//! # Example
//!
//! ```
//! use pxraster::core::raster::draw_triangle;
//! use pxraster::core::{ClipRect, Color, PixelBuffer, Point2};
//!
//! let mut surface = PixelBuffer::new(32, 32);
//! let clip = ClipRect::from_size(32, 32);
//!
//! draw_triangle(
//!     &mut surface,
//!     None,
//!     [Point2::new(0.0, 0.0), Point2::new(0.0, 10.0), Point2::new(10.0, 0.0)],
//!     [Point2::ZERO; 3],
//!     [Color::RED.to_u32(); 3],
//!     clip,
//!     false,
//! );
//!
//! assert_eq!(surface.pixel(1, 1), Some(Color::RED.to_u32()));
//! ```

pub mod core;
