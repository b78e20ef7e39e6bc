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

//! Core rasterization components
//!
//! This module contains:
//! - Packed ARGB colors and pixel blend operations
//! - Pixel surfaces (the read/write boundary of the rasterizer)
//! - The fixed-point triangle rasterizer
//! - Scene descriptions and render configuration built on top of it

pub mod color;
pub mod config;
pub mod error;
pub mod raster;
pub mod scene;
pub mod surface;
pub mod types;

// Re-export commonly used types
pub use color::Color;
pub use config::RenderConfig;
pub use error::{RasterError, Result};
pub use scene::Scene;
pub use surface::{PixelBuffer, Surface, SurfaceMut};
pub use types::{ClipRect, Point2, RasterFlags, RasterSettings};
