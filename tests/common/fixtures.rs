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

//! Test fixtures for scene rendering

use pxraster::core::{Color, PixelBuffer};
use std::path::{Path, PathBuf};

/// Texture where every texel has a distinct opaque color
#[allow(dead_code)]
pub fn pattern_texture(width: u32, height: u32) -> PixelBuffer {
    let mut texture = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let color = Color::rgb((x * 29) as u8, (y * 31) as u8, ((x ^ y) * 7) as u8);
            texture.set_pixel(x, y, color.to_u32());
        }
    }
    texture
}

/// Write a scene file into `dir`
#[allow(dead_code)]
pub fn write_scene(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write scene file");
    path
}

/// Save a texture as PNG into `dir`
#[allow(dead_code)]
pub fn write_png(dir: &Path, name: &str, texture: &PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    texture.save_png(&path).expect("Failed to write PNG");
    path
}
