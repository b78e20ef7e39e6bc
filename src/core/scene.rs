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

//! Scene descriptions
//!
//! A scene is a list of textured or Gouraud-shaded triangles and quads,
//! described in TOML or JSON and rendered through the rasterizer onto a
//! fresh [`PixelBuffer`].
//!
//! # Format
//!
//! ```toml
//! [canvas]
//! width = 64
//! height = 64
//! background = "#203040"
//!
//! [textures.bricks]
//! path = "bricks.png"          # relative to the scene file
//!
//! [textures.board.checker]
//! size = [16, 16]
//! cell = 4
//! colors = ["#FFFFFF", "#000000"]
//!
//! [[triangles]]
//! points = [[4, 4], [60, 10], [20, 58]]
//! colors = ["#FF0000", "#00FF00", "#0000FF"]
//!
//! [[quads]]
//! points = [[8, 8], [40, 8], [40, 40], [8, 40]]
//! texture = "board"
//! colors = "#80FFFFFF"
//! additive = false
//! clip = { left = 0, top = 0, right = 32, bottom = 64 }
//! ```
//!
//! Triangles are drawn first, then quads, each in file order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::config::{RenderConfig, MAX_DIMENSION};
use super::error::{RasterError, Result};
use super::raster::{draw_quad, draw_triangle};
use super::surface::{PixelBuffer, Surface};
use super::types::{ClipRect, Point2};

/// Texture coordinates used when a triangle gives none
pub const DEFAULT_TRIANGLE_UVS: [Point2; 3] = [
    Point2::new(0.0, 0.0),
    Point2::new(1.0, 0.0),
    Point2::new(0.0, 1.0),
];

/// Texture coordinates used when a quad gives none (whole texture)
pub const DEFAULT_QUAD_UVS: [Point2; 4] = [
    Point2::new(0.0, 0.0),
    Point2::new(1.0, 0.0),
    Point2::new(1.0, 1.0),
    Point2::new(0.0, 1.0),
];

/// Where a named texture comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureSource {
    /// PNG file; relative paths are resolved against the scene directory
    Path(PathBuf),
    /// Procedural checkerboard
    Checker(Checker),
}

/// Two-color checkerboard texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Checker {
    /// Texture size `[width, height]`
    pub size: [u32; 2],
    /// Edge length of one square
    #[serde(default = "Checker::default_cell")]
    pub cell: u32,
    /// Colors of the even and odd squares
    #[serde(default = "Checker::default_colors")]
    pub colors: [Color; 2],
}

impl Checker {
    fn default_cell() -> u32 {
        8
    }

    fn default_colors() -> [Color; 2] {
        [Color::WHITE, Color::BLACK]
    }

    /// Build the texture
    pub fn generate(&self) -> Result<PixelBuffer> {
        let [width, height] = self.size;
        if width == 0 || height == 0 || self.cell == 0 {
            return Err(RasterError::InvalidScene(format!(
                "checker needs a non-zero size and cell, got {}x{} cell {}",
                width, height, self.cell
            )));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(RasterError::InvalidScene(format!(
                "checker size {}x{} exceeds the {} pixel limit",
                width, height, MAX_DIMENSION
            )));
        }

        let colors = self.colors.map(Color::to_u32);
        let mut texture = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let parity = ((x / self.cell) + (y / self.cell)) % 2;
                texture.set_pixel(x, y, colors[parity as usize]);
            }
        }
        Ok(texture)
    }
}

/// Vertex colors of a primitive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexColors {
    /// One color for every vertex
    Uniform(Color),
    /// One color per vertex
    PerVertex(Vec<Color>),
}

impl VertexColors {
    /// Packed colors for an `N`-vertex primitive
    pub fn resolve<const N: usize>(&self) -> Result<[u32; N]> {
        match self {
            VertexColors::Uniform(color) => Ok([color.to_u32(); N]),
            VertexColors::PerVertex(colors) if colors.len() == 1 => Ok([colors[0].to_u32(); N]),
            VertexColors::PerVertex(colors) => {
                let packed: Vec<u32> = colors.iter().map(|c| c.to_u32()).collect();
                packed.try_into().map_err(|v: Vec<u32>| {
                    RasterError::InvalidScene(format!(
                        "expected 1 or {} colors, got {}",
                        N,
                        v.len()
                    ))
                })
            }
        }
    }
}

/// One triangle or quad of a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Primitive<P> {
    /// Screen positions
    pub points: P,
    /// Normalized texture coordinates
    #[serde(default)]
    pub uvs: Option<P>,
    /// Vertex colors (opaque white if omitted)
    #[serde(default)]
    pub colors: Option<VertexColors>,
    /// Name of a texture in the scene's texture table
    #[serde(default)]
    pub texture: Option<String>,
    /// Add instead of alpha blending
    #[serde(default)]
    pub additive: bool,
    /// Per-primitive clip, combined with the canvas clip
    #[serde(default)]
    pub clip: Option<ClipRect>,
}

pub type TriangleDesc = Primitive<[Point2; 3]>;
pub type QuadDesc = Primitive<[Point2; 4]>;

impl<P> Primitive<P> {
    fn packed_colors<const N: usize>(&self) -> Result<[u32; N]> {
        match &self.colors {
            Some(colors) => colors.resolve(),
            None => Ok([Color::WHITE.to_u32(); N]),
        }
    }

    fn clip_within(&self, canvas: ClipRect) -> ClipRect {
        self.clip.map_or(canvas, |clip| clip.intersect(&canvas))
    }
}

/// A renderable scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    /// Canvas settings stored in the file
    pub canvas: Option<RenderConfig>,
    /// Named textures
    pub textures: BTreeMap<String, TextureSource>,
    pub triangles: Vec<TriangleDesc>,
    pub quads: Vec<QuadDesc>,
    /// Directory texture paths are resolved against
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Scene {
    /// Load a `.toml` or `.json` scene file
    ///
    /// Relative texture paths are resolved against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        info!("Loading scene from {}", path.display());

        let scene = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(RasterError::UnsupportedFormat(format!(
                    "{} (expected .toml or .json)",
                    path.display()
                )))
            }
        };

        Ok(scene.with_base_dir(path.parent().unwrap_or_else(|| Path::new("."))))
    }

    /// Parse a TOML scene
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let scene: Scene = toml::from_str(text)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Parse a JSON scene
    pub fn from_json_str(text: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(text)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Resolve relative texture paths against `dir`
    pub fn with_base_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Canvas settings from the file, or the defaults
    pub fn config(&self) -> RenderConfig {
        self.canvas.unwrap_or_default()
    }

    /// Check texture references and color counts
    pub fn validate(&self) -> Result<()> {
        if let Some(canvas) = &self.canvas {
            canvas.validate()?;
        }

        for (i, tri) in self.triangles.iter().enumerate() {
            self.check_primitive(&format!("triangle {}", i), tri, |p| p.packed_colors::<3>())?;
        }
        for (i, quad) in self.quads.iter().enumerate() {
            self.check_primitive(&format!("quad {}", i), quad, |p| p.packed_colors::<4>())?;
        }
        Ok(())
    }

    fn check_primitive<P, F, T>(&self, what: &str, primitive: &Primitive<P>, colors: F) -> Result<()>
    where
        F: Fn(&Primitive<P>) -> Result<T>,
    {
        colors(primitive).map_err(|e| match e {
            RasterError::InvalidScene(msg) => RasterError::InvalidScene(format!("{}: {}", what, msg)),
            other => other,
        })?;

        if let Some(name) = &primitive.texture {
            if !self.textures.contains_key(name) {
                return Err(RasterError::InvalidScene(format!(
                    "{}: unknown texture '{}'",
                    what, name
                )));
            }
        }
        Ok(())
    }

    /// Load or generate every texture the scene declares
    pub fn load_textures(&self) -> Result<BTreeMap<String, PixelBuffer>> {
        let mut textures = BTreeMap::new();
        for (name, source) in &self.textures {
            let texture = match source {
                TextureSource::Path(path) => {
                    let path = match &self.base_dir {
                        Some(dir) if path.is_relative() => dir.join(path),
                        _ => path.clone(),
                    };
                    PixelBuffer::load_png(&path)?
                }
                TextureSource::Checker(checker) => checker.generate()?,
            };
            debug!("Texture '{}': {}x{}", name, texture.width(), texture.height());
            textures.insert(name.clone(), texture);
        }
        Ok(textures)
    }

    /// Render onto a new surface cleared to the configured background
    pub fn render(&self, config: &RenderConfig) -> Result<PixelBuffer> {
        config.validate()?;
        self.validate()?;

        let textures = self.load_textures()?;

        let mut target = PixelBuffer::filled(config.width, config.height, config.background.to_u32());
        let canvas = config.clip_rect();

        for tri in &self.triangles {
            draw_triangle(
                &mut target,
                texture_for(&textures, &tri.texture),
                tri.points,
                tri.uvs.unwrap_or(DEFAULT_TRIANGLE_UVS),
                tri.packed_colors::<3>()?,
                tri.clip_within(canvas),
                tri.additive,
            );
        }

        for quad in &self.quads {
            draw_quad(
                &mut target,
                texture_for(&textures, &quad.texture),
                quad.points,
                quad.uvs.unwrap_or(DEFAULT_QUAD_UVS),
                quad.packed_colors::<4>()?,
                quad.clip_within(canvas),
                quad.additive,
            );
        }

        info!(
            "Rendered {} triangles and {} quads at {}x{}",
            self.triangles.len(),
            self.quads.len(),
            config.width,
            config.height
        );

        Ok(target)
    }
}

fn texture_for<'a>(
    textures: &'a BTreeMap<String, PixelBuffer>,
    name: &Option<String>,
) -> Option<&'a dyn Surface> {
    name.as_ref()
        .and_then(|n| textures.get(n))
        .map(|t| t as &dyn Surface)
}
