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

//! Render configuration
//!
//! A render needs a target size, a background color and optionally a clip
//! rectangle. Values are resolved in layers, each overriding the previous:
//!
//! 1. Built-in defaults (320x240, opaque black, no extra clip)
//! 2. The `[canvas]` table of a scene file (or a standalone TOML file)
//! 3. Environment variables `PXRASTER_WIDTH`, `PXRASTER_HEIGHT`,
//!    `PXRASTER_BACKGROUND`
//! 4. Command-line flags (applied by the binary)
//!
//! # Example
//!
//! ```
//! use pxraster::core::RenderConfig;
//!
//! let config = RenderConfig::from_toml_str("width = 64\nbackground = \"#202020\"").unwrap();
//! assert_eq!((config.width, config.height), (64, 240));
//! assert_eq!(config.background.to_u32(), 0xFF202020);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::color::{parse_hex, Color};
use super::error::{RasterError, Result};
use super::types::ClipRect;

pub const DEFAULT_WIDTH: u32 = 320;
pub const DEFAULT_HEIGHT: u32 = 240;

/// Largest accepted surface dimension
///
/// Keeps every pixel coordinate well inside the 16.16 range of the
/// rasterizer.
pub const MAX_DIMENSION: u32 = 16384;

pub const ENV_WIDTH: &str = "PXRASTER_WIDTH";
pub const ENV_HEIGHT: &str = "PXRASTER_HEIGHT";
pub const ENV_BACKGROUND: &str = "PXRASTER_BACKGROUND";

/// Target surface settings for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Color the surface is cleared to before drawing
    pub background: Color,
    /// Clip applied to every primitive (intersected with the surface)
    pub clip: Option<ClipRect>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Color::BLACK,
            clip: None,
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from TOML text
    ///
    /// Missing keys keep their defaults. The result is validated.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RenderConfig =
            toml::from_str(text).map_err(|e| RasterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading render config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Apply `PXRASTER_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Used by [`RenderConfig::apply_env`]; takes a closure so the layering
    /// can be exercised without touching the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_WIDTH) {
            self.width = parse_dimension(ENV_WIDTH, &value)?;
        }
        if let Some(value) = lookup(ENV_HEIGHT) {
            self.height = parse_dimension(ENV_HEIGHT, &value)?;
        }
        if let Some(value) = lookup(ENV_BACKGROUND) {
            self.background = parse_color(ENV_BACKGROUND, &value)?;
        }
        self.validate()
    }

    /// Check that the surface size is usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(RasterError::Config(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_DIMENSION, value
                )));
            }
        }
        Ok(())
    }

    /// Effective clip rectangle: the configured clip trimmed to the surface
    pub fn clip_rect(&self) -> ClipRect {
        let full = ClipRect::from_size(self.width, self.height);
        self.clip.map_or(full, |clip| clip.intersect(&full))
    }
}

/// Parse a positive dimension from a string
pub fn parse_dimension(name: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| RasterError::Config(format!("{}: invalid size '{}': {}", name, value, e)))
}

/// Parse a hex color from a string
pub fn parse_color(name: &str, value: &str) -> Result<Color> {
    parse_hex(value)
        .map(Color::from_u32)
        .ok_or_else(|| RasterError::Config(format!("{}: invalid color '{}'", name, value)))
}
