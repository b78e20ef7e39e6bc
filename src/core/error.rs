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

/// Rasterizer error types
///
/// Triangle filling itself never fails; these errors come from the layers
/// around it (scene files, textures, configuration).
use thiserror::Error;

/// Result type for rasterizer operations
pub type Result<T> = std::result::Result<T, RasterError>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Scene parse error: {0}")]
    SceneParse(String),

    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("Unsupported scene format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for RasterError {
    fn from(err: toml::de::Error) -> Self {
        RasterError::SceneParse(err.to_string())
    }
}

impl From<serde_json::Error> for RasterError {
    fn from(err: serde_json::Error) -> Self {
        RasterError::SceneParse(err.to_string())
    }
}
