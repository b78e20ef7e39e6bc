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

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use pxraster::core::config::{parse_color, parse_dimension};
use pxraster::core::{Color, RenderConfig, Result, Scene};

/// Render a scene file to a PNG image
#[derive(Parser)]
#[command(name = "pxraster")]
#[command(about = "Fixed-point triangle rasterizer", long_about = None)]
struct Args {
    /// Scene description (.toml or .json)
    scene: PathBuf,

    /// Output PNG path
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Render config file (replaces the scene's [canvas] table)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(long, value_parser = |s: &str| parse_dimension("--width", s).map_err(|e| e.to_string()))]
    width: Option<u32>,

    /// Surface height in pixels
    #[arg(long, value_parser = |s: &str| parse_dimension("--height", s).map_err(|e| e.to_string()))]
    height: Option<u32>,

    /// Background color (AARRGGBB or RRGGBB hex)
    #[arg(long, value_parser = |s: &str| parse_color("--background", s).map_err(|e| e.to_string()))]
    background: Option<Color>,
}

fn main() -> Result<()> {
    // Load .env file if present; a missing file is not an error
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("pxraster v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let scene = Scene::load(&args.scene).inspect_err(|e| error!("Failed to load scene: {}", e))?;

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => scene.config(),
    };
    config.apply_env()?;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(background) = args.background {
        config.background = background;
    }
    config.validate()?;

    info!(
        "Rendering {}x{} (background {:08X})",
        config.width,
        config.height,
        config.background.to_u32()
    );

    let surface = scene.render(&config)?;
    surface.save_png(&args.output)?;

    info!("Wrote {}", args.output.display());
    Ok(())
}
