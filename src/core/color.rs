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

//! Packed ARGB colors and pixel operations
//!
//! Every surface stores pixels as packed 32-bit values in `0xAARRGGBB` order:
//! - Bits 0-7: Blue
//! - Bits 8-15: Green
//! - Bits 16-23: Red
//! - Bits 24-31: Alpha
//!
//! The blend helpers operate directly on packed values because they sit in
//! the innermost loop of the span renderer.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color
///
/// # Examples
///
/// ```
/// use pxraster::core::Color;
///
/// let color = Color::from_u32(0x80FF4020);
/// assert_eq!(color.a, 0x80);
/// assert_eq!(color.r, 0xFF);
/// assert_eq!(color.g, 0x40);
/// assert_eq!(color.b, 0x20);
/// assert_eq!(color.to_u32(), 0x80FF4020);
/// ```
///
/// In scene and config files a color is either a hex string (`"#RRGGBB"`,
/// `"AARRGGBB"`) or a packed integer; it serializes back as `"#AARRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ColorValue", into = "String")]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Unpack a `0xAARRGGBB` value
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
            a: (value >> 24) as u8,
        }
    }

    /// Pack into `0xAARRGGBB`
    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Return the same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_u32()
    }
}

/// Accepted serialized forms of a color
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Packed(u32),
    Hex(String),
}

impl TryFrom<ColorValue> for Color {
    type Error = String;

    fn try_from(value: ColorValue) -> Result<Self, Self::Error> {
        match value {
            ColorValue::Packed(packed) => Ok(Color::from_u32(packed)),
            ColorValue::Hex(text) => parse_hex(&text)
                .map(Color::from_u32)
                .ok_or_else(|| format!("invalid color '{}'", text)),
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        format!("#{:08X}", color.to_u32())
    }
}

/// Alpha of a packed color
#[inline(always)]
pub fn alpha(color: u32) -> u32 {
    color >> 24
}

/// Pack four channel values (each already in 0..=255)
#[inline(always)]
pub fn pack(r: u32, g: u32, b: u32, a: u32) -> u32 {
    (a << 24) | (r << 16) | (g << 8) | b
}

#[inline(always)]
fn channel(color: u32, shift: u32) -> u32 {
    (color >> shift) & 0xFF
}

/// Multiply two colors channel by channel (`a * b / 255`, alpha included)
///
/// Modulating by opaque white returns the other color unchanged.
#[inline]
pub fn modulate(a: u32, b: u32) -> u32 {
    let mut out = 0;
    for shift in [0, 8, 16, 24] {
        let value = channel(a, shift) * channel(b, shift) / 255;
        out |= value << shift;
    }
    out
}

/// Scale the color channels by alpha, keeping alpha itself
#[inline]
pub fn premultiply(color: u32) -> u32 {
    let a = alpha(color);
    match a {
        0 => 0,
        255 => color,
        _ => pack(
            channel(color, 16) * a / 255,
            channel(color, 8) * a / 255,
            channel(color, 0) * a / 255,
            a,
        ),
    }
}

/// Linear blend `dest + (src - dest) * alpha / 255` for every channel
#[inline]
pub fn blend(dest: u32, src: u32, alpha: u32) -> u32 {
    let mut out = 0;
    for shift in [0, 8, 16, 24] {
        let d = channel(dest, shift) as i32;
        let s = channel(src, shift) as i32;
        let value = d + (s - d) * alpha as i32 / 255;
        out |= (value as u32) << shift;
    }
    out
}

/// Saturating per-channel addition
#[inline]
pub fn add(dest: u32, src: u32) -> u32 {
    let mut out = 0;
    for shift in [0, 8, 16, 24] {
        let value = (channel(dest, shift) + channel(src, shift)).min(255);
        out |= value << shift;
    }
    out
}

/// Combine a source pixel with a destination pixel
///
/// Returns `None` when the destination must be left untouched (fully
/// transparent source).
///
/// - additive: `dest + premultiply(src)`, saturated
/// - opaque source: overwrite
/// - otherwise: straight alpha blend
#[inline(always)]
pub fn compose(dest: u32, src: u32, additive: bool) -> Option<u32> {
    let a = alpha(src);
    if a == 0 {
        return None;
    }
    if additive {
        return Some(add(dest, premultiply(src)));
    }
    if a == 255 {
        Some(src)
    } else {
        Some(blend(dest, src, a))
    }
}

/// Parse a hex color string (`"AARRGGBB"`, `"RRGGBB"`, optional `#` or `0x`)
///
/// Six-digit colors are treated as opaque.
pub fn parse_hex(text: &str) -> Option<u32> {
    let digits = text
        .trim()
        .trim_start_matches('#')
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    match digits.len() {
        6 => Some(0xFF00_0000 | value),
        8 => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let color = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_u32(), 0x78123456);
        assert_eq!(Color::from_u32(0x78123456), color);
        assert_eq!(pack(0x12, 0x34, 0x56, 0x78), 0x78123456);
    }

    #[test]
    fn test_modulate_by_white_is_identity() {
        let c = 0x80402010;
        assert_eq!(modulate(c, Color::WHITE.to_u32()), c);
        assert_eq!(modulate(Color::WHITE.to_u32(), c), c);
    }

    #[test]
    fn test_modulate_halves() {
        let half = pack(128, 128, 128, 255);
        let out = Color::from_u32(modulate(Color::RED.to_u32(), half));
        assert_eq!(out.r, 128);
        assert_eq!(out.g, 0);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_premultiply() {
        assert_eq!(premultiply(0x00FFFFFF), 0);
        assert_eq!(premultiply(0xFF123456), 0xFF123456);

        let out = Color::from_u32(premultiply(Color::WHITE.with_alpha(51).to_u32()));
        assert_eq!(out.r, 51);
        assert_eq!(out.a, 51);
    }

    #[test]
    fn test_blend_endpoints() {
        let dest = Color::BLUE.to_u32();
        let src = Color::RED.to_u32();
        assert_eq!(blend(dest, src, 0), dest);
        assert_eq!(blend(dest, src, 255), src);

        let mid = Color::from_u32(blend(dest, src, 128));
        assert_eq!(mid.r, 128);
        assert_eq!(mid.b, 127);
    }

    #[test]
    fn test_add_saturates() {
        let out = Color::from_u32(add(pack(200, 10, 0, 255), pack(100, 10, 0, 255)));
        assert_eq!(out.r, 255);
        assert_eq!(out.g, 20);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_compose_rules() {
        let dest = Color::BLACK.to_u32();
        assert_eq!(compose(dest, 0x00FF0000, false), None);
        assert_eq!(compose(dest, 0x00FF0000, true), None);
        assert_eq!(compose(dest, 0xFFFF0000, false), Some(0xFFFF0000));

        let half = compose(dest, 0x80FF0000, false).map(Color::from_u32);
        assert_eq!(half.map(|c| c.r), Some(128));

        let added = compose(pack(10, 10, 10, 255), 0xFF102030, true).map(Color::from_u32);
        assert_eq!(added, Some(Color::rgba(0x1A, 0x2A, 0x3A, 255)));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("FF00FF00"), Some(0xFF00FF00));
        assert_eq!(parse_hex("#00FF00"), Some(0xFF00FF00));
        assert_eq!(parse_hex("0x80102030"), Some(0x80102030));
        assert_eq!(parse_hex("12345"), None);
        assert_eq!(parse_hex("zzzzzz"), None);
        assert_eq!(parse_hex("+1234567"), None);
    }

    #[test]
    fn test_color_serde_forms() {
        let from_hex: Color = serde_json::from_str("\"#FF8000\"").unwrap();
        assert_eq!(from_hex, Color::rgb(0xFF, 0x80, 0x00));

        let from_int: Color = serde_json::from_str("2164260863").unwrap();
        assert_eq!(from_int, Color::WHITE.with_alpha(0x80));

        assert_eq!(serde_json::to_string(&from_hex).unwrap(), "\"#FFFF8000\"");
        assert!(serde_json::from_str::<Color>("\"orange\"").is_err());
    }
}
