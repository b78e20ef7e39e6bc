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

//! Edge walkers
//!
//! Two walkers start at the topmost vertex and follow the triangle outline
//! downwards: the left one in increasing vertex order, the right one in
//! decreasing order. Each tracks the edge it is currently on (a "section")
//! and how many scanlines remain before it must move to the next edge.
//!
//! Only the left walker carries texture coordinates and colors; the span
//! renderer derives the rest of the row from the horizontal gradients.
//!
//! # Section Recompute
//!
//! When a section runs out of scanlines the walker steps to the next vertex
//! and computes the new edge's slope. Edges that do not cross a pixel row
//! are skipped. Reaching the bottom vertex ends the walk, and with it the
//! whole triangle.

use super::fixed::{edge_delta, fixed_ceil16, saturate_fixed, Fixed, FIXED_SHIFT};
use super::setup::{RasterVertex, Triangle};

/// Which side of the triangle a walker follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline(always)]
    fn next_vertex(self, index: usize) -> usize {
        match self {
            Side::Left => (index + 1) % 3,
            Side::Right => (index + 2) % 3,
        }
    }
}

/// Interpolated values carried down the left edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeAttributes {
    pub u: Fixed,
    pub v: Fixed,
    pub color: [Fixed; 4],
}

/// Active edge of one walker
#[derive(Debug, Clone, Copy)]
pub struct Section {
    side: Side,
    /// Lower endpoint of the current edge
    vertex: usize,
    /// Vertex where the walk ends
    bottom: usize,
    /// Edge X at the current scanline (16.16, half-pixel space)
    pub x: Fixed,
    /// X change per scanline
    pub dx: Fixed,
    /// Scanlines left on this edge
    pub height: i32,
    /// Attributes at the edge (left walker only)
    pub attrs: EdgeAttributes,
    /// Attribute change per scanline
    pub attr_deltas: EdgeAttributes,
    track_uv: bool,
    track_color: bool,
}

impl Section {
    /// Place a walker on the top vertex of `tri`
    ///
    /// The walker starts with no active edge; call [`Section::advance`]
    /// before reading it.
    pub fn new(side: Side, tri: &Triangle) -> Self {
        let carries_attrs = side == Side::Left;
        Self {
            side,
            vertex: tri.top_vertex(),
            bottom: tri.bottom_vertex(),
            x: 0,
            dx: 0,
            height: 0,
            attrs: EdgeAttributes::default(),
            attr_deltas: EdgeAttributes::default(),
            track_uv: carries_attrs && tri.settings.textured(),
            track_color: carries_attrs && tri.settings.colored(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn vertex(&self) -> usize {
        self.vertex
    }

    /// Move to the next edge that spans at least one scanline
    ///
    /// Does nothing while the current edge still has scanlines left.
    ///
    /// # Returns
    ///
    /// `false` once the walker has reached the bottom vertex.
    pub fn advance(&mut self, tri: &Triangle) -> bool {
        while self.height <= 0 {
            if self.vertex == self.bottom {
                return false;
            }

            let prev = self.vertex;
            let next = self.side.next_vertex(prev);
            self.vertex = next;
            self.recompute(&tri.vertices[prev], &tri.vertices[next]);
        }
        true
    }

    /// Step one scanline down
    ///
    /// # Returns
    ///
    /// `false` when the walk is over.
    pub fn next_row(&mut self, tri: &Triangle) -> bool {
        self.height -= 1;
        if self.height <= 0 {
            return self.advance(tri);
        }

        self.x = self.x.wrapping_add(self.dx);
        if self.track_uv {
            self.attrs.u = self.attrs.u.wrapping_add(self.attr_deltas.u);
            self.attrs.v = self.attrs.v.wrapping_add(self.attr_deltas.v);
        }
        if self.track_color {
            for (value, delta) in self.attrs.color.iter_mut().zip(self.attr_deltas.color) {
                *value = value.wrapping_add(delta);
            }
        }
        true
    }

    /// Set up the edge from `start` down to `end`
    fn recompute(&mut self, start: &RasterVertex, end: &RasterVertex) {
        let first_row = fixed_ceil16(start.y);
        self.height = fixed_ceil16(end.y) - first_row;
        if self.height <= 0 {
            return;
        }

        // Vertices may sit at opposite ends of the Fixed range, so the
        // edge is set up in i64 and narrowed once per value
        let dy = end.y as i64 - start.y as i64;
        let scanlines = self.height;

        // Distance from the vertex down to the first pixel row it covers
        let prestep = ((first_row as i64) << FIXED_SHIFT) - start.y as i64;

        // Returns (per-row delta, value at the first row). The value is
        // taken from the wide delta, so a one-row edge steeper than the
        // Fixed range still lands where it crosses the row.
        let walk = |from: Fixed, to: Fixed| {
            let delta = edge_delta(to as i64 - from as i64, dy, scanlines);
            let value = from as i64 + ((prestep * delta) >> FIXED_SHIFT);
            (saturate_fixed(delta), saturate_fixed(value))
        };

        (self.dx, self.x) = walk(start.x, end.x);

        if self.track_uv {
            (self.attr_deltas.u, self.attrs.u) = walk(start.u, end.u);
            (self.attr_deltas.v, self.attrs.v) = walk(start.v, end.v);
        }

        if self.track_color {
            for i in 0..4 {
                (self.attr_deltas.color[i], self.attrs.color[i]) =
                    walk(start.color[i], end.color[i]);
            }
        }
    }
}
