// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawing routes and nodes onto character surfaces.
//!
//! Everything draws through the [`Surface`] capability so geometry can be checked against a
//! recording fake. [`Canvas`] is the concrete surface used by both the headless text renderer
//! and the TUI.

use std::fmt;

pub mod diagram;
pub mod edge;
pub mod node;
#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod text;

pub use diagram::{render_diagram, render_diagram_text};
pub use edge::draw_route;
pub use node::draw_node;

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

/// A visible rectangle of character cells that accepts draw commands.
///
/// Coordinates are screen cells relative to the surface origin. Implementations clip anything
/// that falls outside `width() x height()`; callers never need to pre-trim.
pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Draws `length` copies of `glyph` from `(x, y)` rightward.
    fn draw_horizontal(&mut self, x: usize, y: usize, glyph: char, length: usize);

    /// Draws `length` copies of `glyph` from `(x, y)` downward.
    fn draw_vertical(&mut self, x: usize, y: usize, glyph: char, length: usize);

    fn draw_glyph(&mut self, x: usize, y: usize, glyph: char);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    match ch {
        UNICODE_BOX_HORIZONTAL => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT)),
        UNICODE_BOX_VERTICAL => Some(BoxEdges::UP.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::DOWN)),
        UNICODE_BOX_BOTTOM_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::UP)),
        UNICODE_BOX_BOTTOM_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::UP)),
        UNICODE_BOX_TEE_RIGHT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::RIGHT)),
        UNICODE_BOX_TEE_LEFT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::LEFT)),
        UNICODE_BOX_TEE_DOWN => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::DOWN)),
        UNICODE_BOX_TEE_UP => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::UP)),
        UNICODE_BOX_CROSS => Some(
            BoxEdges::LEFT
                .union(BoxEdges::RIGHT)
                .union(BoxEdges::UP)
                .union(BoxEdges::DOWN),
        ),
        _ => None,
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        0 => ' ',
        // Straight segments (including endpoints).
        1..=3 => UNICODE_BOX_HORIZONTAL,
        4 | 8 | 12 => UNICODE_BOX_VERTICAL,
        // Corners.
        10 => UNICODE_BOX_TOP_LEFT,
        9 => UNICODE_BOX_TOP_RIGHT,
        6 => UNICODE_BOX_BOTTOM_LEFT,
        5 => UNICODE_BOX_BOTTOM_RIGHT,
        // Tees.
        14 => UNICODE_BOX_TEE_RIGHT,
        13 => UNICODE_BOX_TEE_LEFT,
        11 => UNICODE_BOX_TEE_DOWN,
        7 => UNICODE_BOX_TEE_UP,
        _ => UNICODE_BOX_CROSS,
    }
}

/// A fixed-size character grid.
///
/// Box-drawing glyphs merge: an edge running into a node border renders as a tee, a corner
/// drawn over the end of a run keeps only the arms that actually connect. Any other character
/// overwrites the cell and clears its box arms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    box_edges: Vec<BoxEdges>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    /// Creates a new canvas filled with `fill`.
    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
            box_edges: vec![BoxEdges::NONE; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the character at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.render_at(x, y, idx))
    }

    /// Sets the character at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.write_cell(idx, ch);
        Ok(())
    }

    /// Returns the rendered rows, one `String` per line.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.render_at(x, y, (y * self.width) + x))
                    .collect()
            })
            .collect()
    }

    fn write_cell(&mut self, idx: usize, ch: char) {
        if let Some(edges) = box_edges_from_char(ch) {
            self.box_edges[idx] = self.box_edges[idx].union(edges);
        } else {
            self.cells[idx] = ch;
            self.box_edges[idx] = BoxEdges::NONE;
        }
    }

    fn put(&mut self, x: usize, y: usize, ch: char) {
        if self.in_bounds(x, y) {
            let idx = (y * self.width) + x;
            self.write_cell(idx, ch);
        }
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y * self.width) + x)
    }

    fn render_at(&self, x: usize, y: usize, idx: usize) -> char {
        let edges = self.box_edges[idx];
        if edges.is_empty() {
            return self.cells[idx];
        }

        let connected = self.connected_box_edges(x, y, edges);
        let edges_for_render = if connected.is_empty() {
            edges
        } else {
            connected
        };
        box_char_from_edges(edges_for_render)
    }

    fn connected_box_edges(&self, x: usize, y: usize, edges: BoxEdges) -> BoxEdges {
        let mut connected = BoxEdges::NONE;

        if edges.contains(BoxEdges::LEFT) && x > 0 {
            let left_idx = (y * self.width) + (x - 1);
            if self.box_edges[left_idx].contains(BoxEdges::RIGHT) {
                connected = connected.union(BoxEdges::LEFT);
            }
        }

        if edges.contains(BoxEdges::RIGHT) && (x + 1) < self.width {
            let right_idx = (y * self.width) + (x + 1);
            if self.box_edges[right_idx].contains(BoxEdges::LEFT) {
                connected = connected.union(BoxEdges::RIGHT);
            }
        }

        if edges.contains(BoxEdges::UP) && y > 0 {
            let up_idx = ((y - 1) * self.width) + x;
            if self.box_edges[up_idx].contains(BoxEdges::DOWN) {
                connected = connected.union(BoxEdges::UP);
            }
        }

        if edges.contains(BoxEdges::DOWN) && (y + 1) < self.height {
            let down_idx = ((y + 1) * self.width) + x;
            if self.box_edges[down_idx].contains(BoxEdges::UP) {
                connected = connected.union(BoxEdges::DOWN);
            }
        }

        connected
    }
}

impl Surface for Canvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn draw_horizontal(&mut self, x: usize, y: usize, glyph: char, length: usize) {
        if y >= self.height {
            return;
        }
        let end = x.saturating_add(length).min(self.width);
        for cx in x..end {
            self.put(cx, y, glyph);
        }
    }

    fn draw_vertical(&mut self, x: usize, y: usize, glyph: char, length: usize) {
        if x >= self.width {
            return;
        }
        let end = y.saturating_add(length).min(self.height);
        for cy in y..end {
            self.put(x, cy, glyph);
        }
    }

    fn draw_glyph(&mut self, x: usize, y: usize, glyph: char) {
        self.put(x, y, glyph);
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = (y * self.width) + x;
                let ch = self.render_at(x, y, idx);
                f.write_char(ch)?;
            }

            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

#[cfg(test)]
mod tests {
    use super::{
        Canvas, CanvasError, Surface, UNICODE_BOX_BOTTOM_LEFT, UNICODE_BOX_HORIZONTAL,
        UNICODE_BOX_TOP_RIGHT, UNICODE_BOX_VERTICAL,
    };

    #[test]
    fn set_and_get_in_bounds() {
        let mut c = Canvas::new_filled(3, 2, '.').expect("canvas");
        assert_eq!(c.get(1, 0).unwrap(), '.');
        c.set(1, 0, 'X').unwrap();
        assert_eq!(c.get(1, 0).unwrap(), 'X');
        assert_eq!(c.to_string(), ".X.\n...");
    }

    #[test]
    fn set_out_of_bounds_errors() {
        let mut c = Canvas::new(2, 2).expect("canvas");
        let err = c.set(2, 0, 'X').unwrap_err();
        assert_eq!(
            err,
            CanvasError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            }
        );
    }

    #[test]
    fn rejects_area_overflow() {
        let err = Canvas::new_filled(usize::MAX, 2, '.').unwrap_err();
        assert_eq!(
            err,
            CanvasError::AreaOverflow {
                width: usize::MAX,
                height: 2
            }
        );
    }

    #[test]
    fn surface_runs_clip_at_the_edges() {
        let mut c = Canvas::new_filled(5, 3, '.').expect("canvas");
        c.draw_horizontal(3, 1, UNICODE_BOX_HORIZONTAL, 10);
        c.draw_vertical(1, 2, UNICODE_BOX_VERTICAL, 4);
        c.draw_horizontal(0, 7, UNICODE_BOX_HORIZONTAL, 2);
        c.draw_glyph(9, 9, 'X');
        assert_eq!(c.to_string(), ".....\n...──\n.│...");
    }

    #[test]
    fn corner_over_run_end_keeps_only_connected_arms() {
        let mut c = Canvas::new_filled(5, 5, '.').expect("canvas");
        c.draw_horizontal(1, 2, UNICODE_BOX_HORIZONTAL, 3);
        c.draw_glyph(1, 2, UNICODE_BOX_BOTTOM_LEFT);
        c.draw_glyph(4, 2, UNICODE_BOX_TOP_RIGHT);
        c.draw_vertical(1, 0, UNICODE_BOX_VERTICAL, 2);
        c.draw_vertical(4, 3, UNICODE_BOX_VERTICAL, 2);
        assert_eq!(c.to_string(), ".│...\n.│...\n.└──┐\n....│\n....│");
    }

    #[test]
    fn run_into_border_merges_as_tee() {
        let mut c = Canvas::new_filled(5, 3, '.').expect("canvas");
        c.draw_vertical(2, 0, UNICODE_BOX_VERTICAL, 3);
        c.draw_horizontal(2, 1, UNICODE_BOX_HORIZONTAL, 3);
        assert_eq!(c.to_string(), "..│..\n..├──\n..│..");
    }

    #[test]
    fn plain_characters_erase_box_arms() {
        let mut c = Canvas::new_filled(3, 1, '.').expect("canvas");
        c.draw_horizontal(0, 0, UNICODE_BOX_HORIZONTAL, 3);
        c.draw_glyph(1, 0, ' ');
        assert_eq!(c.lines(), vec!["─ ─".to_owned()]);
    }
}
