// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viewport and cursor state shared by the renderer and the TUI.
//!
//! World coordinates are where nodes live; screen coordinates are cells of the visible area.
//! `world = screen + offset`.

/// How far the viewport has been panned, in world cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_screen(self, world_x: i32, world_y: i32) -> (i32, i32) {
        (world_x.saturating_sub(self.x), world_y.saturating_sub(self.y))
    }

    pub fn to_world(self, screen_x: i32, screen_y: i32) -> (i32, i32) {
        (screen_x.saturating_add(self.x), screen_y.saturating_add(self.y))
    }

    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }
}

/// The editing cursor, in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
    pub grab: bool,
}

impl Cursor {
    pub const SYMBOL: &'static str = "+";
    pub const GRAB_SYMBOL: &'static str = "#";

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, grab: false }
    }

    pub fn symbol(&self) -> &'static str {
        if self.grab {
            Self::GRAB_SYMBOL
        } else {
            Self::SYMBOL
        }
    }

    pub fn toggle_grab(&mut self) {
        self.grab = !self.grab;
    }

    /// Moves the cursor by `(dx, dy)` inside a `width x height` view.
    ///
    /// Whatever part of the move would leave the view pans `offset` instead, so the cursor stays
    /// visible and keeps pointing at the same relative world position.
    pub fn step(&mut self, dx: i32, dy: i32, width: i32, height: i32, offset: &mut Offset) {
        let (x, pan_x) = step_axis(self.x, dx, width);
        let (y, pan_y) = step_axis(self.y, dy, height);
        self.x = x;
        self.y = y;
        offset.pan(pan_x, pan_y);
    }

    /// Pulls the cursor back inside the view after a resize.
    pub fn clamp_to(&mut self, width: i32, height: i32) {
        self.x = self.x.clamp(0, (width - 1).max(0));
        self.y = self.y.clamp(0, (height - 1).max(0));
    }
}

fn step_axis(pos: i32, delta: i32, extent: i32) -> (i32, i32) {
    let max = (extent - 1).max(0);
    let target = pos + delta;
    let clamped = target.clamp(0, max);
    (clamped, target - clamped)
}

/// Heads-up text with the visible world range and the cursor position.
pub fn hud_text(offset: Offset, cursor: Cursor, width: i32, height: i32) -> String {
    let pan_x = format!("[{},{}]", offset.x, width + offset.x);
    let pan_y = format!("[{}, {}]", offset.y, height + offset.y);
    let cursor_x = format!("{}/{}", cursor.x, width);
    let cursor_y = format!("{}/{}", cursor.y, height);
    format!(" pan: ({pan_x}, {pan_y}) cursor: ({cursor_x}, {cursor_y})")
}

#[cfg(test)]
mod tests {
    use super::{hud_text, Cursor, Offset};

    #[test]
    fn offset_maps_between_world_and_screen() {
        let offset = Offset::new(10, -4);
        assert_eq!(offset.to_screen(12, 0), (2, 4));
        assert_eq!(offset.to_world(2, 4), (12, 0));
    }

    #[test]
    fn cursor_pans_when_pushed_past_the_edge() {
        let mut offset = Offset::default();
        let mut cursor = Cursor::new(1, 8);

        cursor.step(-3, 0, 20, 10, &mut offset);
        assert_eq!((cursor.x, cursor.y), (0, 8));
        assert_eq!(offset, Offset::new(-2, 0));

        cursor.step(0, 5, 20, 10, &mut offset);
        assert_eq!((cursor.x, cursor.y), (0, 9));
        assert_eq!(offset, Offset::new(-2, 4));
    }

    #[test]
    fn clamp_pulls_cursor_into_a_smaller_view() {
        let mut cursor = Cursor::new(50, 30);
        cursor.clamp_to(20, 10);
        assert_eq!((cursor.x, cursor.y), (19, 9));
    }

    #[test]
    fn grab_switches_symbol() {
        let mut cursor = Cursor::new(0, 0);
        assert_eq!(cursor.symbol(), Cursor::SYMBOL);
        cursor.toggle_grab();
        assert_eq!(cursor.symbol(), Cursor::GRAB_SYMBOL);
    }

    #[test]
    fn hud_reports_pan_range_and_cursor() {
        let text = hud_text(Offset::new(5, 2), Cursor::new(3, 4), 80, 24);
        assert_eq!(text, " pan: ([5,85], [2, 26]) cursor: (3/80, 4/24)");
    }
}
