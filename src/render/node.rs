// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Node, Side};
use crate::ui::Offset;

use super::text::{text_len, truncate_with_ellipsis};
use super::{
    Surface, UNICODE_BOX_BOTTOM_LEFT, UNICODE_BOX_BOTTOM_RIGHT, UNICODE_BOX_HORIZONTAL,
    UNICODE_BOX_TEE_DOWN, UNICODE_BOX_TEE_LEFT, UNICODE_BOX_TEE_RIGHT, UNICODE_BOX_TEE_UP,
    UNICODE_BOX_TOP_LEFT, UNICODE_BOX_TOP_RIGHT, UNICODE_BOX_VERTICAL,
};

/// Draws a node's outline, blanked interior, centered label, and connected-side tees.
///
/// Unlike routes, nodes are clipped cell by cell: anything off-screen is simply not drawn.
/// Only the part of the box inside the view is visited.
pub fn draw_node<S: Surface + ?Sized>(surface: &mut S, node: &Node, offset: Offset) {
    let (x0, y0) = (node.x(), node.y());
    let (x1, y1) = (node.right(), node.bottom());

    let Some((view_x0, view_x1)) = visible_span(offset.x, surface.width()) else {
        return;
    };
    let Some((view_y0, view_y1)) = visible_span(offset.y, surface.height()) else {
        return;
    };

    let mut cells = Clipped { surface, offset };

    for y in y0.max(view_y0)..=y1.min(view_y1) {
        for x in x0.max(view_x0)..=x1.min(view_x1) {
            let ch = match (x == x0, x == x1, y == y0, y == y1) {
                (true, _, true, _) => UNICODE_BOX_TOP_LEFT,
                (_, true, true, _) => UNICODE_BOX_TOP_RIGHT,
                (true, _, _, true) => UNICODE_BOX_BOTTOM_LEFT,
                (_, true, _, true) => UNICODE_BOX_BOTTOM_RIGHT,
                (_, _, true, _) | (_, _, _, true) => UNICODE_BOX_HORIZONTAL,
                (true, _, _, _) | (_, true, _, _) => UNICODE_BOX_VERTICAL,
                _ => ' ',
            };
            cells.put(x, y, ch);
        }
    }

    draw_label(&mut cells, node);

    let connected = node.connected();
    let (cx, cy) = (node.center_x(), node.center_y());
    if connected.contains(Side::Top) {
        cells.put(cx, y0, UNICODE_BOX_TEE_UP);
    }
    if connected.contains(Side::Bottom) {
        cells.put(cx, y1, UNICODE_BOX_TEE_DOWN);
    }
    if connected.contains(Side::Left) {
        cells.put(x0, cy, UNICODE_BOX_TEE_LEFT);
    }
    if connected.contains(Side::Right) {
        cells.put(x1, cy, UNICODE_BOX_TEE_RIGHT);
    }
}

fn draw_label<S: Surface + ?Sized>(cells: &mut Clipped<'_, S>, node: &Node) {
    // The label needs an interior row and column to live in.
    let inner_width = usize::try_from(node.width() - 1).unwrap_or(0);
    if node.height() < 2 || inner_width == 0 || node.label().is_empty() {
        return;
    }

    let label = truncate_with_ellipsis(node.label(), inner_width);
    let pad = (inner_width - text_len(&label)) / 2;
    let row = node.center_y();
    let start = node.x() + 1 + pad as i32;
    for (i, ch) in label.chars().enumerate() {
        cells.put(start + i as i32, row, ch);
    }
}

/// First and last world coordinate a view of `extent` cells starting at `start` shows.
fn visible_span(start: i32, extent: usize) -> Option<(i32, i32)> {
    if extent == 0 {
        return None;
    }
    let last = i32::try_from(extent - 1).unwrap_or(i32::MAX);
    Some((start, start.saturating_add(last)))
}

struct Clipped<'a, S: ?Sized> {
    surface: &'a mut S,
    offset: Offset,
}

impl<S: Surface + ?Sized> Clipped<'_, S> {
    fn put(&mut self, world_x: i32, world_y: i32, ch: char) {
        let (x, y) = self.offset.to_screen(world_x, world_y);
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x < self.surface.width() && y < self.surface.height() {
            self.surface.draw_glyph(x, y, ch);
        }
    }
}
