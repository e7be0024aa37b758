// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Diagram;
use crate::ui::Offset;

use super::edge::draw_route;
use super::node::draw_node;
use super::text::canvas_to_string_trimmed;
use super::{Canvas, CanvasError, Surface};

/// Draws one frame of `diagram`: every edge first, then every node on top.
///
/// Routing resets the connected markers of each edge's endpoints, hence `&mut`.
pub fn render_diagram<S: Surface + ?Sized>(surface: &mut S, diagram: &mut Diagram, offset: Offset) {
    for route in diagram.routes() {
        draw_route(surface, &route, offset);
    }
    for node in diagram.nodes() {
        draw_node(surface, node, offset);
    }
}

/// Renders a `width x height` view of `diagram` as text with trailing blanks trimmed.
pub fn render_diagram_text(
    diagram: &mut Diagram,
    offset: Offset,
    width: usize,
    height: usize,
) -> Result<String, CanvasError> {
    let mut canvas = Canvas::new(width, height)?;
    render_diagram(&mut canvas, diagram, offset);
    Ok(canvas_to_string_trimmed(&canvas))
}
