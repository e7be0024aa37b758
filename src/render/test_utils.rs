// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Surface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DrawCall {
    Horizontal {
        x: usize,
        y: usize,
        glyph: char,
        length: usize,
    },
    Vertical {
        x: usize,
        y: usize,
        glyph: char,
        length: usize,
    },
    Glyph {
        x: usize,
        y: usize,
        glyph: char,
    },
}

/// A surface that only records what was asked of it.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSurface {
    width: usize,
    height: usize,
    pub(crate) calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn draw_horizontal(&mut self, x: usize, y: usize, glyph: char, length: usize) {
        self.calls.push(DrawCall::Horizontal {
            x,
            y,
            glyph,
            length,
        });
    }

    fn draw_vertical(&mut self, x: usize, y: usize, glyph: char, length: usize) {
        self.calls.push(DrawCall::Vertical {
            x,
            y,
            glyph,
            length,
        });
    }

    fn draw_glyph(&mut self, x: usize, y: usize, glyph: char) {
        self.calls.push(DrawCall::Glyph { x, y, glyph });
    }
}
