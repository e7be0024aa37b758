// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use crate::render::{
    UNICODE_BOX_BOTTOM_LEFT, UNICODE_BOX_BOTTOM_RIGHT, UNICODE_BOX_TOP_LEFT, UNICODE_BOX_TOP_RIGHT,
};

/// The four 90° turn glyphs, named after the box corner they draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerKind {
    /// `┘`: joins up and left.
    BottomRight,
    /// `┌`: joins right and down.
    TopLeft,
    /// `└`: joins up and right.
    BottomLeft,
    /// `┐`: joins left and down.
    TopRight,
}

impl CornerKind {
    pub fn glyph(self) -> char {
        match self {
            Self::BottomRight => UNICODE_BOX_BOTTOM_RIGHT,
            Self::TopLeft => UNICODE_BOX_TOP_LEFT,
            Self::BottomLeft => UNICODE_BOX_BOTTOM_LEFT,
            Self::TopRight => UNICODE_BOX_TOP_RIGHT,
        }
    }

    /// The corner reflected through the center point.
    pub const fn opposite(self) -> Self {
        match self {
            Self::BottomRight => Self::TopLeft,
            Self::TopLeft => Self::BottomRight,
            Self::BottomLeft => Self::TopRight,
            Self::TopRight => Self::BottomLeft,
        }
    }
}

/// The two turns of a kinked connection, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerPair {
    pub first: CornerKind,
    pub second: CornerKind,
}

impl CornerPair {
    /// A kink turns once and then turns back, so the second corner mirrors the first.
    const fn turning(first: CornerKind) -> Self {
        Self {
            first,
            second: first.opposite(),
        }
    }
}

/// Corners for a vertically biased route, keyed on the top node's column relative to the
/// bottom node's.
pub(crate) fn vertical_corners(top_center_x: i32, bottom_center_x: i32) -> Option<CornerPair> {
    match top_center_x.cmp(&bottom_center_x) {
        Ordering::Equal => None,
        Ordering::Greater => Some(CornerPair::turning(CornerKind::BottomRight)),
        Ordering::Less => Some(CornerPair::turning(CornerKind::BottomLeft)),
    }
}

/// Corners for a horizontally biased route, keyed on the left node's row relative to the
/// right node's.
pub(crate) fn horizontal_corners(left_center_y: i32, right_center_y: i32) -> Option<CornerPair> {
    match left_center_y.cmp(&right_center_y) {
        Ordering::Equal => None,
        Ordering::Greater => Some(CornerPair::turning(CornerKind::BottomRight)),
        Ordering::Less => Some(CornerPair::turning(CornerKind::TopRight)),
    }
}
