// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthogonal edge routing.
//!
//! Connects two boxes with at most two straight half-runs, one perpendicular crossbar, and two
//! corner glyphs. The crossbar sits on whichever axis has the shorter span between the node
//! centers; the longer axis carries the half-runs. Routes are pure functions of the current
//! node geometry and are recomputed every frame.

use smallvec::SmallVec;

mod corner;

pub use corner::{CornerKind, CornerPair};

/// Geometry the router needs from a node.
pub trait RouteNode {
    fn center_x(&self) -> i32;
    fn center_y(&self) -> i32;
    fn width(&self) -> i32;
    fn height(&self) -> i32;
}

/// Axis carrying the half-runs of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bias {
    Vertical,
    Horizontal,
}

impl Bias {
    /// Ties, and nodes stacked in the same column, route vertically.
    pub fn for_spans(x_diff: i32, y_diff: i32) -> Self {
        if x_diff == 0 || x_diff <= y_diff {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}

/// One drawable piece of a route, in world coordinates.
///
/// Run lengths can come out zero or negative for tightly packed nodes; those draw nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    HorizontalRun { x: i32, y: i32, length: i32 },
    VerticalRun { x: i32, y: i32, length: i32 },
    Corner { kind: CornerKind, x: i32, y: i32 },
}

impl Segment {
    pub fn is_run(&self) -> bool {
        !matches!(self, Self::Corner { .. })
    }

    pub fn corner_kind(&self) -> Option<CornerKind> {
        match self {
            Self::Corner { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Segments = SmallVec<[Segment; 5]>;

/// The routed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    bias: Bias,
    segments: Segments,
}

impl Route {
    pub fn bias(&self) -> Bias {
        self.bias
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn corners(&self) -> impl Iterator<Item = CornerKind> + '_ {
        self.segments.iter().filter_map(Segment::corner_kind)
    }
}

/// Routes a connection between `source` and `target`.
pub fn route<N: RouteNode + ?Sized>(source: &N, target: &N) -> Route {
    let ends = Ends::new(source, target);
    let x_diff = (ends.right.center_x() - ends.left.center_x()).abs();
    let y_diff = (ends.bottom.center_y() - ends.top.center_y()).abs();

    let bias = Bias::for_spans(x_diff, y_diff);
    let segments = match bias {
        Bias::Vertical => vertical_connection(&ends, x_diff, y_diff),
        Bias::Horizontal => horizontal_connection(&ends, x_diff, y_diff),
    };

    Route { bias, segments }
}

/// The two endpoints ordered on each axis independently.
struct Ends<'a, N: ?Sized> {
    left: &'a N,
    right: &'a N,
    top: &'a N,
    bottom: &'a N,
}

impl<'a, N: RouteNode + ?Sized> Ends<'a, N> {
    fn new(source: &'a N, target: &'a N) -> Self {
        let (left, right) = if source.center_x() < target.center_x() {
            (source, target)
        } else {
            (target, source)
        };
        let (top, bottom) = if source.center_y() < target.center_y() {
            (source, target)
        } else {
            (target, source)
        };
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// Splits `diff` into two halves whose sum is exactly `diff`; the second absorbs the remainder.
pub(crate) fn split_span(diff: i32) -> (i32, i32) {
    let first = diff.div_euclid(2);
    (first, diff - first)
}

fn vertical_connection<N: RouteNode + ?Sized>(
    ends: &Ends<'_, N>,
    x_diff: i32,
    y_diff: i32,
) -> Segments {
    let Ends {
        left,
        right,
        top,
        bottom,
    } = *ends;
    let top_half = top.height() / 2;
    let bottom_half = bottom.height() / 2;

    let (mut y1, mut y2) = split_span(y_diff);
    y1 -= top_half;
    y2 -= bottom_half;

    let corners = corner::vertical_corners(top.center_x(), bottom.center_x());

    let mut segments = Segments::new();

    let crossbar_x = if left.center_x() < right.center_x() {
        left.center_x()
    } else {
        right.center_x() + 1
    };
    segments.push(Segment::HorizontalRun {
        x: crossbar_x,
        y: bottom.center_y() - y2 - bottom_half,
        length: x_diff,
    });

    if let Some(pair) = corners {
        segments.push(Segment::Corner {
            kind: pair.first,
            x: top.center_x(),
            y: top.center_y() + top_half + y1,
        });
        y1 -= 1;
        y2 -= 1;
        segments.push(Segment::Corner {
            kind: pair.second,
            x: bottom.center_x(),
            y: bottom.center_y() - y2 - bottom_half - 1,
        });
    }

    segments.push(Segment::VerticalRun {
        x: top.center_x(),
        y: top.center_y() + top_half + 1,
        length: y1,
    });
    segments.push(Segment::VerticalRun {
        x: bottom.center_x(),
        y: bottom.center_y() - y2 - bottom_half,
        length: y2,
    });

    segments
}

fn horizontal_connection<N: RouteNode + ?Sized>(
    ends: &Ends<'_, N>,
    x_diff: i32,
    y_diff: i32,
) -> Segments {
    let Ends {
        left,
        right,
        top,
        bottom,
    } = *ends;
    let left_half = left.width() / 2;
    let right_half = right.width() / 2;

    let (mut x1, mut x2) = split_span(x_diff);
    x1 -= left_half;
    x2 -= right_half;

    let mut segments = Segments::new();

    segments.push(Segment::HorizontalRun {
        x: left.center_x() + left_half,
        y: left.center_y(),
        length: x1,
    });

    let corners = corner::horizontal_corners(left.center_y(), right.center_y());

    let crossbar_y = if bottom.center_y() < top.center_y() {
        bottom.center_y()
    } else {
        top.center_y() + 1
    };
    segments.push(Segment::VerticalRun {
        x: right.center_x() - x2 - right_half,
        y: crossbar_y,
        length: y_diff,
    });

    if let Some(pair) = corners {
        x2 -= 1;
        segments.push(Segment::Corner {
            kind: pair.first,
            x: left.center_x() + left_half + x1,
            y: left.center_y(),
        });
        segments.push(Segment::Corner {
            kind: pair.second,
            x: right.center_x() - x2 - right_half - 1,
            y: right.center_y(),
        });
    }

    segments.push(Segment::HorizontalRun {
        x: right.center_x() - x2 - right_half,
        y: right.center_y(),
        length: x2,
    });

    segments
}
