// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::route::{Route, Segment};
use crate::ui::Offset;

use super::{Surface, UNICODE_BOX_HORIZONTAL, UNICODE_BOX_VERTICAL};

/// Draws `route` onto `surface`, shifted by the viewport `offset`.
///
/// Run starts are clamped into the visible rectangle on both axes and the run is shortened by
/// however far its start moved along the run axis, so a run entering from off-screen still ends
/// on its world-space endpoint. Corners are drawn only when they are actually visible.
pub fn draw_route<S: Surface + ?Sized>(surface: &mut S, route: &Route, offset: Offset) {
    for segment in route.segments() {
        draw_segment(surface, segment, offset);
    }
}

pub(crate) fn draw_segment<S: Surface + ?Sized>(
    surface: &mut S,
    segment: &Segment,
    offset: Offset,
) {
    let Some(bounds) = Bounds::of(surface) else {
        return;
    };

    match *segment {
        Segment::HorizontalRun { x, y, length } => {
            let (x, y) = offset.to_screen(x, y);
            let (cx, cy) = bounds.clamp(x, y);
            let length = shortened(length, cx, x);
            if length > 0 {
                surface.draw_horizontal(
                    cx as usize,
                    cy as usize,
                    UNICODE_BOX_HORIZONTAL,
                    length as usize,
                );
            }
        }
        Segment::VerticalRun { x, y, length } => {
            let (x, y) = offset.to_screen(x, y);
            let (cx, cy) = bounds.clamp(x, y);
            let length = shortened(length, cy, y);
            if length > 0 {
                surface.draw_vertical(
                    cx as usize,
                    cy as usize,
                    UNICODE_BOX_VERTICAL,
                    length as usize,
                );
            }
        }
        Segment::Corner { kind, x, y } => {
            let (x, y) = offset.to_screen(x, y);
            if bounds.contains(x, y) {
                surface.draw_glyph(x as usize, y as usize, kind.glyph());
            }
        }
    }
}

/// `length` minus the distance a run start moved from `from` to `to`.
fn shortened(length: i32, to: i32, from: i32) -> i32 {
    let moved = i32::try_from(to.abs_diff(from)).unwrap_or(i32::MAX);
    length.saturating_sub(moved)
}

/// Inclusive maximum screen coordinates of a non-empty surface.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    max_x: i32,
    max_y: i32,
}

impl Bounds {
    fn of<S: Surface + ?Sized>(surface: &S) -> Option<Self> {
        let width = i32::try_from(surface.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(surface.height()).unwrap_or(i32::MAX);
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            max_x: width - 1,
            max_y: height - 1,
        })
    }

    fn clamp(self, x: i32, y: i32) -> (i32, i32) {
        (x.clamp(0, self.max_x), y.clamp(0, self.max_y))
    }

    fn contains(self, x: i32, y: i32) -> bool {
        (0..=self.max_x).contains(&x) && (0..=self.max_y).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::draw_segment;
    use crate::render::test_utils::{DrawCall, RecordingSurface};
    use crate::route::{CornerKind, Segment};
    use crate::ui::Offset;

    fn draw(segment: Segment, offset: Offset) -> Vec<DrawCall> {
        let mut surface = RecordingSurface::new(20, 10);
        draw_segment(&mut surface, &segment, offset);
        surface.calls
    }

    #[test]
    fn visible_runs_are_shifted_by_the_offset() {
        let calls = draw(
            Segment::HorizontalRun {
                x: 12,
                y: 7,
                length: 4,
            },
            Offset::new(10, 5),
        );
        assert_eq!(calls, vec![DrawCall::Horizontal {
            x: 2,
            y: 2,
            glyph: '─',
            length: 4
        }]);
    }

    #[test]
    fn non_positive_runs_never_reach_the_surface() {
        for length in [-3, -1, 0] {
            let horizontal = Segment::HorizontalRun { x: 1, y: 1, length };
            let vertical = Segment::VerticalRun { x: 1, y: 1, length };
            assert!(draw(horizontal, Offset::default()).is_empty());
            assert!(draw(vertical, Offset::default()).is_empty());
        }
    }

    #[test]
    fn run_entering_from_the_left_keeps_its_world_endpoint() {
        let calls = draw(
            Segment::HorizontalRun {
                x: -3,
                y: 4,
                length: 8,
            },
            Offset::default(),
        );
        assert_eq!(calls, vec![DrawCall::Horizontal {
            x: 0,
            y: 4,
            glyph: '─',
            length: 5
        }]);
    }

    #[test]
    fn run_entering_from_above_keeps_its_world_endpoint() {
        let calls = draw(
            Segment::VerticalRun {
                x: 3,
                y: 2,
                length: 6,
            },
            Offset::new(0, 4),
        );
        assert_eq!(calls, vec![DrawCall::Vertical {
            x: 3,
            y: 0,
            glyph: '│',
            length: 4
        }]);
    }

    #[test]
    fn run_starting_past_the_right_edge_is_pulled_back_and_shortened() {
        let calls = draw(
            Segment::HorizontalRun {
                x: 25,
                y: 3,
                length: 10,
            },
            Offset::default(),
        );
        assert_eq!(calls, vec![DrawCall::Horizontal {
            x: 19,
            y: 3,
            glyph: '─',
            length: 4
        }]);

        let calls = draw(
            Segment::HorizontalRun {
                x: 30,
                y: 3,
                length: 8,
            },
            Offset::default(),
        );
        assert!(calls.is_empty());
    }

    #[test]
    fn run_starting_below_the_bottom_edge_is_pulled_back_and_shortened() {
        let calls = draw(
            Segment::VerticalRun {
                x: 4,
                y: 12,
                length: 5,
            },
            Offset::default(),
        );
        assert_eq!(calls, vec![DrawCall::Vertical {
            x: 4,
            y: 9,
            glyph: '│',
            length: 2
        }]);

        let calls = draw(
            Segment::VerticalRun {
                x: 4,
                y: 1,
                length: 3,
            },
            Offset::new(0, -20),
        );
        assert!(calls.is_empty());
    }

    #[test]
    fn run_entirely_before_the_view_draws_nothing() {
        let calls = draw(
            Segment::HorizontalRun {
                x: -10,
                y: 2,
                length: 4,
            },
            Offset::default(),
        );
        assert!(calls.is_empty());
    }

    #[test]
    fn cross_axis_is_clamped_not_skipped() {
        let calls = draw(
            Segment::HorizontalRun {
                x: 2,
                y: -6,
                length: 3,
            },
            Offset::default(),
        );
        assert_eq!(calls, vec![DrawCall::Horizontal {
            x: 2,
            y: 0,
            glyph: '─',
            length: 3
        }]);

        let calls = draw(
            Segment::VerticalRun {
                x: 45,
                y: 1,
                length: 2,
            },
            Offset::default(),
        );
        assert_eq!(calls, vec![DrawCall::Vertical {
            x: 19,
            y: 1,
            glyph: '│',
            length: 2
        }]);
    }

    #[test]
    fn corners_outside_the_view_are_skipped() {
        for (x, y) in [(-1, 3), (3, -1), (20, 3), (3, 10)] {
            let calls = draw(
                Segment::Corner {
                    kind: CornerKind::TopLeft,
                    x,
                    y,
                },
                Offset::default(),
            );
            assert!(calls.is_empty(), "corner at ({x},{y}) should be skipped");
        }

        let calls = draw(
            Segment::Corner {
                kind: CornerKind::BottomRight,
                x: 19,
                y: 9,
            },
            Offset::default(),
        );
        assert_eq!(calls, vec![DrawCall::Glyph { x: 19, y: 9, glyph: '┘' }]);
    }

    #[test]
    fn empty_surface_draws_nothing() {
        let mut surface = RecordingSurface::new(0, 5);
        draw_segment(
            &mut surface,
            &Segment::HorizontalRun {
                x: 0,
                y: 0,
                length: 3,
            },
            Offset::default(),
        );
        assert!(surface.calls.is_empty());
    }
}
