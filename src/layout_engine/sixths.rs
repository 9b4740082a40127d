//! sixths placement with adjacency cycling
//!
//! Sixths do not cycle like the other grids. Each starting cell owns a ring
//! of three states: the single cell, then the same-row two-cell span leading
//! away from it, then the opposite span of that row. The rings are encoded
//! as explicit tables; the adjacency graph is not derivable from reading
//! order (a center cell's ring visits the right span before the left one,
//! a corner cell enters the span containing it first).

use serde::{Deserialize, Serialize};

use super::actions::{Action, SubAction};
use super::engine::{RectResult, ResolveCtx};
use super::grid::{GridType, advance};
use super::utils::{floor_div, floor_frac, oriented};
use crate::sys::geometry::Rect;

/// A two-cell span of the sixths grid: two thirds by one half of the screen
/// in landscape, one half by two thirds in portrait, named for the screen
/// corner it hugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SixthsSpan {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl SixthsSpan {
    pub fn rect(self, screen: &Rect) -> Rect {
        oriented(screen, |s| self.landscape_rect(s), |s| self.portrait_rect(s))
    }

    fn landscape_rect(self, screen: &Rect) -> Rect {
        let cell_width = floor_div(screen.width(), 3);
        let cell_height = floor_div(screen.height(), 2);
        let width = floor_frac(screen.width(), 2.0 / 3.0);
        let x = match self {
            SixthsSpan::TopLeft | SixthsSpan::BottomLeft => screen.min_x(),
            SixthsSpan::TopRight | SixthsSpan::BottomRight => screen.min_x() + cell_width,
        };
        let y = match self {
            SixthsSpan::TopLeft | SixthsSpan::TopRight => screen.max_y() - cell_height,
            SixthsSpan::BottomLeft | SixthsSpan::BottomRight => screen.max_y() - 2.0 * cell_height,
        };
        Rect::new(x, y, width, cell_height)
    }

    fn portrait_rect(self, screen: &Rect) -> Rect {
        let cell_width = floor_div(screen.width(), 2);
        let cell_height = floor_div(screen.height(), 3);
        let height = floor_frac(screen.height(), 2.0 / 3.0);
        let x = match self {
            SixthsSpan::TopLeft | SixthsSpan::BottomLeft => screen.min_x(),
            SixthsSpan::TopRight | SixthsSpan::BottomRight => screen.min_x() + cell_width,
        };
        let y = match self {
            SixthsSpan::TopLeft | SixthsSpan::TopRight => screen.max_y() - height,
            SixthsSpan::BottomLeft | SixthsSpan::BottomRight => {
                screen.max_y() - cell_height - height
            }
        };
        Rect::new(x, y, cell_width, height)
    }
}

/// One state of a sixths cycling ring. Cells are kept as reading-order
/// ordinals so the table is orientation-independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RingState {
    Cell(usize),
    Span(SixthsSpan),
}

/// The adjacency table. Index = the action's default cell ordinal
/// (row-major: top row 0..=2, bottom row 3..=5 in landscape terms).
fn ring_of(ordinal: usize) -> [RingState; 3] {
    use RingState::{Cell, Span};
    match ordinal {
        0 => [Cell(0), Span(SixthsSpan::TopLeft), Span(SixthsSpan::TopRight)],
        1 => [Cell(1), Span(SixthsSpan::TopRight), Span(SixthsSpan::TopLeft)],
        2 => [Cell(2), Span(SixthsSpan::TopRight), Span(SixthsSpan::TopLeft)],
        3 => [
            Cell(3),
            Span(SixthsSpan::BottomLeft),
            Span(SixthsSpan::BottomRight),
        ],
        4 => [
            Cell(4),
            Span(SixthsSpan::BottomRight),
            Span(SixthsSpan::BottomLeft),
        ],
        _ => [
            Cell(5),
            Span(SixthsSpan::BottomRight),
            Span(SixthsSpan::BottomLeft),
        ],
    }
}

pub(crate) fn resolve(action: Action, ctx: &ResolveCtx) -> RectResult {
    let Some((GridType::Sixths, default_ordinal)) = action.grid_ordinal() else {
        return RectResult::unhandled();
    };
    let landscape = ctx.screen.is_landscape();
    let ring = ring_of(default_ordinal);
    let state = match previous_state(action, ctx, landscape)
        .and_then(|prev| ring.iter().position(|s| *s == prev))
    {
        Some(position) => ring[advance(position, 1, ring.len())],
        None => ring[0],
    };
    match state {
        RingState::Cell(ordinal) => {
            let (col, row) = GridType::Sixths.cell_of_ordinal(ordinal, landscape);
            RectResult::placed(
                GridType::Sixths.cell_rect(&ctx.screen, col, row),
                action,
                SubAction::Cell {
                    grid: GridType::Sixths,
                    col: col as u8,
                    row: row as u8,
                },
            )
        }
        RingState::Span(span) => {
            RectResult::placed(span.rect(&ctx.screen), action, SubAction::Span(span))
        }
    }
}

fn previous_state(action: Action, ctx: &ResolveCtx, landscape: bool) -> Option<RingState> {
    match ctx.repeat_sub_action(action)? {
        SubAction::Cell {
            grid: GridType::Sixths,
            col,
            row,
        } => GridType::Sixths
            .ordinal_of_cell(col as u32, row as u32, landscape)
            .map(RingState::Cell),
        SubAction::Span(span) => Some(RingState::Span(span)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn landscape_span_rects() {
        let screen = Rect::new(0.0, 0.0, 1200.0, 600.0);
        assert_eq!(
            SixthsSpan::TopLeft.rect(&screen),
            Rect::new(0.0, 300.0, 800.0, 300.0)
        );
        assert_eq!(
            SixthsSpan::TopRight.rect(&screen),
            Rect::new(400.0, 300.0, 800.0, 300.0)
        );
        assert_eq!(
            SixthsSpan::BottomLeft.rect(&screen),
            Rect::new(0.0, 0.0, 800.0, 300.0)
        );
        assert_eq!(
            SixthsSpan::BottomRight.rect(&screen),
            Rect::new(400.0, 0.0, 800.0, 300.0)
        );
    }

    #[test]
    fn portrait_span_rects() {
        let screen = Rect::new(0.0, 0.0, 600.0, 1200.0);
        assert_eq!(
            SixthsSpan::TopLeft.rect(&screen),
            Rect::new(0.0, 400.0, 300.0, 800.0)
        );
        assert_eq!(
            SixthsSpan::BottomRight.rect(&screen),
            Rect::new(300.0, 0.0, 300.0, 800.0)
        );
    }

    #[test]
    fn spans_honor_screen_offset() {
        let screen = Rect::new(900.0, 100.0, 1200.0, 600.0);
        assert_eq!(
            SixthsSpan::BottomRight.rect(&screen),
            Rect::new(1300.0, 100.0, 800.0, 300.0)
        );
    }

    #[test]
    fn center_cell_ring_leads_right() {
        // The documented sequence: bottom-center cell, then the bottom-right
        // span, then the bottom-left span.
        let ring = ring_of(4);
        assert_eq!(ring[0], RingState::Cell(4));
        assert_eq!(ring[1], RingState::Span(SixthsSpan::BottomRight));
        assert_eq!(ring[2], RingState::Span(SixthsSpan::BottomLeft));
    }

    #[test]
    fn corner_cells_enter_their_own_span_first() {
        assert_eq!(ring_of(0)[1], RingState::Span(SixthsSpan::TopLeft));
        assert_eq!(ring_of(5)[1], RingState::Span(SixthsSpan::BottomRight));
    }
}
