//! parametrized cell geometry for the four grid families
//!
//! Grid cells are addressed as (column, row) with column 0 leftmost and row 0
//! topmost; the vertical position in the bottom-left-origin frame is
//! `maxY - cellHeight * (row + 1)`. The same position formula applies to all
//! four families. Corner-thirds cells deliberately measure two thirds along
//! the major axis, so their column/row 1 cells run past the far screen edge
//! and neighbouring commands overlap.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::actions::{Action, SubAction};
use super::engine::{RectResult, ResolveCtx};
use super::utils::{floor_div, floor_frac};
use crate::sys::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridType {
    Ninths,
    Eighths,
    CornerThirds,
    Sixths,
}

impl GridType {
    /// (columns, rows). Eighths and sixths rotate with the screen; ninths and
    /// corner-thirds do not.
    pub fn dims(self, landscape: bool) -> (u32, u32) {
        match self {
            GridType::Ninths => (3, 3),
            GridType::Eighths => {
                if landscape {
                    (4, 2)
                } else {
                    (2, 4)
                }
            }
            GridType::CornerThirds => (2, 2),
            GridType::Sixths => {
                if landscape {
                    (3, 2)
                } else {
                    (2, 3)
                }
            }
        }
    }

    pub fn cell_count(self) -> usize {
        match self {
            GridType::Ninths => 9,
            GridType::Eighths => 8,
            GridType::CornerThirds => 4,
            GridType::Sixths => 6,
        }
    }

    pub fn cell_width(self, screen_width: f64, landscape: bool) -> f64 {
        match self {
            GridType::CornerThirds => {
                if landscape {
                    floor_frac(screen_width, 2.0 / 3.0)
                } else {
                    floor_div(screen_width, 2)
                }
            }
            _ => floor_div(screen_width, self.dims(landscape).0),
        }
    }

    pub fn cell_height(self, screen_height: f64, landscape: bool) -> f64 {
        match self {
            GridType::CornerThirds => {
                if landscape {
                    floor_div(screen_height, 2)
                } else {
                    floor_frac(screen_height, 2.0 / 3.0)
                }
            }
            _ => floor_div(screen_height, self.dims(landscape).1),
        }
    }

    pub fn cell_rect(self, screen: &Rect, col: u32, row: u32) -> Rect {
        let landscape = screen.is_landscape();
        let width = self.cell_width(screen.width(), landscape);
        let height = self.cell_height(screen.height(), landscape);
        Rect::new(
            screen.min_x() + width * col as f64,
            screen.max_y() - height * (row + 1) as f64,
            width,
            height,
        )
    }

    /// Reading-order ordinal (row-major, left to right, top to bottom) to a
    /// concrete cell under the current orientation.
    pub fn cell_of_ordinal(self, ordinal: usize, landscape: bool) -> (u32, u32) {
        let (cols, _) = self.dims(landscape);
        ((ordinal as u32) % cols, (ordinal as u32) / cols)
    }

    /// The inverse of `cell_of_ordinal`; None when the cell does not exist
    /// under the current orientation (e.g. an eighths cell recorded on a
    /// landscape screen looked up after rotating to portrait).
    pub fn ordinal_of_cell(self, col: u32, row: u32, landscape: bool) -> Option<usize> {
        let (cols, rows) = self.dims(landscape);
        if col < cols && row < rows {
            Some((row * cols + col) as usize)
        } else {
            None
        }
    }
}

/// Step through the reading-order sequence with wraparound. `direction` is
/// +1 for right/clockwise traversal, -1 for the reverse.
pub fn advance(ordinal: usize, direction: i32, len: usize) -> usize {
    let len = len as i32;
    (((ordinal as i32 + direction) % len + len) % len) as usize
}

/// Resolver for the ninths, eighths, and corner-thirds families. Sixths have
/// their own adjacency cycling and live in `sixths`.
pub(crate) fn resolve(action: Action, ctx: &ResolveCtx) -> RectResult {
    let Some((grid, default_ordinal)) = action.grid_ordinal() else {
        return RectResult::unhandled();
    };
    let landscape = ctx.screen.is_landscape();
    let ordinal = match cycled_ordinal(action, grid, ctx, landscape) {
        Some(next) => next,
        None => default_ordinal,
    };
    let (col, row) = grid.cell_of_ordinal(ordinal, landscape);
    RectResult::placed(
        grid.cell_rect(&ctx.screen, col, row),
        action,
        SubAction::Cell {
            grid,
            col: col as u8,
            row: row as u8,
        },
    )
}

/// On a repeat of the same action with cycling enabled, the previous cell
/// advanced one step in reading order. A previous sub-action that is not a
/// member of this grid's sequence (action switch, orientation flip) yields
/// None and the caller falls back to the default cell.
fn cycled_ordinal(action: Action, grid: GridType, ctx: &ResolveCtx, landscape: bool) -> Option<usize> {
    let previous = ctx.repeat_sub_action(action)?;
    let SubAction::Cell {
        grid: prev_grid,
        col,
        row,
    } = previous
    else {
        return None;
    };
    if prev_grid != grid {
        return None;
    }
    let Some(ordinal) = grid.ordinal_of_cell(col as u32, row as u32, landscape) else {
        trace!("previous cell ({col},{row}) not in the {grid:?} sequence, using default");
        return None;
    };
    Some(advance(ordinal, 1, grid.cell_count()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    mod cell_math {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn ninths_cell_width_is_floored() {
            assert_eq!(GridType::Ninths.cell_width(1000.0, true), 333.0);
            assert_eq!(GridType::Ninths.cell_width(1000.0, false), 333.0);
        }

        #[test]
        fn eighths_rotate_with_orientation() {
            assert_eq!(GridType::Eighths.dims(true), (4, 2));
            assert_eq!(GridType::Eighths.dims(false), (2, 4));
            assert_eq!(GridType::Eighths.cell_width(1000.0, true), 250.0);
            assert_eq!(GridType::Eighths.cell_width(1000.0, false), 500.0);
        }

        #[test]
        fn corner_thirds_take_two_thirds_of_the_major_axis() {
            assert_eq!(GridType::CornerThirds.cell_width(900.0, true), 600.0);
            assert_eq!(GridType::CornerThirds.cell_height(600.0, true), 300.0);
            assert_eq!(GridType::CornerThirds.cell_width(600.0, false), 300.0);
            assert_eq!(GridType::CornerThirds.cell_height(900.0, false), 600.0);
        }

        #[test]
        fn sixths_cells_are_thirds_by_halves() {
            assert_eq!(GridType::Sixths.cell_width(1200.0, true), 400.0);
            assert_eq!(GridType::Sixths.cell_height(600.0, true), 300.0);
            assert_eq!(GridType::Sixths.cell_width(600.0, false), 300.0);
            assert_eq!(GridType::Sixths.cell_height(1200.0, false), 400.0);
        }

        #[test]
        fn cell_position_honors_screen_offset() {
            let screen = Rect::new(900.0, 100.0, 900.0, 600.0);
            let cell = GridType::Ninths.cell_rect(&screen, 0, 0);
            assert_eq!(cell, Rect::new(900.0, 500.0, 300.0, 200.0));
        }

        #[test]
        fn ninths_tile_the_screen_within_flooring_slack() {
            let screen = Rect::new(0.0, 0.0, 1000.0, 700.0);
            let width = GridType::Ninths.cell_width(screen.width(), true);
            let height = GridType::Ninths.cell_height(screen.height(), true);
            assert!(width * 3.0 <= screen.width());
            assert!(screen.width() - width * 3.0 < 3.0);
            assert!(height * 3.0 <= screen.height());
            assert!(screen.height() - height * 3.0 < 3.0);
        }
    }

    mod ordinals {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn reading_order_round_trips() {
            for grid in [
                GridType::Ninths,
                GridType::Eighths,
                GridType::CornerThirds,
                GridType::Sixths,
            ] {
                for landscape in [true, false] {
                    for ordinal in 0..grid.cell_count() {
                        let (col, row) = grid.cell_of_ordinal(ordinal, landscape);
                        assert_eq!(grid.ordinal_of_cell(col, row, landscape), Some(ordinal));
                    }
                }
            }
        }

        #[test]
        fn out_of_range_cells_are_rejected() {
            assert_eq!(GridType::Eighths.ordinal_of_cell(3, 0, false), None);
            assert_eq!(GridType::Sixths.ordinal_of_cell(2, 0, false), None);
        }

        #[test]
        fn advance_wraps_both_ways() {
            assert_eq!(advance(8, 1, 9), 0);
            assert_eq!(advance(0, -1, 9), 8);
            assert_eq!(advance(4, 1, 9), 5);
        }
    }
}
