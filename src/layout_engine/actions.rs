//! the closed action taxonomy and its orientation-resolved sub-actions
//!
//! One tagged union instead of the per-action type zoo: every positioning
//! command a hotkey can fire is a variant here, grouped into families that
//! the engine matches on exhaustively. `SubAction` is the finer-grained tag
//! a result carries so the next invocation knows exactly which geometric
//! variant was produced without re-deriving screen orientation.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::grid::GridType;
use super::sixths::SixthsSpan;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Every positioning command the engine understands. The set is closed;
/// callers map their hotkey/menu identifiers onto these tags.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    // halves
    LeftHalf,
    RightHalf,
    TopHalf,
    BottomHalf,
    CenterHalf,

    // corners (quarters)
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,

    // thirds and two-thirds along the major axis
    FirstThird,
    CenterThird,
    LastThird,
    FirstTwoThirds,
    LastTwoThirds,

    // fourths and three-fourths along the major axis
    FirstFourth,
    SecondFourth,
    ThirdFourth,
    LastFourth,
    FirstThreeFourths,
    CenterThreeFourths,
    LastThreeFourths,

    // sixths (3x2 landscape, 2x3 portrait)
    TopLeftSixth,
    TopCenterSixth,
    TopRightSixth,
    BottomLeftSixth,
    BottomCenterSixth,
    BottomRightSixth,

    // ninths (3x3, orientation-invariant)
    TopLeftNinth,
    TopCenterNinth,
    TopRightNinth,
    MiddleLeftNinth,
    MiddleCenterNinth,
    MiddleRightNinth,
    BottomLeftNinth,
    BottomCenterNinth,
    BottomRightNinth,

    // eighths (4x2 landscape, 2x4 portrait)
    TopLeftEighth,
    TopCenterLeftEighth,
    TopCenterRightEighth,
    TopRightEighth,
    BottomLeftEighth,
    BottomCenterLeftEighth,
    BottomCenterRightEighth,
    BottomRightEighth,

    // corner thirds (overlapping 2x2, two-thirds along the major axis)
    TopLeftThird,
    TopRightThird,
    BottomLeftThird,
    BottomRightThird,

    // maximize variants
    Maximize,
    AlmostMaximize,
    MaximizeHeight,

    // size deltas
    Larger,
    Smaller,
    LargerWidth,
    SmallerWidth,
    LargerHeight,
    SmallerHeight,

    // halve/double with one pinned edge
    HalveHeightUp,
    HalveHeightDown,
    HalveWidthLeft,
    HalveWidthRight,
    DoubleHeightUp,
    DoubleHeightDown,
    DoubleWidthLeft,
    DoubleWidthRight,

    // directional moves
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // display navigation
    NextDisplay,
    PreviousDisplay,

    // sidebar placements
    LeftTodo,
    RightTodo,

    // fixed placements
    Specified,
    Center,

    // meta actions resolved elsewhere (multi-window tiling, undo)
    Restore,
    TileAll,
    CascadeAll,
    ReverseAll,
    CascadeActiveApp,
}

impl Action {
    /// Actions this engine does not compute; the caller must delegate.
    pub fn is_meta(self) -> bool {
        matches!(
            self,
            Action::Restore
                | Action::TileAll
                | Action::CascadeAll
                | Action::ReverseAll
                | Action::CascadeActiveApp
        )
    }

    pub fn move_direction(self) -> Option<Direction> {
        match self {
            Action::MoveLeft => Some(Direction::Left),
            Action::MoveRight => Some(Direction::Right),
            Action::MoveUp => Some(Direction::Up),
            Action::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }

    /// Grid-family actions, as (grid, reading-order ordinal). The ordinal is
    /// orientation-independent; the grid maps it to a concrete cell.
    pub fn grid_ordinal(self) -> Option<(GridType, usize)> {
        use Action::*;
        let pair = match self {
            TopLeftNinth => (GridType::Ninths, 0),
            TopCenterNinth => (GridType::Ninths, 1),
            TopRightNinth => (GridType::Ninths, 2),
            MiddleLeftNinth => (GridType::Ninths, 3),
            MiddleCenterNinth => (GridType::Ninths, 4),
            MiddleRightNinth => (GridType::Ninths, 5),
            BottomLeftNinth => (GridType::Ninths, 6),
            BottomCenterNinth => (GridType::Ninths, 7),
            BottomRightNinth => (GridType::Ninths, 8),

            TopLeftEighth => (GridType::Eighths, 0),
            TopCenterLeftEighth => (GridType::Eighths, 1),
            TopCenterRightEighth => (GridType::Eighths, 2),
            TopRightEighth => (GridType::Eighths, 3),
            BottomLeftEighth => (GridType::Eighths, 4),
            BottomCenterLeftEighth => (GridType::Eighths, 5),
            BottomCenterRightEighth => (GridType::Eighths, 6),
            BottomRightEighth => (GridType::Eighths, 7),

            TopLeftThird => (GridType::CornerThirds, 0),
            TopRightThird => (GridType::CornerThirds, 1),
            BottomLeftThird => (GridType::CornerThirds, 2),
            BottomRightThird => (GridType::CornerThirds, 3),

            TopLeftSixth => (GridType::Sixths, 0),
            TopCenterSixth => (GridType::Sixths, 1),
            TopRightSixth => (GridType::Sixths, 2),
            BottomLeftSixth => (GridType::Sixths, 3),
            BottomCenterSixth => (GridType::Sixths, 4),
            BottomRightSixth => (GridType::Sixths, 5),

            _ => return None,
        };
        Some(pair)
    }
}

/// Which band family a `SubAction::Band` belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandKind {
    Thirds,
    TwoThirds,
    Fourths,
    ThreeFourths,
}

/// Orientation-resolved variant of an action's result. Grid cells are
/// generated from (grid, column, row) triples instead of being named one by
/// one; bands record the axis they were laid out along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubAction {
    Cell { grid: GridType, col: u8, row: u8 },
    Span(SixthsSpan),
    Band { kind: BandKind, axis: Axis, index: u8 },
}
