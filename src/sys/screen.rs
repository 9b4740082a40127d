//! pure model of the display arrangement
//!
//! The caller enumerates displays however it likes and hands us the visible
//! frame of each one (menu bar and dock already excluded). We only need the
//! geometry: which screen a window lives on, the ring order for
//! next/previous-display commands, and which screen sits beyond a given
//! edge for across-monitor moves.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::geometry::Rect;
use crate::layout_engine::actions::Direction;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ScreenId(u32);

impl ScreenId {
    pub fn new(id: u32) -> ScreenId {
        ScreenId(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenDescriptor {
    pub id: ScreenId,
    pub frame: Rect,
    pub name: Option<String>,
}

/// Every display's visible frame, held in ring order (sorted by origin,
/// leftmost first, ties broken bottom-up). Indices into the arrangement are
/// stable for the lifetime of one resolve call; nothing here outlives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenArrangement {
    screens: Vec<ScreenDescriptor>,
}

impl ScreenArrangement {
    pub fn new(mut screens: Vec<ScreenDescriptor>) -> ScreenArrangement {
        screens.sort_by(|a, b| {
            a.frame
                .min_x()
                .partial_cmp(&b.frame.min_x())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(
                    a.frame
                        .min_y()
                        .partial_cmp(&b.frame.min_y())
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
        });
        ScreenArrangement { screens }
    }

    pub fn single(frame: Rect) -> ScreenArrangement {
        ScreenArrangement::from_frames(vec![frame])
    }

    pub fn from_frames(frames: Vec<Rect>) -> ScreenArrangement {
        ScreenArrangement::new(
            frames
                .into_iter()
                .enumerate()
                .map(|(i, frame)| ScreenDescriptor {
                    id: ScreenId::new(i as u32),
                    frame,
                    name: None,
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScreenDescriptor> {
        self.screens.get(index)
    }

    pub fn frame(&self, index: usize) -> Rect {
        self.screens
            .get(index)
            .map(|s| s.frame)
            .unwrap_or(Rect::ZERO)
    }

    /// The screen a window counts as being on: largest visible-frame overlap,
    /// falling back to the nearest center when the window is fully off-screen.
    pub fn screen_containing(&self, rect: &Rect) -> Option<usize> {
        if self.screens.is_empty() {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for (i, screen) in self.screens.iter().enumerate() {
            let overlap = screen.frame.intersection(rect).area();
            if overlap > 0.0 && best.is_none_or(|(_, a)| overlap > a) {
                best = Some((i, overlap));
            }
        }
        if let Some((i, _)) = best {
            return Some(i);
        }
        debug!("window rect {rect:?} overlaps no screen, falling back to nearest");
        let center = rect.center();
        self.screens
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = distance_sq(a.frame, center.x, center.y);
                let db = distance_sq(b.frame, center.x, center.y);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
    }

    /// Next screen in the ring. The bool reports a wraparound.
    pub fn next(&self, index: usize) -> (usize, bool) {
        let next = (index + 1) % self.screens.len().max(1);
        (next, next <= index)
    }

    /// Previous screen in the ring. The bool reports a wraparound.
    pub fn previous(&self, index: usize) -> (usize, bool) {
        let len = self.screens.len().max(1);
        let prev = (index + len - 1) % len;
        (prev, prev >= index)
    }

    /// The nearest screen whose center lies strictly beyond the given edge
    /// of the current screen, or None at the boundary of the arrangement.
    pub fn adjacent(&self, index: usize, direction: Direction) -> Option<usize> {
        let current = self.screens.get(index)?.frame;
        let (cx, cy) = (current.center_x(), current.center_y());
        self.screens
            .iter()
            .enumerate()
            .filter(|(i, s)| {
                *i != index && beyond(direction, cx, cy, s.frame.center_x(), s.frame.center_y())
            })
            .min_by(|(_, a), (_, b)| {
                let da = distance_sq(a.frame, cx, cy);
                let db = distance_sq(b.frame, cx, cy);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
    }

    /// Like `adjacent`, but wraps to the far end of the arrangement when no
    /// screen lies beyond the edge. The bool reports the wraparound. Returns
    /// None on a single-screen arrangement, where there is nowhere to go.
    pub fn wrapped_adjacent(&self, index: usize, direction: Direction) -> Option<(usize, bool)> {
        if self.screens.len() < 2 {
            return None;
        }
        if let Some(adjacent) = self.adjacent(index, direction) {
            return Some((adjacent, false));
        }
        let current = self.screens.get(index)?.frame;
        let (cx, cy) = (current.center_x(), current.center_y());
        let opposite = direction.opposite();
        self.screens
            .iter()
            .enumerate()
            .filter(|(i, s)| {
                *i != index && beyond(opposite, cx, cy, s.frame.center_x(), s.frame.center_y())
            })
            .max_by(|(_, a), (_, b)| {
                let da = distance_sq(a.frame, cx, cy);
                let db = distance_sq(b.frame, cx, cy);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| (i, true))
    }
}

fn beyond(direction: Direction, cx: f64, cy: f64, other_cx: f64, other_cy: f64) -> bool {
    match direction {
        Direction::Left => other_cx < cx,
        Direction::Right => other_cx > cx,
        Direction::Up => other_cy > cy,
        Direction::Down => other_cy < cy,
    }
}

fn distance_sq(frame: Rect, x: f64, y: f64) -> f64 {
    let dx = frame.center_x() - x;
    let dy = frame.center_y() - y;
    dx * dx + dy * dy
}
