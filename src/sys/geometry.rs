//! pure geometry value types shared by every resolver
//!
//! Rectangles use the visible-frame convention: bottom-left origin, y grows
//! upward. All fields are f64 so callers can hand us frames straight from
//! whatever display API they sit on, but every size the engine produces is
//! floored to a whole point and every centering offset is rounded.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Size {
        Size { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point { x: 0.0, y: 0.0 },
        size: Size {
            width: 0.0,
            height: 0.0,
        },
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn center_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Degenerate rects signal "not handled" in resolver results.
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Ties count as landscape.
    pub fn is_landscape(&self) -> bool {
        self.size.width >= self.size.height
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min_x()..=self.max_x()).contains(&point.x)
            && (self.min_y()..=self.max_y()).contains(&point.y)
    }

    pub fn intersection(&self, other: &Rect) -> Rect {
        let min_x = f64::max(self.min_x(), other.min_x());
        let max_x = f64::min(self.max_x(), other.max_x());
        let min_y = f64::max(self.min_y(), other.min_y());
        let max_y = f64::min(self.max_y(), other.max_y());
        Rect::new(
            min_x,
            min_y,
            f64::max(max_x - min_x, 0.0),
            f64::max(max_y - min_y, 0.0),
        )
    }

    pub fn area(&self) -> f64 {
        self.size.width * self.size.height
    }

    /// Shrink to the bounds if oversized, then shift the origin so the rect
    /// lies entirely inside them.
    pub fn clamped_to(&self, bounds: &Rect) -> Rect {
        let width = f64::min(self.size.width, bounds.size.width);
        let height = f64::min(self.size.height, bounds.size.height);
        let x = self.origin.x.clamp(bounds.min_x(), bounds.max_x() - width);
        let y = self.origin.y.clamp(bounds.min_y(), bounds.max_y() - height);
        Rect::new(x, y, width, height)
    }

    /// Same size, recentered on the bounds. Offsets are rounded, never
    /// floored, so the rect stays visually centered.
    pub fn centered_in(&self, bounds: &Rect) -> Rect {
        let x = (bounds.min_x() + (bounds.width() - self.width()) / 2.0).round();
        let y = (bounds.min_y() + (bounds.height() - self.height()) / 2.0).round();
        Rect::new(x, y, self.size.width, self.size.height)
    }
}

pub trait Round {
    fn round(&self) -> Self;
}

impl Round for Point {
    fn round(&self) -> Self {
        Point::new(self.x.round(), self.y.round())
    }
}

impl Round for Size {
    fn round(&self) -> Self {
        Size::new(self.width.round(), self.height.round())
    }
}

impl Round for Rect {
    fn round(&self) -> Self {
        let min = self.origin.round();
        let max = Point::new(self.max_x(), self.max_y()).round();
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

pub trait IsWithin {
    fn is_within(&self, how_much: f64, other: Self) -> bool;
}

impl IsWithin for f64 {
    fn is_within(&self, how_much: f64, other: Self) -> bool {
        (self - other).abs() < how_much
    }
}

impl IsWithin for Point {
    fn is_within(&self, how_much: f64, other: Self) -> bool {
        self.x.is_within(how_much, other.x) && self.y.is_within(how_much, other.y)
    }
}

impl IsWithin for Size {
    fn is_within(&self, how_much: f64, other: Self) -> bool {
        self.width.is_within(how_much, other.width)
            && self.height.is_within(how_much, other.height)
    }
}

impl IsWithin for Rect {
    fn is_within(&self, how_much: f64, other: Self) -> bool {
        self.origin.is_within(how_much, other.origin) && self.size.is_within(how_much, other.size)
    }
}

pub trait SameAs: IsWithin + Sized {
    fn same_as(&self, other: Self) -> bool {
        self.is_within(0.1, other)
    }
}

impl SameAs for Rect {}
impl SameAs for Point {}
impl SameAs for Size {}
