//! size deltas: grow/shrink from the center, halve/double with a pinned edge
//!
//! Grow and shrink distribute the step evenly around the window center.
//! Curtain mode notes which edges were already flush with the screen before
//! the resize and re-snaps them afterwards; a window filling an axis
//! therefore keeps filling it. Shrinks that would drop below the configured
//! minimum fraction of the screen return the original rect untouched.

use super::actions::Action;
use super::engine::{RectResult, ResolveCtx};
use crate::sys::geometry::Rect;

pub(crate) fn resolve(action: Action, ctx: &ResolveCtx) -> RectResult {
    let step = ctx.settings.resize_step;
    let axis_step = ctx.settings.axis_resize_step;
    match action {
        Action::Larger => grow(action, ctx, step, step),
        Action::Smaller => grow(action, ctx, -step, -step),
        Action::LargerWidth => grow(action, ctx, axis_step, 0.0),
        Action::SmallerWidth => grow(action, ctx, -axis_step, 0.0),
        Action::LargerHeight => grow(action, ctx, 0.0, axis_step),
        Action::SmallerHeight => grow(action, ctx, 0.0, -axis_step),
        Action::HalveHeightUp
        | Action::HalveHeightDown
        | Action::HalveWidthLeft
        | Action::HalveWidthRight
        | Action::DoubleHeightUp
        | Action::DoubleHeightDown
        | Action::DoubleWidthLeft
        | Action::DoubleWidthRight => halve_double(action, ctx),
        _ => RectResult::unhandled(),
    }
}

fn grow(action: Action, ctx: &ResolveCtx, delta_width: f64, delta_height: f64) -> RectResult {
    let window = ctx.window;
    let screen = ctx.screen;

    let width = window.width() + delta_width;
    let height = window.height() + delta_height;
    let too_narrow =
        delta_width < 0.0 && width < screen.width() * ctx.settings.min_width_fraction;
    let too_short =
        delta_height < 0.0 && height < screen.height() * ctx.settings.min_height_fraction;
    if too_narrow || too_short {
        return RectResult::of(window, action);
    }

    let flush = Flush::detect(&window, &screen, ctx.settings.gap_tolerance);
    let resized = Rect::new(
        window.min_x() - delta_width / 2.0,
        window.min_y() - delta_height / 2.0,
        width,
        height,
    );
    let mut rect = resized.clamped_to(&screen);
    if ctx.settings.curtain_resize {
        rect = flush.pin(rect, &screen);
    }
    RectResult::of(rect, action)
}

/// Which window edges sat on the screen edge before the resize.
#[derive(Debug, Clone, Copy)]
struct Flush {
    left: bool,
    right: bool,
    top: bool,
    bottom: bool,
}

impl Flush {
    fn detect(window: &Rect, screen: &Rect, tolerance: f64) -> Flush {
        Flush {
            left: (window.min_x() - screen.min_x()).abs() <= tolerance,
            right: (window.max_x() - screen.max_x()).abs() <= tolerance,
            top: (window.max_y() - screen.max_y()).abs() <= tolerance,
            bottom: (window.min_y() - screen.min_y()).abs() <= tolerance,
        }
    }

    /// Re-snap previously flush edges. Both edges of an axis flush means the
    /// window spans that axis and keeps spanning it.
    fn pin(&self, mut rect: Rect, screen: &Rect) -> Rect {
        if self.left && self.right {
            rect.origin.x = screen.min_x();
            rect.size.width = screen.width();
        } else if self.left {
            rect.origin.x = screen.min_x();
        } else if self.right {
            rect.origin.x = screen.max_x() - rect.width();
        }
        if self.top && self.bottom {
            rect.origin.y = screen.min_y();
            rect.size.height = screen.height();
        } else if self.top {
            rect.origin.y = screen.max_y() - rect.height();
        } else if self.bottom {
            rect.origin.y = screen.min_y();
        }
        rect
    }
}

/// Keep one edge fixed, move the opposite edge by exactly the size delta.
/// Doubles stop at the screen edge instead of overshooting it.
fn halve_double(action: Action, ctx: &ResolveCtx) -> RectResult {
    let window = ctx.window;
    let screen = ctx.screen;
    let rect = match action {
        Action::HalveHeightUp => {
            let height = (window.height() / 2.0).floor();
            Rect::new(
                window.min_x(),
                window.max_y() - height,
                window.width(),
                height,
            )
        }
        Action::HalveHeightDown => {
            let height = (window.height() / 2.0).floor();
            Rect::new(window.min_x(), window.min_y(), window.width(), height)
        }
        Action::HalveWidthLeft => {
            let width = (window.width() / 2.0).floor();
            Rect::new(window.min_x(), window.min_y(), width, window.height())
        }
        Action::HalveWidthRight => {
            let width = (window.width() / 2.0).floor();
            Rect::new(
                window.max_x() - width,
                window.min_y(),
                width,
                window.height(),
            )
        }
        Action::DoubleHeightUp => {
            let height = f64::min(window.height() * 2.0, screen.max_y() - window.min_y());
            Rect::new(window.min_x(), window.min_y(), window.width(), height)
        }
        Action::DoubleHeightDown => {
            let y = f64::max(window.min_y() - window.height(), screen.min_y());
            Rect::new(window.min_x(), y, window.width(), window.max_y() - y)
        }
        Action::DoubleWidthLeft => {
            let x = f64::max(window.min_x() - window.width(), screen.min_x());
            Rect::new(x, window.min_y(), window.max_x() - x, window.height())
        }
        Action::DoubleWidthRight => {
            let width = f64::min(window.width() * 2.0, screen.max_x() - window.min_x());
            Rect::new(window.min_x(), window.min_y(), width, window.height())
        }
        _ => return RectResult::unhandled(),
    };
    RectResult::of(rect, action)
}
