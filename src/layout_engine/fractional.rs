//! fractional-size cycling: halves, corners, center-half
//!
//! The anchor edge is fixed per action; repeated invocations only change the
//! size, walking the enabled cycle sizes in canonical order. The first
//! invocation (or any invocation with stale/foreign history, or with cycling
//! disabled) always lands on one half.

use super::actions::Action;
use super::engine::{RectResult, ResolveCtx};
use super::utils::{floor_div, floor_frac, oriented};
use crate::sys::geometry::Rect;

pub(crate) fn resolve(action: Action, ctx: &ResolveCtx) -> RectResult {
    let fraction = cycle_fraction(action, ctx);
    let screen = ctx.screen;
    let rect = match action {
        Action::LeftHalf => left(&screen, fraction),
        Action::RightHalf => right(&screen, fraction),
        Action::TopHalf => top(&screen, fraction),
        Action::BottomHalf => bottom(&screen, fraction),
        Action::CenterHalf => oriented(
            &screen,
            |s| center_band_horizontal(s, fraction),
            |s| center_band_vertical(s, fraction),
        ),
        Action::TopLeft | Action::TopRight | Action::BottomLeft | Action::BottomRight => {
            corner(action, &screen, fraction)
        }
        _ => return RectResult::unhandled(),
    };
    RectResult::of(rect, action)
}

fn cycle_fraction(action: Action, ctx: &ResolveCtx) -> f64 {
    match ctx.repeat_count(action) {
        Some(count) => {
            let sizes = ctx.settings.cycle_sizes.sizes();
            sizes[count as usize % sizes.len()].fraction()
        }
        None => 0.5,
    }
}

fn left(screen: &Rect, fraction: f64) -> Rect {
    Rect::new(
        screen.min_x(),
        screen.min_y(),
        floor_frac(screen.width(), fraction),
        screen.height(),
    )
}

fn right(screen: &Rect, fraction: f64) -> Rect {
    let width = floor_frac(screen.width(), fraction);
    Rect::new(screen.max_x() - width, screen.min_y(), width, screen.height())
}

fn top(screen: &Rect, fraction: f64) -> Rect {
    let height = floor_frac(screen.height(), fraction);
    Rect::new(screen.min_x(), screen.max_y() - height, screen.width(), height)
}

fn bottom(screen: &Rect, fraction: f64) -> Rect {
    Rect::new(
        screen.min_x(),
        screen.min_y(),
        screen.width(),
        floor_frac(screen.height(), fraction),
    )
}

fn center_band_horizontal(screen: &Rect, fraction: f64) -> Rect {
    let width = floor_frac(screen.width(), fraction);
    let x = (screen.min_x() + (screen.width() - width) / 2.0).round();
    Rect::new(x, screen.min_y(), width, screen.height())
}

fn center_band_vertical(screen: &Rect, fraction: f64) -> Rect {
    let height = floor_frac(screen.height(), fraction);
    let y = (screen.min_y() + (screen.height() - height) / 2.0).round();
    Rect::new(screen.min_x(), y, screen.width(), height)
}

/// Quadrants keep half the screen height no matter where the width cycle
/// stands; only the width follows the fraction.
fn corner(action: Action, screen: &Rect, fraction: f64) -> Rect {
    let width = floor_frac(screen.width(), fraction);
    let height = floor_div(screen.height(), 2);
    let x = match action {
        Action::TopLeft | Action::BottomLeft => screen.min_x(),
        _ => screen.max_x() - width,
    };
    let y = match action {
        Action::TopLeft | Action::TopRight => screen.max_y() - height,
        _ => screen.min_y(),
    };
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::engine::tests_support::ctx_fresh;
    use super::*;

    #[test]
    fn left_half_anchors_left_at_half() {
        let ctx = ctx_fresh(Rect::new(0.0, 0.0, 1000.0, 500.0));
        let result = resolve(Action::LeftHalf, &ctx);
        assert_eq!(result.rect, Rect::new(0.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn right_half_anchors_right() {
        let ctx = ctx_fresh(Rect::new(100.0, 50.0, 1000.0, 500.0));
        let result = resolve(Action::RightHalf, &ctx);
        assert_eq!(result.rect, Rect::new(600.0, 50.0, 500.0, 500.0));
    }

    #[test]
    fn top_half_hugs_the_top_edge() {
        let ctx = ctx_fresh(Rect::new(0.0, 100.0, 1000.0, 501.0));
        let result = resolve(Action::TopHalf, &ctx);
        // 501 / 2 floors to 250; the rect tops out at maxY.
        assert_eq!(result.rect, Rect::new(0.0, 351.0, 1000.0, 250.0));
    }

    #[test]
    fn center_half_rounds_its_offset() {
        let ctx = ctx_fresh(Rect::new(0.0, 0.0, 1001.0, 500.0));
        let result = resolve(Action::CenterHalf, &ctx);
        assert_eq!(result.rect, Rect::new(251.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn center_half_cycles_height_in_portrait() {
        let ctx = ctx_fresh(Rect::new(0.0, 0.0, 500.0, 1000.0));
        let result = resolve(Action::CenterHalf, &ctx);
        assert_eq!(result.rect, Rect::new(0.0, 250.0, 500.0, 500.0));
    }

    #[test]
    fn corners_fix_height_at_half() {
        let screen = Rect::new(0.0, 0.0, 1000.0, 500.0);
        let ctx = ctx_fresh(screen);
        assert_eq!(
            resolve(Action::TopLeft, &ctx).rect,
            Rect::new(0.0, 250.0, 500.0, 250.0)
        );
        assert_eq!(
            resolve(Action::BottomRight, &ctx).rect,
            Rect::new(500.0, 0.0, 500.0, 250.0)
        );
    }
}
