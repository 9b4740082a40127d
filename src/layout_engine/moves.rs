//! directional moves and monitor traversal
//!
//! A move snaps the window to the screen edge it points at. What a repeat
//! does once the window is flush depends on the execution mode: nothing,
//! resize cycling of the moving axis, or crossing to the adjacent display.
//! Crossing snaps to the opposite edge of the new screen so the window
//! reads as having slid over the boundary.

use tracing::debug;

use super::actions::{Action, Direction};
use super::engine::{RectResult, ResolveCtx};
use super::utils::floor_frac;
use crate::common::config::MoveExecutionMode;
use crate::sys::geometry::Rect;

/// The moving-axis fractions a resize-mode repeat walks through. Entered at
/// one half; circularly this is the 1/3 -> 1/2 -> 2/3 ring.
const MOVE_CYCLE: [f64; 3] = [1.0 / 2.0, 2.0 / 3.0, 1.0 / 3.0];

pub(crate) fn resolve(action: Action, ctx: &ResolveCtx) -> RectResult {
    let Some(direction) = action.move_direction() else {
        return RectResult::unhandled();
    };
    let mode = ctx.settings.move_mode;
    let crossing = matches!(
        mode,
        MoveExecutionMode::AcrossMonitor
            | MoveExecutionMode::AcrossAndResize
            | MoveExecutionMode::CycleMonitor
    );
    if crossing && is_flush(&ctx.window, &ctx.screen, direction, ctx.settings.gap_tolerance) {
        return traverse(action, direction, ctx);
    }

    let mut rect = snap_to_edge(&ctx.window, &ctx.screen, direction);
    if mode == MoveExecutionMode::Resize {
        rect = cycled_axis_size(&rect, &ctx.screen, direction, action, ctx);
    }
    finish(rect, &ctx.screen, direction, action, ctx)
}

fn traverse(action: Action, direction: Direction, ctx: &ResolveCtx) -> RectResult {
    let mode = ctx.settings.move_mode;
    match ctx.screens.wrapped_adjacent(ctx.screen_index, direction) {
        None => {
            // Single display; across-and-resize degrades to resize cycling.
            let mut rect = snap_to_edge(&ctx.window, &ctx.screen, direction);
            if mode == MoveExecutionMode::AcrossAndResize {
                rect = cycled_axis_size(&rect, &ctx.screen, direction, action, ctx);
            }
            finish(rect, &ctx.screen, direction, action, ctx)
        }
        Some((target, wrapped)) => {
            let frame = ctx.screens.frame(target);
            debug!("crossing to screen {target} ({direction:?}, wrapped={wrapped})");
            let mut rect = match mode {
                // Enter from the side we left through.
                MoveExecutionMode::CycleMonitor => snap_to_edge(&ctx.window, &frame, direction),
                _ => snap_to_edge(&ctx.window, &frame, direction.opposite()),
            };
            if mode == MoveExecutionMode::AcrossAndResize && wrapped {
                rect = cycled_axis_size(&rect, &frame, direction, action, ctx);
            }
            finish(rect, &frame, direction, action, ctx)
        }
    }
}

fn is_flush(window: &Rect, screen: &Rect, direction: Direction, tolerance: f64) -> bool {
    let gap = match direction {
        Direction::Left => (window.min_x() - screen.min_x()).abs(),
        Direction::Right => (window.max_x() - screen.max_x()).abs(),
        Direction::Up => (window.max_y() - screen.max_y()).abs(),
        Direction::Down => (window.min_y() - screen.min_y()).abs(),
    };
    gap <= tolerance
}

fn snap_to_edge(window: &Rect, screen: &Rect, direction: Direction) -> Rect {
    let mut rect = *window;
    match direction {
        Direction::Left => rect.origin.x = screen.min_x(),
        Direction::Right => rect.origin.x = screen.max_x() - rect.width(),
        Direction::Up => rect.origin.y = screen.max_y() - rect.height(),
        Direction::Down => rect.origin.y = screen.min_y(),
    }
    rect
}

/// Resize the moving axis to the current cycle fraction of the screen,
/// keeping the rect anchored to the destination edge.
fn cycled_axis_size(
    rect: &Rect,
    screen: &Rect,
    direction: Direction,
    action: Action,
    ctx: &ResolveCtx,
) -> Rect {
    let count = ctx.repeat_count(action).unwrap_or(0);
    let fraction = MOVE_CYCLE[count as usize % MOVE_CYCLE.len()];
    let mut rect = *rect;
    match direction {
        Direction::Left | Direction::Right => {
            rect.size.width = floor_frac(screen.width(), fraction);
            if direction == Direction::Right {
                rect.origin.x = screen.max_x() - rect.size.width;
            }
        }
        Direction::Up | Direction::Down => {
            rect.size.height = floor_frac(screen.height(), fraction);
            if direction == Direction::Up {
                rect.origin.y = screen.max_y() - rect.size.height;
            }
        }
    }
    rect
}

fn finish(
    mut rect: Rect,
    screen: &Rect,
    direction: Direction,
    action: Action,
    ctx: &ResolveCtx,
) -> RectResult {
    if ctx.settings.center_on_move {
        match direction {
            Direction::Left | Direction::Right => {
                if rect.height() > screen.height() {
                    rect.size.height = screen.height();
                }
                rect.origin.y =
                    (screen.min_y() + (screen.height() - rect.height()) / 2.0).round();
            }
            Direction::Up | Direction::Down => {
                if rect.width() > screen.width() {
                    rect.size.width = screen.width();
                }
                rect.origin.x = (screen.min_x() + (screen.width() - rect.width()) / 2.0).round();
            }
        }
    }
    RectResult::of(rect.clamped_to(screen), action)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::engine::tests_support::{ctx_on, record};
    use super::*;
    use crate::sys::geometry::Size;
    use crate::sys::screen::ScreenArrangement;

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 500.0)
    }

    fn two_screens() -> ScreenArrangement {
        ScreenArrangement::from_frames(vec![
            Rect::new(0.0, 0.0, 1000.0, 500.0),
            Rect::new(1000.0, 0.0, 1200.0, 600.0),
        ])
    }

    fn ctx_with_mode(
        screens: ScreenArrangement,
        window: Rect,
        mode: MoveExecutionMode,
    ) -> super::super::engine::ResolveCtx {
        let mut ctx = ctx_on(screens, window, None);
        ctx.settings.move_mode = mode;
        ctx
    }

    mod snapping {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn move_left_snaps_without_resizing() {
            let window = Rect::new(300.0, 100.0, 400.0, 300.0);
            let ctx = ctx_with_mode(
                ScreenArrangement::single(screen()),
                window,
                MoveExecutionMode::None,
            );
            let result = resolve(Action::MoveLeft, &ctx);
            assert_eq!(result.rect, Rect::new(0.0, 100.0, 400.0, 300.0));
        }

        #[test]
        fn move_up_snaps_to_the_top() {
            let window = Rect::new(300.0, 100.0, 400.0, 300.0);
            let ctx = ctx_with_mode(
                ScreenArrangement::single(screen()),
                window,
                MoveExecutionMode::None,
            );
            let result = resolve(Action::MoveUp, &ctx);
            assert_eq!(result.rect, Rect::new(300.0, 200.0, 400.0, 300.0));
        }

        #[test]
        fn centering_toggle_centers_the_cross_axis() {
            let window = Rect::new(300.0, 100.0, 400.0, 300.0);
            let mut ctx = ctx_with_mode(
                ScreenArrangement::single(screen()),
                window,
                MoveExecutionMode::None,
            );
            ctx.settings.center_on_move = true;
            let result = resolve(Action::MoveLeft, &ctx);
            assert_eq!(result.rect, Rect::new(0.0, 100.0, 400.0, 300.0));
        }

        #[test]
        fn centering_clamps_an_oversized_cross_axis() {
            let window = Rect::new(300.0, 0.0, 400.0, 700.0);
            let mut ctx = ctx_with_mode(
                ScreenArrangement::single(screen()),
                window,
                MoveExecutionMode::None,
            );
            ctx.settings.center_on_move = true;
            let result = resolve(Action::MoveLeft, &ctx);
            assert_eq!(result.rect, Rect::new(0.0, 0.0, 400.0, 500.0));
        }
    }

    mod resize_cycling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn first_press_takes_half_the_axis() {
            let window = Rect::new(300.0, 100.0, 400.0, 300.0);
            let ctx = ctx_with_mode(
                ScreenArrangement::single(screen()),
                window,
                MoveExecutionMode::Resize,
            );
            let result = resolve(Action::MoveLeft, &ctx);
            assert_eq!(result.rect, Rect::new(0.0, 100.0, 500.0, 300.0));
        }

        #[test]
        fn repeats_walk_the_ring() {
            let flush = Rect::new(0.0, 100.0, 500.0, 300.0);
            let mut ctx = ctx_with_mode(
                ScreenArrangement::single(screen()),
                flush,
                MoveExecutionMode::Resize,
            );
            ctx.history = Some(record(Action::MoveLeft, flush, 1));
            let result = resolve(Action::MoveLeft, &ctx);
            assert_eq!(result.rect.width(), 666.0);
            ctx.history = Some(record(Action::MoveLeft, flush, 2));
            let result = resolve(Action::MoveLeft, &ctx);
            assert_eq!(result.rect.width(), 333.0);
        }

        #[test]
        fn move_right_anchors_the_far_edge() {
            let window = Rect::new(300.0, 100.0, 400.0, 300.0);
            let ctx = ctx_with_mode(
                ScreenArrangement::single(screen()),
                window,
                MoveExecutionMode::Resize,
            );
            let result = resolve(Action::MoveRight, &ctx);
            assert_eq!(result.rect, Rect::new(500.0, 100.0, 500.0, 300.0));
        }
    }

    mod traversal {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn flush_window_crosses_to_the_opposite_edge() {
            // Flush against the right edge of screen 0; crossing right lands
            // the window on screen 1's left edge.
            let window = Rect::new(600.0, 100.0, 400.0, 300.0);
            let ctx = ctx_with_mode(two_screens(), window, MoveExecutionMode::AcrossMonitor);
            let result = resolve(Action::MoveRight, &ctx);
            assert_eq!(result.rect, Rect::new(1000.0, 100.0, 400.0, 300.0));
        }

        #[test]
        fn not_flush_snaps_first() {
            let window = Rect::new(100.0, 100.0, 400.0, 300.0);
            let ctx = ctx_with_mode(two_screens(), window, MoveExecutionMode::AcrossMonitor);
            let result = resolve(Action::MoveRight, &ctx);
            assert_eq!(result.rect, Rect::new(600.0, 100.0, 400.0, 300.0));
        }

        #[test]
        fn wrap_around_the_ring() {
            // Flush right on the rightmost screen wraps back to screen 0.
            let window = Rect::new(1800.0, 100.0, 400.0, 300.0);
            let ctx = ctx_with_mode(two_screens(), window, MoveExecutionMode::AcrossMonitor);
            let result = resolve(Action::MoveRight, &ctx);
            assert_eq!(result.rect, Rect::new(0.0, 100.0, 400.0, 300.0));
        }

        #[test]
        fn across_and_resize_on_one_screen_falls_back_to_cycling() {
            let flush = Rect::new(0.0, 100.0, 400.0, 300.0);
            let ctx = ctx_with_mode(
                ScreenArrangement::single(screen()),
                flush,
                MoveExecutionMode::AcrossAndResize,
            );
            let result = resolve(Action::MoveLeft, &ctx);
            assert_eq!(result.rect, Rect::new(0.0, 100.0, 500.0, 300.0));
        }

        #[test]
        fn across_and_resize_wrap_begins_cycling() {
            let window = Rect::new(1800.0, 100.0, 400.0, 300.0);
            let ctx = ctx_with_mode(two_screens(), window, MoveExecutionMode::AcrossAndResize);
            let result = resolve(Action::MoveRight, &ctx);
            // Wrapped onto screen 0 and took half of its width, right-anchored.
            assert_eq!(result.rect, Rect::new(500.0, 100.0, 500.0, 300.0));
        }

        #[test]
        fn cycle_monitor_keeps_the_entry_edge_and_size() {
            let window = Rect::new(600.0, 100.0, 400.0, 300.0);
            let ctx = ctx_with_mode(two_screens(), window, MoveExecutionMode::CycleMonitor);
            let result = resolve(Action::MoveRight, &ctx);
            assert_eq!(result.rect, Rect::new(1800.0, 100.0, 400.0, 300.0));
        }

        #[test]
        fn window_taller_than_target_screen_is_clamped() {
            let screens = ScreenArrangement::from_frames(vec![
                Rect::new(0.0, 0.0, 1000.0, 800.0),
                Rect::new(1000.0, 0.0, 1200.0, 600.0),
            ]);
            let window = Rect::new(600.0, 0.0, 400.0, 700.0);
            let ctx = ctx_with_mode(screens, window, MoveExecutionMode::AcrossMonitor);
            let result = resolve(Action::MoveRight, &ctx);
            assert_eq!(result.rect.size, Size::new(400.0, 600.0));
            assert_eq!(result.rect.min_x(), 1000.0);
        }
    }
}
