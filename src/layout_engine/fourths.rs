//! ordered bands along the major axis: fourths, three-fourths, thirds
//!
//! Bands run left-to-right in landscape and top-to-bottom in portrait.
//! Cycling is directional and action-specific: the repeat count indexes into
//! the pressed action's own traversal sequence, and the count is shared
//! across the family. That sharing is what produces the documented crossing
//! jumps (a first-fourth press followed by last-fourth lands on the third
//! fourth, the converse on the second) and it must stay exactly this way.

use super::actions::{Action, Axis, BandKind, SubAction};
use super::engine::{RectResult, ResolveCtx};
use super::utils::{floor_div, floor_frac, oriented};
use crate::sys::geometry::Rect;

const FOURTHS: [Action; 4] = [
    Action::FirstFourth,
    Action::SecondFourth,
    Action::ThirdFourth,
    Action::LastFourth,
];

const THIRDS: [Action; 3] = [Action::FirstThird, Action::CenterThird, Action::LastThird];

const TWO_THIRDS: [Action; 2] = [Action::FirstTwoThirds, Action::LastTwoThirds];

pub(crate) fn resolve(action: Action, ctx: &ResolveCtx) -> RectResult {
    match action {
        Action::FirstFourth | Action::SecondFourth | Action::ThirdFourth | Action::LastFourth => {
            fourth(action, ctx)
        }
        Action::FirstThreeFourths | Action::CenterThreeFourths | Action::LastThreeFourths => {
            three_fourths(action, ctx)
        }
        Action::FirstThird | Action::CenterThird | Action::LastThird => third(action, ctx),
        Action::FirstTwoThirds | Action::LastTwoThirds => two_thirds(action, ctx),
        _ => RectResult::unhandled(),
    }
}

fn fourth(action: Action, ctx: &ResolveCtx) -> RectResult {
    let sequence: [usize; 4] = match action {
        Action::FirstFourth => [0, 1, 2, 3],
        Action::SecondFourth => [1, 2, 3, 0],
        Action::ThirdFourth => [2, 1, 0, 3],
        _ => [3, 2, 1, 0],
    };
    let position = ctx
        .group_repeat_count(&FOURTHS)
        .map(|count| count as usize % sequence.len())
        .unwrap_or(0);
    let index = sequence[position];
    let (rect, axis) = band(&ctx.screen, 4, index);
    RectResult::placed(
        rect,
        action,
        SubAction::Band {
            kind: BandKind::Fourths,
            axis,
            index: index as u8,
        },
    )
}

fn third(action: Action, ctx: &ResolveCtx) -> RectResult {
    let index = match action {
        Action::CenterThird => 1,
        _ => {
            let sequence: [usize; 3] = match action {
                Action::FirstThird => [0, 1, 2],
                _ => [2, 1, 0],
            };
            let position = ctx
                .group_repeat_count(&THIRDS)
                .map(|count| count as usize % sequence.len())
                .unwrap_or(0);
            sequence[position]
        }
    };
    let (rect, axis) = band(&ctx.screen, 3, index);
    RectResult::placed(
        rect,
        action,
        SubAction::Band {
            kind: BandKind::Thirds,
            axis,
            index: index as u8,
        },
    )
}

fn two_thirds(action: Action, ctx: &ResolveCtx) -> RectResult {
    let sequence: [usize; 2] = match action {
        Action::FirstTwoThirds => [0, 1],
        _ => [1, 0],
    };
    let position = ctx
        .group_repeat_count(&TWO_THIRDS)
        .map(|count| count as usize % sequence.len())
        .unwrap_or(0);
    let index = sequence[position];
    let anchor = if index == 0 { Anchor::First } else { Anchor::Last };
    let (rect, axis) = wide_band(&ctx.screen, 2.0 / 3.0, anchor);
    RectResult::placed(
        rect,
        action,
        SubAction::Band {
            kind: BandKind::TwoThirds,
            axis,
            index: index as u8,
        },
    )
}

fn three_fourths(action: Action, ctx: &ResolveCtx) -> RectResult {
    let (anchor, index) = match action {
        Action::FirstThreeFourths => (Anchor::First, 0),
        Action::CenterThreeFourths => (Anchor::Center, 1),
        _ => (Anchor::Last, 2),
    };
    let (rect, axis) = wide_band(&ctx.screen, 3.0 / 4.0, anchor);
    RectResult::placed(
        rect,
        action,
        SubAction::Band {
            kind: BandKind::ThreeFourths,
            axis,
            index,
        },
    )
}

enum Anchor {
    First,
    Center,
    Last,
}

/// One of `count` equal bands. The final band anchors to the far screen edge
/// so "last" commands stay flush despite flooring.
fn band(screen: &Rect, count: u32, index: usize) -> (Rect, Axis) {
    oriented(
        screen,
        |s| {
            let width = floor_div(s.width(), count);
            let x = if index as u32 == count - 1 {
                s.max_x() - width
            } else {
                s.min_x() + width * index as f64
            };
            (Rect::new(x, s.min_y(), width, s.height()), Axis::Horizontal)
        },
        |s| {
            let height = floor_div(s.height(), count);
            let y = if index as u32 == count - 1 {
                s.min_y()
            } else {
                s.max_y() - height * (index + 1) as f64
            };
            (Rect::new(s.min_x(), y, s.width(), height), Axis::Vertical)
        },
    )
}

/// A band wider than one share: two-thirds or three-fourths of the major
/// axis, anchored at either end or centered with a rounded offset.
fn wide_band(screen: &Rect, fraction: f64, anchor: Anchor) -> (Rect, Axis) {
    oriented(
        screen,
        |s| {
            let width = floor_frac(s.width(), fraction);
            let x = match anchor {
                Anchor::First => s.min_x(),
                Anchor::Center => (s.min_x() + (s.width() - width) / 2.0).round(),
                Anchor::Last => s.max_x() - width,
            };
            (Rect::new(x, s.min_y(), width, s.height()), Axis::Horizontal)
        },
        |s| {
            let height = floor_frac(s.height(), fraction);
            let y = match anchor {
                Anchor::First => s.max_y() - height,
                Anchor::Center => (s.min_y() + (s.height() - height) / 2.0).round(),
                Anchor::Last => s.min_y(),
            };
            (Rect::new(s.min_x(), y, s.width(), height), Axis::Vertical)
        },
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::engine::tests_support::{ctx_fresh, ctx_repeat, record};
    use super::*;

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 500.0)
    }

    mod geometry {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn first_fourth_is_the_leftmost_quarter() {
            let result = resolve(Action::FirstFourth, &ctx_fresh(screen()));
            assert_eq!(result.rect, Rect::new(0.0, 0.0, 250.0, 500.0));
        }

        #[test]
        fn last_fourth_hugs_the_right_edge() {
            let result = resolve(Action::LastFourth, &ctx_fresh(screen()));
            assert_eq!(result.rect, Rect::new(750.0, 0.0, 250.0, 500.0));
        }

        #[test]
        fn portrait_fourths_stack_top_down() {
            let portrait = Rect::new(0.0, 0.0, 500.0, 1000.0);
            let result = resolve(Action::FirstFourth, &ctx_fresh(portrait));
            assert_eq!(result.rect, Rect::new(0.0, 750.0, 500.0, 250.0));
            assert_eq!(
                result.sub_action,
                Some(SubAction::Band {
                    kind: BandKind::Fourths,
                    axis: Axis::Vertical,
                    index: 0,
                })
            );
        }

        #[test]
        fn center_three_fourths_is_centered() {
            let result = resolve(Action::CenterThreeFourths, &ctx_fresh(screen()));
            assert_eq!(result.rect, Rect::new(125.0, 0.0, 750.0, 500.0));
        }

        #[test]
        fn first_third_and_last_two_thirds_partition() {
            let first = resolve(Action::FirstThird, &ctx_fresh(screen()));
            assert_eq!(first.rect, Rect::new(0.0, 0.0, 333.0, 500.0));
            let rest = resolve(Action::LastTwoThirds, &ctx_fresh(screen()));
            assert_eq!(rest.rect, Rect::new(334.0, 0.0, 666.0, 500.0));
        }
    }

    mod cycling {
        use super::*;
        use pretty_assertions::assert_eq;

        fn repeat(action: Action, history_action: Action, count: u32) -> RectResult {
            let previous = resolve(history_action, &ctx_fresh(screen()));
            resolve(
                action,
                &ctx_repeat(screen(), record(history_action, previous.rect, count)),
            )
        }

        #[test]
        fn first_fourth_walks_forward() {
            let second = repeat(Action::FirstFourth, Action::FirstFourth, 1);
            assert_eq!(second.rect.min_x(), 250.0);
            let fifth = repeat(Action::FirstFourth, Action::FirstFourth, 4);
            assert_eq!(fifth.rect.min_x(), 0.0);
        }

        #[test]
        fn last_fourth_walks_backward() {
            let second = repeat(Action::LastFourth, Action::LastFourth, 1);
            assert_eq!(second.rect.min_x(), 500.0);
        }

        #[test]
        fn crossing_first_to_last_jumps_to_the_third_fourth() {
            let result = repeat(Action::LastFourth, Action::FirstFourth, 1);
            assert_eq!(result.rect.min_x(), 500.0);
        }

        #[test]
        fn crossing_last_to_first_jumps_to_the_second_fourth() {
            let result = repeat(Action::FirstFourth, Action::LastFourth, 1);
            assert_eq!(result.rect.min_x(), 250.0);
        }

        #[test]
        fn first_third_cycles_through_the_bands() {
            let center = repeat(Action::FirstThird, Action::FirstThird, 1);
            assert_eq!(center.rect.min_x(), 333.0);
            let last = repeat(Action::FirstThird, Action::FirstThird, 2);
            assert_eq!(last.rect.min_x(), 667.0);
        }

        #[test]
        fn center_third_does_not_cycle() {
            let result = repeat(Action::CenterThird, Action::CenterThird, 3);
            assert_eq!(result.rect.min_x(), 333.0);
        }

        #[test]
        fn two_thirds_toggle() {
            let toggled = repeat(Action::FirstTwoThirds, Action::FirstTwoThirds, 1);
            assert_eq!(toggled.rect.min_x(), 334.0);
            let back = repeat(Action::FirstTwoThirds, Action::FirstTwoThirds, 2);
            assert_eq!(back.rect.min_x(), 0.0);
        }

        #[test]
        fn cycling_disabled_pins_the_anchor() {
            let mut ctx = ctx_repeat(
                screen(),
                record(Action::FirstFourth, Rect::new(0.0, 0.0, 250.0, 500.0), 2),
            );
            ctx.settings.cycling = false;
            let result = resolve(Action::FirstFourth, &ctx);
            assert_eq!(result.rect.min_x(), 0.0);
        }
    }
}
