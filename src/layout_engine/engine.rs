//! the resolve entry point and the caller-facing contract types
//!
//! `LayoutEngine` is a pure function wrapped around an immutable settings
//! snapshot: every piece of cycling state comes in through the caller-owned
//! history record and goes back out in the result. The engine holds nothing
//! mutable across calls; two windows mid-cycle can never corrupt each other.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::actions::{Action, SubAction};
use super::{fourths, fractional, grid, moves, resize, sixths};
use crate::common::collections::HashMap;
use crate::common::config::EngineSettings;
use crate::sys::geometry::{Rect, SameAs};
use crate::sys::screen::ScreenArrangement;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct WindowId(u64);

impl WindowId {
    pub fn new(id: u64) -> WindowId {
        WindowId(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub id: WindowId,
    pub frame: Rect,
}

/// The record of the previous action applied to a window. Owned and
/// persisted by the caller, keyed by window id; the engine only ever reads
/// it. `count` is the number of consecutive invocations of `action`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action: Action,
    pub sub_action: Option<SubAction>,
    pub rect: Rect,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolveRequest {
    pub action: Action,
    pub screens: ScreenArrangement,
    pub window: WindowState,
    pub history: Option<ActionRecord>,
}

/// The only output type. An empty rect means "not handled here": the caller
/// must delegate (restore, multi-window tiling). `resulting_action` is what
/// the caller should persist instead of the requested action when the engine
/// substituted one (e.g. a replayed action after a display change).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectResult {
    pub rect: Rect,
    pub resulting_action: Option<Action>,
    pub sub_action: Option<SubAction>,
}

impl RectResult {
    pub fn unhandled() -> RectResult {
        RectResult {
            rect: Rect::ZERO,
            resulting_action: None,
            sub_action: None,
        }
    }

    pub fn of(rect: Rect, action: Action) -> RectResult {
        RectResult {
            rect,
            resulting_action: Some(action),
            sub_action: None,
        }
    }

    pub fn placed(rect: Rect, action: Action, sub_action: SubAction) -> RectResult {
        RectResult {
            rect,
            resulting_action: Some(action),
            sub_action: Some(sub_action),
        }
    }

    pub fn is_handled(&self) -> bool {
        !self.rect.is_empty()
    }
}

/// Everything a family resolver needs for one call. Built afresh per
/// `resolve` invocation; the history field is already staleness-checked.
#[derive(Debug, Clone)]
pub(crate) struct ResolveCtx {
    pub screen: Rect,
    pub screens: ScreenArrangement,
    pub screen_index: usize,
    pub window: Rect,
    pub history: Option<ActionRecord>,
    pub settings: EngineSettings,
}

impl ResolveCtx {
    /// The repeat count when this exact action is being repeated and cycling
    /// is enabled; None means "treat as first execution".
    pub(crate) fn repeat_count(&self, action: Action) -> Option<u32> {
        self.group_repeat_count(&[action])
    }

    /// Like `repeat_count`, but any action in the group continues the cycle.
    /// Fourths use this: crossing from a first-fourth history to last-fourth
    /// keeps the shared position counter running.
    pub(crate) fn group_repeat_count(&self, group: &[Action]) -> Option<u32> {
        if !self.settings.cycling {
            return None;
        }
        let history = self.history.as_ref()?;
        group.contains(&history.action).then_some(history.count)
    }

    pub(crate) fn repeat_sub_action(&self, action: Action) -> Option<SubAction> {
        self.repeat_count(action)?;
        self.history.as_ref()?.sub_action
    }
}

pub struct LayoutEngine {
    settings: EngineSettings,
}

impl LayoutEngine {
    pub fn new(settings: EngineSettings) -> LayoutEngine {
        LayoutEngine { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Compute the target rectangle for one action. Total over the input
    /// domain: unknown-to-us actions come back unhandled, stale history
    /// degrades to a first execution, and nothing in here can fail.
    pub fn resolve(&self, request: &ResolveRequest) -> RectResult {
        let action = request.action;
        if action.is_meta() {
            return RectResult::unhandled();
        }
        let Some(screen_index) = request.screens.screen_containing(&request.window.frame) else {
            debug!("no screens in arrangement, nothing to resolve");
            return RectResult::unhandled();
        };
        let history = match request.history {
            Some(record) if record.rect.same_as(request.window.frame) => Some(record),
            Some(record) => {
                debug!(
                    "window moved since {:?} was recorded, treating {action:?} as fresh",
                    record.action
                );
                None
            }
            None => None,
        };
        let ctx = ResolveCtx {
            screen: request.screens.frame(screen_index),
            screens: request.screens.clone(),
            screen_index,
            window: request.window.frame,
            history,
            settings: self.settings.clone(),
        };
        self.dispatch(action, &ctx)
    }

    fn dispatch(&self, action: Action, ctx: &ResolveCtx) -> RectResult {
        use Action::*;
        match action {
            LeftHalf | RightHalf | TopHalf | BottomHalf | CenterHalf | TopLeft | TopRight
            | BottomLeft | BottomRight => fractional::resolve(action, ctx),

            FirstThird | CenterThird | LastThird | FirstTwoThirds | LastTwoThirds
            | FirstFourth | SecondFourth | ThirdFourth | LastFourth | FirstThreeFourths
            | CenterThreeFourths | LastThreeFourths => fourths::resolve(action, ctx),

            TopLeftSixth | TopCenterSixth | TopRightSixth | BottomLeftSixth
            | BottomCenterSixth | BottomRightSixth => sixths::resolve(action, ctx),

            TopLeftNinth | TopCenterNinth | TopRightNinth | MiddleLeftNinth
            | MiddleCenterNinth | MiddleRightNinth | BottomLeftNinth | BottomCenterNinth
            | BottomRightNinth | TopLeftEighth | TopCenterLeftEighth | TopCenterRightEighth
            | TopRightEighth | BottomLeftEighth | BottomCenterLeftEighth
            | BottomCenterRightEighth | BottomRightEighth | TopLeftThird | TopRightThird
            | BottomLeftThird | BottomRightThird => grid::resolve(action, ctx),

            Maximize => RectResult::of(ctx.screen, Maximize),
            AlmostMaximize => self.almost_maximize(ctx),
            MaximizeHeight => RectResult::of(
                Rect::new(
                    ctx.window.min_x(),
                    ctx.screen.min_y(),
                    ctx.window.width(),
                    ctx.screen.height(),
                ),
                MaximizeHeight,
            ),

            Larger | Smaller | LargerWidth | SmallerWidth | LargerHeight | SmallerHeight
            | HalveHeightUp | HalveHeightDown | HalveWidthLeft | HalveWidthRight
            | DoubleHeightUp | DoubleHeightDown | DoubleWidthLeft | DoubleWidthRight => {
                resize::resolve(action, ctx)
            }

            MoveLeft | MoveRight | MoveUp | MoveDown => moves::resolve(action, ctx),

            NextDisplay | PreviousDisplay => self.resolve_display(action, ctx),

            LeftTodo => {
                let width = f64::min(self.settings.todo_sidebar_width, ctx.screen.width());
                RectResult::of(
                    Rect::new(ctx.screen.min_x(), ctx.screen.min_y(), width, ctx.screen.height()),
                    LeftTodo,
                )
            }
            RightTodo => {
                let width = f64::min(self.settings.todo_sidebar_width, ctx.screen.width());
                RectResult::of(
                    Rect::new(
                        ctx.screen.max_x() - width,
                        ctx.screen.min_y(),
                        width,
                        ctx.screen.height(),
                    ),
                    RightTodo,
                )
            }

            Specified => match self.settings.specified_size {
                Some(size) => {
                    let rect = Rect::new(0.0, 0.0, size.width, size.height)
                        .centered_in(&ctx.screen)
                        .clamped_to(&ctx.screen);
                    RectResult::of(rect, Specified)
                }
                None => RectResult::unhandled(),
            },

            Center => RectResult::of(
                ctx.window.centered_in(&ctx.screen).clamped_to(&ctx.screen),
                Center,
            ),

            Restore | TileAll | CascadeAll | ReverseAll | CascadeActiveApp => {
                RectResult::unhandled()
            }
        }
    }

    fn almost_maximize(&self, ctx: &ResolveCtx) -> RectResult {
        let fraction = self.settings.almost_maximize_fraction;
        let rect = Rect::new(
            0.0,
            0.0,
            (ctx.screen.width() * fraction).floor(),
            (ctx.screen.height() * fraction).floor(),
        )
        .centered_in(&ctx.screen);
        RectResult::of(rect, Action::AlmostMaximize)
    }

    /// Next/previous display. The default carries the window over at its
    /// current size, centered on the target; the two opt-in flags replay the
    /// window's previous action or keep it maximized instead.
    fn resolve_display(&self, action: Action, ctx: &ResolveCtx) -> RectResult {
        let (target, _wrapped) = if action == Action::NextDisplay {
            ctx.screens.next(ctx.screen_index)
        } else {
            ctx.screens.previous(ctx.screen_index)
        };
        if target == ctx.screen_index {
            // Single display: nothing to traverse.
            return RectResult::of(ctx.window, action);
        }
        let target_frame = ctx.screens.frame(target);

        if let Some(record) = ctx.history.as_ref() {
            if self.settings.keep_maximized_on_display_change && record.action == Action::Maximize {
                return RectResult::of(target_frame, Action::Maximize);
            }
            if self.settings.replay_on_display_change
                && !record.action.is_meta()
                && record.action.move_direction().is_none()
                && record.action != Action::NextDisplay
                && record.action != Action::PreviousDisplay
            {
                let replay_ctx = ResolveCtx {
                    screen: target_frame,
                    screen_index: target,
                    history: None,
                    ..ctx.clone()
                };
                let replayed = self.dispatch(record.action, &replay_ctx);
                if replayed.is_handled() {
                    return replayed;
                }
            }
        }

        RectResult::of(
            ctx.window.centered_in(&target_frame).clamped_to(&target_frame),
            action,
        )
    }
}

/// Caller-side per-window history map. Feeding `resolve` results back
/// through `record` maintains the repeat counter the cycling resolvers key
/// off: a handled result for the same action bumps the count, anything else
/// restarts it.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: HashMap<WindowId, ActionRecord>,
}

impl HistoryStore {
    pub fn new() -> HistoryStore {
        HistoryStore::default()
    }

    pub fn get(&self, id: WindowId) -> Option<&ActionRecord> {
        self.records.get(&id)
    }

    pub fn record(&mut self, id: WindowId, requested: Action, result: &RectResult) {
        if !result.is_handled() {
            return;
        }
        let action = result.resulting_action.unwrap_or(requested);
        let count = match self.records.get(&id) {
            Some(previous) if previous.action == action => previous.count + 1,
            _ => 1,
        };
        self.records.insert(
            id,
            ActionRecord {
                action,
                sub_action: result.sub_action,
                rect: result.rect,
                count,
            },
        );
    }

    pub fn forget(&mut self, id: WindowId) {
        self.records.remove(&id);
    }
}
