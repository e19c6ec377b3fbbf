//! Book state and the page-turn state machine.
//!
//! `BookState` owns the sheet plan, the index of the sheet currently shown
//! and the single in-flight transition. A turn is begun by `request_next` /
//! `request_prev` and then advanced one frame at a time by the external
//! frame driver through `advance_frame`; state commits only when the
//! transition settles. Requests that arrive while a turn is in flight, or
//! that would leave the sheet range, are dropped.

use crate::animation::{Corner, CornerGeometry, PeelAnimation, PeelStyle};
use crate::layout::Sheet;
use std::time::Instant;
use tracing::{debug, info};

/// Direction of an in-flight page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::app) enum TurnDirection {
    Forward,
    Backward,
}

/// Per-sheet flags and corner geometry published to the render surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(in crate::app) struct SheetView {
    pub(in crate::app) visible: bool,
    /// Turned past; rendered behind sheets still to come.
    pub(in crate::app) passed: bool,
    pub(in crate::app) turning: Option<TurnDirection>,
    /// Temporarily raised above every other sheet during a backward turn.
    pub(in crate::app) elevated: bool,
    pub(in crate::app) left_curl: CornerGeometry,
    pub(in crate::app) right_curl: CornerGeometry,
}

#[derive(Clone, Copy)]
enum TransitionPhase {
    /// The corner peel is running.
    Peeling,
    /// The peel reached its peak last frame; the next frame zeroes the
    /// geometry and commits the turn, so the peak still gets painted.
    Settling,
}

struct Transition {
    direction: TurnDirection,
    /// Sheet whose corner is peeling.
    sheet: usize,
    /// Value `current` takes at settle.
    target: usize,
    animation: PeelAnimation,
    phase: TransitionPhase,
}

/// What a frame tick did; `Settled` means the turn just committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::app) enum FrameOutcome {
    Idle,
    Running,
    Settled,
}

pub(in crate::app) struct BookState {
    sheets: Vec<Sheet>,
    views: Vec<SheetView>,
    current: usize,
    transition: Option<Transition>,
    front_cover: bool,
    back_cover: bool,
    peel_style: PeelStyle,
}

impl BookState {
    pub(in crate::app) fn new(sheets: Vec<Sheet>, peel_style: PeelStyle) -> Self {
        let views = vec![SheetView::default(); sheets.len()];
        let mut book = BookState {
            sheets,
            views,
            current: 0,
            transition: None,
            front_cover: false,
            back_cover: false,
            peel_style,
        };
        book.refresh_settled_view();
        book
    }

    pub(in crate::app) fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub(in crate::app) fn views(&self) -> &[SheetView] {
        &self.views
    }

    pub(in crate::app) fn current(&self) -> usize {
        self.current
    }

    pub(in crate::app) fn last(&self) -> usize {
        self.sheets.len() - 1
    }

    pub(in crate::app) fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub(in crate::app) fn front_cover(&self) -> bool {
        self.front_cover
    }

    pub(in crate::app) fn back_cover(&self) -> bool {
        self.back_cover
    }

    /// "Go back" is disabled exactly on the front cover.
    pub(in crate::app) fn can_go_backward(&self) -> bool {
        self.current > 0
    }

    /// "Go forward" is disabled exactly on the back cover.
    pub(in crate::app) fn can_go_forward(&self) -> bool {
        self.current < self.last()
    }

    /// Stacking order for rendering; higher draws on top. An elevated sheet
    /// outranks every sheet's base order.
    pub(in crate::app) fn stack_order(&self, idx: usize) -> usize {
        if self.views[idx].elevated {
            self.sheets.len() + 10
        } else {
            self.sheets.len() - idx
        }
    }

    /// The visible sheet that renders on top; what the view should draw.
    pub(in crate::app) fn top_visible_sheet(&self) -> usize {
        self.views
            .iter()
            .enumerate()
            .filter(|(_, view)| view.visible)
            .max_by_key(|(idx, _)| self.stack_order(*idx))
            .map(|(idx, _)| idx)
            .unwrap_or(self.current)
    }

    /// Start a forward turn. Dropped while a turn is in flight or on the
    /// back cover.
    pub(in crate::app) fn request_next(&mut self, now: Instant) -> bool {
        if self.is_animating() || self.current >= self.last() {
            debug!(current = self.current, "Forward turn ignored");
            return false;
        }
        let sheet = self.current;
        let target = self.current + 1;
        // Turning onto the back cover: show the book open while the sheet
        // is mid-air; flags come back at settle.
        if target == self.last() {
            self.front_cover = false;
            self.back_cover = false;
        }
        self.views[sheet].visible = true;
        self.views[sheet].turning = Some(TurnDirection::Forward);
        self.transition = Some(Transition {
            direction: TurnDirection::Forward,
            sheet,
            target,
            animation: PeelAnimation::new(Corner::Right, self.peel_style, now),
            phase: TransitionPhase::Peeling,
        });
        info!(from = sheet, to = target, "Turning forward");
        true
    }

    /// Start a backward turn. Dropped while a turn is in flight or on the
    /// front cover.
    pub(in crate::app) fn request_prev(&mut self, now: Instant) -> bool {
        if self.is_animating() || self.current == 0 {
            debug!(current = self.current, "Backward turn ignored");
            return false;
        }
        let target = self.current - 1;
        let sheet = target;
        if target == 0 {
            self.front_cover = false;
            self.back_cover = false;
        }
        let view = &mut self.views[sheet];
        view.passed = false;
        view.visible = true;
        // Raise above everything so the reverse fold renders on top.
        view.elevated = true;
        view.turning = Some(TurnDirection::Backward);
        self.transition = Some(Transition {
            direction: TurnDirection::Backward,
            sheet,
            target,
            animation: PeelAnimation::new(Corner::Left, self.peel_style, now),
            phase: TransitionPhase::Peeling,
        });
        info!(from = self.current, to = target, "Turning backward");
        true
    }

    /// Advance the in-flight transition by one frame.
    pub(in crate::app) fn advance_frame(&mut self, now: Instant) -> FrameOutcome {
        let Some(transition) = &mut self.transition else {
            return FrameOutcome::Idle;
        };
        match transition.phase {
            TransitionPhase::Peeling => {
                let frame = transition.animation.sample(now);
                let view = &mut self.views[transition.sheet];
                match transition.animation.corner() {
                    Corner::Right => view.right_curl = frame.geometry,
                    Corner::Left => view.left_curl = frame.geometry,
                }
                if frame.finished {
                    transition.phase = TransitionPhase::Settling;
                }
                FrameOutcome::Running
            }
            TransitionPhase::Settling => {
                self.settle();
                FrameOutcome::Settled
            }
        }
    }

    /// Commit the turn: zero geometry, drop the turning marks, move
    /// `current` and recompute visibility, covers and stacking.
    fn settle(&mut self) {
        let Some(transition) = self.transition.take() else {
            return;
        };
        let view = &mut self.views[transition.sheet];
        view.left_curl = CornerGeometry::ZERO;
        view.right_curl = CornerGeometry::ZERO;
        view.turning = None;
        match transition.direction {
            TurnDirection::Forward => view.passed = true,
            TurnDirection::Backward => view.elevated = false,
        }
        self.current = transition.target;
        self.refresh_settled_view();
        info!(sheet = self.current, "Turn settled");
    }

    /// Exactly the current sheet is shown; cover flags follow `current`.
    fn refresh_settled_view(&mut self) {
        let current = self.current;
        for (idx, view) in self.views.iter_mut().enumerate() {
            view.visible = idx == current;
        }
        self.front_cover = current == 0;
        self.back_cover = current == self.last();
    }
}
