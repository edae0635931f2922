use raylib::prelude::*;

use crate::constants::SWIPE_THRESHOLD;
use crate::layout::{self, Layout};

/// A navigation request, whichever surface it came from. All surfaces
/// funnel into the same carousel transitions, so ordering between them
/// needs no guarantee beyond the frame loop's own serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    GoTo(usize),
}

/// Maps a pressed key to a command while the carousel region is the active
/// surface. Only the arrow keys mean anything; other keys are left alone.
pub fn command_for_key(key: KeyboardKey) -> Option<Command> {
    match key {
        KeyboardKey::KEY_LEFT => Some(Command::Retreat),
        KeyboardKey::KEY_RIGHT => Some(Command::Advance),
        _ => None,
    }
}

/// Resolves a tap (a release without enough travel to swipe) against the
/// interactive zones: edge arrows first, then pagination dots.
pub fn command_for_tap(layout: &Layout, point: Vector2) -> Option<Command> {
    if layout::point_in(&layout.left_arrow, point) {
        return Some(Command::Retreat);
    }
    if layout::point_in(&layout.right_arrow, point) {
        return Some(Command::Advance);
    }
    layout.dot_at(point).map(Command::GoTo)
}

/// Tracks one horizontal drag gesture from press to release. The start
/// coordinate is owned state, consumed when the gesture resolves, so a
/// half-finished gesture can never leak into the next one.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Resolves the gesture. A drag of more than the threshold in either
    /// direction is a swipe; shorter travel is a tap and yields nothing.
    pub fn end(&mut self, x: f32) -> Option<Command> {
        let start = self.start_x.take()?;
        let distance = start - x;
        if distance > SWIPE_THRESHOLD {
            Some(Command::Advance)
        } else if distance < -SWIPE_THRESHOLD {
            Some(Command::Retreat)
        } else {
            None
        }
    }
}
