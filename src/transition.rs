use crate::constants::TRANSITION_DURATION;

/// Direction of travel for a slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Rendering snapshot of an in-flight slide change: which slide is leaving,
/// which way the strip moves, and how far along it is (0..=1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: usize,
    pub direction: Direction,
    pub progress: f32,
}

/// Animates the stage between two slides. A new change replaces any
/// in-flight one (a fast series of inputs jump-cuts rather than queueing).
/// Wraparound changes travel one step in the direction of the input, never
/// a long rewind across the whole strip.
#[derive(Debug, Default)]
pub struct Transition {
    active: Option<Active>,
}

#[derive(Debug)]
struct Active {
    from: usize,
    direction: Direction,
    timer: f32,
}

impl Transition {
    pub fn begin(&mut self, from: usize, direction: Direction) {
        self.active = Some(Active {
            from,
            direction,
            timer: 0.0,
        });
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(active) = &mut self.active {
            active.timer += dt;
            if active.timer >= TRANSITION_DURATION {
                self.active = None;
            }
        }
    }

    pub fn motion(&self) -> Option<Motion> {
        self.active.as_ref().map(|active| Motion {
            from: active.from,
            direction: active.direction,
            progress: (active.timer / TRANSITION_DURATION).min(1.0),
        })
    }
}
