use raylib::prelude::*;
use tracing::{debug, error, warn};

use crate::autoplay::Autoplay;
use crate::carousel::{Carousel, CarouselError};
use crate::constants::WINDOW_TITLE;
use crate::draw;
use crate::input::{self, Command, SwipeTracker};
use crate::layout::{self, Layout};
use crate::skip_link::{FocusTarget, SkipLink};
use crate::transition::{Direction, Transition};
use crate::view::{self, Hover};

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Hold the auto-advance timer while the pointer is over the stage.
    /// Off by default; resuming continues the same period.
    pub pause_on_hover: bool,
}

/// The hosting shell: owns the carousel, the auto-advance driver and the
/// gesture tracker, gathers raylib events into commands, and projects the
/// state into frames. Everything here lives exactly as long as the shell,
/// so neither the driver nor the listeners can outlive it.
pub struct App {
    carousel: Carousel,
    autoplay: Autoplay,
    swipe: SwipeTracker,
    transition: Transition,
    focus: FocusTarget,
    skip_link: SkipLink,
    options: Options,
    window_title: String,
}

impl App {
    pub fn new(carousel: Carousel, autoplay: Autoplay, options: Options) -> Self {
        Self {
            carousel,
            autoplay,
            swipe: SwipeTracker::default(),
            transition: Transition::default(),
            focus: FocusTarget::default(),
            skip_link: SkipLink::default(),
            options,
            window_title: String::new(),
        }
    }

    /// Applies one navigation command to the live carousel state and, when
    /// the active slide changed, starts the strip animation.
    fn apply(&mut self, command: Command) -> Result<(), CarouselError> {
        let from = self.carousel.current_index();
        match command {
            Command::Advance => self.carousel.advance(),
            Command::Retreat => self.carousel.retreat(),
            Command::GoTo(index) => self.carousel.go_to(index)?,
        }

        let to = self.carousel.current_index();
        if to != from {
            let direction = match command {
                Command::Advance => Direction::Forward,
                Command::Retreat => Direction::Backward,
                Command::GoTo(_) => {
                    if to > from {
                        Direction::Forward
                    } else {
                        Direction::Backward
                    }
                }
            };
            self.transition.begin(from, direction);
        }
        Ok(())
    }

    /// One simulation step without rendering: commands, hover pause, the
    /// auto-advance tick and the animation clock.
    fn step(&mut self, dt: f32, commands: Vec<Command>, stage_hovered: bool) {
        // Manual navigation never resets the timer phase; a rejected
        // command leaves the state untouched.
        for command in commands {
            if let Err(e) = self.apply(command) {
                warn!("navigation rejected: {e}");
            }
        }

        if self.options.pause_on_hover {
            if stage_hovered {
                self.autoplay.pause();
            } else {
                self.autoplay.resume();
            }
        }

        if self.autoplay.tick(dt) {
            // Reported once, then the driver stops: a transition that
            // failed once would fail every period after it.
            if let Err(e) = self.apply(Command::Advance) {
                error!("auto-advance failed: {e}; stopping the timer");
                self.autoplay.stop();
            }
        }

        self.transition.update(dt);
    }

    pub fn run(mut self, rl: &mut RaylibHandle, thread: &RaylibThread, textures: Vec<Texture2D>) {
        while !rl.window_should_close() {
            let dt = rl.get_frame_time();
            let screen_w = rl.get_screen_width() as f32;
            let screen_h = rl.get_screen_height() as f32;
            let layout = Layout::compute(screen_w, screen_h, self.carousel.len());
            let mouse = rl.get_mouse_position();

            // --- Focus handling ---
            if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
                self.focus = self.focus.toggled();
            }
            if self.focus == FocusTarget::SkipLink
                && rl.is_key_pressed(KeyboardKey::KEY_ENTER)
            {
                // The skip link's one activation: land on the carousel.
                debug!(landmark = %self.skip_link.target, "skip link activated");
                self.focus = FocusTarget::Carousel;
            }

            // --- Gather navigation commands ---
            let mut commands = Vec::new();
            while let Some(key) = rl.get_key_pressed() {
                if self.focus == FocusTarget::Carousel {
                    if let Some(command) = input::command_for_key(key) {
                        commands.push(command);
                    }
                }
            }

            if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                self.swipe.begin(mouse.x);
            }
            if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
                match self.swipe.end(mouse.x) {
                    Some(command) => commands.push(command),
                    None => {
                        if let Some(command) = input::command_for_tap(&layout, mouse) {
                            commands.push(command);
                        }
                    }
                }
                // Pointer interaction makes the carousel the active surface.
                self.focus = FocusTarget::Carousel;
            }

            let stage_hovered = layout::point_in(&layout.stage, mouse);
            self.step(dt, commands, stage_hovered);

            // --- Window title follows the active slide's title ---
            let title = match self.carousel.current().title.as_deref() {
                Some(t) => format!("{WINDOW_TITLE} - {t}"),
                None => WINDOW_TITLE.to_string(),
            };
            if title != self.window_title {
                rl.set_window_title(thread, &title);
                self.window_title = title;
            }

            // --- Render ---
            let hover = Hover {
                left_arrow: layout::point_in(&layout.left_arrow, mouse),
                right_arrow: layout::point_in(&layout.right_arrow, mouse),
            };
            let frame = view::project(
                &self.carousel,
                self.transition.motion(),
                hover,
                self.focus,
                &self.skip_link,
            );

            let mut d = rl.begin_drawing(thread);
            draw::render(&mut d, &frame, &layout, &textures);
        }
    }
}
