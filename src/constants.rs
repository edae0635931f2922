pub const WINDOW_WIDTH: i32 = 1280;           // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;           // Initial window height
pub const WINDOW_TITLE: &str = "Photo Carousel";
pub const FPS: u32 = 60;                      // Frames per second

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Horizontal drag (px) that counts as a swipe
pub const TRANSITION_DURATION: f32 = 0.5;     // Duration of the slide change animation (seconds)
pub const DEFAULT_SLIDE_DELAY: f32 = 6.0;     // Auto-advance period (seconds)

pub const ARROW_ZONE_WIDTH: f32 = 64.0;       // Width of the prev/next activation strips
pub const DOT_RADIUS: f32 = 6.0;              // Pagination dot radius
pub const DOT_SPACING: f32 = 28.0;            // Center-to-center pagination dot spacing
pub const DOT_BAR_HEIGHT: f32 = 40.0;         // Height of the pagination strip
pub const CAPTION_BAR_HEIGHT: f32 = 48.0;     // Height of the caption strip below the stage
pub const SKIP_LINK_HEIGHT: f32 = 36.0;       // Height of the skip-link banner when focused
