use raylib::prelude::*;

use crate::constants::*;

/// Screen-space placement of the carousel's zones, recomputed every frame
/// from the current window size so the window stays freely resizable.
#[derive(Debug, Clone)]
pub struct Layout {
    pub stage: Rectangle,
    pub left_arrow: Rectangle,
    pub right_arrow: Rectangle,
    pub caption: Rectangle,
    pub dots: Vec<Rectangle>,
    pub skip_link: Rectangle,
}

impl Layout {
    pub fn compute(screen_w: f32, screen_h: f32, slide_count: usize) -> Self {
        let stage_h = (screen_h - CAPTION_BAR_HEIGHT - DOT_BAR_HEIGHT).max(0.0);
        let stage = Rectangle::new(0.0, 0.0, screen_w, stage_h);

        // Full-height activation strips hugging the stage edges, like the
        // edge buttons they stand in for.
        let left_arrow = Rectangle::new(0.0, 0.0, ARROW_ZONE_WIDTH, stage_h);
        let right_arrow = Rectangle::new(screen_w - ARROW_ZONE_WIDTH, 0.0, ARROW_ZONE_WIDTH, stage_h);

        let caption = Rectangle::new(0.0, stage_h, screen_w, CAPTION_BAR_HEIGHT);

        // One hit zone per slide, centered under the caption strip.
        let dots_y = stage_h + CAPTION_BAR_HEIGHT;
        let dots_start_x = (screen_w - slide_count as f32 * DOT_SPACING) / 2.0;
        let dots = (0..slide_count)
            .map(|i| {
                Rectangle::new(
                    dots_start_x + i as f32 * DOT_SPACING,
                    dots_y,
                    DOT_SPACING,
                    DOT_BAR_HEIGHT,
                )
            })
            .collect();

        let skip_link = Rectangle::new(0.0, 0.0, screen_w, SKIP_LINK_HEIGHT);

        Self {
            stage,
            left_arrow,
            right_arrow,
            caption,
            dots,
            skip_link,
        }
    }

    pub fn dot_at(&self, point: Vector2) -> Option<usize> {
        self.dots.iter().position(|dot| point_in(dot, point))
    }
}

pub fn point_in(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_partition_the_window_height() {
        let layout = Layout::compute(1280.0, 720.0, 5);

        assert_eq!(layout.stage.height, 720.0 - CAPTION_BAR_HEIGHT - DOT_BAR_HEIGHT);
        assert_eq!(layout.caption.y, layout.stage.height);
        assert_eq!(layout.dots[0].y, layout.stage.height + CAPTION_BAR_HEIGHT);
        assert_eq!(layout.dots.len(), 5);
    }

    #[test]
    fn arrows_hug_the_stage_edges() {
        let layout = Layout::compute(1280.0, 720.0, 3);

        assert_eq!(layout.left_arrow.x, 0.0);
        assert_eq!(layout.right_arrow.x, 1280.0 - ARROW_ZONE_WIDTH);
        assert_eq!(layout.left_arrow.height, layout.stage.height);
    }

    #[test]
    fn dots_are_centered_and_hit_testable() {
        let layout = Layout::compute(1000.0, 700.0, 4);

        let strip_width = 4.0 * DOT_SPACING;
        assert_eq!(layout.dots[0].x, (1000.0 - strip_width) / 2.0);

        let inside_third = Vector2::new(
            layout.dots[2].x + DOT_SPACING / 2.0,
            layout.dots[2].y + DOT_BAR_HEIGHT / 2.0,
        );
        assert_eq!(layout.dot_at(inside_third), Some(2));
        assert_eq!(layout.dot_at(Vector2::new(0.0, 0.0)), None);
    }

    #[test]
    fn point_in_is_inclusive_of_edges() {
        let rect = Rectangle::new(10.0, 10.0, 20.0, 20.0);
        assert!(point_in(&rect, Vector2::new(10.0, 10.0)));
        assert!(point_in(&rect, Vector2::new(30.0, 30.0)));
        assert!(!point_in(&rect, Vector2::new(30.1, 30.0)));
    }
}
